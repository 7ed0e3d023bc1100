pub mod shared {
    pub mod config;
    pub mod notifications;
}

pub mod modules {
    pub mod exam_modules {
        pub mod core {
            pub mod columns;
            pub mod date_filter;
            pub mod dedupe;
            pub mod flatten;
            pub mod payload;
            pub mod row;
            pub mod row_query;
            pub mod visibility;
        }
        pub mod ports;
        pub mod view_model;
        pub mod use_cases {
            pub mod load_exam_modules {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod toggle_flag {
                pub mod command;
                pub mod handler;
                pub mod pending_write;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod browse_rows {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_service;
                pub mod in_memory_service;
            }
        }
    }
}

pub mod shell;
