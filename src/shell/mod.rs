// Composition root for the exam_modules bounded context.
//
// Responsibilities
// - Wire the studio API adapter, the view model and the use case handlers into `AppState`.
// - Expose the HTTP router the table widget talks to.
// - Configuration is read by the binary through `shared::config`.

pub mod http;
pub mod state;
