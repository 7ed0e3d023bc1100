// Runtime configuration read from the environment.
//
// Purpose
// - Tell the binary where the studio API lives, which cutoff hides old modules,
//   where to listen, and how many rows a page holds.

use crate::modules::exam_modules::core::date_filter::parse_timestamp;
use crate::modules::exam_modules::core::row_query::DEFAULT_PAGE_SIZE;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use thiserror::Error;

pub const API_BASE_URL: &str = "EXAM_MODULES_API_BASE_URL";
pub const CUTOFF: &str = "EXAM_MODULES_CUTOFF";
pub const BIND_ADDR: &str = "EXAM_MODULES_BIND_ADDR";
pub const PAGE_SIZE: &str = "EXAM_MODULES_PAGE_SIZE";

const DEFAULT_API_BASE_URL: &str = "https://dev-studioapi.code.az/api";
const DEFAULT_CUTOFF: &str = "2024-10-01";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub cutoff: DateTime<Utc>,
    pub bind_addr: SocketAddr,
    pub page_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &'static str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let invalid = |key: &'static str, value: String| ConfigError::Invalid { key, value };

        let api_base_url = read(API_BASE_URL, DEFAULT_API_BASE_URL);

        let raw_cutoff = read(CUTOFF, DEFAULT_CUTOFF);
        let cutoff = parse_timestamp(&raw_cutoff).ok_or_else(|| invalid(CUTOFF, raw_cutoff))?;

        let raw_bind_addr = read(BIND_ADDR, DEFAULT_BIND_ADDR);
        let bind_addr = raw_bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| invalid(BIND_ADDR, raw_bind_addr.clone()))?;

        let raw_page_size = read(PAGE_SIZE, &DEFAULT_PAGE_SIZE.to_string());
        let page_size = raw_page_size
            .parse::<usize>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| invalid(PAGE_SIZE, raw_page_size.clone()))?;

        Ok(Self {
            api_base_url,
            cutoff,
            bind_addr,
            page_size,
        })
    }
}
