//! 业务逻辑服务层

mod expiry_filter;
mod expiry_service;

pub use expiry_filter::{filter_expiring, DEFAULT_THRESHOLD_DAYS};
pub use expiry_service::ExpiryCheckService;
