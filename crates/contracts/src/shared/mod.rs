pub mod config;
pub mod dates;
pub mod http;
pub mod load_guard;
pub mod metrics;
