pub mod auth;
pub mod navigation;
pub mod session;
