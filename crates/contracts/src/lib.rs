pub mod dashboards;
pub mod domain;
pub mod notifications;
pub mod portals;
pub mod reports;
pub mod shared;
pub mod system;
