pub mod badge;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::{Badge, StockBadge};
pub use input::Input;
pub use select::{options_of, Select};
pub use textarea::Textarea;
