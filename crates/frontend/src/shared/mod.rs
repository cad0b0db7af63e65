pub mod api_utils;
pub mod components;
pub mod crud;
pub mod date_utils;
pub mod dialogs;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_load;
pub mod page_standard;
