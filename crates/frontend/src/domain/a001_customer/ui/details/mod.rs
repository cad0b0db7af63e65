//! Customer form: `view_model.rs` holds the draft and commands, `view.rs` renders it.

mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsViewModel;
