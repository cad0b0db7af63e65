mod view;
mod view_model;

pub use view::PartDetails;
pub use view_model::PartDetailsViewModel;
