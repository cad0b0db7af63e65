mod view;
mod view_model;

pub use view::BuildingDetails;
pub use view_model::BuildingDetailsViewModel;
