mod view;
mod view_model;

pub use view::ElevatorDetails;
pub use view_model::ElevatorDetailsViewModel;
