mod view;
mod view_model;

pub use view::MaintenanceJobDetails;
pub use view_model::MaintenanceJobDetailsViewModel;
