mod view;
mod view_model;

pub use view::MaintenanceTemplateDetails;
pub use view_model::MaintenanceTemplateDetailsViewModel;
