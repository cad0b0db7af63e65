mod view;
mod view_model;

pub use view::MaintenancePlanDetails;
pub use view_model::MaintenancePlanDetailsViewModel;
