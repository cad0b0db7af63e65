mod view;
mod view_model;

pub use view::TechnicianDetails;
pub use view_model::TechnicianDetailsViewModel;
