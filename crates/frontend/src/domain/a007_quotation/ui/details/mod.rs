mod view;
mod view_model;

pub use view::QuotationDetails;
pub use view_model::QuotationDetailsViewModel;
