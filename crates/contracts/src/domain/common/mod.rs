pub mod form;
pub mod lenient;
pub mod resource;

pub use resource::Resource;
