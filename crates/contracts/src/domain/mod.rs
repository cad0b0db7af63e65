pub mod a001_customer;
pub mod a002_building;
pub mod a003_elevator;
pub mod a004_technician;
pub mod a005_technician_request;
pub mod a006_contract;
pub mod a007_quotation;
pub mod a008_invoice;
pub mod a009_part;
pub mod a010_maintenance_template;
pub mod a011_maintenance_plan;
pub mod a012_maintenance_job;
pub mod a013_ticket;
pub mod a014_pricing_settings;
pub mod a015_notification;
pub mod common;
