pub mod app_error;
pub mod rail_client;
pub mod service_filter;
