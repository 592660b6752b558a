pub mod api_client;
pub mod api_types;
pub mod services;
pub mod testing;
