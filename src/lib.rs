pub mod api_client;
pub mod codegen;
pub mod config;
pub mod logging;
