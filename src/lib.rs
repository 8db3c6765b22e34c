// Library root for the greeting smoke-test service

pub mod config;
pub mod core;
pub mod middlewares;
pub mod routes;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server;
