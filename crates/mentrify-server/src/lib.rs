pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use routes::{create_router, AppState};
