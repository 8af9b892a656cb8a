pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod password;
pub mod router;
pub mod templates;

pub use error::AppError;
pub use router::{AppState, app_router};
