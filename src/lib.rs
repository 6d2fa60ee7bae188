pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod startup;
pub mod state;

pub use config::Config;
pub use error::ServerError;
pub use startup::{build_router, Application};
