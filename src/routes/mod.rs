pub mod api;
pub mod cors;

pub use api::create_api_routes;
pub use cors::CorsPolicy;
