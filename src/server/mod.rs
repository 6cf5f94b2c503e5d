pub mod config;
mod error_response;
mod genre_routes;
mod http_layers;
mod movie_routes;
mod person_routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error_response::ErrorResponse;
pub use http_layers::*;
pub use server::run_server;
