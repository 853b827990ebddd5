pub mod default_handler;
pub mod routes;

pub use routes::common_routes;
