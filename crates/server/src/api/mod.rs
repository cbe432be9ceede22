pub mod handlers;
pub mod predict;
pub mod routes;

pub use routes::create_router;
