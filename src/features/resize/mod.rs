pub mod handler;
pub mod processor;

pub use handler::create_resize_router;
