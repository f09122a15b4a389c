pub mod handler;
pub mod renderer;

pub use handler::create_convert_router;
