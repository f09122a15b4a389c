pub mod handler;
pub mod writer;

pub use handler::create_compress_router;
