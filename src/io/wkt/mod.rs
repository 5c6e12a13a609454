//! Read and write Well-Known Text through the engine's own reader and writer.

mod reader;
mod writer;

pub use reader::FromWkt;
pub use writer::{ToWkt, WktOptions};
