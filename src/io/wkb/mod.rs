//! Read and write Well-Known Binary through the engine's own reader and writer.

mod reader;
mod writer;

pub use reader::FromWkb;
pub use writer::ToWkb;
