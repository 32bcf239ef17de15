pub mod block;
pub mod chunk;
pub mod crc32;
pub mod decoder;
mod ext;
pub mod stream;

pub use ext::ReadBytesExt;
