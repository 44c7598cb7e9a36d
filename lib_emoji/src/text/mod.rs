pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::load;
pub use encoder::export;
