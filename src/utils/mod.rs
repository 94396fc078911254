mod colors;
pub use colors::*;
