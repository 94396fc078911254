pub mod theme;

mod utils;
pub use utils::{ColorError, Rgba, blend, hex_to_rgba, parse_color};
