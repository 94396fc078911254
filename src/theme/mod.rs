//! Theme configuration and pure style resolution for text categories.
//!
//! A [`Typography`] configuration plus optional per-element
//! [`TextProps`] resolve into concrete CSS values through the functions
//! in this module; [`presets`] holds the built-in themes.

mod schema;
pub use schema::*;

mod deserializers;

mod kinds;
pub use kinds::*;

mod resolve;
pub use resolve::*;

pub mod presets;
pub use presets::{PresetColors, PresetKind, ThemePreset};
