//! Built-in theme presets: a palette plus typography overrides, with
//! the highlight shade derived from the background at load time.

use std::{ops::Deref, sync::LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::theme::Typography;
use crate::utils::{ColorError, blend};

/// A named, ready-to-apply theme.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePreset {
    pub name: String,
    pub kind: PresetKind,
    pub colors: PresetColors,
    #[serde(default)]
    pub typography: Typography,
}

/// Whether a preset reads as a light or a dark surface. Drives the
/// direction of the derived highlight shade.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Light,
    Dark,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PresetColors {
    pub foreground: String,
    pub background: String,
}

macro_rules! generate_builtin_presets {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockPreset =
                LazyLockPreset::new(|| ThemePreset::from_string(include_str!($path)).unwrap());
        )+
    };
}

generate_builtin_presets!(
    ["../../themes/light.json", LIGHT],
    ["../../themes/dark.json", DARK],
    ["../../themes/serif.json", SERIF],
    ["../../themes/golden_ratio.json", GOLDEN_RATIO],
    ["../../themes/spacey.json", SPACEY]
);

pub struct LazyLockPreset(LazyLock<ThemePreset>);

impl LazyLockPreset {
    #[inline(always)]
    const fn new(f: fn() -> ThemePreset) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockPreset {
    type Target = ThemePreset;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<ThemePreset> for LazyLockPreset {
    fn as_ref(&self) -> &ThemePreset {
        &self.0
    }
}

impl ThemePreset {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ThemePreset, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    /// Derives the hover/highlight shade from the background: light
    /// presets darken it by 10%, dark presets lighten it by 10%.
    pub fn highlight(&self) -> Result<String, ColorError> {
        let percentage = match self.kind {
            PresetKind::Light => -0.1,
            PresetKind::Dark => 0.1,
        };

        blend(percentage, &self.colors.background, None)
    }

    /// The built-in presets, in display order.
    pub fn builtin() -> IndexMap<&'static str, &'static ThemePreset> {
        IndexMap::from([
            ("light", &*LIGHT),
            ("dark", &*DARK),
            ("serif", &*SERIF),
            ("golden-ratio", &*GOLDEN_RATIO),
            ("spacey", &*SPACEY),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{FontWeight, LineHeight, TextKind, font_family, font_size};
    use crate::theme::{TextProps, font_color};

    #[test]
    fn test_builtin_presets_keep_their_display_order() {
        let presets = ThemePreset::builtin();
        let names: Vec<&str> = presets.keys().copied().collect();

        assert_eq!(names, ["light", "dark", "serif", "golden-ratio", "spacey"]);
    }

    #[test]
    fn test_light_preset_palette() {
        assert_eq!(LIGHT.kind, PresetKind::Light);
        assert_eq!(LIGHT.colors.background, "#ceeaeb");
        assert_eq!(LIGHT.colors.foreground, "#0e425e");
        assert_eq!(
            LIGHT.highlight().unwrap(),
            "#b9d3d4",
            "light presets should darken the background by 10%"
        );
    }

    #[test]
    fn test_dark_preset_palette() {
        assert_eq!(DARK.kind, PresetKind::Dark);
        assert_eq!(
            DARK.highlight().unwrap(),
            "#26556e",
            "dark presets should lighten the background by 10%"
        );
    }

    #[test]
    fn test_preset_typography_merges_against_the_defaults() {
        assert_eq!(LIGHT.typography.body_color, "#0e425e");
        assert_eq!(LIGHT.typography.body_size, 4, "unset fields stay default");
        assert_eq!(LIGHT.typography.heading_weight, FontWeight::Bold);
        assert_eq!(
            LIGHT.typography.extra.heading.as_deref(),
            Some("margin: 1.5em 0 .5em 0;")
        );
    }

    #[test]
    fn test_serif_preset_swaps_both_family_stacks() {
        let family = font_family(TextKind::Body, &SERIF.typography);
        assert_eq!(family, "palatino, times new roman, times, serif");
        assert_eq!(family, font_family(TextKind::Heading, &SERIF.typography));
    }

    #[test]
    fn test_golden_ratio_preset_rescales_the_sizes() {
        let props = TextProps::default();

        assert_eq!(
            font_size(TextKind::Heading, &props, &GOLDEN_RATIO.typography),
            "4.236rem"
        );
        assert_eq!(
            font_size(TextKind::Body, &props, &GOLDEN_RATIO.typography),
            "1rem"
        );
    }

    #[test]
    fn test_spacey_preset_opens_up_the_leading() {
        assert_eq!(SPACEY.typography.body_line_height, LineHeight::Ratio(2.0));
        assert_eq!(
            SPACEY.typography.heading_line_height,
            LineHeight::Ratio(2.0)
        );
    }

    #[test]
    fn test_preset_colors_flow_through_resolution() {
        let props = TextProps::default();

        assert_eq!(
            font_color(TextKind::Body, &props, &DARK.typography),
            "#ceeaeb"
        );
        assert_eq!(
            font_color(TextKind::Heading, &props, &LIGHT.typography),
            "#0e425e"
        );
    }
}
