//! Pure resolution of effective style values.
//!
//! Every function here maps (category, per-element props, configuration)
//! to a CSS-ready value, applying the same precedence chain throughout:
//! explicit prop, then the category's configuration field, then the
//! category default. Spans and links default to inheriting from their
//! surroundings; body and heading defaults come from the configuration.

use super::kinds::{FontStyle, FontWeight, Level, TextKind};
use super::schema::{LineHeight, Typography};

/// Per-element style overrides.
///
/// All fields are optional; a set field always wins over the theme
/// configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps {
    pub color: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub line_height: Option<LineHeight>,
    /// Position in the font-size scale.
    pub level: Option<Level>,
    /// Visual size override for headings ("looks like level N while
    /// semantically tagged as level M"). Ignored by every other
    /// category.
    pub display_level: Option<Level>,
}

impl TextProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    pub fn line_height(mut self, line_height: impl Into<LineHeight>) -> Self {
        self.line_height = Some(line_height.into());
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn display_level(mut self, level: Level) -> Self {
        self.display_level = Some(level);
        self
    }
}

/// Resolves the font-family list for a category, joined into a single
/// CSS value. There is no per-element family override.
pub fn font_family(kind: TextKind, theme: &Typography) -> String {
    kind.pick(
        theme.body_font_family.join(", "),
        theme.heading_font_family.join(", "),
        String::from("inherit"),
        None,
    )
}

/// Resolves the font size for a category by indexing the six-entry
/// scale.
///
/// A `level` of `Inherit` short-circuits everything else. For headings,
/// `display_level` takes priority over `level`; other categories never
/// read it.
pub fn font_size(kind: TextKind, props: &TextProps, theme: &Typography) -> String {
    let default_size = kind.pick(Some(theme.body_size), Some(theme.heading_size), None, None);

    if props.level == Some(Level::Inherit) || (props.level.is_none() && default_size.is_none()) {
        return String::from("inherit");
    }

    if kind == TextKind::Heading {
        if let Some(display_level) = props.display_level {
            return match display_level.index() {
                Some(index) => theme.font_sizes[index].clone(),
                None => String::from("inherit"),
            };
        }
    }

    match props.level.and_then(|level| level.index()) {
        Some(index) => theme.font_sizes[index].clone(),
        None => match default_size {
            Some(size) => theme.font_sizes[usize::from(size) - 1].clone(),
            None => String::from("inherit"),
        },
    }
}

/// Resolves the font weight for a category.
pub fn font_weight(kind: TextKind, props: &TextProps, theme: &Typography) -> String {
    let default_weight = kind.pick(
        theme.body_weight,
        theme.heading_weight,
        FontWeight::Inherit,
        None,
    );

    props.font_weight.unwrap_or(default_weight).css().to_string()
}

/// Resolves the font style for a category.
pub fn font_style(kind: TextKind, props: &TextProps, theme: &Typography) -> String {
    let default_style = kind.pick(
        theme.body_style,
        theme.heading_style,
        FontStyle::Inherit,
        None,
    );

    props.font_style.unwrap_or(default_style).css().to_string()
}

/// Resolves the text color for a category. Spans and links default to
/// `currentcolor`.
pub fn font_color(kind: TextKind, props: &TextProps, theme: &Typography) -> String {
    let default_color = kind.pick(
        theme.body_color.clone(),
        theme.heading_color.clone(),
        String::from("currentcolor"),
        None,
    );

    props.color.clone().unwrap_or(default_color)
}

/// Resolves the line height for a category.
pub fn line_height(kind: TextKind, props: &TextProps, theme: &Typography) -> String {
    let default_line_height = kind.pick(
        theme.body_line_height.to_string(),
        theme.heading_line_height.to_string(),
        String::from("inherit"),
        None,
    );

    match &props.line_height {
        Some(line_height) => line_height.to_string(),
        None => default_line_height,
    }
}

/// Looks up the category's raw extra fragment, empty when none is
/// configured. Links fall back to the span fragment.
pub fn extras(kind: TextKind, theme: &Typography) -> String {
    let extra = &theme.extra;

    kind.pick(
        extra.body.clone(),
        extra.heading.clone(),
        extra.span.clone(),
        extra.link.clone().map(Some),
    )
    .unwrap_or_default()
}

/// One resolved style aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    Color,
    LineHeight,
    Extras,
}

/// Unified entry point over the per-dimension resolvers.
pub fn resolve(dimension: Dimension, kind: TextKind, props: &TextProps, theme: &Typography) -> String {
    match dimension {
        Dimension::FontFamily => font_family(kind, theme),
        Dimension::FontSize => font_size(kind, props, theme),
        Dimension::FontWeight => font_weight(kind, props, theme),
        Dimension::FontStyle => font_style(kind, props, theme),
        Dimension::Color => font_color(kind, props, theme),
        Dimension::LineHeight => line_height(kind, props, theme),
        Dimension::Extras => extras(kind, theme),
    }
}

/// Every resolved style dimension for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub font_style: String,
    pub line_height: String,
    pub extra: String,
}

impl TextStyle {
    pub fn resolve(kind: TextKind, props: &TextProps, theme: &Typography) -> Self {
        Self {
            color: font_color(kind, props, theme),
            font_family: font_family(kind, theme),
            font_size: font_size(kind, props, theme),
            font_weight: font_weight(kind, props, theme),
            font_style: font_style(kind, props, theme),
            line_height: line_height(kind, props, theme),
            extra: extras(kind, theme),
        }
    }

    /// Writes the resolved values as a CSS declaration block, the extra
    /// fragment appended verbatim at the end.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "color: {};\nfont-family: {};\nfont-size: {};\nfont-weight: {};\nfont-style: {};\nline-height: {};\n",
            self.color,
            self.font_family,
            self.font_size,
            self.font_weight,
            self.font_style,
            self.line_height,
        );

        if !self.extra.is_empty() {
            css.push_str(&self.extra);

            if !self.extra.ends_with('\n') {
                css.push('\n');
            }
        }

        css
    }
}
