use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

/// Classifies which typographic element a style dimension is being
/// resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    /// Paragraph-level body copy.
    Body,
    /// Headings, levels one through six.
    Heading,
    /// Inline text inside a surrounding block.
    Span,
    /// Inline anchor text. Shares span defaults unless a link-specific
    /// value is provided.
    Link,
}

impl TextKind {
    /// Selects the category-specific value out of the four per-category
    /// defaults. Links reuse the span value when no link-specific value
    /// is given.
    pub fn pick<T>(self, body: T, heading: T, span: T, link: Option<T>) -> T {
        match self {
            Self::Body => body,
            Self::Heading => heading,
            Self::Span => span,
            Self::Link => link.unwrap_or(span),
        }
    }
}

/// Named font-weight tokens.
///
/// Use `css()` to get the value the token resolves to in a style
/// declaration.
#[derive(Assoc, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn css(&self) -> &'static str)]
pub enum FontWeight {
    #[assoc(css = "100")]
    #[serde(rename = "100")]
    Hairline,
    #[assoc(css = "200")]
    #[serde(rename = "200")]
    ExtraLight,
    #[assoc(css = "300")]
    #[serde(rename = "300")]
    Light,
    #[assoc(css = "400")]
    #[serde(rename = "400")]
    Normal,
    #[assoc(css = "500")]
    #[serde(rename = "500")]
    Medium,
    #[assoc(css = "600")]
    #[serde(rename = "600")]
    SemiBold,
    #[assoc(css = "700")]
    #[serde(rename = "700")]
    Bold,
    #[assoc(css = "800")]
    #[serde(rename = "800")]
    ExtraBold,
    #[assoc(css = "900")]
    #[serde(rename = "900")]
    Heavy,
    /// Take the weight from the surrounding element.
    #[assoc(css = "inherit")]
    #[serde(rename = "inherit")]
    Inherit,
}

/// Named font-style tokens.
#[derive(Assoc, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn css(&self) -> &'static str)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[assoc(css = "italic")]
    Italic,
    #[assoc(css = "oblique")]
    Oblique,
    #[assoc(css = "normal")]
    Normal,
    /// Take the style from the surrounding element.
    #[assoc(css = "inherit")]
    Inherit,
}

/// A 1-based position in the six-entry font-size scale, or the inherit
/// sentinel.
///
/// `index()` returns the 0-based scale index, `None` for `Inherit`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn index(&self) -> Option<usize>)]
pub enum Level {
    #[assoc(index = 0)]
    One,
    #[assoc(index = 1)]
    Two,
    #[assoc(index = 2)]
    Three,
    #[assoc(index = 3)]
    Four,
    #[assoc(index = 4)]
    Five,
    #[assoc(index = 5)]
    Six,
    /// Take the size from the surrounding element.
    Inherit,
}
