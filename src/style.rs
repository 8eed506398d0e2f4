//! Icon style variants.

use std::fmt;
use std::str::FromStr;

use crate::error::{IconError, IconResult};

/// The visual weight/fill treatment of an icon.
///
/// Phosphor ships every icon family in five weights. [`IconStyle::Regular`]
/// is the conventional default when a caller does not specify a style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconStyle {
    /// Thinnest strokes, for minimal designs.
    Thin,
    /// Thinner strokes than regular, for a delicate appearance.
    Light,
    /// Standard stroke width (the default style).
    #[default]
    Regular,
    /// Thicker strokes for enhanced visibility.
    Bold,
    /// Solid shapes instead of outlines.
    Fill,
}

impl IconStyle {
    /// Get the lowercase style token used in resource keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            IconStyle::Thin => "thin",
            IconStyle::Light => "light",
            IconStyle::Regular => "regular",
            IconStyle::Bold => "bold",
            IconStyle::Fill => "fill",
        }
    }

    /// All style variants.
    pub fn all() -> &'static [IconStyle] {
        &[
            IconStyle::Thin,
            IconStyle::Light,
            IconStyle::Regular,
            IconStyle::Bold,
            IconStyle::Fill,
        ]
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = IconError;

    /// Parse a lowercase style token.
    ///
    /// Anything outside the closed set fails with
    /// [`IconError::UnsupportedStyle`]. This is the configuration-error class:
    /// it can only be reached from string sources such as markup, never from
    /// typed callers.
    fn from_str(s: &str) -> IconResult<Self> {
        match s {
            "thin" => Ok(IconStyle::Thin),
            "light" => Ok(IconStyle::Light),
            "regular" => Ok(IconStyle::Regular),
            "bold" => Ok(IconStyle::Bold),
            "fill" => Ok(IconStyle::Fill),
            _ => Err(IconError::UnsupportedStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_regular() {
        assert_eq!(IconStyle::default(), IconStyle::Regular);
    }

    #[test]
    fn test_tokens_round_trip() {
        for style in IconStyle::all() {
            assert_eq!(style.as_str().parse::<IconStyle>(), Ok(*style));
        }
    }

    #[test]
    fn test_unknown_token_is_unsupported() {
        assert_eq!(
            "heavy".parse::<IconStyle>(),
            Err(IconError::UnsupportedStyle("heavy".to_string()))
        );
        // Tokens are lowercase; anything else is outside the closed set.
        assert!("Regular".parse::<IconStyle>().is_err());
    }
}
