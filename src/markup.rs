//! Declarative-markup adapter.
//!
//! Thin bridge for UI templating layers that describe icons as strings.
//! An [`IconRequest`] parses the icon and style names, applies the
//! conventional defaults (regular style, black fill), and forwards to an
//! [`IconResolver`]. No logic of its own beyond name parsing.

use std::str::FromStr;

use crate::drawable::IconDrawable;
use crate::error::IconResult;
use crate::geometry::Geometry;
use crate::icon::Icon;
use crate::resolver::IconResolver;
use crate::style::IconStyle;
use crate::types::Color;

/// A declarative icon request with defaulted style and fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconRequest {
    icon: Icon,
    style: IconStyle,
    fill: Color,
}

impl IconRequest {
    /// Request an icon with the defaults: regular style, black fill.
    pub fn new(icon: Icon) -> Self {
        Self {
            icon,
            style: IconStyle::Regular,
            fill: Color::BLACK,
        }
    }

    /// Parse a request from a canonical icon name.
    ///
    /// Fails with [`IconError::UnknownIcon`](crate::IconError::UnknownIcon)
    /// for names outside the closed set.
    pub fn parse(name: &str) -> IconResult<Self> {
        Ok(Self::new(Icon::from_name(name)?))
    }

    /// Set the style variant.
    #[must_use]
    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the style variant from its lowercase token.
    ///
    /// Fails with
    /// [`IconError::UnsupportedStyle`](crate::IconError::UnsupportedStyle)
    /// for tokens outside the closed set.
    pub fn with_style_name(mut self, style: &str) -> IconResult<Self> {
        self.style = IconStyle::from_str(style)?;
        Ok(self)
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// The requested icon.
    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// The requested style variant.
    pub fn style(&self) -> IconStyle {
        self.style
    }

    /// The requested fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Resolve the request to vector geometry.
    pub fn geometry(&self, resolver: &IconResolver) -> IconResult<Geometry> {
        resolver.geometry(self.icon, self.style)
    }

    /// Resolve the request to a filled drawable.
    pub fn drawable(&self, resolver: &IconResolver) -> IconResult<IconDrawable> {
        resolver.drawable(self.icon, self.style, self.fill)
    }
}
