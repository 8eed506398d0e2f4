//! Resource key derivation.
//!
//! Maps an (icon, style) pair to the string key under which the resource
//! bundle stores its SVG document. The mapping is a pure function of its
//! inputs: keys are computed per call and never stored.

use crate::icon::Icon;
use crate::style::IconStyle;

/// Namespace prefix shared by all icon resource keys.
pub const RESOURCE_NAMESPACE: &str = "icons";

/// File extension of bundled icon resources.
pub const RESOURCE_EXTENSION: &str = "svg";

/// Derive the resource key for an (icon, style) pair.
///
/// Styles other than regular suffix the file stem with the style token
/// (`icons.bold.arrow-left-bold.svg`); regular is the unsuffixed convention
/// (`icons.regular.arrow-left.svg`).
pub fn resource_key(icon: Icon, style: IconStyle) -> String {
    let name = icon.name();
    let style_token = style.as_str();
    match style {
        IconStyle::Thin | IconStyle::Light | IconStyle::Bold | IconStyle::Fill => format!(
            "{RESOURCE_NAMESPACE}.{style_token}.{name}-{style_token}.{RESOURCE_EXTENSION}"
        ),
        IconStyle::Regular => {
            format!("{RESOURCE_NAMESPACE}.{style_token}.{name}.{RESOURCE_EXTENSION}")
        }
    }
}
