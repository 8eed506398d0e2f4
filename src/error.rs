//! Error types for icon resolution.

use thiserror::Error;

use crate::icon::Icon;
use crate::style::IconStyle;

/// Errors that can occur while resolving an icon into path data or geometry.
///
/// Errors are never cached: a failed lookup is retried in full on the next
/// call for the same icon and style.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// A style name from a string source (markup, configuration) does not
    /// match any supported style variant.
    #[error("unsupported icon style '{0}'")]
    UnsupportedStyle(String),

    /// An icon name from a string source does not match any known icon.
    #[error("unknown icon '{0}'")]
    UnknownIcon(String),

    /// The resource bundle has no entry for the resolved resource key.
    #[error("icon '{icon}' ({style}) not found in resource bundle")]
    NotFound {
        /// The requested icon.
        icon: Icon,
        /// The requested style variant.
        style: IconStyle,
    },

    /// The bundled resource exists but path data could not be extracted
    /// from it. Indicates a corrupted or malformed SVG document.
    #[error("malformed icon resource for '{icon}' ({style}): {reason}")]
    MalformedResource {
        /// The requested icon.
        icon: Icon,
        /// The requested style variant.
        style: IconStyle,
        /// What went wrong during extraction.
        reason: String,
    },

    /// Extracted path data was rejected by the vector path parser.
    /// Should not happen for well-formed bundled resources.
    #[error("failed to parse icon path data: {reason}")]
    GeometryParse {
        /// The parser's rejection message.
        reason: String,
    },

    /// The lookup chain panicked mid-flight, most likely inside a foreign
    /// [`IconBundle`](crate::bundle::IconBundle) implementation. Reported to
    /// callers that were waiting on the in-flight computation; the key is
    /// left cold and the next call retries in full.
    #[error("icon lookup for '{icon}' ({style}) panicked")]
    LookupPanicked {
        /// The requested icon.
        icon: Icon,
        /// The requested style variant.
        style: IconStyle,
    },
}

/// Result type for icon operations.
pub type IconResult<T> = Result<T, IconError>;
