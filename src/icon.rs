//! The closed set of Phosphor icon families.
//!
//! Each [`Icon`] variant names one icon family; the concrete artwork is
//! selected by pairing it with an [`IconStyle`](crate::IconStyle). The set is
//! fixed at build time, which is what makes the unbounded resolution cache
//! safe (see [`PathDataCache`](crate::PathDataCache)).

use std::fmt;

use crate::error::{IconError, IconResult};

/// Declares the icon enum together with its canonical kebab-case names.
///
/// The canonical name is the file stem used by the resource bundle, so the
/// variant-to-name mapping lives in exactly one place.
macro_rules! define_icons {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A Phosphor icon family.
        ///
        /// Pair with an [`IconStyle`](crate::IconStyle) to select concrete
        /// artwork. The canonical name of each variant uses hyphens where a
        /// multi-word name would use spaces (e.g. `ArrowLeft` is
        /// `"arrow-left"`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Icon {
            $(#[doc = concat!("The `", $name, "` icon.")] $variant,)+
        }

        impl Icon {
            /// Get the canonical kebab-case name of this icon.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Icon::$variant => $name,)+
                }
            }

            /// Look up an icon by its canonical kebab-case name.
            ///
            /// Fails with [`IconError::UnknownIcon`] for names outside the
            /// closed set. Used by string-based callers such as the markup
            /// adapter; typed callers never hit this path.
            pub fn from_name(name: &str) -> IconResult<Self> {
                match name {
                    $($name => Ok(Icon::$variant),)+
                    _ => Err(IconError::UnknownIcon(name.to_string())),
                }
            }

            /// All icons in the closed set.
            pub fn all() -> &'static [Icon] {
                &[$(Icon::$variant,)+]
            }
        }
    };
}

define_icons! {
    ArrowDown => "arrow-down",
    ArrowLeft => "arrow-left",
    ArrowRight => "arrow-right",
    ArrowUp => "arrow-up",
    Bell => "bell",
    Calendar => "calendar",
    CaretDown => "caret-down",
    CaretLeft => "caret-left",
    CaretRight => "caret-right",
    CaretUp => "caret-up",
    Check => "check",
    CheckCircle => "check-circle",
    Clock => "clock",
    Copy => "copy",
    Download => "download",
    Eye => "eye",
    File => "file",
    Folder => "folder",
    Gear => "gear",
    Heart => "heart",
    House => "house",
    Info => "info",
    List => "list",
    Lock => "lock",
    MagnifyingGlass => "magnifying-glass",
    Minus => "minus",
    Pencil => "pencil",
    Plus => "plus",
    Star => "star",
    Trash => "trash",
    Upload => "upload",
    User => "user",
    Warning => "warning",
    X => "x",
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_are_kebab_case() {
        for icon in Icon::all() {
            let name = icon.name();
            assert!(!name.is_empty());
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "non-kebab name: {name}"
            );
            assert!(!name.contains('_'));
        }
    }

    #[test]
    fn test_from_name_round_trips() {
        for icon in Icon::all() {
            assert_eq!(Icon::from_name(icon.name()), Ok(*icon));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(
            Icon::from_name("definitely-not-an-icon"),
            Err(IconError::UnknownIcon("definitely-not-an-icon".to_string()))
        );
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Icon::all().iter().map(|i| i.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Icon::all().len());
    }
}
