//! Resource bundle access.
//!
//! The bundle is a read-only store of SVG documents indexed by the exact
//! string keys produced by [`resource_key`](crate::locator::resource_key).
//! It is immutable for the process lifetime. The built-in
//! [`EmbeddedBundle`] compiles the `assets/icons` tree into the binary with
//! `include_dir`, so essential icons are always available regardless of the
//! filesystem; tests and host applications can substitute their own
//! [`IconBundle`] implementation.

use include_dir::{Dir, include_dir};

use crate::locator::RESOURCE_NAMESPACE;

/// A read-only provider of raw icon resources.
///
/// Implementations must be immutable for the process lifetime: the
/// resolution cache assumes a key that resolved once resolves to the same
/// bytes forever.
pub trait IconBundle: Send + Sync {
    /// Fetch the raw bytes stored under `key`, or `None` if the bundle
    /// holds no resource under that key.
    fn get(&self, key: &str) -> Option<&[u8]>;
}

/// Icon SVGs compiled into the binary at build time.
static ICON_ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// The built-in bundle of embedded Phosphor icon resources.
///
/// Resources live under `assets/icons/<style>/<stem>.svg` in the source tree
/// and are embedded in the binary's read-only data segment. Lookup translates
/// the dotted resource key (`icons.bold.x-bold.svg`) to its directory path
/// (`bold/x-bold.svg`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundle;

impl EmbeddedBundle {
    /// Create the embedded bundle.
    pub const fn new() -> Self {
        Self
    }

    /// Translate a dotted resource key to its embedded directory path.
    ///
    /// Returns `None` for keys outside the icon namespace.
    fn key_to_path(key: &str) -> Option<String> {
        let rest = key.strip_prefix(RESOURCE_NAMESPACE)?.strip_prefix('.')?;
        let (style, file) = rest.split_once('.')?;
        Some(format!("{style}/{file}"))
    }
}

impl IconBundle for EmbeddedBundle {
    fn get(&self, key: &str) -> Option<&[u8]> {
        let path = Self::key_to_path(key)?;
        ICON_ASSETS.get_file(&path).map(|file| file.contents())
    }
}
