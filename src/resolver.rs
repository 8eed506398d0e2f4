//! The icon resolution pipeline.
//!
//! [`IconResolver`] ties the pieces together: locate the resource key, fetch
//! the bytes from the bundle, extract the path data, memoize it, and build
//! geometry and drawables on top. One long-lived resolver per process is the
//! intended shape, but it is an explicit value rather than ambient global
//! state so tests can construct isolated instances.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::bundle::{EmbeddedBundle, IconBundle};
use crate::cache::PathDataCache;
use crate::drawable::IconDrawable;
use crate::error::{IconError, IconResult};
use crate::extract::extract_path_data;
use crate::geometry::{Geometry, build_geometry};
use crate::icon::Icon;
use crate::locator::resource_key;
use crate::style::IconStyle;
use crate::types::{Color, PathData};

/// Resolves icons into path data, geometry, and drawables.
///
/// Every operation is synchronous and runs to completion on the calling
/// thread; the resolver is safe to share across threads without external
/// locking. Errors propagate as typed results, never as fallback geometry.
///
/// # Example
///
/// ```ignore
/// use phosphor_icons::{Color, Icon, IconResolver, IconStyle};
///
/// let resolver = IconResolver::embedded();
/// let drawable = resolver.drawable(Icon::Heart, IconStyle::Fill, Color::RED)?;
/// ```
pub struct IconResolver {
    bundle: Arc<dyn IconBundle>,
    cache: PathDataCache,
}

impl IconResolver {
    /// Create a resolver over a custom resource bundle.
    pub fn new(bundle: Arc<dyn IconBundle>) -> Self {
        Self {
            bundle,
            cache: PathDataCache::new(),
        }
    }

    /// Create a resolver over the built-in embedded bundle.
    pub fn embedded() -> Self {
        Self::new(Arc::new(EmbeddedBundle::new()))
    }

    /// The resolver's path data cache, exposed for statistics.
    pub fn cache(&self) -> &PathDataCache {
        &self.cache
    }

    /// Get the path data for an icon, extracting it on first access.
    ///
    /// Repeated calls for the same (icon, style) pair return clones of the
    /// same cached value; the locate/read/extract chain runs at most once
    /// per pair for the process lifetime. Failures are not cached.
    pub fn path_data(&self, icon: Icon, style: IconStyle) -> IconResult<PathData> {
        self.cache.get_or_compute(icon, style, || {
            let key = resource_key(icon, style);
            debug!(icon = %icon, style = %style, key = %key, "extracting icon path data");
            let bytes = self
                .bundle
                .get(&key)
                .ok_or(IconError::NotFound { icon, style })?;
            extract_path_data(icon, style, bytes)
        })
    }

    /// Get the vector geometry for an icon.
    ///
    /// Path data comes from the cache; the geometry itself is rebuilt per
    /// call (cheap relative to extraction).
    pub fn geometry(&self, icon: Icon, style: IconStyle) -> IconResult<Geometry> {
        let data = self.path_data(icon, style)?;
        build_geometry(&data)
    }

    /// Get a drawable for an icon: its geometry composed with `fill`.
    pub fn drawable(&self, icon: Icon, style: IconStyle, fill: Color) -> IconResult<IconDrawable> {
        Ok(IconDrawable::new(self.geometry(icon, style)?, fill))
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::embedded()
    }
}

impl fmt::Debug for IconResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
