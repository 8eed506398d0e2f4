//! Phosphor icon resolution for UI toolkits.
//!
//! This crate resolves a symbolic [`Icon`] plus an [`IconStyle`] into the
//! SVG path data of the corresponding embedded resource, then into
//! [`lyon`](https://docs.rs/lyon) vector geometry and fill-colored
//! drawables. Extraction results are memoized per (icon, style) pair, so
//! each resource is parsed at most once per process even under concurrent
//! access.
//!
//! # Getting Started
//!
//! ```ignore
//! use phosphor_icons::{Color, Icon, IconResolver, IconStyle};
//!
//! let resolver = IconResolver::embedded();
//!
//! // Raw path data (cached after the first call)
//! let data = resolver.path_data(Icon::Heart, IconStyle::Regular)?;
//!
//! // Vector geometry, rebuilt per call from the cached data
//! let geometry = resolver.geometry(Icon::Heart, IconStyle::Fill)?;
//!
//! // A fill-colored drawable ready for rendering
//! let drawable = resolver.drawable(Icon::Heart, IconStyle::Fill, Color::RED)?;
//! ```
//!
//! # Custom Bundles
//!
//! The built-in [`EmbeddedBundle`] serves icons compiled into the binary.
//! Any read-only resource store can stand in by implementing [`IconBundle`]:
//!
//! ```ignore
//! use std::sync::Arc;
//! use phosphor_icons::{IconBundle, IconResolver};
//!
//! struct MyBundle;
//!
//! impl IconBundle for MyBundle {
//!     fn get(&self, key: &str) -> Option<&[u8]> {
//!         // look up `key` in your own store
//!         None
//!     }
//! }
//!
//! let resolver = IconResolver::new(Arc::new(MyBundle));
//! ```
//!
//! # Errors
//!
//! Every failure surfaces as a typed [`IconError`]; nothing is swallowed and
//! no partial geometry is ever returned. Failed lookups are not cached, so a
//! missing or malformed resource is retried in full on the next call.

mod bundle;
mod cache;
mod drawable;
mod error;
mod extract;
mod geometry;
mod icon;
mod locator;
mod markup;
mod resolver;
mod style;
mod types;

pub use bundle::{EmbeddedBundle, IconBundle};
pub use cache::PathDataCache;
pub use drawable::IconDrawable;
pub use error::{IconError, IconResult};
pub use extract::{SVG_NAMESPACE, extract_path_data};
pub use geometry::{Geometry, build_geometry};
pub use icon::Icon;
pub use locator::{RESOURCE_EXTENSION, RESOURCE_NAMESPACE, resource_key};
pub use markup::IconRequest;
pub use resolver::IconResolver;
pub use style::IconStyle;
pub use types::{Color, PathData};
