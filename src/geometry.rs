//! Geometry construction from path data.
//!
//! The path-data mini-language itself is not interpreted here; parsing is
//! delegated to lyon's SVG path parser, which resolves relative commands and
//! shorthand forms itself and feeds a plain path builder, yielding a
//! [`lyon::path::Path`].

use lyon::extra::parser::{ParserOptions, PathParser, Source};
use lyon::path::Path;

use crate::error::{IconError, IconResult};

/// A toolkit-native vector shape parsed from path data.
pub type Geometry = Path;

/// Parse a path-data string into a [`Geometry`].
///
/// Stateless and uncached: geometry is cheap to rebuild relative to the XML
/// extraction that produced the path data. Fails with
/// [`IconError::GeometryParse`] if the parser rejects the string, which for
/// bundled resources indicates corrupted data and is surfaced rather than
/// swallowed.
pub fn build_geometry(data: &str) -> IconResult<Geometry> {
    let mut builder = Path::builder();
    let mut parser = PathParser::new();
    parser
        .parse(
            &ParserOptions::DEFAULT,
            &mut Source::new(data.chars()),
            &mut builder,
        )
        .map_err(|e| IconError::GeometryParse {
            reason: format!("{e:?}"),
        })?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_simple_path() {
        let geometry = build_geometry("M 0 0 L 10 10 Z").unwrap();
        assert!(geometry.iter().next().is_some());
    }

    #[test]
    fn test_accepts_compact_syntax() {
        // No whitespace between command and coordinates, as bundled icons use.
        let geometry = build_geometry("M0 0L10 10").unwrap();
        assert!(geometry.iter().next().is_some());
    }

    #[test]
    fn test_accepts_curves_and_arcs() {
        let data = "M229.66 77.66l-128 128a8 8 0 0 1-11.32 0l-56-56a8 8 0 0 1 11.32-11.32L96 188.69 218.34 66.34a8 8 0 0 1 11.32 11.32Z";
        assert!(build_geometry(data).is_ok());
    }

    #[test]
    fn test_resolves_relative_commands() {
        // The parser resolves relative coordinates before events reach the
        // builder, so `l10 0` from (10, 10) lands at (20, 10).
        let geometry = build_geometry("M10 10l10 0").unwrap();
        let events: Vec<lyon::path::PathEvent> = geometry.iter().collect();
        let line_end = events.iter().find_map(|event| match event {
            lyon::path::PathEvent::Line { to, .. } => Some(*to),
            _ => None,
        });
        assert_eq!(line_end, Some(lyon::math::point(20.0, 10.0)));
    }

    #[test]
    fn test_rejects_garbage() {
        let result = build_geometry("this is not path data");
        assert!(matches!(result, Err(IconError::GeometryParse { .. })));
    }
}
