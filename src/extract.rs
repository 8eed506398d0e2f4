//! Path data extraction from bundled SVG documents.
//!
//! Bundled icons are small namespaced XML documents with a single `path`
//! element directly under the `svg` root. The extractor pulls that element's
//! `d` attribute out verbatim; everything else in the document is ignored.
//!
//! Only single-path icons are supported. If a document ever contains more
//! than one top-level `path`, the first match wins and the rest are silently
//! ignored (known limitation, consistent with the bundled icon convention).

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::{IconError, IconResult};
use crate::icon::Icon;
use crate::style::IconStyle;
use crate::types::PathData;

/// The single recognized XML namespace.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

fn in_svg_namespace(resolution: &ResolveResult<'_>) -> bool {
    match resolution {
        ResolveResult::Bound(Namespace(ns)) => *ns == SVG_NAMESPACE.as_bytes(),
        _ => false,
    }
}

/// Extract the path-data string from a bundled SVG document.
///
/// Decodes `bytes` as UTF-8, parses the document, and returns the `d`
/// attribute of the first `path` element that is a direct child of the `svg`
/// root, both in the SVG namespace. Any structural deviation fails with
/// [`IconError::MalformedResource`] carrying the requested icon and style
/// for diagnostics.
pub fn extract_path_data(icon: Icon, style: IconStyle, bytes: &[u8]) -> IconResult<PathData> {
    let malformed = |reason: String| IconError::MalformedResource {
        icon,
        style,
        reason,
    };

    let text = std::str::from_utf8(bytes)
        .map_err(|e| malformed(format!("resource is not valid UTF-8: {e}")))?;

    let mut reader = NsReader::from_str(text);
    let mut saw_root = false;
    // Depth below the root element; direct children of the root sit at 1.
    let mut depth = 0usize;

    loop {
        let (resolution, event) = reader
            .read_resolved_event()
            .map_err(|e| malformed(format!("invalid XML: {e}")))?;

        match event {
            Event::Start(element) => {
                if !saw_root {
                    require_svg_root(&resolution, &element).map_err(malformed)?;
                    saw_root = true;
                    depth = 1;
                } else {
                    if depth == 1 && is_svg_path(&resolution, &element) {
                        return read_d_attribute(&element, icon, style);
                    }
                    depth += 1;
                }
            }
            Event::Empty(element) => {
                if !saw_root {
                    // A self-closing root has no children, so no path either;
                    // fall through to the missing-path error below.
                    require_svg_root(&resolution, &element).map_err(malformed)?;
                    saw_root = true;
                    break;
                }
                if depth == 1 && is_svg_path(&resolution, &element) {
                    return read_d_attribute(&element, icon, style);
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => break,
            // Declarations, text, comments, processing instructions.
            _ => {}
        }
    }

    if saw_root {
        Err(malformed("no path element under the svg root".to_string()))
    } else {
        Err(malformed("document has no root element".to_string()))
    }
}

fn require_svg_root(
    resolution: &ResolveResult<'_>,
    element: &BytesStart<'_>,
) -> Result<(), String> {
    if element.local_name().as_ref() == b"svg" && in_svg_namespace(resolution) {
        Ok(())
    } else {
        Err(format!(
            "root element is not 'svg' in the {SVG_NAMESPACE} namespace"
        ))
    }
}

fn is_svg_path(resolution: &ResolveResult<'_>, element: &BytesStart<'_>) -> bool {
    element.local_name().as_ref() == b"path" && in_svg_namespace(resolution)
}

/// Read the unqualified `d` attribute of a path element.
fn read_d_attribute(
    element: &BytesStart<'_>,
    icon: Icon,
    style: IconStyle,
) -> IconResult<PathData> {
    let malformed = |reason: String| IconError::MalformedResource {
        icon,
        style,
        reason,
    };

    let attribute = element
        .try_get_attribute("d")
        .map_err(|e| malformed(format!("invalid path attributes: {e}")))?
        .ok_or_else(|| malformed("path element has no 'd' attribute".to_string()))?;
    let value = attribute
        .unescape_value()
        .map_err(|e| malformed(format!("invalid 'd' attribute value: {e}")))?;

    if value.is_empty() {
        return Err(malformed("path element has an empty 'd' attribute".to_string()));
    }

    Ok(PathData::from(value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(bytes: &[u8]) -> IconResult<PathData> {
        extract_path_data(Icon::X, IconStyle::Regular, bytes)
    }

    fn assert_malformed(result: IconResult<PathData>, expected_reason: &str) {
        match result {
            Err(IconError::MalformedResource { icon, style, reason }) => {
                assert_eq!(icon, Icon::X);
                assert_eq!(style, IconStyle::Regular);
                assert!(
                    reason.contains(expected_reason),
                    "reason '{reason}' does not mention '{expected_reason}'"
                );
            }
            other => panic!("expected MalformedResource, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0L10 10"/></svg>"#;
        assert_eq!(extract(doc).unwrap().as_str(), "M0 0L10 10");
    }

    #[test]
    fn test_non_empty_path_element() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M1 2Z"></path></svg>"#;
        assert_eq!(extract(doc).unwrap().as_str(), "M1 2Z");
    }

    #[test]
    fn test_xml_declaration_and_siblings_are_skipped() {
        let doc = br#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256">
    <rect width="256" height="256" fill="none"/>
    <path d="M40 40L216 216"/>
</svg>"#;
        assert_eq!(extract(doc).unwrap().as_str(), "M40 40L216 216");
    }

    #[test]
    fn test_first_path_wins() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg"><path d="first"/><path d="second"/></svg>"#;
        assert_eq!(extract(doc).unwrap().as_str(), "first");
    }

    #[test]
    fn test_nested_path_is_not_a_direct_child() {
        let doc =
            br#"<svg xmlns="http://www.w3.org/2000/svg"><g><path d="M0 0"/></g></svg>"#;
        assert_malformed(extract(doc), "no path element");
    }

    #[test]
    fn test_no_svg_root() {
        let doc = br#"<icon xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></icon>"#;
        assert_malformed(extract(doc), "root element");
    }

    #[test]
    fn test_root_outside_svg_namespace() {
        let doc = br#"<svg><path d="M0 0"/></svg>"#;
        assert_malformed(extract(doc), "root element");
    }

    #[test]
    fn test_path_outside_svg_namespace_is_ignored() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:o="urn:other"><o:path d="M0 0"/></svg>"#;
        assert_malformed(extract(doc), "no path element");
    }

    #[test]
    fn test_svg_root_without_path() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="1" height="1"/></svg>"#;
        assert_malformed(extract(doc), "no path element");
    }

    #[test]
    fn test_self_closing_root() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg"/>"#;
        assert_malformed(extract(doc), "no path element");
    }

    #[test]
    fn test_missing_d_attribute() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg"><path fill="none"/></svg>"#;
        assert_malformed(extract(doc), "no 'd' attribute");
    }

    #[test]
    fn test_empty_d_attribute() {
        let doc = br#"<svg xmlns="http://www.w3.org/2000/svg"><path d=""/></svg>"#;
        assert_malformed(extract(doc), "empty 'd' attribute");
    }

    #[test]
    fn test_empty_document() {
        assert_malformed(extract(b""), "no root element");
    }

    #[test]
    fn test_invalid_utf8() {
        assert_malformed(extract(&[0xFF, 0xFE, 0x00]), "UTF-8");
    }
}
