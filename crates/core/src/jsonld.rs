//! JSON-LD structured data serializer
//!
//! This module converts crumb sequences into schema.org BreadcrumbList
//! documents, resolving relative hrefs against a configured origin and
//! filtering unsafe or malformed input. Structured data is non-critical
//! metadata: every entry point here degrades instead of failing, and the
//! text emitters substitute an empty well-formed document when
//! serialization itself fails.

use crate::models::{BreadcrumbEntry, BreadcrumbList, JsonLdBreadcrumb, ListItem};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Default origin for resolving relative hrefs
pub const DEFAULT_ORIGIN: &str = "https://example.com";

/// Property names that must never pass through to emitted JSON objects
const UNSAFE_NAMES: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Fallback text emitted when document serialization fails
const EMPTY_DOCUMENT_JSON: &str =
    r#"{"@context":"https://schema.org","@type":"BreadcrumbList","itemListElement":[]}"#;

/// Serialization errors for the strict text emitter
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Options for JSON-LD generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonLdOptions {
    /// Base origin used to resolve relative hrefs into absolute URLs
    pub origin: String,
}

impl Default for JsonLdOptions {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl JsonLdOptions {
    /// Create options with the given origin
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }
}

fn is_unsafe_name(name: &str) -> bool {
    UNSAFE_NAMES.contains(&name)
}

/// Resolve an href against the origin, yielding an absolute URL string
///
/// Any parse or join failure yields `None`; the caller omits the field.
fn resolve_item(href: &str, origin: &str) -> Option<String> {
    let base = Url::parse(origin).ok()?;
    base.join(href).ok().map(|url| url.to_string())
}

/// Convert crumbs into a schema.org BreadcrumbList document
///
/// Entries with a reserved unsafe name are dropped silently; positions are
/// 1-based over the retained entries only. `item` is set iff the href is a
/// non-empty string and resolves against the origin. Names are copied
/// verbatim, empty strings included.
pub fn to_json_ld(crumbs: &[JsonLdBreadcrumb], options: &JsonLdOptions) -> BreadcrumbList {
    let items = crumbs
        .iter()
        .filter(|crumb| !is_unsafe_name(&crumb.name))
        .enumerate()
        .map(|(index, crumb)| {
            let item = crumb
                .href
                .as_deref()
                .filter(|href| !href.is_empty())
                .and_then(|href| resolve_item(href, &options.origin));
            ListItem::new(index + 1, crumb.name.clone(), item)
        })
        .collect();

    BreadcrumbList::new(items)
}

/// Build a BreadcrumbList document from untrusted JSON
///
/// Non-array input yields an empty document. Each element must be an object
/// with a string `name`; anything else is dropped, not reported. `href` is
/// kept only when it is a string.
pub fn json_ld_from_value(value: &Value, options: &JsonLdOptions) -> BreadcrumbList {
    let Some(entries) = value.as_array() else {
        return BreadcrumbList::empty();
    };

    let crumbs: Vec<JsonLdBreadcrumb> = entries
        .iter()
        .filter_map(|entry| {
            let object = entry.as_object()?;
            let name = object.get("name")?.as_str()?;
            let href = object.get("href").and_then(Value::as_str).map(String::from);
            Some(JsonLdBreadcrumb {
                name: name.to_string(),
                href,
            })
        })
        .collect();

    to_json_ld(&crumbs, options)
}

/// Convert trail entries into the serializer's crumb shape
pub fn trail_to_json_ld(items: &[BreadcrumbEntry]) -> Vec<JsonLdBreadcrumb> {
    items
        .iter()
        .map(|item| JsonLdBreadcrumb {
            name: item.label.clone(),
            href: item.href.clone(),
        })
        .collect()
}

/// Convert untrusted JSON trail entries into the serializer's crumb shape
///
/// Non-array input yields an empty list. Entries without a string `label`
/// are dropped; empty-string labels are kept.
pub fn trail_value_to_json_ld(value: &Value) -> Vec<JsonLdBreadcrumb> {
    let Some(entries) = value.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let object = entry.as_object()?;
            let label = object.get("label")?.as_str()?;
            let href = object.get("href").and_then(Value::as_str).map(String::from);
            Some(JsonLdBreadcrumb {
                name: label.to_string(),
                href,
            })
        })
        .collect()
}

/// Serialize a document to compact JSON, failing on serialization errors
pub fn try_to_json_string(document: &BreadcrumbList) -> Result<String, FormatError> {
    Ok(serde_json::to_string(document)?)
}

/// Serialize a document to compact JSON, never failing
///
/// On a serialization error the constant empty document is substituted, so
/// the output is always valid `application/ld+json` content.
pub fn to_json_string(document: &BreadcrumbList) -> String {
    try_to_json_string(document).unwrap_or_else(|_| EMPTY_DOCUMENT_JSON.to_string())
}

/// Serialize a document to pretty-printed JSON, never failing
pub fn to_json_string_pretty(document: &BreadcrumbList) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| EMPTY_DOCUMENT_JSON.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn crumb(name: &str, href: Option<&str>) -> JsonLdBreadcrumb {
        JsonLdBreadcrumb {
            name: name.to_string(),
            href: href.map(String::from),
        }
    }

    #[test]
    fn test_end_to_end_serialization() {
        let doc = to_json_ld(
            &[crumb("Home", Some("/")), crumb("Products", Some("/products"))],
            &JsonLdOptions::default(),
        );

        assert_eq!(doc.item_list_element.len(), 2);
        assert_eq!(doc.item_list_element[0].position, 1);
        assert_eq!(doc.item_list_element[1].position, 2);
        assert_eq!(
            doc.item_list_element[0].item.as_deref(),
            Some("https://example.com/")
        );
        assert_eq!(
            doc.item_list_element[1].item.as_deref(),
            Some("https://example.com/products")
        );
    }

    #[test]
    fn test_unsafe_names_filtered() {
        let doc = to_json_ld(
            &[
                crumb("__proto__", None),
                crumb("Valid", None),
                crumb("constructor", Some("/c")),
                crumb("prototype", None),
            ],
            &JsonLdOptions::default(),
        );

        assert_eq!(doc.item_list_element.len(), 1);
        assert_eq!(doc.item_list_element[0].name, "Valid");
        // Dropped entries do not consume positions
        assert_eq!(doc.item_list_element[0].position, 1);
    }

    #[test]
    fn test_empty_name_kept_verbatim() {
        let doc = to_json_ld(
            &[crumb("", Some("/")), crumb("Products", None)],
            &JsonLdOptions::default(),
        );
        assert_eq!(doc.item_list_element[0].name, "");
        assert_eq!(doc.item_list_element[1].name, "Products");
    }

    #[test]
    fn test_origin_without_scheme_omits_item() {
        let doc = to_json_ld(
            &[crumb("Home", Some("/"))],
            &JsonLdOptions::with_origin("example.com"),
        );
        assert_eq!(doc.item_list_element[0].name, "Home");
        assert_eq!(doc.item_list_element[0].item, None);
    }

    #[test]
    fn test_empty_href_omits_item() {
        let doc = to_json_ld(&[crumb("Home", Some(""))], &JsonLdOptions::default());
        assert_eq!(doc.item_list_element[0].item, None);

        let doc = to_json_ld(&[crumb("Now", None)], &JsonLdOptions::default());
        assert_eq!(doc.item_list_element[0].item, None);
    }

    #[test]
    fn test_query_and_fragment_survive_resolution() {
        let doc = to_json_ld(
            &[
                crumb("Search", Some("/search?q=test")),
                crumb("Section", Some("/page#section")),
            ],
            &JsonLdOptions::default(),
        );
        assert_eq!(
            doc.item_list_element[0].item.as_deref(),
            Some("https://example.com/search?q=test")
        );
        assert_eq!(
            doc.item_list_element[1].item.as_deref(),
            Some("https://example.com/page#section")
        );
    }

    #[test]
    fn test_origin_with_trailing_slash() {
        let doc = to_json_ld(
            &[crumb("Home", Some("/"))],
            &JsonLdOptions::with_origin("https://example.com/"),
        );
        assert_eq!(
            doc.item_list_element[0].item.as_deref(),
            Some("https://example.com/")
        );
    }

    #[test]
    fn test_absolute_href_keeps_its_own_origin() {
        let doc = to_json_ld(
            &[crumb("Ext", Some("https://other.example/x"))],
            &JsonLdOptions::default(),
        );
        assert_eq!(
            doc.item_list_element[0].item.as_deref(),
            Some("https://other.example/x")
        );
    }

    #[test]
    fn test_from_value_rejects_non_array() {
        let options = JsonLdOptions::default();
        assert!(json_ld_from_value(&json!(null), &options).is_empty());
        assert!(json_ld_from_value(&json!("not an array"), &options).is_empty());
        assert!(json_ld_from_value(&json!({}), &options).is_empty());
    }

    #[test]
    fn test_from_value_drops_malformed_entries() {
        let value = json!([
            null,
            "plain string",
            {},
            { "name": 123 },
            { "name": "Valid", "href": 42 },
            { "name": "Linked", "href": "/ok" },
        ]);
        let doc = json_ld_from_value(&value, &JsonLdOptions::default());

        assert_eq!(doc.item_list_element.len(), 2);
        assert_eq!(doc.item_list_element[0].name, "Valid");
        // Non-string href is treated as absent
        assert_eq!(doc.item_list_element[0].item, None);
        assert_eq!(doc.item_list_element[1].name, "Linked");
        assert_eq!(
            doc.item_list_element[1].item.as_deref(),
            Some("https://example.com/ok")
        );
    }

    #[test]
    fn test_trail_adapter() {
        let trail = vec![
            BreadcrumbEntry::new("Home", "/"),
            BreadcrumbEntry::current("Now"),
        ];
        let crumbs = trail_to_json_ld(&trail);

        assert_eq!(crumbs[0], crumb("Home", Some("/")));
        assert_eq!(crumbs[1], crumb("Now", None));
    }

    #[test]
    fn test_trail_value_adapter_filters_non_string_labels() {
        let value = json!([
            { "label": 123, "href": "/" },
            { "label": "Valid", "href": "/valid" },
            { "href": "/no-label" },
            { "label": "", "href": "/empty" },
            null,
        ]);
        let crumbs = trail_value_to_json_ld(&value);

        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0], crumb("Valid", Some("/valid")));
        assert_eq!(crumbs[1], crumb("", Some("/empty")));

        assert!(trail_value_to_json_ld(&json!("nope")).is_empty());
    }

    #[test]
    fn test_to_json_string_shape() {
        let doc = to_json_ld(&[crumb("Home", Some("/"))], &JsonLdOptions::default());
        let text = to_json_string(&doc);

        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["@context"], "https://schema.org");
        assert_eq!(parsed["@type"], "BreadcrumbList");
        assert_eq!(parsed["itemListElement"][0]["position"], 1);
        // The current-page shape never emits a null item
        assert!(!text.contains("null"));
    }

    #[test]
    fn test_empty_document_literal_matches_serializer() {
        let serialized = serde_json::to_string(&BreadcrumbList::empty()).unwrap();
        assert_eq!(serialized, EMPTY_DOCUMENT_JSON);
    }

    #[test]
    fn test_positions_are_monotonic() {
        let crumbs: Vec<JsonLdBreadcrumb> = (0..100)
            .map(|i| JsonLdBreadcrumb::new(format!("Item {i}"), format!("/item-{i}")))
            .collect();
        let doc = to_json_ld(&crumbs, &JsonLdOptions::default());

        for (i, item) in doc.item_list_element.iter().enumerate() {
            assert_eq!(item.position, i + 1);
        }
        assert_eq!(doc.item_list_element[99].position, 100);
    }
}
