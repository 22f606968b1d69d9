//! Data models for breadcrumb trails and structured data
//!
//! This module defines the core data structures used throughout the crate:
//! trail entries produced by the builder, the intermediate crumb shape
//! consumed by the JSON-LD serializer, and the schema.org BreadcrumbList
//! document emitted for search engines.

use serde::{Deserialize, Serialize};

/// The schema.org context URL emitted on every document
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// The schema.org type of the top-level document
pub const BREADCRUMB_LIST_TYPE: &str = "BreadcrumbList";

/// The schema.org type of each list element
pub const LIST_ITEM_TYPE: &str = "ListItem";

/// A single entry in a breadcrumb trail
///
/// The final entry of a trail represents the current page and carries no
/// href; all prior entries carry the cumulative href of their ancestry.
/// An empty label is permitted and is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// Display label for the entry
    pub label: String,

    /// Cumulative href, absent on the current-page entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl BreadcrumbEntry {
    /// Create a linked entry
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// Create a current-page entry (no href)
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    /// Whether this entry marks the current page
    pub fn is_current(&self) -> bool {
        self.href.is_none()
    }
}

/// Intermediate crumb shape consumed by the JSON-LD serializer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonLdBreadcrumb {
    /// Display name for the crumb
    pub name: String,

    /// Optional href, resolved against the configured origin at serialization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl JsonLdBreadcrumb {
    /// Create a crumb with an href
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: Some(href.into()),
        }
    }

    /// Create a crumb without an href
    pub fn unlinked(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: None,
        }
    }
}

/// A single element of a BreadcrumbList document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Always `"ListItem"`
    #[serde(rename = "@type")]
    pub item_type: String,

    /// 1-based position among retained entries
    pub position: usize,

    /// Display name, copied verbatim from the source crumb
    pub name: String,

    /// Absolute URL, present only when href resolution succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl ListItem {
    /// Create a list item at the given 1-based position
    pub fn new(position: usize, name: impl Into<String>, item: Option<String>) -> Self {
        Self {
            item_type: LIST_ITEM_TYPE.to_string(),
            position,
            name: name.into(),
            item,
        }
    }
}

/// A schema.org BreadcrumbList document
///
/// Intended for embedding verbatim as `application/ld+json` content. The
/// document is always safely serializable; see [`crate::jsonld::to_json_string`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbList {
    /// Always `"https://schema.org"`
    #[serde(rename = "@context")]
    pub context: String,

    /// Always `"BreadcrumbList"`
    #[serde(rename = "@type")]
    pub list_type: String,

    /// Retained entries in source order
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

impl BreadcrumbList {
    /// Create a document from its list items
    pub fn new(item_list_element: Vec<ListItem>) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            list_type: BREADCRUMB_LIST_TYPE.to_string(),
            item_list_element,
        }
    }

    /// Create an empty, well-formed document
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.item_list_element.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.item_list_element.is_empty()
    }
}
