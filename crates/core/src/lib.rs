//! navcrumbs_core - Core library for breadcrumb navigation
//!
//! This crate derives breadcrumb trails from URL paths and emits schema.org
//! BreadcrumbList structured data for search engines. The core is pure and
//! synchronous: trails are recomputed deterministically from their inputs,
//! and no entry point fails - malformed encoding, invalid exclusion
//! patterns, and unsafe structured-data entries all degrade to defined
//! fallbacks, because a breadcrumb trail must never break page rendering.
//!
//! # Features
//!
//! - **Segment Parsing**: Tolerant splitting of raw paths into segments,
//!   with exact-match and regex exclusion rules.
//! - **Label Formatting**: Override maps, custom label callbacks, percent
//!   decoding, and a word-capitalizing default fallback.
//! - **Trail Building**: Cumulative hrefs with a final current-page entry;
//!   one engine covers path-first and location-derived trails.
//! - **Structured Data**: Sanitized schema.org BreadcrumbList JSON-LD with
//!   origin-resolved absolute URLs, always safely stringifiable.
//!
//! # Example
//!
//! ```rust
//! use navcrumbs_core::{
//!     to_json_ld, to_json_string, trail_to_json_ld, JsonLdOptions, TrailBuilder, TrailConfig,
//! };
//!
//! // Derive a trail
//! let builder = TrailBuilder::new(TrailConfig::new().with_label("new", "Create"));
//! let trail = builder.build("/products/new");
//! assert_eq!(trail.last().unwrap().label, "Create");
//!
//! // Emit structured data
//! let crumbs = trail_to_json_ld(&trail);
//! let doc = to_json_ld(&crumbs, &JsonLdOptions::with_origin("https://shop.example"));
//! let json = to_json_string(&doc);
//! assert!(json.contains("BreadcrumbList"));
//! ```

pub mod config;
pub mod engine;
pub mod jsonld;
pub mod models;

// Re-exports for convenience
pub use config::{
    ExcludeRule, Labeler, RootStyle, SegmentLabel, TrailConfig, DEFAULT_ROOT_LABEL,
};
pub use engine::{
    build_trail, fallback_label, format_label, split_segments, PathSource, TrailBuilder,
    HOME_LABEL,
};
pub use jsonld::{
    json_ld_from_value, to_json_ld, to_json_string, to_json_string_pretty, trail_to_json_ld,
    trail_value_to_json_ld, try_to_json_string, FormatError, JsonLdOptions, DEFAULT_ORIGIN,
};
pub use models::{
    BreadcrumbEntry, BreadcrumbList, JsonLdBreadcrumb, ListItem, BREADCRUMB_LIST_TYPE,
    LIST_ITEM_TYPE, SCHEMA_CONTEXT,
};
