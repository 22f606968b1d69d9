//! Configuration module for the trail builder
//!
//! This module provides the configuration structure, segment exclusion rules,
//! and the label callback types used when deriving breadcrumb trails.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Root label used when no explicit label is configured
pub const DEFAULT_ROOT_LABEL: &str = "Dashboard";

/// Outcome of a custom segment labeler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentLabel {
    /// Use this text as the label
    Text(String),

    /// Omit the segment from the trail entirely (its href still accumulates)
    Hide,

    /// Apply the default fallback formatting instead
    Fallback,
}

/// Custom per-segment label callback, invoked with the decoded segment
pub type Labeler = Arc<dyn Fn(&str) -> SegmentLabel + Send + Sync>;

/// Rule for dropping segments before trail construction
///
/// An excluded segment never appears in the trail and consumes no position;
/// surrounding entries close the gap.
#[derive(Debug, Clone)]
pub enum ExcludeRule {
    /// Exact string equality against the raw segment
    Exact(String),

    /// Regex test against the raw segment; `None` holds a pattern that
    /// failed to compile and matches nothing
    Pattern(Option<Regex>),
}

impl ExcludeRule {
    /// Create an exact-match rule
    pub fn exact(segment: impl Into<String>) -> Self {
        ExcludeRule::Exact(segment.into())
    }

    /// Create a pattern rule; an invalid pattern matches nothing
    pub fn pattern(pattern: &str) -> Self {
        ExcludeRule::Pattern(Regex::new(pattern).ok())
    }

    /// Test a raw segment against this rule
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            ExcludeRule::Exact(s) => s == segment,
            ExcludeRule::Pattern(Some(re)) => re.is_match(segment),
            ExcludeRule::Pattern(None) => false,
        }
    }
}

impl From<&str> for ExcludeRule {
    fn from(segment: &str) -> Self {
        ExcludeRule::exact(segment)
    }
}

impl From<String> for ExcludeRule {
    fn from(segment: String) -> Self {
        ExcludeRule::Exact(segment)
    }
}

impl From<Regex> for ExcludeRule {
    fn from(re: Regex) -> Self {
        ExcludeRule::Pattern(Some(re))
    }
}

/// How the synthetic root entry is emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootStyle {
    /// Root entry always present with this label. Its href is `base_href`
    /// verbatim, except on a segment-less trail with `base_href == "/"`,
    /// where the root is the current page and the href is omitted.
    Fixed(String),

    /// Root entry emitted with href `"/"` only when a label is configured.
    /// With no label and an otherwise empty trail, a `"Home"` entry linking
    /// to `"/"` is emitted instead.
    Optional(Option<String>),
}

impl Default for RootStyle {
    fn default() -> Self {
        RootStyle::Fixed(DEFAULT_ROOT_LABEL.to_string())
    }
}

/// Configuration for the trail builder
#[derive(Clone)]
pub struct TrailConfig {
    /// Href prefix for the trail; used verbatim for the root entry and
    /// normalized when seeding cumulative child hrefs
    pub base_href: String,

    /// Literal prefix stripped from the input path before parsing; also
    /// seeds the cumulative href when set and not `"/"`
    pub base_path: Option<String>,

    /// Root entry policy
    pub root: RootStyle,

    /// Exact-match label overrides keyed on the raw (undecoded) segment
    pub label_map: HashMap<String, String>,

    /// Segment exclusion rules
    pub exclude: Vec<ExcludeRule>,

    /// Whether to percent-decode segments before labeling
    pub decode: bool,

    /// Custom label callback, second in precedence after `label_map`
    pub labeler: Option<Labeler>,
}

impl fmt::Debug for TrailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrailConfig")
            .field("base_href", &self.base_href)
            .field("base_path", &self.base_path)
            .field("root", &self.root)
            .field("label_map", &self.label_map)
            .field("exclude", &self.exclude)
            .field("decode", &self.decode)
            .field("labeler", &self.labeler.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailConfig {
    /// Create a config with defaults: base href `"/"`, decoding enabled,
    /// a fixed `"Dashboard"` root
    pub fn new() -> Self {
        Self {
            base_href: "/".to_string(),
            base_path: None,
            root: RootStyle::default(),
            label_map: HashMap::new(),
            exclude: Vec::new(),
            decode: true,
            labeler: None,
        }
    }

    /// Create a config for location-derived trails: root only when labeled,
    /// `"Home"` fallback on an empty trail
    pub fn for_location() -> Self {
        Self {
            root: RootStyle::Optional(None),
            ..Self::new()
        }
    }

    /// Set the base href (builder pattern)
    pub fn with_base_href(mut self, base_href: impl Into<String>) -> Self {
        self.base_href = base_href.into();
        self
    }

    /// Set the stripped base path (builder pattern)
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Set the root label, keeping the current root style (builder pattern)
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root = match self.root {
            RootStyle::Fixed(_) => RootStyle::Fixed(label.into()),
            RootStyle::Optional(_) => RootStyle::Optional(Some(label.into())),
        };
        self
    }

    /// Set the root style directly (builder pattern)
    pub fn with_root(mut self, root: RootStyle) -> Self {
        self.root = root;
        self
    }

    /// Add a single label override keyed on the raw segment (builder pattern)
    pub fn with_label(mut self, segment: impl Into<String>, label: impl Into<String>) -> Self {
        self.label_map.insert(segment.into(), label.into());
        self
    }

    /// Replace the label override map (builder pattern)
    pub fn with_label_map(mut self, label_map: HashMap<String, String>) -> Self {
        self.label_map = label_map;
        self
    }

    /// Add one exclusion rule (builder pattern)
    pub fn with_exclude(mut self, rule: impl Into<ExcludeRule>) -> Self {
        self.exclude.push(rule.into());
        self
    }

    /// Replace the exclusion rules (builder pattern)
    pub fn with_exclude_rules(mut self, rules: Vec<ExcludeRule>) -> Self {
        self.exclude = rules;
        self
    }

    /// Enable or disable percent-decoding (builder pattern)
    pub fn with_decode(mut self, decode: bool) -> Self {
        self.decode = decode;
        self
    }

    /// Set the custom label callback (builder pattern)
    pub fn with_labeler<F>(mut self, labeler: F) -> Self
    where
        F: Fn(&str) -> SegmentLabel + Send + Sync + 'static,
    {
        self.labeler = Some(Arc::new(labeler));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = TrailConfig::new()
            .with_base_href("/admin")
            .with_root_label("Console")
            .with_label("new", "Create")
            .with_exclude("_private")
            .with_decode(false);

        assert_eq!(config.base_href, "/admin");
        assert_eq!(config.root, RootStyle::Fixed("Console".to_string()));
        assert_eq!(config.label_map.get("new").map(String::as_str), Some("Create"));
        assert_eq!(config.exclude.len(), 1);
        assert!(!config.decode);
    }

    #[test]
    fn test_defaults() {
        let config = TrailConfig::new();
        assert_eq!(config.base_href, "/");
        assert!(config.decode);
        assert_eq!(config.root, RootStyle::Fixed(DEFAULT_ROOT_LABEL.to_string()));
        assert!(config.base_path.is_none());
        assert!(config.labeler.is_none());
    }

    #[test]
    fn test_location_config_root_label() {
        let config = TrailConfig::for_location();
        assert_eq!(config.root, RootStyle::Optional(None));

        let labeled = TrailConfig::for_location().with_root_label("Home");
        assert_eq!(labeled.root, RootStyle::Optional(Some("Home".to_string())));
    }

    #[test]
    fn test_exclude_exact_match() {
        let rule = ExcludeRule::exact("_internal");
        assert!(rule.matches("_internal"));
        assert!(!rule.matches("_internal2"));
        assert!(!rule.matches("internal"));
    }

    #[test]
    fn test_exclude_pattern_match() {
        let rule = ExcludeRule::pattern("^_");
        assert!(rule.matches("_private"));
        assert!(!rule.matches("public"));
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let rule = ExcludeRule::pattern("([");
        assert!(!rule.matches("anything"));
        assert!(!rule.matches("(["));
    }
}
