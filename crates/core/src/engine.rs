//! Trail derivation engine
//!
//! This module provides segment parsing, label formatting, and the trail
//! builder that turns a raw path string into an ordered breadcrumb trail.
//! The builder never fails: malformed percent-encoding, invalid exclusion
//! patterns, and label callbacks degrade to defined fallbacks.

use crate::config::{ExcludeRule, RootStyle, SegmentLabel, TrailConfig};
use crate::models::BreadcrumbEntry;
use percent_encoding::percent_decode_str;

/// Label of the fallback entry emitted when an optional-root trail is empty
pub const HOME_LABEL: &str = "Home";

/// Split a raw path into ordered, non-empty segments
///
/// Runs of `/` anywhere in the path collapse away because empty tokens are
/// dropped, so a leading slash is optional and trailing or doubled slashes
/// are tolerated. Segments matching any exclusion rule are removed and do
/// not consume a position. No decoding or case normalization happens here.
pub fn split_segments(path: &str, exclude: &[ExcludeRule]) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .filter(|s| !exclude.iter().any(|rule| rule.matches(s)))
        .map(str::to_string)
        .collect()
}

/// Percent-decode a segment, keeping the raw text when decoding fails
fn decode_segment(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

/// Default label formatting: runs of `-`/`_` become one space, then the
/// first character of each whitespace-delimited word is uppercased
///
/// Only the first character per word is forced uppercase; the rest of the
/// word is left untouched, so `"NEWITEM"` stays `"NEWITEM"`.
pub fn fallback_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch == '-' || ch == '_' {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
            at_word_start = true;
        }
        if ch.is_whitespace() {
            out.push(ch);
            at_word_start = true;
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
        }
    }
    if pending_space {
        out.push(' ');
    }

    out
}

/// Format one raw segment into its display label
///
/// Precedence: exact `label_map` hit on the raw (undecoded) segment, then
/// the custom labeler applied to the decoded segment, then the default
/// fallback formatting. Returns `None` when the labeler hides the segment.
pub fn format_label(segment: &str, config: &TrailConfig) -> Option<String> {
    if let Some(label) = config.label_map.get(segment) {
        return Some(label.clone());
    }

    let decoded = if config.decode {
        decode_segment(segment)
    } else {
        segment.to_string()
    };

    if let Some(labeler) = &config.labeler {
        return match labeler(&decoded) {
            SegmentLabel::Text(label) => Some(label),
            SegmentLabel::Hide => None,
            SegmentLabel::Fallback => Some(fallback_label(&decoded)),
        };
    }

    Some(fallback_label(&decoded))
}

/// Collapse runs of `/` into a single slash
fn collapse_slashes(href: &str) -> String {
    let mut out = String::with_capacity(href.len());
    let mut prev_slash = false;
    for ch in href.chars() {
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(ch);
    }
    out
}

/// Capability supplying the current path string
///
/// The application injects its own source (a router binding, a stored
/// location, a test fixture) instead of the library discovering one at
/// runtime. Any `Fn() -> String` closure qualifies.
pub trait PathSource {
    /// Return the current path
    fn current_path(&self) -> String;
}

impl<F> PathSource for F
where
    F: Fn() -> String,
{
    fn current_path(&self) -> String {
        self()
    }
}

/// Builder turning path strings into breadcrumb trails
///
/// One engine serves both flavors of trail: path-first trails with an
/// always-present root (the default [`TrailConfig::new`]) and
/// location-derived trails with an optional root and `"Home"` fallback
/// ([`TrailConfig::for_location`]).
#[derive(Debug, Clone, Default)]
pub struct TrailBuilder {
    config: TrailConfig,
}

impl TrailBuilder {
    /// Create a builder with the given configuration
    pub fn new(config: TrailConfig) -> Self {
        Self { config }
    }

    /// Access the configuration
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Build a breadcrumb trail for the given path
    ///
    /// The output is recomputed deterministically from the inputs on every
    /// call; repeated invocation with identical arguments yields equal
    /// trails.
    pub fn build(&self, path: &str) -> Vec<BreadcrumbEntry> {
        let config = &self.config;

        // Strip a literal base path prefix; a non-prefix base path is ignored
        let mut path = path;
        if let Some(base_path) = config.base_path.as_deref() {
            if !base_path.is_empty() && path.starts_with(base_path) {
                let rest = &path[base_path.len()..];
                path = if rest.is_empty() { "/" } else { rest };
            }
        }

        let segments = split_segments(path, &config.exclude);
        let mut items = Vec::new();

        match &config.root {
            RootStyle::Fixed(label) => {
                if segments.is_empty() {
                    // Root is the current page; its href survives only when
                    // the trail is anchored somewhere other than "/"
                    if config.base_href == "/" {
                        items.push(BreadcrumbEntry::current(label.clone()));
                    } else {
                        items.push(BreadcrumbEntry::new(label.clone(), config.base_href.clone()));
                    }
                    return items;
                }
                items.push(BreadcrumbEntry::new(label.clone(), config.base_href.clone()));
            }
            RootStyle::Optional(Some(label)) => {
                items.push(BreadcrumbEntry::new(label.clone(), "/"));
            }
            RootStyle::Optional(None) => {}
        }

        let mut href = self.seed_href();
        let last = segments.len().saturating_sub(1);

        for (i, segment) in segments.iter().enumerate() {
            href.push('/');
            href.push_str(segment);
            href = collapse_slashes(&href);

            // A hidden segment still advances the accumulator so sibling
            // hrefs stay correct
            let Some(label) = format_label(segment, config) else {
                continue;
            };

            if i == last {
                items.push(BreadcrumbEntry::current(label));
            } else {
                items.push(BreadcrumbEntry {
                    label,
                    href: Some(href.clone()),
                });
            }
        }

        if matches!(config.root, RootStyle::Optional(None)) && items.is_empty() {
            items.push(BreadcrumbEntry::new(HOME_LABEL, "/"));
        }

        items
    }

    /// Build a trail from an injected path source
    pub fn build_from<S>(&self, source: &S) -> Vec<BreadcrumbEntry>
    where
        S: PathSource + ?Sized,
    {
        self.build(&source.current_path())
    }

    /// Seed for the cumulative child href accumulator
    fn seed_href(&self) -> String {
        match self.config.base_path.as_deref() {
            Some(base_path) if base_path != "/" => base_path.trim_end_matches('/').to_string(),
            Some(_) => String::new(),
            None => {
                let trimmed = self.config.base_href.trim_end_matches('/');
                if trimmed.starts_with('/') {
                    trimmed.to_string()
                } else {
                    format!("/{trimmed}")
                }
            }
        }
    }
}

/// Build a trail with a one-off configuration
pub fn build_trail(path: &str, config: &TrailConfig) -> Vec<BreadcrumbEntry> {
    TrailBuilder::new(config.clone()).build(path)
}
