//! Fragment routing.
//!
//! Navigation state lives in a location fragment such as
//! `#/language/python/tags/keywords/def`. An ordered [`RouteTable`] matches
//! fragments against registered patterns and produces typed [`Route`] values;
//! the first matching pattern wins, so registration order is part of the
//! contract. Resolution never panics: anything unmatched comes back as
//! [`GalaxyError::RouteNotMatched`].

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::error::{GalaxyError, Result};

lazy_static! {
    // so the expression doesn't have to be recompiled per segment
    static ref SLUG: Regex = Regex::new(r"^[a-z0-9-]+$").unwrap();
}

/// One position in a pattern.
///
/// `Slug` only admits lowercase ascii letters, digits, and hyphens, which is
/// the shape of every curated top level id. `Free` admits any non-empty
/// segment and exists for author-chosen nested ids like `JSON.parse` or `?.`,
/// which arrive percent-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Lit(&'static str),
    Slug,
    Free,
}

/// Captured segments handed to a route constructor, already percent-decoded.
pub struct Captures(std::vec::IntoIter<String>);

impl Captures {
    fn new(values: Vec<String>) -> Self {
        Self(values.into_iter())
    }
    /// Next capture in pattern order. Empty when exhausted, which a well
    /// formed constructor never observes.
    pub fn take(&mut self) -> String {
        self.0.next().unwrap_or_default()
    }
}

/// Every place the catalog can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Languages,
    Language { language: String },
    LanguageFunctions { language: String },
    LanguageFunction { language: String, function: String },
    LanguageUses { language: String },
    LanguageUse { language: String, use_case: String },
    LanguageTags { language: String },
    LanguageTagGroup { language: String, group: String },
    LanguageTagItem { language: String, group: String, item: String },
    LanguageExamples { language: String },
    Compiler,
    NumberSystems,
    NumberSystem { system: String },
    Converter,
    CodingSchemes,
    CodingScheme { scheme: String },
}

struct Pattern {
    segments: Vec<Segment>,
    build: fn(&mut Captures) -> Route,
}

impl Pattern {
    // Returns the decoded captures when every segment agrees.
    fn matches(&self, segments: &[&str]) -> Option<Vec<String>> {
        if segments.len() != self.segments.len() {
            return None;
        }
        let mut captures = Vec::new();
        for (want, got) in self.segments.iter().zip(segments) {
            match want {
                Segment::Lit(text) => {
                    if got != text {
                        return None;
                    }
                }
                Segment::Slug => {
                    if !SLUG.is_match(got) {
                        return None;
                    }
                    captures.push(decode(got));
                }
                Segment::Free => {
                    if got.is_empty() {
                        return None;
                    }
                    captures.push(decode(got));
                }
            }
        }
        Some(captures)
    }
}

// A capture that fails to decode is kept raw; lookup then misses and the
// not-found view takes over.
fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// The ordered pattern table.
pub struct RouteTable {
    patterns: Vec<Pattern>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// The full production table. Registration order mirrors the page's
    /// navigation map and decides every overlap.
    pub fn standard() -> Self {
        use Segment::{Free, Lit, Slug};
        let mut table = Self::new();
        table.add(vec![], |_| Route::Home);
        table.add(vec![Lit("languages")], |_| Route::Languages);
        table.add(vec![Lit("language"), Slug], |c| Route::Language {
            language: c.take(),
        });
        table.add(vec![Lit("language"), Slug, Lit("functions")], |c| {
            Route::LanguageFunctions { language: c.take() }
        });
        table.add(vec![Lit("language"), Slug, Lit("functions"), Free], |c| {
            Route::LanguageFunction {
                language: c.take(),
                function: c.take(),
            }
        });
        table.add(vec![Lit("language"), Slug, Lit("uses")], |c| {
            Route::LanguageUses { language: c.take() }
        });
        table.add(vec![Lit("language"), Slug, Lit("uses"), Free], |c| {
            Route::LanguageUse {
                language: c.take(),
                use_case: c.take(),
            }
        });
        table.add(vec![Lit("language"), Slug, Lit("tags")], |c| {
            Route::LanguageTags { language: c.take() }
        });
        table.add(vec![Lit("language"), Slug, Lit("tags"), Free], |c| {
            Route::LanguageTagGroup {
                language: c.take(),
                group: c.take(),
            }
        });
        table.add(vec![Lit("language"), Slug, Lit("tags"), Free, Free], |c| {
            Route::LanguageTagItem {
                language: c.take(),
                group: c.take(),
                item: c.take(),
            }
        });
        table.add(vec![Lit("language"), Slug, Lit("examples")], |c| {
            Route::LanguageExamples { language: c.take() }
        });
        table.add(vec![Lit("compiler")], |_| Route::Compiler);
        table.add(vec![Lit("number-systems")], |_| Route::NumberSystems);
        table.add(vec![Lit("number-systems"), Slug], |c| Route::NumberSystem {
            system: c.take(),
        });
        table.add(vec![Lit("converter")], |_| Route::Converter);
        table.add(vec![Lit("coding-schemes")], |_| Route::CodingSchemes);
        table.add(vec![Lit("coding-schemes"), Slug], |c| Route::CodingScheme {
            scheme: c.take(),
        });
        table
    }

    /// Registers a pattern at the end of the table. A pattern that collides
    /// with an earlier one is still registered, first match continues to win,
    /// but the collision is logged so it gets noticed.
    pub fn add(&mut self, segments: Vec<Segment>, build: fn(&mut Captures) -> Route) {
        if let Some(at) = self.shadowed_by(&segments) {
            warn!(
                pattern = %shape(&segments),
                earlier = %shape(&self.patterns[at].segments),
                "pattern overlaps an earlier registration, which wins on shared fragments"
            );
        }
        self.patterns.push(Pattern { segments, build });
    }

    /// Index of the first earlier pattern that also matches some fragment the
    /// given shape matches, if any.
    pub fn shadowed_by(&self, segments: &[Segment]) -> Option<usize> {
        self.patterns
            .iter()
            .position(|earlier| overlapping(&earlier.segments, segments))
    }

    /// Every (earlier, later) index pair in the table that competes for at
    /// least one fragment.
    pub fn shadowed_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (later, pattern) in self.patterns.iter().enumerate() {
            for (earlier, other) in self.patterns.iter().enumerate().take(later) {
                if overlapping(&other.segments, &pattern.segments) {
                    pairs.push((earlier, later));
                }
            }
        }
        pairs
    }

    /// Matches a location fragment against the table, in registration order.
    pub fn resolve(&self, fragment: &str) -> Result<Route> {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let path = if path.is_empty() { "/" } else { path };
        if let Some(segments) = split_path(path) {
            for pattern in &self.patterns {
                if let Some(captures) = pattern.matches(&segments) {
                    return Ok((pattern.build)(&mut Captures::new(captures)));
                }
            }
        }
        Err(GalaxyError::RouteNotMatched {
            fragment: fragment.to_string(),
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

// Splits on '/', requiring a leading slash and tolerating one trailing slash.
// None means the shape is hopeless and nothing can match.
fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    let mut segments: Vec<&str> = rest.split('/').collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    Some(segments)
}

fn overlapping(a: &[Segment], b: &[Segment]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| segments_share(*x, *y))
}

// Whether two segment kinds admit at least one common fragment segment.
fn segments_share(a: Segment, b: Segment) -> bool {
    use Segment::{Free, Lit, Slug};
    match (a, b) {
        (Lit(x), Lit(y)) => x == y,
        (Lit(x), Slug) | (Slug, Lit(x)) => SLUG.is_match(x),
        (Lit(_), Free) | (Free, Lit(_)) => true,
        (Slug, Slug) | (Slug, Free) | (Free, Slug) | (Free, Free) => true,
    }
}

fn shape(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        match segment {
            Segment::Lit(text) => out.push_str(text),
            Segment::Slug => out.push_str("{slug}"),
            Segment::Free => out.push_str("{id}"),
        }
    }
    out
}
