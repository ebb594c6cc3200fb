//! Hash-fragment router: maps a location to a view and its path parameters.
//!
//! # Design
//! A `RouteTable` is built once from `RouteEntry` values and validated up
//! front: it must end with a catch-all entry, so resolution always yields a
//! view and an unmatched location lands on `View::NotFound` instead of being
//! an unhandled case. Matching is stateless and the first entry wins.
//!
//! Patterns are `/`-separated. A `:name` segment captures any non-empty
//! segment; the pattern `*` captures the whole path as `pathMatch`.
//! Captured values are percent-decoded and always kept as strings.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::RouteError;

/// Pattern that matches every location. Must be the last entry of a table.
pub const CATCH_ALL: &str = "*";

/// Parameter holding the full path captured by the catch-all entry.
pub const CATCH_ALL_PARAM: &str = "pathMatch";

/// Renderable units the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    Category,
    Search,
    NotFound,
}

/// One line of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub pattern: String,
    pub name: String,
    pub view: View,
    /// Whether captured parameters are handed to the view as inputs.
    pub forward_params: bool,
}

impl RouteEntry {
    pub fn new(pattern: &str, name: &str, view: View) -> Self {
        Self {
            pattern: pattern.to_string(),
            name: name.to_string(),
            view,
            forward_params: false,
        }
    }

    pub fn with_props(mut self) -> Self {
        self.forward_params = true;
        self
    }
}

/// Outcome of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub name: String,
    pub view: View,
    /// Every captured parameter, decoded.
    pub params: BTreeMap<String, String>,
    /// The parameters the view receives; empty unless the entry forwards them.
    pub props: BTreeMap<String, String>,
}

impl Resolved {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    Segments(Vec<PatternSegment>),
    CatchAll,
}

impl Pattern {
    fn parse(pattern: &str) -> Result<Self, RouteError> {
        if pattern == CATCH_ALL {
            return Ok(Pattern::CatchAll);
        }
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let rest = pattern.strip_prefix('/').ok_or_else(|| invalid("must start with `/`"))?;
        if rest.is_empty() {
            return Ok(Pattern::Segments(Vec::new()));
        }

        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for raw in rest.split('/') {
            if raw.is_empty() {
                return Err(invalid("empty segment"));
            }
            match raw.strip_prefix(':') {
                Some("") => return Err(invalid("empty parameter name")),
                Some(name) => {
                    if !seen.insert(name) {
                        return Err(invalid("repeated parameter name"));
                    }
                    segments.push(PatternSegment::Param(name.to_string()));
                }
                None => segments.push(PatternSegment::Literal(raw.to_string())),
            }
        }
        Ok(Pattern::Segments(segments))
    }
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    entry: RouteEntry,
    pattern: Pattern,
}

impl CompiledRoute {
    fn captures(&self, path: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
        let pattern = match &self.pattern {
            Pattern::CatchAll => {
                return Some(BTreeMap::from([(CATCH_ALL_PARAM.to_string(), decode(path))]));
            }
            Pattern::Segments(pattern) => pattern,
        };
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, actual) in pattern.iter().zip(segments) {
            match expected {
                PatternSegment::Literal(literal) if literal == actual => {}
                PatternSegment::Literal(_) => return None,
                PatternSegment::Param(_) if actual.is_empty() => return None,
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), decode(actual));
                }
            }
        }
        Some(params)
    }

    fn resolve(&self, params: BTreeMap<String, String>) -> Resolved {
        let props = if self.entry.forward_params {
            params.clone()
        } else {
            BTreeMap::new()
        };
        Resolved {
            name: self.entry.name.clone(),
            view: self.entry.view,
            params,
            props,
        }
    }
}

/// A validated, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    fallback: CompiledRoute,
}

impl RouteTable {
    /// Validate `entries` and compile their patterns.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        let mut compiled = Vec::with_capacity(entries.len());
        for entry in entries {
            if !names.insert(entry.name.clone()) {
                return Err(RouteError::DuplicateName(entry.name));
            }
            let pattern = Pattern::parse(&entry.pattern)?;
            compiled.push(CompiledRoute { entry, pattern });
        }

        let fallback = compiled.pop().ok_or(RouteError::EmptyTable)?;
        if fallback.pattern != Pattern::CatchAll {
            return Err(RouteError::MissingCatchAll);
        }
        if let Some(early) = compiled.iter().find(|r| r.pattern == Pattern::CatchAll) {
            return Err(RouteError::CatchAllNotLast {
                name: early.entry.name.clone(),
            });
        }

        Ok(Self {
            routes: compiled,
            fallback,
        })
    }

    /// The routes of the news browser.
    pub fn news() -> Result<Self, RouteError> {
        Self::new(vec![
            RouteEntry::new("/", "home", View::Home),
            RouteEntry::new("/category/:id", "category", View::Category).with_props(),
            RouteEntry::new("/search/:queryText", "SearchPage", View::Search).with_props(),
            RouteEntry::new(CATCH_ALL, "not-found", View::NotFound).with_props(),
        ])
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().chain(Some(&self.fallback)).map(|r| &r.entry)
    }

    /// Resolve a route path such as `/category/42`.
    ///
    /// A query string is ignored and a trailing `/` is not significant.
    pub fn resolve(&self, path: &str) -> Resolved {
        let path = normalize(path);
        let segments = split_segments(&path);

        let resolved = self
            .routes
            .iter()
            .find_map(|route| route.captures(&path, &segments).map(|params| route.resolve(params)))
            .unwrap_or_else(|| {
                let params = self.fallback.captures(&path, &segments).unwrap_or_default();
                self.fallback.resolve(params)
            });

        debug!(path = %path, route = %resolved.name, view = ?resolved.view, "resolved location");
        resolved
    }

    /// Resolve a browser location, reading the route from its hash fragment.
    ///
    /// Accepts `#/category/42`, `http://host/#/category/42` or a bare route
    /// path. A URL without a fragment resolves as `/`.
    pub fn resolve_location(&self, location: &str) -> Resolved {
        self.resolve(fragment(location))
    }

    /// Build the hash location of a named route, encoding each parameter.
    pub fn href<'a, I>(&self, name: &str, params: I) -> Result<String, RouteError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let route = self
            .routes
            .iter()
            .chain(Some(&self.fallback))
            .find(|r| r.entry.name == name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;
        let params: BTreeMap<&str, &str> = params.into_iter().collect();
        let missing = |param: &str| RouteError::MissingParam {
            route: name.to_string(),
            param: param.to_string(),
        };

        let segments = match &route.pattern {
            Pattern::CatchAll => {
                let path = params
                    .get(CATCH_ALL_PARAM)
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| missing(CATCH_ALL_PARAM))?;
                return Ok(format!("#{}", normalize(path)));
            }
            Pattern::Segments(segments) => segments,
        };

        let mut href = String::from("#");
        for segment in segments {
            href.push('/');
            match segment {
                PatternSegment::Literal(literal) => href.push_str(literal),
                PatternSegment::Param(param) => {
                    let value = params
                        .get(param.as_str())
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| missing(param.as_str()))?;
                    href.push_str(&urlencoding::encode(value));
                }
            }
        }
        if segments.is_empty() {
            href.push('/');
        }
        Ok(href)
    }
}

fn fragment(location: &str) -> &str {
    match location.split_once('#') {
        Some((_, fragment)) => fragment,
        None if location.contains("://") => "/",
        None => location,
    }
}

/// Leading `/`, no query, no trailing `/` (except for the root).
fn normalize(path: &str) -> String {
    let path = path.split('?').next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}

fn split_segments(path: &str) -> Vec<&str> {
    match path.trim_start_matches('/') {
        "" => Vec::new(),
        rest => rest.split('/').collect(),
    }
}

fn decode(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            warn!(segment = raw, error = %err, "parameter is not valid UTF-8 once decoded, keeping it raw");
            raw.to_string()
        }
    }
}
