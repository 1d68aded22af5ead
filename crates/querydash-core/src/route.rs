//! Route table mapping navigable paths to mounted views
//!
//! The table is an ordered list of entries evaluated first-match-wins, so the
//! catch-all redirect must be registered last. Matching follows the browser
//! router the dashboard was built against:
//! - the query string and fragment are ignored
//! - a single trailing slash is tolerated
//! - static segments compare ASCII case-insensitively
//! - dynamic segments must be non-empty; they are percent-decoded after the
//!   path is split, so `%2F` never creates a new segment

use crate::error::{CoreError, Result};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Path of the tabbed shell
pub const ROOT_PATH: &str = "/";
/// Pattern of the standalone query details view
pub const QUERY_DETAILS_PATTERN: &str = "/query-details/:ruleId/:recommendation/:ruleTitle";
/// Pattern matching every path
pub const CATCH_ALL_PATTERN: &str = "/*";

/// Parameters carried by the query details path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDetailsParams {
    pub rule_id: String,
    pub recommendation: String,
    pub rule_title: String,
}

/// A view the dispatcher can mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum Route {
    Shell,
    QueryDetails(QueryDetailsParams),
}

impl Route {
    /// Navigable path for this route, parameters percent-encoded
    pub fn path(&self) -> String {
        match self {
            Route::Shell => ROOT_PATH.to_string(),
            Route::QueryDetails(p) => format!(
                "/query-details/{}/{}/{}",
                urlencoding::encode(&p.rule_id),
                urlencoding::encode(&p.recommendation),
                urlencoding::encode(&p.rule_title)
            ),
        }
    }
}

/// Outcome of dispatching a path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Resolution {
    Mount(Route),
    /// Navigate elsewhere; `replace` swaps the current history entry
    Redirect { to: String, replace: bool },
}

/// What an entry resolves to once its pattern matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RouteTarget {
    Shell,
    QueryDetails,
    Redirect { to: String, replace: bool },
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTarget::Shell => write!(f, "tabbed shell"),
            RouteTarget::QueryDetails => write!(f, "query details view"),
            RouteTarget::Redirect { to, replace: true } => write!(f, "redirect to {} (replace)", to),
            RouteTarget::Redirect { to, replace: false } => write!(f, "redirect to {} (push)", to),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll,
}

/// Parsed path pattern such as `/query-details/:ruleId/:recommendation/:ruleTitle`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason: &str| CoreError::InvalidRoutePattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let rest = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            let parts: Vec<&str> = rest.split('/').collect();
            for (i, part) in parts.iter().enumerate() {
                let segment = match *part {
                    "" => return Err(invalid("empty segment")),
                    "*" if i + 1 == parts.len() => Segment::CatchAll,
                    "*" => return Err(invalid("'*' must be the last segment")),
                    p if p.starts_with(':') => {
                        let name = &p[1..];
                        if name.is_empty() {
                            return Err(invalid("parameter without a name"));
                        }
                        let duplicate = segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(n) if n == name));
                        if duplicate {
                            return Err(invalid("duplicate parameter name"));
                        }
                        Segment::Param(name.to_string())
                    }
                    p => Segment::Static(p.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn has_param(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Param(n) if n == name))
    }

    /// Match path segments, returning captured parameters in pattern order
    fn captures(&self, path: &[&str]) -> Option<Vec<(String, String)>> {
        let mut captured = Vec::new();
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::CatchAll => return Some(captured),
                Segment::Static(s) => {
                    if !path.get(i)?.eq_ignore_ascii_case(s) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(i).filter(|v| !v.is_empty())?;
                    captured.push((name.clone(), decode_segment(value)));
                }
            }
        }
        (path.len() == self.segments.len()).then_some(captured)
    }
}

/// One row of the route table
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: RoutePattern,
    target: RouteTarget,
}

impl RouteEntry {
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }
}

/// Ordered, first-match-wins route table
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Entries registered earlier take precedence.
    pub fn route(mut self, pattern: &str, target: RouteTarget) -> Result<Self> {
        let pattern = RoutePattern::parse(pattern)?;
        if target == RouteTarget::QueryDetails {
            for name in ["ruleId", "recommendation", "ruleTitle"] {
                if !pattern.has_param(name) {
                    return Err(CoreError::InvalidRoutePattern {
                        pattern: pattern.raw,
                        reason: format!("query details route needs ':{}'", name),
                    });
                }
            }
        }
        self.entries.push(RouteEntry { pattern, target });
        Ok(self)
    }

    /// The dashboard's table: shell at `/`, query details, catch-all redirect
    pub fn standard() -> Self {
        Self::new()
            .route(ROOT_PATH, RouteTarget::Shell)
            .and_then(|t| t.route(QUERY_DETAILS_PATTERN, RouteTarget::QueryDetails))
            .and_then(|t| {
                t.route(
                    CATCH_ALL_PATTERN,
                    RouteTarget::Redirect {
                        to: ROOT_PATH.to_string(),
                        replace: true,
                    },
                )
            })
            .unwrap_or_else(|e| panic!("built-in route table is malformed: {}", e))
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Dispatch a path. Paths no entry matches redirect to the root.
    pub fn resolve(&self, path: &str) -> Resolution {
        let segments = split_path(path);

        for entry in &self.entries {
            let Some(captures) = entry.pattern.captures(&segments) else {
                continue;
            };
            debug!(path, pattern = entry.pattern(), "route matched");
            return match &entry.target {
                RouteTarget::Shell => Resolution::Mount(Route::Shell),
                RouteTarget::QueryDetails => {
                    Resolution::Mount(Route::QueryDetails(details_from(captures)))
                }
                RouteTarget::Redirect { to, replace } => Resolution::Redirect {
                    to: to.clone(),
                    replace: *replace,
                },
            };
        }

        debug!(path, "no route matched");
        Resolution::Redirect {
            to: ROOT_PATH.to_string(),
            replace: true,
        }
    }
}

fn details_from(captures: Vec<(String, String)>) -> QueryDetailsParams {
    let mut params = QueryDetailsParams {
        rule_id: String::new(),
        recommendation: String::new(),
        rule_title: String::new(),
    };
    for (name, value) in captures {
        match name.as_str() {
            "ruleId" => params.rule_id = value,
            "recommendation" => params.recommendation = value,
            "ruleTitle" => params.rule_title = value,
            _ => {}
        }
    }
    params
}

/// Percent-decode one captured segment, keeping the raw text when the
/// decoded bytes are not UTF-8
fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Split a location into path segments, dropping query, fragment, and one
/// trailing slash
fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}
