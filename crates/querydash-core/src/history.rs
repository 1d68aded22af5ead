//! Browser-style navigation history and the navigator that drives it

use crate::error::{CoreError, Result};
use crate::route::{Resolution, Route, RouteTable, ROOT_PATH};
use tracing::debug;

/// Upper bound on chained redirects for a single navigation
pub const MAX_REDIRECTS: usize = 8;

/// Entry stack with a cursor, as kept by a browser tab.
///
/// Never empty; `cursor` always indexes a live entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl NavigationHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history is created with its initial entry and
    /// neither `replace` nor `back` can remove the last one
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry after the cursor, discarding any forward entries
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry in place
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.cursor] = path.into();
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

/// Applies navigation events to a history through a route table
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    history: NavigationHistory,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            history: NavigationHistory::default(),
        }
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Push `path` and settle on the route it finally mounts
    pub fn navigate(&mut self, path: &str) -> Result<Route> {
        self.history.push(path);
        self.settle()
    }

    /// Go back one entry and settle on whatever it mounts
    pub fn back(&mut self) -> Result<Option<Route>> {
        if self.history.back().is_none() {
            return Ok(None);
        }
        self.settle().map(Some)
    }

    /// Resolve the current entry, following at most [`MAX_REDIRECTS`] redirects.
    ///
    /// On a redirect loop the history is restored to its state before settling.
    pub fn settle(&mut self) -> Result<Route> {
        let before = self.history.clone();
        let mut applied = 0;
        loop {
            let (to, replace) = match self.table.resolve(self.history.current()) {
                Resolution::Mount(route) => return Ok(route),
                Resolution::Redirect { to, replace } => (to, replace),
            };
            if applied == MAX_REDIRECTS {
                let path = before.current().to_string();
                self.history = before;
                return Err(CoreError::RedirectLoop {
                    path,
                    hops: applied,
                });
            }
            debug!(from = self.history.current(), to = %to, replace, "redirect");
            if replace {
                self.history.replace(to);
            } else {
                self.history.push(to);
            }
            applied += 1;
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(RouteTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteTarget;

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = NavigationHistory::new("/");
        history.push("/a");
        history.push("/b");
        assert_eq!(history.back(), Some("/a"));
        history.push("/c");
        assert_eq!(history.entries(), &["/", "/a", "/c"]);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_back_stops_at_first_entry() {
        let mut history = NavigationHistory::default();
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), "/");
    }

    #[test]
    fn test_history_never_empties() {
        let mut history = NavigationHistory::default();
        assert!(!history.is_empty());
        history.replace("/x");
        assert_eq!(history.back(), None);
        assert!(!history.is_empty());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = NavigationHistory::new("/");
        history.push("/x");
        history.replace("/y");
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), "/y");
    }

    #[test]
    fn test_navigate_to_unknown_path_replaces_entry() {
        let mut nav = Navigator::default();
        let route = nav.navigate("/foo/bar").unwrap();
        assert_eq!(route, Route::Shell);
        assert_eq!(nav.history().current(), "/");
        assert!(!nav.history().entries().iter().any(|e| e == "/foo/bar"));
    }

    #[test]
    fn test_redirect_loop_is_bounded() {
        let table = RouteTable::new()
            .route(
                "/*",
                RouteTarget::Redirect {
                    to: "/loop".to_string(),
                    replace: true,
                },
            )
            .unwrap();
        let mut nav = Navigator::new(table);
        let err = nav.navigate("/start").unwrap_err();
        assert!(matches!(err, CoreError::RedirectLoop { hops: MAX_REDIRECTS, .. }));
    }

    /// `/r0` push-redirects to `/r1` and so on up to `/r7`, which redirects to `/`
    fn chain_table() -> RouteTable {
        let mut table = RouteTable::new().route("/", RouteTarget::Shell).unwrap();
        for i in 0..MAX_REDIRECTS {
            let to = if i + 1 == MAX_REDIRECTS {
                "/".to_string()
            } else {
                format!("/r{}", i + 1)
            };
            table = table
                .route(&format!("/r{}", i), RouteTarget::Redirect { to, replace: false })
                .unwrap();
        }
        table
    }

    #[test]
    fn test_redirect_chain_at_limit_settles() {
        let mut nav = Navigator::new(chain_table());
        assert_eq!(nav.navigate("/r0").unwrap(), Route::Shell);
        // initial entry, the navigation itself, then one entry per redirect
        assert_eq!(nav.history().len(), 2 + MAX_REDIRECTS);
        assert_eq!(nav.history().current(), "/");
    }

    #[test]
    fn test_redirect_loop_restores_history() {
        let table = RouteTable::new()
            .route(
                "/*",
                RouteTarget::Redirect {
                    to: "/again".to_string(),
                    replace: false,
                },
            )
            .unwrap();
        let mut nav = Navigator::new(table);
        let err = nav.navigate("/start").unwrap_err();

        match err {
            CoreError::RedirectLoop { path, hops } => {
                assert_eq!(path, "/start");
                assert_eq!(hops, MAX_REDIRECTS);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(nav.history().entries(), &["/", "/start"]);
        assert_eq!(nav.history().current(), "/start");
    }

    #[test]
    fn test_push_redirect_adds_entry() {
        let table = RouteTable::new()
            .route("/", RouteTarget::Shell)
            .unwrap()
            .route(
                "/old",
                RouteTarget::Redirect {
                    to: "/".to_string(),
                    replace: false,
                },
            )
            .unwrap();
        let mut nav = Navigator::new(table);
        nav.navigate("/old").unwrap();
        assert_eq!(nav.history().entries(), &["/", "/old", "/"]);
    }
}
