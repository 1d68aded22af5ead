//! Session-scoped context read once when the shell mounts

use std::collections::HashMap;
use tracing::debug;

/// Session storage key holding the active project identifier
pub const PROJECT_ID_KEY: &str = "projectId";

/// Read access to client-side session storage.
///
/// Implementations never fail: an unreadable store behaves like an empty one.
pub trait SessionStore {
    fn get_value(&self, key: &str) -> Option<String>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get_value(&self, key: &str) -> Option<String> {
        (**self).get_value(key)
    }
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SessionStore for MemorySession {
    fn get_value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Project identifier captured at mount time.
///
/// The value is never refreshed: later writes to session storage are not
/// observed for the lifetime of the context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectContext {
    project_id: Option<String>,
}

impl ProjectContext {
    /// Perform the single read of [`PROJECT_ID_KEY`]. Empty values count as absent.
    pub fn read(store: &impl SessionStore) -> Self {
        let project_id = store.get_value(PROJECT_ID_KEY).filter(|v| !v.is_empty());
        debug!(present = project_id.is_some(), "read project id from session");
        Self { project_id }
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Text for the app bar badge, `None` when nothing should be rendered
    pub fn display_label(&self) -> Option<String> {
        self.project_id.as_ref().map(|id| format!("Project ID: {}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingStore {
        reads: Cell<usize>,
        value: Option<String>,
    }

    impl SessionStore for CountingStore {
        fn get_value(&self, _key: &str) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            self.value.clone()
        }
    }

    #[test]
    fn test_present_id_is_displayed() {
        let store = MemorySession::new().with(PROJECT_ID_KEY, "P123");
        let ctx = ProjectContext::read(&store);
        assert_eq!(ctx.project_id(), Some("P123"));
        assert_eq!(ctx.display_label().as_deref(), Some("Project ID: P123"));
    }

    #[test]
    fn test_absent_id_renders_nothing() {
        let ctx = ProjectContext::read(&MemorySession::new());
        assert_eq!(ctx.project_id(), None);
        assert_eq!(ctx.display_label(), None);
    }

    #[test]
    fn test_empty_id_counts_as_absent() {
        let store = MemorySession::new().with(PROJECT_ID_KEY, "");
        assert_eq!(ProjectContext::read(&store).display_label(), None);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let store = MemorySession::new().with("project_id", "P123");
        assert_eq!(ProjectContext::read(&store).project_id(), None);
    }

    #[test]
    fn test_reads_exactly_once() {
        let store = CountingStore {
            reads: Cell::new(0),
            value: Some("P1".to_string()),
        };
        let ctx = ProjectContext::read(&store);
        let _ = ctx.display_label();
        let _ = ctx.project_id();
        assert_eq!(store.reads.get(), 1);
    }
}
