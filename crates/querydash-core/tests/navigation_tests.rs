//! Navigation behaviour of the dashboard shell
//!
//! Run with:
//! ```bash
//! cargo test -p querydash-core --test navigation_tests
//! ```

use querydash_core::{
    MemorySession, Navigator, QueryDetailsParams, Route, ShellState, Tab, PROJECT_ID_KEY,
};

mod shell {
    use super::*;

    #[test]
    fn test_each_tab_selects_only_its_view() {
        let mut shell = ShellState::mount(&MemorySession::new());
        for tab in Tab::all() {
            shell.select_tab(tab.index());
            let mounted: Vec<Tab> = Tab::all()
                .iter()
                .copied()
                .filter(|t| shell.active_view() == Some(*t))
                .collect();
            assert_eq!(mounted, vec![*tab]);
        }
    }

    #[test]
    fn test_selecting_same_tab_twice_is_stable() {
        let mut shell = ShellState::mount(&MemorySession::new());
        shell.select_tab(1);
        let before = shell.clone();
        shell.select_tab(1);
        assert_eq!(shell, before);
        assert_eq!(shell.active_view(), Some(Tab::Optimize));
    }

    #[test]
    fn test_project_badge_from_session() {
        let store = MemorySession::new().with(PROJECT_ID_KEY, "P123");
        let shell = ShellState::mount(&store);
        assert_eq!(shell.project_label().as_deref(), Some("Project ID: P123"));

        let shell = ShellState::mount(&MemorySession::new());
        assert_eq!(shell.project_label(), None);
    }
}

mod routing {
    use super::*;

    #[test]
    fn test_root_opens_shell_on_generate_query() {
        let mut nav = Navigator::default();
        assert_eq!(nav.navigate("/").unwrap(), Route::Shell);

        let shell = ShellState::mount(&MemorySession::new());
        assert_eq!(shell.active_view().map(|t| t.label()), Some("Generate Query"));
    }

    #[test]
    fn test_query_details_receives_segments_unmodified() {
        let mut nav = Navigator::default();
        let route = nav.navigate("/query-details/42/approve/MyRule").unwrap();
        assert_eq!(
            route,
            Route::QueryDetails(QueryDetailsParams {
                rule_id: "42".to_string(),
                recommendation: "approve".to_string(),
                rule_title: "MyRule".to_string(),
            })
        );
        assert_eq!(nav.history().current(), "/query-details/42/approve/MyRule");
    }

    #[test]
    fn test_unknown_path_lands_on_root_without_back_entry() {
        let mut nav = Navigator::default();
        nav.navigate("/query-details/1/a/b").unwrap();
        assert_eq!(nav.navigate("/foo/bar").unwrap(), Route::Shell);
        assert_eq!(nav.history().current(), "/");

        // Back skips the replaced entry entirely
        let previous = nav.back().unwrap();
        assert!(matches!(previous, Some(Route::QueryDetails(_))));
        assert_eq!(nav.history().current(), "/query-details/1/a/b");
        assert!(nav.history().entries().iter().all(|e| e != "/foo/bar"));
    }
}
