//! querydash-core - Core library for querydash
//!
//! Provides the navigation model behind the dashboard shell: the tab
//! catalogue, session context, route table, navigation history and config.

pub mod config;
pub mod error;
pub mod history;
pub mod route;
pub mod session;
pub mod shell;
pub mod tab;

pub use config::{Config, ServerConfig};
pub use error::{CoreError, Result};
pub use history::{NavigationHistory, Navigator};
pub use route::{QueryDetailsParams, Resolution, Route, RouteEntry, RouteTable, RouteTarget};
pub use session::{MemorySession, ProjectContext, SessionStore, PROJECT_ID_KEY};
pub use shell::ShellState;
pub use tab::{Tab, TabController};
