//! Tab catalogue and selection state for the dashboard shell

use serde::{Deserialize, Serialize};
use tracing::trace;

/// The four main views of the shell, in tab-bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    /// Query generation
    #[default]
    Insight,
    Optimize,
    Recommendation,
    DataCatalogEditor,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Insight,
            Tab::Optimize,
            Tab::Recommendation,
            Tab::DataCatalogEditor,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Insight => 0,
            Tab::Optimize => 1,
            Tab::Recommendation => 2,
            Tab::DataCatalogEditor => 3,
        }
    }

    /// Map a tab-bar index back to a tab. Indices outside the catalogue
    /// select nothing.
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::all().get(idx).copied()
    }

    /// Label shown in the tab bar
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Insight => "Generate Query",
            Tab::Optimize => "Optimize",
            Tab::Recommendation => "Recommendation",
            Tab::DataCatalogEditor => "Data Catalog Editor",
        }
    }

    /// Stable identifier used for DOM ids and CSS classes
    pub fn slug(&self) -> &'static str {
        match self {
            Tab::Insight => "insight",
            Tab::Optimize => "optimize",
            Tab::Recommendation => "recommendation",
            Tab::DataCatalogEditor => "data-catalog-editor",
        }
    }
}

/// Holds the selected tab index.
///
/// The controller stores whatever index the tab bar hands it; the tab bar
/// only ever offers indices from [`Tab::all`], so no range check happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabController {
    index: usize,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Replace the selection and return the stored index
    pub fn select(&mut self, new_index: usize) -> usize {
        trace!(from = self.index, to = new_index, "tab selected");
        self.index = new_index;
        self.index
    }

    /// The tab whose view should be mounted, if the index names one
    pub fn active(&self) -> Option<Tab> {
        Tab::from_index(self.index)
    }
}
