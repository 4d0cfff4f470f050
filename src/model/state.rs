use serde::{Deserialize, Serialize};

use super::milestone::Milestone;
use super::widget::{WidgetCollection, WidgetOrder};

/// Name used when the project name is left blank.
pub const DEFAULT_PROJECT_NAME: &str = "Project";

/// Everything the app persists, written as one JSON document.
///
/// Missing fields read back as defaults. There is no schema version: a
/// change to this shape is a breaking change for previously saved data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    #[serde(rename = "projectName")]
    pub project_name: String,
    /// Raw SOP input as typed, `YYYY-MM-DD` or empty.
    #[serde(rename = "SOP")]
    pub sop: String,
    pub milestones: Vec<Milestone>,
    pub widgets: WidgetCollection,
    #[serde(rename = "widgetOrder")]
    pub widget_order: WidgetOrder,
}

impl PersistedState {
    /// Project name for display, falling back to [`DEFAULT_PROJECT_NAME`].
    pub fn display_name(&self) -> &str {
        let name = self.project_name.trim();
        if name.is_empty() {
            DEFAULT_PROJECT_NAME
        } else {
            name
        }
    }
}
