pub mod chart;
pub mod dashboard;
pub mod entry;
pub mod milestone;
pub mod state;
pub mod timeline;
pub mod widget;

pub use dashboard::DashboardState;
pub use milestone::Milestone;
pub use state::PersistedState;
pub use timeline::{TableSize, TimelineGrid};
pub use widget::{StatusCounts, WidgetCollection, WidgetEntries, WidgetKey, WidgetKind, WidgetOrder};
