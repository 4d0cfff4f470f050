use std::collections::HashMap;

use super::chart::{ChartCache, ChartData};
use super::milestone::Milestone;
use super::state::PersistedState;
use super::timeline::{TableSize, TimelineGrid};
use super::widget::{WidgetCollection, WidgetEntries, WidgetKey, WidgetOrder};

/// The dashboard's own copy of the stored state, loaded once when the view
/// is entered. Reordering mutates only this copy.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub project_name: String,
    pub milestones: Vec<Milestone>,
    pub widgets: WidgetCollection,
    pub widget_order: WidgetOrder,
    pub grid: TimelineGrid,
    pub table_size: TableSize,
    charts: HashMap<WidgetKey, ChartCache>,
}

impl DashboardState {
    pub fn new(state: PersistedState, table_size: TableSize) -> Self {
        let grid = TimelineGrid::build(&state.milestones);
        Self {
            project_name: state.display_name().to_string(),
            milestones: state.milestones,
            widgets: state.widgets,
            widget_order: state.widget_order,
            grid,
            table_size,
            charts: HashMap::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} - Dashboard", self.project_name)
    }

    /// The timeline is shown only when there is at least one milestone.
    pub fn has_timeline(&self) -> bool {
        !self.milestones.is_empty() && !self.grid.is_empty()
    }

    /// Apply a completed drag. Returns `true` if the order changed.
    pub fn drop_widget(&mut self, from: WidgetKey, onto: WidgetKey) -> bool {
        let changed = self.widget_order.move_widget(from, onto);
        if changed {
            tracing::debug!(
                "Moved widget {} onto {}: {:?}",
                from.as_str(),
                onto.as_str(),
                self.widget_order.keys()
            );
        }
        changed
    }

    /// Chart for a status widget, `None` for text widgets or no data.
    pub fn chart(&mut self, key: WidgetKey) -> Option<ChartData> {
        let WidgetEntries::Status(entries) = self.widgets.entries(key) else {
            return None;
        };
        self.charts.entry(key).or_default().get(key, entries).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::milestone::generate_schedule;
    use crate::model::widget::StatusCounts;
    use chrono::NaiveDate;

    fn stored() -> PersistedState {
        let sop = NaiveDate::from_ymd_opt(2027, 6, 15).unwrap();
        let mut state = PersistedState {
            project_name: "  ".into(),
            sop: "2027-06-15".into(),
            milestones: generate_schedule(sop).unwrap(),
            ..Default::default()
        };
        state
            .widgets
            .drg_release
            .push(StatusCounts::new("20", "15", "5"));
        state
    }

    #[test]
    fn builds_title_and_grid() {
        let dashboard = DashboardState::new(stored(), TableSize::default());
        assert_eq!(dashboard.title(), "Project - Dashboard");
        assert!(dashboard.has_timeline());
        assert_eq!(dashboard.grid.months().len(), 56);
    }

    #[test]
    fn empty_state_has_no_timeline() {
        let dashboard = DashboardState::new(PersistedState::default(), TableSize::default());
        assert!(!dashboard.has_timeline());
    }

    #[test]
    fn reorder_touches_order_only() {
        let mut dashboard = DashboardState::new(stored(), TableSize::default());
        let widgets_before = dashboard.widgets.clone();
        assert!(dashboard.drop_widget(WidgetKey::DrgRelease, WidgetKey::CriticalIssues));
        assert_eq!(dashboard.widget_order.keys()[0], WidgetKey::DrgRelease);
        assert_eq!(dashboard.widgets, widgets_before);
        assert!(!dashboard.drop_widget(WidgetKey::DrgRelease, WidgetKey::DrgRelease));
    }

    #[test]
    fn charts_only_for_status_widgets_with_data() {
        let mut dashboard = DashboardState::new(stored(), TableSize::default());
        let chart = dashboard.chart(WidgetKey::DrgRelease).unwrap();
        assert_eq!(chart.done.value, 15.0);
        assert!(dashboard.chart(WidgetKey::SourcingStatus).is_none());
        assert!(dashboard.chart(WidgetKey::Feasibility).is_none());
    }
}
