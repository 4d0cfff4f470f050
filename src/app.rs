use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::config::{AppSettings, StartView};
use crate::error::Result;
use crate::io::{self, FileStore, KeyValueStore, MemoryStore};
use crate::model::entry::{self, EntryDrafts};
use crate::model::milestone::{generate_schedule, parse_sop};
use crate::model::state::DEFAULT_PROJECT_NAME;
use crate::model::{DashboardState, Milestone, PersistedState, WidgetCollection, WidgetKey, WidgetOrder};
use crate::ui;

/// Which of the two views is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Entry,
    Dashboard,
}

/// Working copy edited in the Data Input view. Nothing reaches storage
/// until [`MilestoneApp::save_all`].
#[derive(Debug, Clone)]
pub struct EntryState {
    pub project_name: String,
    /// SOP as typed; validated on save.
    pub sop_input: String,
    /// Backing value for the date picker.
    pub sop_picker: NaiveDate,
    /// Schedule from the last load or save, for the preview table.
    pub milestones: Vec<Milestone>,
    pub widgets: WidgetCollection,
    pub widget_order: WidgetOrder,
    pub drafts: EntryDrafts,
    /// Inline validation message per widget card.
    pub errors: HashMap<WidgetKey, String>,
    pub sop_error: Option<String>,
}

impl EntryState {
    pub fn from_stored(stored: Option<PersistedState>) -> Self {
        let stored = stored.unwrap_or_default();
        let sop_picker = parse_sop(&stored.sop)
            .unwrap_or_else(|_| chrono::Local::now().date_naive());
        Self {
            project_name: stored.project_name,
            sop_input: stored.sop,
            sop_picker,
            milestones: stored.milestones,
            widgets: stored.widgets,
            widget_order: stored.widget_order,
            drafts: EntryDrafts::default(),
            errors: HashMap::new(),
            sop_error: None,
        }
    }

    /// Validate the SOP and assemble the state to persist, with a freshly
    /// generated schedule.
    pub fn build_state(&self) -> Result<PersistedState> {
        let sop = parse_sop(&self.sop_input)?;
        let milestones = generate_schedule(sop)?;
        let name = self.project_name.trim();
        Ok(PersistedState {
            project_name: if name.is_empty() {
                DEFAULT_PROJECT_NAME.to_string()
            } else {
                name.to_string()
            },
            sop: sop.format("%Y-%m-%d").to_string(),
            milestones,
            widgets: self.widgets.clone(),
            widget_order: self.widget_order.clone(),
        })
    }
}

/// Main application state.
pub struct MilestoneApp {
    pub settings: AppSettings,
    pub store: Box<dyn KeyValueStore>,
    pub view: View,
    pub entry: EntryState,
    pub dashboard: DashboardState,

    // Status message
    pub status_message: String,

    pub show_about: bool,
}

impl MilestoneApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let data_dir = settings.resolved_data_dir();
        let (store, status): (Box<dyn KeyValueStore>, String) = match FileStore::open(&data_dir) {
            Ok(store) => {
                tracing::info!("Using data directory {:?}", data_dir);
                (Box::new(store), "Ready".to_string())
            }
            Err(e) => {
                tracing::error!("{}; falling back to in-memory storage", e);
                (
                    Box::new(MemoryStore::default()),
                    format!("{} (changes will not be kept)", e),
                )
            }
        };

        let mut app = Self::with_store(settings, store);
        app.status_message = status;
        app
    }

    /// Build the app around an explicit store and load the start view.
    pub fn with_store(settings: AppSettings, store: Box<dyn KeyValueStore>) -> Self {
        let table_size = settings.table_size();
        let mut app = Self {
            settings,
            store,
            view: View::Entry,
            entry: EntryState::from_stored(None),
            dashboard: DashboardState::new(PersistedState::default(), table_size),
            status_message: "Ready".to_string(),
            show_about: false,
        };
        match app.settings.start_view {
            StartView::Entry => app.show_entry(),
            StartView::Dashboard => app.show_dashboard(),
        }
        app
    }

    // --- Navigation ---

    /// Switch to the Data Input view, reloading from storage.
    pub fn show_entry(&mut self) {
        self.entry = EntryState::from_stored(io::load_state(self.store.as_ref()));
        self.view = View::Entry;
    }

    /// Switch to the Dashboard view, reloading from storage.
    pub fn show_dashboard(&mut self) {
        let stored = io::load_state(self.store.as_ref()).unwrap_or_default();
        self.dashboard = DashboardState::new(stored, self.dashboard.table_size);
        self.view = View::Dashboard;
    }

    // --- Data entry ---

    pub fn add_entry(&mut self, key: WidgetKey) {
        match self.entry.drafts.submit(&mut self.entry.widgets, key) {
            Ok(()) => {
                self.entry.errors.remove(&key);
                self.status_message = format!("Added entry to {}", key.title());
            }
            Err(e) => {
                self.entry.errors.insert(key, e.to_string());
            }
        }
    }

    pub fn remove_entry(&mut self, key: WidgetKey, index: usize) {
        if entry::remove(&mut self.entry.widgets, key, index) {
            self.status_message = format!("Removed entry from {}", key.title());
        }
    }

    /// Validate, regenerate the schedule and overwrite the stored state.
    pub fn save_all(&mut self) {
        let state = match self.entry.build_state() {
            Ok(state) => state,
            Err(e) => {
                self.entry.sop_error = Some(e.to_string());
                self.status_message = format!("Not saved: {}", e);
                return;
            }
        };
        self.entry.sop_error = None;
        match io::save_state(self.store.as_mut(), &state) {
            Ok(()) => {
                self.entry.milestones = state.milestones;
                self.entry.sop_input = state.sop;
                self.status_message =
                    "Data + widgets saved. Switch to Dashboard to view it.".to_string();
            }
            Err(e) => {
                tracing::error!("Save failed: {}", e);
                self.status_message = format!("Error saving: {}", e);
            }
        }
    }

    // --- Dashboard ---

    /// Apply a widget drop on the dashboard.
    pub fn drop_widget(&mut self, from: WidgetKey, onto: WidgetKey) {
        if !self.dashboard.drop_widget(from, onto) {
            return;
        }
        self.status_message = format!("Moved {}", from.title());
        if self.settings.persist_widget_order {
            self.persist_widget_order();
        }
    }

    fn persist_widget_order(&mut self) {
        let mut stored = io::load_state(self.store.as_ref()).unwrap_or_default();
        stored.widget_order = self.dashboard.widget_order.clone();
        if let Err(e) = io::save_state(self.store.as_mut(), &stored) {
            tracing::error!("Failed to save widget order: {}", e);
            self.status_message = format!("Error saving widget order: {}", e);
        }
    }

    // --- Export / files ---

    /// Milestones of the view on screen.
    pub fn current_milestones(&self) -> &[Milestone] {
        match self.view {
            View::Entry => &self.entry.milestones,
            View::Dashboard => &self.dashboard.milestones,
        }
    }

    pub fn current_project_name(&self) -> &str {
        match self.view {
            View::Entry if !self.entry.project_name.trim().is_empty() => self.entry.project_name.trim(),
            View::Entry => DEFAULT_PROJECT_NAME,
            View::Dashboard => self.dashboard.project_name.as_str(),
        }
    }

    pub fn export_csv(&mut self) {
        if self.current_milestones().is_empty() {
            self.status_message = "Nothing to export. Save an SOP date first".to_string();
            return;
        }

        let default_name = format!("{} milestones.csv", self.current_project_name());
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&default_name)
            .save_file()
        {
            self.export_csv_to(&path);
        }
    }

    pub fn export_csv_to(&mut self, path: &Path) {
        match io::csv_export::export_milestones(self.current_milestones(), path) {
            Ok(count) => self.status_message = format!("Exported {} milestones to CSV", count),
            Err(e) => {
                tracing::error!("CSV export to {:?} failed: {}", path, e);
                self.status_message = format!("CSV export failed: {}", e);
            }
        }
    }

    pub fn open_data_folder(&mut self) {
        let Some(dir) = self.store.location().map(Path::to_path_buf) else {
            self.status_message = "Data is kept in memory only".to_string();
            return;
        };
        if let Err(e) = open::that(&dir) {
            tracing::warn!("Failed to open {:?}: {}", dir, e);
            self.status_message = format!("Could not open {}: {}", dir.display(), e);
        }
    }
}

impl eframe::App for MilestoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        let should_save = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S));
        if should_save && self.view == View::Entry {
            self.save_all();
        }

        // Top panel: menu bar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_STATUS_BAR)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .size(11.0)
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (milestones, entries) = match self.view {
                            View::Entry => (self.entry.milestones.len(), self.entry.widgets.total_entries()),
                            View::Dashboard => {
                                (self.dashboard.milestones.len(), self.dashboard.widgets.total_entries())
                            }
                        };
                        ui.label(
                            egui::RichText::new(format!(
                                "Milestones: {} · Entries: {}",
                                milestones, entries
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        let panel_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(12.0));
        match self.view {
            View::Entry => {
                let mut action = ui::data_entry::EntryAction::None;
                egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
                    action = ui::data_entry::show_data_entry(&mut self.entry, ui);
                });
                match action {
                    ui::data_entry::EntryAction::Add(key) => self.add_entry(key),
                    ui::data_entry::EntryAction::Remove(key, index) => self.remove_entry(key, index),
                    ui::data_entry::EntryAction::Save => self.save_all(),
                    ui::data_entry::EntryAction::None => {}
                }
            }
            View::Dashboard => {
                let mut dropped = None;
                egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
                    dropped = ui::dashboard::show_dashboard(&mut self.dashboard, ui);
                });
                if let Some((from, onto)) = dropped {
                    self.drop_widget(from, onto);
                }
            }
        }

        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::STORAGE_KEY;
    use crate::model::entry::StatusDraft;
    use crate::model::StatusCounts;

    fn app_with(store: MemoryStore, settings: AppSettings) -> MilestoneApp {
        MilestoneApp::with_store(settings, Box::new(store))
    }

    #[test]
    fn starts_empty_without_saved_data() {
        let app = app_with(MemoryStore::default(), AppSettings::default());
        assert_eq!(app.view, View::Entry);
        assert!(app.entry.project_name.is_empty());
        assert!(app.entry.milestones.is_empty());
    }

    #[test]
    fn save_requires_valid_sop() {
        let mut app = app_with(MemoryStore::default(), AppSettings::default());
        app.entry.sop_input = "next spring".into();
        app.save_all();
        assert!(app.entry.sop_error.as_deref().unwrap().contains("next spring"));
        assert!(app.store.get(STORAGE_KEY).unwrap().is_none());

        app.entry.sop_input.clear();
        app.save_all();
        assert_eq!(app.entry.sop_error.as_deref(), Some("SOP date is required"));
        assert!(app.store.get(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn save_then_dashboard_shows_saved_data() {
        let mut app = app_with(MemoryStore::default(), AppSettings::default());
        app.entry.sop_input = "2027-06-15".into();
        app.entry.drafts.text_mut(WidgetKey::CriticalIssues).push_str("Supplier delay");
        app.add_entry(WidgetKey::CriticalIssues);
        *app.entry.drafts.status_mut(WidgetKey::SourcingStatus) = StatusDraft {
            total: "10".into(),
            done: "6".into(),
            pending: "4".into(),
        };
        app.add_entry(WidgetKey::SourcingStatus);
        app.save_all();

        assert!(app.entry.sop_error.is_none());
        assert_eq!(app.entry.milestones.len(), 10);

        app.show_dashboard();
        assert_eq!(app.view, View::Dashboard);
        assert_eq!(app.dashboard.title(), "Project - Dashboard");
        assert!(app.dashboard.has_timeline());
        assert_eq!(app.dashboard.widgets.critical_issues, vec!["Supplier delay".to_string()]);
        assert_eq!(
            app.dashboard.widgets.sourcing_status,
            vec![StatusCounts::new("10", "6", "4")]
        );
    }

    #[test]
    fn invalid_entry_shows_inline_error() {
        let mut app = app_with(MemoryStore::default(), AppSettings::default());
        app.entry.drafts.text_mut(WidgetKey::Feasibility).push_str("   ");
        app.add_entry(WidgetKey::Feasibility);
        assert_eq!(
            app.entry.errors.get(&WidgetKey::Feasibility).map(String::as_str),
            Some("Entry is empty")
        );
        assert!(app.entry.widgets.feasibility.is_empty());

        app.entry.drafts.text_mut(WidgetKey::Feasibility).push_str("Die casting OK");
        app.add_entry(WidgetKey::Feasibility);
        assert!(!app.entry.errors.contains_key(&WidgetKey::Feasibility));
    }

    #[test]
    fn malformed_storage_loads_defaults() {
        let mut store = MemoryStore::default();
        store.set(STORAGE_KEY, "{ definitely not json").unwrap();
        let mut app = app_with(store, AppSettings::default());
        assert_eq!(app.entry.widgets.total_entries(), 0);
        app.show_dashboard();
        assert!(!app.dashboard.has_timeline());
        assert_eq!(app.dashboard.project_name, "Project");
    }

    #[test]
    fn reorder_is_session_only_by_default() {
        let mut app = app_with(MemoryStore::default(), AppSettings::default());
        app.entry.sop_input = "2027-06-15".into();
        app.save_all();
        app.show_dashboard();

        app.drop_widget(WidgetKey::DrgRelease, WidgetKey::CriticalIssues);
        assert_eq!(app.dashboard.widget_order.keys()[0], WidgetKey::DrgRelease);

        app.show_dashboard();
        assert_eq!(app.dashboard.widget_order.keys(), &WidgetKey::ALL);
    }

    #[test]
    fn reorder_is_written_back_when_enabled() {
        let settings = AppSettings {
            persist_widget_order: true,
            start_view: StartView::Dashboard,
            ..Default::default()
        };
        let mut app = app_with(MemoryStore::default(), settings);
        assert_eq!(app.view, View::Dashboard);

        app.drop_widget(WidgetKey::DrgRelease, WidgetKey::CriticalIssues);
        app.show_dashboard();
        assert_eq!(app.dashboard.widget_order.keys()[0], WidgetKey::DrgRelease);

        app.show_entry();
        assert_eq!(app.entry.widget_order.keys()[0], WidgetKey::DrgRelease);
    }

    #[test]
    fn export_writes_current_view_milestones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let mut app = app_with(MemoryStore::default(), AppSettings::default());

        app.export_csv();
        assert!(app.status_message.starts_with("Nothing to export"));

        app.entry.sop_input = "2027-06-15".into();
        app.save_all();
        app.export_csv_to(&path);
        assert_eq!(app.status_message, "Exported 10 milestones to CSV");
        assert!(std::fs::read_to_string(&path).unwrap().contains("SOP;0;2027-06-15"));
    }

    #[test]
    fn memory_store_has_no_folder() {
        let mut app = app_with(MemoryStore::default(), AppSettings::default());
        app.open_data_folder();
        assert_eq!(app.status_message, "Data is kept in memory only");
    }
}
