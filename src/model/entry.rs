use std::collections::HashMap;

use thiserror::Error;

use super::widget::{StatusCounts, WidgetCollection, WidgetKey, WidgetKind};

/// Why an entry was not added. The collection is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Entry is empty")]
    Blank,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a number (got '{value}')")]
    NotANumber { field: &'static str, value: String },

    #[error("{0} does not take this kind of entry")]
    WrongKind(&'static str),
}

/// In-progress input for a status widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusDraft {
    pub total: String,
    pub done: String,
    pub pending: String,
}

/// Unsaved input fields of the Data Input view, one per widget.
#[derive(Debug, Clone, Default)]
pub struct EntryDrafts {
    text: HashMap<WidgetKey, String>,
    status: HashMap<WidgetKey, StatusDraft>,
}

impl EntryDrafts {
    pub fn text_mut(&mut self, key: WidgetKey) -> &mut String {
        self.text.entry(key).or_default()
    }

    pub fn status_mut(&mut self, key: WidgetKey) -> &mut StatusDraft {
        self.status.entry(key).or_default()
    }

    pub fn clear(&mut self, key: WidgetKey) {
        self.text.remove(&key);
        self.status.remove(&key);
    }

    /// Submit the draft for `key`; the draft is cleared only on success.
    pub fn submit(&mut self, widgets: &mut WidgetCollection, key: WidgetKey) -> Result<(), EntryError> {
        match key.kind() {
            WidgetKind::Text => {
                let value = self.text.get(&key).cloned().unwrap_or_default();
                add_text(widgets, key, &value)?;
            }
            WidgetKind::Status => {
                let draft = self.status.get(&key).cloned().unwrap_or_default();
                add_status(widgets, key, &draft)?;
            }
        }
        self.clear(key);
        Ok(())
    }
}

/// Append a freeform line to a text widget.
pub fn add_text(widgets: &mut WidgetCollection, key: WidgetKey, value: &str) -> Result<(), EntryError> {
    let list = widgets
        .text_mut(key)
        .ok_or(EntryError::WrongKind(key.title()))?;
    if value.trim().is_empty() {
        return Err(EntryError::Blank);
    }
    list.push(value.to_string());
    Ok(())
}

/// Append a status snapshot. All three fields must be present and numeric.
pub fn add_status(
    widgets: &mut WidgetCollection,
    key: WidgetKey,
    draft: &StatusDraft,
) -> Result<(), EntryError> {
    let list = widgets
        .status_mut(key)
        .ok_or(EntryError::WrongKind(key.title()))?;

    let fields = [
        ("Total", draft.total.trim()),
        (key.done_label(), draft.done.trim()),
        ("Pending", draft.pending.trim()),
    ];
    for (field, value) in fields {
        if value.is_empty() {
            return Err(EntryError::MissingField(field));
        }
    }
    for (field, value) in fields {
        if value.parse::<f64>().map(|v| !v.is_finite()).unwrap_or(true) {
            return Err(EntryError::NotANumber {
                field,
                value: value.to_string(),
            });
        }
    }

    list.push(StatusCounts::new(fields[0].1, fields[1].1, fields[2].1));
    Ok(())
}

/// Remove the entry at `index`. Returns `false` (and does nothing) when the
/// index is out of range.
pub fn remove(widgets: &mut WidgetCollection, key: WidgetKey, index: usize) -> bool {
    if let Some(list) = widgets.text_mut(key) {
        if index < list.len() {
            list.remove(index);
            return true;
        }
        return false;
    }
    if let Some(list) = widgets.status_mut(key) {
        if index < list.len() {
            list.remove(index);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(total: &str, done: &str, pending: &str) -> StatusDraft {
        StatusDraft {
            total: total.into(),
            done: done.into(),
            pending: pending.into(),
        }
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut widgets = WidgetCollection::default();
        assert_eq!(add_text(&mut widgets, WidgetKey::CriticalIssues, ""), Err(EntryError::Blank));
        assert_eq!(add_text(&mut widgets, WidgetKey::CriticalIssues, "  \t"), Err(EntryError::Blank));
        assert!(widgets.critical_issues.is_empty());

        add_text(&mut widgets, WidgetKey::CriticalIssues, "Tooling late").unwrap();
        assert_eq!(widgets.critical_issues, vec!["Tooling late".to_string()]);
    }

    #[test]
    fn status_add_then_remove_restores_empty() {
        let mut widgets = WidgetCollection::default();
        add_status(&mut widgets, WidgetKey::SourcingStatus, &draft("10", "6", "4")).unwrap();
        assert_eq!(widgets.sourcing_status, vec![StatusCounts::new("10", "6", "4")]);

        assert!(remove(&mut widgets, WidgetKey::SourcingStatus, 0));
        assert!(widgets.sourcing_status.is_empty());
    }

    #[test]
    fn incomplete_status_is_rejected() {
        let mut widgets = WidgetCollection::default();
        assert_eq!(
            add_status(&mut widgets, WidgetKey::DrgRelease, &draft("10", "", "4")),
            Err(EntryError::MissingField("Released"))
        );
        assert_eq!(
            add_status(&mut widgets, WidgetKey::SourcingStatus, &draft("10", "6", " ")),
            Err(EntryError::MissingField("Pending"))
        );
        assert_eq!(
            add_status(&mut widgets, WidgetKey::SourcingStatus, &draft("ten", "6", "4")),
            Err(EntryError::NotANumber {
                field: "Total",
                value: "ten".into()
            })
        );
        assert!(widgets.sourcing_status.is_empty());
        assert!(widgets.drg_release.is_empty());
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut widgets = WidgetCollection::default();
        assert!(matches!(
            add_text(&mut widgets, WidgetKey::DrgRelease, "text"),
            Err(EntryError::WrongKind(_))
        ));
        assert!(matches!(
            add_status(&mut widgets, WidgetKey::Feasibility, &draft("1", "1", "0")),
            Err(EntryError::WrongKind(_))
        ));
    }

    #[test]
    fn out_of_range_remove_is_a_no_op() {
        let mut widgets = WidgetCollection::default();
        widgets.feasibility.push("Casting OK".into());
        assert!(!remove(&mut widgets, WidgetKey::Feasibility, 1));
        assert!(!remove(&mut widgets, WidgetKey::DrgRelease, 0));
        assert_eq!(widgets.feasibility.len(), 1);
        assert!(remove(&mut widgets, WidgetKey::Feasibility, 0));
        assert!(widgets.feasibility.is_empty());
    }

    #[test]
    fn drafts_clear_only_on_success() {
        let mut widgets = WidgetCollection::default();
        let mut drafts = EntryDrafts::default();

        *drafts.status_mut(WidgetKey::DrgRelease) = draft("8", "3", "");
        assert!(drafts.submit(&mut widgets, WidgetKey::DrgRelease).is_err());
        assert_eq!(drafts.status_mut(WidgetKey::DrgRelease).total, "8");

        drafts.status_mut(WidgetKey::DrgRelease).pending = "5".into();
        drafts.submit(&mut widgets, WidgetKey::DrgRelease).unwrap();
        assert_eq!(*drafts.status_mut(WidgetKey::DrgRelease), StatusDraft::default());
        assert_eq!(widgets.drg_release.len(), 1);

        drafts.text_mut(WidgetKey::ProjectStatus).push_str("On track");
        drafts.submit(&mut widgets, WidgetKey::ProjectStatus).unwrap();
        assert!(drafts.text_mut(WidgetKey::ProjectStatus).is_empty());
        assert_eq!(widgets.project_status, vec!["On track".to_string()]);
    }
}
