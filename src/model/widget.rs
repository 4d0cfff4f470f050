use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of one of the five dashboard widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKey {
    CriticalIssues,
    SourcingStatus,
    DrgRelease,
    Feasibility,
    ProjectStatus,
}

/// Shape of the entries a widget holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Freeform text lines.
    Text,
    /// `total / done / pending` triples, rendered as a bar chart.
    Status,
}

impl WidgetKey {
    /// All widgets in their default display order.
    pub const ALL: [WidgetKey; 5] = [
        WidgetKey::CriticalIssues,
        WidgetKey::SourcingStatus,
        WidgetKey::DrgRelease,
        WidgetKey::Feasibility,
        WidgetKey::ProjectStatus,
    ];

    pub fn kind(self) -> WidgetKind {
        match self {
            WidgetKey::SourcingStatus | WidgetKey::DrgRelease => WidgetKind::Status,
            _ => WidgetKind::Text,
        }
    }

    /// The storage identifier, e.g. `criticalIssues`.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKey::CriticalIssues => "criticalIssues",
            WidgetKey::SourcingStatus => "sourcingStatus",
            WidgetKey::DrgRelease => "drgRelease",
            WidgetKey::Feasibility => "feasibility",
            WidgetKey::ProjectStatus => "projectStatus",
        }
    }

    pub fn from_str_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Human-readable card title.
    pub fn title(self) -> &'static str {
        match self {
            WidgetKey::CriticalIssues => "Critical Issues",
            WidgetKey::SourcingStatus => "Sourcing Status",
            WidgetKey::DrgRelease => "DRG Release",
            WidgetKey::Feasibility => "Feasibility",
            WidgetKey::ProjectStatus => "Project Status",
        }
    }

    /// Label for the `done` series of a status widget.
    pub fn done_label(self) -> &'static str {
        match self {
            WidgetKey::SourcingStatus => "Completed",
            _ => "Released",
        }
    }

    /// Category label shown under a status chart.
    pub fn chart_label(self) -> &'static str {
        match self {
            WidgetKey::SourcingStatus => "Sourcing",
            WidgetKey::DrgRelease => "DRG Release",
            other => other.title(),
        }
    }
}

// ── Status entries ──────────────────────────────────────────────────────────

/// One status snapshot. Values are kept as entered; older saves may hold
/// JSON numbers, which are read back as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    #[serde(default, deserialize_with = "count_text")]
    pub total: String,
    #[serde(default, deserialize_with = "count_text")]
    pub done: String,
    #[serde(default, deserialize_with = "count_text")]
    pub pending: String,
}

impl StatusCounts {
    pub fn new(total: impl Into<String>, done: impl Into<String>, pending: impl Into<String>) -> Self {
        Self {
            total: total.into(),
            done: done.into(),
            pending: pending.into(),
        }
    }

    pub fn total_value(&self) -> f64 {
        coerce_number(&self.total)
    }

    pub fn done_value(&self) -> f64 {
        coerce_number(&self.done)
    }

    pub fn pending_value(&self) -> f64 {
        coerce_number(&self.pending)
    }
}

/// Blank or unparseable text counts as zero.
pub fn coerce_number(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn count_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}

// ── Collection ──────────────────────────────────────────────────────────────

/// Entries of every widget, keyed by the storage identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetCollection {
    pub critical_issues: Vec<String>,
    pub sourcing_status: Vec<StatusCounts>,
    pub drg_release: Vec<StatusCounts>,
    pub feasibility: Vec<String>,
    pub project_status: Vec<String>,
}

/// Borrowed view of one widget's entries.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEntries<'a> {
    Text(&'a [String]),
    Status(&'a [StatusCounts]),
}

impl WidgetEntries<'_> {
    pub fn len(&self) -> usize {
        match self {
            WidgetEntries::Text(items) => items.len(),
            WidgetEntries::Status(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WidgetCollection {
    pub fn entries(&self, key: WidgetKey) -> WidgetEntries<'_> {
        match key {
            WidgetKey::CriticalIssues => WidgetEntries::Text(&self.critical_issues),
            WidgetKey::Feasibility => WidgetEntries::Text(&self.feasibility),
            WidgetKey::ProjectStatus => WidgetEntries::Text(&self.project_status),
            WidgetKey::SourcingStatus => WidgetEntries::Status(&self.sourcing_status),
            WidgetKey::DrgRelease => WidgetEntries::Status(&self.drg_release),
        }
    }

    /// Mutable text list, or `None` for a status widget.
    pub fn text_mut(&mut self, key: WidgetKey) -> Option<&mut Vec<String>> {
        match key {
            WidgetKey::CriticalIssues => Some(&mut self.critical_issues),
            WidgetKey::Feasibility => Some(&mut self.feasibility),
            WidgetKey::ProjectStatus => Some(&mut self.project_status),
            WidgetKey::SourcingStatus | WidgetKey::DrgRelease => None,
        }
    }

    /// Mutable status list, or `None` for a text widget.
    pub fn status_mut(&mut self, key: WidgetKey) -> Option<&mut Vec<StatusCounts>> {
        match key {
            WidgetKey::SourcingStatus => Some(&mut self.sourcing_status),
            WidgetKey::DrgRelease => Some(&mut self.drg_release),
            _ => None,
        }
    }

    pub fn total_entries(&self) -> usize {
        WidgetKey::ALL.iter().map(|k| self.entries(*k).len()).sum()
    }
}

// ── Order ───────────────────────────────────────────────────────────────────

/// Display order of the widget cards: always a permutation of
/// [`WidgetKey::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct WidgetOrder(Vec<WidgetKey>);

impl Default for WidgetOrder {
    fn default() -> Self {
        Self(WidgetKey::ALL.to_vec())
    }
}

impl From<Vec<String>> for WidgetOrder {
    fn from(raw: Vec<String>) -> Self {
        let keys = raw
            .iter()
            .filter_map(|s| {
                let key = WidgetKey::from_str_key(s);
                if key.is_none() {
                    tracing::warn!("Ignoring unknown widget '{}' in stored order", s);
                }
                key
            })
            .collect();
        Self::normalized(keys)
    }
}

impl WidgetOrder {
    /// Drop duplicates and append any missing widgets in default order.
    pub fn normalized(keys: Vec<WidgetKey>) -> Self {
        let mut out: Vec<WidgetKey> = Vec::with_capacity(WidgetKey::ALL.len());
        for key in keys.into_iter().chain(WidgetKey::ALL) {
            if !out.contains(&key) {
                out.push(key);
            }
        }
        Self(out)
    }

    pub fn keys(&self) -> &[WidgetKey] {
        &self.0
    }

    /// Move `from` onto `to`'s position. Returns `true` if the order changed.
    pub fn move_widget(&mut self, from: WidgetKey, to: WidgetKey) -> bool {
        let next = reorder(&self.0, from, to);
        let changed = next != self.0;
        self.0 = next;
        changed
    }
}

/// List-move semantics: remove `from` and reinsert it at the index `to`
/// occupied before the move. Unknown keys or `from == to` leave the order
/// unchanged.
pub fn reorder(order: &[WidgetKey], from: WidgetKey, to: WidgetKey) -> Vec<WidgetKey> {
    let mut next = order.to_vec();
    if from == to {
        return next;
    }
    let (Some(old_index), Some(new_index)) = (
        order.iter().position(|k| *k == from),
        order.iter().position(|k| *k == to),
    ) else {
        return next;
    };
    let moved = next.remove(old_index);
    next.insert(new_index, moved);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use super::WidgetKey::*;

    #[test]
    fn dragging_drg_release_to_front() {
        let order = WidgetKey::ALL;
        assert_eq!(
            reorder(&order, DrgRelease, CriticalIssues),
            vec![DrgRelease, CriticalIssues, SourcingStatus, Feasibility, ProjectStatus]
        );
    }

    #[test]
    fn dragging_forward_lands_on_target_index() {
        assert_eq!(
            reorder(&WidgetKey::ALL, CriticalIssues, DrgRelease),
            vec![SourcingStatus, DrgRelease, CriticalIssues, Feasibility, ProjectStatus]
        );
    }

    #[test]
    fn dropping_on_self_or_unknown_target_is_a_no_op() {
        assert_eq!(reorder(&WidgetKey::ALL, Feasibility, Feasibility), WidgetKey::ALL.to_vec());
        let partial = [CriticalIssues, Feasibility];
        assert_eq!(reorder(&partial, Feasibility, DrgRelease), partial.to_vec());
    }

    #[test]
    fn move_widget_reports_change() {
        let mut order = WidgetOrder::default();
        assert!(!order.move_widget(ProjectStatus, ProjectStatus));
        assert!(order.move_widget(ProjectStatus, SourcingStatus));
        assert_eq!(
            order.keys(),
            &[CriticalIssues, ProjectStatus, SourcingStatus, DrgRelease, Feasibility]
        );
    }

    #[test]
    fn stored_order_is_normalized() {
        let order: WidgetOrder = serde_json::from_str(
            r#"["feasibility", "bogus", "feasibility", "drgRelease"]"#,
        )
        .unwrap();
        assert_eq!(
            order.keys(),
            &[Feasibility, DrgRelease, CriticalIssues, SourcingStatus, ProjectStatus]
        );
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"["feasibility","drgRelease","criticalIssues","sourcingStatus","projectStatus"]"#
        );
    }

    #[test]
    fn status_counts_accept_numbers_and_strings() {
        let counts: StatusCounts =
            serde_json::from_str(r#"{"total": 10, "done": "6", "pending": 4.5}"#).unwrap();
        assert_eq!(counts, StatusCounts::new("10", "6", "4.5"));
        assert_eq!(counts.pending_value(), 4.5);

        let sparse: StatusCounts = serde_json::from_str(r#"{"total": null}"#).unwrap();
        assert_eq!(sparse, StatusCounts::default());
    }

    #[test]
    fn coerce_number_falls_back_to_zero() {
        assert_eq!(coerce_number(" 7 "), 7.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
    }

    #[test]
    fn collection_uses_storage_keys() {
        let mut widgets = WidgetCollection::default();
        widgets.critical_issues.push("Supplier delay".into());
        let json = serde_json::to_value(&widgets).unwrap();
        for key in WidgetKey::ALL {
            assert!(json.get(key.as_str()).is_some(), "missing {}", key.as_str());
        }
        assert_eq!(json["criticalIssues"][0], "Supplier delay");

        let partial: WidgetCollection =
            serde_json::from_str(r#"{"feasibility": ["ok"]}"#).unwrap();
        assert_eq!(partial.feasibility, vec!["ok".to_string()]);
        assert_eq!(partial.total_entries(), 1);
    }

    #[test]
    fn kinds_and_accessors_agree() {
        let mut widgets = WidgetCollection::default();
        for key in WidgetKey::ALL {
            match key.kind() {
                WidgetKind::Text => {
                    assert!(widgets.text_mut(key).is_some());
                    assert!(widgets.status_mut(key).is_none());
                }
                WidgetKind::Status => {
                    assert!(widgets.status_mut(key).is_some());
                    assert!(widgets.text_mut(key).is_none());
                }
            }
        }
    }
}
