use super::widget::{StatusCounts, WidgetKey};

/// One bar of a status chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
}

/// Two-series bar chart built from a status widget's latest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Category label under the bars ("Sourcing", "DRG Release").
    pub category: &'static str,
    pub done: Bar,
    pub pending: Bar,
}

impl ChartData {
    /// `None` when there is nothing to chart.
    pub fn from_entries(key: WidgetKey, entries: &[StatusCounts]) -> Option<Self> {
        let latest = entries.last()?;
        Some(Self {
            category: key.chart_label(),
            done: Bar {
                label: key.done_label(),
                value: latest.done_value(),
            },
            pending: Bar {
                label: "Pending",
                value: latest.pending_value(),
            },
        })
    }

    /// Upper bound for the value axis.
    pub fn max_value(&self) -> f64 {
        self.done.value.max(self.pending.value).max(0.0)
    }
}

/// Memoized [`ChartData`] for one widget. Recomputed only when the entry
/// sequence changes length or its latest entry changes.
#[derive(Debug, Clone, Default)]
pub struct ChartCache {
    fingerprint: Option<(usize, StatusCounts)>,
    data: Option<ChartData>,
    recomputes: usize,
}

impl ChartCache {
    pub fn get(&mut self, key: WidgetKey, entries: &[StatusCounts]) -> Option<&ChartData> {
        let fingerprint = entries.last().map(|last| (entries.len(), last.clone()));
        if self.recomputes == 0 || fingerprint != self.fingerprint {
            self.data = ChartData::from_entries(key, entries);
            self.fingerprint = fingerprint;
            self.recomputes += 1;
        }
        self.data.as_ref()
    }

    /// How many times the chart has been rebuilt.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_latest_entry_only() {
        let entries = vec![
            StatusCounts::new("10", "2", "8"),
            StatusCounts::new("10", "6", "4"),
        ];
        let chart = ChartData::from_entries(WidgetKey::SourcingStatus, &entries).unwrap();
        assert_eq!(chart.category, "Sourcing");
        assert_eq!(chart.done, Bar { label: "Completed", value: 6.0 });
        assert_eq!(chart.pending, Bar { label: "Pending", value: 4.0 });
        assert_eq!(chart.max_value(), 6.0);
    }

    #[test]
    fn drg_release_labels_and_coercion() {
        let entries = vec![StatusCounts::new("5", "x", "3")];
        let chart = ChartData::from_entries(WidgetKey::DrgRelease, &entries).unwrap();
        assert_eq!(chart.category, "DRG Release");
        assert_eq!(chart.done, Bar { label: "Released", value: 0.0 });
        assert_eq!(chart.pending.value, 3.0);
    }

    #[test]
    fn empty_sequence_has_no_chart() {
        assert!(ChartData::from_entries(WidgetKey::DrgRelease, &[]).is_none());
        let mut cache = ChartCache::default();
        assert!(cache.get(WidgetKey::DrgRelease, &[]).is_none());
    }

    #[test]
    fn cache_recomputes_only_on_change() {
        let mut cache = ChartCache::default();
        let mut entries = vec![StatusCounts::new("10", "6", "4")];

        cache.get(WidgetKey::SourcingStatus, &entries);
        cache.get(WidgetKey::SourcingStatus, &entries);
        assert_eq!(cache.recomputes(), 1);

        entries.push(StatusCounts::new("10", "9", "1"));
        let chart = cache.get(WidgetKey::SourcingStatus, &entries).unwrap().clone();
        assert_eq!(chart.done.value, 9.0);
        assert_eq!(cache.recomputes(), 2);

        entries.clear();
        assert!(cache.get(WidgetKey::SourcingStatus, &entries).is_none());
        assert_eq!(cache.recomputes(), 3);
    }
}
