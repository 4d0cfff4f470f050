use chrono::{Datelike, NaiveDate};

use super::milestone::Milestone;

/// A calendar month on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based.
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }
}

/// One cell of the year header row: a year and the months it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSpan {
    pub year: i32,
    pub months: Vec<u32>,
}

/// Month-by-month columns spanning the milestone range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineGrid {
    months: Vec<YearMonth>,
}

impl TimelineGrid {
    /// Every month from the first milestone's month to the last one's,
    /// inclusive. Milestones are expected in schedule order.
    pub fn build(milestones: &[Milestone]) -> Self {
        let (Some(first), Some(last)) = (milestones.first(), milestones.last()) else {
            return Self::default();
        };
        let start = YearMonth::of(first.date);
        let end = YearMonth::of(last.date);

        let mut months = Vec::new();
        let mut current = start;
        while current <= end {
            months.push(current);
            current = current.next();
        }
        Self { months }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn months(&self) -> &[YearMonth] {
        &self.months
    }

    /// Months grouped by year, for the two-row header.
    pub fn years(&self) -> Vec<YearSpan> {
        let mut spans: Vec<YearSpan> = Vec::new();
        for ym in &self.months {
            match spans.last_mut() {
                Some(span) if span.year == ym.year => span.months.push(ym.month),
                _ => spans.push(YearSpan {
                    year: ym.year,
                    months: vec![ym.month],
                }),
            }
        }
        spans
    }

    /// Milestones dated within `month`, in schedule order.
    pub fn milestones_in<'a>(milestones: &'a [Milestone], month: YearMonth) -> Vec<&'a Milestone> {
        milestones.iter().filter(|m| month.contains(m.date)).collect()
    }
}

// ── Table sizing ────────────────────────────────────────────────────────────

pub const TABLE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 800.0..=3000.0;
pub const TABLE_WIDTH_STEP: f64 = 50.0;
pub const TABLE_HEIGHT_RANGE: std::ops::RangeInclusive<f32> = 150.0..=800.0;
pub const TABLE_HEIGHT_STEP: f64 = 10.0;

/// User-adjustable size of the dashboard timeline table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSize {
    pub width: f32,
    pub height: f32,
}

impl Default for TableSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 200.0,
        }
    }
}

impl TableSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.clamp(*TABLE_WIDTH_RANGE.start(), *TABLE_WIDTH_RANGE.end()),
            height: height.clamp(*TABLE_HEIGHT_RANGE.start(), *TABLE_HEIGHT_RANGE.end()),
        }
    }

    /// Font size for the month header, shrinking as columns get narrower.
    pub fn month_font_size(&self, month_count: usize) -> f32 {
        if month_count == 0 {
            return 14.0;
        }
        (self.width / month_count as f32 / 2.0).clamp(8.0, 14.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn milestone(name: &str, y: i32, m: u32, d: u32) -> Milestone {
        Milestone {
            name: name.into(),
            offset: 0.0,
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        }
    }

    #[test]
    fn months_are_grouped_by_year() {
        let milestones = vec![
            milestone("Pilot", 2024, 11, 20),
            milestone("SOP", 2025, 3, 2),
        ];
        let grid = TimelineGrid::build(&milestones);
        assert_eq!(grid.months().len(), 5);
        assert_eq!(
            grid.years(),
            vec![
                YearSpan {
                    year: 2024,
                    months: vec![11, 12]
                },
                YearSpan {
                    year: 2025,
                    months: vec![1, 2, 3]
                },
            ]
        );
    }

    #[test]
    fn empty_milestones_give_empty_grid() {
        let grid = TimelineGrid::build(&[]);
        assert!(grid.is_empty());
        assert!(grid.years().is_empty());
    }

    #[test]
    fn single_month_span() {
        let milestones = vec![milestone("A", 2025, 6, 1), milestone("B", 2025, 6, 30)];
        let grid = TimelineGrid::build(&milestones);
        assert_eq!(grid.months(), &[YearMonth { year: 2025, month: 6 }]);
    }

    #[test]
    fn full_schedule_covers_fifty_six_months() {
        let sop = NaiveDate::from_ymd_opt(2030, 1, 10).unwrap();
        let schedule = crate::model::milestone::generate_schedule(sop).unwrap();
        let grid = TimelineGrid::build(&schedule);
        assert_eq!(grid.months().len(), 56);
        let spanned: usize = grid.years().iter().map(|s| s.months.len()).sum();
        assert_eq!(spanned, 56);
    }

    #[test]
    fn milestones_in_month_returns_all_matches() {
        let milestones = vec![
            milestone("MPP", 2025, 1, 3),
            milestone("Pilot", 2025, 1, 28),
            milestone("SOP", 2025, 2, 1),
        ];
        let jan = YearMonth { year: 2025, month: 1 };
        let names: Vec<&str> = TimelineGrid::milestones_in(&milestones, jan)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["MPP", "Pilot"]);
    }

    #[test]
    fn table_size_is_clamped() {
        assert_eq!(TableSize::new(100.0, 5000.0), TableSize::new(800.0, 800.0));
        let size = TableSize::default();
        assert!((size.month_font_size(56) - 10.714).abs() < 0.01);
        assert_eq!(size.month_font_size(5), 14.0);
        assert_eq!(TableSize::new(800.0, 200.0).month_font_size(80), 8.0);
    }
}
