//! Visible date ranges and hour rows for the calendar grid.

use crate::model::CalendarEvent;
use crate::slot_time::SlotTime;
use chrono::{Datelike, Duration, Months, NaiveDate, Timelike};

/// Hours shown by the time grid when no event is visible
pub const DEFAULT_HOURS: std::ops::RangeInclusive<u32> = 9..=17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    Day,
    #[default]
    Week,
    Month,
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Day, CalendarView::Week, CalendarView::Month];

    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Day => "Day",
            CalendarView::Week => "Week",
            CalendarView::Month => "Month",
        }
    }

    /// Day and week views lay events out in hourly rows
    pub fn is_time_grid(&self) -> bool {
        !matches!(self, CalendarView::Month)
    }
}

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Dates rendered by `view` around `anchor`. Month view is padded to whole
/// weeks.
pub fn visible_days(view: CalendarView, anchor: NaiveDate) -> Vec<NaiveDate> {
    match view {
        CalendarView::Day => vec![anchor],
        CalendarView::Week => week_start(anchor).iter_days().take(7).collect(),
        CalendarView::Month => {
            let first = first_of_month(anchor);
            let last = first
                .checked_add_months(Months::new(1))
                .map(|next| next - Duration::days(1))
                .unwrap_or(first);
            let end = week_start(last) + Duration::days(6);
            week_start(first).iter_days().take_while(|d| *d <= end).collect()
        }
    }
}

/// Anchor after moving one view-length forwards or backwards
pub fn step(view: CalendarView, anchor: NaiveDate, forward: bool) -> NaiveDate {
    match view {
        CalendarView::Day | CalendarView::Week => {
            let days = if view == CalendarView::Day { 1 } else { 7 };
            if forward {
                anchor + Duration::days(days)
            } else {
                anchor - Duration::days(days)
            }
        }
        CalendarView::Month => {
            let first = first_of_month(anchor);
            let moved = if forward {
                first.checked_add_months(Months::new(1))
            } else {
                first.checked_sub_months(Months::new(1))
            };
            moved.unwrap_or(first)
        }
    }
}

/// Toolbar heading for the visible range
pub fn title(view: CalendarView, anchor: NaiveDate) -> String {
    match view {
        CalendarView::Day => anchor.format("%B %-d, %Y").to_string(),
        CalendarView::Week => {
            let start = week_start(anchor);
            let end = start + Duration::days(6);
            if start.year() != end.year() {
                format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
            } else if start.month() != end.month() {
                format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
            } else {
                format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
            }
        }
        CalendarView::Month => anchor.format("%B %Y").to_string(),
    }
}

/// Events starting on `date`, with their parsed start. Events whose start
/// cannot be parsed are never placed on the grid.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<(SlotTime, &CalendarEvent)> {
    events
        .iter()
        .filter_map(|event| SlotTime::parse(&event.start).ok().map(|start| (start, event)))
        .filter(|(start, _)| start.calendar_date() == date)
        .collect()
}

/// Hourly rows spanning every event on `days`
pub fn hour_rows(events: &[CalendarEvent], days: &[NaiveDate]) -> Vec<u32> {
    let hours: Vec<u32> = days
        .iter()
        .flat_map(|day| events_on(events, *day))
        .map(|(start, _)| start.time_of_day().hour())
        .collect();

    match (hours.iter().min(), hours.iter().max()) {
        (Some(min), Some(max)) => (*min..=*max).collect(),
        _ => DEFAULT_HOURS.collect(),
    }
}
