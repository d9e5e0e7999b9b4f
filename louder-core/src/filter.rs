//! Client-side event filtering.
//!
//! Filtering never reorders and never invents events: the result is always
//! the input sequence with non-matching events removed. Every criterion that
//! is set must hold (category AND venue AND date window AND search text);
//! unset criteria match everything.

use louder_sdk::objects::Event;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

use crate::dates;

/// Length of the rolling "this week" / "this weekend" window, in days.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// A named date range relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateWindow {
    Today,
    Tomorrow,
    ThisWeekend,
    ThisWeek,
    ThisMonth,
}

impl DateWindow {
    pub const ALL: [DateWindow; 5] = [
        DateWindow::Today,
        DateWindow::Tomorrow,
        DateWindow::ThisWeekend,
        DateWindow::ThisWeek,
        DateWindow::ThisMonth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DateWindow::Today => "today",
            DateWindow::Tomorrow => "tomorrow",
            DateWindow::ThisWeekend => "this-weekend",
            DateWindow::ThisWeek => "this-week",
            DateWindow::ThisMonth => "this-month",
        }
    }

    /// Whether an event on `date` falls inside this window as seen on `today`.
    pub fn contains(self, date: Date, today: Date) -> bool {
        match self {
            DateWindow::Today => date == today,
            DateWindow::Tomorrow => date == dates::tomorrow(today),
            DateWindow::ThisWeekend => {
                dates::is_weekend(date) && dates::is_within_next_days(date, today, WEEK_WINDOW_DAYS)
            }
            DateWindow::ThisWeek => dates::is_within_next_days(date, today, WEEK_WINDOW_DAYS),
            DateWindow::ThisMonth => dates::is_same_month(date, today),
        }
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown date window `{0}` (expected today, tomorrow, this-weekend, this-week or this-month)")]
pub struct UnknownDateWindow(pub String);

impl FromStr for DateWindow {
    type Err = UnknownDateWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateWindow::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDateWindow(s.to_string()))
    }
}

/// The combined filter state of the listing page.
///
/// Empty strings mean "no constraint", exactly like the unselected
/// `All Categories` / `All Venues` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date_window: Option<DateWindow>,
    #[serde(default)]
    pub search_text: Option<String>,
}

impl FilterCriteria {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn with_date_window(mut self, window: DateWindow) -> Self {
        self.date_window = Some(window);
        self
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    /// True when no criterion constrains the listing.
    pub fn is_empty(&self) -> bool {
        non_empty(self.category.as_deref()).is_none()
            && non_empty(self.venue.as_deref()).is_none()
            && self.date_window.is_none()
            && self.search_term().is_none()
    }

    /// The normalized search term: trimmed, lowercased, `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `event` satisfies every set criterion on `today`.
    pub fn matches(&self, event: &Event, today: Date) -> bool {
        self.matches_with_term(event, today, self.search_term().as_deref())
    }

    fn matches_with_term(&self, event: &Event, today: Date, term: Option<&str>) -> bool {
        if let Some(category) = non_empty(self.category.as_deref()) {
            if event.category.as_deref() != Some(category) {
                return false;
            }
        }

        if let Some(venue) = non_empty(self.venue.as_deref()) {
            if event.venue.as_deref() != Some(venue) {
                return false;
            }
        }

        if let Some(window) = self.date_window {
            let date = dates::parse_event_date(event.date.as_deref(), today);
            if !window.contains(date, today) {
                return false;
            }
        }

        match term {
            Some(term) => matches_search(event, term),
            None => true,
        }
    }
}

/// Case-insensitive substring search over title, description and venue.
///
/// `term` must already be lowercased.
pub fn matches_search(event: &Event, term: &str) -> bool {
    let hit = |field: Option<&str>| field.is_some_and(|v| v.to_lowercase().contains(term));
    hit(Some(event.title.as_str()))
        || hit(event.description.as_deref())
        || hit(event.venue.as_deref())
}

/// Keep the events that match `criteria` on `today`, in their original order.
pub fn filter_events<'a, I>(events: I, criteria: &FilterCriteria, today: Date) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let term = criteria.search_term();
    events
        .into_iter()
        .filter(|event| criteria.matches_with_term(event, today, term.as_deref()))
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
