//! Estimated delivery dates and weekend-to-Monday normalization.
//!
//! Dates arrive as text from the datastore. Text that does not parse is kept
//! verbatim and treated as data: normalization passes it through and
//! chronological ordering places it after every valid date.

use super::MonthKey;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Textual layout an estimated date was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// Long month form, e.g. `July 21, 2025`.
    LongMonth,
    /// ISO calendar form, e.g. `2025-07-21`.
    Iso,
}

impl DateLayout {
    const ALL: [Self; 2] = [Self::LongMonth, Self::Iso];

    const fn parse_pattern(self) -> &'static str {
        match self {
            Self::LongMonth => "%B %d, %Y",
            Self::Iso => "%Y-%m-%d",
        }
    }

    const fn render_pattern(self) -> &'static str {
        match self {
            Self::LongMonth => "%B %-d, %Y",
            Self::Iso => "%Y-%m-%d",
        }
    }

    fn parse(self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text, self.parse_pattern()).ok()
    }

    /// Renders `date` in this layout.
    #[must_use]
    pub fn render(self, date: NaiveDate) -> String {
        date.format(self.render_pattern()).to_string()
    }
}

/// Target date of a roadmap task.
///
/// Keeps the original text so unparseable values round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EstimatedDate {
    text: String,
    parsed: Option<(NaiveDate, DateLayout)>,
}

impl EstimatedDate {
    /// Parses date text in any supported layout.
    ///
    /// Never fails: text that matches no layout is kept as an invalid date.
    #[must_use]
    pub fn parse(text: impl Into<String>) -> Self {
        let raw = text.into();
        let candidate = raw.trim();
        let parsed = DateLayout::ALL
            .into_iter()
            .find_map(|layout| layout.parse(candidate).map(|date| (date, layout)));
        Self { text: raw, parsed }
    }

    /// Creates an estimated date rendered in the long month layout.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::rendered(date, DateLayout::LongMonth)
    }

    fn rendered(date: NaiveDate, layout: DateLayout) -> Self {
        Self {
            text: layout.render(date),
            parsed: Some((date, layout)),
        }
    }

    /// Returns the date text as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the calendar date, if the text parsed.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.parsed.map(|(date, _)| date)
    }

    /// Returns the layout the text was written in, if it parsed.
    #[must_use]
    pub fn layout(&self) -> Option<DateLayout> {
        self.parsed.map(|(_, layout)| layout)
    }

    /// Returns `true` when the text parsed to a calendar date.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// Returns the calendar month this date falls in.
    #[must_use]
    pub fn month_key(&self) -> Option<MonthKey> {
        self.date().map(MonthKey::from_date)
    }

    /// Moves a weekend date to the following Monday.
    ///
    /// Weekday dates and invalid dates are returned unchanged, including
    /// their original text. Shifted dates are rendered in the layout the
    /// input used.
    #[must_use]
    pub fn normalized(&self) -> Self {
        self.parsed.map_or_else(
            || self.clone(),
            |(date, layout)| {
                let shifted = shift_weekend_to_monday(date);
                if shifted == date {
                    self.clone()
                } else {
                    Self::rendered(shifted, layout)
                }
            },
        )
    }
}

impl Ord for EstimatedDate {
    /// Valid dates ascend chronologically and sort before every invalid
    /// date; invalid dates compare by text.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.date(), other.date()) {
            (Some(left), Some(right)) => left.cmp(&right).then_with(|| self.text.cmp(&other.text)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.text.cmp(&other.text),
        }
    }
}

impl PartialOrd for EstimatedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<String> for EstimatedDate {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<&str> for EstimatedDate {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<NaiveDate> for EstimatedDate {
    fn from(value: NaiveDate) -> Self {
        Self::from_date(value)
    }
}

impl From<EstimatedDate> for String {
    fn from(value: EstimatedDate) -> Self {
        value.text
    }
}

impl fmt::Display for EstimatedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Returns the Monday following a Saturday or Sunday, otherwise `date`.
///
/// Returns `date` unchanged if the shift would overflow the calendar range.
#[must_use]
pub fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => 0,
    };
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

/// Normalizes date text, returning the input unchanged when it does not
/// parse or does not fall on a weekend.
///
/// # Examples
///
/// ```
/// use roadmap::task::domain::normalize_date_text;
///
/// assert_eq!(normalize_date_text("July 19, 2025"), "July 21, 2025");
/// assert_eq!(normalize_date_text("July 22, 2025"), "July 22, 2025");
/// assert_eq!(normalize_date_text("Invalid Date"), "Invalid Date");
/// ```
#[must_use]
pub fn normalize_date_text(text: &str) -> String {
    EstimatedDate::parse(text).normalized().into()
}
