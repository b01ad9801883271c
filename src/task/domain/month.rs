//! Calendar month keys, the month metadata catalog, and month buckets.

use super::{EstimatedDate, MonthCatalogError, Task, TaskDomainError, TaskStatus};
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month of a specific year.
///
/// Ordering is chronological: by year, then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a validated month key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidMonth`] when `month` is outside
    /// `1..=12`.
    pub const fn new(year: i32, month: u32) -> Result<Self, TaskDomainError> {
        if month == 0 || month > 12 {
            return Err(TaskDomainError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parses a `<Month> <Year>` label such as `July 2025`.
    ///
    /// Month names are matched case-insensitively and may be abbreviated.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidMonthLabel`] when the label cannot
    /// be split into a month name and a year.
    pub fn parse_label(label: &str) -> Result<Self, TaskDomainError> {
        let invalid = || TaskDomainError::InvalidMonthLabel(label.to_owned());
        let (name, year_text) = label.trim().rsplit_once(' ').ok_or_else(invalid)?;
        let month = name.trim().parse::<Month>().map_err(|_| invalid())?;
        let year = year_text.parse::<i32>().map_err(|_| invalid())?;
        Self::new(year, month.number_from_month())
    }

    /// Returns the four-digit year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number, `1` for January.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Returns the English long month name.
    #[must_use]
    pub fn month_name(self) -> &'static str {
        usize::try_from(self.month.saturating_sub(1))
            .ok()
            .and_then(|index| MONTH_NAMES.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the display label, e.g. `July 2025`.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Display metadata for one recognised month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthMetadata {
    /// Stable slug, e.g. `july-2025`.
    pub id: String,
    /// Descriptive theme text for the month.
    pub theme: String,
}

impl MonthMetadata {
    /// Creates month metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            theme: theme.into(),
        }
    }
}

/// Table of months the grouping pass produces buckets for.
///
/// # Examples
///
/// ```
/// use roadmap::task::domain::{MonthCatalog, MonthKey};
///
/// let catalog = MonthCatalog::from_json(
///     r#"{"March 2026": {"id": "march-2026", "theme": "Hardening"}}"#,
/// )
/// .expect("valid catalog");
/// let key = MonthKey::new(2026, 3).expect("valid month");
/// assert_eq!(catalog.get(key).map(|m| m.id.as_str()), Some("march-2026"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthCatalog {
    entries: BTreeMap<MonthKey, MonthMetadata>,
}

impl MonthCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the July to December 2025 table of the reference deployment.
    #[must_use]
    pub fn reference() -> Self {
        let rows = [
            (
                7,
                "july-2025",
                "System Reliability & Foundation - Making sure everything works perfectly",
            ),
            (
                8,
                "august-2025",
                "Reports & Sales Rep Tools - Better information and tools for decision-making",
            ),
            (
                9,
                "september-2025",
                "Mobile Apps & Motivation - Completing mobile tools and boosting engagement",
            ),
            (
                10,
                "october-2025",
                "AI Integration & Analytics - Smart automation and data-driven insights",
            ),
            (11, "november-2025", "Advanced Features & Expansion"),
            (
                12,
                "december-2025",
                "Platform Optimization & 2026 Preparation - Final optimizations and preparation for the new year",
            ),
        ];
        let entries = rows
            .into_iter()
            .map(|(month, id, theme)| {
                (
                    MonthKey { year: 2025, month },
                    MonthMetadata::new(id, theme),
                )
            })
            .collect();
        Self { entries }
    }

    /// Loads a catalog keyed by `<Month> <Year>` labels.
    ///
    /// # Errors
    ///
    /// Returns [`MonthCatalogError::Json`] when the document is malformed and
    /// [`MonthCatalogError::Key`] when a key is not a month label.
    pub fn from_json(document: &str) -> Result<Self, MonthCatalogError> {
        let labelled: BTreeMap<String, MonthMetadata> = serde_json::from_str(document)?;
        let mut catalog = Self::new();
        for (label, metadata) in labelled {
            catalog.insert(MonthKey::parse_label(&label)?, metadata);
        }
        Ok(catalog)
    }

    /// Adds a month and returns the catalog.
    #[must_use]
    pub fn with_month(mut self, key: MonthKey, metadata: MonthMetadata) -> Self {
        self.insert(key, metadata);
        self
    }

    /// Inserts a month, returning the metadata it replaced.
    pub fn insert(&mut self, key: MonthKey, metadata: MonthMetadata) -> Option<MonthMetadata> {
        self.entries.insert(key, metadata)
    }

    /// Returns metadata for `key`.
    #[must_use]
    pub fn get(&self, key: MonthKey) -> Option<&MonthMetadata> {
        self.entries.get(&key)
    }

    /// Returns `true` when `key` is recognised.
    #[must_use]
    pub fn contains(&self, key: MonthKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the number of recognised months.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no month is recognised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates months in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (MonthKey, &MonthMetadata)> {
        self.entries.iter().map(|(key, metadata)| (*key, metadata))
    }
}

/// Tasks of one calendar month, ready for display.
///
/// Buckets are derived on every grouping pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Calendar month the bucket covers.
    pub key: MonthKey,
    /// Catalog slug for the month.
    pub id: String,
    /// Upper-cased month label, e.g. `JULY 2025`.
    pub title: String,
    /// Catalog theme text.
    pub theme: String,
    /// Tasks in chronological order.
    pub tasks: Vec<Task>,
    /// Whether the month is expanded in the view.
    pub is_expanded: bool,
}

impl MonthBucket {
    /// Creates a collapsed bucket from catalog metadata.
    #[must_use]
    pub fn new(key: MonthKey, metadata: &MonthMetadata, tasks: Vec<Task>) -> Self {
        Self {
            key,
            id: metadata.id.clone(),
            title: key.label().to_uppercase(),
            theme: metadata.theme.clone(),
            tasks,
            is_expanded: false,
        }
    }

    /// Returns the date of the first task.
    #[must_use]
    pub fn earliest_date(&self) -> Option<&EstimatedDate> {
        self.tasks.first().map(Task::estimated_date)
    }

    /// Returns the number of completed tasks in the month.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Completed)
            .count()
    }
}
