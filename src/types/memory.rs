//! Saved-memory catalog types and calendar primitives

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category a saved memory was filed under by the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryCategory {
    MagicalMoments,
    HeartfeltFeelings,
    LifeUpdates,
    DifficultTimes,
    SharedWins,
}

impl MemoryCategory {
    pub const ALL: [MemoryCategory; 5] = [
        MemoryCategory::MagicalMoments,
        MemoryCategory::HeartfeltFeelings,
        MemoryCategory::LifeUpdates,
        MemoryCategory::DifficultTimes,
        MemoryCategory::SharedWins,
    ];
}

impl fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MemoryCategory::MagicalMoments => "Magical Moments",
            MemoryCategory::HeartfeltFeelings => "Heartfelt Feelings",
            MemoryCategory::LifeUpdates => "Life Updates",
            MemoryCategory::DifficultTimes => "Difficult Times",
            MemoryCategory::SharedWins => "Shared Wins",
        };
        f.write_str(name)
    }
}

/// A long-term memory record owned by the host application.
///
/// The engine only reads and ranks these; it never creates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedMemory {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: MemoryCategory,
    pub date: NaiveDate,
    pub person_name: Option<String>,
}

impl SavedMemory {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: MemoryCategory,
        date: NaiveDate,
        person_name: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            category,
            date,
            person_name,
        }
    }
}

/// A recurring calendar date without a year (birthday, anniversary, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Build a month/day pair, rejecting values no year can hold
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // Validate against a leap year so Feb 29 is representable
        NaiveDate::from_ymd_opt(2024, month, day)?;
        Some(Self { month, day })
    }

    /// Project onto a concrete year. Feb 29 lands on Feb 28 in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month, self.day.saturating_sub(1)))
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}
