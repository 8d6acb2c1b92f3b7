//! Per-session conversational memory
//!
//! One [`MemoryStore`] per active user session, owned and injected by the
//! caller; there is no process-wide instance. The store keeps the rolling
//! 30-day emotional history, the person entities extracted from
//! conversation, and the projection of significant dates onto the calendar.
//! No operation performs I/O and none can fail; absent lookups return
//! empty values.

pub mod history;
pub mod person;

pub use history::{EmotionStat, EmotionalHistoryEntry};
pub use person::{PersonEntity, PersonUpdate};

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};

use crate::clock::Clock;
use crate::types::EmotionTag;

/// Default rolling window for emotional pattern analysis
pub const DEFAULT_HISTORY_WINDOW_DAYS: i64 = 30;

/// A significant date projected onto the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingDate {
    pub person_name: String,
    pub occasion: String,
    pub date: NaiveDate,
}

/// Keyed store of person facts plus the windowed emotional history
pub struct MemoryStore {
    clock: Arc<dyn Clock>,
    history: history::EmotionalHistory,
    /// Keyed by lowercased name
    people: BTreeMap<String, PersonEntity>,
    /// Lowercased key of the person most recently upserted
    recent: Option<String>,
}

impl MemoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_window(clock, DEFAULT_HISTORY_WINDOW_DAYS)
    }

    pub fn with_window(clock: Arc<dyn Clock>, window_days: i64) -> Self {
        Self {
            clock,
            history: history::EmotionalHistory::new(Duration::days(window_days)),
            people: BTreeMap::new(),
            recent: None,
        }
    }

    /// Append an emotional reading and evict entries past the window
    pub fn record_emotion(&mut self, emotion: EmotionTag, intensity: u8) {
        let now = self.clock.now();
        self.history.record(emotion, intensity.clamp(1, 10), now);
    }

    /// Create or merge a person record, keyed case-insensitively by name
    pub fn upsert_person(&mut self, update: PersonUpdate) {
        let key = update.name.to_lowercase();
        let merged = match self.people.get(&key) {
            Some(existing) => existing.merged(update),
            None => PersonEntity::from_update(update),
        };
        self.people.insert(key.clone(), merged);
        self.recent = Some(key);
    }

    /// Aggregate the current window, grouped by tag. Idempotent.
    pub fn emotional_pattern(&self) -> BTreeMap<EmotionTag, EmotionStat> {
        self.history.pattern(self.clock.now())
    }

    /// Case-insensitive person lookup
    pub fn person_context(&self, name: &str) -> Option<&PersonEntity> {
        self.people.get(&name.to_lowercase())
    }

    /// The most recently upserted person, for conversational continuity
    pub fn recent_person(&self) -> Option<&PersonEntity> {
        self.recent.as_ref().and_then(|key| self.people.get(key))
    }

    /// All known people, in key order
    pub fn people(&self) -> impl Iterator<Item = &PersonEntity> {
        self.people.values()
    }

    /// Project every stored significant date onto the calendar and keep
    /// those within `[today, today + within_days]`, soonest first.
    ///
    /// A month/day that has already passed this year rolls to next year, so
    /// a past date is never reported as upcoming.
    pub fn upcoming_dates(&self, within_days: i64) -> Vec<UpcomingDate> {
        let today = self.clock.now().date_naive();
        let horizon = today + Duration::days(within_days);

        let mut upcoming: Vec<UpcomingDate> = self
            .people
            .values()
            .flat_map(|person| {
                person.significant_dates.iter().map(|(occasion, month_day)| {
                    let mut date = month_day.in_year(today.year());
                    if date < today {
                        date = month_day.in_year(today.year() + 1);
                    }
                    UpcomingDate {
                        person_name: person.name.clone(),
                        occasion: occasion.clone(),
                        date,
                    }
                })
            })
            .filter(|entry| entry.date <= horizon)
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::types::MonthDay;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn store_at(clock: &ManualClock) -> MemoryStore {
        MemoryStore::new(Arc::new(clock.clone()))
    }

    fn june_first() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_window_eviction_after_31_days() {
        let clock = june_first();
        let mut store = store_at(&clock);

        store.record_emotion(EmotionTag::Grief, 8);
        assert_eq!(store.emotional_pattern()[&EmotionTag::Grief].count, 1);

        clock.advance(Duration::days(31));
        assert!(store.emotional_pattern().is_empty());
    }

    #[test]
    fn test_pattern_is_idempotent() {
        let clock = june_first();
        let mut store = store_at(&clock);
        store.record_emotion(EmotionTag::Sadness, 6);
        store.record_emotion(EmotionTag::Sadness, 8);

        let first = store.emotional_pattern();
        let second = store.emotional_pattern();
        assert_eq!(first.len(), second.len());
        assert_eq!(
            first[&EmotionTag::Sadness].count,
            second[&EmotionTag::Sadness].count
        );
        assert_eq!(
            first[&EmotionTag::Sadness].average_intensity,
            second[&EmotionTag::Sadness].average_intensity
        );
    }

    #[test]
    fn test_intensity_clamped_on_record() {
        let clock = june_first();
        let mut store = store_at(&clock);
        store.record_emotion(EmotionTag::Anger, 200);
        assert_eq!(store.emotional_pattern()[&EmotionTag::Anger].average_intensity, 10.0);
    }

    #[test]
    fn test_upsert_unions_qualities_across_calls() {
        let clock = june_first();
        let mut store = store_at(&clock);

        let mut first = PersonUpdate::named("Mom");
        first.qualities.insert("loved gardening".to_string());
        store.upsert_person(first);

        let mut second = PersonUpdate::named("MOM");
        second.qualities.insert("told great stories".to_string());
        store.upsert_person(second);

        let mom = store.person_context("mom").unwrap();
        assert_eq!(mom.qualities.len(), 2);
        assert!(mom.qualities.contains("loved gardening"));
        assert!(mom.qualities.contains("told great stories"));
    }

    #[test]
    fn test_person_lookup_is_case_insensitive() {
        let clock = june_first();
        let mut store = store_at(&clock);
        store.upsert_person(PersonUpdate::named("Rose"));

        assert!(store.person_context("rose").is_some());
        assert!(store.person_context("ROSE").is_some());
        assert!(store.person_context("violet").is_none());
        assert_eq!(store.person_context("rose").unwrap().name, "Rose");
    }

    #[test]
    fn test_recent_person_tracks_last_upsert() {
        let clock = june_first();
        let mut store = store_at(&clock);
        assert!(store.recent_person().is_none());

        store.upsert_person(PersonUpdate::named("Mom"));
        store.upsert_person(PersonUpdate::named("Dad"));
        assert_eq!(store.recent_person().unwrap().name, "Dad");
    }

    #[test]
    fn test_upcoming_dates_window() {
        let clock = june_first();
        let mut store = store_at(&clock);

        // 2025-06-11 is 10 days out, 2025-06-21 is 20 days out
        let mut update = PersonUpdate::named("Mom");
        update
            .significant_dates
            .insert("birthday".to_string(), MonthDay::new(6, 11).unwrap());
        update
            .significant_dates
            .insert("anniversary".to_string(), MonthDay::new(6, 21).unwrap());
        store.upsert_person(update);

        let upcoming = store.upcoming_dates(14);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].occasion, "birthday");
        assert_eq!(
            upcoming[0].date,
            NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()
        );
    }

    #[test]
    fn test_passed_date_rolls_to_next_year() {
        let clock = june_first();
        let mut store = store_at(&clock);

        let mut update = PersonUpdate::named("Dad");
        update
            .significant_dates
            .insert("memorial".to_string(), MonthDay::new(1, 15).unwrap());
        store.upsert_person(update);

        // Not within 14 days once rolled to 2026
        assert!(store.upcoming_dates(14).is_empty());

        let wide = store.upcoming_dates(365);
        assert_eq!(wide.len(), 1);
        assert_eq!(wide[0].date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }

    #[test]
    fn test_upcoming_dates_sorted_ascending() {
        let clock = june_first();
        let mut store = store_at(&clock);

        let mut mom = PersonUpdate::named("Mom");
        mom.significant_dates
            .insert("birthday".to_string(), MonthDay::new(6, 10).unwrap());
        store.upsert_person(mom);

        let mut dad = PersonUpdate::named("Dad");
        dad.significant_dates
            .insert("birthday".to_string(), MonthDay::new(6, 4).unwrap());
        store.upsert_person(dad);

        let upcoming = store.upcoming_dates(14);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].person_name, "Dad");
        assert_eq!(upcoming[1].person_name, "Mom");
    }
}
