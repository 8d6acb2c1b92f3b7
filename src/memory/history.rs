//! Rolling window of emotional readings
//!
//! One entry is appended per classified utterance. The window is pruned
//! lazily on each write; reads additionally filter by the window so a clock
//! advance without an intervening write never leaks expired entries.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EmotionTag;

/// One recorded emotional reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalHistoryEntry {
    pub emotion: EmotionTag,
    pub intensity: u8,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate over the window for one emotion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionStat {
    pub count: usize,
    pub average_intensity: f64,
}

/// Time-bounded log of emotional readings
#[derive(Debug, Clone)]
pub(crate) struct EmotionalHistory {
    entries: VecDeque<EmotionalHistoryEntry>,
    window: Duration,
}

impl EmotionalHistory {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            window,
        }
    }

    /// Append an entry, then evict everything older than the window
    pub(crate) fn record(&mut self, emotion: EmotionTag, intensity: u8, now: DateTime<Utc>) {
        self.entries.push_back(EmotionalHistoryEntry {
            emotion,
            intensity,
            timestamp: now,
        });

        while let Some(front) = self.entries.front() {
            if now - front.timestamp > self.window {
                self.entries.pop_front();
            } else {
                break;
            }
        }
    }

    /// Group the in-window entries by tag
    pub(crate) fn pattern(&self, now: DateTime<Utc>) -> BTreeMap<EmotionTag, EmotionStat> {
        let mut sums: BTreeMap<EmotionTag, (usize, u64)> = BTreeMap::new();

        for entry in &self.entries {
            if now - entry.timestamp > self.window {
                continue;
            }
            let slot = sums.entry(entry.emotion).or_insert((0, 0));
            slot.0 += 1;
            slot.1 += u64::from(entry.intensity);
        }

        sums.into_iter()
            .map(|(emotion, (count, total))| {
                (
                    emotion,
                    EmotionStat {
                        count,
                        average_intensity: total as f64 / count as f64,
                    },
                )
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_eviction_on_write() {
        let mut history = EmotionalHistory::new(Duration::days(30));
        let t0 = start();

        history.record(EmotionTag::Grief, 8, t0);
        history.record(EmotionTag::Hope, 4, t0 + Duration::days(31));

        // The grief entry fell out of the window on the second write
        assert_eq!(history.len(), 1);
        let pattern = history.pattern(t0 + Duration::days(31));
        assert!(!pattern.contains_key(&EmotionTag::Grief));
        assert!(pattern.contains_key(&EmotionTag::Hope));
    }

    #[test]
    fn test_pattern_filters_without_mutating() {
        let mut history = EmotionalHistory::new(Duration::days(30));
        let t0 = start();
        history.record(EmotionTag::Grief, 8, t0);

        // No write after the clock advance; the read alone must exclude it
        let later = t0 + Duration::days(31);
        assert!(history.pattern(later).is_empty());
        // The entry is still stored until the next write prunes it
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_pattern_aggregates_average() {
        let mut history = EmotionalHistory::new(Duration::days(30));
        let t0 = start();
        history.record(EmotionTag::Grief, 9, t0);
        history.record(EmotionTag::Grief, 7, t0 + Duration::hours(1));
        history.record(EmotionTag::Anxiety, 4, t0 + Duration::hours(2));

        let pattern = history.pattern(t0 + Duration::hours(3));
        let grief = &pattern[&EmotionTag::Grief];
        assert_eq!(grief.count, 2);
        assert!((grief.average_intensity - 8.0).abs() < f64::EPSILON);
        assert_eq!(pattern[&EmotionTag::Anxiety].count, 1);
    }
}
