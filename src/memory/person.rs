//! Person entities and their non-destructive merge

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::MonthDay;

/// The engine's record of a named individual referenced in conversation.
///
/// Owned exclusively by the memory store; merged, never overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntity {
    /// Display name as first mentioned (the store keys on its lowercase form)
    pub name: String,
    pub relationship: Option<String>,
    pub qualities: BTreeSet<String>,
    /// Occasion label -> recurring date, e.g. "birthday" -> June 14
    pub significant_dates: BTreeMap<String, MonthDay>,
    /// Append-only, oldest first
    pub anecdotes: Vec<String>,
    pub preferences: BTreeMap<String, String>,
}

/// One batch of facts to fold into a person record
#[derive(Debug, Clone, Default)]
pub struct PersonUpdate {
    pub name: String,
    pub relationship: Option<String>,
    pub qualities: BTreeSet<String>,
    pub significant_dates: BTreeMap<String, MonthDay>,
    pub anecdotes: Vec<String>,
    pub preferences: BTreeMap<String, String>,
}

impl PersonUpdate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl PersonEntity {
    pub(crate) fn from_update(update: PersonUpdate) -> Self {
        Self {
            name: update.name,
            relationship: update.relationship,
            qualities: update.qualities,
            significant_dates: update.significant_dates,
            anecdotes: update.anecdotes,
            preferences: update.preferences,
        }
    }

    /// Fold an update into this entity, returning the merged value.
    ///
    /// Qualities and dates union (an existing occasion keeps its date),
    /// anecdotes append, preferences merge per key with the newer value,
    /// and the relationship fills in only when previously unset.
    pub(crate) fn merged(&self, update: PersonUpdate) -> PersonEntity {
        let mut qualities = self.qualities.clone();
        qualities.extend(update.qualities);

        let mut significant_dates = self.significant_dates.clone();
        for (occasion, date) in update.significant_dates {
            significant_dates.entry(occasion).or_insert(date);
        }

        let mut anecdotes = self.anecdotes.clone();
        anecdotes.extend(update.anecdotes);

        let mut preferences = self.preferences.clone();
        preferences.extend(update.preferences);

        PersonEntity {
            name: self.name.clone(),
            relationship: self.relationship.clone().or(update.relationship),
            qualities,
            significant_dates,
            anecdotes,
            preferences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_merge_is_a_union() {
        let mut first = PersonUpdate::named("Mom");
        first.qualities.insert("loved gardening".to_string());
        let entity = PersonEntity::from_update(first);

        let mut second = PersonUpdate::named("Mom");
        second.qualities.insert("great cook".to_string());
        let merged = entity.merged(second);

        assert!(merged.qualities.contains("loved gardening"));
        assert!(merged.qualities.contains("great cook"));
        assert_eq!(merged.qualities.len(), 2);
    }

    #[test]
    fn test_relationship_fills_only_when_unset() {
        let entity = PersonEntity::from_update(PersonUpdate {
            name: "rose".to_string(),
            relationship: Some("grandmother".to_string()),
            ..Default::default()
        });

        let merged = entity.merged(PersonUpdate {
            name: "rose".to_string(),
            relationship: Some("friend".to_string()),
            ..Default::default()
        });
        assert_eq!(merged.relationship.as_deref(), Some("grandmother"));
    }

    #[test]
    fn test_anecdotes_append_in_order() {
        let entity = PersonEntity::from_update(PersonUpdate {
            name: "dad".to_string(),
            anecdotes: vec!["took me fishing".to_string()],
            ..Default::default()
        });

        let merged = entity.merged(PersonUpdate {
            name: "dad".to_string(),
            anecdotes: vec!["sang in the car".to_string()],
            ..Default::default()
        });

        assert_eq!(
            merged.anecdotes,
            vec!["took me fishing".to_string(), "sang in the car".to_string()]
        );
    }

    #[test]
    fn test_existing_date_wins() {
        let mut first = PersonUpdate::named("Mom");
        first
            .significant_dates
            .insert("birthday".to_string(), MonthDay::new(6, 14).unwrap());
        let entity = PersonEntity::from_update(first);

        let mut second = PersonUpdate::named("Mom");
        second
            .significant_dates
            .insert("birthday".to_string(), MonthDay::new(7, 1).unwrap());
        let merged = entity.merged(second);

        assert_eq!(
            merged.significant_dates["birthday"],
            MonthDay::new(6, 14).unwrap()
        );
    }
}
