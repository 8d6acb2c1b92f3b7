//! Composed replies, user profiles, and transcript messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::emotion::EmotionalReading;

/// Names the composer personalizes against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// What the companion calls the user
    pub user_name: String,
    /// What the user calls the companion
    pub companion_name: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            user_name: "friend".to_string(),
            companion_name: "Ever".to_string(),
        }
    }
}

/// Final output of the composition pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedReply {
    /// Plain prose; layered sections separated by blank lines
    pub text: String,
    /// The emotional reading the reply was built from
    pub reading: EmotionalReading,
}

/// One turn in a conversation transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub from_user: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(content: impl Into<String>, from_user: bool, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            from_user,
            timestamp,
        }
    }
}
