//! Conversation sessions and transcripts
//!
//! Wraps a [`ResponseComposer`] with a message log. The composer stays a
//! synchronous function at its heart; `send_delayed` is the calling-layer
//! affordance for overlapping a "thinking" indicator with a natural pause
//! before the reply lands.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::composer::ResponseComposer;
use crate::errors::{EngineError, Result};
use crate::types::{ComposedReply, Message, UserProfile};

/// Serializable record of a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Uuid,
    pub title: String,
    pub messages: Vec<Message>,
}

/// One user's active conversation with the companion
pub struct ConversationSession {
    id: Uuid,
    title: String,
    profile: UserProfile,
    composer: ResponseComposer,
    clock: Arc<dyn Clock>,
    messages: Vec<Message>,
}

impl ConversationSession {
    pub fn new(composer: ResponseComposer, profile: UserProfile, clock: Arc<dyn Clock>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "New Conversation".to_string(),
            profile,
            composer,
            clock,
            messages: Vec::new(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// The composer (and through it, the session's memory store)
    pub fn engine(&self) -> &ResponseComposer {
        &self.composer
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Send one utterance and log both sides of the exchange
    pub fn send(&mut self, text: &str) -> ComposedReply {
        let now = self.clock.now();
        self.messages.push(Message::new(text, true, now));

        let reply = self.composer.compose(text, &self.profile);
        self.messages
            .push(Message::new(reply.text.clone(), false, self.clock.now()));
        reply
    }

    /// Send, then hold the reply for `delay` before resolving.
    ///
    /// The composition itself runs immediately and synchronously; only the
    /// delivery is deferred, so callers can show a typing indicator.
    pub async fn send_delayed(&mut self, text: &str, delay: Duration) -> ComposedReply {
        let reply = self.send(text);
        tokio::time::sleep(delay).await;
        reply
    }

    /// Write the transcript as pretty JSON
    pub fn save_transcript(&self, path: impl AsRef<Path>) -> Result<()> {
        let transcript = Transcript {
            id: self.id,
            title: self.title.clone(),
            messages: self.messages.clone(),
        };
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &transcript)?;
        Ok(())
    }

    /// Read a transcript back from JSON
    pub fn load_transcript(path: impl AsRef<Path>) -> Result<Transcript> {
        let file = File::open(path)?;
        let transcript: Transcript = serde_json::from_reader(BufReader::new(file))?;
        if transcript.title.is_empty() {
            return Err(EngineError::Transcript("empty title".to_string()));
        }
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::clock::ManualClock;
    use crate::memory::MemoryStore;
    use crate::retrieval::MemoryRetriever;
    use chrono::{TimeZone, Utc};

    fn session() -> ConversationSession {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
        ));
        let store = MemoryStore::new(Arc::clone(&clock));
        let retriever = MemoryRetriever::new(Arc::new(InMemoryCatalog::default()));
        let composer = ResponseComposer::with_seed(store, retriever, Arc::clone(&clock), 7);
        ConversationSession::new(composer, UserProfile::default(), clock)
    }

    #[test]
    fn test_send_logs_both_sides() {
        let mut session = session();
        let reply = session.send("i miss my mom");

        assert_eq!(session.messages().len(), 2);
        assert!(session.messages()[0].from_user);
        assert!(!session.messages()[1].from_user);
        assert_eq!(session.messages()[1].content, reply.text);
    }

    #[test]
    fn test_send_delayed_defers_delivery() {
        let mut session = session();

        tokio_test::block_on(async {
            tokio::time::pause();
            let started = tokio::time::Instant::now();
            let reply = session
                .send_delayed("i miss my mom", Duration::from_millis(500))
                .await;
            assert!(started.elapsed() >= Duration::from_millis(500));
            assert!(!reply.text.is_empty());
        });
    }

    #[test]
    fn test_transcript_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");

        let mut session = session();
        session.set_title("About mom");
        session.send("i miss my mom");
        session.save_transcript(&path).unwrap();

        let transcript = ConversationSession::load_transcript(&path).unwrap();
        assert_eq!(transcript.title, "About mom");
        assert_eq!(transcript.messages.len(), 2);
        assert_eq!(transcript.messages[0].content, "i miss my mom");
    }
}
