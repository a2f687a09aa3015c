/// One-shot message handoff between a redirect and the next request
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};
use uuid::Uuid;

/// Cookie carrying the ticket of a pending flash
pub const FLASH_COOKIE: &str = "flash";

pub type FlashMessages = BTreeMap<String, String>;

/// Opaque handle to a stashed flash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlashTicket(Uuid);

impl FlashTicket {
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }

    /// `Set-Cookie` value handing the ticket to the client
    pub fn cookie(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE, self.0
        )
    }
}

impl fmt::Display for FlashTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Entry {
    messages: FlashMessages,
    stored_at: Instant,
}

/// Pending flashes keyed by ticket; each can be taken once
pub struct FlashStore {
    ttl: Duration,
    entries: Mutex<HashMap<FlashTicket, Entry>>,
}

impl FlashStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Store messages for the next request and return their ticket
    ///
    /// Entries older than the TTL are dropped here.
    pub fn stash(&self, messages: FlashMessages) -> FlashTicket {
        let ticket = FlashTicket(Uuid::new_v4());
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        entries.insert(
            ticket,
            Entry {
                messages,
                stored_at: Instant::now(),
            },
        );

        ticket
    }

    pub fn stash_one(&self, key: impl Into<String>, value: impl Into<String>) -> FlashTicket {
        let mut messages = FlashMessages::new();
        messages.insert(key.into(), value.into());
        self.stash(messages)
    }

    /// Remove and return the messages behind `ticket`
    pub fn take(&self, ticket: &FlashTicket) -> Option<FlashMessages> {
        let entry = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(ticket)?;

        if entry.stored_at.elapsed() >= self.ttl {
            tracing::debug!("Dropping expired flash {}", ticket);
            return None;
        }

        Some(entry.messages)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
