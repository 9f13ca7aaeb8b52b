//! Per-visitor calculator state keyed by a cookie

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use axum::http::{header, HeaderMap};
use tracing::{debug, info};
use uuid::Uuid;

use super::config::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL};
use crate::core::{CalculatorState, Input, Transition};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "calc_session";

/// Opaque session identifier (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a fresh random identifier
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reads the session cookie from request headers
    ///
    /// Malformed values are treated as absent.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| value.parse().ok())
    }

    /// Returns the `Set-Cookie` value for this session
    #[must_use]
    pub fn cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}; HttpOnly; SameSite=Lax; Path=/", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A session looked up (or created) for one request
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Session identifier
    pub id: SessionId,
    /// Whether the session was created by this request
    pub created: bool,
}

/// Stored state plus the time it was last used
#[derive(Debug, Clone)]
struct Entry {
    state: CalculatorState,
    last_seen: Instant,
}

/// Shared store of calculator states
///
/// Sessions idle longer than the TTL are dropped on the next request, and
/// the store never holds more than `max_sessions`; when full, the least
/// recently used session makes room for a new one.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<SessionId, Entry>>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    /// Creates an empty store with the default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with an idle TTL and a capacity
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Returns the idle TTL
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the capacity
    #[must_use]
    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Entry>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the number of live sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no session exists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a copy of a session's state
    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<CalculatorState> {
        self.lock().get(&id).map(|entry| entry.state.clone())
    }

    /// Loads the state for a visitor, creating a fresh session if needed
    pub fn load(&self, id: Option<SessionId>) -> (Session, CalculatorState) {
        self.load_at(id, Instant::now())
    }

    /// Applies one press to a visitor's session and stores the result
    pub fn press(&self, id: Option<SessionId>, input: Input) -> (Session, Transition) {
        self.press_at(id, input, Instant::now())
    }

    fn load_at(&self, id: Option<SessionId>, now: Instant) -> (Session, CalculatorState) {
        let mut sessions = self.lock();
        let (session, state) = self.checkout(&mut sessions, id, now);
        self.store(&mut sessions, session.id, state.clone(), now);
        (session, state)
    }

    fn press_at(
        &self,
        id: Option<SessionId>,
        input: Input,
        now: Instant,
    ) -> (Session, Transition) {
        let mut sessions = self.lock();
        let (session, state) = self.checkout(&mut sessions, id, now);
        let transition = state.apply(input);
        self.store(&mut sessions, session.id, transition.state.clone(), now);
        (session, transition)
    }

    /// Drops expired sessions, then finds a visitor's state
    ///
    /// Unknown, expired or missing ids get a new session.
    fn checkout(
        &self,
        sessions: &mut HashMap<SessionId, Entry>,
        id: Option<SessionId>,
        now: Instant,
    ) -> (Session, CalculatorState) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= self.ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            debug!(expired, live = sessions.len(), "sessions expired");
        }

        if let Some((id, entry)) = id.and_then(|id| sessions.get(&id).map(|entry| (id, entry))) {
            return (Session { id, created: false }, entry.state.clone());
        }
        let id = SessionId::new_v4();
        info!(session = %id, "session created");
        (Session { id, created: true }, CalculatorState::new())
    }

    fn store(
        &self,
        sessions: &mut HashMap<SessionId, Entry>,
        id: SessionId,
        state: CalculatorState,
        now: Instant,
    ) {
        if !sessions.contains_key(&id) && sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                debug!(session = %oldest, "session evicted, store full");
            }
        }
        sessions.insert(
            id,
            Entry {
                state,
                last_seen: now,
            },
        );
    }
}
