//! Ownership of the active session.
//!
//! [`SessionManager`] is the only place that creates, resumes, mutates or
//! destroys a [`Session`]. Everything else reads it through a shared
//! reference.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::digest::Digester;
use crate::session::data::{Session, MAX_PIN, MIN_PIN};
use crate::store::{KeyValueStore, StoreResult};

/// Creates, resumes and resets the session against a store and a digester.
pub struct SessionManager<S, D> {
    store: S,
    digester: D,
    rng: StdRng,
    session: Option<Session>,
}

impl<S: KeyValueStore, D: Digester> SessionManager<S, D> {
    /// Create a manager drawing PINs from an entropy-seeded RNG.
    pub fn new(store: S, digester: D) -> Self {
        Self::with_rng(store, digester, StdRng::from_entropy())
    }

    /// Create a manager with an explicit RNG (deterministic in tests).
    pub fn with_rng(store: S, digester: D, rng: StdRng) -> Self {
        Self {
            store,
            digester,
            rng,
            session: None,
        }
    }

    /// Resume the stored session or start a new one, and return its digest.
    ///
    /// A complete, consistent record in the store is adopted as is, so the
    /// digest stays the same across restarts until [`Self::reset`]. Otherwise
    /// a fresh PIN is drawn and a full record with zero attempts is written.
    pub fn initialize(&mut self) -> StoreResult<String> {
        let session = match Session::load(&self.store, &self.digester)? {
            Some(session) => {
                log::debug!(
                    "Resuming session with {} attempt(s)",
                    session.attempt_count()
                );
                session
            }
            None => {
                let pin = self.draw_pin();
                let digest = self.digester.digest(&pin);
                let session = Session::new(pin, digest);
                session.save(&mut self.store)?;
                log::info!(
                    "Started new session ({} {})",
                    self.digester.algorithm(),
                    session.digest_hex()
                );
                session
            }
        };

        let digest = session.digest_hex().to_string();
        self.session = Some(session);
        Ok(digest)
    }

    /// Wipe the entire store and drop the active session.
    ///
    /// Every key in the store is removed, not just the session record.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.store.clear()?;
        self.session = None;
        log::debug!("Store cleared");
        Ok(())
    }

    /// Wipe the store and start a new session with a freshly drawn PIN.
    pub fn reset(&mut self) -> StoreResult<String> {
        self.clear()?;
        log::info!("Session reset");
        self.initialize()
    }

    /// Count one more attempt, persist it and return the new total.
    ///
    /// Returns `Ok(None)` if there is no active session.
    pub fn record_attempt(&mut self) -> StoreResult<Option<u32>> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        // Only count the attempt once it is persisted
        let mut next = session.clone();
        let count = next.increment_attempts();
        next.save_attempts(&mut self.store)?;
        *session = next;
        Ok(Some(count))
    }

    /// Digest an arbitrary string with the session's digester.
    pub fn digest_of(&self, message: &str) -> String {
        self.digester.digest(message)
    }

    /// The active session, if initialized.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Name of the digest algorithm in use.
    pub fn algorithm(&self) -> &'static str {
        self.digester.algorithm()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn draw_pin(&mut self) -> String {
        self.rng.gen_range(MIN_PIN..=MAX_PIN).to_string()
    }
}

impl<S, D> std::fmt::Debug for SessionManager<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("initialized", &self.session.is_some())
            .finish_non_exhaustive()
    }
}
