//! Loading and saving the persisted record of a session.
//!
//! The record is three independent string entries. A record with any entry
//! missing, or with entries that disagree with each other, is reported as
//! "no session" so the caller starts a fresh round.

use crate::digest::Digester;
use crate::session::data::{is_valid_pin, Session};
use crate::store::{KeyValueStore, StoreResult, ATTEMPTS_KEY, DIGEST_KEY, PIN_KEY};

impl Session {
    /// Load a complete, consistent session from `store`.
    ///
    /// Returns `Ok(None)` when the record is absent, incomplete or
    /// inconsistent. The digest is re-checked against `digester` so a record
    /// written under a different algorithm, or edited by hand, is discarded.
    pub fn load<S, D>(store: &S, digester: &D) -> StoreResult<Option<Self>>
    where
        S: KeyValueStore + ?Sized,
        D: Digester + ?Sized,
    {
        let pin = store.get(PIN_KEY)?;
        let digest = store.get(DIGEST_KEY)?;
        let attempts = store.get(ATTEMPTS_KEY)?;

        let (Some(pin), Some(digest), Some(attempts)) = (pin, digest, attempts) else {
            log::debug!("No complete session record in store");
            return Ok(None);
        };

        if !is_valid_pin(&pin) {
            log::warn!("Discarding stored session: malformed PIN entry");
            return Ok(None);
        }

        let Ok(attempt_count) = attempts.trim().parse::<u32>() else {
            log::warn!("Discarding stored session: attempt count {attempts:?} is not a number");
            return Ok(None);
        };

        if digester.digest(&pin) != digest {
            log::warn!(
                "Discarding stored session: digest does not match the stored PIN under {}",
                digester.algorithm()
            );
            return Ok(None);
        }

        Ok(Some(Self::restore(pin, digest, attempt_count)))
    }

    /// Write the full record (PIN, digest and attempt count) to `store`.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> StoreResult<()> {
        store.set(PIN_KEY, self.secret_pin())?;
        store.set(DIGEST_KEY, self.digest_hex())?;
        self.save_attempts(store)
    }

    /// Write only the attempt count, as a decimal string.
    pub fn save_attempts<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> StoreResult<()> {
        store.set(ATTEMPTS_KEY, &self.attempt_count().to_string())
    }
}
