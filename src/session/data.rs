//! Data structures for game sessions.

/// Smallest PIN that can be drawn.
pub const MIN_PIN: u16 = 100;

/// Largest PIN that can be drawn.
pub const MAX_PIN: u16 = 999;

/// Number of digits in a PIN and in a well-formed guess.
pub const PIN_LENGTH: usize = 3;

/// The state of one round: the secret, its digest and the attempt count.
///
/// `digest_hex` is always the digest of `secret_pin` under the digester that
/// created or verified the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret_pin: String,
    digest_hex: String,
    attempt_count: u32,
}

impl Session {
    /// Create a fresh session with no attempts.
    #[must_use]
    pub fn new(secret_pin: String, digest_hex: String) -> Self {
        Self {
            secret_pin,
            digest_hex,
            attempt_count: 0,
        }
    }

    /// Rebuild a session from persisted parts.
    #[must_use]
    pub(crate) fn restore(secret_pin: String, digest_hex: String, attempt_count: u32) -> Self {
        Self {
            secret_pin,
            digest_hex,
            attempt_count,
        }
    }

    /// The secret PIN.
    #[must_use]
    pub fn secret_pin(&self) -> &str {
        &self.secret_pin
    }

    /// Lowercase hex digest of the secret PIN.
    #[must_use]
    pub fn digest_hex(&self) -> &str {
        &self.digest_hex
    }

    /// Number of well-formed guesses made in this session.
    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    /// Count one more attempt and return the new total.
    pub(crate) fn increment_attempts(&mut self) -> u32 {
        self.attempt_count = self.attempt_count.saturating_add(1);
        self.attempt_count
    }
}

/// Check that `pin` is a 3-digit decimal string within [`MIN_PIN`]..=[`MAX_PIN`].
#[must_use]
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH
        && pin.bytes().all(|b| b.is_ascii_digit())
        && pin
            .parse::<u16>()
            .is_ok_and(|n| (MIN_PIN..=MAX_PIN).contains(&n))
}
