//! One-way digest of PINs and guesses.
//!
//! The digest is what the player sees instead of the secret. SHA-256 with no
//! salt or iteration count is enough here: the secret space is 900 values
//! and the only goal is to keep the answer from being readable at a glance.

use sha2::{Digest, Sha256};

/// A digest primitive that maps a string to a lowercase hex string.
pub trait Digester {
    /// Short algorithm name for display (e.g. `"SHA-256"`).
    fn algorithm(&self) -> &'static str;

    /// Digest `message` and return it as lowercase hex.
    fn digest(&self, message: &str) -> String;
}

impl<T: Digester + ?Sized> Digester for Box<T> {
    fn algorithm(&self) -> &'static str {
        (**self).algorithm()
    }

    fn digest(&self, message: &str) -> String {
        (**self).digest(message)
    }
}

/// SHA-256 over the UTF-8 bytes of the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digester;

impl Sha256Digester {
    /// Create a new SHA-256 digester.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Digester for Sha256Digester {
    fn algorithm(&self) -> &'static str {
        "SHA-256"
    }

    fn digest(&self, message: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(message.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
