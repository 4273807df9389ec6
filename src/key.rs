//! Key pair handling for the derivation chain.
//!
//! A [`Privkey`] is a validated secp256k1 scalar. Validation happens once
//! at construction (non-zero and below the curve order), so public key
//! derivation itself cannot fail. Secret bytes are erased on drop.

use std::fmt;

use secp256k1::{PublicKey, SecretKey, SECP256K1};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::hash::blake160;
use crate::script::LockArg;

/// Length of a raw private key in bytes.
pub const PRIVKEY_LEN: usize = 32;

/// Length of a compressed public key in bytes.
pub const PUBKEY_LEN: usize = 33;

/// A secp256k1 private key, validated at construction.
///
/// The inner secret is erased on drop. Clone is intentionally not derived
/// to prevent accidental secret duplication.
pub struct Privkey(SecretKey);

impl Privkey {
    /// Create from raw bytes.
    ///
    /// Fails with [`Error::InvalidKey`] unless the input is exactly 32
    /// bytes and a valid scalar (non-zero, below the curve order).
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        if data.len() != PRIVKEY_LEN {
            return Err(Error::InvalidKey(format!(
                "expected {} bytes, got {}",
                PRIVKEY_LEN,
                data.len()
            )));
        }
        let secret = SecretKey::from_slice(data)
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(Self(secret))
    }

    /// Create from a hex string, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let mut raw =
            hex::decode(stripped).map_err(|e| Error::InvalidKey(e.to_string()))?;
        let key = Self::from_slice(&raw);
        raw.zeroize();
        key
    }

    /// Derive the compressed public key: scalar multiplication of the
    /// curve generator, even/odd y-coordinate encoded in the leading byte.
    pub fn pubkey(&self) -> Pubkey {
        Pubkey(PublicKey::from_secret_key(&SECP256K1, &self.0).serialize())
    }

    /// Derive the lock arg directly: blake160 of the compressed pubkey.
    pub fn lock_arg(&self) -> LockArg {
        self.pubkey().lock_arg()
    }
}

impl Drop for Privkey {
    fn drop(&mut self) {
        self.0.non_secure_erase();
    }
}

impl fmt::Debug for Privkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Privkey").finish_non_exhaustive()
    }
}

/// A compressed secp256k1 public key (33 bytes, leading byte 0x02 or 0x03).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Pubkey([u8; PUBKEY_LEN]);

impl Pubkey {
    pub fn as_bytes(&self) -> &[u8; PUBKEY_LEN] {
        &self.0
    }

    /// The blake160 identifier binding a lock script to this key.
    pub fn lock_arg(&self) -> LockArg {
        LockArg::from_bytes(blake160(&self.0))
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
