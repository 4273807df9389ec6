//! Lock value derivation chain for Nervos CKB.
//!
//! Maps a 32-byte private key to the five values of the CKB account
//! model, in order:
//!
//! ```text
//! private key → public key → lock arg → lock script → lock hash → address
//! ```
//!
//! Every stage is pure and deterministic; same input, same bytes out.
//! The cryptographic primitives are external (secp256k1 point
//! multiplication, personalized blake2b-256, bech32m); this crate owns
//! the validation, the canonical molecule serialization of the lock
//! script, and the address codec that ties the chain together.
//!
//! ```no_run
//! use lockchain::{LockChain, Network, Privkey};
//!
//! # fn main() -> lockchain::Result<()> {
//! let privkey = Privkey::from_hex(
//!     "0xd00c06bfd800d27397002dca6fb0993d5ba6399b4238b2f29ee9deb97593d2bc",
//! )?;
//! let chain = LockChain::derive_sighash_all(&privkey, Network::Testnet)?;
//! println!("{}", chain.address);
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod chain;
pub mod error;
pub mod hash;
pub mod key;
pub mod script;

#[cfg(test)]
mod test_vectors;


pub use address::{decode_address, encode_address, Network};
pub use chain::LockChain;
pub use error::{Error, Result};
pub use hash::{blake160, blake2b_256, new_blake2b, CKB_HASH_PERSONALIZATION};
pub use key::{Privkey, Pubkey};
pub use script::{LockArg, Script, ScriptHashType, SIGHASH_ALL_TYPE_HASH};
