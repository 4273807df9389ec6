//! The full derivation chain.
//!
//! Five stages, each stage's output feeding the next:
//!
//! 1. private key → public key (scalar multiplication, compressed)
//! 2. public key → lock arg (blake160)
//! 3. lock arg → lock script (explicit code hash + hash type)
//! 4. lock script → lock hash (blake2b-256 of the molecule serialization)
//! 5. lock script → address (bech32m full address)
//!
//! The script-identification constants and network are explicit
//! parameters, never ambient state, so every derivation is a pure
//! function of its arguments.

use crate::address::{encode_address, Network};
use crate::error::Result;
use crate::key::{Privkey, Pubkey};
use crate::script::{LockArg, Script, ScriptHashType};

/// All five values derived from one private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockChain {
    pub pubkey: Pubkey,
    pub lock_arg: LockArg,
    pub script: Script,
    pub lock_hash: [u8; 32],
    pub address: String,
}

impl LockChain {
    /// Run the chain against an explicit lock (code hash + hash type).
    ///
    /// Any stage failure aborts the derivation and propagates unchanged.
    pub fn derive(
        privkey: &Privkey,
        code_hash: &[u8],
        hash_type: ScriptHashType,
        network: Network,
    ) -> Result<Self> {
        let pubkey = privkey.pubkey();
        let lock_arg = LockArg::from_pubkey(&pubkey);
        let script = Script::new(code_hash, hash_type, lock_arg)?;
        let lock_hash = script.lock_hash();
        let address = encode_address(&script, network)?;

        Ok(Self {
            pubkey,
            lock_arg,
            script,
            lock_hash,
            address,
        })
    }

    /// Run the chain against the default sighash-all lock.
    pub fn derive_sighash_all(privkey: &Privkey, network: Network) -> Result<Self> {
        let pubkey = privkey.pubkey();
        let script = Script::sighash_all(&pubkey);
        let lock_hash = script.lock_hash();
        let address = encode_address(&script, network)?;

        Ok(Self {
            pubkey,
            lock_arg: script.args,
            script,
            lock_hash,
            address,
        })
    }
}
