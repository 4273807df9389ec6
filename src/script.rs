//! Lock scripts and their canonical serialization.
//!
//! A lock script is the on-chain predicate that defines who may spend a
//! cell: a reference to the verification program (`code_hash` +
//! `hash_type`) plus the argument binding it to one key (`args`).
//!
//! The lock hash is blake2b-256 over the script's molecule serialization.
//! The byte layout here must match every other conformant molecule
//! implementation: two implementations that serialize differently would
//! silently produce different lock hashes for the same logical script.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::hash::{blake160, blake2b_256, BLAKE160_LEN, BLAKE2B_LEN};
use crate::key::Pubkey;

/// Code hash of the default secp256k1-blake160 sighash-all lock,
/// referenced by `hash_type: type`. Identical on mainnet and testnet.
pub const SIGHASH_ALL_TYPE_HASH: [u8; 32] = [
    0x9b, 0xd7, 0xe0, 0x6f, 0x3e, 0xcf, 0x4b, 0xe0, 0xf2, 0xfc, 0xd2, 0x18,
    0x8b, 0x23, 0xf1, 0xb9, 0xfc, 0xc8, 0x8e, 0x5d, 0x4b, 0x65, 0xa8, 0x63,
    0x7b, 0x17, 0x72, 0x3b, 0xbd, 0xa3, 0xcc, 0xe8,
];

/// The 20-byte argument binding a lock script to one key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LockArg([u8; BLAKE160_LEN]);

impl LockArg {
    pub fn from_bytes(bytes: [u8; BLAKE160_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, failing with [`Error::InvalidScript`] unless
    /// it is exactly 20 bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let bytes: [u8; BLAKE160_LEN] = data.try_into().map_err(|_| {
            Error::InvalidScript(format!(
                "expected {} byte lock arg, got {}",
                BLAKE160_LEN,
                data.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Derive from a public key: the first 20 bytes of its blake2b-256
    /// digest.
    pub fn from_pubkey(pubkey: &Pubkey) -> Self {
        Self(blake160(pubkey.as_bytes()))
    }

    pub fn as_bytes(&self) -> &[u8; BLAKE160_LEN] {
        &self.0
    }
}

impl fmt::Display for LockArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for LockArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// How `code_hash` identifies the verification program.
///
/// The consensus byte tags are 0, 1, 2 and 4; there is no tag 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptHashType {
    /// Match the data hash of a cell (any VM version).
    Data,
    /// Match a type script hash.
    Type,
    /// Match the data hash, VM version 1.
    Data1,
    /// Match the data hash, VM version 2.
    Data2,
}

impl ScriptHashType {
    /// Serialized byte tag.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Data => 0x00,
            Self::Type => 0x01,
            Self::Data1 => 0x02,
            Self::Data2 => 0x04,
        }
    }

    /// Text tag as it appears in addresses/RPC.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Type => "type",
            Self::Data1 => "data1",
            Self::Data2 => "data2",
        }
    }
}

impl TryFrom<u8> for ScriptHashType {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            0x00 => Ok(Self::Data),
            0x01 => Ok(Self::Type),
            0x02 => Ok(Self::Data1),
            0x04 => Ok(Self::Data2),
            other => Err(Error::InvalidScript(format!(
                "unknown hash type byte 0x{:02x}",
                other
            ))),
        }
    }
}

impl FromStr for ScriptHashType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "data" => Ok(Self::Data),
            "type" => Ok(Self::Type),
            "data1" => Ok(Self::Data1),
            "data2" => Ok(Self::Data2),
            other => Err(Error::InvalidScript(format!(
                "unknown hash type \"{}\"",
                other
            ))),
        }
    }
}

impl fmt::Display for ScriptHashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lock script: code reference, mode, and key-binding argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub code_hash: [u8; BLAKE2B_LEN],
    pub hash_type: ScriptHashType,
    pub args: LockArg,
}

// Molecule table layout for `Script`: a 4-byte full size, one 4-byte
// offset per field, then the fields themselves. `args` is a molecule
// `Bytes` and carries its own 4-byte length prefix. All integers are
// little-endian.
const MOLECULE_HEADER_LEN: usize = 4 + 4 * 3;

impl Script {
    /// Build a lock script, validating the code hash length.
    pub fn new(code_hash: &[u8], hash_type: ScriptHashType, args: LockArg) -> Result<Self> {
        let code_hash: [u8; BLAKE2B_LEN] = code_hash.try_into().map_err(|_| {
            Error::InvalidScript(format!(
                "expected {} byte code hash, got {}",
                BLAKE2B_LEN,
                code_hash.len()
            ))
        })?;
        Ok(Self {
            code_hash,
            hash_type,
            args,
        })
    }

    /// The default lock for a public key: sighash-all referenced by type
    /// hash, bound to the key's blake160 identifier.
    pub fn sighash_all(pubkey: &Pubkey) -> Self {
        Self {
            code_hash: SIGHASH_ALL_TYPE_HASH,
            hash_type: ScriptHashType::Type,
            args: LockArg::from_pubkey(pubkey),
        }
    }

    /// Canonical molecule serialization of this script.
    pub fn serialize(&self) -> Vec<u8> {
        let args = self.args.as_bytes();
        let args_field_len = 4 + args.len();
        let full_size = MOLECULE_HEADER_LEN + BLAKE2B_LEN + 1 + args_field_len;

        let code_hash_offset = MOLECULE_HEADER_LEN;
        let hash_type_offset = code_hash_offset + BLAKE2B_LEN;
        let args_offset = hash_type_offset + 1;

        let mut out = Vec::with_capacity(full_size);
        out.extend_from_slice(&(full_size as u32).to_le_bytes());
        out.extend_from_slice(&(code_hash_offset as u32).to_le_bytes());
        out.extend_from_slice(&(hash_type_offset as u32).to_le_bytes());
        out.extend_from_slice(&(args_offset as u32).to_le_bytes());
        out.extend_from_slice(&self.code_hash);
        out.push(self.hash_type.as_byte());
        out.extend_from_slice(&(args.len() as u32).to_le_bytes());
        out.extend_from_slice(args);
        out
    }

    /// Content hash of the canonical serialization: the compact script
    /// identifier used on-chain.
    pub fn lock_hash(&self) -> [u8; BLAKE2B_LEN] {
        blake2b_256(self.serialize())
    }
}
