//! CKB2021 full addresses.
//!
//! An address is a checksummed, human-transcribable encoding of a lock
//! script: `bech32m(hrp, 0x00 ‖ code_hash ‖ hash_type ‖ args)`. Decoding
//! is the exact inverse, so an address round-trips to the script that
//! produced it, and any single corrupted character fails the checksum.
//!
//! Legacy short and pre-2021 full formats (payload format bytes 0x01,
//! 0x02, 0x04) are deliberately not accepted.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::{Error, Result};
use crate::hash::{BLAKE160_LEN, BLAKE2B_LEN};
use crate::script::{LockArg, Script, ScriptHashType};

/// Payload format byte of a CKB2021 full address.
const FULL_FORMAT: u8 = 0x00;

/// Payload length: format byte + code hash + hash type + lock arg.
const PAYLOAD_LEN: usize = 1 + BLAKE2B_LEN + 1 + BLAKE160_LEN;

/// Which chain an address belongs to, expressed as its bech32 prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Human-readable part of the address.
    pub fn hrp(self) -> &'static str {
        match self {
            Self::Mainnet => "ckb",
            Self::Testnet => "ckt",
        }
    }

    fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            "ckb" => Some(Self::Mainnet),
            "ckt" => Some(Self::Testnet),
            _ => None,
        }
    }
}

/// Encode a lock script as a full address on the given network.
pub fn encode_address(script: &Script, network: Network) -> Result<String> {
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(FULL_FORMAT);
    payload.extend_from_slice(&script.code_hash);
    payload.push(script.hash_type.as_byte());
    payload.extend_from_slice(script.args.as_bytes());

    bech32::encode(network.hrp(), payload.to_base32(), Variant::Bech32m)
        .map_err(|e| Error::InvalidAddress(e.to_string()))
}

/// Decode a full address back into its network and lock script.
pub fn decode_address(addr: &str) -> Result<(Network, Script)> {
    let (hrp, data, variant) =
        bech32::decode(addr).map_err(|e| Error::InvalidAddress(e.to_string()))?;

    if variant != Variant::Bech32m {
        return Err(Error::InvalidAddress(
            "checksum variant is not bech32m".to_string(),
        ));
    }
    let network = Network::from_hrp(&hrp).ok_or_else(|| {
        Error::InvalidAddress(format!("unknown network prefix \"{}\"", hrp))
    })?;

    let payload = Vec::<u8>::from_base32(&data)
        .map_err(|e| Error::InvalidAddress(e.to_string()))?;
    if payload.len() != PAYLOAD_LEN {
        return Err(Error::InvalidAddress(format!(
            "expected {} byte payload, got {}",
            PAYLOAD_LEN,
            payload.len()
        )));
    }
    if payload[0] != FULL_FORMAT {
        return Err(Error::InvalidAddress(format!(
            "unsupported address format 0x{:02x}",
            payload[0]
        )));
    }

    let hash_type = ScriptHashType::try_from(payload[1 + BLAKE2B_LEN])
        .map_err(|e| Error::InvalidAddress(e.to_string()))?;
    let args = LockArg::from_slice(&payload[2 + BLAKE2B_LEN..])
        .map_err(|e| Error::InvalidAddress(e.to_string()))?;
    let script = Script::new(&payload[1..1 + BLAKE2B_LEN], hash_type, args)?;

    Ok((network, script))
}
