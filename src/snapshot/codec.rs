//! Bincode snapshot codec
//!
//! Frames a bincode payload with a magic, version, checksum and length.

use std::collections::HashMap;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{FileKvError, Result};

use super::{Codec, HEADER_SIZE, MAGIC, VERSION};

/// Default codec: framed bincode
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl<K, V> Codec<K, V> for BincodeCodec
where
    K: Serialize + DeserializeOwned + Hash + Eq,
    V: Serialize + DeserializeOwned,
{
    fn encode(&self, entries: &HashMap<K, V>) -> Result<Vec<u8>> {
        let payload = bincode::serialize(entries)?;
        let crc = crc32fast::hash(&payload);

        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&crc.to_le_bytes());
        out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        out.extend_from_slice(&payload);

        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<HashMap<K, V>> {
        if bytes.len() < HEADER_SIZE {
            return Err(FileKvError::Truncated {
                expected: HEADER_SIZE as u64,
                actual: bytes.len() as u64,
            });
        }

        // Header
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        if &magic != MAGIC {
            return Err(FileKvError::InvalidMagic(magic));
        }

        let mut version = [0u8; 2];
        version.copy_from_slice(&bytes[4..6]);
        let version = u16::from_le_bytes(version);
        if version != VERSION {
            return Err(FileKvError::UnsupportedVersion(version));
        }

        let mut crc = [0u8; 4];
        crc.copy_from_slice(&bytes[6..10]);
        let expected_crc = u32::from_le_bytes(crc);

        let mut len = [0u8; 8];
        len.copy_from_slice(&bytes[10..18]);
        let payload_len = u64::from_le_bytes(len);

        // Payload
        // The length field is untrusted; compare before any arithmetic
        let payload = &bytes[HEADER_SIZE..];
        if payload.len() as u64 != payload_len {
            return Err(FileKvError::Truncated {
                expected: (HEADER_SIZE as u64).saturating_add(payload_len),
                actual: bytes.len() as u64,
            });
        }

        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            return Err(FileKvError::ChecksumMismatch {
                expected: expected_crc,
                actual: actual_crc,
            });
        }

        Ok(bincode::deserialize(payload)?)
    }
}
