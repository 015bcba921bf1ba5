// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyed slot storage behind each cache map.
//!
//! In [`CacheMode::Direct`] a slot holds the value itself. In
//! [`CacheMode::Serialized`] it holds a frame:
//!
//! ```text
//! ┌──────────────────────────┬──────────────┐
//! │ JSON payload (N bytes)   │ CRC32 (u32LE)│
//! └──────────────────────────┴──────────────┘
//! ```
//!
//! A frame that fails its checksum or does not decode is removed and the
//! lookup reports a miss. Corruption never reaches the caller.

use std::collections::HashMap;

use crc32fast::Hasher as Crc32Hasher;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CacheMode;
use crate::error::CacheError;

/// Footer size: one little-endian CRC32.
const FOOTER_SIZE: usize = 4;

enum Slot<V> {
    Value(V),
    Frame(Vec<u8>),
}

pub(crate) struct SlotStore<V> {
    mode: CacheMode,
    slots: HashMap<String, Slot<V>>,
}

impl<V> SlotStore<V>
where
    V: Clone + Serialize + DeserializeOwned,
{
    pub fn new(mode: CacheMode) -> Self {
        SlotStore {
            mode,
            slots: HashMap::new(),
        }
    }

    /// Read a slot. A corrupted slot is deleted and reads as `None`.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let decoded = match self.slots.get(key)? {
            Slot::Value(value) => return Some(value.clone()),
            Slot::Frame(frame) => decode_frame(key, frame),
        };

        match decoded {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%err, "dropping unreadable cache slot");
                self.slots.remove(key);
                None
            }
        }
    }

    /// Store a value. If it cannot be serialized it is simply not cached.
    pub fn insert(&mut self, key: String, value: V) {
        let slot = match self.mode {
            CacheMode::Direct => Slot::Value(value),
            CacheMode::Serialized => match encode_frame(&value) {
                Ok(frame) => Slot::Frame(frame),
                Err(err) => {
                    tracing::warn!(%err, key = %key, "not caching value");
                    return;
                }
            },
        };
        self.slots.insert(key, slot);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Flip one payload byte of a serialized slot. Returns false for direct
    /// slots and missing keys.
    #[cfg(test)]
    pub fn corrupt(&mut self, key: &str) -> bool {
        match self.slots.get_mut(key) {
            Some(Slot::Frame(frame)) if !frame.is_empty() => {
                frame[0] ^= 0xFF;
                true
            }
            _ => false,
        }
    }
}

fn checksum(payload: &[u8]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

pub(crate) fn encode_frame<V: Serialize>(value: &V) -> Result<Vec<u8>, CacheError> {
    let mut frame =
        serde_json::to_vec(value).map_err(|e| CacheError::Serialize(e.to_string()))?;
    let crc = checksum(&frame);
    frame.extend_from_slice(&crc.to_le_bytes());
    Ok(frame)
}

pub(crate) fn decode_frame<V: DeserializeOwned>(key: &str, frame: &[u8]) -> Result<V, CacheError> {
    let corrupted = |reason: String| CacheError::Corrupted {
        key: key.to_string(),
        reason,
    };

    if frame.len() < FOOTER_SIZE {
        return Err(corrupted(format!("frame of {} bytes has no footer", frame.len())));
    }

    let (payload, footer) = frame.split_at(frame.len() - FOOTER_SIZE);
    let stored = u32::from_le_bytes([footer[0], footer[1], footer[2], footer[3]]);
    let computed = checksum(payload);
    if stored != computed {
        return Err(corrupted(format!(
            "checksum mismatch: stored {:08x}, computed {:08x}",
            stored, computed
        )));
    }

    serde_json::from_slice(payload).map_err(|e| corrupted(e.to_string()))
}
