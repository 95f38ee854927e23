// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe identity and values.

use frameshift_core::Time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a keyframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyframeId(pub Uuid);

impl KeyframeId {
    /// Create a new random keyframe ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for KeyframeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Value stored in a keyframe.
///
/// Retiming only relocates keys in time; values ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeyframeValue {
    /// Float value
    Float(f64),
    /// 2D vector
    Vec2([f64; 2]),
    /// 3D vector
    Vec3([f64; 3]),
    /// Boolean
    Bool(bool),
    /// Event (string identifier)
    Event(String),
}

impl KeyframeValue {
    /// Get as float if possible
    pub fn as_float(&self) -> Option<f64> {
        match self {
            KeyframeValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// A keyframe in a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Unique keyframe ID
    pub id: KeyframeId,
    /// Time in frames
    pub time: Time,
    /// Value at this keyframe
    pub value: KeyframeValue,
}

impl Keyframe {
    /// Create a new keyframe
    pub fn new(time: Time, value: KeyframeValue) -> Self {
        Self {
            id: KeyframeId::new(),
            time,
            value,
        }
    }
}
