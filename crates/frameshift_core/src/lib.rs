// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe retiming engine.
//!
//! Takes a contiguous run of animation keyframes, a selected time range
//! and a retiming instruction, and recomputes keyframe positions under
//! an absolute or incremental gap policy without ever inverting or
//! colliding keys.
//!
//! ## Architecture
//!
//! One retime call flows through three stages:
//! - Anchor resolution: find the first key to retime from the selection
//! - Planning: walk anchor-to-last and compute each key's new time
//! - Ordered apply: write the moves back, deferring shrinking moves
//!   until the key ahead is out of the way
//!
//! The engine runs against any [`Timeline`] implementation; it holds no
//! state between calls and never creates, deletes or revalues keys.

pub mod apply;
pub mod plan;
pub mod retime;
pub mod timeline;

#[cfg(test)]
pub(crate) mod testutil;

pub use apply::apply_plan;
pub use plan::{plan_retime, RetimeMode, RetimePlan, MIN_GAP};
pub use retime::{resolve_anchor, retime, RetimeRequest};
pub use timeline::{same_time, RetimeError, Time, Timeline, TIME_EPSILON};
