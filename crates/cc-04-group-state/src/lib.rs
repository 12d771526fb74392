//! # cc-04-group-state
//!
//! Group state subsystem for the Courier client core.
//!
//! ## Role in System
//!
//! - **Derived-Query Provider**: memoized views over the normalized store
//!   for the UI (group pickers, @-mention autocomplete)
//! - **Read-Only Consumer**: the store is written by the external reducer
//!   layer; this subsystem never mutates a snapshot in place
//!
//! ## Data Flow
//!
//! ```text
//! [Server Events] ──→ [Reducer Layer (external)]
//!                              │ replaces sub-trees wholesale
//!                              ↓
//!                      [GlobalState vN+1]
//!                              │ read
//!                              ↓
//!                      [GroupSelectors] ──cached/recomputed──→ [UI]
//! ```
//!
//! ## Freshness
//!
//! Because writers replace sub-trees wholesale and never mutate them, a
//! sub-tree's `Arc` identity changes exactly when its content changes.
//! The derivation engine compares input identities (`Same`) instead of
//! deep values: unchanged inputs return the previously cached output
//! reference, so downstream consumers can skip re-rendering with a
//! pointer comparison.

pub mod domain;
pub mod ports;
pub mod adapters;

pub use domain::*;
pub use ports::*;
pub use adapters::*;
