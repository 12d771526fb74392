//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across the client
//! subsystems: groups, teams, channels, and the association records
//! linking them.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem entity types are
//!   defined here.
//! - **Immutable per store version**: a record is never mutated once it is
//!   placed in a store snapshot; a later snapshot replaces it wholesale.
//!   Records are therefore handed around behind `Arc`.

pub mod entities;

pub use entities::*;
