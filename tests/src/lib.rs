//! # Courier Client Core Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-module flows
//!     ├── derivations.rs   # store writes -> selective invalidation
//!     └── mention_picker.rs# composite resolution + search end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cc-tests
//!
//! # One flow
//! cargo test -p cc-tests integration::derivations
//! ```

pub mod integration;
