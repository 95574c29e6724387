//! # LedgerWire Test Suite
//!
//! Unified test crate containing cross-subsystem flows that no single
//! subsystem crate can exercise alone:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── codec_flows.rs    # observe → reconcile → encode → decode → absorb
//!     └── status_flows.rs   # deploy → endorse → ingest → lookup
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lw-tests
//!
//! # By flow
//! cargo test -p lw-tests integration::codec_flows
//! cargo test -p lw-tests integration::status_flows
//! ```

pub mod integration;
