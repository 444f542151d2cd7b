//! Integration tests for vecmat-rs crates.
//!
//! End-to-end tests that exercise the interaction between crates: the
//! quaternion / rotation-matrix / Euler-angle conversion cycle, and the
//! algebraic identities that tie the representations together.
