//! Core types shared across arc4 facilities
//!
//! This crate holds the canonical schema constants used by the error and
//! logging facilities of `arc4-core`, so that field keys and event names stay
//! identical between producers and test assertions.

pub mod schema;
