//! Market schema fixtures: the ten entity tables of the reference data
//! layer (catalog, price tracking, time tracking, users) plus their
//! input/output view pairs.
//!
//! The tables exercise every corner of the descriptor algebra (nested
//! objects, arrays of objects, optional references, temporal fields) and
//! the view structs pin down the input/output asymmetry in plain types.

pub mod tables;
pub mod views;

pub use tables::market_registry;
