//! End-to-end tests over the full planning pipeline
//!
//! Fixtures describe realistic jobs; the golden tests assert exact argument
//! lists and the layout properties every plan must satisfy.

mod fixtures;
mod golden;
mod properties;
