//! Transit network routing engine.
//!
//! Keeps a model of bus stops and routes, answers route statistics
//! queries and finds the fastest itinerary between two stops, itemized
//! into waits and bus rides.

pub mod catalog;
pub mod domain;
pub mod registry;
pub mod requests;
pub mod router;
