#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # geobatch-entities
//!
//! Reusable, agnostic domain entities for geobatch.
//!
//! The entities only contain generic functionality that does not reveal
//! any provider-specific wire format.

pub mod address;
pub mod geo;
pub mod geocode;
pub mod table;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
