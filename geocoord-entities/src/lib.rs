//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geocoord-entities
//!
//! Reusable, agnostic geographic value types.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod coordinate;
