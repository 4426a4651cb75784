//! # Model Module
//!
//! Value objects for generation requests and the produced monster records.
//!
//! Everything in this module is an immutable value: records are created
//! whole by the synthesis engine, never mutated afterwards, and carry no
//! back-references or shared state. Wire names follow the camelCase shape
//! of the record format.

pub mod monster;
pub mod request;

pub use monster::*;
pub use request::*;
