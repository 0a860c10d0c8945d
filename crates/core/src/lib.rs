//! Core for the recordbox project.
//!
//! Pure domain logic with no I/O: the record data model, the schema
//! validator, and the storage contract implemented by the backends in the
//! `recordbox` binary crate.

pub mod record;
pub mod storage;
