//! Domain models for taskdeck.
//!
//! # Core Concepts
//!
//! - [`Task`]: A unit of work with identity, title, description, status,
//!   priority, and due date. The whole collection is in-memory and ephemeral.
//! - [`TaskStatus`] / [`TaskPriority`]: Closed enumerations—status and
//!   priority are never free-form strings, so illegal values are
//!   unrepresentable past the input boundary.
//! - [`TaskFilter`]: User-selected narrowing criteria for the visible list,
//!   independent of the underlying collection.

mod filter;
mod task;

pub use filter::*;
pub use task::*;
