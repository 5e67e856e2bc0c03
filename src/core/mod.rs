//! Core business logic - framework-agnostic.
//!
//! Nothing in here knows about HTTP; the web layer calls into these modules
//! and renders what they return.

pub mod briefing;
pub mod crisis;
pub mod dates;
pub mod grouping;
pub mod notice;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod workflow;
