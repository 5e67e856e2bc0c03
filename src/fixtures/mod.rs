//! Static fixture data: dated briefings, the shared snapshot table, and the
//! crisis/workflow console lists.

/// Dated morning briefings
pub mod briefings;
/// Crisis alerts, activity, system status and workflow runs
pub mod console;
/// Shared briefing snapshots
pub mod snapshots;

pub use briefings::{BRIEFINGS, BriefingFixture};
pub use snapshots::SNAPSHOTS;
