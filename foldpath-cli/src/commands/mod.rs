//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `candidates`: List every on-disk match for a path under any casing
//! - `denormalize`: Recover the on-disk casing of a path
//! - `exists`: Assert a path exists under some casing
//! - `probe`: Detect whether a directory's filesystem is case-sensitive
//! - `is_child`: Assert one path lies inside another
//! - `relation`: Describe how two paths relate
//! - `conflict_name`: Pick a name free of case conflicts
//! - `complete`: Complete a partial path ignoring case
//! - `completions`: Generate shell completion scripts

pub mod candidates;
pub mod complete;
pub mod completions;
pub mod conflict_name;
pub mod denormalize;
pub mod exists;
pub mod is_child;
pub mod probe;
pub mod relation;

pub use candidates::CandidatesCommand;
pub use complete::CompleteCommand;
pub use completions::CompletionsCommand;
pub use conflict_name::ConflictNameCommand;
pub use denormalize::DenormalizeCommand;
pub use exists::ExistsCommand;
pub use is_child::IsChildCommand;
pub use probe::ProbeCommand;
pub use relation::RelationCommand;
