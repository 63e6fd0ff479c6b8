//! Audit logging for the expense tracker
//!
//! Records every add, update and delete with before/after snapshots in an
//! append-only audit log. This is the tool's only log: there is no
//! diagnostic output beyond command results and errors.
//!
//! # Architecture
//!
//! - `AuditEntry`: one logged operation with timestamp, expense id and
//!   optional before/after records.
//! - `AuditLogger`: appends entries to a line-delimited JSON file (JSONL)
//!   and reads them back for `history`.
//! - `describe_changes`: human-readable summary of an update.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::update(&before, &after))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::describe_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
