//! Mapping request paths onto files under the document root.

pub mod resolver;

pub use resolver::{ContentResolver, MissReason, Outcome, ResolvedContent, NOT_FOUND_BODY};
