//! Module for resolving dotted paths in a status document.
//!
//! A path such as `nodes.node1.jvm.mem.heap_used_percent` is split on `.`, and every segment is
//! used as a key to descend one level into the document:
//! - Every segment is a map key, including numeric looking ones. Arrays are never indexed.
//! - A segment that cannot be found, or a segment left over after reaching a scalar or an array,
//!   results in [`EsStatsError::KeyNotFound`](crate::errors::EsStatsError::KeyNotFound).
//!
mod functions;

pub use functions::*;
