//! Module for finding the node id for a node name.
//!
//! The `/_nodes/stats` and `/_nodes` endpoints both return a `nodes` map, keyed by the node id,
//! which is a generated string that is not meaningful to a human:
//! ```json
//! {
//!   "nodes": {
//!     "fM5K0yOcSf-9Cm7AVTqDvw": { "name": "es-01", "host": "10.0.0.5", ... },
//!     "X2Hc3s7zRzWOr1qOc9W3Kw": { "name": "es-02", "host": "10.0.0.9", ... }
//!   }
//! }
//! ```
//! A node can be requested by its `name`, or by the special name `_local`, which means the node
//! running on this machine. For `_local`, the ip address of the local hostname is matched against
//! the `host` field. If the local hostname resolves to a loopback address, the `host` field of
//! every node is reverse resolved and matched against the local hostname instead.
//! Any loopback address counts, not only 127.0.0.1: all of 127.0.0.0/8 and ::1, so a hostname
//! mapped to 127.0.1.1 in the hosts file also uses the reverse lookup.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
