//! Module for reading `/_cluster/state`.
//!
//! The `/_cluster/state` endpoint returns the cluster state as known by the elected master:
//! ```json
//! {
//!   "cluster_name": "elasticsearch",
//!   "cluster_uuid": "Zb7wT0qxS0yA6GOnT-a2Tg",
//!   "version": 412,
//!   "state_uuid": "kQ0dXh0uQyGk7SxYV9sP5w",
//!   "master_node": "fM5K0yOcSf-9Cm7AVTqDvw",
//!   "nodes": {
//!     "fM5K0yOcSf-9Cm7AVTqDvw": { "name": "es-01", "transport_address": "10.0.0.5:9300", ... }
//!   },
//!   "metadata": { ... },
//!   "routing_table": { ... }
//! }
//! ```
//! `master_node` holds a node id. Getting `master_node` returns the name of that node instead.
//!
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
