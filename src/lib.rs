//! Read a single value by dotted path from the status documents of an Elasticsearch cluster.
//!
//! The cluster health, cluster stats, cluster state, node stats and node info documents are each
//! fetched once, after which any value in them can be requested with a path such as
//! `indices.docs.count`. The node documents are scoped to a node by its name, or by `_local` for
//! the node running on this machine.
//!
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate serde_derive;

pub mod errors;
pub mod utility;
pub mod path;
pub mod status_map;
pub mod node_resolver;
pub mod client;
pub mod stat;
pub mod cluster_health;
pub mod cluster_stats;
pub mod cluster_state;
pub mod node_stats;
pub mod node_info;

pub use client::{AdminApi, ClientSettings, Endpoint, HttpAdminClient, StatusDocument};
pub use cluster_health::ClusterHealth;
pub use cluster_state::ClusterState;
pub use cluster_stats::ClusterStats;
pub use errors::{EsStatsError, Result};
pub use node_info::NodeInfo;
pub use node_resolver::{HostLookup, SystemHostLookup, LOCAL_NODE};
pub use node_stats::NodeStats;
pub use stat::{fetch_stat, format_value, Stat, StatOutput};
