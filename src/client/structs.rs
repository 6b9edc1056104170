//! The structs
//!
use chrono::{DateTime, Local};
use serde_json::Value;
use crate::errors::Result;

/// The administrative API endpoints that return a status document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Endpoint {
    ClusterHealth,
    ClusterStats,
    ClusterState,
    NodeStats,
    NodeInfo,
}

/// A status document as returned by the administrative API.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct StatusDocument {
    /// es_stats added to allow understanding the source host
    pub hostname_port: Option<String>,
    /// es_stats added to allow understanding the timestamp
    pub timestamp: Option<DateTime<Local>>,
    pub document: Value,
}

/// The administrative API of a cluster.
///
/// Implementors only need to provide [AdminApi::fetch].
pub trait AdminApi {
    fn fetch(&self, endpoint: Endpoint) -> Result<StatusDocument>;

    fn cluster_health(&self) -> Result<StatusDocument> {
        self.fetch(Endpoint::ClusterHealth)
    }
    fn cluster_stats(&self) -> Result<StatusDocument> {
        self.fetch(Endpoint::ClusterStats)
    }
    fn cluster_state(&self) -> Result<StatusDocument> {
        self.fetch(Endpoint::ClusterState)
    }
    fn node_stats(&self) -> Result<StatusDocument> {
        self.fetch(Endpoint::NodeStats)
    }
    fn node_info(&self) -> Result<StatusDocument> {
        self.fetch(Endpoint::NodeInfo)
    }
}

/// The settings for [HttpAdminClient].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub hosts: Vec<String>,
    pub port: String,
    pub https: bool,
    /// request timeout in seconds
    pub timeout: u64,
    pub accept_invalid_certs: bool,
}

/// [AdminApi] over http.
#[derive(Debug)]
pub struct HttpAdminClient {
    pub(crate) settings: ClientSettings,
    pub(crate) client: reqwest::blocking::Client,
}
