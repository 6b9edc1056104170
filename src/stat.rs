//! The common interface of the 5 status documents.
//!
//! Every status document is fetched once, and then answers `get(path, node_name)`.
//! The cluster documents ignore `node_name`, the node documents require it.
//!
use chrono::{DateTime, Local};
use serde_json::Value;
use crate::client::{AdminApi, Endpoint, StatusDocument};
use crate::errors::Result;
use crate::{ClusterHealth, ClusterState, ClusterStats, NodeInfo, NodeStats};

pub trait Stat {
    /// Return the value at the dotted `path`.
    fn get(&self, path: &str, node_name: Option<&str>) -> Result<Value>;
    /// The document as it was fetched, and adjusted at construction.
    fn status_document(&self) -> &StatusDocument;
    /// The part of the document that paths are resolved against.
    fn scope(&self, _node_name: Option<&str>) -> Result<&Value> {
        Ok(&self.status_document().document)
    }
}

/// Fetch the document for `endpoint` using `client`.
pub fn fetch_stat(
    endpoint: Endpoint,
    client: &dyn AdminApi,
) -> Result<Box<dyn Stat>>
{
    let stat: Box<dyn Stat> = match endpoint {
        Endpoint::ClusterHealth => Box::new(ClusterHealth::new(client)?),
        Endpoint::ClusterStats => Box::new(ClusterStats::new(client)?),
        Endpoint::ClusterState => Box::new(ClusterState::new(client)?),
        Endpoint::NodeStats => Box::new(NodeStats::new(client)?),
        Endpoint::NodeInfo => Box::new(NodeInfo::new(client)?),
    };
    Ok(stat)
}

/// A value with the source it was read from, for printing as json.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatOutput {
    pub hostname_port: Option<String>,
    pub timestamp: Option<DateTime<Local>>,
    pub key: String,
    pub node: Option<String>,
    pub value: Value,
}

impl StatOutput {
    pub fn new(
        stat: &dyn Stat,
        key: &str,
        node_name: Option<&str>,
        value: Value,
    ) -> Self
    {
        StatOutput {
            hostname_port: stat.status_document().hostname_port.clone(),
            timestamp: stat.status_document().timestamp,
            key: key.to_string(),
            node: node_name.map(String::from),
            value,
        }
    }
}

/// Format a value for printing: strings without quotes, everything else as json.
pub fn format_value(
    value: &Value,
) -> String
{
    match value {
        Value::String(string) => string.clone(),
        other => other.to_string(),
    }
}
