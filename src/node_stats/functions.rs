//! The impls and functions
//!
use serde_json::Value;
use crate::client::{AdminApi, StatusDocument};
use crate::errors::Result;
use crate::node_resolver::{self, HostLookup, SystemHostLookup};
use crate::node_stats::NodeStats;
use crate::path;
use crate::stat::Stat;

impl NodeStats {
    pub fn new(
        client: &dyn AdminApi,
    ) -> Result<Self>
    {
        Ok(NodeStats::from_document(client.node_stats()?))
    }
    pub fn from_document(
        stats: StatusDocument,
    ) -> Self
    {
        NodeStats { stats, host_lookup: Box::new(SystemHostLookup) }
    }
    /// Use `host_lookup` to find the `_local` node.
    pub fn with_host_lookup(
        mut self,
        host_lookup: Box<dyn HostLookup>,
    ) -> Self
    {
        self.host_lookup = host_lookup;
        self
    }
    /// The node id for `node_name`.
    pub fn node_id(
        &self,
        node_name: &str,
    ) -> Result<String>
    {
        node_resolver::resolve_node_id(&self.stats.document, node_name, self.host_lookup.as_ref())
    }
    /// Return the value at `path` in the statistics of the node named `node_name`.
    /// The node is resolved again for every call.
    pub fn get(
        &self,
        path: &str,
        node_name: Option<&str>,
    ) -> Result<Value>
    {
        let node = node_resolver::node_document(&self.stats.document, node_name, self.host_lookup.as_ref())?;
        Ok(path::resolve(node, path)?.clone())
    }
}

impl Stat for NodeStats {
    fn get(&self, path: &str, node_name: Option<&str>) -> Result<Value> {
        NodeStats::get(self, path, node_name)
    }
    fn status_document(&self) -> &StatusDocument {
        &self.stats
    }
    fn scope(&self, node_name: Option<&str>) -> Result<&Value> {
        node_resolver::node_document(&self.stats.document, node_name, self.host_lookup.as_ref())
    }
}
