//! The impls and functions
//!
use serde_json::Value;
use crate::client::{AdminApi, StatusDocument};
use crate::cluster_stats::ClusterStats;
use crate::errors::Result;
use crate::path;
use crate::stat::Stat;

impl ClusterStats {
    pub fn new(
        client: &dyn AdminApi,
    ) -> Result<Self>
    {
        Ok(ClusterStats::from_document(client.cluster_stats()?))
    }
    pub fn from_document(
        stats: StatusDocument,
    ) -> Self
    {
        ClusterStats { stats }
    }
    pub fn get(
        &self,
        path: &str,
    ) -> Result<Value>
    {
        Ok(path::resolve(&self.stats.document, path)?.clone())
    }
}

impl Stat for ClusterStats {
    fn get(&self, path: &str, _node_name: Option<&str>) -> Result<Value> {
        ClusterStats::get(self, path)
    }
    fn status_document(&self) -> &StatusDocument {
        &self.stats
    }
}
