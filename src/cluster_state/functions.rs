//! The impls and functions
//!
use log::*;
use serde_json::Value;
use crate::client::{AdminApi, StatusDocument};
use crate::cluster_state::ClusterState;
use crate::errors::{EsStatsError, Result};
use crate::path;
use crate::stat::Stat;

const MASTER_NODE: &str = "master_node";

impl ClusterState {
    pub fn new(
        client: &dyn AdminApi,
    ) -> Result<Self>
    {
        Ok(ClusterState::from_document(client.cluster_state()?))
    }
    pub fn from_document(
        state: StatusDocument,
    ) -> Self
    {
        ClusterState { state }
    }
    pub fn get(
        &self,
        path: &str,
    ) -> Result<Value>
    {
        if path == MASTER_NODE {
            return self.master_node_name();
        }
        Ok(path::resolve(&self.state.document, path)?.clone())
    }
    /// The name of the elected master, rather than its node id.
    fn master_node_name(
        &self,
    ) -> Result<Value>
    {
        // master_node is null when no master is elected.
        let node_id = path::resolve(&self.state.document, MASTER_NODE)?
            .as_str()
            .ok_or_else(|| EsStatsError::key_not_found(MASTER_NODE, MASTER_NODE))?;
        debug!("master_node {}", node_id);
        let nodes = path::resolve(&self.state.document, "nodes")?;
        let name = nodes
            .get(node_id)
            .and_then(|node| node.get("name"))
            .ok_or_else(|| EsStatsError::key_not_found(&format!("nodes.{}.name", node_id), node_id))?;
        Ok(name.clone())
    }
}

impl Stat for ClusterState {
    fn get(&self, path: &str, _node_name: Option<&str>) -> Result<Value> {
        ClusterState::get(self, path)
    }
    fn status_document(&self) -> &StatusDocument {
        &self.state
    }
}
