//! The impls and functions
//!
use log::*;
use serde_json::Value;
use crate::client::{AdminApi, StatusDocument};
use crate::cluster_health::ClusterHealth;
use crate::errors::Result;
use crate::path;
use crate::stat::Stat;
use crate::status_map::status_map;

impl ClusterHealth {
    pub fn new(
        client: &dyn AdminApi,
    ) -> Result<Self>
    {
        Ok(ClusterHealth::from_document(client.cluster_health()?))
    }
    pub fn from_document(
        mut health: StatusDocument,
    ) -> Self
    {
        if let Some(document) = health.document.as_object_mut() {
            let severity = status_map(document.get("status").and_then(Value::as_str).unwrap_or_default());
            debug!("cluster health status {:?} mapped to {}", document.get("status"), severity);
            document.insert("status".to_string(), Value::from(severity));
        }
        ClusterHealth { health }
    }
    pub fn get(
        &self,
        path: &str,
    ) -> Result<Value>
    {
        Ok(path::resolve(&self.health.document, path)?.clone())
    }
}

impl Stat for ClusterHealth {
    fn get(&self, path: &str, _node_name: Option<&str>) -> Result<Value> {
        ClusterHealth::get(self, path)
    }
    fn status_document(&self) -> &StatusDocument {
        &self.health
    }
}
