//! The impls and functions
//!
use serde_json::Value;
use crate::client::{AdminApi, StatusDocument};
use crate::errors::Result;
use crate::node_info::NodeInfo;
use crate::node_resolver::{self, HostLookup, SystemHostLookup};
use crate::path;
use crate::stat::Stat;

impl NodeInfo {
    pub fn new(
        client: &dyn AdminApi,
    ) -> Result<Self>
    {
        Ok(NodeInfo::from_document(client.node_info()?))
    }
    pub fn from_document(
        info: StatusDocument,
    ) -> Self
    {
        NodeInfo { info, host_lookup: Box::new(SystemHostLookup) }
    }
    pub fn with_host_lookup(
        mut self,
        host_lookup: Box<dyn HostLookup>,
    ) -> Self
    {
        self.host_lookup = host_lookup;
        self
    }
    pub fn node_id(
        &self,
        node_name: &str,
    ) -> Result<String>
    {
        node_resolver::resolve_node_id(&self.info.document, node_name, self.host_lookup.as_ref())
    }
    pub fn get(
        &self,
        path: &str,
        node_name: Option<&str>,
    ) -> Result<Value>
    {
        let node = node_resolver::node_document(&self.info.document, node_name, self.host_lookup.as_ref())?;
        Ok(path::resolve(node, path)?.clone())
    }
}

impl Stat for NodeInfo {
    fn get(&self, path: &str, node_name: Option<&str>) -> Result<Value> {
        NodeInfo::get(self, path, node_name)
    }
    fn status_document(&self) -> &StatusDocument {
        &self.info
    }
    fn scope(&self, node_name: Option<&str>) -> Result<&Value> {
        node_resolver::node_document(&self.info.document, node_name, self.host_lookup.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use serde_json::json;
    use crate::errors::EsStatsError;
    use crate::utility::FakeHostLookup;

    fn info() -> NodeInfo {
        // A trimmed down /_nodes from a two node cluster.
        let http_data = r#"
{
  "_nodes": { "total": 2, "successful": 2, "failed": 0 },
  "cluster_name": "elasticsearch",
  "nodes": {
    "fM5K0yOcSf-9Cm7AVTqDvw": {
      "name": "es-01",
      "transport_address": "10.0.0.5:9300",
      "host": "10.0.0.5",
      "ip": "10.0.0.5",
      "version": "8.11.1",
      "roles": [ "data", "master" ],
      "os": { "name": "Linux", "available_processors": 4 },
      "jvm": { "version": "21.0.1", "mem": { "heap_max_in_bytes": 1073741824 } }
    },
    "X2Hc3s7zRzWOr1qOc9W3Kw": {
      "name": "es-02",
      "transport_address": "10.0.0.9:9300",
      "host": "10.0.0.9",
      "ip": "10.0.0.9",
      "version": "8.11.1",
      "roles": [ "data" ],
      "os": { "name": "Linux", "available_processors": 8 },
      "jvm": { "version": "21.0.1", "mem": { "heap_max_in_bytes": 2147483648 } }
    }
  }
}
        "#;
        NodeInfo::from_document(StatusDocument::parse(http_data, "localhost:9200").unwrap())
    }

    #[test]
    fn unit_get_by_name() {
        let info = info();
        assert_eq!(info.get("os.available_processors", Some("es-02")).unwrap(), json!(8));
        assert_eq!(info.get("roles", Some("es-01")).unwrap(), json!([ "data", "master" ]));
        assert_eq!(info.node_id("es-01").unwrap(), "fM5K0yOcSf-9Cm7AVTqDvw");
    }

    #[test]
    fn unit_get_without_node_name() {
        assert!(matches!(info().get("version", None), Err(EsStatsError::MissingArgument)));
    }

    #[test]
    fn unit_get_unknown_node() {
        assert!(matches!(info().get("version", Some("es-03")), Err(EsStatsError::NodeNotFound(_))));
    }

    #[test]
    fn unit_get_local_by_ip_uses_node_info() {
        let info = info().with_host_lookup(Box::new(FakeHostLookup {
            hostname: "es-01".to_string(),
            ip: "10.0.0.5".parse().unwrap(),
            reverse: HashMap::new(),
        }));
        assert_eq!(info.get("jvm.mem.heap_max_in_bytes", Some("_local")).unwrap(), json!(1073741824));
    }

    #[test]
    fn unit_get_local_by_reverse_lookup_uses_node_info() {
        let info = info().with_host_lookup(Box::new(FakeHostLookup {
            hostname: "es-02.example.com".to_string(),
            ip: "127.0.0.1".parse().unwrap(),
            reverse: HashMap::from([
                ("10.0.0.5".to_string(), "es-01.example.com".to_string()),
                ("10.0.0.9".to_string(), "es-02.example.com".to_string()),
            ]),
        }));
        assert_eq!(info.get("name", Some("_local")).unwrap(), json!("es-02"));
    }
}
