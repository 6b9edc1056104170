//! The impls and functions
//!
use std::{io, net::IpAddr};
use log::*;
use serde_json::{Map, Value};
use crate::errors::{EsStatsError, Result};
use crate::node_resolver::{HostLookup, SystemHostLookup, LOCAL_NODE};

impl HostLookup for SystemHostLookup {
    fn hostname(&self) -> io::Result<String> {
        hostname::get()?
            .into_string()
            .map_err(|hostname| io::Error::new(io::ErrorKind::InvalidData, format!("hostname {:?} is not valid unicode", hostname)))
    }
    fn primary_ip(&self, hostname: &str) -> io::Result<IpAddr> {
        let addresses = dns_lookup::lookup_host(hostname)?;
        // prefer ipv4, which is what a node reports as its host most of the time.
        addresses.iter()
            .find(|address| address.is_ipv4())
            .or_else(|| addresses.first())
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("hostname {} has no addresses", hostname)))
    }
    fn reverse_lookup(&self, host: &str) -> io::Result<String> {
        let address = match host.parse::<IpAddr>() {
            Ok(address) => address,
            Err(_) => self.primary_ip(host)?,
        };
        dns_lookup::lookup_addr(&address)
    }
}

/// Find the node id in the `nodes` map of `document` for `node_name`.
///
/// The first node that matches in document order is returned.
pub fn resolve_node_id(
    document: &Value,
    node_name: &str,
    host_lookup: &dyn HostLookup,
) -> Result<String>
{
    let nodes = document
        .get("nodes")
        .and_then(Value::as_object)
        .ok_or_else(|| EsStatsError::NodeNotFound(node_name.to_string()))?;

    let node_id = if node_name == LOCAL_NODE {
        find_local_node(nodes, host_lookup)?
    } else {
        find_node_by_field(nodes, "name", node_name)
    };

    node_id.ok_or_else(|| EsStatsError::NodeNotFound(node_name.to_string()))
}

/// Narrow `document` to the entry in its `nodes` map for `node_name`.
///
/// A node name is required; `None` or an empty name results in
/// [EsStatsError::MissingArgument].
pub fn node_document<'a>(
    document: &'a Value,
    node_name: Option<&str>,
    host_lookup: &dyn HostLookup,
) -> Result<&'a Value>
{
    let node_name = node_name
        .filter(|node_name| !node_name.is_empty())
        .ok_or(EsStatsError::MissingArgument)?;
    let node_id = resolve_node_id(document, node_name, host_lookup)?;
    debug!("node name {} resolved to node id {}", node_name, node_id);
    document
        .get("nodes")
        .and_then(|nodes| nodes.get(&node_id))
        .ok_or_else(|| EsStatsError::NodeNotFound(node_name.to_string()))
}

fn find_local_node(
    nodes: &Map<String, Value>,
    host_lookup: &dyn HostLookup,
) -> Result<Option<String>>
{
    let my_hostname = host_lookup.hostname().map_err(EsStatsError::HostLookup)?;
    let my_ip = host_lookup.primary_ip(&my_hostname).map_err(EsStatsError::HostLookup)?;

    if !my_ip.is_loopback() {
        debug!("local hostname {} resolves to {}, matching on host", my_hostname, my_ip);
        return Ok(find_node_by_field(nodes, "host", &my_ip.to_string()));
    }

    debug!("local hostname {} resolves to loopback {}, matching on reverse lookup of host", my_hostname, my_ip);
    for (node_id, node) in nodes {
        if let Some(host) = node.get("host").and_then(Value::as_str) {
            let reverse_name = host_lookup.reverse_lookup(host).map_err(EsStatsError::HostLookup)?;
            debug!("node {} host {} reverse resolves to {}", node_id, host, reverse_name);
            if reverse_name == my_hostname {
                return Ok(Some(node_id.clone()));
            }
        }
    }
    Ok(None)
}

fn find_node_by_field(
    nodes: &Map<String, Value>,
    field: &str,
    wanted: &str,
) -> Option<String>
{
    nodes.iter()
        .find(|(_, node)| node.get(field).and_then(Value::as_str) == Some(wanted))
        .map(|(node_id, _)| node_id.clone())
}
