//! The impls and functions
//!
use std::time::{Duration, Instant};
use chrono::Local;
use log::*;
use crate::errors::{EsStatsError, Result};
use crate::utility;
use crate::client::{AdminApi, ClientSettings, Endpoint, HttpAdminClient, StatusDocument};

pub const DEFAULT_HOSTS: &str = "localhost";
pub const DEFAULT_PORT: &str = "9200";
pub const DEFAULT_TIMEOUT: u64 = 10;

impl Endpoint {
    pub fn url(&self) -> &'static str {
        match self {
            Endpoint::ClusterHealth => "_cluster/health",
            Endpoint::ClusterStats => "_cluster/stats",
            Endpoint::ClusterState => "_cluster/state",
            Endpoint::NodeStats => "_nodes/stats",
            Endpoint::NodeInfo => "_nodes",
        }
    }
    /// Node scoped documents hold a `nodes` map and need a node name to get a value.
    pub fn is_node_scoped(&self) -> bool {
        matches!(self, Endpoint::NodeStats | Endpoint::NodeInfo)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            hosts: DEFAULT_HOSTS.split(',').map(String::from).collect(),
            port: DEFAULT_PORT.to_string(),
            https: false,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl StatusDocument {
    pub fn new() -> Self {
        Default::default()
    }
    /// Parse the http response body into a status document.
    pub fn parse(
        http_data: &str,
        hostname_port: &str,
    ) -> Result<StatusDocument>
    {
        let document = serde_json::from_str(http_data)
            .map_err(|e| {
                debug!("({}) could not parse json data, error: {}", hostname_port, e);
                e
            })?;
        Ok(StatusDocument {
            hostname_port: Some(hostname_port.to_string()),
            timestamp: Some(Local::now()),
            document,
        })
    }
}

impl HttpAdminClient {
    pub fn new(
        settings: ClientSettings,
    ) -> Result<Self>
    {
        if settings.hosts.iter().all(|host| host.trim().is_empty()) {
            return Err(EsStatsError::NoHosts);
        }
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .timeout(Duration::from_secs(settings.timeout))
            .build()?;
        Ok(HttpAdminClient { settings, client })
    }
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
    fn scheme(&self) -> &'static str {
        if self.settings.https { "https" } else { "http" }
    }
}

impl AdminApi for HttpAdminClient {
    /// Read `endpoint` from the first host that answers.
    ///
    /// A host that cannot be reached is skipped, a host that answers with an error status or
    /// with data that is not json ends the read.
    fn fetch(
        &self,
        endpoint: Endpoint,
    ) -> Result<StatusDocument>
    {
        info!("begin http read {}", endpoint.url());
        let timer = Instant::now();

        let mut last_error = EsStatsError::NoHosts;
        for host in self.settings.hosts.iter().map(|host| host.trim()).filter(|host| !host.is_empty()) {
            match utility::http_get(&self.client, self.scheme(), host, &self.settings.port, endpoint.url()) {
                Ok(data_from_http) => {
                    let status_document = StatusDocument::parse(&data_from_http, &format!("{}:{}", host, self.settings.port))?;
                    info!("end http read {} {:?}", endpoint.url(), timer.elapsed());
                    return Ok(status_document);
                }
                Err(EsStatsError::Transport(e)) => {
                    warn!("hostname:port {}:{} cannot be reached, skipping: {}", host, self.settings.port, e);
                    last_error = EsStatsError::Transport(e);
                }
                Err(e) => return Err(e),
            }
        }
        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    #[test]
    fn unit_endpoint_urls() {
        assert_eq!(Endpoint::ClusterHealth.url(), "_cluster/health");
        assert_eq!(Endpoint::ClusterStats.url(), "_cluster/stats");
        assert_eq!(Endpoint::ClusterState.url(), "_cluster/state");
        assert_eq!(Endpoint::NodeStats.url(), "_nodes/stats");
        assert_eq!(Endpoint::NodeInfo.url(), "_nodes");
    }

    #[test]
    fn unit_endpoint_node_scoped() {
        assert!(!Endpoint::ClusterHealth.is_node_scoped());
        assert!(!Endpoint::ClusterState.is_node_scoped());
        assert!(Endpoint::NodeStats.is_node_scoped());
        assert!(Endpoint::NodeInfo.is_node_scoped());
    }

    #[test]
    fn unit_parse_cluster_health() {
        // This is what /_cluster/health returns on a single node cluster with replicas configured.
        let http_data = r#"
{
  "cluster_name" : "elasticsearch",
  "status" : "yellow",
  "timed_out" : false,
  "number_of_nodes" : 1,
  "number_of_data_nodes" : 1,
  "active_primary_shards" : 5,
  "active_shards" : 5,
  "relocating_shards" : 0,
  "initializing_shards" : 0,
  "unassigned_shards" : 5,
  "active_shards_percent_as_number" : 50.0
}
        "#;
        let result = StatusDocument::parse(http_data, "localhost:9200").unwrap();
        assert_eq!(result.hostname_port, Some("localhost:9200".to_string()));
        assert!(result.timestamp.is_some());
        assert_eq!(result.document["status"], json!("yellow"));
        assert_eq!(result.document["active_shards_percent_as_number"], json!(50.0));
    }

    #[test]
    fn unit_parse_keeps_document_order() {
        let http_data = r#"{"nodes":{"zz":{"name":"first"},"aa":{"name":"second"}}}"#;
        let result = StatusDocument::parse(http_data, "localhost:9200").unwrap();
        let order: Vec<&String> = result.document["nodes"].as_object().unwrap().keys().collect();
        assert_eq!(order, vec!["zz", "aa"]);
    }

    #[test]
    fn unit_parse_not_json() {
        // This is what a server that is not elasticsearch might return.
        let http_data = r#"
Error 404: Not Found
File not found
        "#;
        let result = StatusDocument::parse(http_data, "localhost:9200");
        assert!(matches!(result, Err(EsStatsError::Json(_))));
    }

    #[test]
    fn unit_new_without_hosts() {
        let settings = ClientSettings { hosts: vec![" ".to_string()], ..Default::default() };
        assert!(matches!(HttpAdminClient::new(settings), Err(EsStatsError::NoHosts)));
    }

    #[test]
    fn unit_default_settings() {
        let settings = ClientSettings::default();
        assert_eq!(settings.hosts, vec!["localhost".to_string()]);
        assert_eq!(settings.port, "9200");
        assert_eq!(settings.timeout, 10);
        assert!(!settings.https);
    }

    #[test]
    fn unit_fetch_unreachable_host_is_transport_error() {
        // nothing listens on port 1.
        let settings = ClientSettings {
            hosts: vec!["127.0.0.1".to_string()],
            port: "1".to_string(),
            timeout: 2,
            ..Default::default()
        };
        let client = HttpAdminClient::new(settings).unwrap();
        assert!(matches!(client.cluster_health(), Err(EsStatsError::Transport(_))));
    }

    /// Start a mock server answering `/_cluster/health` exactly once with `status` and `body`.
    /// The runtime must outlive the server.
    fn cluster_health_server(
        status: u16,
        body: &str,
    ) -> (tokio::runtime::Runtime, MockServer)
    {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(matchers::method("GET"))
                .and(matchers::path("/_cluster/health"))
                .respond_with(ResponseTemplate::new(status).set_body_string(body))
                .expect(1)
                .mount(&server)
                .await;
            server
        });
        (runtime, server)
    }

    fn settings_for(
        hosts: &[&str],
        server: &MockServer,
    ) -> ClientSettings
    {
        ClientSettings {
            hosts: hosts.iter().map(|host| host.to_string()).collect(),
            port: server.address().port().to_string(),
            timeout: 2,
            ..Default::default()
        }
    }

    #[test]
    fn unit_fetch_skips_unreachable_host() {
        let (_runtime, server) = cluster_health_server(200, r#"{"status":"green"}"#);
        // the mock server listens on 127.0.0.1 only, so 127.0.0.2 refuses the connection.
        let client = HttpAdminClient::new(settings_for(&["127.0.0.2", "127.0.0.1"], &server)).unwrap();
        let result = client.cluster_health().unwrap();
        assert_eq!(result.hostname_port, Some(format!("127.0.0.1:{}", server.address().port())));
        assert_eq!(result.document["status"], json!("green"));
    }

    #[test]
    fn unit_fetch_error_status_ends_read() {
        // both hosts point to the same server, which expects a single request.
        let (_runtime, server) = cluster_health_server(503, r#"{"error":"unavailable"}"#);
        let client = HttpAdminClient::new(settings_for(&["127.0.0.1", "127.0.0.1"], &server)).unwrap();
        match client.cluster_health() {
            Err(EsStatsError::HttpStatus { url, status }) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(url, format!("127.0.0.1:{}/_cluster/health", server.address().port()));
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[test]
    fn unit_fetch_not_json_ends_read() {
        let (_runtime, server) = cluster_health_server(200, "Error 404: Not Found");
        let client = HttpAdminClient::new(settings_for(&["127.0.0.1", "127.0.0.1"], &server)).unwrap();
        assert!(matches!(client.cluster_health(), Err(EsStatsError::Json(_))));
    }

    #[test]
    #[ignore = "requires a cluster at ES_HOSTNAME:ES_PORT"]
    fn integration_fetch_cluster_health() {
        let settings = ClientSettings {
            hosts: vec![utility::get_hostname()],
            port: utility::get_port(),
            ..Default::default()
        };
        let client = HttpAdminClient::new(settings).unwrap();
        let result = client.cluster_health().unwrap();
        assert!(result.document.get("status").is_some());
    }
}
