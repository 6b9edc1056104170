//! Utilities
use std::{collections::{BTreeMap, HashMap}, env, fs, io::Write};
use log::*;
use anyhow::{Context, Result};
use regex::Regex;
use crate::client::{ClientSettings, DEFAULT_HOSTS, DEFAULT_PORT, DEFAULT_TIMEOUT};
use crate::errors::EsStatsError;

pub fn http_get(
    client: &reqwest::blocking::Client,
    scheme: &str,
    host: &str,
    port: &str,
    url: &str,
) -> std::result::Result<String, EsStatsError>
{
    let data_from_web_request = client
        .get(format!("{}://{}:{}/{}", scheme, host, port, url))
        .send()?;
    if !data_from_web_request.status().is_success()
    {
        debug!("Non success response: {}:{}/{} = {}", host, port, url, &data_from_web_request.status());
        return Err(EsStatsError::HttpStatus {
            url: format!("{}:{}/{}", host, port, url),
            status: data_from_web_request.status(),
        });
    }
    debug!("Success response: {}:{}/{} = {}", host, port, url, &data_from_web_request.status());
    Ok(data_from_web_request.text()?)
}

/// Take the setting from the option, else from the environment variable (via dotenv().ok()),
/// else from the default.
/// A setting taken from the option or the environment is inserted into changed_options,
/// to be written to .env later on.
fn set_option(
    option: &Option<String>,
    variable: &'static str,
    default: &str,
    changed_options: &mut HashMap<&'static str, String>,
) -> String
{
    if let Some(value) = option {
        info!("{} argument set: using: {}", variable, value);
        changed_options.insert(variable, value.to_string());
        return value.to_string();
    }
    match env::var(variable) {
        Ok(set_var) => {
            info!("argument not set: set via .env: {}: {}", variable, set_var);
            changed_options.insert(variable, set_var.to_owned());
            set_var
        }
        Err(_e) => {
            info!("argument not set: and not set via .env: using default for {}: {}", variable, default);
            default.to_string()
        }
    }
}

pub fn set_hosts(
    option: &Option<String>,
    changed_options: &mut HashMap<&'static str, String>,
) -> Vec<String>
{
    set_option(option, "ES_STATS_HOSTS", DEFAULT_HOSTS, changed_options)
        .split(',')
        .map(|host| host.trim().to_string())
        .filter(|host| !host.is_empty())
        .collect()
}

pub fn set_port(
    option: &Option<String>,
    changed_options: &mut HashMap<&'static str, String>,
) -> String
{
    set_option(option, "ES_STATS_PORT", DEFAULT_PORT, changed_options)
}

pub fn set_timeout(
    option: &Option<String>,
    changed_options: &mut HashMap<&'static str, String>,
) -> Result<u64>
{
    let timeout = set_option(option, "ES_STATS_TIMEOUT", &DEFAULT_TIMEOUT.to_string(), changed_options);
    timeout.parse::<u64>()
        .with_context(|| format!("Invalid timeout: {}", timeout))
}

pub fn set_client_settings(
    hosts: &Option<String>,
    port: &Option<String>,
    timeout: &Option<String>,
    https: bool,
    accept_invalid_certs: bool,
    changed_options: &mut HashMap<&'static str, String>,
) -> Result<ClientSettings>
{
    Ok(ClientSettings {
        hosts: set_hosts(hosts, changed_options),
        port: set_port(port, changed_options),
        timeout: set_timeout(timeout, changed_options)?,
        https,
        accept_invalid_certs,
    })
}

pub fn set_regex(
    regex: &Option<String>,
) -> Result<Regex>
{
    let regex = regex.as_deref().unwrap_or(".*");
    Regex::new(regex)
        .with_context(|| format!("Invalid regex: {}", regex))
}

/// Render the changed options as .env lines, sorted by variable name, so repeated runs produce
/// the same file.
pub fn dotenv_contents(
    changed_options: &HashMap<&str, String>,
) -> String
{
    changed_options.iter()
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if changed_options.is_empty() || !write_dotenv {
        return Ok(());
    }
    info!("Writing .env file");
    let contents = dotenv_contents(&changed_options);
    for line in contents.lines() {
        info!("{}", line);
    }
    fs::File::create(".env")
        .and_then(|mut file| file.write_all(contents.as_bytes()))
        .with_context(|| "Error writing .env file: .env")
}

#[cfg(test)]
pub fn get_hostname() -> String {
    match env::var("ES_HOSTNAME") {
        Ok(value) => value,
        Err(_e) => { panic!("The environment variable ES_HOSTNAME should be set") },
    }
}
#[cfg(test)]
pub fn get_port() -> String {
    match env::var("ES_PORT") {
        Ok(value) => value,
        Err(_e) => { panic!("The environment variable ES_PORT should be set") },
    }
}

/// A [HostLookup](crate::node_resolver::HostLookup) with fixed answers.
#[cfg(test)]
#[derive(Debug)]
pub struct FakeHostLookup {
    pub hostname: String,
    pub ip: std::net::IpAddr,
    pub reverse: HashMap<String, String>,
}

#[cfg(test)]
impl crate::node_resolver::HostLookup for FakeHostLookup {
    fn hostname(&self) -> std::io::Result<String> {
        Ok(self.hostname.clone())
    }
    fn primary_ip(&self, _hostname: &str) -> std::io::Result<std::net::IpAddr> {
        Ok(self.ip)
    }
    fn reverse_lookup(&self, host: &str) -> std::io::Result<String> {
        self.reverse
            .get(host)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no reverse record"))
    }
}

/// An [AdminApi](crate::client::AdminApi) that returns a fixed document for every endpoint,
/// and counts the number of fetches.
#[cfg(test)]
pub struct StaticAdminApi {
    pub document: serde_json::Value,
    pub fetches: std::cell::Cell<usize>,
}

#[cfg(test)]
impl StaticAdminApi {
    pub fn new(document: serde_json::Value) -> Self {
        StaticAdminApi { document, fetches: std::cell::Cell::new(0) }
    }
}

#[cfg(test)]
impl crate::client::AdminApi for StaticAdminApi {
    fn fetch(&self, _endpoint: crate::client::Endpoint) -> crate::errors::Result<crate::client::StatusDocument> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(crate::client::StatusDocument {
            hostname_port: Some("localhost:9200".to_string()),
            timestamp: Some(chrono::Local::now()),
            document: self.document.clone(),
        })
    }
}
