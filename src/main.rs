//! es_stats: read a value by dotted path from the status documents of an Elasticsearch cluster.
//!
//! Examples:
//! - `es_stats --document cluster-health --key status`
//! - `es_stats --document node-stats --node es-01 --key jvm.mem.heap_used_percent`
//! - `es_stats --document node-info --node _local --list-keys '^os\.'`
//!
use std::collections::HashMap;
use clap::Parser;
use dotenv::dotenv;
use log::*;
use anyhow::{Context, Result};

use es_stats::{fetch_stat, format_value, utility, Endpoint, HttpAdminClient, Stat, StatOutput};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// hostnames of the cluster, comma separated (default localhost)
    #[arg(short = 'H', long, value_name = "hostname,hostname")]
    hosts: Option<String>,
    /// port of the http interface (default 9200)
    #[arg(short, long, value_name = "port")]
    port: Option<String>,
    /// request timeout in seconds (default 10)
    #[arg(long, value_name = "seconds")]
    timeout: Option<String>,
    /// use https
    #[arg(long)]
    https: bool,
    /// accept invalid (self signed) certificates
    #[arg(long)]
    accept_invalid_certs: bool,
    /// the status document to read
    #[arg(short, long, value_enum)]
    document: Endpoint,
    /// the dotted path of the value to print
    #[arg(short, long, value_name = "path", required_unless_present = "list_keys", conflicts_with = "list_keys")]
    key: Option<String>,
    /// the node name for node-stats and node-info, or _local for the node on this machine
    #[arg(short, long, value_name = "name")]
    node: Option<String>,
    /// list the keys (and values) matching the regex
    #[arg(short, long, value_name = "regex", num_args = 0..=1, default_missing_value = ".*")]
    list_keys: Option<String>,
    /// print the value as json, including the source and timestamp
    #[arg(long)]
    json: bool,
    /// write the hosts, port and timeout settings to .env
    #[arg(long)]
    write_dotenv: bool,
}

fn main() -> Result<()>
{
    env_logger::init();
    dotenv().ok();
    let options = Opts::parse();

    let mut changed_options = HashMap::new();
    let settings = utility::set_client_settings(&options.hosts, &options.port, &options.timeout, options.https, options.accept_invalid_certs, &mut changed_options)?;
    utility::dotenv_writer(options.write_dotenv, changed_options)?;

    if options.document.is_node_scoped() && options.node.is_none() {
        warn!("{} requires --node", options.document.url());
    }

    let client = HttpAdminClient::new(settings)
        .with_context(|| "Unable to create http client")?;
    let stat = fetch_stat(options.document, &client)
        .with_context(|| format!("Unable to read /{}", options.document.url()))?;

    match &options.list_keys {
        Some(regex) => print_keys(stat.as_ref(), &options, regex)?,
        None => print_value(stat.as_ref(), &options)?,
    }

    Ok(())
}

fn print_value(
    stat: &dyn Stat,
    options: &Opts,
) -> Result<()>
{
    let key = options.key.as_deref().unwrap_or_default();
    let value = stat.get(key, options.node.as_deref())
        .with_context(|| format!("Unable to get {}", key))?;
    if options.json {
        let output = StatOutput::new(stat, key, options.node.as_deref(), value);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", format_value(&value));
    }
    Ok(())
}

fn print_keys(
    stat: &dyn Stat,
    options: &Opts,
    regex: &str,
) -> Result<()>
{
    let key_filter = utility::set_regex(&Some(regex.to_string()))?;
    let scope = stat.scope(options.node.as_deref())
        .with_context(|| "Unable to list keys")?;
    for (path, value) in es_stats::path::leaf_paths(scope).into_iter().filter(|(path, _)| key_filter.is_match(path)) {
        if options.json {
            let output = StatOutput::new(stat, &path, options.node.as_deref(), value.clone());
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("{:60} {}", path, format_value(value));
        }
    }
    Ok(())
}
