//! The structs
//!
use std::{fmt::Debug, io, net::IpAddr};

/// The node name that selects the node running on this machine.
pub const LOCAL_NODE: &str = "_local";

/// The host name resolution used to find the `_local` node.
pub trait HostLookup: Debug {
    /// The hostname of this machine.
    fn hostname(&self) -> io::Result<String>;
    /// The primary ip address of `hostname`.
    fn primary_ip(&self, hostname: &str) -> io::Result<IpAddr>;
    /// The name a `host` (ip address or hostname) reverse resolves to.
    fn reverse_lookup(&self, host: &str) -> io::Result<String>;
}

/// [HostLookup] using the resolver of the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostLookup;
