//! JSON rendering of network definitions and host lists.

use crate::models::NetworkDefinition;
use std::net::Ipv4Addr;

/// Pretty JSON for a network definition, tagged by `kind`.
pub fn network_definition_json(def: &NetworkDefinition) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(def)
}

/// JSON array of dotted-quad strings.
pub fn host_list_json<I>(hosts: I) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = Ipv4Addr>,
{
    let hosts: Vec<Ipv4Addr> = hosts.into_iter().collect();
    serde_json::to_string(&hosts)
}
