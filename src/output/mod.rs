//! Output formatting for network definitions.
//!
//! - [`terminal`] - labeled table and host list for the terminal
//! - [`json`] - JSON rendering

mod json;
mod terminal;

pub use json::{host_list_json, network_definition_json};
pub use terminal::{format_host_list, format_network_definition, format_row, format_title};
