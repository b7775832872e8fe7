//! Error types for address/mask validation, host enumeration and the
//! interactive shell.

use thiserror::Error;

/// Reasons a candidate string is not an acceptable unicast IPv4 address.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAddress {
    #[error("not a dotted-quad IPv4 address")]
    MalformedSyntax,

    #[error("link-local address (169.254.0.0/16)")]
    LinkLocal,

    #[error("loopback address (127.0.0.0/8)")]
    Loopback,

    #[error("multicast address (224.0.0.0/4)")]
    Multicast,

    #[error("reserved address (0.0.0.0/8 or 240.0.0.0/4)")]
    Reserved,
}

/// Reasons a candidate string is not a legal contiguous subnet mask.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMask {
    #[error("not four dot-separated decimal octets")]
    MalformedSyntax,

    #[error("octet is not one of 255, 254, 252, 248, 240, 224, 192, 128, 0")]
    IllegalOctetValue,

    #[error("mask bits are not contiguous from the most significant bit")]
    NonContiguousBits,
}

/// Reasons a host enumeration request is refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequestError {
    /// Accepted requests satisfy `0 < requested < usable_hosts`.
    #[error("number of hosts must be > 0 and less than {usable_hosts}, got {requested}")]
    OutOfRange { requested: i64, usable_hosts: u64 },

    #[error("a /32 host route has no usable host range")]
    NotApplicable,
}

/// Invalid settings read from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}

/// Failures of the interactive session itself (never of the engine).
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
