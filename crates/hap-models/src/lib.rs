//! Raw HAProxy configuration descriptors as returned by the dataplane API.
//!
//! Plain record types shared across the workspace. No invariants are enforced
//! here; structural validation happens in hap-state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontend {
    pub name: String,
    pub mode: String,
    pub default_backend: Option<String>,
    pub maxconn: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bind {
    pub name: String,
    pub address: String,
    pub port: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogTarget {
    pub index: Option<i64>,
    pub address: String,
    pub facility: Option<String>,
    pub format: Option<String>,
}

/// An attached processing module on a frontend. `type` is the open
/// classification tag ("spoe", "compression", or anything else).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub index: Option<i64>,
    pub r#type: String,
    pub spoe_engine: Option<String>,
    pub spoe_config: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpRequestRule {
    pub index: Option<i64>,
    pub r#type: String,
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequestRule {
    pub index: Option<i64>,
    pub r#type: String,
    pub hdr_name: Option<String>,
    pub hdr_format: Option<String>,
    pub cond: Option<String>,
    pub cond_test: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    pub name: String,
    pub mode: String,
    pub balance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub name: String,
    pub address: String,
    pub port: Option<i64>,
    pub weight: Option<i64>,
}
