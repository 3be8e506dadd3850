//! Snapshot types.
//!
//! Everything here is owned by the [`State`] value that contains it: built
//! from scratch on each conversion, compared whole by the diffing layer,
//! discarded when superseded.

use hap_models as models;
use serde::{Deserialize, Serialize};

/// Complete, validated snapshot of the proxy's configuration at one point in
/// time. `frontends` and `backends` are sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    pub frontends: Vec<Frontend>,
    pub backends: Vec<Backend>,
}

/// A frontend together with its validated dependents: exactly one bind, at
/// most one log target, at most one filter of each recognized kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontend {
    pub frontend: models::Frontend,
    pub bind: models::Bind,
    pub log_target: Option<models::LogTarget>,
    pub filter_spoe: Option<SpoeFilter>,
    pub filter_compression: Option<models::Filter>,
}

/// An spoe filter and the single TCP request rule associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoeFilter {
    pub filter: models::Filter,
    pub rule: models::TcpRequestRule,
}

/// A backend together with its validated dependents. `http_request_rules` is
/// `None` when the proxy reported no rules — an empty read is normalized to
/// the absent representation so equal configurations compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    pub backend: models::Backend,
    pub servers: Vec<models::Server>,
    pub log_target: Option<models::LogTarget>,
    pub http_request_rules: Option<Vec<models::HttpRequestRule>>,
}
