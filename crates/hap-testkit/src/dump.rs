//! Captured proxy configuration: every collection the read contract can
//! return, grouped per entity. Serializable so dumps can be checked offline.

use hap_models::{
    Backend, Bind, Filter, Frontend, HttpRequestRule, LogTarget, Server, TcpRequestRule,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyDump {
    #[serde(default)]
    pub frontends: Vec<FrontendDump>,
    #[serde(default)]
    pub backends: Vec<BackendDump>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendDump {
    pub frontend: Frontend,
    #[serde(default)]
    pub binds: Vec<Bind>,
    #[serde(default)]
    pub log_targets: Vec<LogTarget>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub tcp_request_rules: Vec<TcpRequestRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendDump {
    pub backend: Backend,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub log_targets: Vec<LogTarget>,
    #[serde(default)]
    pub http_request_rules: Vec<HttpRequestRule>,
}

impl ProxyDump {
    pub fn with_frontend(mut self, frontend: FrontendDump) -> Self {
        self.frontends.push(frontend);
        self
    }

    pub fn with_backend(mut self, backend: BackendDump) -> Self {
        self.backends.push(backend);
        self
    }
}
