//! Read contract against the proxy's current configuration.
//!
//! Consumed, never implemented, by this crate. The transport behind it (admin
//! socket, dataplane HTTP, a captured dump) is a collaborator concern; errors
//! it produces are opaque here and abort the whole conversion.

use hap_models::{
    Backend, Bind, Filter, Frontend, HttpRequestRule, LogTarget, Server, TcpRequestRule,
};

/// Transport/protocol error raised by a read call. Propagated verbatim.
pub type ReadError = Box<dyn std::error::Error + Send + Sync>;

/// Which side of the proxy a parent-scoped query addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParentKind {
    Frontend,
    Backend,
}

impl ParentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParentKind::Frontend => "frontend",
            ParentKind::Backend => "backend",
        }
    }
}

impl std::fmt::Display for ParentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query operations against the proxy's live configuration.
///
/// Each call is independent; no atomicity across calls is assumed. The proxy
/// may mutate between calls — the assembler does not compensate for that, the
/// caller re-runs the conversion on the next reconciliation tick.
pub trait ProxyRead {
    fn frontends(&self) -> Result<Vec<Frontend>, ReadError>;

    fn binds(&self, frontend_name: &str) -> Result<Vec<Bind>, ReadError>;

    fn log_targets(
        &self,
        parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<LogTarget>, ReadError>;

    fn filters(
        &self,
        parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<Filter>, ReadError>;

    fn tcp_request_rules(
        &self,
        parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<TcpRequestRule>, ReadError>;

    fn http_request_rules(
        &self,
        parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<HttpRequestRule>, ReadError>;

    fn backends(&self) -> Result<Vec<Backend>, ReadError>;

    fn servers(&self, backend_name: &str) -> Result<Vec<Server>, ReadError>;
}
