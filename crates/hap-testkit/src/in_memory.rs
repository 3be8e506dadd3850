//! In-memory read contract over a captured dump.

use hap_models::{
    Backend, Bind, Filter, Frontend, HttpRequestRule, LogTarget, Server, TcpRequestRule,
};
use hap_state::{ParentKind, ProxyRead, ReadError};

use crate::dump::{BackendDump, FrontendDump, ProxyDump};

/// One operation of the read contract, used to inject failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadOp {
    Frontends,
    Binds,
    LogTargets,
    Filters,
    TcpRequestRules,
    HttpRequestRules,
    Backends,
    Servers,
}

/// Deterministic [`ProxyRead`] implementation serving a [`ProxyDump`].
///
/// Collections are returned in dump order, cloned per call. An optional
/// injected failure makes one operation return an error, for testing the
/// assembler's fail-fast propagation.
pub struct InMemoryProxy {
    dump: ProxyDump,
    fail_on: Option<ReadOp>,
}

impl InMemoryProxy {
    pub fn new(dump: ProxyDump) -> Self {
        Self {
            dump,
            fail_on: None,
        }
    }

    /// A proxy whose `op` reads always fail with an injected error.
    pub fn failing_on(dump: ProxyDump, op: ReadOp) -> Self {
        Self {
            dump,
            fail_on: Some(op),
        }
    }

    fn check(&self, op: ReadOp) -> Result<(), ReadError> {
        match self.fail_on {
            Some(failing) if failing == op => {
                Err(format!("injected read failure: {op:?}").into())
            }
            _ => Ok(()),
        }
    }

    fn frontend_dump(&self, name: &str) -> Option<&FrontendDump> {
        self.dump.frontends.iter().find(|fe| fe.frontend.name == name)
    }

    fn backend_dump(&self, name: &str) -> Option<&BackendDump> {
        self.dump.backends.iter().find(|be| be.backend.name == name)
    }
}

impl ProxyRead for InMemoryProxy {
    fn frontends(&self) -> Result<Vec<Frontend>, ReadError> {
        self.check(ReadOp::Frontends)?;
        Ok(self
            .dump
            .frontends
            .iter()
            .map(|fe| fe.frontend.clone())
            .collect())
    }

    fn binds(&self, frontend_name: &str) -> Result<Vec<Bind>, ReadError> {
        self.check(ReadOp::Binds)?;
        Ok(self
            .frontend_dump(frontend_name)
            .map(|fe| fe.binds.clone())
            .unwrap_or_default())
    }

    fn log_targets(
        &self,
        parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<LogTarget>, ReadError> {
        self.check(ReadOp::LogTargets)?;
        let targets = match parent_kind {
            ParentKind::Frontend => self
                .frontend_dump(parent_name)
                .map(|fe| fe.log_targets.clone()),
            ParentKind::Backend => self
                .backend_dump(parent_name)
                .map(|be| be.log_targets.clone()),
        };
        Ok(targets.unwrap_or_default())
    }

    fn filters(
        &self,
        _parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<Filter>, ReadError> {
        self.check(ReadOp::Filters)?;
        Ok(self
            .frontend_dump(parent_name)
            .map(|fe| fe.filters.clone())
            .unwrap_or_default())
    }

    fn tcp_request_rules(
        &self,
        _parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<TcpRequestRule>, ReadError> {
        self.check(ReadOp::TcpRequestRules)?;
        Ok(self
            .frontend_dump(parent_name)
            .map(|fe| fe.tcp_request_rules.clone())
            .unwrap_or_default())
    }

    fn http_request_rules(
        &self,
        _parent_kind: ParentKind,
        parent_name: &str,
    ) -> Result<Vec<HttpRequestRule>, ReadError> {
        self.check(ReadOp::HttpRequestRules)?;
        Ok(self
            .backend_dump(parent_name)
            .map(|be| be.http_request_rules.clone())
            .unwrap_or_default())
    }

    fn backends(&self) -> Result<Vec<Backend>, ReadError> {
        self.check(ReadOp::Backends)?;
        Ok(self
            .dump
            .backends
            .iter()
            .map(|be| be.backend.clone())
            .collect())
    }

    fn servers(&self, backend_name: &str) -> Result<Vec<Server>, ReadError> {
        self.check(ReadOp::Servers)?;
        Ok(self
            .backend_dump(backend_name)
            .map(|be| be.servers.clone())
            .unwrap_or_default())
    }
}
