//! Descriptor fixtures for scenario tests: minimal valid descriptors with
//! just enough variation to tell entities apart.

use hap_models::{
    Backend, Bind, Filter, Frontend, HttpRequestRule, LogTarget, Server, TcpRequestRule,
};

use crate::dump::{BackendDump, FrontendDump};

pub fn frontend(name: &str) -> Frontend {
    Frontend {
        name: name.to_string(),
        mode: "http".to_string(),
        default_backend: None,
        maxconn: None,
    }
}

pub fn bind(name: &str, address: &str, port: i64) -> Bind {
    Bind {
        name: name.to_string(),
        address: address.to_string(),
        port: Some(port),
    }
}

pub fn log_target(address: &str) -> LogTarget {
    LogTarget {
        index: Some(0),
        address: address.to_string(),
        facility: Some("local0".to_string()),
        format: None,
    }
}

pub fn spoe_filter(engine: &str) -> Filter {
    Filter {
        index: Some(0),
        r#type: "spoe".to_string(),
        spoe_engine: Some(engine.to_string()),
        spoe_config: Some(format!("/etc/haproxy/{engine}.conf")),
    }
}

pub fn compression_filter() -> Filter {
    Filter {
        index: Some(0),
        r#type: "compression".to_string(),
        spoe_engine: None,
        spoe_config: None,
    }
}

pub fn filter(r#type: &str) -> Filter {
    Filter {
        index: Some(0),
        r#type: r#type.to_string(),
        spoe_engine: None,
        spoe_config: None,
    }
}

pub fn tcp_request_rule(action: &str) -> TcpRequestRule {
    TcpRequestRule {
        index: Some(0),
        r#type: "content".to_string(),
        action: Some(action.to_string()),
    }
}

pub fn http_request_rule(hdr_name: &str, hdr_format: &str) -> HttpRequestRule {
    HttpRequestRule {
        index: Some(0),
        r#type: "set-header".to_string(),
        hdr_name: Some(hdr_name.to_string()),
        hdr_format: Some(hdr_format.to_string()),
        cond: None,
        cond_test: None,
    }
}

pub fn backend(name: &str) -> Backend {
    Backend {
        name: name.to_string(),
        mode: "http".to_string(),
        balance: Some("roundrobin".to_string()),
    }
}

pub fn server(name: &str, address: &str, port: i64) -> Server {
    Server {
        name: name.to_string(),
        address: address.to_string(),
        port: Some(port),
        weight: None,
    }
}

/// A frontend dump with one bind and nothing else — the smallest valid
/// frontend the assembler accepts.
pub fn minimal_frontend(name: &str) -> FrontendDump {
    FrontendDump {
        frontend: frontend(name),
        binds: vec![bind("b1", "127.0.0.1", 8080)],
        log_targets: vec![],
        filters: vec![],
        tcp_request_rules: vec![],
    }
}

/// A backend dump with one server and nothing else.
pub fn minimal_backend(name: &str) -> BackendDump {
    BackendDump {
        backend: backend(name),
        servers: vec![server("srv1", "10.0.0.1", 9000)],
        log_targets: vec![],
        http_request_rules: vec![],
    }
}
