//! hap-testkit
//!
//! Deterministic, in-memory implementation of the snapshot core's read
//! contract, plus descriptor fixtures and dump loading. Used by the scenario
//! tests in this crate's `tests/` and by the CLI's offline dump checking.
//!
//! No network IO. Everything is a pure function of the dump it was built from.

use anyhow::{Context, Result};
use std::fs;

mod dump;
mod fixtures;
mod in_memory;

pub use dump::{BackendDump, FrontendDump, ProxyDump};
pub use fixtures::*;
pub use in_memory::{InMemoryProxy, ReadOp};

/// Load a captured proxy dump from a JSON file.
pub fn load_dump_json(path: &str) -> Result<ProxyDump> {
    let raw = fs::read_to_string(path).with_context(|| format!("read proxy dump: {path}"))?;
    let dump: ProxyDump = serde_json::from_str(&raw).context("parse proxy dump json")?;
    Ok(dump)
}
