//! hap-state
//!
//! Snapshot of the proxy's live configuration.
//!
//! Architectural decisions:
//! - One sequential pass over the read contract; the first error aborts
//! - Structural invariants enforced per entity (bind / log-target / filter
//!   cardinality, spoe rule cardinality, name uniqueness)
//! - Frontends and backends sorted by name, so two snapshots of identical
//!   proxy state compare deep-equal regardless of listing order
//! - No mutation of the proxy, no retries, no partial snapshots
//!
//! Deterministic, pure logic. No IO beyond driving the injected read contract.

mod assembler;
mod read;
mod state;

pub use assembler::{from_proxy, FilterKind, StateError};
pub use read::{ParentKind, ProxyRead, ReadError};
pub use state::{Backend, Frontend, SpoeFilter, State};
