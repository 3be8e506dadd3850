//! Snapshot assembler.
//!
//! Drives the read contract in a single sequential pass, validates structural
//! invariants per entity, classifies frontend filters, and produces the final
//! name-sorted [`State`].
//!
//! The fetch sequencing lives in [`from_proxy`]; every invariant check is a
//! pure function of already-fetched collections, so the validation logic is
//! unit-testable with canned input and no transport collaborator.

use hap_models as models;

use crate::read::{ParentKind, ProxyRead, ReadError};
use crate::state::{Backend, Frontend, SpoeFilter, State};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Classification of a frontend filter by its type tag.
///
/// Closed set: every arm is handled explicitly by the assembler. Tags outside
/// the recognized set map to [`FilterKind::Unrecognized`] and are skipped with
/// a warning rather than silently discarded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Spoe,
    Compression,
    Unrecognized,
}

impl FilterKind {
    fn of(filter: &models::Filter) -> Self {
        match filter.r#type.as_str() {
            "spoe" => FilterKind::Spoe,
            "compression" => FilterKind::Compression,
            _ => FilterKind::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Spoe => "spoe",
            FilterKind::Compression => "compression",
            FilterKind::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All ways a conversion can fail. Fail-fast: the first error encountered
/// aborts the whole call; there is no partial or aggregated reporting.
#[derive(Debug)]
pub enum StateError {
    /// A read call failed; the transport error is propagated verbatim.
    Read(ReadError),
    /// A frontend did not have exactly one bind.
    BindCount { frontend: String, count: usize },
    /// A frontend or backend had more than one log target.
    LogTargetCount {
        parent_kind: ParentKind,
        parent: String,
        count: usize,
    },
    /// Two filters of the same recognized kind attached to one frontend.
    FilterAlreadyInitialized { frontend: String, kind: FilterKind },
    /// An spoe filter did not have exactly one associated TCP request rule.
    TcpRequestRuleCount { frontend: String, count: usize },
    /// Two entities of the same kind share a name; the diffing layer depends
    /// on name uniqueness, so this is fatal rather than silently resolved.
    DuplicateName { kind: ParentKind, name: String },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "{err}"),
            Self::BindCount { frontend, count } => {
                write!(f, "expected 1 bind for frontend {frontend}, got {count}")
            }
            Self::LogTargetCount {
                parent_kind,
                parent,
                count,
            } => {
                write!(
                    f,
                    "expected at most 1 log target for {parent_kind} {parent}, got {count}"
                )
            }
            Self::FilterAlreadyInitialized { frontend, kind } => {
                write!(f, "{kind} filter already initialized for frontend {frontend}")
            }
            Self::TcpRequestRuleCount { frontend, count } => {
                write!(
                    f,
                    "expected 1 tcp request rule for frontend {frontend}, got {count}"
                )
            }
            Self::DuplicateName { kind, name } => {
                write!(f, "duplicate {kind} name {name}")
            }
        }
    }
}

impl std::error::Error for StateError {}

impl From<ReadError> for StateError {
    fn from(err: ReadError) -> Self {
        StateError::Read(err)
    }
}

// ---------------------------------------------------------------------------
// Pure validation helpers
// ---------------------------------------------------------------------------

fn single_bind(frontend: &str, binds: Vec<models::Bind>) -> Result<models::Bind, StateError> {
    let count = binds.len();
    let mut binds = binds.into_iter();
    match (binds.next(), binds.next()) {
        (Some(bind), None) => Ok(bind),
        _ => Err(StateError::BindCount {
            frontend: frontend.to_string(),
            count,
        }),
    }
}

fn at_most_one_log_target(
    parent_kind: ParentKind,
    parent: &str,
    mut targets: Vec<models::LogTarget>,
) -> Result<Option<models::LogTarget>, StateError> {
    if targets.len() > 1 {
        return Err(StateError::LogTargetCount {
            parent_kind,
            parent: parent.to_string(),
            count: targets.len(),
        });
    }
    Ok(targets.pop())
}

fn single_tcp_rule(
    frontend: &str,
    rules: Vec<models::TcpRequestRule>,
) -> Result<models::TcpRequestRule, StateError> {
    let count = rules.len();
    let mut rules = rules.into_iter();
    match (rules.next(), rules.next()) {
        (Some(rule), None) => Ok(rule),
        _ => Err(StateError::TcpRequestRuleCount {
            frontend: frontend.to_string(),
            count,
        }),
    }
}

/// Frontend filters split by recognized kind, at most one of each.
#[derive(Debug, Default)]
struct ClassifiedFilters {
    spoe: Option<models::Filter>,
    compression: Option<models::Filter>,
}

fn classify_filters(
    frontend: &str,
    filters: Vec<models::Filter>,
) -> Result<ClassifiedFilters, StateError> {
    let mut classified = ClassifiedFilters::default();
    for filter in filters {
        match FilterKind::of(&filter) {
            FilterKind::Spoe => {
                if classified.spoe.is_some() {
                    return Err(StateError::FilterAlreadyInitialized {
                        frontend: frontend.to_string(),
                        kind: FilterKind::Spoe,
                    });
                }
                classified.spoe = Some(filter);
            }
            FilterKind::Compression => {
                if classified.compression.is_some() {
                    return Err(StateError::FilterAlreadyInitialized {
                        frontend: frontend.to_string(),
                        kind: FilterKind::Compression,
                    });
                }
                classified.compression = Some(filter);
            }
            FilterKind::Unrecognized => {
                tracing::warn!(
                    "ignoring unrecognized filter type '{}' on frontend {}",
                    filter.r#type,
                    frontend
                );
            }
        }
    }
    Ok(classified)
}

fn normalize_http_rules(
    rules: Vec<models::HttpRequestRule>,
) -> Option<Vec<models::HttpRequestRule>> {
    if rules.is_empty() {
        None
    } else {
        Some(rules)
    }
}

/// Sort by name and reject duplicates. Adjacent comparison after the sort
/// keeps the check independent of the order the proxy listed entities in.
fn sort_unique_by_name<T>(
    entries: &mut [T],
    kind: ParentKind,
    name: impl Fn(&T) -> &str,
) -> Result<(), StateError> {
    entries.sort_by(|a, b| name(a).cmp(name(b)));
    for pair in entries.windows(2) {
        if name(&pair[0]) == name(&pair[1]) {
            return Err(StateError::DuplicateName {
                kind,
                name: name(&pair[0]).to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

/// Convert the proxy's live configuration into a validated [`State`].
///
/// Strictly sequential: one read outstanding at a time, in listing order.
/// TCP request rules are fetched only for frontends carrying an spoe filter.
/// Returns the complete snapshot or the first error encountered; never
/// mutates the proxy.
pub fn from_proxy(proxy: &impl ProxyRead) -> Result<State, StateError> {
    let mut frontends = Vec::new();
    for f in proxy.frontends()? {
        let bind = single_bind(&f.name, proxy.binds(&f.name)?)?;
        let log_target = at_most_one_log_target(
            ParentKind::Frontend,
            &f.name,
            proxy.log_targets(ParentKind::Frontend, &f.name)?,
        )?;
        let classified = classify_filters(&f.name, proxy.filters(ParentKind::Frontend, &f.name)?)?;

        let filter_spoe = match classified.spoe {
            Some(filter) => {
                let rules = proxy.tcp_request_rules(ParentKind::Frontend, &f.name)?;
                let rule = single_tcp_rule(&f.name, rules)?;
                Some(SpoeFilter { filter, rule })
            }
            None => None,
        };

        frontends.push(Frontend {
            frontend: f,
            bind,
            log_target,
            filter_spoe,
            filter_compression: classified.compression,
        });
    }
    sort_unique_by_name(&mut frontends, ParentKind::Frontend, |fe| {
        fe.frontend.name.as_str()
    })?;

    let mut backends = Vec::new();
    for b in proxy.backends()? {
        let servers = proxy.servers(&b.name)?;
        let log_target = at_most_one_log_target(
            ParentKind::Backend,
            &b.name,
            proxy.log_targets(ParentKind::Backend, &b.name)?,
        )?;
        let http_request_rules =
            normalize_http_rules(proxy.http_request_rules(ParentKind::Backend, &b.name)?);

        backends.push(Backend {
            backend: b,
            servers,
            log_target,
            http_request_rules,
        });
    }
    sort_unique_by_name(&mut backends, ParentKind::Backend, |be| {
        be.backend.name.as_str()
    })?;

    Ok(State {
        frontends,
        backends,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(name: &str) -> models::Bind {
        models::Bind {
            name: name.to_string(),
            address: "127.0.0.1".to_string(),
            port: Some(8080),
        }
    }

    fn log_target(address: &str) -> models::LogTarget {
        models::LogTarget {
            index: Some(0),
            address: address.to_string(),
            facility: None,
            format: None,
        }
    }

    fn filter(r#type: &str) -> models::Filter {
        models::Filter {
            index: Some(0),
            r#type: r#type.to_string(),
            spoe_engine: None,
            spoe_config: None,
        }
    }

    fn tcp_rule() -> models::TcpRequestRule {
        models::TcpRequestRule {
            index: Some(0),
            r#type: "content".to_string(),
            action: Some("use-service spoe".to_string()),
        }
    }

    fn http_rule() -> models::HttpRequestRule {
        models::HttpRequestRule {
            index: Some(0),
            r#type: "set-header".to_string(),
            hdr_name: Some("X-App".to_string()),
            hdr_format: Some("connect".to_string()),
            cond: None,
            cond_test: None,
        }
    }

    // --- Bind cardinality ---

    #[test]
    fn single_bind_accepts_exactly_one() {
        let b = single_bind("fe1", vec![bind("b1")]).unwrap();
        assert_eq!(b.name, "b1");
    }

    #[test]
    fn single_bind_rejects_zero() {
        let err = single_bind("fe1", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "expected 1 bind for frontend fe1, got 0");
    }

    #[test]
    fn single_bind_rejects_two() {
        let err = single_bind("fe1", vec![bind("b1"), bind("b2")]).unwrap_err();
        assert_eq!(err.to_string(), "expected 1 bind for frontend fe1, got 2");
    }

    // --- Log target cap ---

    #[test]
    fn log_target_absent_is_ok() {
        let lt = at_most_one_log_target(ParentKind::Frontend, "fe1", vec![]).unwrap();
        assert!(lt.is_none());
    }

    #[test]
    fn log_target_single_is_attached() {
        let lt =
            at_most_one_log_target(ParentKind::Backend, "be1", vec![log_target("127.0.0.1:514")])
                .unwrap();
        assert_eq!(lt.unwrap().address, "127.0.0.1:514");
    }

    #[test]
    fn log_target_two_is_rejected() {
        let err = at_most_one_log_target(
            ParentKind::Backend,
            "be1",
            vec![log_target("a"), log_target("b")],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected at most 1 log target for backend be1, got 2"
        );
    }

    // --- Filter classification ---

    #[test]
    fn spoe_and_compression_classify_independently() {
        let classified =
            classify_filters("fe1", vec![filter("spoe"), filter("compression")]).unwrap();
        assert!(classified.spoe.is_some());
        assert!(classified.compression.is_some());
    }

    #[test]
    fn duplicate_compression_is_rejected() {
        let err =
            classify_filters("fe1", vec![filter("compression"), filter("compression")])
                .unwrap_err();
        assert_eq!(
            err.to_string(),
            "compression filter already initialized for frontend fe1"
        );
    }

    #[test]
    fn duplicate_spoe_is_rejected() {
        let err = classify_filters("fe1", vec![filter("spoe"), filter("spoe")]).unwrap_err();
        assert!(matches!(
            err,
            StateError::FilterAlreadyInitialized {
                kind: FilterKind::Spoe,
                ..
            }
        ));
    }

    #[test]
    fn unrecognized_filter_is_skipped() {
        let classified =
            classify_filters("fe1", vec![filter("trace"), filter("compression")]).unwrap();
        assert!(classified.spoe.is_none());
        assert!(classified.compression.is_some());
    }

    // --- Spoe rule cardinality ---

    #[test]
    fn single_tcp_rule_accepts_exactly_one() {
        assert!(single_tcp_rule("fe1", vec![tcp_rule()]).is_ok());
    }

    #[test]
    fn single_tcp_rule_rejects_zero_and_two() {
        let err = single_tcp_rule("fe1", vec![]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected 1 tcp request rule for frontend fe1, got 0"
        );
        let err = single_tcp_rule("fe1", vec![tcp_rule(), tcp_rule()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected 1 tcp request rule for frontend fe1, got 2"
        );
    }

    // --- Empty-rules normalization ---

    #[test]
    fn empty_http_rules_normalize_to_absent() {
        assert_eq!(normalize_http_rules(vec![]), None);
    }

    #[test]
    fn nonempty_http_rules_are_kept() {
        let rules = normalize_http_rules(vec![http_rule()]).unwrap();
        assert_eq!(rules.len(), 1);
    }

    // --- Name sort + uniqueness ---

    #[test]
    fn sort_unique_orders_by_name() {
        let mut names = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        sort_unique_by_name(&mut names, ParentKind::Frontend, |n| n.as_str()).unwrap();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_unique_rejects_duplicate_names() {
        let mut names = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let err =
            sort_unique_by_name(&mut names, ParentKind::Backend, |n| n.as_str()).unwrap_err();
        assert_eq!(err.to_string(), "duplicate backend name a");
    }
}
