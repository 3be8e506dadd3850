//! Parameter override grammar.
//!
//! Flat key/value overrides of the form `{scope}.{dotted.key}={value}` with
//! `scope ∈ {defaults, global}`. The first `.` after the scope token
//! separates scope from key; the key may itself contain dots and spaces, and
//! the value is everything after the first `=` (it may contain spaces and
//! further `=` signs).

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Parameters for the `defaults` and `global` sections of the rendered
/// configuration. BTreeMap-backed so merging and rendering are deterministic
/// and alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyParams {
    pub defaults: BTreeMap<String, String>,
    pub globals: BTreeMap<String, String>,
}

impl ProxyParams {
    /// Parse a list of `{scope}.{key}={value}` override flags.
    ///
    /// Distinct composite keys are retained independently; an exactly
    /// repeated key overwrites its earlier value. Malformed input fails with
    /// the offending flag echoed back.
    pub fn parse(flags: &[String]) -> Result<ProxyParams> {
        let mut params = ProxyParams::default();

        for flag in flags {
            let Some((key, value)) = flag.split_once('=') else {
                bail!("bad haproxy-param flag {flag}, expected {{scope}}.{{key}}={{value}}");
            };
            let Some((scope, name)) = key.split_once('.') else {
                bail!("bad haproxy-param flag {flag}, expected {{scope}}.{{key}}={{value}}");
            };

            let section = match scope {
                "defaults" => &mut params.defaults,
                "global" => &mut params.globals,
                _ => bail!("bad haproxy-param flag {flag}, param scope must be `defaults` or `global`"),
            };
            section.insert(name.to_string(), value.to_string());
        }

        Ok(params)
    }

    /// Merge `overrides` on top of `self`; per-key, the override wins.
    pub fn overridden_with(&self, overrides: &ProxyParams) -> ProxyParams {
        let mut merged = self.clone();
        for (key, value) in &overrides.defaults {
            merged.defaults.insert(key.clone(), value.clone());
        }
        for (key, value) in &overrides.globals {
            merged.globals.insert(key.clone(), value.clone());
        }
        merged
    }
}

/// Built-in operational defaults applied under any user overrides.
///
/// `nbthread` follows the host's available parallelism; everything else is a
/// fixed operational setting.
pub fn default_params() -> ProxyParams {
    let nbthread = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let mut params = ProxyParams::default();
    params
        .defaults
        .insert("http-reuse".to_string(), "always".to_string());
    params
        .globals
        .insert("maxconn".to_string(), "32000".to_string());
    params
        .globals
        .insert("nbthread".to_string(), nbthread.to_string());
    params
        .globals
        .insert("stats timeout".to_string(), "2m".to_string());
    params
        .globals
        .insert("tune.ssl.default-dh-param".to_string(), "1024".to_string());
    params
        .globals
        .insert("ulimit-n".to_string(), "65536".to_string());
    params
}
