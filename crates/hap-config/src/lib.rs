//! hap-config
//!
//! Bootstrap configuration for the managed proxy: the flat parameter override
//! grammar and the deterministic rendering of the base configuration document.
//!
//! Adjacent to the snapshot core, not part of it — nothing here touches the
//! proxy; the rendered document is what the supervisor hands the proxy at
//! startup.

mod params;
mod render;

pub use params::{default_params, ProxyParams};
pub use render::{render_config, BaseParams};
