//! Base configuration rendering.
//!
//! Produces the document the supervisor writes for the proxy at startup:
//! fixed operational stanzas plus the merged parameter set, one `key value`
//! line per entry in alphabetical order. Output is deterministic and covered
//! by a golden test.

use crate::params::ProxyParams;

const COMPRESSION_TYPES: &str = "text/css text/html text/javascript application/javascript \
text/plain text/xml application/json";

/// Inputs for one rendering: the admin socket, the dataplane credentials, and
/// the merged parameter set (built-in defaults overridden by user flags).
#[derive(Debug, Clone)]
pub struct BaseParams {
    pub socket_path: String,
    pub dataplane_user: String,
    pub dataplane_pass: String,
    pub params: ProxyParams,
}

/// Render the base configuration document.
pub fn render_config(base: &BaseParams) -> String {
    let mut cfg = String::new();

    cfg.push_str("\nglobal\n");
    cfg.push_str("\tmaster-worker\n");
    cfg.push_str(&format!(
        "\tstats socket {} mode 600 level admin expose-fd listeners\n",
        base.socket_path
    ));
    for (key, value) in &base.params.globals {
        cfg.push_str(&format!("\t{key} {value}\n"));
    }

    cfg.push_str("\ndefaults\n");
    for (key, value) in &base.params.defaults {
        cfg.push_str(&format!("\t{key} {value}\n"));
    }
    cfg.push_str("\tcompression algo gzip\n");
    cfg.push_str(&format!("\tcompression type {COMPRESSION_TYPES}\n"));

    cfg.push_str("\nuserlist controller\n");
    cfg.push_str(&format!(
        "\tuser {} insecure-password {}\n",
        base.dataplane_user, base.dataplane_pass
    ));
    cfg.push('\n');

    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_render_alphabetically_within_sections() {
        let mut params = ProxyParams::default();
        params.globals.insert("zz".to_string(), "1".to_string());
        params.globals.insert("aa".to_string(), "2".to_string());

        let cfg = render_config(&BaseParams {
            socket_path: "/tmp/admin.sock".to_string(),
            dataplane_user: "user".to_string(),
            dataplane_pass: "pass".to_string(),
            params,
        });

        let aa = cfg.find("\taa 2\n").unwrap();
        let zz = cfg.find("\tzz 1\n").unwrap();
        assert!(aa < zz);
    }

    #[test]
    fn socket_and_credentials_are_interpolated() {
        let cfg = render_config(&BaseParams {
            socket_path: "/run/hap.sock".to_string(),
            dataplane_user: "admin".to_string(),
            dataplane_pass: "secret".to_string(),
            params: ProxyParams::default(),
        });

        assert!(cfg.contains("stats socket /run/hap.sock mode 600 level admin expose-fd listeners"));
        assert!(cfg.contains("user admin insecure-password secret"));
    }
}
