use hap_config::{default_params, render_config, BaseParams, ProxyParams};

#[test]
fn scenario_rendered_config_matches_golden() {
    let flags: Vec<String> = [
        "defaults.test.with.dots=3",
        "defaults.another=abdc",
        "defaults.multiple key1=value1",
        "defaults.multiple key2=value2",
        "global.with.spaces=hey I have spaces",
        "global.with.dots=hey.I.have.dots",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let overrides = ProxyParams::parse(&flags).unwrap();
    let cfg = render_config(&BaseParams {
        socket_path: "stats_sock.sock".to_string(),
        dataplane_user: "dummy_user".to_string(),
        dataplane_pass: "dummy_pass".to_string(),
        params: default_params().overridden_with(&overrides),
    });

    let nbthread = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let expected = format!(
        "\nglobal\n\
         \tmaster-worker\n\
         \tstats socket stats_sock.sock mode 600 level admin expose-fd listeners\n\
         \tmaxconn 32000\n\
         \tnbthread {nbthread}\n\
         \tstats timeout 2m\n\
         \ttune.ssl.default-dh-param 1024\n\
         \tulimit-n 65536\n\
         \twith.dots hey.I.have.dots\n\
         \twith.spaces hey I have spaces\n\
         \ndefaults\n\
         \tanother abdc\n\
         \thttp-reuse always\n\
         \tmultiple key1 value1\n\
         \tmultiple key2 value2\n\
         \ttest.with.dots 3\n\
         \tcompression algo gzip\n\
         \tcompression type text/css text/html text/javascript application/javascript text/plain text/xml application/json\n\
         \nuserlist controller\n\
         \tuser dummy_user insecure-password dummy_pass\n\n"
    );

    assert_eq!(cfg, expected);
}

#[test]
fn scenario_rendering_is_stable_across_calls() {
    let params = default_params();
    let base = BaseParams {
        socket_path: "stats_sock.sock".to_string(),
        dataplane_user: "u".to_string(),
        dataplane_pass: "p".to_string(),
        params,
    };
    assert_eq!(render_config(&base), render_config(&base));
}
