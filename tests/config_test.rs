//! Config file loading from disk.

use std::io::Write;

use lino_sdk::config::loader::{load_config, ConfigError};
use lino_sdk::config::LogFormat;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[node]
url = "https://rpc.lino.example:443"
chain_id = "lino-testnet"
rpc_timeout_secs = 3

[observability]
log_level = "debug"
log_format = "json"
"#
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.node.url, "https://rpc.lino.example:443");
    assert_eq!(config.node.chain_id, "lino-testnet");
    assert_eq!(config.node.rpc_timeout_secs, 3);
    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.observability.log_format, LogFormat::Json);
}

#[test]
fn test_invalid_file_reports_every_problem() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[node]\nurl = \"not a url\"\nrpc_timeout_secs = 0").unwrap();

    match load_config(file.path()).unwrap_err() {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation errors, got {other}"),
    }
}
