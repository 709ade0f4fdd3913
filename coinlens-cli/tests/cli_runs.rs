//! End-to-end runs of the `coinlens` binary: output messages, files and exit codes.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("coinlens-runner/tests/fixtures/markets.json")
}

fn coinlens(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coinlens"))
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch coinlens")
}

#[test]
fn offline_run_writes_default_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture_path();

    let out = coinlens(dir.path(), &["--input", fixture.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout.contains("Analysis complete. Results saved to 'Crypto_Analysis.xlsx'."));
    assert!(dir.path().join("Crypto_Analysis.xlsx").exists());
}

#[test]
fn output_flag_overrides_path() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = fixture_path();

    let out = coinlens(
        dir.path(),
        &["--input", fixture.to_str().unwrap(), "--output", "snapshots/today.xlsx"],
    );

    assert!(out.status.success());
    assert!(dir.path().join("snapshots/today.xlsx").exists());
    assert!(!dir.path().join("Crypto_Analysis.xlsx").exists());
}

#[test]
fn empty_snapshot_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, "[]").unwrap();

    let out = coinlens(dir.path(), &["--input", empty.to_str().unwrap()]);

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("nothing to export"));
    assert!(!dir.path().join("Crypto_Analysis.xlsx").exists());
}

#[test]
fn malformed_record_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(
        &broken,
        r#"[{"name":"Bitcoin","symbol":"btc","current_price":1.0,"total_volume":1.0,"price_change_percentage_24h":0.0}]"#,
    )
    .unwrap();

    let out = coinlens(dir.path(), &["--input", broken.to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("market_cap"));
    assert!(!dir.path().join("Crypto_Analysis.xlsx").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_status_failure_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/markets"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("coinlens.toml");
    std::fs::write(&config, format!("[source]\nbase_url = \"{}\"\n", server.uri())).unwrap();

    let workdir = dir.path().to_path_buf();
    let out = tokio::task::spawn_blocking(move || {
        coinlens(&workdir, &["--config", config.to_str().unwrap()])
    })
    .await
    .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error fetching data: 503"));
    assert!(!dir.path().join("Crypto_Analysis.xlsx").exists());
}

#[test]
fn invalid_config_exits_nonzero_with_reason() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("coinlens.toml");
    std::fs::write(&config, "[output]\ntop_n = 0\n").unwrap();
    let fixture = fixture_path();

    let out = coinlens(
        dir.path(),
        &["--config", config.to_str().unwrap(), "--input", fixture.to_str().unwrap()],
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("output.top_n"));
    assert!(!dir.path().join("Crypto_Analysis.xlsx").exists());
}
