use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, path: &str, contents: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project(config: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "export.config.json", config);
    write(
        dir.path(),
        "out/Token.sol/Token.json",
        r#"{"abi":[{"type":"function","name":"transfer"}]}"#,
    );
    write(
        dir.path(),
        "broadcast/Deploy.s.sol/1/run-latest.json",
        r#"{ "transactions": [
            { "transactionType": "CREATE", "contractName": "Token", "contractAddress": "0xA" },
            { "transactionType": "CALL", "contractName": "Token", "contractAddress": "0xA" }
        ] }"#,
    );
    dir
}

fn export(dir: &TempDir) -> assert_cmd::assert::Assert {
    Command::cargo_bin("artifact-export")
        .unwrap()
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .assert()
}

#[test]
fn exports_abis_and_deployments() {
    let dir = project(r#"{ "contracts": ["Token"], "networks": [1] }"#);

    export(&dir).success();

    assert_eq!(
        fs::read_to_string(dir.path().join("generated/abi.ts")).unwrap(),
        r#"export const abis = {"Token":[{"type":"function","name":"transfer"}]}"#,
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("generated/networks.ts")).unwrap(),
        r#"export const deployments = {"1":{"Token":["0xA"]}}"#,
    );
}

#[test]
fn missing_artifact_writes_nothing() {
    let dir = project(r#"{ "contracts": ["Token", "Vault"], "networks": [1] }"#);

    let output = export(&dir).failure().code(1).get_output().clone();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.contains("contract ABI Vault"), "{}", stderr);
    assert!(!dir.path().join("generated/abi.ts").exists());
    assert!(!dir.path().join("generated/networks.ts").exists());
}

#[test]
fn missing_broadcast_keeps_abis() {
    let dir = project(r#"{ "contracts": ["Token"], "networks": [1, "sepolia"] }"#);

    let output = export(&dir).failure().code(1).get_output().clone();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.contains("deployments on network sepolia"), "{}", stderr);
    assert!(dir.path().join("generated/abi.ts").exists());
    assert!(!dir.path().join("generated/networks.ts").exists());
}

#[test]
fn missing_config() {
    let dir = tempfile::tempdir().unwrap();

    let output = export(&dir).failure().code(1).get_output().clone();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.contains("export.config.json"), "{}", stderr);
}

#[test]
fn logs_summary_on_success() {
    let dir = project(r#"{ "contracts": ["Token"], "networks": [1] }"#);

    let output = Command::cargo_bin("artifact-export")
        .unwrap()
        .current_dir(dir.path())
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(
        stderr.contains("done: 1 contracts, 1 deployments on 1 networks"),
        "{}",
        stderr,
    );
}
