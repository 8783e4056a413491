//! CLI tests driving the built `assetbake` binary.

mod common;

use std::fs;

use common::TestWorkspace;
use serde_json::Value;

#[test]
fn test_generate_reports_regenerated_assets() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");
    ws.put_asset("b.bin", b"b");

    let output = ws.cli(&["a.bin", "b.bin"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" -> a.bin"));
    assert!(stdout.contains(" -> b.bin"));
    assert!(stdout.contains("2 regenerated, 0 unchanged"));
    assert!(ws.output("embedded_assets.cpp").is_file());
}

#[test]
fn test_second_run_reports_nothing_regenerated() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");
    assert!(ws.cli(&["a.bin"]).status.success());

    let output = ws.cli(&["a.bin"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(" -> "));
    assert!(stdout.contains("0 regenerated, 1 unchanged"));
}

#[test]
fn test_symbol_prefix_from_env_regenerates_sources() {
    let ws = TestWorkspace::new();
    ws.put_asset("icon.png", b"png");
    assert!(ws.cli(&["icon.png"]).status.success());

    let output = ws.cli_with_env(&[("ASSETBAKE_SYMBOL_PREFIX", "res_")], &["icon.png"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 regenerated, 0 unchanged"));
    assert!(ws
        .read_output("assets/icon_png.cpp")
        .contains("extern const std::uint8_t res_icon_png[] = {"));
    assert!(ws
        .read_output("embedded_assets.cpp")
        .contains("extern const std::uint8_t res_icon_png[];"));
}

#[test]
fn test_assets_from_file_appends_to_positional_assets() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");
    ws.put_asset("ui/b.png", b"b");
    let list = ws.root().join("assets.txt");
    fs::write(&list, "# listed assets\nui/b.png\n\n").unwrap();

    let output = ws.cli(&["a.bin", "--assets-from", list.to_str().unwrap()]);

    assert!(output.status.success());
    let file_list = ws.read_output("assets/cmake_file_list.txt");
    assert!(file_list.find("a_bin.cpp").unwrap() < file_list.find("ui_b_png.cpp").unwrap());
}

#[test]
fn test_json_emits_ndjson_event_stream() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");

    let output = ws.cli(&["--json", "a.bin"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let events: Vec<Value> = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert!(events
        .iter()
        .any(|e| e["event"] == "asset_regenerated" && e["asset"] == "a.bin"));
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["regenerated"], 1);
}

#[test]
fn test_dry_run_writes_nothing() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");

    let output = ws.cli(&["--dry-run", "a.bin"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("[dry run]"));
    assert!(!ws.output_dir().exists());
}

#[test]
fn test_quiet_prints_nothing() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");

    let output = ws.cli(&["-q", "a.bin"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_asset_fails_with_message() {
    let ws = TestWorkspace::new();

    let output = ws.cli(&["missing.bin"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.bin"), "stderr: {stderr}");
}

#[test]
fn test_collision_fails_and_names_both_assets() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.b", b"1");
    ws.put_asset("a-b", b"2");

    let output = ws.cli(&["a.b", "a-b"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'a.b'") && stderr.contains("'a-b'"), "stderr: {stderr}");
    assert!(!ws.output("embedded_assets.cpp").exists());
}

#[test]
fn test_config_file_in_asset_dir_is_used() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");
    fs::write(
        ws.asset_dir().join("assetbake.toml"),
        "[cpp]\nnamespace = \"Studio\"\nrepository_class = \"Baked\"\n\n[build]\nvariable = \"BAKED\"\n",
    )
    .unwrap();

    let output = ws.cli(&["a.bin"]);

    assert!(output.status.success());
    assert!(ws
        .read_output("embedded_assets.hpp")
        .contains("class Baked final"));
    assert!(ws
        .read_output("assets/cmake_file_list.txt")
        .starts_with("set(BAKED "));
}

#[test]
fn test_unknown_config_key_warns_with_suggestion() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");
    let config = ws.root().join("bake.toml");
    fs::write(&config, "[cpp]\nnamespce = \"X\"\n").unwrap();

    let output = ws.cli(&["--config", config.to_str().unwrap(), "a.bin"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("namespce"));
    assert!(stderr.contains("did you mean 'namespace'?"));
}

#[test]
fn test_invalid_config_fails() {
    let ws = TestWorkspace::new();
    ws.put_asset("a.bin", b"a");
    let config = ws.root().join("bake.toml");
    fs::write(&config, "[cpp]\nvalues_per_line = 0\n").unwrap();

    let output = ws.cli(&["--config", config.to_str().unwrap(), "a.bin"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("values_per_line"));
}
