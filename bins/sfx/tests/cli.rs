use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

/// `sfx` running offline against a private data directory
#[allow(deprecated)]
fn sfx(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sfx").expect("binary");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("SFX_DATA_DIR", home.path().join("data"))
        .env_remove("SFX_CONFIG")
        .env_remove("SFX_OWNER_ID")
        .env_remove("SUPABASE_URL")
        .env_remove("NEXT_PUBLIC_SUPABASE_URL")
        .env_remove("SUPABASE_ANON_KEY")
        .env_remove("NEXT_PUBLIC_SUPABASE_ANON_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn json(home: &TempDir, args: &[&str]) -> Value {
    let output = sfx(home)
        .args(args)
        .arg("--format")
        .arg("json")
        .output()
        .expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn ids(body: &Value) -> Vec<u64> {
    body["sounds"]
        .as_array()
        .expect("sounds array")
        .iter()
        .map(|s| s["id"].as_u64().expect("id"))
        .collect()
}

#[test]
fn search_ranks_builtins() {
    let home = tempdir().unwrap();
    let body = json(&home, &["search", "rain"]);
    assert_eq!(ids(&body), vec![5]);

    let body = json(&home, &["search", "alert", "--scores"]);
    assert_eq!(ids(&body), vec![2, 4]);
    assert!(body["sounds"][0]["score"].as_u64().unwrap() > 0);
}

#[test]
fn empty_search_lists_everything() {
    let home = tempdir().unwrap();
    assert_eq!(ids(&json(&home, &["search"])), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids(&json(&home, &["search", "-c", "Nature"])), vec![5]);
    assert_eq!(ids(&json(&home, &["list", "--category", "UI"])), vec![1, 2, 3, 4]);
}

#[test]
fn exact_search_requires_whole_name() {
    let home = tempdir().unwrap();
    assert_eq!(ids(&json(&home, &["search", "succ"])), vec![3]);
    assert!(ids(&json(&home, &["search", "succ", "--exact"])).is_empty());
    assert_eq!(ids(&json(&home, &["search", "success", "--exact"])), vec![3]);
}

#[test]
fn no_exact_overrides_configured_exact_mode() {
    let home = tempdir().unwrap();
    fs::write(home.path().join("sfx.toml"), "[search]\nexact_match = true\n").unwrap();

    assert!(ids(&json(&home, &["search", "succ"])).is_empty());
    assert_eq!(ids(&json(&home, &["search", "succ", "--no-exact"])), vec![3]);
    assert_eq!(ids(&json(&home, &["search", "success"])), vec![3]);
}

#[test]
fn suggest_returns_prefix_of_ranking() {
    let home = tempdir().unwrap();
    let body = json(&home, &["suggest", "err"]);
    assert_eq!(body["names"], serde_json::json!(["Error"]));

    let body = json(&home, &["suggest", "   "]);
    assert_eq!(body["ids"], serde_json::json!([]));
}

#[test]
fn add_edit_delete_round_trip() {
    let home = tempdir().unwrap();

    let body = json(
        &home,
        &[
            "add",
            "--name",
            "Door Slam",
            "--category",
            "Foley",
            "--file",
            "/sounds/door.mp3",
            "--icon-color",
            "#333",
        ],
    );
    assert_eq!(body["sound"]["id"], 6);
    assert_eq!(body["updated"], false);

    assert_eq!(ids(&json(&home, &["search", "door"])), vec![6]);

    let body = json(&home, &["edit", "6", "--description", "Heavy wooden door"]);
    assert_eq!(body["updated"], true);
    assert_eq!(body["sound"]["description"], "Heavy wooden door");

    json(&home, &["delete", "6"]);
    assert_eq!(ids(&json(&home, &["list"])), vec![1, 2, 3, 4, 5]);
}

#[test]
fn invalid_sound_is_a_validation_error() {
    let home = tempdir().unwrap();
    sfx(&home)
        .args(["add", "--name", " ", "--category", "UI", "--file", "/sounds/x.mp3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name"));
}

#[test]
fn unknown_sound_exits_with_not_found() {
    let home = tempdir().unwrap();
    sfx(&home)
        .args(["show", "99"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Sound effect 99 not found"));
}

#[test]
fn move_changes_display_order() {
    let home = tempdir().unwrap();
    let body = json(&home, &["move", "5", "1"]);
    assert_eq!(body["moved"], true);
    assert_eq!(body["order"], serde_json::json!([5, 1, 2, 3, 4]));

    let body = json(&home, &["move", "5", "5"]);
    assert_eq!(body["moved"], false);

    sfx(&home).args(["move", "5", "42"]).assert().code(6);
}

#[test]
fn favorites_filter_searches() {
    let home = tempdir().unwrap();
    assert_eq!(json(&home, &["favorite", "5"])["favorite"], true);
    json(&home, &["favorite", "2"]);

    assert_eq!(ids(&json(&home, &["favorites"])), vec![2, 5]);
    assert_eq!(ids(&json(&home, &["search", "ui", "--favorites"])), vec![2]);

    assert_eq!(json(&home, &["favorite", "5"])["favorite"], false);
    assert_eq!(ids(&json(&home, &["favorites"])), vec![2]);
}

#[test]
fn category_command_adds_category() {
    let home = tempdir().unwrap();
    let body = json(&home, &["category", "  Foley "]);
    assert_eq!(body["category"], "Foley");
    assert_eq!(body["outcome"]["kind"], "local");

    let body = json(&home, &["categories"]);
    assert_eq!(body["categories"], serde_json::json!(["UI", "Nature", "Foley"]));

    sfx(&home)
        .args(["category", "UI"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn category_can_be_attached_to_a_sound() {
    let home = tempdir().unwrap();
    let body = json(&home, &["category", "Weather", "--attach", "5"]);
    assert_eq!(body["outcome"]["kind"], "attached");
    assert_eq!(ids(&json(&home, &["list", "--category", "Weather"])), vec![5]);
}

#[test]
fn export_and_import() {
    let home = tempdir().unwrap();

    sfx(&home)
        .arg("export")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No custom sound effects to export"));

    let file = home.path().join("import.json");
    fs::write(
        &file,
        r#"[{"id": 20, "name": "Bird Song", "category": "Nature", "file": "/sounds/bird.mp3"}]"#,
    )
    .unwrap();
    let body = json(&home, &["import", file.to_str().unwrap()]);
    assert_eq!(body["imported"], 1);
    assert_eq!(ids(&json(&home, &["search", "bird"])), vec![20]);

    let out = home.path().join("export.json");
    json(&home, &["export", "--output", out.to_str().unwrap()]);
    let exported: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(exported[0]["name"], "Bird Song");
}

#[test]
fn import_rejects_non_array() {
    let home = tempdir().unwrap();
    let file = home.path().join("bad.json");
    fs::write(&file, r#"{"id": 1}"#).unwrap();

    sfx(&home)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid format: expected an array"));
}

#[test]
fn theme_persists() {
    let home = tempdir().unwrap();
    assert_eq!(json(&home, &["theme"])["theme"], "system");
    sfx(&home).args(["theme", "dark"]).assert().success();
    assert_eq!(json(&home, &["theme"])["theme"], "dark");

    sfx(&home).args(["theme", "sepia"]).assert().failure();
}

#[test]
fn whoami_reports_offline_owner() {
    let home = tempdir().unwrap();
    let first = json(&home, &["whoami"]);
    assert!(first["store"].is_null());
    let owner = first["owner_id"].as_str().unwrap().to_string();
    assert_eq!(json(&home, &["whoami"])["owner_id"], owner.as_str());
}

#[test]
fn metrics_reports_search_counters() {
    let home = tempdir().unwrap();
    let body = json(&home, &["metrics", "rain", "-n", "10"]);
    assert_eq!(body["counters"]["search.queries"], 10);
    assert!(body["histograms"]["search.latency_ms"]["count"].as_u64().unwrap() >= 10);
}

#[test]
fn text_output_shows_names() {
    let home = tempdir().unwrap();
    sfx(&home)
        .args(["search", "rain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rain"));
}
