use std::path::Path;
use std::process::{Command, Output};

fn run(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blocksettings"))
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("BLOCKSETTINGS_STORE")
        .output()
        .expect("failed to run blocksettings")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn strings_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("settings.json");

    assert!(run(&store, &["set-strings", "names", "a", "bc"]).status.success());
    let out = run(&store, &["get-strings", "names"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "a\nbc\n");

    let raw = run(&store, &["raw", "names"]);
    assert_eq!(stdout(&raw), "{\"array\":[97,-1,98,99]}\n");
}

#[test]
fn images_and_listing() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("settings.json");

    assert!(run(&store, &["set-images", "frames", "5", "1 2"]).status.success());
    let raw = run(&store, &["raw", "frames"]);
    assert_eq!(stdout(&raw), "{\"array\":[1,1,5,-1,2,1,1,2]}\n");
    assert_eq!(stdout(&run(&store, &["get-images", "frames"])), "5\n\n1 2\n");

    assert!(run(&store, &["set-bool", "muted", "true"]).status.success());
    assert_eq!(stdout(&run(&store, &["list"])), "frames\nmuted\n");
}

#[test]
fn absent_setting_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("settings.json");

    let out = run(&store, &["get-image", "missing"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert_eq!(stdout(&run(&store, &["get-bool", "missing"])), "false\n");
}

#[test]
fn short_image_record_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("settings.json");
    std::fs::write(
        &store,
        r#"{"version": 1, "settings": {"logo": {"array": [7]}}}"#,
    )
    .unwrap();

    let out = run(&store, &["get-image", "logo"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid image format"));
}

#[test]
fn clear_empties_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("settings.json");

    assert!(run(&store, &["set-number", "level", "-3"]).status.success());
    assert!(run(&store, &["set-bools", "flags", "true", "false"]).status.success());
    assert_eq!(stdout(&run(&store, &["get-number", "level"])), "-3\n");
    assert!(run(&store, &["clear"]).status.success());
    assert!(stdout(&run(&store, &["list"])).is_empty());
    assert_eq!(run(&store, &["get-bools", "flags"]).status.code(), Some(1));
}
