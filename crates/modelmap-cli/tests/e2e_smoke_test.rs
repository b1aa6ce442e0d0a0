use std::{fs, process::Command};

use tempfile::tempdir;

use modelmap_cli::{Args, CliError, run};

fn args_for(models: &[&str]) -> Args {
    Args {
        models: models.iter().map(|s| s.to_string()).collect(),
        out: None,
        depth: None,
        vertical: false,
        config: None,
        log_level: "off".to_string(),
    }
}

/// Whether the Graphviz `dot` binary is available; rendering tests are
/// skipped without it.
fn graphviz_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .output()
        .is_ok_and(|output| output.status.success())
}

#[test]
fn e2e_dot_to_stdout_for_every_demo_namespace() {
    for name in ["tavern", "guild", "tavern::Party", "guild::Guild"] {
        let result = run(&args_for(&[name]));
        assert!(result.is_ok(), "{name} failed: {:?}", result.err());
    }
}

#[test]
fn e2e_depth_and_vertical_flags() {
    let mut args = args_for(&["tavern::Party"]);
    args.depth = Some(2);
    args.vertical = true;

    assert!(run(&args).is_ok());
}

#[test]
fn e2e_unknown_names_are_reported() {
    let err = run(&args_for(&["dungeon::Dragon"])).unwrap_err();

    assert!(matches!(err, CliError::ModelNotFound { .. }));
}

#[test]
fn e2e_output_files_are_written() {
    if cfg!(feature = "graphviz") && !graphviz_available() {
        eprintln!("skipping: graphviz `dot` binary not installed");
        return;
    }

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out_path = temp_dir.path().join("party.svg");

    let mut args = args_for(&["tavern::Party"]);
    args.out = Some(out_path.to_string_lossy().to_string());
    args.depth = Some(2);

    run(&args).expect("rendering the demo namespace should succeed");

    let dot_path = format!("{}.dot", out_path.to_string_lossy());
    let dot = fs::read_to_string(&dot_path).expect("DOT file should be written");
    assert!(dot.contains("digraph"));
    assert!(dot.contains("tavern::Party"));
    assert!(dot.contains("tavern::QuestGiver"));

    if cfg!(feature = "graphviz") {
        let svg = fs::read_to_string(&out_path).expect("SVG file should be rendered");
        assert!(svg.contains("<svg"));
    }
}
