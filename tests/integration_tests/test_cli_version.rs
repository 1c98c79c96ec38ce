// integration tests for --version and --help

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_xmms2-obmenu"))
        .args(args)
        .output()
        .expect("Failed to run xmms2-obmenu")
}

#[test]
fn test_version_flag() {
    let output = run(&["--version"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("xmms2-obmenu"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_action_flags() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in [
        "--alphabetIndexMenu",
        "--indexTracks",
        "--playlistJump",
        "--insertIntoPlaylist",
        "--createPlaylist",
        "--listPosition",
    ] {
        assert!(stdout.contains(flag), "help should mention {}", flag);
    }
}
