// integration tests for the man page
//
// the page is rendered in memory from the same clap definition that
// generate-man uses; a page already written to man/ must match it

use clap::CommandFactory;
use clap_mangen::Man;
use std::path::PathBuf;
use xmms2_obmenu::cli::Cli;

fn render() -> String {
    let mut buffer = Vec::new();
    Man::new(Cli::command())
        .render(&mut buffer)
        .expect("Failed to render man page");
    String::from_utf8(buffer).expect("man page is not utf-8")
}

#[test]
fn test_man_page_sections() {
    let page = render();
    for section in [".SH NAME", ".SH SYNOPSIS", ".SH OPTIONS"] {
        assert!(page.contains(section), "man page lacks {}", section);
    }
    assert!(page.contains("xmms2\\-obmenu") || page.contains("xmms2-obmenu"));
}

#[test]
fn test_man_page_documents_action_flags() {
    let page = render();
    for flag in ["alphabetIndexMenu", "playlistJump", "createPlaylist", "loadPreset"] {
        assert!(page.contains(flag), "man page should document --{}", flag);
    }
}

#[test]
fn test_generated_page_is_current() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("man")
        .join("xmms2-obmenu.1");
    let Ok(written) = std::fs::read_to_string(&path) else {
        eprintln!("Skipping: {} not generated", path.display());
        return;
    };
    assert_eq!(
        written,
        render(),
        "man page is stale, run `cargo run --bin generate-man`"
    );
}
