// integration tests for the imperative flags

use crate::common::*;
use xmms2_obmenu::daemon::protocol::{self, collection, object, playback, playlist};
use xmms2_obmenu::daemon::{Collection, Value};

#[test]
fn test_play() {
    let (output, daemon) = run_with_library(&["--play"], Library::default());
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        daemon.calls(),
        vec![Call {
            object: object::PLAYBACK,
            command: playback::START,
            args: vec![],
        }]
    );
}

#[test]
fn test_pause() {
    let (output, daemon) = run_with_library(&["--pause"], Library::default());
    assert!(output.status.success());
    assert!(daemon.has_call(object::PLAYBACK, playback::PAUSE));
}

#[test]
fn test_next_sets_relative_position_then_tickles() {
    let (output, daemon) = run_with_library(&["--next"], Library::default());
    assert!(output.status.success());

    let calls = daemon.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        (calls[0].object, calls[0].command),
        (object::PLAYLIST, playlist::SET_POS_REL)
    );
    assert_eq!(calls[0].args, vec![Value::Int(1)]);
    assert_eq!(
        (calls[1].object, calls[1].command),
        (object::PLAYBACK, playback::DECODER_KILL)
    );
}

#[test]
fn test_prev() {
    let (output, daemon) = run_with_library(&["--prev"], Library::default());
    assert!(output.status.success());
    assert_eq!(daemon.calls()[0].args, vec![Value::Int(-1)]);
}

#[test]
fn test_playlist_jump() {
    let (output, daemon) =
        run_with_library(&["--listPosition=4", "--playlistJump"], Library::default());
    assert!(output.status.success());

    let calls = daemon.calls();
    assert_eq!(calls[0].command, playlist::SET_POS);
    assert_eq!(calls[0].args, vec![Value::Int(4)]);
    assert!(daemon.has_call(object::PLAYBACK, playback::DECODER_KILL));
}

#[test]
fn test_insert_into_playlist_at_top() {
    let (output, daemon) = run_with_library(&["--id=99", "--insertIntoPlaylist"], Library::default());
    assert!(output.status.success());

    let calls = daemon.calls();
    assert_eq!(
        (calls[0].object, calls[0].command),
        (object::PLAYLIST, playlist::INSERT_COLL)
    );
    assert_eq!(
        calls[0].args,
        vec![
            Value::from(protocol::ACTIVE_PLAYLIST),
            Value::Int(0),
            Value::Coll(Collection::idlist(&[99])),
        ]
    );
}

#[test]
fn test_remove_from_playlist() {
    let (output, daemon) =
        run_with_library(&["--listPosition=2", "--removeFromPlaylist"], Library::default());
    assert!(output.status.success());
    assert!(daemon.has_call(object::PLAYLIST, playlist::REMOVE_ENTRY));
}

#[test]
fn test_load_playlist() {
    let (output, daemon) = run_with_library(&["--name=Jazz", "--loadPlaylist"], Library::default());
    assert!(output.status.success());

    let calls = daemon.calls();
    assert_eq!(calls[0].command, playlist::LOAD);
    assert_eq!(calls[0].args, vec![Value::from("Jazz")]);
}

#[test]
fn test_load_playlist_without_name_is_ignored() {
    let (output, daemon) = run_with_library(&["--loadPlaylist"], Library::default());
    assert!(output.status.success());
    assert!(daemon.calls().is_empty());
}

#[test]
fn test_create_playlist_with_name() {
    let (output, daemon) =
        run_with_library(&["--name", "Road Trip", "--createPlaylist"], Library::default());
    assert!(output.status.success());

    let calls = daemon.calls();
    assert_eq!(
        (calls[0].object, calls[0].command),
        (object::COLLECTION, collection::SAVE)
    );
    assert_eq!(calls[0].args[1], Value::from("Road Trip"));
    assert_eq!(calls[0].args[2], Value::from(protocol::NS_PLAYLISTS));
}

#[test]
fn test_create_playlist_cancelled_prompt() {
    // the test config uses `false` as the prompt command
    let (output, daemon) = run_with_library(&["--createPlaylist"], Library::default());
    assert!(output.status.success());
    assert!(daemon.calls().is_empty());
}

#[test]
fn test_remove_playlist() {
    let (output, daemon) = run_with_library(&["--name=Old", "--removePlaylist"], Library::default());
    assert!(output.status.success());
    assert!(daemon.has_call(object::COLLECTION, collection::REMOVE));
}

#[test]
fn test_daemon_error_goes_to_stderr() {
    let mut library = Library::default();
    library.failing = vec![(object::PLAYLIST, playlist::LOAD)];

    let (output, _daemon) = run_with_library(&["--name=Nope", "--loadPlaylist"], library);
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: mock failure"));
}

#[test]
fn test_missing_parameter() {
    let (output, daemon) = run_with_library(&["--playlistJump"], Library::default());
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--playlistJump requires --listPosition"));
    assert!(daemon.calls().is_empty());
}

#[test]
fn test_two_actions_is_usage_error() {
    let (output, daemon) = run_with_library(&["--play", "--pause"], Library::default());
    assert_eq!(output.status.code(), Some(4));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("cannot be used with"));
    assert!(daemon.calls().is_empty());
}

#[test]
fn test_unknown_flag_is_invalid_args() {
    let (output, _daemon) = run_with_library(&["--shuffle"], Library::default());
    assert_eq!(output.status.code(), Some(4));
}
