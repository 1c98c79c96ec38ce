// shared utilities for integration tests
//
// the binary is run against a mock xmms2 daemon listening on a unix socket
// in a temporary directory. the mock answers from a fixed `Library` and
// records every call it receives.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex};
use std::thread;

use tempfile::TempDir;
use xmms2_obmenu::daemon::protocol::{self, object};
use xmms2_obmenu::daemon::ipc::Message;
use xmms2_obmenu::daemon::Value;

/// state the mock daemon answers from
#[derive(Debug, Clone)]
pub struct Library {
    pub status: i64,
    pub playlists: Vec<String>,
    pub active: String,
    pub entries: Vec<u32>,
    pub current_id: u32,
    pub current_pos: Option<u32>,
    /// medialib id -> flat metadata; served as `key -> {"server": value}`
    pub tracks: BTreeMap<u32, BTreeMap<String, Value>>,
    /// rows returned for every collection query
    pub query_rows: Vec<BTreeMap<String, Value>>,
    pub config: BTreeMap<String, String>,
    /// (object, command) pairs answered with an error reply
    pub failing: Vec<(u32, u32)>,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            status: protocol::PLAYBACK_STATUS_STOP,
            playlists: vec!["Default".to_string(), "_active".to_string()],
            active: "Default".to_string(),
            entries: Vec::new(),
            current_id: 0,
            current_pos: None,
            tracks: BTreeMap::new(),
            query_rows: Vec::new(),
            config: BTreeMap::new(),
            failing: Vec::new(),
        }
    }
}

impl Library {
    pub fn add_track(&mut self, id: u32, artist: &str, album: &str, title: &str) {
        let mut info = BTreeMap::new();
        info.insert("id".to_string(), Value::Int(id as i64));
        info.insert("artist".to_string(), Value::from(artist));
        info.insert("album".to_string(), Value::from(album));
        info.insert("title".to_string(), Value::from(title));
        self.tracks.insert(id, info);
    }
}

/// one call received by the mock daemon
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub object: u32,
    pub command: u32,
    pub args: Vec<Value>,
}

pub struct MockDaemon {
    _dir: TempDir,
    socket: PathBuf,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockDaemon {
    pub fn start(library: Library) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let socket = dir.path().join("xmms-ipc-test");
        let listener = UnixListener::bind(&socket).expect("Failed to bind mock socket");
        let calls = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&calls);
        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => serve(stream, &library, &recorded),
                    Err(_) => break,
                }
            }
        });

        Self {
            _dir: dir,
            socket,
            calls,
        }
    }

    pub fn url(&self) -> String {
        format!("unix://{}", self.socket.display())
    }

    /// calls other than the hello handshake
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| !(c.object == object::MAIN && c.command == protocol::main::HELLO))
            .cloned()
            .collect()
    }

    pub fn has_call(&self, object: u32, command: u32) -> bool {
        self.calls()
            .iter()
            .any(|c| c.object == object && c.command == command)
    }
}

fn serve(mut stream: UnixStream, library: &Library, calls: &Mutex<Vec<Call>>) {
    while let Ok(message) = Message::read_from(&mut stream) {
        let args = match Value::decode(&message.payload) {
            Ok(Value::List(args)) => args,
            _ => Vec::new(),
        };
        calls.lock().unwrap().push(Call {
            object: message.object,
            command: message.command,
            args: args.clone(),
        });

        let reply = if library.failing.contains(&(message.object, message.command)) {
            Message::error_reply(message.cookie, "mock failure")
        } else {
            match answer(message.object, message.command, &args, library) {
                Ok(value) => Message::reply(message.cookie, &value),
                Err(text) => Message::error_reply(message.cookie, &text),
            }
        };
        if reply.write_to(&mut stream).is_err() {
            break;
        }
    }
}

fn answer(object: u32, command: u32, args: &[Value], library: &Library) -> Result<Value, String> {
    use xmms2_obmenu::daemon::protocol::{collection, config, medialib, playback, playlist};

    let value = match (object, command) {
        (object::MAIN, protocol::main::HELLO) => Value::Int(1),
        (object::PLAYBACK, playback::STATUS) => Value::Int(library.status),
        (object::PLAYBACK, playback::CURRENT_ID) => Value::Int(library.current_id as i64),
        (object::COLLECTION, collection::LIST) => Value::List(
            library
                .playlists
                .iter()
                .map(|name| Value::from(name.as_str()))
                .collect(),
        ),
        (object::PLAYLIST, playlist::CURRENT_ACTIVE) => Value::from(library.active.as_str()),
        (object::PLAYLIST, playlist::LIST) => Value::List(
            library
                .entries
                .iter()
                .map(|&id| Value::Int(id as i64))
                .collect(),
        ),
        (object::PLAYLIST, playlist::CURRENT_POS) => match library.current_pos {
            Some(pos) => {
                let mut dict = BTreeMap::new();
                dict.insert("position".to_string(), Value::Int(pos as i64));
                dict.insert("name".to_string(), Value::from(library.active.as_str()));
                Value::Dict(dict)
            }
            None => return Err("no current entry".to_string()),
        },
        (object::MEDIALIB, medialib::INFO) => {
            let id = args.first().and_then(|v| v.as_int().ok()).unwrap_or(-1) as u32;
            let info = library
                .tracks
                .get(&id)
                .ok_or_else(|| format!("No such entry, {}", id))?;
            Value::Dict(
                info.iter()
                    .map(|(key, value)| {
                        let mut sources = BTreeMap::new();
                        sources.insert("server".to_string(), value.clone());
                        (key.clone(), Value::Dict(sources))
                    })
                    .collect(),
            )
        }
        (object::COLLECTION, collection::QUERY_INFOS) => Value::List(
            library
                .query_rows
                .iter()
                .map(|row| Value::Dict(row.clone()))
                .collect(),
        ),
        (object::CONFIG, config::LIST_VALUES) => Value::Dict(
            library
                .config
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                .collect(),
        ),
        _ => Value::None,
    };
    Ok(value)
}

/// write a config file and return its path
pub fn write_config(dir: &Path, config: &serde_json::Value) -> PathBuf {
    let path = dir.join("config.json");
    fs::write(&path, serde_json::to_string_pretty(config).unwrap())
        .expect("Failed to write test config");
    path
}

/// minimal config with a fixed program path so menus are predictable
pub fn default_config(dir: &Path) -> PathBuf {
    write_config(
        dir,
        &serde_json::json!({
            "settings": {
                "program": "xmms2-obmenu",
                "timeout_ms": 2000,
                "prompt_command": ["false"]
            }
        }),
    )
}

/// run the binary against a daemon url with the given config
pub fn run_obmenu(args: &[&str], daemon_url: &str, config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xmms2-obmenu"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env("XMMS_PATH", daemon_url)
        .env_remove("XMMS2_OBMENU_LOG")
        .output()
        .expect("Failed to run xmms2-obmenu")
}

/// run against a fresh mock daemon serving `library`
pub fn run_with_library(args: &[&str], library: Library) -> (Output, MockDaemon) {
    let daemon = MockDaemon::start(library);
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = default_config(dir.path());
    let output = run_obmenu(args, &daemon.url(), &config);
    (output, daemon)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
