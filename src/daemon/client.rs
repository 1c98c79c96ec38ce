//! native XMMS2 client over the IPC connection

use std::collections::BTreeMap;
use std::time::Duration;

use super::error::{DaemonError, Result};
use super::ipc::{Connection, IpcPath};
use super::protocol::{self, object, ACTIVE_PLAYLIST, NS_PLAYLISTS};
use super::value::Value;
use super::{Collection, InfoQuery, MediaDaemon, MediaInfo, PlaybackStatus};

pub struct Xmms2Client {
    conn: Connection,
}

impl Xmms2Client {
    /// connect and introduce ourselves to the daemon
    pub fn connect(path: &IpcPath, client_name: &str, timeout: Option<Duration>) -> Result<Self> {
        let conn = Connection::open(path, timeout)?;
        Self::with_connection(conn, client_name)
    }

    pub fn with_connection(conn: Connection, client_name: &str) -> Result<Self> {
        let mut client = Self { conn };
        client.call(
            object::MAIN,
            protocol::main::HELLO,
            vec![Value::Int(protocol::PROTOCOL_VERSION), Value::from(client_name)],
        )?;
        tracing::debug!("hello accepted for client '{}'", client_name);
        Ok(client)
    }

    fn call(&mut self, object: u32, command: u32, args: Vec<Value>) -> Result<Value> {
        self.conn.call(object, command, args)
    }

    fn call_unit(&mut self, object: u32, command: u32, args: Vec<Value>) -> Result<()> {
        self.call(object, command, args).map(|_| ())
    }
}

fn to_u32(n: i64) -> Result<u32> {
    u32::try_from(n).map_err(|_| DaemonError::protocol(format!("value {} out of range", n)))
}

/// pick one value from a `source -> value` property dict
///
/// "server" wins, then any "plugin/*" source, then the first remaining one
fn pick_source(sources: BTreeMap<String, Value>) -> Option<Value> {
    let mut sources = sources;
    if let Some(value) = sources.remove("server") {
        return Some(value);
    }
    let plugin = sources.keys().find(|k| k.starts_with("plugin/")).cloned();
    if let Some(key) = plugin {
        return sources.remove(&key);
    }
    sources.into_values().next()
}

/// flatten a property dict into `key -> value`; already flat entries pass through
pub(crate) fn flatten_info(raw: BTreeMap<String, Value>) -> MediaInfo {
    raw.into_iter()
        .filter_map(|(key, value)| match value {
            Value::Dict(sources) => pick_source(sources).map(|v| (key, v)),
            other => Some((key, other)),
        })
        .collect()
}

impl MediaDaemon for Xmms2Client {
    fn playback_status(&mut self) -> Result<PlaybackStatus> {
        let code = self
            .call(object::PLAYBACK, protocol::playback::STATUS, vec![])?
            .as_int()?;
        Ok(PlaybackStatus::from_code(code))
    }

    fn playback_start(&mut self) -> Result<()> {
        self.call_unit(object::PLAYBACK, protocol::playback::START, vec![])
    }

    fn playback_pause(&mut self) -> Result<()> {
        self.call_unit(object::PLAYBACK, protocol::playback::PAUSE, vec![])
    }

    fn playback_tickle(&mut self) -> Result<()> {
        self.call_unit(object::PLAYBACK, protocol::playback::DECODER_KILL, vec![])
    }

    fn playback_current_id(&mut self) -> Result<u32> {
        let id = self
            .call(object::PLAYBACK, protocol::playback::CURRENT_ID, vec![])?
            .as_int()?;
        to_u32(id)
    }

    fn playlist_set_next_rel(&mut self, delta: i32) -> Result<()> {
        self.call_unit(
            object::PLAYLIST,
            protocol::playlist::SET_POS_REL,
            vec![Value::from(delta)],
        )
    }

    fn playlist_set_next(&mut self, position: i32) -> Result<()> {
        self.call_unit(
            object::PLAYLIST,
            protocol::playlist::SET_POS,
            vec![Value::from(position)],
        )
    }

    fn playlist_list(&mut self) -> Result<Vec<String>> {
        let names = self
            .call(
                object::COLLECTION,
                protocol::collection::LIST,
                vec![Value::from(NS_PLAYLISTS)],
            )?
            .into_list()?;
        names
            .iter()
            .map(|name| name.as_str().map(str::to_string))
            .collect()
    }

    fn playlist_current_active(&mut self) -> Result<String> {
        let name = self.call(object::PLAYLIST, protocol::playlist::CURRENT_ACTIVE, vec![])?;
        Ok(name.as_str()?.to_string())
    }

    fn playlist_current_pos(&mut self) -> Result<Option<u32>> {
        let reply = self.call(
            object::PLAYLIST,
            protocol::playlist::CURRENT_POS,
            vec![Value::from(ACTIVE_PLAYLIST)],
        );
        let dict = match reply {
            Ok(value) => value.into_dict()?,
            // the daemon answers with an error when no entry is current
            Err(DaemonError::Server(message)) => {
                tracing::debug!("no current position: {}", message);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        match dict.get("position").map(Value::as_int).transpose()? {
            Some(pos) if pos >= 0 => Ok(Some(to_u32(pos)?)),
            _ => Ok(None),
        }
    }

    fn playlist_list_entries(&mut self) -> Result<Vec<u32>> {
        let entries = self
            .call(
                object::PLAYLIST,
                protocol::playlist::LIST,
                vec![Value::from(ACTIVE_PLAYLIST)],
            )?
            .into_list()?;
        entries.iter().map(|id| to_u32(id.as_int()?)).collect()
    }

    fn playlist_insert_id(&mut self, position: i32, id: u32) -> Result<()> {
        self.call_unit(
            object::PLAYLIST,
            protocol::playlist::INSERT_COLL,
            vec![
                Value::from(ACTIVE_PLAYLIST),
                Value::from(position),
                Value::Coll(Collection::idlist(&[id])),
            ],
        )
    }

    fn playlist_remove_entry(&mut self, position: i32) -> Result<()> {
        self.call_unit(
            object::PLAYLIST,
            protocol::playlist::REMOVE_ENTRY,
            vec![Value::from(ACTIVE_PLAYLIST), Value::from(position)],
        )
    }

    fn playlist_load(&mut self, name: &str) -> Result<()> {
        self.call_unit(
            object::PLAYLIST,
            protocol::playlist::LOAD,
            vec![Value::from(name)],
        )
    }

    fn playlist_create(&mut self, name: &str) -> Result<()> {
        self.call_unit(
            object::COLLECTION,
            protocol::collection::SAVE,
            vec![
                Value::Coll(Collection::idlist(&[])),
                Value::from(name),
                Value::from(NS_PLAYLISTS),
            ],
        )
    }

    fn playlist_remove(&mut self, name: &str) -> Result<()> {
        self.call_unit(
            object::COLLECTION,
            protocol::collection::REMOVE,
            vec![Value::from(name), Value::from(NS_PLAYLISTS)],
        )
    }

    fn medialib_get_info(&mut self, id: u32) -> Result<MediaInfo> {
        let raw = self
            .call(object::MEDIALIB, protocol::medialib::INFO, vec![Value::from(id)])?
            .into_dict()?;
        Ok(flatten_info(raw))
    }

    fn coll_query_infos(&mut self, query: &InfoQuery) -> Result<Vec<MediaInfo>> {
        let rows = self
            .call(
                object::COLLECTION,
                protocol::collection::QUERY_INFOS,
                vec![
                    Value::Coll(query.collection.clone()),
                    Value::from(query.order.clone()),
                    Value::Int(0),
                    Value::Int(0),
                    Value::from(query.fetch.clone()),
                    Value::from(query.group.clone()),
                ],
            )?
            .into_list()?;

        rows.into_iter()
            .map(|row| row.into_dict().map(flatten_info))
            .collect()
    }

    fn config_list_values(&mut self) -> Result<BTreeMap<String, String>> {
        let values = self
            .call(object::CONFIG, protocol::config::LIST_VALUES, vec![])?
            .into_dict()?;
        Ok(values
            .into_iter()
            .filter_map(|(key, value)| value.display().map(|v| (key, v)))
            .collect())
    }

    fn config_set_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.call_unit(
            object::CONFIG,
            protocol::config::SET_VALUE,
            vec![Value::from(key), Value::from(value)],
        )
    }
}
