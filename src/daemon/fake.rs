//! in-memory daemon for handler tests

use std::collections::BTreeMap;

use super::{
    Collection, CollectionKind, DaemonError, InfoQuery, MediaDaemon, MediaInfo, PlaybackStatus,
    Result, Value,
};

pub struct FakeDaemon {
    pub status: PlaybackStatus,
    pub playlists: Vec<String>,
    pub active: String,
    pub entries: Vec<u32>,
    pub current_id: u32,
    pub current_pos: Option<u32>,
    pub library: BTreeMap<u32, MediaInfo>,
    pub config: BTreeMap<String, String>,
    /// every mutating call, e.g. `"set_next 3"`
    pub calls: Vec<String>,
    pub queries: Vec<InfoQuery>,
}

impl Default for FakeDaemon {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            playlists: vec!["Default".to_string()],
            active: "Default".to_string(),
            entries: Vec::new(),
            current_id: 0,
            current_pos: None,
            library: BTreeMap::new(),
            config: BTreeMap::new(),
            calls: Vec::new(),
            queries: Vec::new(),
        }
    }
}

impl FakeDaemon {
    pub fn new() -> Self {
        Self::default()
    }

    /// add a medialib entry; empty strings and zero numbers are left out
    pub fn add_track(
        &mut self,
        id: u32,
        artist: &str,
        album: &str,
        title: &str,
        tracknr: i64,
        date: &str,
    ) {
        let mut info = MediaInfo::new();
        info.insert("id".to_string(), Value::from(id));
        for (key, value) in [("artist", artist), ("album", album), ("title", title), ("date", date)] {
            if !value.is_empty() {
                info.insert(key.to_string(), Value::from(value));
            }
        }
        if tracknr > 0 {
            info.insert("tracknr".to_string(), Value::Int(tracknr));
        }
        self.library.insert(id, info);
    }

    fn record(&mut self, call: String) {
        self.calls.push(call);
    }
}

fn field(info: &MediaInfo, name: &str) -> Option<String> {
    info.get(name).and_then(Value::display)
}

fn glob_matches(pattern: &str, value: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let value = value.to_lowercase();
    match pattern.strip_suffix('*') {
        Some(prefix) => value.starts_with(prefix),
        None => value == pattern,
    }
}

fn matches(coll: &Collection, info: &MediaInfo) -> bool {
    let attr = |key: &str| coll.attributes.get(key).map(String::as_str).unwrap_or("");
    let operands_match = coll.operands.iter().all(|op| matches(op, info));

    match coll.kind {
        CollectionKind::Universe => true,
        CollectionKind::Match => {
            operands_match
                && field(info, attr("field"))
                    .map(|v| glob_matches(attr("value"), &v))
                    .unwrap_or(false)
        }
        CollectionKind::Equals => {
            operands_match && field(info, attr("field")).as_deref() == Some(attr("value"))
        }
        CollectionKind::Intersection => operands_match,
        CollectionKind::Union => coll.operands.iter().any(|op| matches(op, info)),
        _ => false,
    }
}

fn compare(a: &MediaInfo, b: &MediaInfo, order: &[String]) -> std::cmp::Ordering {
    for key in order {
        let ordering = match (a.get(key), b.get(key)) {
            (Some(Value::Int(x)), Some(Value::Int(y))) => x.cmp(y),
            (x, y) => x.and_then(Value::display).cmp(&y.and_then(Value::display)),
        };
        if ordering != std::cmp::Ordering::Equal {
            return ordering;
        }
    }
    std::cmp::Ordering::Equal
}

impl MediaDaemon for FakeDaemon {
    fn playback_status(&mut self) -> Result<PlaybackStatus> {
        Ok(self.status)
    }

    fn playback_start(&mut self) -> Result<()> {
        self.record("start".to_string());
        Ok(())
    }

    fn playback_pause(&mut self) -> Result<()> {
        self.record("pause".to_string());
        Ok(())
    }

    fn playback_tickle(&mut self) -> Result<()> {
        self.record("tickle".to_string());
        Ok(())
    }

    fn playback_current_id(&mut self) -> Result<u32> {
        Ok(self.current_id)
    }

    fn playlist_set_next_rel(&mut self, delta: i32) -> Result<()> {
        self.record(format!("set_next_rel {}", delta));
        Ok(())
    }

    fn playlist_set_next(&mut self, position: i32) -> Result<()> {
        self.record(format!("set_next {}", position));
        Ok(())
    }

    fn playlist_list(&mut self) -> Result<Vec<String>> {
        Ok(self.playlists.clone())
    }

    fn playlist_current_active(&mut self) -> Result<String> {
        Ok(self.active.clone())
    }

    fn playlist_current_pos(&mut self) -> Result<Option<u32>> {
        Ok(self.current_pos)
    }

    fn playlist_list_entries(&mut self) -> Result<Vec<u32>> {
        Ok(self.entries.clone())
    }

    fn playlist_insert_id(&mut self, position: i32, id: u32) -> Result<()> {
        self.record(format!("insert {} {}", position, id));
        Ok(())
    }

    fn playlist_remove_entry(&mut self, position: i32) -> Result<()> {
        self.record(format!("remove_entry {}", position));
        Ok(())
    }

    fn playlist_load(&mut self, name: &str) -> Result<()> {
        self.record(format!("load {}", name));
        Ok(())
    }

    fn playlist_create(&mut self, name: &str) -> Result<()> {
        self.record(format!("create {}", name));
        Ok(())
    }

    fn playlist_remove(&mut self, name: &str) -> Result<()> {
        self.record(format!("remove {}", name));
        Ok(())
    }

    fn medialib_get_info(&mut self, id: u32) -> Result<MediaInfo> {
        self.library
            .get(&id)
            .cloned()
            .ok_or_else(|| DaemonError::Server(format!("No such entry, {}", id)))
    }

    fn coll_query_infos(&mut self, query: &InfoQuery) -> Result<Vec<MediaInfo>> {
        self.queries.push(query.clone());

        let mut rows: Vec<MediaInfo> = self
            .library
            .values()
            .filter(|info| matches(&query.collection, info))
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare(a, b, &query.order));

        if !query.group.is_empty() {
            let mut seen = Vec::new();
            rows.retain(|info| {
                let key: Vec<Option<String>> = query.group.iter().map(|g| field(info, g)).collect();
                if seen.contains(&key) {
                    false
                } else {
                    seen.push(key);
                    true
                }
            });
        }

        Ok(rows
            .into_iter()
            .map(|info| {
                info.into_iter()
                    .filter(|(key, _)| query.fetch.iter().any(|f| f == key))
                    .collect()
            })
            .collect())
    }

    fn config_list_values(&mut self) -> Result<BTreeMap<String, String>> {
        Ok(self.config.clone())
    }

    fn config_set_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.record(format!("config {}={}", key, value));
        self.config.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
