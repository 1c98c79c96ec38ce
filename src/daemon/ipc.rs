//! transport to the daemon: ipc path resolution, message framing, request/reply

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{DaemonError, Result};
use super::protocol::{self, CMD_ERROR, CMD_REPLY};
use super::value::Value;

const IPC_PATH_ENV_VAR: &str = "XMMS_PATH";
const DEFAULT_TCP_PORT: u16 = 9667;

pub const HEADER_LEN: usize = 16;

/// replies larger than this are treated as corrupt
const MAX_PAYLOAD_LEN: u32 = 64 * 1024 * 1024;

/// where the daemon listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcPath {
    Unix(PathBuf),
    Tcp { host: String, port: u16 },
}

impl IpcPath {
    /// parse `unix:///path` or `tcp://host[:port]`
    pub fn parse(url: &str) -> Result<Self> {
        if let Some(path) = url.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(DaemonError::InvalidPath(url.to_string()));
            }
            return Ok(Self::Unix(PathBuf::from(path)));
        }

        if let Some(rest) = url.strip_prefix("tcp://") {
            let (host, port) = match rest.rsplit_once(':') {
                Some((host, port)) => {
                    let port = port
                        .parse()
                        .map_err(|_| DaemonError::InvalidPath(url.to_string()))?;
                    (host, port)
                }
                None => (rest, DEFAULT_TCP_PORT),
            };
            if host.is_empty() {
                return Err(DaemonError::InvalidPath(url.to_string()));
            }
            return Ok(Self::Tcp {
                host: host.to_string(),
                port,
            });
        }

        Err(DaemonError::InvalidPath(url.to_string()))
    }

    /// `XMMS_PATH` wins over the configured path, which wins over the per-user default
    pub fn resolve(configured: Option<&str>) -> Result<Self> {
        if let Ok(url) = std::env::var(IPC_PATH_ENV_VAR) {
            if !url.is_empty() {
                return Self::parse(&url);
            }
        }
        match configured {
            Some(url) => Self::parse(url),
            None => Ok(Self::default_for_user()),
        }
    }

    pub fn default_for_user() -> Self {
        Self::Unix(PathBuf::from(format!("/tmp/xmms-ipc-{}", current_user_name())))
    }
}

impl std::fmt::Display for IpcPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unix(path) => write!(f, "unix://{}", path.display()),
            Self::Tcp { host, port } => write!(f, "tcp://{}:{}", host, port),
        }
    }
}

fn current_user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("LOGNAME"))
        .ok()
        .filter(|name| !name.is_empty())
        .or_else(|| {
            dirs::home_dir()
                .and_then(|home| home.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// one framed IPC message
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub object: u32,
    pub command: u32,
    pub cookie: u32,
    pub payload: Vec<u8>,
}

impl Message {
    pub fn new(object: u32, command: u32, cookie: u32, payload: Vec<u8>) -> Self {
        Self {
            object,
            command,
            cookie,
            payload,
        }
    }

    /// a method call; arguments travel as a single list value
    pub fn call(object: u32, command: u32, cookie: u32, args: Vec<Value>) -> Self {
        Self::new(object, command, cookie, Value::List(args).to_bytes())
    }

    // the answering side; only the test daemons send replies
    #[allow(dead_code)]
    pub fn reply(cookie: u32, value: &Value) -> Self {
        Self::new(protocol::object::SIGNAL, CMD_REPLY, cookie, value.to_bytes())
    }

    #[allow(dead_code)]
    pub fn error_reply(cookie: u32, message: &str) -> Self {
        Self::new(
            protocol::object::SIGNAL,
            CMD_ERROR,
            cookie,
            Value::Error(message.to_string()).to_bytes(),
        )
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.payload.len());
        buf.extend_from_slice(&self.object.to_be_bytes());
        buf.extend_from_slice(&self.command.to_be_bytes());
        buf.extend_from_slice(&self.cookie.to_be_bytes());
        buf.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.payload);
        buf
    }

    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(&self.encode())?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from(reader: &mut impl Read) -> Result<Self> {
        let mut header = [0u8; HEADER_LEN];
        reader.read_exact(&mut header)?;

        let word = |i: usize| u32::from_be_bytes([header[i], header[i + 1], header[i + 2], header[i + 3]]);
        let (object, command, cookie, length) = (word(0), word(4), word(8), word(12));

        if length > MAX_PAYLOAD_LEN {
            return Err(DaemonError::protocol(format!(
                "payload of {} bytes exceeds limit",
                length
            )));
        }

        let mut payload = vec![0u8; length as usize];
        reader.read_exact(&mut payload)?;
        Ok(Self::new(object, command, cookie, payload))
    }
}

/// byte stream to the daemon
pub trait Stream: Read + Write {}

impl<T: Read + Write> Stream for T {}

/// synchronous request/response channel to the daemon
pub struct Connection {
    stream: Box<dyn Stream>,
    next_cookie: u32,
}

impl Connection {
    pub fn open(path: &IpcPath, timeout: Option<Duration>) -> Result<Self> {
        let connect_error = |source| DaemonError::Connect {
            path: path.to_string(),
            source,
        };

        let stream: Box<dyn Stream> = match path {
            IpcPath::Unix(socket) => {
                let stream = UnixStream::connect(socket).map_err(connect_error)?;
                stream.set_read_timeout(timeout)?;
                stream.set_write_timeout(timeout)?;
                Box::new(stream)
            }
            IpcPath::Tcp { host, port } => {
                let addr = (host.as_str(), *port)
                    .to_socket_addrs()
                    .map_err(connect_error)?
                    .next()
                    .ok_or_else(|| DaemonError::InvalidPath(path.to_string()))?;
                let stream = match timeout {
                    Some(t) => TcpStream::connect_timeout(&addr, t),
                    None => TcpStream::connect(addr),
                }
                .map_err(connect_error)?;
                stream.set_read_timeout(timeout)?;
                stream.set_write_timeout(timeout)?;
                stream.set_nodelay(true)?;
                Box::new(stream)
            }
        };

        tracing::debug!("connected to {}", path);
        Ok(Self::from_stream(stream))
    }

    pub fn from_stream(stream: Box<dyn Stream>) -> Self {
        Self {
            stream,
            next_cookie: 0,
        }
    }

    /// send a method call and wait for its reply
    ///
    /// messages carrying other cookies (signals, broadcasts) are skipped
    pub fn call(&mut self, object: u32, command: u32, args: Vec<Value>) -> Result<Value> {
        let cookie = self.next_cookie;
        self.next_cookie = self.next_cookie.wrapping_add(1);

        tracing::trace!(object, command, cookie, "ipc call");
        Message::call(object, command, cookie, args).write_to(&mut self.stream)?;

        loop {
            let reply = Message::read_from(&mut self.stream)?;
            if reply.cookie != cookie {
                tracing::trace!(cookie = reply.cookie, "skipping unrelated message");
                continue;
            }

            let value = Value::decode(&reply.payload)?;
            return match (reply.command, value) {
                (CMD_ERROR, Value::Error(message)) | (CMD_ERROR, Value::String(message)) => {
                    Err(DaemonError::Server(message))
                }
                (CMD_ERROR, other) => Err(DaemonError::Server(format!(
                    "daemon error reply carrying {}",
                    other.type_name()
                ))),
                (CMD_REPLY, Value::Error(message)) => Err(DaemonError::Server(message)),
                (CMD_REPLY, value) => Ok(value),
                (other, _) => Err(DaemonError::protocol(format!(
                    "unexpected reply command {}",
                    other
                ))),
            };
        }
    }
}
