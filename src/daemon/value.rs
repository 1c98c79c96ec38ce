//! xmmsv value model and its big-endian wire encoding
//!
//! every value is a `u32` type tag followed by a type-specific body:
//! - strings: `u32` length including the trailing NUL, bytes, NUL
//! - lists: `u32` restrict type, `u32` count, tagged values
//! - dicts: `u32` count, then (string body key, tagged value) pairs
//! - collections: `u32` kind, dict body, idlist list body, operand list body

use std::collections::BTreeMap;

use super::collection::{Collection, CollectionKind};
use super::error::{DaemonError, Result};

pub const TYPE_NONE: u32 = 0;
pub const TYPE_ERROR: u32 = 1;
pub const TYPE_INT64: u32 = 2;
pub const TYPE_STRING: u32 = 3;
pub const TYPE_COLL: u32 = 4;
pub const TYPE_BIN: u32 = 5;
pub const TYPE_LIST: u32 = 6;
pub const TYPE_DICT: u32 = 7;
pub const TYPE_FLOAT: u32 = 9;

/// collections nested deeper than this are rejected
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Error(String),
    Int(i64),
    String(String),
    Coll(Collection),
    Bin(Vec<u8>),
    List(Vec<Value>),
    Dict(BTreeMap<String, Value>),
    Float(f32),
}

impl Value {
    pub fn type_id(&self) -> u32 {
        match self {
            Value::None => TYPE_NONE,
            Value::Error(_) => TYPE_ERROR,
            Value::Int(_) => TYPE_INT64,
            Value::String(_) => TYPE_STRING,
            Value::Coll(_) => TYPE_COLL,
            Value::Bin(_) => TYPE_BIN,
            Value::List(_) => TYPE_LIST,
            Value::Dict(_) => TYPE_DICT,
            Value::Float(_) => TYPE_FLOAT,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Error(_) => "error",
            Value::Int(_) => "int",
            Value::String(_) => "string",
            Value::Coll(_) => "collection",
            Value::Bin(_) => "binary",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Float(_) => "float",
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.unexpected("int")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.unexpected("string")),
        }
    }

    pub fn into_list(self) -> Result<Vec<Value>> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.unexpected("list")),
        }
    }

    pub fn into_dict(self) -> Result<BTreeMap<String, Value>> {
        match self {
            Value::Dict(map) => Ok(map),
            other => Err(other.unexpected("dict")),
        }
    }

    /// human readable form used for menu labels
    pub fn display(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }

    fn unexpected(&self, expected: &'static str) -> DaemonError {
        DaemonError::UnexpectedType {
            expected,
            found: self.type_name(),
        }
    }

    /// encode with the leading type tag
    pub fn encode(&self, buf: &mut Vec<u8>) {
        put_u32(buf, self.type_id());
        self.encode_body(buf);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }

    fn encode_body(&self, buf: &mut Vec<u8>) {
        match self {
            Value::None => {}
            Value::Error(s) | Value::String(s) => put_string(buf, s),
            Value::Int(n) => buf.extend_from_slice(&n.to_be_bytes()),
            Value::Coll(coll) => put_collection(buf, coll),
            Value::Bin(data) => {
                put_u32(buf, data.len() as u32);
                buf.extend_from_slice(data);
            }
            Value::List(items) => put_list(buf, TYPE_NONE, items),
            Value::Dict(map) => put_dict(buf, map),
            Value::Float(f) => {
                let (mantissa, exponent) = float_to_parts(*f);
                buf.extend_from_slice(&mantissa.to_be_bytes());
                buf.extend_from_slice(&exponent.to_be_bytes());
            }
        }
    }

    /// decode one tagged value that spans the whole buffer
    pub fn decode(bytes: &[u8]) -> Result<Value> {
        let mut reader = Reader::new(bytes);
        let value = reader.read_value(0)?;
        if reader.remaining() != 0 {
            return Err(DaemonError::protocol(format!(
                "{} trailing bytes after value",
                reader.remaining()
            )));
        }
        Ok(value)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<Collection> for Value {
    fn from(coll: Collection) -> Self {
        Value::Coll(coll)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items.into_iter().map(Value::String).collect())
    }
}

fn put_u32(buf: &mut Vec<u8>, n: u32) {
    buf.extend_from_slice(&n.to_be_bytes());
}

fn put_string(buf: &mut Vec<u8>, s: &str) {
    put_u32(buf, s.len() as u32 + 1);
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
}

fn put_list(buf: &mut Vec<u8>, restrict: u32, items: &[Value]) {
    put_u32(buf, restrict);
    put_u32(buf, items.len() as u32);
    for item in items {
        item.encode(buf);
    }
}

fn put_dict(buf: &mut Vec<u8>, map: &BTreeMap<String, Value>) {
    put_u32(buf, map.len() as u32);
    for (key, value) in map {
        put_string(buf, key);
        value.encode(buf);
    }
}

fn put_attributes(buf: &mut Vec<u8>, attributes: &BTreeMap<String, String>) {
    put_u32(buf, attributes.len() as u32);
    for (key, value) in attributes {
        put_string(buf, key);
        put_u32(buf, TYPE_STRING);
        put_string(buf, value);
    }
}

fn put_collection(buf: &mut Vec<u8>, coll: &Collection) {
    put_u32(buf, coll.kind as u32);
    put_attributes(buf, &coll.attributes);

    let ids: Vec<Value> = coll.idlist.iter().map(|&id| Value::Int(id)).collect();
    put_list(buf, TYPE_INT64, &ids);

    put_u32(buf, TYPE_COLL);
    put_u32(buf, coll.operands.len() as u32);
    for operand in &coll.operands {
        put_u32(buf, TYPE_COLL);
        put_collection(buf, operand);
    }
}

fn float_to_parts(f: f32) -> (i32, i32) {
    if f == 0.0 || !f.is_finite() {
        return (0, 0);
    }
    let value = f64::from(f);
    let exponent = value.abs().log2().floor() as i32 + 1;
    let fraction = value / 2f64.powi(exponent);
    ((fraction * f64::from(i32::MAX)) as i32, exponent)
}

fn float_from_parts(mantissa: i32, exponent: i32) -> f32 {
    let fraction = f64::from(mantissa) / f64::from(i32::MAX);
    (fraction * 2f64.powi(exponent)) as f32
}

/// cursor over a received payload
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(DaemonError::protocol(format!(
                "truncated value: needed {} bytes, {} left",
                len,
                self.remaining()
            )));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    /// element count, bounded by what the buffer could possibly hold
    fn read_count(&mut self, min_element_size: usize) -> Result<usize> {
        let count = self.read_u32()? as usize;
        if count.saturating_mul(min_element_size) > self.remaining() {
            return Err(DaemonError::protocol(format!(
                "element count {} exceeds payload",
                count
            )));
        }
        Ok(count)
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        // trailing NUL is part of the length
        let bytes = match bytes.split_last() {
            Some((0, rest)) => rest,
            _ => bytes,
        };
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn read_value(&mut self, depth: usize) -> Result<Value> {
        let type_id = self.read_u32()?;
        self.read_body(type_id, depth)
    }

    fn read_body(&mut self, type_id: u32, depth: usize) -> Result<Value> {
        if depth > MAX_DEPTH {
            return Err(DaemonError::protocol("value nested too deeply"));
        }
        let value = match type_id {
            TYPE_NONE => Value::None,
            TYPE_ERROR => Value::Error(self.read_string()?),
            TYPE_INT64 => Value::Int(self.read_i64()?),
            TYPE_STRING => Value::String(self.read_string()?),
            TYPE_COLL => Value::Coll(self.read_collection(depth + 1)?),
            TYPE_BIN => {
                let len = self.read_u32()? as usize;
                Value::Bin(self.take(len)?.to_vec())
            }
            TYPE_LIST => Value::List(self.read_list(depth + 1)?),
            TYPE_DICT => Value::Dict(self.read_dict(depth + 1)?),
            TYPE_FLOAT => {
                let mantissa = self.read_i32()?;
                let exponent = self.read_i32()?;
                Value::Float(float_from_parts(mantissa, exponent))
            }
            other => {
                return Err(DaemonError::protocol(format!("unknown value type {}", other)));
            }
        };
        Ok(value)
    }

    fn read_list(&mut self, depth: usize) -> Result<Vec<Value>> {
        let _restrict = self.read_u32()?;
        let count = self.read_count(4)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(self.read_value(depth)?);
        }
        Ok(items)
    }

    fn read_dict(&mut self, depth: usize) -> Result<BTreeMap<String, Value>> {
        let count = self.read_count(8)?;
        let mut map = BTreeMap::new();
        for _ in 0..count {
            let key = self.read_string()?;
            let value = self.read_value(depth)?;
            map.insert(key, value);
        }
        Ok(map)
    }

    fn read_collection(&mut self, depth: usize) -> Result<Collection> {
        let raw_kind = self.read_u32()?;
        let kind = CollectionKind::from_u32(raw_kind)
            .ok_or_else(|| DaemonError::protocol(format!("unknown collection type {}", raw_kind)))?;

        let mut coll = Collection::new(kind);
        for (key, value) in self.read_dict(depth)? {
            if let Value::String(s) = value {
                coll.attributes.insert(key, s);
            }
        }
        for id in self.read_list(depth)? {
            coll.idlist.push(id.as_int()?);
        }
        for operand in self.read_list(depth)? {
            match operand {
                Value::Coll(op) => coll.operands.push(op),
                other => return Err(other.unexpected("collection")),
            }
        }
        Ok(coll)
    }
}
