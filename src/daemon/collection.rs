//! medialib collection operators used to build queries

use std::collections::BTreeMap;

/// collection operator types, numbered as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CollectionKind {
    Reference = 0,
    Universe = 1,
    Union = 2,
    Intersection = 3,
    Complement = 4,
    Has = 5,
    Equals = 6,
    Match = 7,
    Token = 8,
    NotEqual = 9,
    Smaller = 10,
    SmallerEq = 11,
    Greater = 12,
    GreaterEq = 13,
    Order = 14,
    Limit = 15,
    Mediaset = 16,
    Idlist = 17,
}

impl CollectionKind {
    pub fn from_u32(value: u32) -> Option<Self> {
        use CollectionKind::*;
        let kind = match value {
            0 => Reference,
            1 => Universe,
            2 => Union,
            3 => Intersection,
            4 => Complement,
            5 => Has,
            6 => Equals,
            7 => Match,
            8 => Token,
            9 => NotEqual,
            10 => Smaller,
            11 => SmallerEq,
            12 => Greater,
            13 => GreaterEq,
            14 => Order,
            15 => Limit,
            16 => Mediaset,
            17 => Idlist,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub kind: CollectionKind,
    pub attributes: BTreeMap<String, String>,
    pub idlist: Vec<i64>,
    pub operands: Vec<Collection>,
}

impl Collection {
    pub fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            idlist: Vec::new(),
            operands: Vec::new(),
        }
    }

    pub fn attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn operand(mut self, operand: Collection) -> Self {
        self.operands.push(operand);
        self
    }

    /// every media entry in the library
    pub fn universe() -> Self {
        Self::new(CollectionKind::Universe)
    }

    /// wildcard match (`*` and `?`), case-insensitive on the daemon side
    pub fn matching(field: &str, pattern: &str) -> Self {
        Self::new(CollectionKind::Match)
            .attribute("field", field)
            .attribute("value", pattern)
            .operand(Self::universe())
    }

    pub fn equals(field: &str, value: &str) -> Self {
        Self::new(CollectionKind::Equals)
            .attribute("field", field)
            .attribute("value", value)
            .operand(Self::universe())
    }

    pub fn intersection(operands: Vec<Collection>) -> Self {
        let mut coll = Self::new(CollectionKind::Intersection);
        coll.operands = operands;
        coll
    }

    pub fn idlist(ids: &[u32]) -> Self {
        let mut coll = Self::new(CollectionKind::Idlist);
        coll.idlist = ids.iter().map(|&id| i64::from(id)).collect();
        coll
    }
}
