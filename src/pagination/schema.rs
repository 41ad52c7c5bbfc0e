//! Declared field metadata for pageable entities

use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::cmp::Ordering;
use uuid::Uuid;

/// Storage class of a declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    Boolean,
    Timestamp,
    Uuid,
    /// Structured value (embedded record, JSON document, array)
    Nested,
}

impl FieldKind {
    /// Whether values of this kind have a total, provider-independent order.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::Nested)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Field layout of an entity, in declaration order.
pub trait Schema: 'static {
    /// Entity name. Postgres sources use it as the table name.
    const NAME: &'static str;

    fn fields() -> &'static [Field];
}

/// A value an in-memory source can order by
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Null,
    Integer(i64),
    Float(f64),
    Text(Cow<'a, str>),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
}

impl SortValue<'_> {
    /// Total order used by in-memory sorting. Nulls sort first; values of different
    /// kinds compare equal so the stable sort keeps their relative order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Null, _) => Ordering::Less,
            (_, Self::Null) => Ordering::Greater,
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::Uuid(a), Self::Uuid(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl<'a> From<&'a str> for SortValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<i64> for SortValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SortValue<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for SortValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for SortValue<'_> {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for SortValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Uuid> for SortValue<'_> {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl<'a, T: Into<SortValue<'a>>> From<Option<T>> for SortValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An entity whose field values can be read back by name for in-memory ordering.
pub trait Record: Schema {
    /// Value of a scalar field, or `None` when `field` is unknown or not scalar.
    fn sort_value(&self, field: &str) -> Option<SortValue<'_>>;
}
