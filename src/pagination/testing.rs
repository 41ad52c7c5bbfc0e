//! Entity fixtures shared by the pagination tests

use super::schema::{Field, FieldKind, Record, Schema, SortValue};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl Schema for Person {
    const NAME: &'static str = "people";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[
            Field::new("name", FieldKind::Text),
            Field::new("age", FieldKind::Integer),
        ];
        FIELDS
    }
}

impl Record for Person {
    fn sort_value(&self, field: &str) -> Option<SortValue<'_>> {
        match field {
            "name" => Some(self.name.as_str().into()),
            "age" => Some(self.age.into()),
            _ => None,
        }
    }
}

/// Leading nested field followed by a scalar
#[derive(Debug, Clone)]
pub struct Tagged {
    pub tags: Vec<String>,
    pub label: String,
}

impl Schema for Tagged {
    const NAME: &'static str = "tagged";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[
            Field::new("tags", FieldKind::Nested),
            Field::new("label", FieldKind::Text),
        ];
        FIELDS
    }
}

impl Record for Tagged {
    fn sort_value(&self, field: &str) -> Option<SortValue<'_>> {
        match field {
            "label" => Some(self.label.as_str().into()),
            _ => None,
        }
    }
}

/// No scalar fields at all
#[derive(Debug, Clone)]
pub struct Blob {
    pub payload: serde_json::Value,
}

impl Schema for Blob {
    const NAME: &'static str = "blobs";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[Field::new("payload", FieldKind::Nested)];
        FIELDS
    }
}

impl Record for Blob {
    fn sort_value(&self, _field: &str) -> Option<SortValue<'_>> {
        None
    }
}

/// `count` people named `p001`, `p002`, ... with ages counting up from 1
pub fn numbered_people(count: usize) -> Vec<Person> {
    (1..=count)
        .map(|i| Person::new(&format!("p{i:03}"), i as i32))
        .collect()
}
