use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pagination::{Field, FieldKind, Record, Schema, SortValue};

/// Member entity, one row of the `members` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
    pub profile: serde_json::Value,
    pub joined_at: DateTime<Utc>,
}

impl Schema for Member {
    const NAME: &'static str = "members";

    fn fields() -> &'static [Field] {
        const FIELDS: &[Field] = &[
            Field::new("id", FieldKind::Uuid),
            Field::new("name", FieldKind::Text),
            Field::new("age", FieldKind::Integer),
            Field::new("email", FieldKind::Text),
            Field::new("profile", FieldKind::Nested),
            Field::new("joined_at", FieldKind::Timestamp),
        ];
        FIELDS
    }
}

impl Record for Member {
    fn sort_value(&self, field: &str) -> Option<SortValue<'_>> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "age" => Some(self.age.into()),
            "email" => Some(self.email.as_deref().into()),
            "joined_at" => Some(self.joined_at.into()),
            _ => None,
        }
    }
}

/// Scalar field usable as an explicit `sort_by`
pub fn is_sortable_field(name: &str) -> bool {
    Member::fields()
        .iter()
        .any(|f| f.name == name && f.kind.is_scalar())
}

/// Response DTO for member
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
    pub profile: serde_json::Value,
    pub joined_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        Self {
            id: m.id,
            name: m.name,
            age: m.age,
            email: m.email,
            profile: m.profile,
            joined_at: m.joined_at,
        }
    }
}
