//! Deterministic ordering for paged queries
//!
//! Skip/take over an unordered source can return overlapping or missing rows
//! between calls. Every paged query gets an explicit sort: the caller's, or an
//! ascending sort on the entity's first declared scalar field.

use parking_lot::{const_rwlock, RwLock};
use std::any::TypeId;
use std::collections::BTreeMap;

use super::error::{PaginationError, PaginationResult};
use super::query::{Queryable, SortOrder};
use super::schema::Schema;

/// Resolved default sort field per entity type. `None` caches "no scalar field".
static DEFAULT_SORT_FIELDS: RwLock<BTreeMap<TypeId, Option<&'static str>>> =
    const_rwlock(BTreeMap::new());

/// First declared scalar field of `T`, resolved once per type.
pub fn default_sort_field<T: Schema>() -> PaginationResult<&'static str> {
    let key = TypeId::of::<T>();

    let cached = DEFAULT_SORT_FIELDS.read().get(&key).copied();
    let resolved = match cached {
        Some(resolved) => resolved,
        None => {
            let resolved = first_scalar_field::<T>();
            DEFAULT_SORT_FIELDS.write().insert(key, resolved);
            tracing::debug!(
                entity = T::NAME,
                field = resolved.unwrap_or("<none>"),
                "Resolved default sort field"
            );
            resolved
        }
    };

    resolved.ok_or(PaginationError::NoSortableField { entity: T::NAME })
}

fn first_scalar_field<T: Schema>() -> Option<&'static str> {
    T::fields()
        .iter()
        .find(|field| field.kind.is_scalar())
        .map(|field| field.name)
}

/// Return `query` with a deterministic order. An existing explicit order is kept
/// as-is; a second one is never added.
pub fn ensure_ordered<Q>(query: Q) -> PaginationResult<Q>
where
    Q: Queryable,
    Q::Item: Schema,
{
    if query.has_explicit_order() {
        return Ok(query);
    }

    let field = default_sort_field::<Q::Item>()?;
    tracing::debug!(
        entity = <Q::Item as Schema>::NAME,
        field,
        "Applying default sort to unordered query"
    );

    Ok(query.order_by(SortOrder::asc(field)))
}
