//! Projecting stored values onto typed record fields.
//!
//! A record implements [`Bind`] by listing its fields, each with a mutable
//! [`Slot`] of one of four kinds. Kinds must match exactly, except that an
//! Integer may fill a Float slot. A mismatch stops the bind; fields assigned
//! before it keep their new values.

use denv_ir::{Value, ValueKind};

use crate::engine::Env;

/// A record whose fields can be filled from an [`Env`].
pub trait Bind {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One bindable field.
pub struct Field<'a> {
    /// Field name, reported in errors and passed to `bind_with` mappers.
    pub name: &'static str,
    /// Key to look up; `None` leaves the field untouched under `Env::bind`.
    pub key: Option<&'static str>,
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// A field with no key of its own.
    pub fn new(name: &'static str, slot: impl Into<Slot<'a>>) -> Self {
        Field {
            name,
            key: None,
            slot: slot.into(),
        }
    }

    /// A field read from `key`.
    pub fn keyed(name: &'static str, key: &'static str, slot: impl Into<Slot<'a>>) -> Self {
        Field {
            name,
            key: Some(key),
            slot: slot.into(),
        }
    }
}

/// Typed destination of a field.
pub enum Slot<'a> {
    String(&'a mut String),
    Integer(&'a mut i64),
    Float(&'a mut f64),
    Boolean(&'a mut bool),
}

impl Slot<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Slot::String(_) => ValueKind::String,
            Slot::Integer(_) => ValueKind::Integer,
            Slot::Float(_) => ValueKind::Float,
            Slot::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Store `value`, or return its kind when the slot cannot hold it.
    fn assign(self, value: &Value) -> Result<(), ValueKind> {
        match (self, value) {
            (Slot::String(slot), Value::String(v)) => slot.clone_from(v),
            (Slot::Integer(slot), Value::Integer(v)) => *slot = *v,
            (Slot::Float(slot), Value::Float(v)) => *slot = *v,
            #[allow(clippy::cast_precision_loss, reason = "integer widening into a float field")]
            (Slot::Float(slot), Value::Integer(v)) => *slot = *v as f64,
            (Slot::Boolean(slot), Value::Boolean(v)) => *slot = *v,
            (_, other) => return Err(other.kind()),
        }
        Ok(())
    }
}

impl<'a> From<&'a mut String> for Slot<'a> {
    fn from(slot: &'a mut String) -> Self {
        Slot::String(slot)
    }
}

impl<'a> From<&'a mut i64> for Slot<'a> {
    fn from(slot: &'a mut i64) -> Self {
        Slot::Integer(slot)
    }
}

impl<'a> From<&'a mut f64> for Slot<'a> {
    fn from(slot: &'a mut f64) -> Self {
        Slot::Float(slot)
    }
}

impl<'a> From<&'a mut bool> for Slot<'a> {
    fn from(slot: &'a mut bool) -> Self {
        Slot::Boolean(slot)
    }
}

/// Errors from [`Env::bind`] and [`Env::bind_with`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("field `{field}` expects {expected}, but `{key}` holds {found}")]
    KindMismatch {
        field: &'static str,
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

pub(crate) fn bind_fields<T, F>(env: &Env, target: &mut T, mut resolve: F) -> Result<(), BindError>
where
    T: Bind + ?Sized,
    F: FnMut(&Field<'_>) -> Option<String>,
{
    for field in target.fields() {
        let Some(key) = resolve(&field) else {
            continue;
        };
        let Some(value) = env.get(&key) else {
            tracing::trace!(field = field.name, key = %key, "no stored value");
            continue;
        };
        let expected = field.slot.kind();
        let name = field.name;
        field
            .slot
            .assign(value)
            .map_err(|found| BindError::KindMismatch {
                field: name,
                key,
                expected,
                found,
            })?;
    }
    Ok(())
}
