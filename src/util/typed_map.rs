use std::any::{type_name, Any, TypeId};
use std::fmt;

use ordered_hash_map::OrderedHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedMapError {
    /// Keys must be non-empty.
    EmptyKey,
    /// The value's type differs from the entries already in the map.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for TypedMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedMapError::EmptyKey => write!(f, "keys must not be empty"),
            TypedMapError::TypeMismatch { expected, found } => {
                write!(f, "expected a value of type {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for TypedMapError {}

pub type TypedMapResult<T> = Result<T, TypedMapError>;

#[derive(Debug, Clone, Copy)]
struct ValueType {
    id: TypeId,
    name: &'static str,
}

impl ValueType {
    fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// An insertion-ordered string map whose values all share one type.
///
/// The first insert decides the value type. Later inserts of any other type
/// are rejected until the map is emptied again.
#[derive(Default)]
pub struct TypedMap {
    entries: OrderedHashMap<String, Box<dyn Any>>,
    value_type: Option<ValueType>,
}

impl TypedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, value: T) -> TypedMapResult<Option<T>> {
        let key = key.into();
        if key.is_empty() {
            log::debug!("rejected insert with an empty key");
            return Err(TypedMapError::EmptyKey);
        }

        let incoming = ValueType::of::<T>();
        match self.value_type {
            Some(current) if current.id != incoming.id => {
                log::debug!(
                    "rejected {} value for {key:?}, map holds {}",
                    incoming.name,
                    current.name
                );
                return Err(TypedMapError::TypeMismatch {
                    expected: current.name,
                    found: incoming.name,
                });
            }
            Some(_) => {}
            None => self.value_type = Some(incoming),
        }

        Ok(self
            .entries
            .insert(key, Box::new(value))
            .and_then(|old| old.downcast::<T>().ok())
            .map(|old| *old))
    }

    /// The value under `key`, if there is one and it is a `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.downcast_ref()
    }

    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)?.downcast_mut()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if self.entries.is_empty() {
            self.value_type = None;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries = OrderedHashMap::new();
        self.value_type = None;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the type every value shares, once there is one.
    pub fn value_type_name(&self) -> Option<&'static str> {
        self.value_type.map(|t| t.name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Whether every key sits in `layout` with a matching value type.
    pub fn matches_layout(&self, layout: &[(&str, TypeId)]) -> bool {
        matches_layout(
            self.entries
                .iter()
                .map(|(key, value)| (key.as_str(), &**value as &dyn Any)),
            layout,
        )
    }

    /// Entries in insertion order. Yields nothing unless `T` is the map's
    /// value type.
    pub fn iter<T: Any>(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| Some((key.as_str(), value.downcast_ref::<T>()?)))
    }
}

/// Whether two values have the same concrete type.
pub fn same_type(first: &dyn Any, second: &dyn Any) -> bool {
    (*first).type_id() == (*second).type_id()
}

/// Whether every `(key, value)` of `input` names a key in `layout` whose
/// recorded type the value has. Layout keys missing from `input` are allowed.
pub fn matches_layout<'a, I>(input: I, layout: &[(&str, TypeId)]) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a dyn Any)>,
{
    input.into_iter().all(|(key, value)| {
        layout
            .iter()
            .any(|(name, id)| *name == key && (*value).type_id() == *id)
    })
}

impl fmt::Debug for TypedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedMap")
            .field("value_type", &self.value_type_name())
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
