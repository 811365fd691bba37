//! Specialized collection types

use slotmap::{Key, KeyData, SlotMap};

pub use slotmap::new_key_type;

/// Slot map that remembers insertion order
///
/// Handles stay stable across removals, and iteration always follows the
/// order in which live values were inserted. Removal is idempotent.
#[derive(Debug, Clone)]
pub struct OrderedSlotMap<K: Key, V> {
    slots: SlotMap<K, V>,
    order: Vec<K>,
}

impl<K: Key, V> OrderedSlotMap<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Insert a value at the end of the iteration order
    pub fn insert(&mut self, value: V) -> K {
        let key = self.slots.insert(value);
        self.order.push(key);
        key
    }

    /// Remove a value. Returns `None` if the key is not live.
    pub fn remove(&mut self, key: K) -> Option<V> {
        let value = self.slots.remove(key)?;
        self.order.retain(|k| *k != key);
        Some(value)
    }

    /// Get a value by key
    pub fn get(&self, key: K) -> Option<&V> {
        self.slots.get(key)
    }

    /// Get a mutable value by key
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.slots.get_mut(key)
    }

    /// Whether `key` refers to a live value
    pub fn contains_key(&self, key: K) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of live values
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Live keys in insertion order
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    /// Iterate `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.order.iter().filter_map(|key| self.slots.get(*key).map(|v| (*key, v)))
    }

    /// Iterate values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Remove every value
    pub fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
    }
}

impl<K: Key, V> Default for OrderedSlotMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning back-reference to whatever owns a value
///
/// Stores only the owner's key data, so it never keeps the owner alive and
/// resolves to nothing once the owner's slot is freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerHandle(KeyData);

impl OwnerHandle {
    /// Wrap an owner's key
    pub fn from_key<K: Key>(key: K) -> Self {
        Self(key.data())
    }

    /// Reinterpret as the owner's key type
    pub fn to_key<K: Key>(self) -> K {
        K::from(self.0)
    }
}
