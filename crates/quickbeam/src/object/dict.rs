//! Dictionary payload, key handling, mutation, and guarded iteration

use std::cell::RefCell;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::{Kind, Object, Payload};
use crate::error::{QuickbeamError, Result};

/// A dictionary key: an object restricted by construction to integer or
/// string kind.
///
/// Hash and equality agree with the comparison protocol, which is what makes
/// the indexed map's lookup observably identical to a linear scan comparing
/// keys with [`Object::compare`].
pub(crate) struct DictKey(Object);

impl DictKey {
    pub(crate) fn object(&self) -> &Object {
        &self.0
    }
}

impl Hash for DictKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.kind().hash(state);
        match self.0.payload() {
            Payload::Integer(n) => n.hash(state),
            Payload::String(s) => s.as_bytes().hash(state),
            // Guarded by the key-kind check at every insertion point.
            _ => unreachable!("non-key object stored as dictionary key"),
        }
    }
}

impl PartialEq for DictKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.compare(&other.0) == Ordering::Equal
    }
}

impl Eq for DictKey {}

/// An insertion-ordered association of keys to values.
///
/// Entries keep the order their keys were first inserted. The generation
/// counter moves exactly once per structural insertion (a new key); value
/// replacement of an existing key leaves it alone. Live iterators compare
/// their snapshot against it to refuse walking a structure that changed
/// underneath them.
pub(crate) struct DictValue {
    entries: IndexMap<DictKey, Object>,
    generation: u64,
}

impl DictValue {
    pub(crate) fn new() -> Self {
        DictValue {
            entries: IndexMap::new(),
            generation: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Object, &Object)> {
        self.entries.iter().map(|(k, v)| (k.object(), v))
    }
}

/// A stable reference to a dictionary entry's value slot.
///
/// Returned by [`Object::dict_set`] so the evaluator can assign into the
/// entry again without repeating the key lookup (compound assignment).
/// Slots stay valid for the dictionary's lifetime: entries are never
/// removed, only appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictSlot(usize);

impl Object {
    /// Create a new dictionary holding every entry of `source`.
    ///
    /// The new dictionary is a fresh container, but its keys and values are
    /// the same objects as the source's — shared by handle, not duplicated.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a dictionary.
    pub fn dict_from(source: &Object) -> Object {
        let src = source.expect_dict("dict_from").borrow();
        let entries: IndexMap<DictKey, Object> = src
            .entries
            .iter()
            .map(|(k, v)| (DictKey(k.0.clone()), v.clone()))
            .collect();
        let generation = entries.len() as u64;
        Object::from_payload(Payload::Dict(RefCell::new(DictValue {
            entries,
            generation,
        })))
    }

    /// Add or assign the value for a key.
    ///
    /// Only integers and strings may be keys; anything else is refused with
    /// [`QuickbeamError::InvalidDictKey`] and the dictionary is left
    /// untouched. A new key is linked at the tail, preserving insertion
    /// order, and moves the generation; assigning over an existing key
    /// replaces only the value and does not.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a dictionary.
    pub fn dict_set(&self, key: Object, value: Object) -> Result<DictSlot> {
        let cell = self.expect_dict("dict_set");
        if !matches!(key.kind(), Kind::Integer | Kind::String) {
            return Err(QuickbeamError::InvalidDictKey(key.kind()));
        }

        let mut dict = cell.borrow_mut();
        let (index, inserted) = match dict.entries.entry(DictKey(key)) {
            Entry::Occupied(mut entry) => {
                let index = entry.index();
                entry.insert(value);
                (index, false)
            }
            Entry::Vacant(entry) => {
                let index = entry.index();
                entry.insert(value);
                (index, true)
            }
        };

        if inserted {
            dict.generation += 1;
        }

        Ok(DictSlot(index))
    }

    /// Assign a value directly through a slot returned by
    /// [`Object::dict_set`], skipping the key lookup.
    ///
    /// Value-only assignment: the generation does not move, so live
    /// iterators keep going.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a dictionary, or if the slot did not
    /// come from this dictionary.
    pub fn dict_assign(&self, slot: DictSlot, value: Object) {
        let mut dict = self.expect_dict("dict_assign").borrow_mut();
        match dict.entries.get_index_mut(slot.0) {
            Some((_, entry_value)) => *entry_value = value,
            None => panic!("dict_assign called with a foreign entry slot"),
        }
    }

    /// Look up the value stored under a key.
    ///
    /// Key matching is "comparison equals zero": an integer `5` key and a
    /// string `"5"` key are different entries. A key of a non-key kind
    /// simply misses. The returned handle is the caller's to keep.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a dictionary.
    pub fn dict_get(&self, key: &Object) -> Option<Object> {
        let dict = self.expect_dict("dict_get").borrow();
        if !matches!(key.kind(), Kind::Integer | Kind::String) {
            return None;
        }
        dict.entries.get(&DictKey(key.clone())).cloned()
    }

    /// Merge every entry of `source` into this dictionary, in place.
    ///
    /// Each entry goes through [`Object::dict_set`], so colliding keys are
    /// overwritten in their existing position and new keys append in the
    /// source's order. Merging a dictionary into itself is a no-op apart
    /// from reassigning each value to itself.
    ///
    /// # Panics
    ///
    /// Panics if either object is not a dictionary.
    pub fn dict_merge(&self, source: &Object) -> Result<()> {
        // Snapshot so self-merge doesn't hold the borrow across set calls.
        let pairs: Vec<(Object, Object)> = source
            .expect_dict("dict_merge")
            .borrow()
            .entries
            .iter()
            .map(|(k, v)| (k.0.clone(), v.clone()))
            .collect();

        for (key, value) in pairs {
            self.dict_set(key, value)?;
        }

        Ok(())
    }

    /// Start iterating over this dictionary's keys, in insertion order.
    ///
    /// The iterator snapshots the generation; if a new key is inserted while
    /// it is live, the next step reports
    /// [`QuickbeamError::DictModified`] instead of walking a changed
    /// structure. Value replacement of existing keys does not trip it.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a dictionary.
    pub fn dict_iter(&self) -> DictIter {
        let generation = self.expect_dict("dict_iter").borrow().generation;
        DictIter {
            dict: self.clone(),
            index: 0,
            generation,
        }
    }

    pub(crate) fn expect_dict(&self, operation: &str) -> &RefCell<DictValue> {
        match self.payload() {
            Payload::Dict(d) => d,
            _ => panic!("{} called on {} object", operation, self.type_name()),
        }
    }
}

/// An iterator over a dictionary's keys.
///
/// Yields each entry's key; callers that want the value look it up through
/// [`Object::dict_get`]. The iterator holds its own handle to the
/// dictionary, so the dictionary stays alive for as long as the iterator
/// does.
pub struct DictIter {
    dict: Object,
    index: usize,
    generation: u64,
}

impl DictIter {
    /// Advance the iteration and return the next key, `Ok(None)` at the end
    /// of the dictionary, or [`QuickbeamError::DictModified`] if the
    /// dictionary gained a key since the iterator was created.
    ///
    /// The error halts only this iteration; the dictionary itself is intact
    /// and a fresh iterator will observe the new state.
    pub fn next_key(&mut self) -> Result<Option<Object>> {
        let dict = self.dict.expect_dict("dict_iter").borrow();
        if dict.generation != self.generation {
            return Err(QuickbeamError::DictModified);
        }

        match dict.entries.get_index(self.index) {
            Some((key, _)) => {
                self.index += 1;
                Ok(Some(key.0.clone()))
            }
            None => Ok(None),
        }
    }
}

impl Iterator for DictIter {
    type Item = Result<Object>;

    fn next(&mut self) -> Option<Result<Object>> {
        self.next_key().transpose()
    }
}
