//! List payload, mutation, and iteration

use std::cell::RefCell;

use super::{Object, Payload};

/// A resizable sequence of value slots.
///
/// A slot is either a live handle or a hole (`None`): the absence of a value
/// at that index, distinct from a slot holding null. Holes appear when a
/// list is constructed without initial values or when a set beyond the
/// current length gap-fills the slots in between. The list's length is the
/// slot count, holes included.
pub(crate) struct ListValue {
    slots: Vec<Option<Object>>,
}

impl ListValue {
    pub(crate) fn new(slots: Vec<Option<Object>>) -> Self {
        ListValue { slots }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slots(&self) -> &[Option<Object>] {
        &self.slots
    }
}

impl Object {
    /// Look up the value at a list index.
    ///
    /// Returns a handle the caller owns, or `None` when the index is out of
    /// range or the slot is a hole — "no value here" is distinct from "the
    /// value here is null".
    ///
    /// # Panics
    ///
    /// Panics if this object is not a list.
    pub fn list_get(&self, index: usize) -> Option<Object> {
        let list = self.expect_list("list_get").borrow();
        list.slots.get(index).and_then(Clone::clone)
    }

    /// Set a list index to the given value.
    ///
    /// Setting at or beyond the current length grows the list to
    /// `index + 1` slots, filling the gap with holes. Whatever previously
    /// occupied the slot is released by the overwrite.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a list.
    pub fn list_set(&self, index: usize, value: Object) {
        let mut list = self.expect_list("list_set").borrow_mut();
        if index >= list.slots.len() {
            list.slots.resize(index + 1, None);
        }
        list.slots[index] = Some(value);
    }

    /// Append every slot of `other` to this list, in place.
    ///
    /// Holes in the source are carried over as holes. Extending a list with
    /// itself appends a snapshot of its own slots.
    ///
    /// # Panics
    ///
    /// Panics if either object is not a list.
    pub fn list_extend(&self, other: &Object) {
        // Snapshot first so self-extension doesn't walk its own tail.
        let extra = other.expect_list("list_extend").borrow().slots.clone();
        self.expect_list("list_extend")
            .borrow_mut()
            .slots
            .extend(extra);
    }

    /// Start iterating over this list's live elements.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a list.
    pub fn list_iter(&self) -> ListIter {
        self.expect_list("list_iter");
        ListIter {
            list: self.clone(),
            index: 0,
        }
    }

    pub(crate) fn expect_list(&self, operation: &str) -> &RefCell<ListValue> {
        match self.payload() {
            Payload::List(l) => l,
            _ => panic!("{} called on {} object", operation, self.type_name()),
        }
    }
}

/// An iterator over a list's live elements.
///
/// The iterator is a bare index cursor: each step re-checks the list's
/// current length and skips holes, then yields a handle the caller owns.
/// Unlike [`DictIter`](super::DictIter), there is no modification guard:
/// growing or shrinking the list mid-iteration is tolerated but leaves
/// unspecified which elements are visited. Mutate lists outside active
/// iteration.
pub struct ListIter {
    list: Object,
    index: usize,
}

impl ListIter {
    /// Restart the iteration from the first slot.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Iterator for ListIter {
    type Item = Object;

    fn next(&mut self) -> Option<Object> {
        let list = self.list.expect_list("list_iter").borrow();
        while self.index < list.slots.len() {
            let slot = list.slots[self.index].clone();
            self.index += 1;
            if slot.is_some() {
                return slot;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_range() {
        let list = Object::list(vec![Object::integer(1)]);
        assert!(list.list_get(1).is_none());
    }

    #[test]
    fn test_holes_are_absent_not_null() {
        let list = Object::list_with_holes(3);
        assert_eq!(list.len(), 3);
        assert!(list.list_get(1).is_none());
    }

    #[test]
    fn test_set_grows_with_holes() {
        let list = Object::list_with_holes(3);
        list.list_set(5, Object::integer(7));
        assert_eq!(list.len(), 6);
        assert!(list.list_get(3).is_none());
        assert!(list.list_get(4).is_none());
        assert_eq!(list.list_get(5).and_then(|v| v.as_i64()), Some(7));
    }

    #[test]
    fn test_set_releases_old_value() {
        let old = Object::integer(1);
        let list = Object::list(vec![old.clone()]);
        assert_eq!(old.ref_count(), 2);
        list.list_set(0, Object::integer(2));
        assert_eq!(old.ref_count(), 1);
    }

    #[test]
    fn test_extend() {
        let left = Object::list(vec![Object::integer(1)]);
        let right = Object::list_from_slots(vec![None, Some(Object::integer(2))]);
        left.list_extend(&right);
        assert_eq!(left.len(), 3);
        assert!(left.list_get(1).is_none());
        assert_eq!(left.list_get(2).and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_extend_with_self() {
        let list = Object::list(vec![Object::integer(1), Object::integer(2)]);
        list.list_extend(&list);
        assert_eq!(list.len(), 4);
        assert_eq!(list.list_get(2).and_then(|v| v.as_i64()), Some(1));
        assert_eq!(list.list_get(3).and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_iteration_skips_holes() {
        let list = Object::list_from_slots(vec![
            Some(Object::integer(1)),
            None,
            Some(Object::integer(3)),
        ]);
        let seen: Vec<i64> = list.list_iter().filter_map(|v| v.as_i64()).collect();
        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn test_iterator_reset() {
        let list = Object::list(vec![Object::integer(5)]);
        let mut iter = list.list_iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        iter.reset();
        assert_eq!(iter.next().and_then(|v| v.as_i64()), Some(5));
    }

    #[test]
    #[should_panic(expected = "list_get called on dict object")]
    fn test_wrong_kind_panics() {
        Object::dict().list_get(0);
    }
}
