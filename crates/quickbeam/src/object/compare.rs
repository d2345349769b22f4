//! Total ordering across and within object kinds

use std::cmp::Ordering;

use super::{Object, Payload};

impl Object {
    /// Compare two objects under the model's strict total order.
    ///
    /// Differing kinds order by kind tag ([`Kind`](super::Kind) declaration
    /// order). Within a kind: null equals null; integers compare
    /// numerically; strings byte-lexicographically; lists first by slot
    /// count (holes included), then element by element, where a hole orders
    /// before any live value. Dictionaries and functions compare by
    /// identity — stable within a process, otherwise arbitrary.
    ///
    /// Dictionary key matching is defined as this comparison returning
    /// `Equal`.
    pub fn compare(&self, other: &Object) -> Ordering {
        let kind_order = self.kind().cmp(&other.kind());
        if kind_order != Ordering::Equal {
            return kind_order;
        }

        match (self.payload(), other.payload()) {
            (Payload::Null, Payload::Null) => Ordering::Equal,
            (Payload::Integer(a), Payload::Integer(b)) => a.cmp(b),
            (Payload::String(a), Payload::String(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Payload::List(a), Payload::List(b)) => {
                let (a, b) = (a.borrow(), b.borrow());
                let len_order = a.len().cmp(&b.len());
                if len_order != Ordering::Equal {
                    return len_order;
                }
                for (left, right) in a.slots().iter().zip(b.slots().iter()) {
                    let element_order = match (left, right) {
                        (None, None) => Ordering::Equal,
                        (None, Some(_)) => Ordering::Less,
                        (Some(_), None) => Ordering::Greater,
                        (Some(left), Some(right)) => left.compare(right),
                    };
                    if element_order != Ordering::Equal {
                        return element_order;
                    }
                }
                Ordering::Equal
            }
            // Dicts and functions have no meaningful value order.
            _ => self.address().cmp(&other.address()),
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Object {}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
