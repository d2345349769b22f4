//! Per-kind duplication for assignment-by-value semantics

use super::{Object, Payload};

impl Object {
    /// Duplicate this object.
    ///
    /// Scalars copy their content: a fresh integer, a fresh string buffer
    /// (null copies are the singleton). Containers copy *shallowly*: the new
    /// list or dictionary is a fresh container whose elements are the same
    /// objects as the source's, shared by handle. Mutating a nested
    /// container through the original is therefore visible through the copy.
    /// A function copy shares the argument list and carries the same
    /// borrowed body and script handles, since its code is immutable.
    pub fn copy(&self) -> Object {
        match self.payload() {
            Payload::Null => Object::null(),
            Payload::Integer(n) => Object::integer(*n),
            Payload::String(s) => Object::string(s.as_bytes()),
            Payload::Dict(_) => Object::dict_from(self),
            Payload::List(l) => Object::list_from_slots(l.borrow().slots().to_vec()),
            Payload::Function(f) => Object::function(f.arguments.clone(), f.body, f.script),
        }
    }
}
