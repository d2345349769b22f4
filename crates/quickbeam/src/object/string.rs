//! String payload and concatenation

use super::{Object, Payload};

/// An owned byte string.
///
/// The length is explicit, so embedded zero bytes are ordinary data. A
/// string never mutates in place; operations that "change" one build a new
/// string object instead.
pub(crate) struct StringValue {
    bytes: Vec<u8>,
}

impl StringValue {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        StringValue { bytes }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Object {
    /// Concatenate two strings into a new string object.
    ///
    /// # Panics
    ///
    /// Panics if either operand is not a string. Passing a wrong-kind
    /// operand here is a defect in the embedding, not an input error.
    pub fn string_concat(&self, other: &Object) -> Object {
        let left = self.expect_string("string_concat");
        let right = other.expect_string("string_concat");
        let mut bytes = Vec::with_capacity(left.bytes.len() + right.bytes.len());
        bytes.extend_from_slice(&left.bytes);
        bytes.extend_from_slice(&right.bytes);
        Object::string(bytes)
    }

    pub(crate) fn expect_string(&self, operation: &str) -> &StringValue {
        match self.payload() {
            Payload::String(s) => s,
            _ => panic!("{} called on {} object", operation, self.type_name()),
        }
    }
}
