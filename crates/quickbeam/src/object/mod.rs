//! Object representation for runtime values

mod compare;
mod copy;
mod dict;
mod display;
mod function;
mod list;
mod string;

pub use dict::{DictIter, DictSlot};
pub use function::{NodeHandle, ScriptHandle};
pub use list::ListIter;

use std::cell::RefCell;
use std::rc::Rc;

use dict::DictValue;
use function::FunctionValue;
use list::ListValue;
use string::StringValue;

/// The kind of an object: the discriminant tag identifying its variant.
///
/// The declaration order is the cross-kind comparison order used by
/// [`Object::compare`]. It is an implementation convention, not a semantic
/// statement about the kinds themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// The null value
    Null,
    /// A signed 64-bit integer
    Integer,
    /// An owned byte string
    String,
    /// An insertion-ordered key/value dictionary
    Dict,
    /// An index-addressable sequence of value slots
    List,
    /// A function: argument list plus borrowed body and script handles
    Function,
}

impl Kind {
    /// The kind's name as it appears in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Integer => "integer",
            Kind::String => "string",
            Kind::Dict => "dict",
            Kind::List => "list",
            Kind::Function => "function",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind payload. Variants are declared in [`Kind`] order.
///
/// List and Dict payloads sit behind `RefCell` because they mutate in place
/// through shared handles; the other kinds are immutable once constructed.
pub(crate) enum Payload {
    Null,
    Integer(i64),
    String(StringValue),
    Dict(RefCell<DictValue>),
    List(RefCell<ListValue>),
    Function(FunctionValue),
}

thread_local! {
    // The one and only null object for this thread. The canonical handle
    // lives here, so the null payload can never be torn down while the
    // thread is running.
    static NULL_OBJECT: Object = Object {
        inner: Rc::new(Payload::Null),
    };
}

/// A shared handle to a runtime value.
///
/// `Object` is the universal unit of data in Quickbeam: everything the
/// evaluator touches is one of these. The handle is a reference-counted
/// pointer, so cloning it is cheap and adds an owner; dropping it releases
/// one. A value's payload is torn down exactly when its last handle goes
/// away — there is no separate add/release protocol to keep balanced.
///
/// Containers own handles to their elements: storing a value into a list or
/// dictionary stores a clone of its handle, and overwriting or dropping the
/// container releases it. Lookups hand back cloned handles the caller owns
/// outright.
#[derive(Clone)]
pub struct Object {
    inner: Rc<Payload>,
}

impl Object {
    // ═══════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════

    /// The null object.
    ///
    /// There is exactly one null value per thread; every call returns a
    /// handle to the same object, observable via [`Object::ptr_eq`].
    pub fn null() -> Self {
        NULL_OBJECT.with(Object::clone)
    }

    /// Create an integer object.
    pub fn integer(value: i64) -> Self {
        Object::from_payload(Payload::Integer(value))
    }

    /// Create a string object from a byte buffer.
    ///
    /// The buffer is copied into the object. Embedded zero bytes are
    /// permitted; the string's length is tracked explicitly.
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Object::from_payload(Payload::String(StringValue::new(bytes.into())))
    }

    /// Create a list holding the given values, in order, with no holes.
    pub fn list(values: impl IntoIterator<Item = Object>) -> Self {
        Object::list_from_slots(values.into_iter().map(Some).collect())
    }

    /// Create a list of `len` empty holes.
    ///
    /// A hole is the absence of a value at an index, distinct from a slot
    /// holding null. Holes are skipped by iteration and report as absent
    /// from [`Object::list_get`].
    pub fn list_with_holes(len: usize) -> Self {
        Object::list_from_slots(vec![None; len])
    }

    /// Create a list from explicit slots, where `None` is a hole.
    pub fn list_from_slots(slots: Vec<Option<Object>>) -> Self {
        Object::from_payload(Payload::List(RefCell::new(ListValue::new(slots))))
    }

    /// Create an empty dictionary.
    pub fn dict() -> Self {
        Object::from_payload(Payload::Dict(RefCell::new(DictValue::new())))
    }

    pub(crate) fn from_payload(payload: Payload) -> Self {
        Object {
            inner: Rc::new(payload),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Kind and identity
    // ═══════════════════════════════════════════════════════════════════

    /// The object's kind tag.
    pub fn kind(&self) -> Kind {
        match self.payload() {
            Payload::Null => Kind::Null,
            Payload::Integer(_) => Kind::Integer,
            Payload::String(_) => Kind::String,
            Payload::Dict(_) => Kind::Dict,
            Payload::List(_) => Kind::List,
            Payload::Function(_) => Kind::Function,
        }
    }

    /// The object's kind name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Whether two handles refer to the same object.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The number of live handles to this object.
    ///
    /// Exposed for leak tests and diagnostics; the count is maintained by
    /// handle clone and drop, not by callers.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    pub(crate) fn payload(&self) -> &Payload {
        &self.inner
    }

    /// Stable per-object address, used for identity ordering and for the
    /// printer's visited set.
    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    // ═══════════════════════════════════════════════════════════════════
    // Kind predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if this is the null object.
    pub fn is_null(&self) -> bool {
        matches!(self.payload(), Payload::Null)
    }

    /// Check if this is an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self.payload(), Payload::Integer(_))
    }

    /// Check if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self.payload(), Payload::String(_))
    }

    /// Check if this is a dictionary.
    pub fn is_dict(&self) -> bool {
        matches!(self.payload(), Payload::Dict(_))
    }

    /// Check if this is a list.
    pub fn is_list(&self) -> bool {
        matches!(self.payload(), Payload::List(_))
    }

    /// Check if this is a function.
    pub fn is_function(&self) -> bool {
        matches!(self.payload(), Payload::Function(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Extract the integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self.payload() {
            Payload::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the string's bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self.payload() {
            Payload::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Extract the string as UTF-8, if it is both a string and valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Coercion and length
    // ═══════════════════════════════════════════════════════════════════

    /// Convert the object to a boolean.
    ///
    /// Null is false; an integer is true when nonzero; strings, lists, and
    /// dictionaries are true when nonempty (list length counts holes); a
    /// function is always true.
    pub fn is_truthy(&self) -> bool {
        match self.payload() {
            Payload::Null => false,
            Payload::Integer(n) => *n != 0,
            Payload::String(s) => !s.as_bytes().is_empty(),
            Payload::Dict(d) => d.borrow().len() != 0,
            Payload::List(l) => l.borrow().len() != 0,
            Payload::Function(_) => true,
        }
    }

    /// The object's length: byte length for a string, slot count (holes
    /// included) for a list, live entry count for a dictionary, and 0 for
    /// everything else.
    pub fn len(&self) -> usize {
        match self.payload() {
            Payload::String(s) => s.as_bytes().len(),
            Payload::Dict(d) => d.borrow().len(),
            Payload::List(l) => l.borrow().len(),
            _ => 0,
        }
    }

    /// Whether [`Object::len`] is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
