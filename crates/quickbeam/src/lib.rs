//! # Quickbeam
//!
//! The object model for the Quickbeam embedded scripting language.
//!
//! Quickbeam is a small, dynamically-typed configuration language. This crate
//! is its core: a reference-counted value representation with six kinds
//! (null, integer, string, dict, list, function), the collection operations
//! for lists and dictionaries, and the cross-cutting protocols — ordering,
//! shallow copy, boolean coercion, and cycle-safe printing.
//!
//! Every other subsystem (lexer, parser, evaluator, built-in functions)
//! operates exclusively on [`Object`] handles produced by this crate.
//!
//! ## Architecture
//!
//! - **Object Handles**: cheap-to-clone shared handles; cloning a handle adds
//!   an owner, dropping one releases it
//! - **Collections**: hole-tolerant lists and insertion-ordered dictionaries
//!   with iteration-safety generation tracking
//! - **Protocols**: total ordering, shallow copy, and a recursive printer
//!   that survives cyclic structures
//! - **Built-ins**: the `print`/`length`/`get` built-in functions, written
//!   entirely against the object model's query operations
//!
//! The model is single-threaded by design: an evaluator drives all mutation
//! sequentially, so object payloads use `Rc`/`RefCell` rather than locks.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod error;
pub mod object;

// Re-export main types
pub use builtins::{builtin_get, builtin_length, builtin_print, BuiltinFn, CallContext};
pub use error::{QuickbeamError, Result};
pub use object::{
    DictIter, DictSlot, Kind, ListIter, NodeHandle, Object, ScriptHandle,
};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
