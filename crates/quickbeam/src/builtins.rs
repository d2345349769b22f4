//! Built-in functions implemented on top of the object model
//!
//! The evaluator registers built-ins by name together with the names of the
//! arguments they bind. At call time a built-in receives a [`CallContext`]
//! through which it fetches its bound arguments, and an output sink for
//! anything it prints. Everything here is written purely against the object
//! model's query operations.

use std::io::Write;

use crate::error::{QuickbeamError, Result};
use crate::object::{Kind, Object};

/// The calling convention between the evaluator and a built-in function.
///
/// Implemented by the evaluator's call frame; the object model only
/// consumes it.
pub trait CallContext {
    /// Fetch the value bound to a named argument, if the caller bound one.
    fn argument(&self, name: &str) -> Option<Object>;
}

/// The signature shared by every built-in function.
pub type BuiltinFn = fn(&dyn CallContext, &mut dyn Write) -> Result<Object>;

fn required_argument(ctx: &dyn CallContext, name: &'static str) -> Result<Object> {
    ctx.argument(name)
        .ok_or(QuickbeamError::MissingArgument(name))
}

/// The `print` built-in.
///
/// Prints the `object` argument to the sink at top level (strings raw). A
/// list prints its live elements separated by single spaces, skipping
/// holes; anything else prints directly. Returns null.
pub fn builtin_print(ctx: &dyn CallContext, out: &mut dyn Write) -> Result<Object> {
    let object = required_argument(ctx, "object")?;

    if object.is_list() {
        let mut first = true;
        for element in object.list_iter() {
            if !first {
                write!(out, " ")?;
            }
            first = false;
            element.print(&mut *out, 0)?;
        }
    } else {
        object.print(&mut *out, 0)?;
    }

    Ok(Object::null())
}

/// The `length` built-in.
///
/// Returns the `object` argument's length as an integer: byte length for a
/// string, slot count for a list, entry count for a dictionary, 0 for
/// anything else.
pub fn builtin_length(ctx: &dyn CallContext, _out: &mut dyn Write) -> Result<Object> {
    let object = required_argument(ctx, "object")?;
    Ok(Object::integer(object.len() as i64))
}

/// The `get` built-in.
///
/// Returns the value stored under `key` in the `object` dictionary, or null
/// when the key is absent. A null `object` also yields null, so scripts can
/// probe optional configuration without guarding. Any other kind is a type
/// error.
pub fn builtin_get(ctx: &dyn CallContext, _out: &mut dyn Write) -> Result<Object> {
    let object = required_argument(ctx, "object")?;
    let key = required_argument(ctx, "key")?;

    match object.kind() {
        Kind::Dict => Ok(object.dict_get(&key).unwrap_or_else(Object::null)),
        Kind::Null => Ok(Object::null()),
        other => Err(QuickbeamError::TypeError {
            expected: "dict",
            got: other,
        }),
    }
}
