//! Function values: an argument list plus borrowed body and script handles

use super::{Object, Payload};

/// An opaque handle to a function body in the external syntax tree.
///
/// The object model never dereferences the handle; it only carries it
/// between the parser and the evaluator. The syntax tree it points into must
/// outlive every function object derived from it — that invariant belongs
/// to the parser/loader, not to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Wrap a raw handle issued by the parser.
    pub fn new(raw: usize) -> Self {
        NodeHandle(raw)
    }

    /// The raw handle value.
    pub fn raw(self) -> usize {
        self.0
    }
}

/// An opaque handle to the script a function was defined in.
///
/// Same lifetime contract as [`NodeHandle`]: the script representation must
/// outlive the function objects that point at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptHandle(usize);

impl ScriptHandle {
    /// Wrap a raw handle issued by the script loader.
    pub fn new(raw: usize) -> Self {
        ScriptHandle(raw)
    }

    /// The raw handle value.
    pub fn raw(self) -> usize {
        self.0
    }
}

/// A function value.
///
/// Owns its argument list; the body and script handles are borrowed and
/// merely cleared, never freed, at teardown.
pub(crate) struct FunctionValue {
    pub(crate) arguments: Object,
    pub(crate) body: NodeHandle,
    pub(crate) script: ScriptHandle,
}

impl Object {
    /// Create a function object.
    ///
    /// The function holds its own handle to `arguments` and carries `body`
    /// and `script` opaquely; see [`NodeHandle`] for the lifetime contract.
    ///
    /// # Panics
    ///
    /// Panics if `arguments` is not a list.
    pub fn function(arguments: Object, body: NodeHandle, script: ScriptHandle) -> Object {
        arguments.expect_list("function");
        Object::from_payload(Payload::Function(FunctionValue {
            arguments,
            body,
            script,
        }))
    }

    /// The function's argument list.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a function.
    pub fn function_arguments(&self) -> Object {
        self.expect_function("function_arguments").arguments.clone()
    }

    /// The function's body handle.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a function.
    pub fn function_body(&self) -> NodeHandle {
        self.expect_function("function_body").body
    }

    /// The handle of the script the function was defined in.
    ///
    /// # Panics
    ///
    /// Panics if this object is not a function.
    pub fn function_script(&self) -> ScriptHandle {
        self.expect_function("function_script").script
    }

    pub(crate) fn expect_function(&self, operation: &str) -> &FunctionValue {
        match self.payload() {
            Payload::Function(f) => f,
            _ => panic!("{} called on {} object", operation, self.type_name()),
        }
    }
}
