//! Cycle-safe textual rendering, plus Display and Debug

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};

use super::{Object, Payload};

impl Object {
    /// Render this object to a byte sink.
    ///
    /// `depth` is the nesting depth the object is rendered at, which
    /// controls string quoting and indentation: a string at depth 0 is
    /// written raw, while strings nested inside containers are quoted with
    /// C-style escapes. Lists render as `[e1, e2, ...]` (one slot per line
    /// once a list has five or more slots), dictionaries as `{key : value}`
    /// with one entry per line, holes as `0`, and functions as an opaque
    /// `Function at 0x…` naming their body handle.
    ///
    /// Rendering is cycle-safe: a container reached again while it is still
    /// being rendered prints as `[...]` or `{...}` instead of recursing
    /// forever.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        let mut visiting = HashSet::new();
        self.print_inner(out, depth, &mut visiting)
    }

    fn print_inner<W: Write + ?Sized>(
        &self,
        out: &mut W,
        depth: usize,
        visiting: &mut HashSet<usize>,
    ) -> io::Result<()> {
        match self.payload() {
            Payload::Null => write!(out, "null"),
            Payload::Integer(n) => write!(out, "{}", n),
            Payload::String(s) => {
                if depth == 0 {
                    out.write_all(s.as_bytes())
                } else {
                    print_quoted(out, s.as_bytes())
                }
            }
            Payload::List(list) => {
                if !visiting.insert(self.address()) {
                    return write!(out, "[...]");
                }
                let list = list.borrow();
                let slots = list.slots();
                write!(out, "[")?;
                for (index, slot) in slots.iter().enumerate() {
                    match slot {
                        Some(element) => element.print_inner(out, depth + 1, visiting)?,
                        None => write!(out, "0")?,
                    }
                    if index + 1 < slots.len() {
                        write!(out, ", ")?;
                        if slots.len() >= 5 {
                            write!(out, "\n{:width$}", "", width = depth + 1)?;
                        }
                    }
                }
                write!(out, "]")?;
                visiting.remove(&self.address());
                Ok(())
            }
            Payload::Dict(dict) => {
                if !visiting.insert(self.address()) {
                    return write!(out, "{{...}}");
                }
                let dict = dict.borrow();
                let count = dict.len();
                write!(out, "{{")?;
                for (index, (key, value)) in dict.iter().enumerate() {
                    key.print_inner(out, depth + 1, visiting)?;
                    write!(out, " : ")?;
                    value.print_inner(out, depth + 1, visiting)?;
                    if index + 1 < count {
                        write!(out, "\n{:width$}", "", width = depth + 1)?;
                    }
                }
                write!(out, "}}")?;
                visiting.remove(&self.address());
                Ok(())
            }
            Payload::Function(f) => write!(out, "Function at {:#x}", f.body.raw()),
        }
    }

    fn render(&self, depth: usize) -> String {
        let mut buffer = Vec::new();
        // Vec<u8> as a sink cannot fail.
        let _ = self.print(&mut buffer, depth);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Quoted form used for strings nested inside containers: `\r \n \v \t \f
/// \b \a \\ \"` for the usual suspects, `\xHH` for anything else
/// non-printable or high-bit.
fn print_quoted<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    write!(out, "\"")?;
    for &byte in bytes {
        match byte {
            b'\r' => write!(out, "\\r")?,
            b'\n' => write!(out, "\\n")?,
            0x0b => write!(out, "\\v")?,
            b'\t' => write!(out, "\\t")?,
            0x0c => write!(out, "\\f")?,
            0x08 => write!(out, "\\b")?,
            0x07 => write!(out, "\\a")?,
            b'\\' => write!(out, "\\\\")?,
            b'"' => write!(out, "\\\"")?,
            byte if byte < 0x20 || byte >= 0x80 => write!(out, "\\x{:02X}", byte)?,
            byte => out.write_all(&[byte])?,
        }
    }
    write!(out, "\"")
}

impl fmt::Display for Object {
    /// Top-level rendering: strings appear raw, without quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

impl fmt::Debug for Object {
    /// Nested-style rendering: strings appear quoted and escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(1))
    }
}
