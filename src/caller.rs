//! Call-site identity.
//!
//! # Responsibilities
//! - Recover the enclosing type and function name of a logging call
//! - Carry file/line alongside for observers that want them
//!
//! # Design Decisions
//! - Identity is captured at the call site by the `caller!` macro instead of
//!   inspecting the stack at runtime. The macro declares a marker function
//!   and reads its `std::any::type_name`, which is the full path of the
//!   enclosing function (`game::Player::jump::__chanlog_here`).
//! - Parsing is purely textual and never fails; unrecognised shapes fall
//!   back to `<unknown>`

use serde::Serialize;
use std::fmt;

/// Name of the marker item declared by `caller!`.
#[doc(hidden)]
pub const MARKER: &str = "__chanlog_here";

const CLOSURE: &str = "{{closure}}";
const UNKNOWN: &str = "<unknown>";

/// Identity of the function that issued a logging call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallerId {
    /// Declaring type, or the module name for free functions. A function
    /// nested inside another function reports the outer function's name.
    pub type_name: &'static str,
    /// Function name.
    pub method: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallerId {
    /// Build a caller identity from a `type_name` path.
    ///
    /// Usually invoked through `caller!()`.
    pub fn from_path(path: &'static str, file: &'static str, line: u32) -> Self {
        let mut segments = split_segments(path);
        if segments.last() == Some(&MARKER) {
            segments.pop();
        }
        while segments.last() == Some(&CLOSURE) {
            segments.pop();
        }

        let method = segments.pop().filter(|s| !s.is_empty()).unwrap_or(UNKNOWN);
        let type_name = segments.pop().map(type_segment).unwrap_or(UNKNOWN);

        Self {
            type_name,
            method,
            file,
            line,
        }
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.type_name, self.method)
    }
}

/// Split a path on `::`, ignoring separators nested inside `<...>`.
fn split_segments(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` inside fn-pointer generics is not a closing bracket
            b'>' if i == 0 || bytes[i - 1] != b'-' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&path[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&path[start..]);
    segments
}

/// Reduce a type segment to its bare name.
///
/// `<a::Foo as b::Trait>`, `<impl a::Foo>` and `Foo<T>` all yield `Foo`.
fn type_segment(segment: &'static str) -> &'static str {
    let segment = match segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        Some(inner) => {
            // Impls outside the type's module print as `<impl [Trait for] Type>`
            let self_ty = match inner.strip_prefix("impl ") {
                Some(rest) => rest.rsplit(" for ").next().unwrap_or(rest),
                None => inner.split(" as ").next().unwrap_or(inner),
            };
            split_segments(self_ty).pop().unwrap_or(self_ty)
        }
        None => segment,
    };

    let bare = segment.trim_start_matches('&');
    let bare = bare.split('<').next().unwrap_or(bare);
    if bare.is_empty() {
        UNKNOWN
    } else {
        bare
    }
}
