//! Line-level recognizers for repository method declarations.
//!
//! Payload and parameter types accept exactly one level of nested generic
//! arguments: `List<User>` and `Map<String, int>` match, `Map<String, List<int>>`
//! does not.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Shape;

/// Marker that classifies a line as an error-union future (containment test).
pub const ERROR_UNION_MARKER: &str = "Future<Either<";
/// Prefix that classifies a trimmed line as a plain future.
pub const FUTURE_MARKER: &str = "Future<";
/// Prefix that classifies a trimmed line as a stream.
pub const STREAM_MARKER: &str = "Stream<";

// A type token with at most one level of generic arguments and an optional `?`.
macro_rules! type_token {
    () => {
        r"[A-Za-z_$][\w$.]*(?:\s*<[^<>]*>)?\??"
    };
}

macro_rules! identifier {
    () => {
        r"[A-Za-z_$][\w$]*"
    };
}

// The left type of the union is matched but not captured.
static ERROR_UNION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Future<\s*Either<\s*",
        type_token!(),
        r"\s*,\s*(?P<ret>",
        type_token!(),
        r")\s*>\s*>\s*(?P<name>",
        identifier!(),
        r")\s*\("
    ))
    .unwrap()
});

static PLAIN_FUTURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^Future<\s*(?P<ret>",
        type_token!(),
        r")\s*>\s*(?P<name>",
        identifier!(),
        r")\s*\("
    ))
    .unwrap()
});

static STREAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^Stream<\s*(?P<ret>",
        type_token!(),
        r")\s*>\s*(?P<name>",
        identifier!(),
        r")\s*\("
    ))
    .unwrap()
});

static GETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(concat!(r">\s*get\s+(?P<name>", identifier!(), r")\s*(?:;|=>|\{)")).unwrap());

static PARAMETER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<ty>",
        type_token!(),
        r")\s+(?P<name>",
        identifier!(),
        r")$"
    ))
    .unwrap()
});

static REQUIRED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^required\s+").unwrap());

static MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:final|covariant)\s+").unwrap());

static REPOSITORY_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?m)^\s*(?:abstract\s+)?(?:(?:interface|base|sealed)\s+)?class\s+(?P<name>",
        r"[A-Za-z_$][\w$]*Repository",
        r")\b"
    ))
    .unwrap()
});

/// Classify a trimmed line by its return-type marker, first match wins.
pub fn classify(line: &str) -> Option<Shape> {
    if line.contains(ERROR_UNION_MARKER) {
        Some(Shape::ErrorUnionFuture)
    } else if line.starts_with(FUTURE_MARKER) {
        Some(Shape::PlainFuture)
    } else if line.starts_with(STREAM_MARKER) {
        Some(Shape::Stream)
    } else {
        None
    }
}

/// Header of a recognized declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub name: &'a str,
    pub return_type: &'a str,
    /// Byte index of the `(` that opens the parameter list.
    pub open_paren: usize,
}

/// Match the shape-specific declaration pattern against a trimmed line.
pub fn match_header(shape: Shape, line: &str) -> Option<Header<'_>> {
    let pattern = match shape {
        Shape::ErrorUnionFuture => &ERROR_UNION,
        Shape::PlainFuture => &PLAIN_FUTURE,
        Shape::Stream => &STREAM,
    };
    let caps = pattern.captures(line)?;
    let whole = caps.get(0)?;
    Some(Header {
        name: caps.name("name")?.as_str(),
        return_type: caps.name("ret")?.as_str().trim(),
        open_paren: whole.end() - 1,
    })
}

/// Name of a getter declaration (`Future<User> get current;`), if the line is one.
pub fn getter_name(line: &str) -> Option<&str> {
    GETTER
        .captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Match a `<type> <name>` parameter entry.
pub fn match_parameter(entry: &str) -> Option<(&str, &str)> {
    let caps = PARAMETER.captures(entry)?;
    Some((caps.name("ty")?.as_str(), caps.name("name")?.as_str()))
}

/// Strip a leading `required` keyword, reporting whether it was present.
pub fn strip_required(entry: &str) -> (&str, bool) {
    match REQUIRED.find(entry) {
        Some(m) => (&entry[m.end()..], true),
        None => (entry, false),
    }
}

/// Strip a leading `final` / `covariant` modifier.
pub fn strip_modifier(entry: &str) -> &str {
    match MODIFIER.find(entry) {
        Some(m) => &entry[m.end()..],
        None => entry,
    }
}

/// Find the first `class <Identifier>Repository` declaration in the source.
pub fn find_repository_name(source: &str) -> Option<&str> {
    REPOSITORY_CLASS
        .captures(source)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}
