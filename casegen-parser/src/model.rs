//! Method descriptor types produced by the extractor.

use std::fmt;

use serde::Serialize;

/// Return-type shape of a repository method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// `Future<T>`
    PlainFuture,
    /// `Future<Either<Failure, T>>`
    ErrorUnionFuture,
    /// `Stream<T>`
    Stream,
}

impl Shape {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::PlainFuture => "future",
            Shape::ErrorUnionFuture => "either future",
            Shape::Stream => "stream",
        }
    }

    /// Returns true if values of this shape carry a `Failure` branch.
    pub fn is_error_union(&self) -> bool {
        matches!(self, Shape::ErrorUnionFuture)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter was declared within the parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Plain positional parameter.
    Positional,
    /// Inside a `[...]` group.
    OptionalPositional,
    /// Inside a `{...}` group without `required`.
    Named,
    /// Inside a `{...}` group with `required`.
    RequiredNamed,
}

impl ParameterKind {
    /// Returns true for parameters passed as `name: value`.
    pub fn is_named(&self) -> bool {
        matches!(self, ParameterKind::Named | ParameterKind::RequiredNamed)
    }
}

/// A single declared argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
    /// Syntactic type token, e.g. `String?` or `Map<String, dynamic>`.
    pub ty: String,
    /// Identifier, without any `required` qualifier or default value.
    pub name: String,
    pub kind: ParameterKind,
    /// Default value expression after `=`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            kind,
            default_value: None,
        }
    }

    /// Attach a default value expression.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn is_required_named(&self) -> bool {
        self.kind == ParameterKind::RequiredNamed
    }

    /// Render the parameter as it appears inside its group,
    /// e.g. `required String id` or `int quantity = 1`.
    pub fn declaration(&self) -> String {
        let required = if self.is_required_named() {
            "required "
        } else {
            ""
        };
        match &self.default_value {
            Some(value) => format!("{}{} {} = {}", required, self.ty, self.name, value),
            None => format!("{}{} {}", required, self.ty, self.name),
        }
    }
}

/// One recognized repository method signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// Payload type inside the return wrapper, e.g. `User` for
    /// `Future<Either<Failure, User>>`.
    pub return_type: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    pub shape: Shape,
    /// 1-based line the declaration was found on.
    pub line: usize,
}

impl MethodDescriptor {
    /// Returns true when the payload type is literally `void`.
    pub fn is_void_return(&self) -> bool {
        self.return_type == "void"
    }

    /// Render the declared return type, e.g. `Future<Either<Failure, User>>`.
    ///
    /// The left side of an error union is always written as `Failure`, the
    /// type pulled in by the failure import. A declaration such as
    /// `Future<Either<NetworkFailure, User>>` is normalized to it; only the
    /// payload is kept.
    pub fn declared_return_type(&self) -> String {
        match self.shape {
            Shape::ErrorUnionFuture => format!("Future<Either<Failure, {}>>", self.return_type),
            Shape::PlainFuture => format!("Future<{}>", self.return_type),
            Shape::Stream => format!("Stream<{}>", self.return_type),
        }
    }
}
