//! DartFile abstraction for structured Dart file generation.
//!
//! Organizes a generated library into an import section followed by body
//! declarations, separated by blank lines.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
};

/// A structured representation of a Dart library file.
///
/// # Example
///
/// ```
/// use casegen_codegen::{DartFile, ast::{Class, Import}};
///
/// let content = DartFile::new()
///     .import(Import::package("equatable", "equatable.dart"))
///     .add(Class::new("NoParams").extends("Equatable"))
///     .render();
///
/// assert!(content.starts_with("import 'package:equatable/equatable.dart';\n\nclass NoParams"));
/// ```
#[derive(Default)]
pub struct DartFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl DartFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import directive. Duplicate URIs are ignored.
    pub fn import(mut self, import: Import) -> Self {
        if !self.imports.iter().any(|i| i.uri() == import.uri()) {
            self.imports.push(import);
        }
        self
    }

    /// Add imports from an iterator.
    pub fn imports(self, imports: impl IntoIterator<Item = Import>) -> Self {
        imports.into_iter().fold(self, |file, import| file.import(import))
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with Dart indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::DART)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}
