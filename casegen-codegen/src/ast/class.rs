//! Dart class builder.

use super::{Constructor, Field, Method};
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for a Dart class declaration.
///
/// Members render in a fixed order (fields, constructor, methods) with a
/// blank line between groups.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    extends: Option<String>,
    fields: Vec<Field>,
    constructor: Option<Constructor>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            fields: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.extends = Some(superclass.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::dart();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        match &self.extends {
            Some(superclass) => format!("class {} extends {} {{", self.name, superclass),
            None => format!("class {} {{", self.name),
        }
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut groups: Vec<Vec<CodeFragment>> = Vec::new();
        if !self.fields.is_empty() {
            groups.push(self.fields.iter().flat_map(|f| f.to_fragments()).collect());
        }
        if let Some(ctor) = &self.constructor {
            groups.push(ctor.to_fragments());
        }
        groups.extend(self.methods.iter().map(|m| m.to_fragments()));

        let mut body = Vec::new();
        for (i, group) in groups.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(group);
        }

        vec![CodeFragment::braced(self.header(), body)]
    }
}
