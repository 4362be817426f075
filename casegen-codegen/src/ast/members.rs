//! Dart class member builders: fields, constructors and methods.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `final` instance field.
#[derive(Debug, Clone)]
pub struct Field {
    ty: String,
    name: String,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    pub fn build(&self) -> String {
        format!("final {} {};", self.ty, self.name)
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

/// A generative constructor whose parameters are initializing formals
/// (`this.x`). Parameters are written exactly as given.
#[derive(Debug, Clone)]
pub struct Constructor {
    class_name: String,
    is_const: bool,
    positional: Vec<String>,
    named: Vec<String>,
}

impl Constructor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            is_const: false,
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Add a positional parameter, e.g. `this.repository`.
    pub fn positional(mut self, param: impl Into<String>) -> Self {
        self.positional.push(param.into());
        self
    }

    /// Add a named parameter, e.g. `required this.id` or `this.page = 1`.
    pub fn named(mut self, param: impl Into<String>) -> Self {
        self.named.push(param.into());
        self
    }

    pub fn build(&self) -> String {
        let const_kw = if self.is_const { "const " } else { "" };
        let mut params = self.positional.clone();
        if !self.named.is_empty() {
            params.push(format!("{{{}}}", self.named.join(", ")));
        }
        format!("{}{}({});", const_kw, self.class_name, params.join(", "))
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

/// Builder for Dart methods and getters.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    return_type: String,
    params: String,
    is_getter: bool,
    is_async: bool,
    is_override: bool,
    arrow: Option<String>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: String::new(),
            is_getter: false,
            is_async: false,
            is_override: false,
            arrow: None,
            body: Vec::new(),
        }
    }

    /// Create a getter (`T get name`).
    pub fn getter(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            is_getter: true,
            ..Self::new(name, return_type)
        }
    }

    /// Set the rendered parameter list, without the surrounding parentheses.
    pub fn params(mut self, params: impl Into<String>) -> Self {
        self.params = params.into();
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Annotate with `@override`.
    pub fn override_(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Use an expression body (`=> expr;`) instead of a block.
    pub fn arrow(mut self, expr: impl Into<String>) -> Self {
        self.arrow = Some(expr.into());
        self
    }

    /// Add a line to the block body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::dart();
        builder.emit(self);
        builder.build()
    }

    fn signature(&self) -> String {
        if self.is_getter {
            format!("{} get {}", self.return_type, self.name)
        } else {
            format!("{} {}({})", self.return_type, self.name, self.params)
        }
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if self.is_override {
            fragments.push(CodeFragment::line("@override"));
        }

        let async_kw = if self.is_async { " async" } else { "" };
        match &self.arrow {
            Some(expr) => fragments.push(CodeFragment::line(format!(
                "{}{} => {};",
                self.signature(),
                async_kw,
                expr
            ))),
            None => fragments.push(CodeFragment::braced(
                format!("{}{} {{", self.signature(), async_kw),
                self.body.iter().map(CodeFragment::line).collect(),
            )),
        }
        fragments
    }
}
