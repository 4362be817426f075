//! Renders use case and params holder units for one repository method.

use casegen_core::Mode;
use casegen_parser::{MethodDescriptor, Parameter, ParameterKind, Shape};

use crate::{
    DartFile, ImportContext,
    ast::{Class, Constructor, Field, Import, Method},
    naming::{collaborator_field, params_type_name, unit_file_name, use_case_type_name},
};

/// One generated Dart library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    /// File name relative to the output directory, e.g. `get_user_use_case.dart`.
    pub suggested_file_name: String,
    pub content: String,
}

impl RenderedUnit {
    fn new(type_name: &str, content: String) -> Self {
        Self {
            suggested_file_name: unit_file_name(type_name),
            content,
        }
    }
}

/// Render the units for a single repository method.
///
/// `type_name_base` is the method name the generated type names derive from
/// and `collaborator_type_name` is the repository class the use case wraps.
/// Simple mode yields the use case alone; professional mode yields the use
/// case followed by its params holder.
///
/// Both units reach payload and parameter types through the declaration
/// import, so those types must be defined in or exported by the repository
/// library.
pub fn render_units(
    descriptor: &MethodDescriptor,
    type_name_base: &str,
    collaborator_type_name: &str,
    mode: Mode,
    import_context: &ImportContext,
) -> Vec<RenderedUnit> {
    let use_case = UseCase {
        descriptor,
        type_name: use_case_type_name(type_name_base),
        params_type_name: params_type_name(type_name_base),
        repository_type: collaborator_type_name,
        repository_field: collaborator_field(collaborator_type_name),
        mode,
    };

    let mut units = vec![RenderedUnit::new(
        &use_case.type_name,
        use_case.render(import_context),
    )];
    if mode.has_params() {
        units.push(RenderedUnit::new(
            &use_case.params_type_name,
            render_params(
                &use_case.params_type_name,
                &descriptor.parameters,
                import_context,
            ),
        ));
    }
    units
}

struct UseCase<'a> {
    descriptor: &'a MethodDescriptor,
    type_name: String,
    params_type_name: String,
    repository_type: &'a str,
    repository_field: String,
    mode: Mode,
}

impl UseCase<'_> {
    fn render(&self, ctx: &ImportContext) -> String {
        let mut file = DartFile::new();
        if self.descriptor.shape.is_error_union() {
            file = file
                .import(Import::package("dartz", "dartz.dart"))
                .import(ctx.failure_import());
        }
        file = file.import(ctx.declaration_import());
        if self.mode.has_params() {
            file = file.import(Import::new(unit_file_name(&self.params_type_name)));
        }

        file.add(self.class()).render()
    }

    fn class(&self) -> Class {
        Class::new(&self.type_name)
            .field(Field::new(self.repository_type, &self.repository_field))
            .constructor(
                Constructor::new(&self.type_name)
                    .positional(format!("this.{}", self.repository_field)),
            )
            .method(self.call_method())
    }

    fn call_method(&self) -> Method {
        let d = self.descriptor;
        let (params, args) = match self.mode {
            Mode::Simple => (
                parameter_list(&d.parameters),
                arguments(&d.parameters, |p| p.name.clone()),
            ),
            Mode::Professional => (
                format!("{} params", self.params_type_name),
                arguments(&d.parameters, |p| format!("params.{}", p.name)),
            ),
        };

        let invocation = format!("{}.{}({})", self.repository_field, d.name, args);
        let method = Method::new("call", d.declared_return_type()).params(params);

        // A plain `Future<void>` has nothing to return, so the body awaits.
        if d.shape == Shape::PlainFuture && d.is_void_return() {
            method.async_().body_line(format!("await {};", invocation))
        } else {
            method.body_line(format!("return {};", invocation))
        }
    }
}

fn render_params(type_name: &str, parameters: &[Parameter], ctx: &ImportContext) -> String {
    let constructor = parameters
        .iter()
        .fold(Constructor::new(type_name).const_(), |ctor, p| {
            ctor.named(holder_initializer(p))
        });
    let props = parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let class = Class::new(type_name)
        .extends("Equatable")
        .fields(parameters.iter().map(|p| Field::new(&p.ty, &p.name)))
        .constructor(constructor)
        .method(
            Method::getter("props", "List<Object?>")
                .override_()
                .arrow(format!("[{}]", props)),
        );

    let mut file = DartFile::new().import(Import::package("equatable", "equatable.dart"));
    if !parameters.is_empty() {
        file = file.import(ctx.declaration_import());
    }
    file.add(class).render()
}

/// Named constructor parameter initializing one holder field.
fn holder_initializer(p: &Parameter) -> String {
    let optional = matches!(
        p.kind,
        ParameterKind::Named | ParameterKind::OptionalPositional
    );
    match &p.default_value {
        Some(value) if optional => format!("this.{} = {}", p.name, value),
        None if optional && p.ty.ends_with('?') => format!("this.{}", p.name),
        _ => format!("required this.{}", p.name),
    }
}

/// Re-render a declared parameter list, groups included.
fn parameter_list(parameters: &[Parameter]) -> String {
    let mut positional = Vec::new();
    let mut optional = Vec::new();
    let mut named = Vec::new();
    for p in parameters {
        match p.kind {
            ParameterKind::Positional => positional.push(p.declaration()),
            ParameterKind::OptionalPositional => optional.push(p.declaration()),
            ParameterKind::Named | ParameterKind::RequiredNamed => named.push(p.declaration()),
        }
    }

    if !optional.is_empty() {
        positional.push(format!("[{}]", optional.join(", ")));
    }
    if !named.is_empty() {
        positional.push(format!("{{{}}}", named.join(", ")));
    }
    positional.join(", ")
}

/// Call arguments forwarding each parameter with its own calling convention.
fn arguments(parameters: &[Parameter], value: impl Fn(&Parameter) -> String) -> String {
    parameters
        .iter()
        .map(|p| {
            if p.kind.is_named() {
                format!("{}: {}", p.name, value(p))
            } else {
                value(p)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
