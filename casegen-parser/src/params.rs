//! Parameter list parsing.

use crate::{
    Parameter, ParameterKind,
    patterns::{match_parameter, strip_modifier, strip_required},
    split::{find_matching, find_top_level, split_top_level},
};

/// Outcome of parsing one parameter list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedParameters {
    pub parameters: Vec<Parameter>,
    /// Entries that did not look like `<type> <name>`.
    pub rejected: Vec<String>,
}

/// Parse the text between a declaration's parentheses.
///
/// The text is cut into a required positional region and at most one
/// `{...}` (named) or `[...]` (optional positional) group.
pub fn parse_parameters(text: &str) -> ParsedParameters {
    let mut parsed = ParsedParameters::default();

    let group = [('{', '}'), ('[', ']')]
        .into_iter()
        .filter_map(|(open, close)| find_top_level(text, open).map(|at| (at, open, close)))
        .min_by_key(|(at, _, _)| *at);

    let (positional, grouped) = match group {
        Some((at, open, close)) => {
            let end = find_matching(text, at, open, close).unwrap_or(text.len());
            let inner = &text[at + 1..end];
            let kind = if open == '{' {
                ParameterKind::Named
            } else {
                ParameterKind::OptionalPositional
            };
            (&text[..at], Some((inner, kind)))
        }
        None => (text, None),
    };

    for entry in split_top_level(positional, ',') {
        parse_entry(entry, ParameterKind::Positional, &mut parsed);
    }

    if let Some((inner, kind)) = grouped {
        for entry in split_top_level(inner, ',') {
            parse_entry(entry, kind, &mut parsed);
        }
    }

    parsed
}

fn parse_entry(entry: &str, kind: ParameterKind, parsed: &mut ParsedParameters) {
    let (declaration, default_value) = match find_top_level(entry, '=') {
        Some(at) => (entry[..at].trim(), Some(entry[at + 1..].trim())),
        None => (entry, None),
    };

    let (declaration, kind) = if kind == ParameterKind::Named {
        match strip_required(declaration) {
            (rest, true) => (rest, ParameterKind::RequiredNamed),
            (rest, false) => (rest, kind),
        }
    } else {
        (declaration, kind)
    };

    match match_parameter(strip_modifier(declaration.trim())) {
        Some((ty, name)) => {
            let mut parameter = Parameter::new(ty, name, kind);
            if let Some(value) = default_value.filter(|v| !v.is_empty()) {
                parameter = parameter.with_default(value);
            }
            parsed.parameters.push(parameter);
        }
        None => parsed.rejected.push(entry.to_string()),
    }
}
