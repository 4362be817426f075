//! Declaration extraction.

use serde::Serialize;

use crate::{
    Diagnostic, MethodDescriptor,
    comments::strip_comments,
    params::parse_parameters,
    patterns::{classify, getter_name, match_header},
    split::find_matching,
};

const PHASE: &str = "extract";

/// Methods and diagnostics extracted from one declaration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Recognized methods in file order.
    pub methods: Vec<MethodDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Warning diagnostics only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

/// Extract method descriptors from repository source text.
///
/// Unrecognized lines are skipped; use [`extract`] to see why.
pub fn extract_descriptors(source: &str) -> Vec<MethodDescriptor> {
    extract(source).methods
}

/// Extract method descriptors along with soft diagnostics.
pub fn extract(source: &str) -> Extraction {
    let stripped = strip_comments(source);
    let mut extraction = Extraction::default();

    for (index, raw) in stripped.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        match extract_line(line) {
            Ok(Some((mut method, rejected))) => {
                method.line = line_no;
                for entry in rejected {
                    log::debug!("line {}: dropped parameter `{}`", line_no, entry);
                    extraction.diagnostics.push(
                        Diagnostic::warning(
                            "parameters",
                            format!(
                                "parameter `{}` of `{}` was not recognized and was dropped",
                                entry, method.name
                            ),
                        )
                        .at_line(line_no),
                    );
                }
                extraction.methods.push(method);
            }
            Ok(None) => {}
            Err(diagnostic) => {
                log::debug!("line {}: {}", line_no, diagnostic.message);
                extraction.diagnostics.push(diagnostic.at_line(line_no));
            }
        }
    }

    if extraction.methods.is_empty() {
        extraction
            .diagnostics
            .push(Diagnostic::warning(PHASE, "no repository methods found"));
    }

    extraction
}

/// `Ok(None)` means the line is not a declaration candidate at all.
fn extract_line(line: &str) -> Result<Option<(MethodDescriptor, Vec<String>)>, Diagnostic> {
    let Some(shape) = classify(line) else {
        return Ok(None);
    };

    let Some(header) = match_header(shape, line) else {
        if let Some(name) = getter_name(line) {
            return Err(Diagnostic::info(
                PHASE,
                format!("getter `{}` has no parameter list and was skipped", name),
            ));
        }
        return Err(Diagnostic::warning(
            PHASE,
            format!(
                "unrecognized {} declaration `{}` (return types may nest generics one level deep)",
                shape, line
            ),
        ));
    };

    let Some(close) = find_matching(line, header.open_paren, '(', ')') else {
        return Err(Diagnostic::warning(
            PHASE,
            format!(
                "parameter list of `{}` is not closed on the same line",
                header.name
            ),
        ));
    };

    let parsed = parse_parameters(&line[header.open_paren + 1..close]);
    let method = MethodDescriptor {
        name: header.name.to_string(),
        return_type: header.return_type.to_string(),
        parameters: parsed.parameters,
        shape,
        line: 0,
    };
    Ok(Some((method, parsed.rejected)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Parameter, ParameterKind, Severity, Shape};

    #[test]
    fn test_error_union_single_parameter() {
        let methods = extract_descriptors("Future<Either<Failure, User>> getUser(String userId);");
        assert_eq!(
            methods,
            vec![MethodDescriptor {
                name: "getUser".to_string(),
                return_type: "User".to_string(),
                parameters: vec![Parameter::new("String", "userId", ParameterKind::Positional)],
                shape: Shape::ErrorUnionFuture,
                line: 1,
            }]
        );
    }

    #[test]
    fn test_plain_void_future() {
        let methods = extract_descriptors("  Future<void> bar();");
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].shape, Shape::PlainFuture);
        assert_eq!(methods[0].return_type, "void");
        assert!(methods[0].is_void_return());
        assert!(methods[0].parameters.is_empty());
    }

    #[test]
    fn test_stream() {
        let methods = extract_descriptors("Stream<List<Message>> watchMessages(String roomId);");
        assert_eq!(methods[0].shape, Shape::Stream);
        assert_eq!(methods[0].return_type, "List<Message>");
    }

    #[test]
    fn test_unclosed_parameter_list_is_dropped() {
        let extraction = extract("Future<void> save(\n  String id,\n);");
        assert!(extraction.methods.is_empty());
        assert!(
            extraction
                .diagnostics
                .iter()
                .any(|d| d.message.contains("not closed") && d.location.as_deref() == Some("line 1"))
        );
    }

    #[test]
    fn test_getter_is_reported_as_info() {
        let extraction = extract("Future<User> get current;\nFuture<void> logout();");
        assert_eq!(extraction.methods.len(), 1);
        assert_eq!(extraction.diagnostics.len(), 1);
        assert_eq!(extraction.diagnostics[0].severity, Severity::Info);
    }

    #[test]
    fn test_empty_result_warns() {
        let extraction = extract("abstract class EmptyRepository {}\n");
        assert!(extraction.is_empty());
        assert_eq!(extraction.warnings().count(), 1);
        assert_eq!(extraction.diagnostics[0].message, "no repository methods found");
    }

    #[test]
    fn test_line_numbers_survive_block_comments() {
        let src = "/*\n * docs\n */\nFuture<void> sync();";
        assert_eq!(extract_descriptors(src)[0].line, 4);
    }
}
