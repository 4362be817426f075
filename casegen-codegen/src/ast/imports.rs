//! Dart import directive builder.

use crate::builder::{CodeFragment, Renderable};

/// An `import '<uri>';` directive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    uri: String,
}

impl Import {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Package import, e.g. `package:dartz/dartz.dart`.
    pub fn package(package: &str, path: &str) -> Self {
        Self::new(format!("package:{}/{}", package, path))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Build the directive as a string.
    pub fn build(&self) -> String {
        format!("import '{}';", self.uri)
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_import() {
        let i = Import::package("dartz", "dartz.dart").build();
        assert_eq!(i, "import 'package:dartz/dartz.dart';");
    }

    #[test]
    fn test_relative_import() {
        let i = Import::new("get_user_params.dart");
        assert_eq!(i.build(), "import 'get_user_params.dart';");
        assert_eq!(i.uri(), "get_user_params.dart");
    }
}
