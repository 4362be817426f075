//! Fallback values shared by configuration, emitter and CLI.

/// Dart package name used when neither the command line nor `pubspec.yaml`
/// provides one.
pub const PROJECT_NAME: &str = "my_app";

/// Location of the `Failure` type, relative to the package's `lib/`.
pub const FAILURE_PATH: &str = "core/error/failures.dart";
