//! Names of generated types, fields and files.

use casegen_core::{to_camel_case, to_pascal_case, to_snake_case};

/// Use case class name for a repository method: `getUser` -> `GetUserUseCase`.
pub fn use_case_type_name(method: &str) -> String {
    format!("{}UseCase", to_pascal_case(method))
}

/// Params holder class name for a repository method: `getUser` -> `GetUserParams`.
pub fn params_type_name(method: &str) -> String {
    format!("{}Params", to_pascal_case(method))
}

/// Field holding the injected repository: `UserRepository` -> `userRepository`.
pub fn collaborator_field(repository: &str) -> String {
    to_camel_case(repository)
}

/// File name for a generated type: `GetUserUseCase` -> `get_user_use_case.dart`.
pub fn unit_file_name(type_name: &str) -> String {
    format!("{}.dart", to_snake_case(type_name))
}
