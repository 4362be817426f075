//! Case-conversion helpers used to derive generated identifiers.
//!
//! These are simple projections, not identifier sanitizers: they only touch
//! the characters the naming rules name and leave everything else verbatim.

/// Upper-case the first character (e.g., "getUser" -> "GetUser")
pub fn to_pascal_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "UserRepository" -> "userRepository")
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a type name to snake_case (e.g., "GetUserUseCase" -> "get_user_use_case")
///
/// An underscore is inserted only where an upper-case letter directly follows
/// a lower-case one, so acronyms stay glued together ("HTTPClient" -> "httpclient").
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            result.push('_');
        }
        result.extend(c.to_lowercase());
        prev_lower = c.is_lowercase();
    }
    result
}
