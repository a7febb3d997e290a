//! The conversion contract between command-line text and parameter values.
//!
//! Any type implementing [`FromStr`] can be stored in a one-argument
//! parameter. Conversion failures are reported as `None`; the parameter that
//! asked for the conversion turns that into an error naming itself.

use std::any::type_name;
use std::str::FromStr;

/// Parses `input` as a `T`, discarding the reason when it does not parse.
///
/// # Examples
///
/// ```
/// use argot_core::value::parse_value;
///
/// assert_eq!(parse_value::<i32>("20"), Some(20));
/// assert_eq!(parse_value::<i32>("twenty"), None);
/// ```
#[must_use]
pub fn parse_value<T: FromStr>(input: &str) -> Option<T> {
    input.parse().ok()
}

/// Short, human-readable name of `T` for help text and error messages.
///
/// Module paths are dropped from every path in the type, so
/// `Vec<alloc::string::String>` becomes `Vec<String>`.
///
/// # Examples
///
/// ```
/// use argot_core::value::type_label;
///
/// assert_eq!(type_label::<String>(), "String");
/// assert_eq!(type_label::<Vec<String>>(), "Vec<String>");
/// ```
#[must_use]
pub fn type_label<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut label = String::with_capacity(full.len());
    let mut path = String::new();

    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            path.push(ch);
        } else {
            label.push_str(last_segment(&path));
            path.clear();
            label.push(ch);
        }
    }
    label.push_str(last_segment(&path));

    label
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_integers() {
        assert_eq!(parse_value::<i64>("-14"), Some(-14));
        assert_eq!(parse_value::<u8>("256"), None);
        assert_eq!(parse_value::<i32>(""), None);
    }

    #[test]
    fn test_parse_value_strings_always_convert() {
        assert_eq!(parse_value::<String>(""), Some(String::new()));
        assert_eq!(
            parse_value::<String>("string value"),
            Some("string value".to_string())
        );
    }

    #[test]
    fn test_type_label_primitives() {
        assert_eq!(type_label::<i32>(), "i32");
        assert_eq!(type_label::<f64>(), "f64");
        assert_eq!(type_label::<bool>(), "bool");
    }

    #[test]
    fn test_type_label_strips_paths() {
        assert_eq!(type_label::<String>(), "String");
        assert_eq!(type_label::<Option<i32>>(), "Option<i32>");
        assert_eq!(
            type_label::<std::collections::HashMap<String, u8>>(),
            "HashMap<String, u8>"
        );
    }
}
