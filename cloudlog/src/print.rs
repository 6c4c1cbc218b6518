//! Concatenation of values into a message.

use crate::printf;
use crate::value::Value;

/// Renders each value in its default format and joins them.
///
/// A single space is inserted between two adjacent values only when neither of them is a
/// string, so text and numbers run together while consecutive numbers stay readable.
///
/// # Examples
///
/// ```rust
/// use cloudlog::{Value, sprint};
///
/// assert_eq!(sprint(&["a".into(), 1.into()]), "a1");
/// assert_eq!(sprint(&[1.into(), 2.into()]), "1 2");
/// assert_eq!(sprint(&[Value::from("x="), 1.5.into(), true.into()]), "x=1.5 true");
/// ```
pub fn sprint(values: &[Value<'_>]) -> String {
    let mut message = String::new();
    let mut previous_is_string = false;

    for (index, value) in values.iter().enumerate() {
        let is_string = value.is_string();
        if index > 0 && !is_string && !previous_is_string {
            message.push(' ');
        }
        message.push_str(&printf::format_default(value));
        previous_is_string = is_string;
    }

    message
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::sprint;
    use crate::Value;

    #[test_case(&[] => ""; "nothing")]
    #[test_case(&["a".into(), 1.into()] => "a1"; "string then number")]
    #[test_case(&[1.into(), "a".into()] => "1a"; "number then string")]
    #[test_case(&[1.into(), 2.into()] => "1 2"; "two numbers")]
    #[test_case(&[1.into(), "a".into(), 2.into()] => "1a2"; "string between numbers")]
    #[test_case(&["a".into(), "b".into()] => "ab"; "two strings")]
    #[test_case(&[true.into(), 'c'.into(), 0.25.into()] => "true c 0.25"; "mixed non strings")]
    #[test_case(&["".into(), 1.into(), 2.into()] => "1 2"; "empty string still counts")]
    fn joins(values: &[Value<'_>]) -> String {
        sprint(values)
    }

    #[test]
    fn display_values_are_not_strings() {
        let name = String::from("bob");
        assert_eq!(
            sprint(&[Value::display(&name), Value::display(&name)]),
            "bob bob"
        );
    }
}
