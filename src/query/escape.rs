//! Escaping of user values for the Lucene/Solr query syntax.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPECIAL_CHARS: Regex =
        Regex::new(r#"(&&|\|\||[+\-!(){}\[\]^"~*?:\\/])"#).expect("valid escape pattern");
}

/// Backslash-escape every query-syntax operator in `value`.
///
/// `&&` and `||` are escaped as a unit (`\&&`, `\||`), matching the way the
/// server's query parser tokenizes them.
pub fn escape_term(value: &str) -> String {
    SPECIAL_CHARS.replace_all(value, r"\${1}").into_owned()
}

/// Wrap `value` in double quotes so it is matched as a phrase.
///
/// Inside a phrase only `"` and `\` are significant.
pub fn quote_phrase(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_untouched() {
        assert_eq!(escape_term("hello"), "hello");
        assert_eq!(escape_term("123"), "123");
    }

    #[test]
    fn test_escape_operators() {
        assert_eq!(escape_term("a:b"), r"a\:b");
        assert_eq!(escape_term("c++"), r"c\+\+");
        assert_eq!(escape_term("(1+1)"), r"\(1\+1\)");
        assert_eq!(escape_term("a && b"), r"a \&& b");
        assert_eq!(escape_term("x || y"), r"x \|| y");
        assert_eq!(escape_term("path/to"), r"path\/to");
        assert_eq!(escape_term(r"back\slash"), r"back\\slash");
    }

    #[test]
    fn test_single_ampersand_is_literal() {
        assert_eq!(escape_term("a&b"), "a&b");
    }

    #[test]
    fn test_quote_phrase() {
        assert_eq!(quote_phrase("hello world"), "\"hello world\"");
        assert_eq!(quote_phrase("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(quote_phrase(""), "\"\"");
    }
}
