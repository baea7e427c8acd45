//! Placeholder substitution for settings templates
//!
//! Settings templates carry named placeholders delimited by a fixed
//! prefix/suffix pair, e.g. `[PASSWORD]` in the square syntax. This crate
//! extracts the ordered set of placeholder names from a template and performs
//! the textual replacement when rendering.

pub mod syntax;

pub use syntax::VariableSyntax;

use indexmap::IndexSet;

/// Extract placeholder names from `text` in first-seen order, deduplicated
///
/// Matching is non-overlapping and left-to-right; the name is the text
/// strictly between the syntax's prefix and suffix.
#[must_use]
pub fn find_variables(text: &str, syntax: &VariableSyntax) -> IndexSet<String> {
    let mut variables = IndexSet::new();
    for captures in syntax.pattern().captures_iter(text) {
        if let Some(name) = captures.get(1) {
            variables.insert(name.as_str().to_string());
        }
    }
    variables
}

/// Replace every occurrence of the placeholder `name` in `text` with `value`
///
/// A pure, repeatable text operation. Idempotent as long as `value` itself
/// contains no placeholder syntax; that is a documented assumption and is
/// not re-validated here.
#[must_use]
pub fn substitute(text: &str, name: &str, value: &str, syntax: &VariableSyntax) -> String {
    text.replace(&syntax.placeholder(name), value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_find_variables_order_and_dedup() {
        let syntax = VariableSyntax::square();
        let text = "user=[FOO] host=[BAR] pass=[FOO]";
        let vars = find_variables(text, &syntax);
        let names: Vec<_> = vars.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["FOO", "BAR"]);
    }

    #[test]
    fn test_find_variables_empty_text() {
        let syntax = VariableSyntax::square();
        assert!(find_variables("", &syntax).is_empty());
        assert!(find_variables("no placeholders here", &syntax).is_empty());
    }

    #[test]
    fn test_find_variables_ignores_malformed() {
        let syntax = VariableSyntax::square();
        // Space is not a valid name character, unclosed bracket never matches
        let vars = find_variables("[NOT VALID] [UNCLOSED [OK]", &syntax);
        let names: Vec<_> = vars.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["OK"]);
    }

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let syntax = VariableSyntax::square();
        let rendered = substitute("user=[FOO] pass=[FOO]", "FOO", "secretA", &syntax);
        assert_eq!(rendered, "user=secretA pass=secretA");
    }

    #[test]
    fn test_substitute_leaves_other_variables() {
        let syntax = VariableSyntax::square();
        let rendered = substitute("user=[FOO] pass=[BAR]", "FOO", "me", &syntax);
        assert_eq!(rendered, "user=me pass=[BAR]");
    }

    #[test]
    fn test_substitute_is_repeatable() {
        let syntax = VariableSyntax::square();
        let once = substitute("token=[T]", "T", "abc", &syntax);
        let twice = substitute(&once, "T", "abc", &syntax);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_curly_syntax() {
        let syntax = VariableSyntax::curly();
        let vars = find_variables("url=${HOST}/${PATH-X}", &syntax);
        let names: Vec<_> = vars.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["HOST", "PATH-X"]);

        let rendered = substitute("url=${HOST}", "HOST", "example.org", &syntax);
        assert_eq!(rendered, "url=example.org");
    }
}
