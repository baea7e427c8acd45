//! Placeholder delimiter syntaxes

use regex::Regex;
use std::sync::OnceLock;

/// A placeholder delimiter pair with its matching pattern
///
/// The pattern's first capture group is the variable name. Patterns are
/// compiled once per syntax instance.
#[derive(Debug, Clone)]
pub struct VariableSyntax {
    prefix: &'static str,
    suffix: &'static str,
    pattern_src: &'static str,
    pattern: OnceLock<Regex>,
}

impl VariableSyntax {
    /// Square syntax: `[NAME]`
    #[must_use]
    pub fn square() -> Self {
        Self {
            prefix: "[",
            suffix: "]",
            pattern_src: r"\[([a-zA-Z0-9_-]+)\]",
            pattern: OnceLock::new(),
        }
    }

    /// Curly syntax: `${NAME}`
    #[must_use]
    pub fn curly() -> Self {
        Self {
            prefix: "${",
            suffix: "}",
            pattern_src: r"\$\{([a-zA-Z0-9_-]+)\}",
            pattern: OnceLock::new(),
        }
    }

    /// Compiled matching pattern
    pub fn pattern(&self) -> &Regex {
        self.pattern.get_or_init(|| {
            Regex::new(self.pattern_src).expect("syntax patterns are known-valid")
        })
    }

    /// Literal placeholder text for `name`, i.e. `prefix + name + suffix`
    #[must_use]
    pub fn placeholder(&self, name: &str) -> String {
        format!("{}{name}{}", self.prefix, self.suffix)
    }
}

impl Default for VariableSyntax {
    fn default() -> Self {
        Self::square()
    }
}
