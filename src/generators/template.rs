//! `{variable}` substitution for generator templates.
//!
//! # Syntax
//!
//! - `{name}` substitutes the value of variable `name`
//! - `{{` renders as a literal `{`
//! - `}}` renders as a literal `}`
//!
//! Generated Rust sources are full of braces, so templates escape every
//! literal brace. Undefined variables are an error rather than an empty
//! substitution.

use crate::error::SokaError;
use std::collections::HashMap;
use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable { name: String, position: usize },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace { position: usize },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName { position: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(f, "undefined variable '{}' at position {}", name, position)
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {}", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(f, "empty variable name '{{}}' at position {}", position)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<TemplateError> for SokaError {
    fn from(err: TemplateError) -> Self {
        SokaError::GeneratorError(format!("template error: {}", err))
    }
}

/// Render `template`, substituting `{name}` placeholders from `variables`.
///
/// ```
/// use soka_kit::generators::template::{render_template, vars};
///
/// let vars = vars([("class_name", "WeatherAgent")]);
/// let out = render_template("pub struct {class_name};\nimpl {class_name} {{}}", &vars).unwrap();
/// assert_eq!(out, "pub struct WeatherAgent;\nimpl WeatherAgent {}");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut var_name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => var_name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let var_name = var_name.trim();
                if var_name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                let value = variables
                    .get(var_name)
                    .ok_or_else(|| TemplateError::UndefinedVariable {
                        name: var_name.to_string(),
                        position: pos,
                    })?;
                result.push_str(value);
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
