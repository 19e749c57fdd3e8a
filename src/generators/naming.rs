//! Name normalization for generated agents and tools.
//!
//! Whatever the user types (`customer_support`, `CustomerSupportAgent`,
//! `admin/customer_support_agent`), the generated file name ends in exactly
//! one `_agent`/`_tool` and the type name in exactly one `Agent`/`Tool`.

use crate::error::{Result, SokaError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static SEGMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("Invalid segment regex"));

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("Invalid acronym regex"));

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("Invalid word regex"));

/// Strict and reserved Rust keywords, 2024 edition.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords with no raw identifier form.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// `word` spelled as a Rust identifier: keywords become raw identifiers
/// (`type` → `r#type`). `None` for words no identifier can spell.
pub fn identifier(word: &str) -> Option<String> {
    if word == "_" || NON_RAW_KEYWORDS.contains(&word) {
        None
    } else if is_keyword(word) {
        Some(format!("r#{}", word))
    } else {
        Some(word.to_string())
    }
}

/// What is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Agent,
    Tool,
}

impl NameKind {
    pub fn file_suffix(self) -> &'static str {
        match self {
            NameKind::Agent => "_agent",
            NameKind::Tool => "_tool",
        }
    }

    pub fn type_suffix(self) -> &'static str {
        match self {
            NameKind::Agent => "Agent",
            NameKind::Tool => "Tool",
        }
    }
}

/// A generator name split into module path, file name and type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Namespace directories, snake_case.
    pub class_path: Vec<String>,
    /// Name without the kind suffix, e.g. `customer_support`.
    pub base_name: String,
    /// File stem with exactly one suffix, e.g. `customer_support_agent`.
    pub file_name: String,
    /// Type name with exactly one suffix, e.g. `CustomerSupportAgent`.
    pub class_name: String,
}

impl NormalizedName {
    /// Normalize `input`. Namespaces may be separated by `/` or `::`.
    pub fn parse(input: &str, kind: NameKind) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SokaError::GeneratorError("name cannot be empty".to_string()));
        }

        let normalized = input.replace("::", "/");
        let mut segments = Vec::new();
        for segment in normalized.split('/') {
            if !SEGMENT_REGEX.is_match(segment) {
                return Err(SokaError::GeneratorError(format!(
                    "invalid name '{}': segment '{}' must start with a letter and contain only letters, digits, '_' or '-'",
                    input, segment
                )));
            }
            segments.push(underscore(segment));
        }

        let last = segments.pop().unwrap_or_default();

        // Namespaces become `pub mod` declarations.
        if let Some(keyword) = segments.iter().find(|segment| is_keyword(segment)) {
            return Err(SokaError::GeneratorError(format!(
                "invalid name '{}': namespace '{}' is a Rust keyword",
                input, keyword
            )));
        }

        let base_name = last
            .strip_suffix(kind.file_suffix())
            .unwrap_or(&last)
            .to_string();
        let file_name = format!("{}{}", base_name, kind.file_suffix());

        let camel = camelize(&last);
        let class_base = camel.strip_suffix(kind.type_suffix()).unwrap_or(&camel);
        let class_name = format!("{}{}", class_base, kind.type_suffix());

        Ok(Self {
            class_path: segments,
            base_name,
            file_name,
            class_name,
        })
    }

    /// Path of the generated file under `dir`, e.g.
    /// `{dir}/admin/customer_support_agent{suffix}.rs`.
    pub fn path_in(&self, dir: &Path, suffix: &str) -> PathBuf {
        let mut path = dir.to_path_buf();
        for segment in &self.class_path {
            path.push(segment);
        }
        path.push(format!("{}{}.rs", self.file_name, suffix));
        path
    }

    /// Fully qualified type name, e.g. `admin::CustomerSupportAgent`.
    pub fn qualified_name(&self) -> String {
        let mut parts = self.class_path.clone();
        parts.push(self.class_name.clone());
        parts.join("::")
    }

    /// Module path below the agents/tools directory, e.g.
    /// `admin::customer_support_agent`.
    pub fn module_path(&self) -> String {
        let mut parts = self.class_path.clone();
        parts.push(self.file_name.clone());
        parts.join("::")
    }

    /// `super::` repeated enough times to reach the agents/tools directory.
    pub fn super_prefix(&self) -> String {
        "super::".repeat(self.class_path.len() + 1)
    }
}

/// `CustomerSupport` → `customer_support`, `HTTPClient` → `http_client`.
pub fn underscore(word: &str) -> String {
    let word = ACRONYM_BOUNDARY.replace_all(word, "${1}_${2}");
    let word = WORD_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// `customer_support` → `CustomerSupport`.
pub fn camelize(word: &str) -> String {
    word.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("CustomerSupport"), "customer_support");
        assert_eq!(underscore("customer_support"), "customer_support");
        assert_eq!(underscore("HTTPClient"), "http_client");
        assert_eq!(underscore("weather-api"), "weather_api");
        assert_eq!(underscore("Api2Client"), "api2_client");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("customer_support"), "CustomerSupport");
        assert_eq!(camelize("weather_api_tool"), "WeatherApiTool");
        assert_eq!(camelize("a__b"), "AB");
    }

    #[test]
    fn test_agent_name_gets_suffix() {
        let name = NormalizedName::parse("customer_support", NameKind::Agent).unwrap();
        assert_eq!(name.file_name, "customer_support_agent");
        assert_eq!(name.class_name, "CustomerSupportAgent");
        assert_eq!(name.base_name, "customer_support");
        assert!(name.class_path.is_empty());
    }

    #[test]
    fn test_agent_suffix_is_not_duplicated() {
        for input in ["customer_support_agent", "CustomerSupportAgent", "CustomerSupport"] {
            let name = NormalizedName::parse(input, NameKind::Agent).unwrap();
            assert_eq!(name.file_name, "customer_support_agent", "input {}", input);
            assert_eq!(name.class_name, "CustomerSupportAgent", "input {}", input);
        }
    }

    #[test]
    fn test_tool_suffix_is_not_duplicated() {
        for input in ["weather_api", "weather_api_tool", "WeatherApiTool"] {
            let name = NormalizedName::parse(input, NameKind::Tool).unwrap();
            assert_eq!(name.file_name, "weather_api_tool", "input {}", input);
            assert_eq!(name.class_name, "WeatherApiTool", "input {}", input);
            assert_eq!(name.base_name, "weather_api", "input {}", input);
        }
    }

    #[test]
    fn test_suffix_only_stripped_at_end() {
        let name = NormalizedName::parse("agent_router", NameKind::Agent).unwrap();
        assert_eq!(name.file_name, "agent_router_agent");
        assert_eq!(name.class_name, "AgentRouterAgent");
    }

    #[test]
    fn test_namespaced_names() {
        let name = NormalizedName::parse("admin/customer_support", NameKind::Agent).unwrap();
        assert_eq!(name.class_path, vec!["admin".to_string()]);
        assert_eq!(name.qualified_name(), "admin::CustomerSupportAgent");
        assert_eq!(name.module_path(), "admin::customer_support_agent");
        assert_eq!(name.super_prefix(), "super::super::");
        assert_eq!(
            name.path_in(Path::new("app/soka/agents"), ""),
            Path::new("app/soka/agents/admin/customer_support_agent.rs")
        );

        let name = NormalizedName::parse("Billing::InvoiceLookup", NameKind::Tool).unwrap();
        assert_eq!(name.class_path, vec!["billing".to_string()]);
        assert_eq!(name.class_name, "InvoiceLookupTool");
    }

    #[test]
    fn test_path_in_with_suffix() {
        let name = NormalizedName::parse("weather", NameKind::Agent).unwrap();
        assert_eq!(
            name.path_in(Path::new("tests/soka/agents"), "_test"),
            Path::new("tests/soka/agents/weather_agent_test.rs")
        );
    }

    #[test]
    fn test_rejects_invalid_names() {
        assert!(NormalizedName::parse("", NameKind::Agent).is_err());
        assert!(NormalizedName::parse("   ", NameKind::Agent).is_err());
        assert!(NormalizedName::parse("1st_agent", NameKind::Agent).is_err());
        assert!(NormalizedName::parse("admin//x", NameKind::Agent).is_err());
        let err = NormalizedName::parse("bad name", NameKind::Tool).unwrap_err();
        assert!(err.to_string().contains("bad name"));
    }

    #[test]
    fn test_rejects_keyword_namespaces() {
        for input in ["admin/impl/support", "Type::Lookup", "self/support"] {
            let err = NormalizedName::parse(input, NameKind::Agent).unwrap_err();
            assert!(err.to_string().contains("is a Rust keyword"), "input {}", input);
        }

        // The leaf always gains a suffix, so a keyword there is fine.
        let name = NormalizedName::parse("admin/match", NameKind::Tool).unwrap();
        assert_eq!(name.file_name, "match_tool");
        assert_eq!(name.class_name, "MatchTool");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("city").as_deref(), Some("city"));
        assert_eq!(identifier("type").as_deref(), Some("r#type"));
        assert_eq!(identifier("gen").as_deref(), Some("r#gen"));
        assert_eq!(identifier("self"), None);
        assert_eq!(identifier("crate"), None);
        assert_eq!(identifier("_"), None);
    }
}
