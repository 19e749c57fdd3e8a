//! `soka generate tool NAME [name:type...]`

use super::naming::{NameKind, NormalizedName, camelize, identifier};
use super::output::{
    GeneratedFile, GeneratorOptions, register_in_tree, register_module, write_generated,
};
use super::template::{render_template, vars};
use super::templates;
use crate::context::ProjectContext;
use crate::error::{Result, SokaError};
use regex::Regex;
use std::sync::LazyLock;

static PARAM_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("Invalid param name regex"));

/// Parameter type used when none is given.
pub const DEFAULT_PARAM_TYPE: &str = "string";

/// One `name:type` tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolParam {
    pub name: String,
    /// Declared type, lowercase, e.g. `integer`.
    pub param_type: String,
}

impl ToolParam {
    /// Parse `name` or `name:type`. The type defaults to `string`.
    pub fn parse(input: &str) -> Result<Self> {
        let (name, param_type) = match input.split_once(':') {
            Some((name, param_type)) => (name.trim(), param_type.trim()),
            None => (input.trim(), ""),
        };

        if !PARAM_NAME_REGEX.is_match(name) {
            return Err(SokaError::GeneratorError(format!(
                "invalid parameter '{}': name must be snake_case",
                input
            )));
        }
        if identifier(name).is_none() {
            return Err(SokaError::GeneratorError(format!(
                "invalid parameter '{}': '{}' cannot be used as a Rust identifier",
                input, name
            )));
        }

        let param_type = if param_type.is_empty() {
            DEFAULT_PARAM_TYPE.to_string()
        } else {
            param_type.to_lowercase()
        };

        Ok(Self {
            name: name.to_string(),
            param_type,
        })
    }

    /// Name as a Rust binding; keywords become raw identifiers.
    pub fn ident(&self) -> String {
        identifier(&self.name).unwrap_or_else(|| self.name.clone())
    }

    /// Type as shown in the tool's parameter list, e.g. `Integer`.
    pub fn display_type(&self) -> String {
        camelize(&self.param_type)
    }

    /// Rust type the argument is deserialized into.
    pub fn rust_type(&self) -> &'static str {
        match self.param_type.as_str() {
            "string" | "text" => "String",
            "integer" | "int" => "i64",
            "float" | "number" | "decimal" => "f64",
            "boolean" | "bool" => "bool",
            "array" => "Vec<Value>",
            "hash" | "object" => "serde_json::Map<String, Value>",
            _ => "Value",
        }
    }

    /// JSON literal used in generated tests.
    fn sample_value(&self) -> &'static str {
        match self.rust_type() {
            "String" => "\"example\"",
            "i64" => "1",
            "f64" => "1.5",
            "bool" => "true",
            "Vec<Value>" => "[]",
            "serde_json::Map<String, Value>" => "{}",
            _ => "null",
        }
    }

    fn extract_line(&self) -> String {
        format!(
            "        let {ident}: {ty} = serde_json::from_value(args[\"{name}\"].clone()).map_err(|e| {{\n            \
             ToolError::InvalidParameters {{\n                \
             tool: Self::NAME.to_string(),\n                \
             errors: vec![format!(\"{name}: {{}}\", e)],\n            \
             }}\n        \
             }})?;\n",
            ident = self.ident(),
            name = self.name,
            ty = self.rust_type()
        )
    }
}

/// A normalized tool ready to render.
#[derive(Debug, Clone)]
pub struct ToolGenerator {
    name: NormalizedName,
    params: Vec<ToolParam>,
}

impl ToolGenerator {
    /// Normalize the tool name and parse its parameters. Duplicate parameter
    /// names are rejected.
    pub fn new(name: &str, params: &[String]) -> Result<Self> {
        let name = NormalizedName::parse(name, NameKind::Tool)?;

        let mut parsed: Vec<ToolParam> = Vec::new();
        for input in params {
            let param = ToolParam::parse(input)?;
            if parsed.iter().any(|p| p.name == param.name) {
                return Err(SokaError::GeneratorError(format!(
                    "duplicate parameter '{}'",
                    param.name
                )));
            }
            parsed.push(param);
        }

        Ok(Self {
            name,
            params: parsed,
        })
    }

    pub fn name(&self) -> &NormalizedName {
        &self.name
    }

    pub fn params(&self) -> &[ToolParam] {
        &self.params
    }

    /// Source of the tool file.
    pub fn render(&self) -> Result<String> {
        let params_list = self
            .params
            .iter()
            .map(|p| format!("({:?}, {:?})", p.name, p.display_type()))
            .collect::<Vec<_>>()
            .join(", ");
        let extract_args: String = self.params.iter().map(ToolParam::extract_line).collect();
        let call_names = self
            .params
            .iter()
            .map(ToolParam::ident)
            .collect::<Vec<_>>()
            .join(", ");
        let call_params: String = self
            .params
            .iter()
            .map(|p| format!(", {}: {}", p.ident(), p.rust_type()))
            .collect();
        let json_fields = self
            .params
            .iter()
            .map(|p| format!("{:?}: {}", p.name, p.ident()))
            .collect::<Vec<_>>()
            .join(", ");

        let vars = vars([
            ("class_name", self.name.class_name.clone()),
            ("base_name", self.name.base_name.clone()),
            ("super_prefix", self.name.super_prefix()),
            ("params_list", params_list),
            ("extract_args", extract_args),
            ("call_names", call_names),
            ("call_params", call_params),
            ("json_fields", json_fields),
        ]);
        Ok(render_template(templates::TOOL, &vars)?)
    }

    /// Source of the tool's test file.
    pub fn render_test(&self) -> Result<String> {
        let sample_args = self
            .params
            .iter()
            .map(|p| format!("{:?}: {}", p.name, p.sample_value()))
            .collect::<Vec<_>>()
            .join(", ");

        let vars = vars([
            ("class_name", self.name.class_name.clone()),
            ("file_name", self.name.file_name.clone()),
            ("base_name", self.name.base_name.clone()),
            ("sample_args", sample_args),
        ]);
        Ok(render_template(templates::TOOL_TEST, &vars)?)
    }

    /// Write the tool, and its test when the project has a test harness.
    pub fn generate(
        &self,
        ctx: &ProjectContext,
        options: GeneratorOptions,
    ) -> Result<Vec<GeneratedFile>> {
        let mut generated = Vec::new();

        let path = self.name.path_in(&ctx.tools_dir, "");
        generated.push(write_generated(ctx, &path, &self.render()?, options)?);
        generated.extend(register_in_tree(
            ctx,
            &ctx.tools_dir.join("mod.rs"),
            &ctx.tools_dir,
            &self.name.class_path,
            &self.name.file_name,
            templates::TOOLS_MOD,
        )?);

        if ctx.has_test_harness() && !options.skip_tests {
            let tests_dir = ctx.tool_tests_dir();
            let test_path = self.name.path_in(&tests_dir, "_test");
            generated.push(write_generated(ctx, &test_path, &self.render_test()?, options)?);
            generated.extend(register_module(
                ctx,
                &ctx.tests_main(),
                "tools",
                templates::TESTS_MOD,
            )?);
            generated.extend(register_in_tree(
                ctx,
                &tests_dir.join("mod.rs"),
                &tests_dir,
                &self.name.class_path,
                &format!("{}_test", self.name.file_name),
                "",
            )?);
        }

        tracing::debug!(
            tool = %self.name.qualified_name(),
            params = self.params.len(),
            "tool generated"
        );
        Ok(generated)
    }
}

/// Generate tool `name` with `name:type` parameters.
pub fn generate_tool(
    ctx: &ProjectContext,
    name: &str,
    params: &[String],
    options: GeneratorOptions,
) -> Result<Vec<GeneratedFile>> {
    ToolGenerator::new(name, params)?.generate(ctx, options)
}
