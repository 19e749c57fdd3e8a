//! Tests for the generators.

use super::*;
use crate::config::{ConfigFile, Configuration, Provider, TimeoutValue};
use crate::test_support::{create_test_project, create_test_project_with_tests, env_vars, read};
use std::path::Path;

fn actions(generated: &[GeneratedFile]) -> Vec<(FileAction, String)> {
    generated
        .iter()
        .map(|g| (g.action, g.path.to_string_lossy().into_owned()))
        .collect()
}

fn action_for(generated: &[GeneratedFile], path: &str) -> Option<FileAction> {
    generated
        .iter()
        .find(|g| g.path == Path::new(path))
        .map(|g| g.action)
}

// ============================================================================
// install
// ============================================================================

#[test]
fn test_install_creates_layout() {
    let (_temp_dir, ctx) = create_test_project();

    let generated = generate_install(&ctx, GeneratorOptions::default()).unwrap();

    assert!(ctx.config_path.is_file());
    assert!(ctx.agents_dir.is_dir());
    assert!(ctx.tools_dir.is_dir());
    assert!(ctx.agents_dir.join("application_agent.rs").is_file());
    assert!(ctx.tools_dir.join("application_tool.rs").is_file());

    assert_eq!(action_for(&generated, "config/soka.yaml"), Some(FileAction::Create));
    assert_eq!(action_for(&generated, "app/soka/agents"), Some(FileAction::Create));
    assert_eq!(
        action_for(&generated, "app/soka/agents/application_agent.rs"),
        Some(FileAction::Create)
    );
    assert_eq!(
        action_for(&generated, "app/soka/tools/application_tool.rs"),
        Some(FileAction::Create)
    );

    let agents_mod = read(&ctx, "app/soka/agents/mod.rs");
    assert!(agents_mod.contains("pub mod application_agent;"));
    let tools_mod = read(&ctx, "app/soka/tools/mod.rs");
    assert!(tools_mod.contains("pub mod application_tool;"));
    let root_mod = read(&ctx, "app/soka/mod.rs");
    assert!(root_mod.contains("pub mod agents;"));
    assert!(root_mod.contains("pub mod tools;"));
}

#[test]
fn test_installed_config_file_loads() {
    let (_temp_dir, ctx) = create_test_project();
    generate_install(&ctx, GeneratorOptions::default()).unwrap();

    let file = ConfigFile::load(&ctx.config_path).unwrap();
    let ai = file.ai.clone().unwrap();
    assert_eq!(ai.provider, Some(Provider::Gemini));
    assert_eq!(ai.model.as_deref(), Some("gemini-2.5-flash-lite"));
    assert_eq!(ai.api_key_env.as_deref(), Some("GEMINI_API_KEY"));

    let performance = file.performance.clone().unwrap();
    assert_eq!(performance.max_iterations, None);
    assert_eq!(performance.timeout, Some(TimeoutValue::Seconds(30)));

    let env = env_vars([("GEMINI_API_KEY", "gm-key")]);
    let mut config = Configuration::from_lookup(&env);
    config.apply_file(&file, &env).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("gm-key"));
    assert_eq!(config.timeout, Some(30));
}

#[test]
fn test_install_rerun_is_identical() {
    let (_temp_dir, ctx) = create_test_project();
    generate_install(&ctx, GeneratorOptions::default()).unwrap();

    let generated = generate_install(&ctx, GeneratorOptions::default()).unwrap();

    for (action, path) in actions(&generated) {
        assert!(
            matches!(action, FileAction::Identical | FileAction::Exist),
            "{} reported {}",
            path,
            action
        );
    }
}

#[test]
fn test_install_keeps_edited_config_unless_forced() {
    let (_temp_dir, ctx) = create_test_project();
    generate_install(&ctx, GeneratorOptions::default()).unwrap();
    std::fs::write(&ctx.config_path, "ai:\n  provider: openai\n").unwrap();

    let generated = generate_install(&ctx, GeneratorOptions::default()).unwrap();
    assert_eq!(action_for(&generated, "config/soka.yaml"), Some(FileAction::Skip));
    assert_eq!(read(&ctx, "config/soka.yaml"), "ai:\n  provider: openai\n");

    let forced = GeneratorOptions {
        force: true,
        ..GeneratorOptions::default()
    };
    let generated = generate_install(&ctx, forced).unwrap();
    assert_eq!(action_for(&generated, "config/soka.yaml"), Some(FileAction::Force));
    assert!(read(&ctx, "config/soka.yaml").contains("api_key_env: GEMINI_API_KEY"));
}

#[test]
fn test_post_install_message_names_provider_keys() {
    for key in ["GEMINI_API_KEY", "OPENAI_API_KEY", "ANTHROPIC_API_KEY"] {
        assert!(POST_INSTALL_MESSAGE.contains(key), "missing {}", key);
    }
    assert!(POST_INSTALL_MESSAGE.starts_with("Soka has been successfully installed!"));
}

// ============================================================================
// agent
// ============================================================================

#[test]
fn test_generate_agent_appends_suffix() {
    let (_temp_dir, ctx) = create_test_project();

    let generated =
        generate_agent(&ctx, "customer_support", &[], GeneratorOptions::default()).unwrap();

    let path = "app/soka/agents/customer_support_agent.rs";
    assert_eq!(action_for(&generated, path), Some(FileAction::Create));
    let source = read(&ctx, path);
    assert!(source.contains("pub struct CustomerSupportAgent;"));
    assert!(source.contains("use super::application_agent::ApplicationAgent;"));
    assert!(source.contains("pub const TOOLS: &[&str] = &[];"));
}

#[test]
fn test_generate_agent_does_not_double_suffix() {
    let (_temp_dir, ctx) = create_test_project();

    generate_agent(&ctx, "customer_support_agent", &[], GeneratorOptions::default()).unwrap();

    assert!(ctx.agents_dir.join("customer_support_agent.rs").is_file());
    assert!(!ctx.agents_dir.join("customer_support_agent_agent.rs").exists());
    let source = read(&ctx, "app/soka/agents/customer_support_agent.rs");
    assert!(source.contains("pub struct CustomerSupportAgent;"));
    assert!(!source.contains("AgentAgent"));
}

#[test]
fn test_generate_agent_lists_tools() {
    let (_temp_dir, ctx) = create_test_project();
    let tools = vec![
        "weather_api".to_string(),
        "LocationApiTool".to_string(),
        "weather_api_tool".to_string(),
    ];

    generate_agent(&ctx, "Weather", &tools, GeneratorOptions::default()).unwrap();

    let source = read(&ctx, "app/soka/agents/weather_agent.rs");
    assert!(source.contains("pub const TOOLS: &[&str] = &[\"weather_api\", \"location_api\"];"));
}

#[test]
fn test_generate_agent_registers_module() {
    let (_temp_dir, ctx) = create_test_project();
    generate_install(&ctx, GeneratorOptions::default()).unwrap();

    let generated = generate_agent(&ctx, "support", &[], GeneratorOptions::default()).unwrap();
    assert_eq!(
        action_for(&generated, "app/soka/agents/mod.rs"),
        Some(FileAction::Append)
    );

    let agents_mod = read(&ctx, "app/soka/agents/mod.rs");
    assert!(agents_mod.contains("pub mod application_agent;\npub mod support_agent;\n"));

    // A rerun does not declare the module twice.
    let generated = generate_agent(&ctx, "support", &[], GeneratorOptions::default()).unwrap();
    assert_eq!(action_for(&generated, "app/soka/agents/mod.rs"), None);
    assert_eq!(
        action_for(&generated, "app/soka/agents/support_agent.rs"),
        Some(FileAction::Identical)
    );
    let agents_mod = read(&ctx, "app/soka/agents/mod.rs");
    assert_eq!(agents_mod.matches("pub mod support_agent;").count(), 1);
}

#[test]
fn test_generate_namespaced_agent() {
    let (_temp_dir, ctx) = create_test_project();

    generate_agent(&ctx, "admin/customer_support", &[], GeneratorOptions::default()).unwrap();

    let source = read(&ctx, "app/soka/agents/admin/customer_support_agent.rs");
    assert!(source.contains("use super::super::application_agent::ApplicationAgent;"));
    assert!(read(&ctx, "app/soka/agents/mod.rs").contains("pub mod admin;"));
    assert!(
        read(&ctx, "app/soka/agents/admin/mod.rs").contains("pub mod customer_support_agent;")
    );
}

#[test]
fn test_generate_agent_skips_tests_without_harness() {
    let (_temp_dir, ctx) = create_test_project();

    let generated = generate_agent(&ctx, "support", &[], GeneratorOptions::default()).unwrap();

    assert!(!ctx.tests_dir.exists());
    assert!(generated.iter().all(|g| !g.path.starts_with("tests")));
}

#[test]
fn test_generate_agent_writes_test_with_harness() {
    let (_temp_dir, ctx) = create_test_project_with_tests();

    let generated = generate_agent(&ctx, "support", &[], GeneratorOptions::default()).unwrap();

    let test_path = "tests/soka/agents/support_agent_test.rs";
    assert_eq!(action_for(&generated, test_path), Some(FileAction::Create));
    let source = read(&ctx, test_path);
    assert!(source.contains("fn support_agent_receives_configuration()"));
    assert!(source.contains("use crate::app::agents::support_agent::SupportAgent;"));
    assert!(source.contains("let class = SupportAgent::define(Some(&config));"));

    let main = read(&ctx, "tests/soka/main.rs");
    assert!(main.contains("#[path = \"../../app/soka/mod.rs\"]\nmod app;"));
    assert!(main.contains("pub mod agents;"));
    assert!(read(&ctx, "tests/soka/agents/mod.rs").contains("pub mod support_agent_test;"));
}

#[test]
fn test_generate_namespaced_agent_test_uses_generated_type() {
    let (_temp_dir, ctx) = create_test_project_with_tests();

    generate_agent(&ctx, "admin/support", &[], GeneratorOptions::default()).unwrap();

    let source = read(&ctx, "tests/soka/agents/admin/support_agent_test.rs");
    assert!(source.contains("use crate::app::agents::admin::support_agent::SupportAgent;"));
}

#[test]
fn test_generate_agent_rejects_keyword_namespace() {
    let (_temp_dir, ctx) = create_test_project();

    let err = generate_agent(&ctx, "impl/support", &[], GeneratorOptions::default()).unwrap_err();

    assert!(err.to_string().contains("namespace 'impl' is a Rust keyword"));
    assert!(!ctx.agents_dir.exists());
}

#[test]
fn test_generate_agent_skip_tests_option() {
    let (_temp_dir, ctx) = create_test_project_with_tests();
    let options = GeneratorOptions {
        skip_tests: true,
        ..GeneratorOptions::default()
    };

    generate_agent(&ctx, "support", &[], options).unwrap();

    assert!(!ctx.agent_tests_dir().exists());
    assert!(!ctx.tests_main().exists());
}

#[test]
fn test_generate_agent_force_overwrites() {
    let (_temp_dir, ctx) = create_test_project();
    let path = ctx.agents_dir.join("support_agent.rs");
    generate_agent(&ctx, "support", &[], GeneratorOptions::default()).unwrap();
    std::fs::write(&path, "// edited\n").unwrap();

    let generated = generate_agent(&ctx, "support", &[], GeneratorOptions::default()).unwrap();
    assert_eq!(
        action_for(&generated, "app/soka/agents/support_agent.rs"),
        Some(FileAction::Skip)
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "// edited\n");

    let forced = GeneratorOptions {
        force: true,
        ..GeneratorOptions::default()
    };
    generate_agent(&ctx, "support", &[], forced).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("pub struct SupportAgent;"));
}

#[test]
fn test_generate_agent_rejects_invalid_name() {
    let (_temp_dir, ctx) = create_test_project();

    let err = generate_agent(&ctx, "9lives", &[], GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, crate::error::SokaError::GeneratorError(_)));
    assert!(!ctx.agents_dir.exists());
}

// ============================================================================
// tool
// ============================================================================

#[test]
fn test_generate_tool_with_params() {
    let (_temp_dir, ctx) = create_test_project_with_tests();
    let params = vec!["city:string".to_string(), "units".to_string()];

    let generated =
        generate_tool(&ctx, "WeatherApiTool", &params, GeneratorOptions::default()).unwrap();

    let path = "app/soka/tools/weather_api_tool.rs";
    assert_eq!(action_for(&generated, path), Some(FileAction::Create));
    let source = read(&ctx, path);
    assert!(source.contains("pub struct WeatherApiTool;"));
    assert!(source.contains("&[(\"city\", \"String\"), (\"units\", \"String\")]"));

    let test_source = read(&ctx, "tests/soka/tools/weather_api_tool_test.rs");
    assert!(test_source.contains("fn weather_api_tool_mocked_execution()"));
    assert!(read(&ctx, "tests/soka/main.rs").contains("pub mod tools;"));
    assert!(read(&ctx, "app/soka/tools/mod.rs").contains("pub mod weather_api_tool;"));
}

#[test]
fn test_generate_tool_does_not_double_suffix() {
    let (_temp_dir, ctx) = create_test_project();

    generate_tool(&ctx, "weather_api_tool", &[], GeneratorOptions::default()).unwrap();

    assert!(ctx.tools_dir.join("weather_api_tool.rs").is_file());
    assert!(!ctx.tools_dir.join("weather_api_tool_tool.rs").exists());
}

#[test]
fn test_agent_and_tool_share_test_root() {
    let (_temp_dir, ctx) = create_test_project_with_tests();

    generate_agent(&ctx, "support", &[], GeneratorOptions::default()).unwrap();
    generate_tool(&ctx, "lookup", &[], GeneratorOptions::default()).unwrap();

    let main = read(&ctx, "tests/soka/main.rs");
    assert!(main.contains("pub mod agents;\npub mod tools;\n"));
}

#[test]
fn test_generate_tool_rejects_bad_param() {
    let (_temp_dir, ctx) = create_test_project();
    let params = vec!["Bad Param".to_string()];

    assert!(generate_tool(&ctx, "lookup", &params, GeneratorOptions::default()).is_err());
    assert!(!ctx.tools_dir.exists());
}
