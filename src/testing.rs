//! Helpers for testing agents and tools without a live model.
//!
//! Mocked model output uses the ReAct text format the agent runtime parses:
//! one `<Thought>...</Thought>` line per reasoning step followed by a
//! `<Final_Answer>...</Final_Answer>` line.

use crate::config::{ConfigStore, Configuration, Provider};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Thought used when a mock response declares none.
pub const DEFAULT_THOUGHT: &str = "Analyzing the request";

/// Outcome of an agent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    #[default]
    Completed,
    Failed,
    MaxIterationsReached,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultStatus::Completed => "completed",
            ResultStatus::Failed => "failed",
            ResultStatus::MaxIterationsReached => "max_iterations_reached",
        };
        f.write_str(s)
    }
}

/// A scripted model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockResponse {
    pub final_answer: String,
    pub status: ResultStatus,
    pub iterations: u32,
    pub thought_process: Vec<String>,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self {
            final_answer: "Mocked answer".to_string(),
            status: ResultStatus::Completed,
            iterations: 1,
            thought_process: Vec::new(),
        }
    }
}

impl MockResponse {
    pub fn with_final_answer(mut self, answer: impl Into<String>) -> Self {
        self.final_answer = answer.into();
        self
    }

    pub fn with_thoughts<I, S>(mut self, thoughts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.thought_process = thoughts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: ResultStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Render `response` as ReAct text.
///
/// ```
/// use soka_kit::testing::{MockResponse, build_react_response};
///
/// let text = build_react_response(&MockResponse::default());
/// assert_eq!(
///     text,
///     "<Thought>Analyzing the request</Thought>\n<Final_Answer>Mocked answer</Final_Answer>"
/// );
/// ```
pub fn build_react_response(response: &MockResponse) -> String {
    let mut out = if response.thought_process.is_empty() {
        format!("<Thought>{}</Thought>", DEFAULT_THOUGHT)
    } else {
        response
            .thought_process
            .iter()
            .map(|thought| format!("<Thought>{}</Thought>", thought))
            .collect::<Vec<_>>()
            .join("\n")
    };
    out.push_str(&format!(
        "\n<Final_Answer>{}</Final_Answer>",
        response.final_answer
    ));
    out
}

/// A model stand-in that answers every prompt with the same ReAct text.
#[derive(Debug)]
pub struct MockLlm {
    content: String,
    calls: AtomicUsize,
}

impl MockLlm {
    pub fn new(response: &MockResponse) -> Self {
        Self {
            content: build_react_response(response),
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer a prompt.
    pub fn chat(&self, _prompt: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.content.clone()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::new(&MockResponse::default())
    }
}

/// A tool stand-in that returns a fixed result and records its arguments.
#[derive(Debug)]
pub struct MockTool {
    result: Value,
    calls: AtomicUsize,
    last_args: Mutex<Option<Value>>,
}

impl MockTool {
    pub fn returning(result: Value) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_args: Mutex::new(None),
        }
    }

    pub fn call(&self, args: &Value) -> Value {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_args
            .lock()
            .unwrap_or_else(|poison| poison.into_inner()) = Some(args.clone());
        self.result.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_args(&self) -> Option<Value> {
        self.last_args
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

/// The result shape an agent run reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    pub status: ResultStatus,
    pub final_answer: String,
    pub iterations: u32,
}

impl AgentResult {
    pub fn is_successful(&self) -> bool {
        self.status == ResultStatus::Completed
    }
}

impl From<&MockResponse> for AgentResult {
    fn from(response: &MockResponse) -> Self {
        Self {
            status: response.status,
            final_answer: response.final_answer.clone(),
            iterations: response.iterations,
        }
    }
}

/// A completed result answering `Success` after one iteration.
pub fn successful_result() -> AgentResult {
    AgentResult {
        status: ResultStatus::Completed,
        final_answer: "Success".to_string(),
        iterations: 1,
    }
}

/// Run `body` with `store` switched to test settings.
///
/// The provider becomes `mock`, `max_iterations` 3 and `timeout` 5, then
/// `overrides` runs. The previous configuration is restored afterwards, also
/// when `body` panics.
pub fn with_test_configuration<O, B, R>(
    store: &ConfigStore,
    overrides: O,
    body: B,
) -> Result<R, ConfigurationError>
where
    O: FnOnce(&mut Configuration) -> Result<(), ConfigurationError>,
    B: FnOnce() -> R,
{
    let _restore = store.scoped();

    store.configure(|config| {
        config.provider = Some(Provider::Mock);
        config.max_iterations = Some(3);
        config.timeout = Some(5);
        overrides(config)
    })?;

    Ok(body())
}

/// Collect every event `run` emits through its callback.
pub fn collect_events<E, F>(run: F) -> Vec<E>
where
    F: FnOnce(&mut dyn FnMut(E)),
{
    let mut events = Vec::new();
    run(&mut |event| events.push(event));
    events
}
