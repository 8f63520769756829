//! Wire DTOs for the analysis backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (snake_case). Optional sections are
//! tolerant: a missing key and an explicit `null` both decode to the empty
//! value so rendering code only has to check one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/analyze`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub repo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extensions: Option<Vec<String>>,
}

/// Result of a repository analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub repo_name: String,
    pub total_files: u64,
    /// Mermaid source for the architecture diagram.
    pub mermaid_graph: String,
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files_analyzed: Vec<String>,
    #[serde(default)]
    pub tech_stack: Option<TechStack>,
    #[serde(default)]
    pub tech_stack_analysis: Option<String>,
    #[serde(default)]
    pub repo_summary: Option<String>,
}

impl AnalyzeResponse {
    /// Repository overview text, if the backend sent a non-blank one.
    #[must_use]
    pub fn overview(&self) -> Option<&str> {
        non_blank(self.repo_summary.as_deref())
    }

    /// Tech-stack commentary, if the backend sent a non-blank one.
    #[must_use]
    pub fn tech_commentary(&self) -> Option<&str> {
        non_blank(self.tech_stack_analysis.as_deref())
    }

    /// Tech stack classification, if any category has entries.
    #[must_use]
    pub fn visible_tech_stack(&self) -> Option<&TechStack> {
        self.tech_stack.as_ref().filter(|stack| !stack.is_empty())
    }
}

/// Language / framework / tool classification of a repository.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frameworks: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools: Vec<String>,
}

impl TechStack {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.frameworks.is_empty() && self.tools.is_empty()
    }

    /// Category label and entries, in display order.
    #[must_use]
    pub fn categories(&self) -> [(&'static str, &[String]); 3] {
        [
            ("Languages", self.languages.as_slice()),
            ("Frameworks", self.frameworks.as_slice()),
            ("Tools", self.tools.as_slice()),
        ]
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub repo_url: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Answer to a chat question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevant_files: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code_snippets: Vec<CodeSnippet>,
}

/// A code excerpt the backend cites in an answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    #[serde(default)]
    pub file: String,
    /// Line range as free text, e.g. `"10-24"`.
    #[serde(default, deserialize_with = "string_or_number")]
    pub lines: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub explanation: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The model sometimes answers `"lines": 12` instead of `"12"`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
