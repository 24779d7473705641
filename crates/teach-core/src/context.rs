//! Workspace context supplied by editor integrations
//!
//! The context is produced outside this crate. It is only read for string
//! interpolation, so every field is optional and malformed fields are
//! dropped instead of failing the request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of dependencies written into a prompt
pub const MAX_PROMPT_DEPS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deps: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_monorepo: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_hints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_framework: Option<String>,
}

impl WorkspaceContext {
    /// Build a context from arbitrary JSON, keeping only well-typed fields.
    ///
    /// A JSON string holding an encoded object is accepted too, since prompt
    /// arguments travel as strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        let decoded;
        let value = match value {
            Value::String(s) => {
                decoded = serde_json::from_str::<Value>(s).ok()?;
                &decoded
            }
            other => other,
        };
        let obj = value.as_object()?;

        let repo = obj.get("repo").and_then(Value::as_object).map(|repo| RepoContext {
            root_name: string_field(repo.get("rootName")),
            git_branch: string_field(repo.get("gitBranch")),
            is_monorepo: repo.get("isMonorepo").and_then(Value::as_bool),
        });

        let project = obj
            .get("project")
            .and_then(Value::as_object)
            .map(|project| ProjectContext {
                project_type: string_field(project.get("type")),
                manifest_path: string_field(project.get("manifestPath")),
                framework_hints: string_list(project.get("frameworkHints")),
                test_framework: string_field(project.get("testFramework")),
            });

        let deps = string_list(obj.get("deps"));

        Some(Self {
            repo,
            project,
            deps,
        })
    }

    /// Context header lines, one per present field
    pub fn header_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(root) = self.repo.as_ref().and_then(|r| r.root_name.as_deref()) {
            let mut line = format!("Project: {}", root);
            if let Some(branch) = self.repo.as_ref().and_then(|r| r.git_branch.as_deref()) {
                line.push_str(&format!(" ({} branch)", branch));
            }
            if self.repo.as_ref().and_then(|r| r.is_monorepo) == Some(true) {
                line.push_str(" [monorepo]");
            }
            lines.push(line);
        }

        if let Some(project) = &self.project {
            if let Some(kind) = project.project_type.as_deref() {
                lines.push(format!("Project Type: {}", kind));
            }
            if let Some(frameworks) = non_empty(project.framework_hints.as_deref()) {
                lines.push(format!("Frameworks: {}", frameworks.join(", ")));
            }
            if let Some(testing) = project.test_framework.as_deref() {
                lines.push(format!("Testing: {}", testing));
            }
        }

        if let Some(deps) = non_empty(self.deps.as_deref()) {
            let shown: Vec<&str> = deps
                .iter()
                .take(MAX_PROMPT_DEPS)
                .map(String::as_str)
                .collect();
            lines.push(format!("Key Dependencies: {}", shown.join(", ")));
        }

        lines
    }

    /// Qualifier phrase appended after the language name in a prompt,
    /// e.g. `" in a node project using react, express"`.
    pub fn project_qualifier(&self) -> String {
        let mut qualifier = String::new();
        let Some(project) = &self.project else {
            return qualifier;
        };

        if let Some(kind) = project.project_type.as_deref().filter(|k| *k != "unknown") {
            qualifier.push_str(&format!(" in a {} project", kind));
        }
        if let Some(frameworks) = non_empty(project.framework_hints.as_deref()) {
            qualifier.push_str(&format!(" using {}", frameworks.join(", ")));
        }

        qualifier
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
    )
}

fn non_empty(list: Option<&[String]>) -> Option<&[String]> {
    list.filter(|l| !l.is_empty())
}
