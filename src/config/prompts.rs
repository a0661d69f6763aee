//! Prompt templates for ytgist.
//!
//! The summary prompt can be customized by placing a `summary.toml` file in the
//! custom prompts directory.

use super::Settings;
use crate::error::YtgistError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder replaced by the full transcript.
const TRANSCRIPT_VAR: &str = "{{transcript}}";

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Prompts {
    pub summary: SummaryPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompt for transcript summarization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryPrompts {
    pub template: String,
}

impl Default for SummaryPrompts {
    fn default() -> Self {
        Self {
            template: r#"Create a clear summary of this transcript in bullet points.
- Use simple bullet points
- Each main point should be a level-1 bullet point
- Sub-points should use level-2 bullet points
- Keep language clear and concise
- Don't use any special formatting (bold, italic, etc.)

Transcript:
{{transcript}}"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = Settings::expand_path(dir);

            let summary_path = custom_path.join("summary.toml");
            if summary_path.exists() {
                let content = std::fs::read_to_string(&summary_path)?;
                let summary: SummaryPrompts = toml::from_str(&content)?;
                if !summary.template.contains(TRANSCRIPT_VAR) {
                    return Err(YtgistError::Config(format!(
                        "{} must contain the {} placeholder",
                        summary_path.display(),
                        TRANSCRIPT_VAR
                    )));
                }
                prompts.summary = summary;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Build the summarization prompt with the transcript embedded verbatim.
    ///
    /// Custom variables are substituted first so that placeholder-looking text
    /// inside the transcript is never rewritten.
    pub fn summary_prompt(&self, transcript: &str) -> String {
        Self::render(&self.summary.template, &self.variables).replace(TRANSCRIPT_VAR, transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompt_embeds_transcript() {
        let prompts = Prompts::default();
        let prompt = prompts.summary_prompt("we talked about rust lifetimes");

        assert!(prompt.contains("bullet points"));
        assert!(prompt.contains("level-2"));
        assert!(prompt.contains("bold, italic"));
        assert!(prompt.ends_with("we talked about rust lifetimes"));
        assert!(!prompt.contains(TRANSCRIPT_VAR));
    }

    #[test]
    fn render_template() {
        let template = "Hello {{name}}, you have {{count}} messages.";
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("count".to_string(), "5".to_string());

        assert_eq!(Prompts::render(template, &vars), "Hello Alice, you have 5 messages.");
    }

    #[test]
    fn transcript_placeholders_are_left_alone() {
        let mut prompts = Prompts::default();
        prompts.summary.template = "Audience: {{audience}}\n{{transcript}}".to_string();
        prompts
            .variables
            .insert("audience".to_string(), "engineers".to_string());

        let prompt = prompts.summary_prompt("say {{audience}} twice");
        assert_eq!(prompt, "Audience: engineers\nsay {{audience}} twice");
    }

    #[test]
    fn custom_dir_overrides_summary_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("summary.toml"),
            "template = \"Summarize briefly: {{transcript}}\"\n",
        )
        .unwrap();

        let prompts = Prompts::load(dir.path().to_str(), None).unwrap();
        assert_eq!(prompts.summary_prompt("abc"), "Summarize briefly: abc");
    }

    #[test]
    fn custom_template_without_transcript_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("summary.toml"),
            "template = \"Summarize this video.\"\n",
        )
        .unwrap();

        match Prompts::load(dir.path().to_str(), None) {
            Err(YtgistError::Config(msg)) => assert!(msg.contains(TRANSCRIPT_VAR)),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(prompts) => panic!(
                "template accepted, prompt was: {}",
                prompts.summary_prompt("full transcript text")
            ),
        }
    }
}
