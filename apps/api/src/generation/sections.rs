//! Section authoring: one independent generation call per section title.
//!
//! Failures are isolated per section: a failed call substitutes an error
//! marker for that section only and never aborts the batch. With no
//! generator configured every section gets deterministic placeholder text
//! and no call is attempted.

use tracing::warn;

use crate::generation::prompts::section_prompt;
use crate::llm_client::TextGenerator;
use crate::models::brief::ProjectBrief;

/// Outcome of authoring one section. Failures keep their reason so the
/// document assembler can render it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Generated(String),
    Placeholder(String),
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    /// The text that ends up in the document. A failed section renders an
    /// identifiable error marker followed by the reason.
    pub fn body_text(&self) -> String {
        match &self.body {
            SectionBody::Generated(text) | SectionBody::Placeholder(text) => text.clone(),
            SectionBody::Failed { reason } => {
                format!("[Error generating section: {}]\n\n{}", self.title, reason)
            }
        }
    }
}

fn placeholder_text(title: &str, brief: &ProjectBrief) -> String {
    format!(
        "[Auto-generated section: {title}]\n\nProject: {}\nDescription: {}",
        brief.title, brief.short_description
    )
}

/// Authors every section in template order. Calls are sequential; each
/// write target is distinct so ordering carries no semantics.
pub async fn author_sections(
    generator: Option<&dyn TextGenerator>,
    titles: &[&str],
    brief: &ProjectBrief,
) -> Vec<Section> {
    let Some(generator) = generator else {
        return titles
            .iter()
            .map(|title| Section {
                title: title.to_string(),
                body: SectionBody::Placeholder(placeholder_text(title, brief)),
            })
            .collect();
    };

    let mut sections = Vec::with_capacity(titles.len());
    for title in titles {
        let prompt = section_prompt(title, brief);
        let body = match generator.generate(&prompt).await {
            Ok(text) => SectionBody::Generated(text),
            Err(e) => {
                warn!("section '{title}' generation failed: {e}");
                SectionBody::Failed {
                    reason: e.to_string(),
                }
            }
        };
        sections.push(Section {
            title: title.to_string(),
            body,
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    fn brief() -> ProjectBrief {
        ProjectBrief {
            title: "T".to_string(),
            short_description: "D".to_string(),
            location: None,
            capacity: None,
            currency: "INR".to_string(),
            additional: None,
        }
    }

    /// Echoes the prompt back unless it mentions the poisoned title.
    struct FailOn(&'static str);

    #[async_trait]
    impl TextGenerator for FailOn {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            if prompt.contains(self.0) {
                Err(LlmError::Api {
                    status: 500,
                    message: "upstream exploded".to_string(),
                })
            } else {
                Ok(format!("narrative for: {prompt}"))
            }
        }
    }

    #[tokio::test]
    async fn test_placeholders_without_generator() {
        let titles = ["Executive Summary", "Market Analysis"];
        let sections = author_sections(None, &titles, &brief()).await;
        assert_eq!(sections.len(), 2);
        for section in &sections {
            let text = section.body_text();
            assert!(!text.is_empty());
            assert!(text.contains("[Auto-generated section:"));
            assert!(text.contains("Project: T"));
        }
    }

    #[tokio::test]
    async fn test_single_failure_is_isolated() {
        let titles = ["Executive Summary", "Market Analysis", "Annexures"];
        let generator = FailOn("Market Analysis");
        let sections = author_sections(Some(&generator), &titles, &brief()).await;

        assert_eq!(sections.len(), 3);
        assert!(matches!(sections[0].body, SectionBody::Generated(_)));
        assert!(matches!(sections[2].body, SectionBody::Generated(_)));

        let failed = &sections[1];
        assert!(matches!(failed.body, SectionBody::Failed { .. }));
        let text = failed.body_text();
        assert!(text.contains("[Error generating section: Market Analysis]"));
        assert!(text.contains("upstream exploded"));
    }

    #[tokio::test]
    async fn test_order_follows_template() {
        let titles = ["B", "A", "C"];
        let sections = author_sections(None, &titles, &brief()).await;
        let got: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(got, titles);
    }
}
