//! Brief classification: one LLM call, hard local fallback.

use tracing::{debug, warn};

use crate::catalog::Category;
use crate::generation::prompts::classification_prompt;
use crate::llm_client::TextGenerator;

/// Classifies a brief into a `Category`. This function never fails:
/// without a configured generator it returns `Category::Default`
/// immediately, and any call failure maps to `Category::Default` as well.
/// There is no retry: the fallback IS the failure handling.
pub async fn classify_project(
    generator: Option<&dyn TextGenerator>,
    short_description: &str,
) -> Category {
    let Some(generator) = generator else {
        debug!("no text-generation credential configured, using default classification");
        return Category::Default;
    };

    let prompt = classification_prompt(short_description);
    match generator.generate(&prompt).await {
        Ok(reply) => {
            let category = Category::parse(&reply);
            debug!("classified brief as {}", category.key());
            category
        }
        Err(e) => {
            warn!("classification call failed, falling back to default: {e}");
            Category::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FixedReply(&'static str);

    #[async_trait]
    impl TextGenerator for FixedReply {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl TextGenerator for AlwaysFails {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_no_generator_yields_default() {
        assert_eq!(classify_project(None, "anything").await, Category::Default);
    }

    #[tokio::test]
    async fn test_valid_reply_is_parsed() {
        let generator = FixedReply("bakery");
        assert_eq!(
            classify_project(Some(&generator), "a small bakery").await,
            Category::Bakery
        );
    }

    #[tokio::test]
    async fn test_chatty_reply_falls_back_to_default() {
        let generator = FixedReply("This looks like a bakery to me!");
        assert_eq!(
            classify_project(Some(&generator), "a small bakery").await,
            Category::Default
        );
    }

    #[tokio::test]
    async fn test_call_failure_falls_back_to_default() {
        let generator = AlwaysFails;
        assert_eq!(
            classify_project(Some(&generator), "a small bakery").await,
            Category::Default
        );
    }
}
