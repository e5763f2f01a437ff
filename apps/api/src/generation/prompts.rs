//! Prompt builders for the content generator.

use crate::catalog::Category;
use crate::models::brief::ProjectBrief;

/// Classification prompt: lists every valid category key and demands a bare
/// key in response. The reply is still parsed with the total
/// `Category::parse`, so a chatty model degrades to `default` rather than
/// breaking anything.
pub fn classification_prompt(short_description: &str) -> String {
    let class_list = Category::ALL
        .iter()
        .map(|c| c.key())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a classification assistant. Based on the short project description below,\n\
         select the most relevant category from this list:\n\
         {class_list}.\n\
         \n\
         Description: {short_description}\n\
         \n\
         Respond ONLY with the class name from the list. If none matches, say 'default'."
    )
}

/// Per-section authoring prompt. Requests ~300-400 words with `**bold**`
/// sub-heading markers and bullets, and forbids `##`/`###` heading syntax
/// (the document assembler understands only the bold markers).
pub fn section_prompt(section_title: &str, brief: &ProjectBrief) -> String {
    format!(
        "You are creating content for a Detailed Project Report (DPR).\n\
         \n\
         Project title: {title}\n\
         Short description: {description}\n\
         Location: {location}\n\
         \n\
         Generate a professional section titled \"{section_title}\" (~300-400 words).\n\
         - Include clear **subtitles** for subtopics (use bold markers like **Subtitle:**).\n\
         - Include bullet points where useful.\n\
         - Avoid markdown syntax like ## or ###.",
        title = brief.title,
        description = brief.short_description,
        location = brief.location.as_deref().unwrap_or("N/A"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief() -> ProjectBrief {
        ProjectBrief {
            title: "Organic Agro Processing Unit".to_string(),
            short_description: "Millet-based snacks".to_string(),
            location: None,
            capacity: None,
            currency: "INR".to_string(),
            additional: None,
        }
    }

    #[test]
    fn test_classification_prompt_lists_all_keys() {
        let prompt = classification_prompt("a small bakery");
        for category in Category::ALL {
            assert!(prompt.contains(category.key()), "missing {}", category.key());
        }
        assert!(prompt.contains("a small bakery"));
    }

    #[test]
    fn test_section_prompt_carries_brief_and_title() {
        let prompt = section_prompt("Executive Summary", &brief());
        assert!(prompt.contains("Executive Summary"));
        assert!(prompt.contains("Organic Agro Processing Unit"));
        assert!(prompt.contains("Location: N/A"));
        assert!(prompt.contains("300-400 words"));
    }
}
