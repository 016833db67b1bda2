#![forbid(unsafe_code)]

use crate::FailedFinding;
use std::fmt::Write as _;

pub(crate) fn defect_prompt(point_description: &str) -> String {
    format!(
        "Analyze this image which shows a potential defect related to \"{point_description}\". \
         Describe the issue observed in the image in a concise, factual comment for an \
         inspection report. Focus only on what is visually present. If no clear defect is \
         visible, state that. Start your response directly with the description."
    )
}

pub(crate) fn summary_prompt(findings: &[FailedFinding]) -> String {
    let mut prompt = String::from(
        "You are an AI assistant for a property inspector. Your task is to generate a concise, \
         professional, and easy-to-understand summary of findings for a property inspection \
         report.\n\
         Based on the following list of failed inspection points, create a summary.\n\
         - Group related issues together (e.g., all plumbing issues, all electrical issues).\n\
         - Start with the most critical issues.\n\
         - Use clear headings and bullet points.\n\
         - The tone should be objective and informative.\n\n\
         Here are the failed items:\n",
    );
    for finding in findings {
        let comments = if finding.comments.is_empty() {
            "No comment."
        } else {
            finding.comments.as_str()
        };
        let location = if finding.location.is_empty() {
            "General"
        } else {
            finding.location.as_str()
        };
        let _ = writeln!(
            prompt,
            "- {} - {}: {} (Location: {})",
            finding.category, finding.point, comments, location
        );
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defect_prompt_names_the_point() {
        let prompt = defect_prompt("Sink & Mixer Tap Functionality");
        assert!(prompt.contains("\"Sink & Mixer Tap Functionality\""));
        assert!(prompt.contains("If no clear defect is visible"));
    }

    #[test]
    fn summary_prompt_lists_items_in_order_with_fallbacks() {
        let findings = vec![
            FailedFinding {
                category: "Plumbing System".to_string(),
                point: "Under-Sink Leaks".to_string(),
                comments: "Drip at trap.".to_string(),
                location: "Kitchen".to_string(),
            },
            FailedFinding {
                category: "Electrical System".to_string(),
                point: "DB Labeling".to_string(),
                comments: String::new(),
                location: String::new(),
            },
        ];
        let prompt = summary_prompt(&findings);
        let plumbing = prompt
            .find("- Plumbing System - Under-Sink Leaks: Drip at trap. (Location: Kitchen)")
            .expect("first item listed");
        let electrical = prompt
            .find("- Electrical System - DB Labeling: No comment. (Location: General)")
            .expect("second item listed with fallbacks");
        assert!(plumbing < electrical);
    }
}
