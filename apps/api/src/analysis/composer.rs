//! Prompt composition — turns (framework, CSV sources, decision) into the
//! single instruction string sent to the generation endpoint.
//!
//! Pure and deterministic. Inputs are appended as-is: no trimming, no
//! escaping, no length cap, and empty inputs are embedded like any other.

use std::fmt::Write;

use crate::analysis::prompts::{
    ANALYSIS_INSTRUCTION, ANALYSIS_TITLE, CRITERIA, CRITERION_FIELDS, DECISION_HEADING,
    FRAMEWORK_HEADING, RECOMMENDATION_SECTION, ROLE_INSTRUCTION, RULE, SOURCES_HEADING,
    SUMMARY_SECTION,
};
use crate::llm_client::prompts::CONCISE_STYLE_RULES;

/// Builds the analysis prompt.
///
/// Section order: role, framework, sources, decision, output format
/// (six criteria, summary, recommendation), style rules.
pub fn compose(framework: &str, sources: &str, decision: &str) -> String {
    let mut prompt = String::with_capacity(
        framework.len() + sources.len() + decision.len() + 2 * 1024,
    );

    prompt.push_str(ROLE_INSTRUCTION);
    push_section(&mut prompt, FRAMEWORK_HEADING, framework);
    push_section(&mut prompt, SOURCES_HEADING, sources);
    push_section(&mut prompt, DECISION_HEADING, decision);

    prompt.push_str("\n\n");
    prompt.push_str(ANALYSIS_INSTRUCTION);
    push_output_format(&mut prompt);

    prompt
}

fn push_section(prompt: &mut String, heading: &str, body: &str) {
    prompt.push_str("\n\n");
    prompt.push_str(heading);
    prompt.push('\n');
    prompt.push_str(body);
}

fn push_output_format(prompt: &mut String) {
    // Writing into a String cannot fail.
    let _ = write!(prompt, "\n\n{RULE}\n{ANALYSIS_TITLE}\n{RULE}");
    for (i, criterion) in CRITERIA.iter().enumerate() {
        let _ = write!(prompt, "\n\n## {}. {criterion}\n{CRITERION_FIELDS}", i + 1);
    }
    let _ = write!(
        prompt,
        "\n\n{RULE}\n\n{SUMMARY_SECTION}\n\n{RECOMMENDATION_SECTION}\n\n{RULE}\n\n{CONCISE_STYLE_RULES}"
    );
}
