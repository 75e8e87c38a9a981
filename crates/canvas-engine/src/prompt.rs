//! Fixed prompt template for canvas generation.

use canvas_core::CANVAS_SECTIONS;

/// Standing instructions sent as the system message on every request.
pub const CANVAS_SYSTEM_PROMPT: &str = r#"You are an AI business model canvas generator.
Your task is to create a Business Model Canvas for a startup idea.
For each of the following points, provide exactly 3 bullet points (each bullet must not exceed 5 words):
1. Problem
2. Solution
3. Unique Value Propositions
4. Key Metrics
5. Unfair Advantage
6. Distribution Channels
7. Customer Agents
8. Cost Structure
9. Revenue Streams
10. Technical Overview
Return your answer as a valid JSON object with the keys:
"Problem", "Solution", "Unique Value Propositions", "Key Metrics", "Unfair Advantage",
"Distribution Channels", "Customer Agents", "Cost Structure", "Revenue Streams", "Technical Overview"."#;

/// Builds the user message for a startup description.
///
/// The description is interpolated verbatim, including when empty.
pub fn build_canvas_prompt(startup_description: &str) -> String {
    let numbered = CANVAS_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n");

    let keys = CANVAS_SECTIONS
        .iter()
        .map(|section| format!("\"{}\"", section))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a Business Model Canvas for the following startup idea:\n\
         {startup_description}\n\
         \n\
         For each of the following points, provide exactly 3 bullet points (each bullet not exceeding 5 words):\n\
         \n\
         {numbered}\n\
         \n\
         Return your answer as a valid JSON object with the keys:\n\
         {keys}.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_starts_with_description() {
        let prompt = build_canvas_prompt("A marketplace for used textbooks");
        assert!(prompt.starts_with(
            "Create a Business Model Canvas for the following startup idea:\nA marketplace for used textbooks\n\n"
        ));
    }

    #[test]
    fn prompt_numbers_every_section_in_order() {
        let prompt = build_canvas_prompt("x");
        let mut last = 0;
        for (i, section) in CANVAS_SECTIONS.iter().enumerate() {
            let line = format!("{}. {}\n", i + 1, section);
            let pos = prompt.find(&line).unwrap_or_else(|| panic!("missing {line:?}"));
            assert!(pos > last);
            last = pos;
        }
    }

    #[test]
    fn prompt_lists_json_keys() {
        let prompt = build_canvas_prompt("x");
        assert!(prompt.ends_with(
            "\"Problem\", \"Solution\", \"Unique Value Propositions\", \"Key Metrics\", \
             \"Unfair Advantage\", \"Distribution Channels\", \"Customer Agents\", \
             \"Cost Structure\", \"Revenue Streams\", \"Technical Overview\".\n"
        ));
    }

    #[test]
    fn empty_description_is_interpolated_as_is() {
        let prompt = build_canvas_prompt("");
        assert!(prompt.starts_with("Create a Business Model Canvas for the following startup idea:\n\n\n"));
    }

    #[test]
    fn system_prompt_names_every_section() {
        for section in CANVAS_SECTIONS {
            assert!(CANVAS_SYSTEM_PROMPT.contains(&format!("\"{}\"", section)));
        }
    }
}
