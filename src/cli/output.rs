//! Output formatting utilities

use crate::application::CheckOutcome;
use crate::domain::{TagDefinition, TagUsage};

/// Format the tag table for display
pub fn format_tag_table(definitions: &[TagDefinition]) -> String {
    let mut output = String::new();
    for definition in definitions {
        output.push_str(&format!(
            "{:<13} {:<19} {}\n",
            definition.wire_tag,
            definition.display_name,
            definition.shape
        ));
    }
    output
}

/// Format tag usage counts for display
pub fn format_usage(usage: &TagUsage) -> String {
    if usage.total() == 0 {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for (kind, count) in usage.used() {
        output.push_str(&format!("{:<13} {}\n", kind.wire_tag(), count));
    }
    if usage.dotted_refs() > 0 {
        output.push_str(&format!(
            "({} !Ref expanded to Fn::GetAtt)\n",
            usage.dotted_refs()
        ));
    }
    output
}

/// Format per-template check results
pub fn format_outcomes(outcomes: &[CheckOutcome]) -> String {
    let mut output = String::new();
    for outcome in outcomes {
        match &outcome.result {
            Ok(usage) => output.push_str(&format!(
                "ok    {} ({} tags)\n",
                outcome.label,
                usage.total()
            )),
            Err(e) => output.push_str(&format!("FAIL  {}: {}\n", outcome.label, e)),
        }
    }
    output
}
