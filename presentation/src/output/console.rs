//! Console output formatter for pair evaluations

use crate::output::diagram::brick_sketch;
use crate::output::formatter::OutputFormatter;
use brick_application::{FaceClassification, PairEvaluation};
use brick_domain::Verdict;
use colored::Colorize;
use serde_json::json;

/// Formats pair evaluations for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete evaluation
    pub fn format(evaluation: &PairEvaluation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Euler Brick Face Check"));
        output.push('\n');

        output.push_str(&Self::face_line("First: ", evaluation, true));
        output.push_str(&Self::face_line("Second:", evaluation, false));

        output.push_str(&Self::section_header("Verdict"));
        let message = Self::verdict_message(&evaluation.verdict);
        if evaluation.verdict.is_valid() {
            output.push_str(&format!("\n{}\n", message.green().bold()));
        } else {
            output.push_str(&format!("\n{}\n", message.red().bold()));
        }

        if let Verdict::Valid { brick, shared } = &evaluation.verdict {
            output.push_str(&format!(
                "\n{} {}\n\n",
                "Shared edge:".cyan().bold(),
                shared
            ));
            output.push_str(&brick_sketch(brick));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(evaluation: &PairEvaluation) -> String {
        let mut report = json!({
            "inputs": {
                "first": evaluation.first_raw,
                "second": evaluation.second_raw,
            },
            "triples": {
                "first": evaluation.first,
                "second": evaluation.second,
            },
            "verdict": evaluation.verdict.kind(),
            "valid": evaluation.verdict.is_valid(),
            "message": Self::verdict_message(&evaluation.verdict),
        });
        if let Verdict::Valid { brick, shared } = &evaluation.verdict {
            report["brick"] = json!(brick);
            report["shared"] = json!(shared);
        }
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the verdict only (concise output)
    pub fn format_verdict_only(evaluation: &PairEvaluation) -> String {
        Self::verdict_message(&evaluation.verdict)
    }

    /// The user-facing message for a verdict.
    pub fn verdict_message(verdict: &Verdict) -> String {
        match verdict {
            Verdict::MalformedInput { which, reason } => format!(
                "The {which} input isn't a valid triple ({reason}). \
                 Use a format like 3,4,5 or (3,4,5) or [3,4,5]."
            ),
            Verdict::NotPythagorean { which, triple } => {
                format!("The {which} triple {triple} is not a valid Pythagorean triple.")
            }
            Verdict::IdenticalTriples => {
                "The two triples describe the same face. Enter two different triples.".to_string()
            }
            Verdict::NoSharedDimension => {
                "The faces do not share exactly one edge, so they cannot sit on the same brick."
                    .to_string()
            }
            Verdict::SharedDimensionIsHypotenuse { shared } => format!(
                "The shared value {shared} is a face diagonal, not an edge; \
                 the shared edge must be a leg in both faces."
            ),
            Verdict::ThirdDiagonalNotIntegral { a, c } => format!(
                "The third face diagonal, √({a}² + {c}²), is not an integer, \
                 so this is not a full Euler brick."
            ),
            Verdict::Valid { brick, .. } => format!(
                "These triples fit two adjacent faces of an Euler brick candidate: {brick}."
            ),
        }
    }

    /// One echo line per input: parsed classification when available,
    /// otherwise the raw text.
    fn face_line(label: &str, evaluation: &PairEvaluation, first: bool) -> String {
        let (raw, triple, face) = if first {
            (&evaluation.first_raw, evaluation.first, evaluation.first_face)
        } else {
            (
                &evaluation.second_raw,
                evaluation.second,
                evaluation.second_face,
            )
        };
        match (triple, face) {
            (Some(triple), Some(face)) => format!(
                "{} {} — {}\n",
                label.cyan().bold(),
                triple,
                Self::classification(&face)
            ),
            (Some(triple), None) => format!("{} {}\n", label.cyan().bold(), triple),
            (None, _) => format!("{} {}\n", label.cyan().bold(), raw.trim().dimmed()),
        }
    }

    fn classification(face: &FaceClassification) -> String {
        format!(
            "edges {}, {}; diagonal {}",
            face.legs[0], face.legs[1], face.hypotenuse
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, evaluation: &PairEvaluation) -> String {
        Self::format(evaluation)
    }

    fn format_json(&self, evaluation: &PairEvaluation) -> String {
        Self::format_json(evaluation)
    }

    fn format_verdict_only(&self, evaluation: &PairEvaluation) -> String {
        Self::format_verdict_only(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brick_application::{EvaluatePairInput, EvaluatePairUseCase};

    fn evaluate(first: &str, second: &str) -> PairEvaluation {
        EvaluatePairUseCase::new()
            .execute(EvaluatePairInput::new(first, second))
            .unwrap()
    }

    #[test]
    fn test_valid_pair_full_output() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&evaluate("44,117,125", "117,240,267"));
        assert!(output.contains("(44, 117, 125)"));
        assert!(output.contains("edges 44, 117; diagonal 125"));
        assert!(output.contains("Shared edge: 117"));
        assert!(output.contains("a = 44"));
    }

    #[test]
    fn test_verdict_only_names_the_brick() {
        let line = ConsoleFormatter::format_verdict_only(&evaluate("5,12,13", "12,9,15"));
        assert!(line.contains("5 × 12 × 9"));
    }

    #[test]
    fn test_messages_name_the_offending_slot() {
        let message =
            ConsoleFormatter::format_verdict_only(&evaluate("44,117,125", "117,240,266"));
        assert!(message.contains("second triple"));
        assert!(message.contains("(117, 240, 266)"));

        let message = ConsoleFormatter::format_verdict_only(&evaluate("3,4", "5,12,13"));
        assert!(message.contains("first input"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = ConsoleFormatter::format_json(&evaluate("44,117,125", "117,240,267"));
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["verdict"], "valid");
        assert_eq!(value["valid"], true);
        assert_eq!(value["brick"]["b"], 117);
        assert_eq!(value["shared"], 117);
        assert_eq!(value["triples"]["first"][0], 44);
    }

    #[test]
    fn test_json_report_for_rejection() {
        let report = ConsoleFormatter::format_json(&evaluate("3,4,5", "6,8,10"));
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["verdict"], "no_shared_dimension");
        assert_eq!(value["valid"], false);
        assert!(value.get("brick").is_none());
    }

    #[test]
    fn test_json_report_for_malformed_input() {
        let report = ConsoleFormatter::format_json(&evaluate("junk", "3,4,5"));
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["verdict"], "malformed_input");
        assert_eq!(value["triples"]["first"], serde_json::Value::Null);
    }
}
