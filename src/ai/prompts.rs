//! Prompt text sent to the generation backends.
//!
//! Keeping the wording in one place makes it easy to tune how the model is
//! asked for tips without touching the backends or the tip extractor.

use crate::tips::TIP_COUNT;
use crate::usage::UsageInput;

/// Build the instruction asking for electricity saving tips.
///
/// The figures are rendered as received; type, sign and range are not checked here.
pub fn build_prompt(input: &UsageInput) -> String {
    format!(
        "Generate {TIP_COUNT} practical electricity saving tips for a household that uses {units} units \
         of electricity at {cost} per unit, with a total bill of {bill}. \
         Focus on actionable advice that would help reduce consumption. \
         Format each tip on a new line starting with a number and a period (Example: \"1. Tip one\"). \
         Just give tips, no extras.",
        units = input.units_used,
        cost = input.per_unit_cost,
        bill = input.total_bill,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::UsageFigure;

    #[test]
    fn prompt_mentions_every_figure() {
        let prompt = build_prompt(&UsageInput::new(100.0, 5.0, 500.0));
        assert!(prompt.contains("uses 100 units"));
        assert!(prompt.contains("at 5 per unit"));
        assert!(prompt.contains("total bill of 500"));
        assert!(prompt.contains("Generate 3 practical electricity saving tips"));
        assert!(prompt.contains("no extras"));
    }

    #[test]
    fn fractional_figures_keep_their_decimals() {
        let prompt = build_prompt(&UsageInput::new(12.5, 0.25, 3.125));
        assert!(prompt.contains("12.5"));
        assert!(prompt.contains("0.25"));
        assert!(prompt.contains("3.125"));
    }

    #[test]
    fn text_figures_are_rendered_verbatim() {
        let prompt = build_prompt(&UsageInput::new(
            UsageFigure::Text("lots".to_string()),
            5.0,
            UsageFigure::Text("500 rupees".to_string()),
        ));
        assert!(prompt.contains("uses lots units"));
        assert!(prompt.contains("total bill of 500 rupees"));
    }
}
