use anyhow::Result;
use tracing::{debug, instrument};

use crate::ai::prompts::build_prompt;
use crate::ai::{GenerationParams, TextGenerator};
use crate::tips::{extract_tips, TipList};
use crate::usage::UsageInput;

/// Ask the generator for tips about `input` and normalize the answer.
///
/// Only the generator can fail; extraction always produces a full list.
#[instrument(level = "debug", skip(generator))]
pub async fn generate_suggestions(
    generator: &dyn TextGenerator,
    input: &UsageInput,
    params: &GenerationParams,
) -> Result<TipList> {
    let prompt = build_prompt(input);
    debug!(prompt = %prompt, "built prompt");

    let raw = generator.generate(&prompt, params).await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "model output");

    Ok(extract_tips(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::util::StubGenerator;
    use crate::tips::FALLBACK_TIPS;

    fn usage() -> UsageInput {
        UsageInput::new(100.0, 5.0, 500.0)
    }

    #[tokio::test]
    async fn pipeline_passes_prompt_and_params() {
        let stub = StubGenerator::reply("1. a 2. b 3. c");
        let params = GenerationParams::default();
        let tips = generate_suggestions(&stub, &usage(), &params).await.unwrap();
        assert_eq!(tips.tips(), ["a", "b", "c"]);

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("100"));
        assert_eq!(calls[0].1, params);
    }

    #[tokio::test]
    async fn garbage_output_still_yields_three() {
        let stub = StubGenerator::reply("...!!!???");
        let tips = generate_suggestions(&stub, &usage(), &GenerationParams::default())
            .await
            .unwrap();
        assert_eq!(tips.tips(), FALLBACK_TIPS);
    }

    #[tokio::test]
    async fn generator_error_propagates() {
        let stub = StubGenerator::fail("model offline");
        let err = generate_suggestions(&stub, &usage(), &GenerationParams::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("model offline"));
    }
}
