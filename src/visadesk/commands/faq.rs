use crate::error::{Result, VisadeskError};
use crate::external::FaqAssistant;

/// Ask the AI collaborator a free-text question. One attempt, no retry or
/// streaming; the caller surfaces a failure as an error banner.
pub fn ask(assistant: &dyn FaqAssistant, question: &str) -> Result<String> {
    let question = question.trim();
    if question.is_empty() {
        return Err(VisadeskError::Api("Question cannot be empty".into()));
    }
    assistant.answer(question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::UnconfiguredAssistant;

    struct EchoAssistant;

    impl FaqAssistant for EchoAssistant {
        fn answer(&self, question: &str) -> Result<String> {
            Ok(format!("You asked: {}", question))
        }
    }

    #[test]
    fn passes_the_question_through() {
        let answer = ask(&EchoAssistant, " Do I need a transit visa? ").unwrap();
        assert_eq!(answer, "You asked: Do I need a transit visa?");
    }

    #[test]
    fn empty_question_is_rejected_before_the_provider() {
        assert!(ask(&EchoAssistant, "   ").is_err());
    }

    #[test]
    fn unconfigured_provider_surfaces_an_error() {
        assert!(ask(&UnconfiguredAssistant, "anything").is_err());
    }
}
