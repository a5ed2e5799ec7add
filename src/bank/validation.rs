use std::collections::HashSet;

use super::schema::{QuestionBank, OPTION_COUNT};

/// Validate the question bank at startup.
/// Returns all validation errors at once (not just the first).
/// An empty bank is valid (degraded state, handled by the UI).
pub fn validate_bank(bank: &QuestionBank) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, question) in bank.questions.iter().enumerate() {
        if !seen_ids.insert(question.id) {
            errors.push(format!("questions[{}]: duplicate id {}", i, question.id));
        }

        if question.text.trim().is_empty() {
            errors.push(format!("questions[{}].text: must not be empty", i));
        }

        if question.correct_index >= OPTION_COUNT {
            errors.push(format!(
                "questions[{}].correct_index: must be 0-{}, got {}",
                i,
                OPTION_COUNT - 1,
                question.correct_index
            ));
        }

        for (j, option) in question.options.iter().enumerate() {
            if option.trim().is_empty() {
                errors.push(format!("questions[{}].options[{}]: must not be empty", i, j));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Question;

    fn question(id: u32, correct_index: usize) -> Question {
        Question {
            id,
            text: format!("Question {}", id),
            options: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index,
        }
    }

    #[test]
    fn test_valid_bank() {
        let bank = QuestionBank::new(vec![question(1, 0), question(2, 3)]);
        assert!(validate_bank(&bank).is_ok());
    }

    #[test]
    fn test_empty_bank_is_valid() {
        assert!(validate_bank(&QuestionBank::default()).is_ok());
    }

    #[test]
    fn test_sample_bank_is_valid() {
        assert!(validate_bank(&QuestionBank::sample()).is_ok());
    }

    #[test]
    fn test_correct_index_out_of_range() {
        let bank = QuestionBank::new(vec![question(1, 4)]);
        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("correct_index"));
        assert!(errors[0].contains("got 4"));
    }

    #[test]
    fn test_duplicate_ids() {
        let bank = QuestionBank::new(vec![question(5, 0), question(5, 1)]);
        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate id 5"));
    }

    #[test]
    fn test_empty_text_and_option() {
        let mut bad = question(1, 0);
        bad.text = "   ".to_string();
        bad.options[2] = String::new();
        let bank = QuestionBank::new(vec![bad]);
        let errors = validate_bank(&bank).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("text"));
        assert!(errors[1].contains("options[2]"));
    }

    #[test]
    fn test_collects_errors_across_questions() {
        let bank = QuestionBank::new(vec![question(1, 9), question(1, 7)]);
        let errors = validate_bank(&bank).unwrap_err();
        // duplicate id plus two bad correct_index values
        assert_eq!(errors.len(), 3);
    }
}
