use serde::{Deserialize, Serialize};

/// Every question carries exactly four options (A-D).
pub const OPTION_COUNT: usize = 4;

pub const OPTION_LETTERS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_index: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Built-in starter set used when no questions file is present.
    pub fn sample() -> Self {
        fn q(id: u32, text: &str, options: [&str; OPTION_COUNT], correct_index: usize) -> Question {
            Question {
                id,
                text: text.to_string(),
                options: options.map(|o| o.to_string()),
                correct_index,
            }
        }

        Self {
            questions: vec![
                q(1, "Which letter comes first in the alphabet?", ["A", "B", "C", "D"], 0),
                q(2, "Which number is an even number?", ["3", "5", "8", "9"], 2),
                q(
                    3,
                    "Which one is a primary color of light?",
                    ["Yellow", "Green", "Black", "Magenta"],
                    1,
                ),
                q(
                    4,
                    "Which planet is known as the Red Planet?",
                    ["Venus", "Jupiter", "Mars", "Mercury"],
                    2,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_bank() {
        let yaml = r#"
questions:
  - id: 1
    text: "What is 2 + 2?"
    options: ["3", "4", "5", "6"]
    correct_index: 1
"#;
        let bank: QuestionBank = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions[0].id, 1);
        assert_eq!(bank.questions[0].options[1], "4");
        assert_eq!(bank.questions[0].correct_index, 1);
    }

    #[test]
    fn test_parse_rejects_wrong_option_count() {
        // Fixed-size options array: three entries must not parse.
        let yaml = r#"
questions:
  - id: 1
    text: "Broken"
    options: ["a", "b", "c"]
    correct_index: 0
"#;
        assert!(serde_saphyr::from_str::<QuestionBank>(yaml).is_err());
    }

    #[test]
    fn test_parse_empty_bank() {
        let bank: QuestionBank = serde_saphyr::from_str("questions: []").unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn test_sample_bank_shape() {
        let bank = QuestionBank::sample();
        assert_eq!(bank.len(), 4);
        assert!(bank
            .questions
            .iter()
            .all(|q| q.correct_index < OPTION_COUNT));
    }
}
