mod schema;
mod validation;

pub use schema::{Question, QuestionBank, OPTION_COUNT, OPTION_LETTERS};
pub use validation::validate_bank;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/quizdeck/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("quizdeck")
}

/// Get the default questions file path (~/.config/quizdeck/questions.yaml)
pub fn get_questions_path() -> PathBuf {
    get_config_dir().join("questions.yaml")
}

/// Load the question bank.
///
/// An explicitly given path must exist and parse. With no path, the
/// default questions file is used when present, otherwise the built-in
/// sample set.
pub fn load_bank(path: Option<PathBuf>) -> Result<QuestionBank> {
    match path {
        Some(p) => read_bank(&p),
        None => {
            let default_path = get_questions_path();
            if default_path.exists() {
                read_bank(&default_path)
            } else {
                Ok(QuestionBank::sample())
            }
        }
    }
}

fn read_bank(path: &Path) -> Result<QuestionBank> {
    if !path.exists() {
        anyhow::bail!("Questions file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read questions file at {}", path.display()))?;

    let bank: QuestionBank = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse questions: invalid YAML in {}", path.display()))?;

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_bank_explicit_missing_is_error() {
        let path = env::temp_dir().join("quizdeck_test_no_such_bank.yaml");
        let _ = fs::remove_file(&path);
        assert!(load_bank(Some(path)).is_err());
    }

    #[test]
    fn test_load_bank_explicit_file() {
        let path = env::temp_dir().join("quizdeck_test_bank.yaml");
        fs::write(
            &path,
            "questions:\n  - id: 7\n    text: \"Pick B\"\n    options: [\"a\", \"b\", \"c\", \"d\"]\n    correct_index: 1\n",
        )
        .unwrap();

        let bank = load_bank(Some(path.clone())).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions[0].id, 7);

        let _ = fs::remove_file(&path);
    }
}
