use crate::bank::{QuestionBank, OPTION_LETTERS};
use crate::progress::AnswerSheet;

use super::stats::compute_stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewScope {
    /// Quick in-panel review: unanswered questions are skipped entirely
    AnsweredOnly,
    /// Post-submit review: every question, blanks marked Unanswered
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Correct,
    Incorrect,
    Unanswered,
}

#[derive(Debug, Clone)]
pub struct ReviewItem {
    pub question_index: usize,
    pub question_text: String,
    pub user_option: Option<usize>,
    pub user_option_text: Option<String>,
    pub correct_option: usize,
    pub correct_option_text: String,
    pub status: ReviewStatus,
}

impl ReviewItem {
    /// Format the user's pick as "A. <text>", or an em-dash placeholder
    /// when the question was left blank
    pub fn user_answer_label(&self) -> String {
        match (self.user_option, &self.user_option_text) {
            (Some(option), Some(text)) => format!("{}. {}", OPTION_LETTERS[option], text),
            _ => "—".to_string(),
        }
    }

    pub fn correct_answer_label(&self) -> String {
        format!(
            "{}. {}",
            OPTION_LETTERS[self.correct_option], self.correct_option_text
        )
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            ReviewStatus::Correct => "Correct",
            ReviewStatus::Incorrect => "Incorrect",
            ReviewStatus::Unanswered => "Unanswered",
        }
    }
}

/// The post-submit view: score line plus one item per question
#[derive(Debug, Clone)]
pub struct FullReview {
    pub score_line: String,
    pub items: Vec<ReviewItem>,
}

pub fn build_review(bank: &QuestionBank, sheet: &AnswerSheet, scope: ReviewScope) -> Vec<ReviewItem> {
    bank.questions
        .iter()
        .enumerate()
        .filter_map(|(i, question)| {
            let user_option = sheet.selected(i);
            if user_option.is_none() && scope == ReviewScope::AnsweredOnly {
                return None;
            }

            let status = match user_option {
                None => ReviewStatus::Unanswered,
                Some(selected) if selected == question.correct_index => ReviewStatus::Correct,
                Some(_) => ReviewStatus::Incorrect,
            };

            Some(ReviewItem {
                question_index: i,
                question_text: question.text.clone(),
                user_option,
                user_option_text: user_option.map(|selected| question.options[selected].clone()),
                correct_option: question.correct_index,
                correct_option_text: question.options[question.correct_index].clone(),
                status,
            })
        })
        .collect()
}

/// Submit anytime: score what was attempted, review everything.
pub fn full_review(bank: &QuestionBank, sheet: &AnswerSheet) -> FullReview {
    let stats = compute_stats(bank, sheet);
    let unanswered = bank.len() - stats.answered;

    let mut score_line = format!(
        "Score so far: {} / {} ({}%).",
        stats.correct, stats.answered, stats.accuracy_pct
    );
    if unanswered > 0 {
        score_line.push_str(&format!(" ({} unanswered)", unanswered));
    }

    FullReview {
        score_line,
        items: build_review(bank, sheet, ReviewScope::All),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partly_answered() -> (QuestionBank, AnswerSheet) {
        // Q1=A (correct), Q2=C (correct), Q3/Q4 blank
        let bank = QuestionBank::sample();
        let mut sheet = AnswerSheet::new(bank.len());
        sheet.set(0, 0);
        sheet.set(1, 2);
        (bank, sheet)
    }

    #[test]
    fn test_answered_only_skips_blanks() {
        let (bank, sheet) = partly_answered();
        let items = build_review(&bank, &sheet, ReviewScope::AnsweredOnly);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.status != ReviewStatus::Unanswered));
        assert_eq!(items[0].question_index, 0);
        assert_eq!(items[1].question_index, 1);
    }

    #[test]
    fn test_all_scope_includes_unanswered() {
        let (bank, sheet) = partly_answered();
        let items = build_review(&bank, &sheet, ReviewScope::All);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].status, ReviewStatus::Correct);
        assert_eq!(items[1].status, ReviewStatus::Correct);
        assert_eq!(items[2].status, ReviewStatus::Unanswered);
        assert_eq!(items[3].status, ReviewStatus::Unanswered);
    }

    #[test]
    fn test_incorrect_status_and_labels() {
        let bank = QuestionBank::sample();
        let mut sheet = AnswerSheet::new(bank.len());
        sheet.set(1, 0);

        let items = build_review(&bank, &sheet, ReviewScope::AnsweredOnly);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.status, ReviewStatus::Incorrect);
        assert_eq!(item.user_answer_label(), "A. 3");
        assert_eq!(item.correct_answer_label(), "C. 8");
        assert_eq!(item.status_label(), "Incorrect");
    }

    #[test]
    fn test_unanswered_label_is_dash() {
        let bank = QuestionBank::sample();
        let sheet = AnswerSheet::new(bank.len());
        let items = build_review(&bank, &sheet, ReviewScope::All);
        assert_eq!(items[0].user_answer_label(), "—");
        assert_eq!(items[0].status_label(), "Unanswered");
    }

    #[test]
    fn test_full_review_score_line_with_blanks() {
        let (bank, sheet) = partly_answered();
        let review = full_review(&bank, &sheet);
        assert_eq!(review.score_line, "Score so far: 2 / 2 (100%). (2 unanswered)");
        assert_eq!(review.items.len(), 4);
    }

    #[test]
    fn test_full_review_score_line_complete() {
        let bank = QuestionBank::sample();
        let mut sheet = AnswerSheet::new(bank.len());
        sheet.set(0, 0);
        sheet.set(1, 2);
        sheet.set(2, 1);
        sheet.set(3, 0); // wrong, correct is C

        let review = full_review(&bank, &sheet);
        assert_eq!(review.score_line, "Score so far: 3 / 4 (75%).");
    }

    #[test]
    fn test_full_review_empty_bank() {
        let review = full_review(&QuestionBank::default(), &AnswerSheet::new(0));
        assert_eq!(review.score_line, "Score so far: 0 / 0 (0%).");
        assert!(review.items.is_empty());
    }
}
