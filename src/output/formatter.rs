use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{FullReview, ReviewItem, ReviewStatus, Stats};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the study-panel stats block
/// Answered is shown against the bank size; accuracy covers answered only
pub fn format_stats(stats: &Stats, total: usize, use_colors: bool) -> String {
    if use_colors {
        format!(
            "Answered: {}/{}\nCorrect: {}\nAccuracy: {}",
            stats.answered.bold(),
            total,
            stats.correct.green(),
            format!("{}%", stats.accuracy_pct).bold()
        )
    } else {
        format!(
            "Answered: {}/{}\nCorrect: {}\nAccuracy: {}%",
            stats.answered, total, stats.correct, stats.accuracy_pct
        )
    }
}

/// Format the answered-only quick review, one block per answered question
pub fn format_quick_review(items: &[ReviewItem], use_colors: bool) -> String {
    if items.is_empty() {
        return "Nothing answered yet.".to_string();
    }

    items
        .iter()
        .map(|item| format_review_item(item, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format the post-submit review: score line plus every question
pub fn format_full_review(review: &FullReview, use_colors: bool) -> String {
    let score_line = if use_colors {
        review.score_line.bold().to_string()
    } else {
        review.score_line.clone()
    };

    if review.items.is_empty() {
        return score_line;
    }

    let items = review
        .items
        .iter()
        .map(|item| format_review_item(item, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{}", score_line, items)
}

fn format_review_item(item: &ReviewItem, use_colors: bool) -> String {
    let question = truncate_text(
        &item.question_text,
        get_terminal_width().unwrap_or(usize::MAX).saturating_sub(6),
    );
    let heading = format!("Q{}. {}", item.question_index + 1, question);

    if use_colors {
        let status = match item.status {
            ReviewStatus::Correct => item.status_label().green().to_string(),
            ReviewStatus::Incorrect => item.status_label().red().to_string(),
            ReviewStatus::Unanswered => item.status_label().yellow().to_string(),
        };
        format!(
            "{}\n  {}\n  Your answer: {}\n  Correct answer: {}",
            heading.bold(),
            status,
            item.user_answer_label(),
            item.correct_answer_label()
        )
    } else {
        format!(
            "{}\n  {}\n  Your answer: {}\n  Correct answer: {}",
            heading,
            item.status_label(),
            item.user_answer_label(),
            item.correct_answer_label()
        )
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width.min(chars.len())].iter().collect()
    }
}
