use anyhow::Result;

use crate::bank::{Question, QuestionBank, OPTION_COUNT};
use crate::progress::{AnswerSheet, ProgressStore};
use crate::scoring::{self, FullReview, OptionMark, ReviewItem, ReviewScope, Stats};

/// One quiz run: owns the bank, the answer sheet, the navigation
/// pointer, and the two display flags. The presentation layer drives it
/// through the command methods and reads everything back through the
/// accessors; nothing else mutates quiz state.
///
/// Mutating commands apply in memory first and then persist. A storage
/// failure is returned to the caller, but the in-memory state stays
/// authoritative for the rest of the session.
pub struct QuizSession {
    bank: QuestionBank,
    sheet: AnswerSheet,
    current: usize,
    reveal_on_card: bool,
    panel_open: bool,
    store: ProgressStore,
}

impl QuizSession {
    /// Start a session, resuming saved progress when it matches the bank
    pub fn new(bank: QuestionBank, store: ProgressStore) -> Self {
        let sheet = AnswerSheet::restore(bank.len(), store.load_answers());
        let panel_open = store.load_panel_open();

        Self {
            bank,
            sheet,
            current: 0,
            reveal_on_card: false,
            panel_open,
            store,
        }
    }

    /// Record a selection for the current question. Out-of-range options
    /// and an empty bank are no-ops.
    pub fn select_option(&mut self, option: usize) -> Result<()> {
        if !self.sheet.set(self.current, option) {
            return Ok(());
        }
        self.store.save_answers(&self.sheet)
    }

    /// Advance to the next question; a no-op at the last one
    pub fn next(&mut self) {
        if self.current + 1 < self.bank.len() {
            self.current += 1;
        }
    }

    /// Step back to the previous question; a no-op at the first one
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Submit anytime: unanswered questions are excluded from the score
    /// but still listed in the review. Submission is not terminal, the
    /// quiz can keep being edited and resubmitted afterwards.
    pub fn submit(&self) -> FullReview {
        self.full_review()
    }

    /// Wipe all answers, drop the saved progress, go back to the start
    pub fn restart(&mut self) -> Result<()> {
        self.sheet.clear();
        self.current = 0;
        self.store.delete_answers()
    }

    pub fn toggle_panel(&mut self) -> Result<()> {
        self.panel_open = !self.panel_open;
        self.store.save_panel_open(self.panel_open)
    }

    /// Reveal mode is session-local; it is never persisted
    pub fn toggle_reveal(&mut self) {
        self.reveal_on_card = !self.reveal_on_card;
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The selection on the current question, if any
    pub fn selection(&self) -> Option<usize> {
        self.sheet.selected(self.current)
    }

    pub fn stats(&self) -> Stats {
        scoring::compute_stats(&self.bank, &self.sheet)
    }

    pub fn quick_review(&self) -> Vec<ReviewItem> {
        scoring::build_review(&self.bank, &self.sheet, ReviewScope::AnsweredOnly)
    }

    pub fn full_review(&self) -> FullReview {
        scoring::full_review(&self.bank, &self.sheet)
    }

    /// Reveal marks for the current question while reveal mode is on
    pub fn current_marks(&self) -> Option<[OptionMark; OPTION_COUNT]> {
        if !self.reveal_on_card {
            return None;
        }
        self.current_question()
            .map(|question| scoring::option_marks(question, self.selection()))
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn reveal_on_card(&self) -> bool {
        self.reveal_on_card
    }
}
