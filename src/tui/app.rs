use std::time::Instant;

use crate::session::QuizSession;
use crate::tui::theme::ThemeColors;

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Quiz,
    Results,
    Help,
}

pub struct App {
    pub session: QuizSession,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub review_scroll: u16,
    pub should_quit: bool,
    pub bank_label: String,
    pub theme: ThemeColors,
}

impl App {
    pub fn new(session: QuizSession, bank_label: String, theme: ThemeColors) -> Self {
        Self {
            session,
            input_mode: InputMode::Quiz,
            flash_message: None,
            review_scroll: 0,
            should_quit: false,
            bank_label,
            theme,
        }
    }

    /// Record an answer on the current card.
    /// Storage failures surface as a flash; the in-memory answer sticks.
    pub fn select_option(&mut self, option: usize) {
        if self.session.current_question().is_none() {
            return;
        }
        if let Err(e) = self.session.select_option(option) {
            self.show_flash(format!("Failed to save progress: {}", e));
        }
    }

    pub fn next_question(&mut self) {
        self.session.next();
    }

    pub fn prev_question(&mut self) {
        self.session.prev();
    }

    /// Open the results overlay (submit anytime; blanks stay blank)
    pub fn open_results(&mut self) {
        if self.session.question_count() == 0 {
            return;
        }
        self.review_scroll = 0;
        self.input_mode = InputMode::Results;
    }

    pub fn close_overlay(&mut self) {
        self.input_mode = InputMode::Quiz;
    }

    pub fn restart(&mut self) {
        match self.session.restart() {
            Ok(()) => self.show_flash("Progress cleared. Back to question 1.".to_string()),
            Err(e) => self.show_flash(format!("Failed to clear saved progress: {}", e)),
        }
        self.input_mode = InputMode::Quiz;
    }

    pub fn toggle_panel(&mut self) {
        if let Err(e) = self.session.toggle_panel() {
            self.show_flash(format!("Failed to save panel state: {}", e));
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.session.toggle_reveal();
        let msg = if self.session.reveal_on_card() {
            "Revealing correct answers on the card"
        } else {
            "Reveal off"
        };
        self.show_flash(msg.to_string());
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn scroll_review_down(&mut self) {
        self.review_scroll = self.review_scroll.saturating_add(1);
    }

    pub fn scroll_review_up(&mut self) {
        self.review_scroll = self.review_scroll.saturating_sub(1);
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }
}
