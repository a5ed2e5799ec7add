use crate::bank::{Question, OPTION_COUNT};

/// Display marking for one option while reveal mode is on.
///
/// Purely a display computation: toggling reveal never mutates the
/// answer sheet or the scoring results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
    Unmarked,
}

/// Marks for each option of a question: the correct option is always
/// marked, the user's selection is marked incorrect when it misses,
/// everything else stays unmarked.
pub fn option_marks(question: &Question, selected: Option<usize>) -> [OptionMark; OPTION_COUNT] {
    let mut marks = [OptionMark::Unmarked; OPTION_COUNT];
    marks[question.correct_index] = OptionMark::Correct;

    if let Some(selected) = selected {
        if selected < OPTION_COUNT && selected != question.correct_index {
            marks[selected] = OptionMark::Incorrect;
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;

    fn question() -> Question {
        // Correct option is index 2
        QuestionBank::sample().questions[1].clone()
    }

    #[test]
    fn test_unanswered_marks_only_correct() {
        let marks = option_marks(&question(), None);
        assert_eq!(
            marks,
            [
                OptionMark::Unmarked,
                OptionMark::Unmarked,
                OptionMark::Correct,
                OptionMark::Unmarked,
            ]
        );
    }

    #[test]
    fn test_wrong_selection_marked_incorrect() {
        let marks = option_marks(&question(), Some(0));
        assert_eq!(marks[0], OptionMark::Incorrect);
        assert_eq!(marks[2], OptionMark::Correct);
        assert_eq!(marks[1], OptionMark::Unmarked);
        assert_eq!(marks[3], OptionMark::Unmarked);
    }

    #[test]
    fn test_correct_selection_has_no_incorrect_mark() {
        let marks = option_marks(&question(), Some(2));
        assert_eq!(marks[2], OptionMark::Correct);
        assert!(marks.iter().all(|&m| m != OptionMark::Incorrect));
    }

    #[test]
    fn test_exactly_one_correct_mark() {
        for selected in [None, Some(0), Some(1), Some(2), Some(3)] {
            let marks = option_marks(&question(), selected);
            let correct = marks.iter().filter(|&&m| m == OptionMark::Correct).count();
            assert_eq!(correct, 1);
        }
    }
}
