//! Heritage quiz state machine.
//!
//! A closed, cyclic state machine: `Displaying` accepts exactly one answer,
//! the reveal stays up for a fixed dwell, then the next question is shown.
//! The delayed auto-advance is modeled as an explicit transition carrying an
//! [`AdvanceToken`], so timers can be simulated deterministically and a stale
//! timer can never advance twice.
use crate::constants::QUIZ_BONUS_COINS;
use crate::data::QuizQuestion;
use crate::rewards::RewardLedger;

/// Where the quiz currently sits for the active question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the visitor to pick an option.
    Displaying,
    /// An answer is locked in and the reveal is on screen.
    AnswerSelected { answer: usize, correct: bool },
}

/// Handle for the scheduled auto-advance of one question instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken(u64);

/// What a single answer submission produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub coins_awarded: u32,
    /// Pass back to [`QuizEngine::advance`] once the reveal dwell elapses.
    pub advance: AdvanceToken,
}

/// Cyclic quiz over a fixed question catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    current: usize,
    phase: QuizPhase,
    round: u64,
}

impl QuizEngine {
    /// Create an engine over the supplied catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog is empty; the question set is fixed content
    /// provided at build time.
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        assert!(!questions.is_empty(), "quiz catalog must not be empty");
        Self {
            questions,
            current: 0,
            phase: QuizPhase::Displaying,
            round: 0,
        }
    }

    /// The question currently on screen.
    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// Index of the current question within the catalog.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of questions in the catalog.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Current phase of the state machine.
    #[must_use]
    pub const fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Submit an answer for the current question.
    ///
    /// Returns `None` while a reveal is already showing: a second click before
    /// the dwell elapses is ignored, which is what prevents double credit.
    /// A correct answer credits the fixed bonus to the ledger immediately.
    pub fn submit_answer(
        &mut self,
        index: usize,
        ledger: &mut RewardLedger,
    ) -> Option<AnswerOutcome> {
        if !matches!(self.phase, QuizPhase::Displaying) {
            return None;
        }

        let correct = index == self.current_question().correct;
        let coins_awarded = if correct {
            ledger.credit(QUIZ_BONUS_COINS);
            QUIZ_BONUS_COINS
        } else {
            0
        };
        self.phase = QuizPhase::AnswerSelected {
            answer: index,
            correct,
        };
        Some(AnswerOutcome {
            correct,
            coins_awarded,
            advance: AdvanceToken(self.round),
        })
    }

    /// The delayed transition back to `Displaying`, advancing to the next
    /// question with wrap-around. Returns `false` (and changes nothing) when
    /// the token is stale or no reveal is active.
    pub fn advance(&mut self, token: AdvanceToken) -> bool {
        if token.0 != self.round || !matches!(self.phase, QuizPhase::AnswerSelected { .. }) {
            return false;
        }
        self.round += 1;
        self.current = (self.current + 1) % self.questions.len();
        self.phase = QuizPhase::Displaying;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                prompt: "When was the Konark Sun Temple built?".into(),
                options: vec![
                    "13th century".into(),
                    "12th century".into(),
                    "14th century".into(),
                    "15th century".into(),
                ],
                correct: 0,
                fact: "Built in the 13th century CE by King Narasimhadeva I.".into(),
            },
            QuizQuestion {
                prompt: "What is the main deity of Jagannath Temple?".into(),
                options: vec![
                    "Lord Shiva".into(),
                    "Lord Vishnu".into(),
                    "Lord Jagannath".into(),
                    "Lord Ganesha".into(),
                ],
                correct: 2,
                fact: "Lord Jagannath is considered a form of Lord Krishna.".into(),
            },
        ]
    }

    #[test]
    fn correct_answer_credits_fixed_bonus() {
        let mut quiz = QuizEngine::new(questions());
        let mut ledger = RewardLedger::new(0);
        let outcome = quiz.submit_answer(0, &mut ledger).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.coins_awarded, QUIZ_BONUS_COINS);
        assert_eq!(ledger.balance(), QUIZ_BONUS_COINS);
    }

    #[test]
    fn incorrect_answer_leaves_balance_unchanged() {
        let mut quiz = QuizEngine::new(questions());
        let mut ledger = RewardLedger::new(0);
        let outcome = quiz.submit_answer(3, &mut ledger).unwrap();
        assert!(!outcome.correct);
        assert_eq!(ledger.balance(), 0);
    }

    #[test]
    fn second_submission_before_advance_is_ignored() {
        let mut quiz = QuizEngine::new(questions());
        let mut ledger = RewardLedger::new(0);
        quiz.submit_answer(0, &mut ledger).unwrap();
        assert!(quiz.submit_answer(0, &mut ledger).is_none());
        // No double credit.
        assert_eq!(ledger.balance(), QUIZ_BONUS_COINS);
    }

    #[test]
    fn advance_cycles_through_catalog() {
        let mut quiz = QuizEngine::new(questions());
        let mut ledger = RewardLedger::new(0);
        let n = quiz.question_count();
        for _ in 0..n {
            let outcome = quiz.submit_answer(1, &mut ledger).unwrap();
            assert!(quiz.advance(outcome.advance));
        }
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.phase(), QuizPhase::Displaying);
    }

    #[test]
    fn stale_token_does_not_advance() {
        let mut quiz = QuizEngine::new(questions());
        let mut ledger = RewardLedger::new(0);
        let first = quiz.submit_answer(0, &mut ledger).unwrap();
        assert!(quiz.advance(first.advance));
        let second = quiz.submit_answer(0, &mut ledger).unwrap();
        // The first question's timer firing late must not advance again.
        assert!(!quiz.advance(first.advance));
        assert_eq!(quiz.current_index(), 1);
        assert!(quiz.advance(second.advance));
        assert_eq!(quiz.current_index(), 0);
    }

    #[test]
    fn advance_without_reveal_is_refused() {
        let mut quiz = QuizEngine::new(questions());
        let mut ledger = RewardLedger::new(0);
        let outcome = quiz.submit_answer(0, &mut ledger).unwrap();
        assert!(quiz.advance(outcome.advance));
        assert!(!quiz.advance(outcome.advance));
    }
}
