use crate::model::OPTION_COUNT;
use crate::quiz_bank::QuizBank;

/// Where the quiz currently is in its question/answer flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Answering,
    Answered {
        selected: usize,
    },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The question was already answered, the quiz is finished, or the
    /// option does not exist.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the question at this index.
    Next(usize),
    /// The last question was answered; carries the final score.
    Finished(u32),
    Ignored,
}

/// Final score banding shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Excellent,
    Good,
    KeepStudying,
}

impl ResultTier {
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        match score {
            8.. => ResultTier::Excellent,
            5..=7 => ResultTier::Good,
            _ => ResultTier::KeepStudying,
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            ResultTier::Excellent => "Excellent! You really know your imaging!",
            ResultTier::Good => "Good job! Keep learning!",
            ResultTier::KeepStudying => "Keep studying, you'll get there!",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ResultTier::Excellent => "🏆",
            ResultTier::Good => "👍",
            ResultTier::KeepStudying => "📚",
        }
    }
}

/// Finite-state quiz over a fixed answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEngine {
    answer_key: Vec<usize>,
    current: usize,
    phase: QuizPhase,
    score: u32,
}

impl QuizEngine {
    #[must_use]
    pub fn new(bank: &QuizBank) -> Self {
        Self::with_answer_key(bank.answer_key())
    }

    /// Builds an engine directly from the correct option of each question.
    #[must_use]
    pub fn with_answer_key(answer_key: Vec<usize>) -> Self {
        Self {
            answer_key,
            current: 0,
            phase: QuizPhase::Answering,
            score: 0,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.answer_key.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn has_answered(&self) -> bool {
        matches!(self.phase, QuizPhase::Answered { .. })
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::Answered { selected } => Some(selected),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.answer_key.len()
    }

    /// Completion of the current pass as a percentage, counting the current
    /// question as reached.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f32 {
        if self.answer_key.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f32 / self.answer_key.len() as f32 * 100.0
    }

    #[must_use]
    pub fn result_tier(&self) -> ResultTier {
        ResultTier::for_score(self.score)
    }

    /// Records `option` as the answer to the current question.
    pub fn answer(&mut self, option: usize) -> AnswerOutcome {
        if self.phase != QuizPhase::Answering || option >= OPTION_COUNT {
            return AnswerOutcome::Ignored;
        }
        let Some(&correct) = self.answer_key.get(self.current) else {
            return AnswerOutcome::Ignored;
        };

        self.phase = QuizPhase::Answered { selected: option };
        if option == correct {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Moves past an answered question.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.has_answered() {
            return AdvanceOutcome::Ignored;
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Finished;
            return AdvanceOutcome::Finished(self.score);
        }
        self.current += 1;
        self.phase = QuizPhase::Answering;
        AdvanceOutcome::Next(self.current)
    }

    /// Starts a new pass from the first question.
    pub fn reset(&mut self) {
        self.current = 0;
        self.phase = QuizPhase::Answering;
        self.score = 0;
    }
}
