use imaging_core::QuizBank;
use imaging_core::quiz::{QuizEngine, QuizPhase};

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// How an option is styled once the question is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionFeedback {
    Neutral,
    Correct,
    Wrong,
}

impl OptionFeedback {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OptionFeedback::Neutral => "quiz-option",
            OptionFeedback::Correct => "quiz-option correct",
            OptionFeedback::Wrong => "quiz-option wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub feedback: OptionFeedback,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestionVm {
    pub progress_label: String,
    pub score_label: String,
    pub progress_percent: f32,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub explanation: Option<String>,
    pub answered_correctly: bool,
    pub advance_label: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub emoji: &'static str,
    pub score_label: String,
    pub headline: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizVm {
    Question(QuizQuestionVm),
    Finished(QuizResultVm),
}

#[must_use]
pub fn map_quiz(bank: &QuizBank, quiz: &QuizEngine) -> QuizVm {
    let total = quiz.question_count();
    let index = quiz.current_question();
    let question = match bank.get(index) {
        Some(question) if !quiz.is_finished() => question,
        _ => return QuizVm::Finished(map_result(quiz)),
    };

    let selected = match quiz.phase() {
        QuizPhase::Answered { selected } => Some(selected),
        QuizPhase::Answering | QuizPhase::Finished => None,
    };
    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let feedback = match selected {
                None => OptionFeedback::Neutral,
                Some(_) if question.is_correct(i) => OptionFeedback::Correct,
                Some(chosen) if chosen == i => OptionFeedback::Wrong,
                Some(_) => OptionFeedback::Neutral,
            };
            QuizOptionVm {
                index: i,
                letter: OPTION_LETTERS.get(i).copied().unwrap_or('?'),
                text: text.clone(),
                feedback,
                disabled: selected.is_some(),
            }
        })
        .collect();

    let advance_label = selected.map(|_| {
        if quiz.is_last_question() {
            "See Results"
        } else {
            "Next Question →"
        }
    });

    QuizVm::Question(QuizQuestionVm {
        progress_label: format!("Question {} of {total}", index + 1),
        score_label: format!("Score: {}", quiz.score()),
        progress_percent: quiz.progress_percent(),
        prompt: question.prompt().to_owned(),
        options,
        explanation: selected.map(|_| question.explanation().to_owned()),
        answered_correctly: selected.is_some_and(|chosen| question.is_correct(chosen)),
        advance_label,
    })
}

fn map_result(quiz: &QuizEngine) -> QuizResultVm {
    let tier = quiz.result_tier();
    QuizResultVm {
        emoji: tier.emoji(),
        score_label: format!("{} / {}", quiz.score(), quiz.question_count()),
        headline: tier.headline(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(vm: QuizVm) -> QuizQuestionVm {
        match vm {
            QuizVm::Question(q) => q,
            QuizVm::Finished(_) => panic!("expected a question"),
        }
    }

    #[test]
    fn fresh_quiz_shows_first_question() {
        let bank = QuizBank::builtin();
        let vm = question(map_quiz(bank, &QuizEngine::new(bank)));
        assert_eq!(vm.progress_label, "Question 1 of 10");
        assert_eq!(vm.score_label, "Score: 0");
        assert!((vm.progress_percent - 10.0).abs() < 1e-4);
        assert_eq!(vm.options[3].letter, 'D');
        assert!(vm.options.iter().all(|o| o.feedback == OptionFeedback::Neutral && !o.disabled));
        assert!(vm.explanation.is_none());
        assert!(vm.advance_label.is_none());
    }

    #[test]
    fn wrong_answer_marks_both_options() {
        let bank = QuizBank::builtin();
        let mut quiz = QuizEngine::new(bank);
        quiz.answer(0);
        let vm = question(map_quiz(bank, &quiz));
        assert_eq!(vm.options[0].feedback, OptionFeedback::Wrong);
        assert_eq!(vm.options[2].feedback, OptionFeedback::Correct);
        assert_eq!(vm.options[1].feedback, OptionFeedback::Neutral);
        assert!(vm.options.iter().all(|o| o.disabled));
        assert_eq!(vm.advance_label, Some("Next Question →"));
        assert!(!vm.answered_correctly);
        assert!(vm.explanation.unwrap().starts_with("MRI uses magnetic fields"));
    }

    #[test]
    fn last_question_offers_results() {
        let bank = QuizBank::builtin();
        let mut quiz = QuizEngine::new(bank);
        for correct in bank.answer_key().into_iter().take(9) {
            quiz.answer(correct);
            quiz.advance();
        }
        quiz.answer(1);
        let vm = question(map_quiz(bank, &quiz));
        assert_eq!(vm.progress_label, "Question 10 of 10");
        assert_eq!(vm.advance_label, Some("See Results"));
    }

    #[test]
    fn finished_quiz_shows_tier() {
        let bank = QuizBank::builtin();
        let mut quiz = QuizEngine::new(bank);
        for (i, correct) in bank.answer_key().into_iter().enumerate() {
            quiz.answer(if i < 6 { correct } else { (correct + 1) % 4 });
            quiz.advance();
        }
        assert_eq!(
            map_quiz(bank, &quiz),
            QuizVm::Finished(QuizResultVm {
                emoji: "👍",
                score_label: "6 / 10".to_owned(),
                headline: "Good job! Keep learning!",
            })
        );
    }
}
