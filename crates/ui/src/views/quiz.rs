use dioxus::prelude::*;

use crate::context::use_explorer;
use crate::vm::{QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizVm, map_quiz};

#[component]
pub fn QuizView() -> Element {
    let explorer = use_explorer();
    let vm = {
        let explorer = explorer.read();
        map_quiz(explorer.bank(), explorer.state().quiz())
    };

    rsx! {
        div { class: "page quiz-page",
            section { class: "card quiz-card",
                match vm {
                    QuizVm::Question(question) => rsx! { QuestionPanel { question } },
                    QuizVm::Finished(result) => rsx! { ResultPanel { result } },
                }
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuizQuestionVm) -> Element {
    let mut explorer = use_explorer();
    let progress = format!("width: {:.0}%", question.progress_percent);
    let explanation_class = if question.answered_correctly {
        "explanation correct"
    } else {
        "explanation"
    };

    rsx! {
        div { class: "quiz-status",
            span { class: "muted", "{question.progress_label}" }
            span { class: "score", "{question.score_label}" }
        }
        div { class: "progress-track",
            div { class: "progress-bar", style: "{progress}" }
        }
        h3 { class: "quiz-prompt", "{question.prompt}" }
        div { class: "quiz-options",
            for option in question.options.clone() {
                OptionButton { key: "{option.index}", option }
            }
        }
        if let Some(explanation) = question.explanation.clone() {
            div { class: explanation_class, p { "{explanation}" } }
        }
        if let Some(label) = question.advance_label {
            button {
                class: "primary-button wide",
                onclick: move |_| {
                    explorer.write().advance_quiz();
                },
                "{label}"
            }
        }
    }
}

#[component]
fn OptionButton(option: QuizOptionVm) -> Element {
    let mut explorer = use_explorer();
    let index = option.index;

    rsx! {
        button {
            class: option.feedback.css_class(),
            disabled: option.disabled,
            onclick: move |_| {
                explorer.write().answer(index);
            },
            span { class: "option-letter", "{option.letter}." }
            " {option.text}"
        }
    }
}

#[component]
fn ResultPanel(result: QuizResultVm) -> Element {
    let mut explorer = use_explorer();

    rsx! {
        div { class: "quiz-result",
            div { class: "result-emoji", "{result.emoji}" }
            h2 { "Quiz Complete!" }
            p { class: "result-score", "{result.score_label}" }
            p { class: "muted", "{result.headline}" }
            button {
                class: "primary-button",
                onclick: move |_| explorer.write().reset_quiz(),
                "Try Again"
            }
        }
    }
}
