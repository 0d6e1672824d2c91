use serde::{Deserialize, Serialize};

use crate::model::{ModalityId, ModalityRecord};
use crate::quiz::{AdvanceOutcome, AnswerOutcome, QuizEngine};
use crate::quiz_bank::QuizBank;
use crate::stepper::TutorialStepper;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Learn,
    Quiz,
}

/// Inputs the scene tree is a pure function of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SceneKey {
    pub modality: ModalityId,
    pub highlight: Option<usize>,
    pub animating: bool,
}

/// Everything the user can change during a session.
///
/// Highlight and step always index into the selected record's lists; the
/// transitions below keep that true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    selected: ModalityId,
    highlighted: Option<usize>,
    component_count: usize,
    stepper: TutorialStepper,
    animating: bool,
    active_tab: ActiveTab,
    quiz: QuizEngine,
    scan_output_visible: bool,
}

impl SessionState {
    /// Fresh session on `record`, with the quiz at its first question.
    #[must_use]
    pub fn new(record: &ModalityRecord, bank: &QuizBank, animating: bool) -> Self {
        Self {
            selected: record.id(),
            highlighted: None,
            component_count: record.components().len(),
            stepper: TutorialStepper::new(record.steps().len()),
            animating,
            active_tab: ActiveTab::Learn,
            quiz: QuizEngine::new(bank),
            scan_output_visible: false,
        }
    }

    // Accessors
    #[must_use]
    pub fn selected(&self) -> ModalityId {
        self.selected
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn stepper(&self) -> &TutorialStepper {
        &self.stepper
    }

    #[must_use]
    pub fn tutorial_step(&self) -> usize {
        self.stepper.current()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    #[must_use]
    pub fn is_scan_output_visible(&self) -> bool {
        self.scan_output_visible
    }

    #[must_use]
    pub fn scene_key(&self) -> SceneKey {
        SceneKey {
            modality: self.selected,
            highlight: self.highlighted,
            animating: self.animating,
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Switches to `record`, rewinding the stepper and clearing the highlight
    /// and scan panel.
    pub fn select_modality(&mut self, record: &ModalityRecord) {
        self.selected = record.id();
        self.highlighted = None;
        self.component_count = record.components().len();
        self.stepper.reset(record.steps().len());
        self.scan_output_visible = false;
    }

    /// Highlights `index`, or clears the highlight if `index` is already
    /// highlighted. Out-of-range indices are ignored.
    pub fn toggle_highlight(&mut self, index: usize) -> Option<usize> {
        if index < self.component_count {
            self.highlighted = if self.highlighted == Some(index) {
                None
            } else {
                Some(index)
            };
        }
        self.highlighted
    }

    pub fn select_step(&mut self, index: usize) -> bool {
        self.stepper.select(index)
    }

    pub fn next_step(&mut self) -> bool {
        self.stepper.next()
    }

    pub fn back_step(&mut self) -> bool {
        self.stepper.back()
    }

    pub fn answer_quiz(&mut self, option: usize) -> AnswerOutcome {
        self.quiz.answer(option)
    }

    pub fn advance_quiz(&mut self) -> AdvanceOutcome {
        self.quiz.advance()
    }

    pub fn reset_quiz(&mut self) {
        self.quiz.reset();
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.animating = !self.animating;
        self.animating
    }

    pub fn toggle_scan_output(&mut self) -> bool {
        self.scan_output_visible = !self.scan_output_visible;
        self.scan_output_visible
    }

    pub fn close_scan_output(&mut self) {
        self.scan_output_visible = false;
    }

    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }
}
