use rand::Rng;
use tracing::debug;

use imaging_core::model::{Component, ModalityId, ModalityRecord, QuizQuestion, Step};
use imaging_core::quiz::{AdvanceOutcome, AnswerOutcome};
use imaging_core::scan::{ScanImage, paint_scan};
use imaging_core::scene::{SceneTree, build_scene};
use imaging_core::session::{ActiveTab, SceneKey, SessionState};
use imaging_core::{Catalog, QuizBank};

use crate::settings::ExplorerSettings;

/// Owns the session state and applies user actions to it against the
/// read-only catalog and quiz bank.
#[derive(Debug, Clone)]
pub struct ExplorerController {
    catalog: &'static Catalog,
    bank: &'static QuizBank,
    state: SessionState,
}

impl ExplorerController {
    /// Controller over the built-in tables, starting from `settings`.
    #[must_use]
    pub fn new(settings: &ExplorerSettings) -> Self {
        Self::with_tables(
            Catalog::builtin(),
            QuizBank::builtin(),
            settings.initial_modality,
            settings.animate,
        )
    }

    #[must_use]
    pub fn with_tables(
        catalog: &'static Catalog,
        bank: &'static QuizBank,
        initial: ModalityId,
        animate: bool,
    ) -> Self {
        Self {
            catalog,
            bank,
            state: SessionState::new(catalog.get(initial), bank, animate),
        }
    }

    // Accessors
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    #[must_use]
    pub fn bank(&self) -> &'static QuizBank {
        self.bank
    }

    #[must_use]
    pub fn selected(&self) -> &'static ModalityRecord {
        self.catalog.get(self.state.selected())
    }

    #[must_use]
    pub fn highlighted_component(&self) -> Option<&'static Component> {
        self.state
            .highlighted()
            .and_then(|index| self.selected().component(index))
    }

    #[must_use]
    pub fn current_step(&self) -> Option<&'static Step> {
        self.selected().step(self.state.tutorial_step())
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.bank.get(self.state.quiz().current_question())
    }

    #[must_use]
    pub fn scene_key(&self) -> SceneKey {
        self.state.scene_key()
    }

    #[must_use]
    pub fn build_scene(&self) -> SceneTree {
        build_scene(self.scene_key())
    }

    pub fn scan_output<R: Rng + ?Sized>(&self, rng: &mut R) -> ScanImage {
        paint_scan(self.state.selected(), rng)
    }

    //
    // ─── ACTIONS ───────────────────────────────────────────────────────────────
    //

    pub fn select_modality(&mut self, id: ModalityId) {
        self.state.select_modality(self.catalog.get(id));
        debug!(modality = %id, "selected modality");
    }

    pub fn toggle_highlight(&mut self, index: usize) {
        let highlight = self.state.toggle_highlight(index);
        debug!(index, ?highlight, "toggled highlight");
    }

    pub fn select_step(&mut self, index: usize) {
        if self.state.select_step(index) {
            debug!(step = index, "selected step");
        }
    }

    pub fn next_step(&mut self) {
        if self.state.next_step() {
            debug!(step = self.state.tutorial_step(), "next step");
        }
    }

    pub fn back_step(&mut self) {
        if self.state.back_step() {
            debug!(step = self.state.tutorial_step(), "previous step");
        }
    }

    pub fn answer(&mut self, option: usize) -> AnswerOutcome {
        let outcome = self.state.answer_quiz(option);
        debug!(
            question = self.state.quiz().current_question(),
            option,
            ?outcome,
            score = self.state.quiz().score(),
            "answered quiz question"
        );
        outcome
    }

    pub fn advance_quiz(&mut self) -> AdvanceOutcome {
        let outcome = self.state.advance_quiz();
        debug!(?outcome, "advanced quiz");
        outcome
    }

    pub fn reset_quiz(&mut self) {
        self.state.reset_quiz();
        debug!("reset quiz");
    }

    pub fn toggle_animation(&mut self) {
        let animating = self.state.toggle_animation();
        debug!(animating, "toggled animation");
    }

    pub fn toggle_scan_output(&mut self) {
        let visible = self.state.toggle_scan_output();
        debug!(visible, "toggled scan output");
    }

    pub fn close_scan_output(&mut self) {
        self.state.close_scan_output();
    }

    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.state.switch_tab(tab);
        debug!(?tab, "switched tab");
    }
}

impl Default for ExplorerController {
    fn default() -> Self {
        Self::new(&ExplorerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_settings() {
        let settings = ExplorerSettings {
            initial_modality: ModalityId::Ultrasound,
            animate: false,
            ..ExplorerSettings::default()
        };
        let controller = ExplorerController::new(&settings);
        assert_eq!(controller.selected().name(), "Ultrasound");
        assert!(!controller.state().is_animating());
    }

    #[test]
    fn highlighted_component_follows_selection() {
        let mut controller = ExplorerController::default();
        controller.select_modality(ModalityId::Ct);
        controller.toggle_highlight(2);
        assert_eq!(controller.highlighted_component().map(|c| c.name.as_str()), Some("Gantry"));
        controller.select_modality(ModalityId::Pet);
        assert!(controller.highlighted_component().is_none());
    }

    #[test]
    fn current_step_tracks_stepper() {
        let mut controller = ExplorerController::default();
        controller.next_step();
        controller.next_step();
        assert_eq!(controller.current_step().map(|s| s.title.as_str()), Some("Relaxation"));
    }
}
