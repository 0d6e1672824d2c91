use imaging_core::model::ModalityId;
use imaging_core::quiz::{AdvanceOutcome, AnswerOutcome, ResultTier};
use imaging_core::session::ActiveTab;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{ExplorerController, ExplorerSettings};

#[test]
fn perfect_quiz_run_scores_ten() {
    let mut controller = ExplorerController::new(&ExplorerSettings::default());
    controller.switch_tab(ActiveTab::Quiz);
    let key = controller.bank().answer_key();

    for (index, &correct) in key.iter().enumerate() {
        assert_eq!(controller.state().quiz().current_question(), index);
        assert_eq!(controller.answer(correct), AnswerOutcome::Correct);
        // a second click on the same question is ignored
        assert_eq!(controller.answer((correct + 1) % 4), AnswerOutcome::Ignored);
        let outcome = controller.advance_quiz();
        if index + 1 < key.len() {
            assert_eq!(outcome, AdvanceOutcome::Next(index + 1));
        } else {
            assert_eq!(outcome, AdvanceOutcome::Finished(10));
        }
    }

    let quiz = controller.state().quiz();
    assert!(quiz.is_finished());
    assert_eq!(quiz.score(), 10);
    assert_eq!(quiz.result_tier(), ResultTier::Excellent);

    controller.reset_quiz();
    assert_eq!(controller.state().quiz().score(), 0);
    assert_eq!(controller.state().quiz().current_question(), 0);
    assert_eq!(controller.state().active_tab(), ActiveTab::Quiz);
}

#[test]
fn wrong_answers_land_in_keep_studying() {
    let mut controller = ExplorerController::default();
    for correct in controller.bank().answer_key() {
        controller.answer((correct + 1) % 4);
        controller.advance_quiz();
    }
    assert_eq!(controller.state().quiz().score(), 0);
    assert_eq!(
        controller.state().quiz().result_tier(),
        ResultTier::KeepStudying
    );
}

#[test]
fn selecting_a_modality_resets_learn_state() {
    let mut controller = ExplorerController::default();
    controller.next_step();
    controller.next_step();
    controller.toggle_highlight(1);
    controller.toggle_scan_output();
    assert_eq!(controller.state().tutorial_step(), 2);

    controller.select_modality(ModalityId::Xray);

    let state = controller.state();
    assert_eq!(state.selected(), ModalityId::Xray);
    assert_eq!(state.tutorial_step(), 0);
    assert_eq!(state.highlighted(), None);
    assert!(!state.is_scan_output_visible());
    assert_eq!(controller.current_step().map(|s| s.title.as_str()), Some("Generation"));
}

#[test]
fn stepper_clamps_at_both_ends() {
    let mut controller = ExplorerController::default();
    controller.back_step();
    assert_eq!(controller.state().tutorial_step(), 0);
    for _ in 0..10 {
        controller.next_step();
    }
    assert_eq!(controller.state().tutorial_step(), 4);
    controller.select_step(9);
    assert_eq!(controller.state().tutorial_step(), 4);
}

#[test]
fn scene_key_tracks_highlight_and_animation() {
    let mut controller = ExplorerController::default();
    controller.select_modality(ModalityId::Ct);
    controller.toggle_highlight(2);
    controller.toggle_animation();

    let key = controller.scene_key();
    assert_eq!(key.modality, ModalityId::Ct);
    assert_eq!(key.highlight, Some(2));
    assert!(!key.animating);
    assert_eq!(controller.build_scene().key(), key);

    controller.toggle_highlight(2);
    assert_eq!(controller.scene_key().highlight, None);
}

#[test]
fn scan_output_follows_selected_modality() {
    let mut controller = ExplorerController::default();
    controller.select_modality(ModalityId::Pet);
    let image = controller.scan_output(&mut StdRng::seed_from_u64(7));
    assert_eq!(image.width, 200);
    assert_eq!(image.height, 200);
    assert!(!image.ops.is_empty());
}
