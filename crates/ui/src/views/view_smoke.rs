use imaging_core::model::ModalityId;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with};

#[tokio::test(flavor = "current_thread")]
async fn shell_renders_header_selector_tabs_and_footer() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Medical Imaging Explorer",
        "Drag to rotate",
        "🧲 MRI Scanner",
        "⚛️ PET Scanner",
        "📚 Learn",
        "❓ Quiz",
        "Educational Tool",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn active_modality_button_uses_its_accent() {
    let mut harness = setup_view_harness_with(ViewKind::Shell, |c| {
        c.select_modality(ModalityId::Pet);
    });
    harness.rebuild();
    let html = harness.render();

    let pet_accent = imaging_core::Catalog::builtin()
        .get(ModalityId::Pet)
        .accent()
        .to_string();
    assert!(
        html.contains(&format!("background: {pet_accent}")),
        "missing accent on active button in {html}"
    );
    assert!(
        !html.contains("background: #10b981"),
        "inactive MRI button should not carry its accent in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_lists_components_and_first_step() {
    let mut harness = setup_view_harness(ViewKind::Learn);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Key Components"), "missing components in {html}");
    assert!(html.contains("Gradient Coils"), "missing component row in {html}");
    assert!(html.contains("How It Works"), "missing steps in {html}");
    assert!(
        html.contains("Hydrogen atoms align with the magnetic field"),
        "missing first step description in {html}"
    );
    assert!(html.contains("Magnetic Resonance Imaging"), "missing full name in {html}");
    assert!(!html.contains("✕ Close"), "scan panel should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_shows_highlighted_component_description() {
    let mut harness = setup_view_harness_with(ViewKind::Learn, |c| {
        c.select_modality(ModalityId::Ct);
        c.toggle_highlight(2);
    });
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("The rotating ring housing the tube and detectors"),
        "missing gantry description in {html}"
    );
    assert!(
        !html.contains("Captures X-rays that pass through the body"),
        "only the highlighted description should show in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_shows_scan_output_when_toggled() {
    let mut harness = setup_view_harness_with(ViewKind::Learn, |c| c.toggle_scan_output());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("MRI Brain Scan"), "missing scan title in {html}");
    assert!(
        html.contains("Best for: Brain, spine, joints, soft tissues"),
        "missing best-for line in {html}"
    );
    assert!(html.contains("<svg"), "missing scan image in {html}");
    assert!(html.contains("✕ Close"), "missing close button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_starts_at_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("NO ionizing radiation"), "missing prompt in {html}");
    assert!(html.contains("D."), "missing option letters in {html}");
    assert!(!html.contains("Next Question"), "advance should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_explains_after_answer() {
    let mut harness = setup_view_harness_with(ViewKind::Quiz, |c| {
        c.answer(0);
    });
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("MRI uses magnetic fields and radio waves"),
        "missing explanation in {html}"
    );
    assert!(html.contains("Next Question →"), "missing advance button in {html}");
    assert!(html.contains("quiz-option wrong"), "missing wrong marker in {html}");
    assert!(html.contains("quiz-option correct"), "missing correct marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_results_after_perfect_run() {
    let mut harness = setup_view_harness_with(ViewKind::Quiz, |c| {
        for correct in c.bank().answer_key() {
            c.answer(correct);
            c.advance_quiz();
        }
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Quiz Complete!"), "missing title in {html}");
    assert!(html.contains("10 / 10"), "missing score in {html}");
    assert!(html.contains("🏆"), "missing trophy in {html}");
    assert!(html.contains("Try Again"), "missing reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_survives_async_drive() {
    let mut harness = setup_view_harness(ViewKind::Learn);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("MRI Scanner"), "missing title in {html}");
}
