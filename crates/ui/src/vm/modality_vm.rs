use imaging_core::Catalog;
use imaging_core::model::{ModalityId, ModalityRecord};
use imaging_core::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalityButtonVm {
    pub id: ModalityId,
    pub label: String,
    pub accent: String,
    pub active: bool,
}

#[must_use]
pub fn map_modality_buttons(catalog: &Catalog, selected: ModalityId) -> Vec<ModalityButtonVm> {
    catalog
        .iter()
        .map(|record| ModalityButtonVm {
            id: record.id(),
            label: format!("{} {}", record.icon(), record.name()),
            accent: record.accent().to_string(),
            active: record.id() == selected,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentRowVm {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub swatch: String,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRowVm {
    pub index: usize,
    pub number: String,
    pub title: String,
    pub active: bool,
}

/// Everything the learn page shows for the selected modality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearnVm {
    pub icon: String,
    pub name: String,
    pub full_name: String,
    pub accent: String,
    pub description: String,
    pub animating: bool,
    pub scan_visible: bool,
    pub components: Vec<ComponentRowVm>,
    pub steps: Vec<StepRowVm>,
    pub step_description: String,
    pub can_go_back: bool,
    pub can_go_next: bool,
}

#[must_use]
pub fn map_learn(record: &ModalityRecord, state: &SessionState) -> LearnVm {
    let highlighted = state.highlighted();
    let components = record
        .components()
        .iter()
        .enumerate()
        .map(|(index, component)| ComponentRowVm {
            index,
            name: component.name.clone(),
            description: component.description.clone(),
            swatch: component.color.to_string(),
            highlighted: highlighted == Some(index),
        })
        .collect();
    let stepper = state.stepper();
    let steps = record
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| StepRowVm {
            index,
            number: (index + 1).to_string(),
            title: step.title.clone(),
            active: index == stepper.current(),
        })
        .collect();
    let step_description = record
        .step(stepper.current())
        .map(|s| s.description.clone())
        .unwrap_or_default();

    LearnVm {
        icon: record.icon().to_owned(),
        name: record.name().to_owned(),
        full_name: record.full_name().to_owned(),
        accent: record.accent().to_string(),
        description: record.description().to_owned(),
        animating: state.is_animating(),
        scan_visible: state.is_scan_output_visible(),
        components,
        steps,
        step_description,
        can_go_back: !stepper.is_first(),
        can_go_next: !stepper.is_last(),
    }
}
