mod modality_vm;
mod quiz_vm;
mod scan_vm;

pub use modality_vm::{
    ComponentRowVm, LearnVm, ModalityButtonVm, StepRowVm, map_learn, map_modality_buttons,
};
pub use quiz_vm::{
    OptionFeedback, QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizVm, map_quiz,
};
pub use scan_vm::{ScanCaptionVm, map_scan_caption, scan_svg_markup};
