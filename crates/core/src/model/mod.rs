mod color;
mod ids;
mod modality;
mod question;

pub use color::Rgb;
pub use ids::{ModalityId, ParseModalityError};
pub use modality::{Component, ModalityError, ModalityLabels, ModalityRecord, ScanInfo, Step};
pub use question::{OPTION_COUNT, QuestionError, QuizQuestion};
