use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{QuestionError, QuizQuestion};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizBankError {
    #[error("quiz bank must contain at least one question")]
    Empty,

    #[error("question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, immutable list of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    /// # Errors
    ///
    /// Returns `QuizBankError::Empty` if no questions are given.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizBankError> {
        if questions.is_empty() {
            return Err(QuizBankError::Empty);
        }
        Ok(Self { questions })
    }

    /// The built-in ten-question bank.
    ///
    /// # Panics
    ///
    /// Panics if the built-in questions fail validation.
    #[must_use]
    pub fn builtin() -> &'static QuizBank {
        static BUILTIN: LazyLock<QuizBank> =
            LazyLock::new(|| builtin_bank().expect("built-in quiz bank should be valid"));
        &BUILTIN
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizQuestion> {
        self.questions.iter()
    }

    /// Correct option index of every question, in order.
    #[must_use]
    pub fn answer_key(&self) -> Vec<usize> {
        self.questions.iter().map(QuizQuestion::correct).collect()
    }
}

const BUILTIN_QUESTIONS: [(&str, [&str; 4], usize, &str); 10] = [
    (
        "Which imaging modality uses NO ionizing radiation?",
        ["CT Scan", "X-Ray", "MRI", "PET Scan"],
        2,
        "MRI uses magnetic fields and radio waves, making it radiation-free.",
    ),
    (
        "What does the 'T' in 1.5T or 3T MRI refer to?",
        ["Time", "Tesla", "Tomography", "Transmission"],
        1,
        "Tesla measures magnetic field strength. Higher T = stronger magnet = better detail.",
    ),
    (
        "In CT scanning, what rotates around the patient?",
        ["Patient table", "Detector only", "X-ray tube and detectors", "Magnetic coils"],
        2,
        "The X-ray tube and detector array rotate together in the gantry.",
    ),
    (
        "What substance is used as a radiotracer in PET scans?",
        ["Iodine contrast", "Gadolinium", "FDG (fluorodeoxyglucose)", "Barium sulfate"],
        2,
        "FDG is radioactive glucose that accumulates in metabolically active cells.",
    ),
    (
        "Ultrasound cannot image through which material?",
        ["Water", "Soft tissue", "Air/bone", "Blood"],
        2,
        "Sound waves reflect strongly at air and bone interfaces, blocking transmission.",
    ),
    (
        "Which modality is best for detecting bone fractures?",
        ["MRI", "Ultrasound", "X-Ray", "PET"],
        2,
        "X-rays are absorbed by dense bone, making fractures clearly visible.",
    ),
    (
        "What produces the signal in MRI imaging?",
        ["X-ray absorption", "Sound wave echoes", "Hydrogen atom relaxation", "Gamma ray detection"],
        2,
        "Hydrogen atoms release RF energy when returning to alignment after an RF pulse.",
    ),
    (
        "Which imaging is safest during pregnancy?",
        ["CT Scan", "X-Ray", "Ultrasound", "PET Scan"],
        2,
        "Ultrasound uses sound waves with no radiation, making it safe for fetal imaging.",
    ),
    (
        "What does CT stand for?",
        ["Central Tomography", "Computed Tomography", "Cardiac Testing", "Contrast Technology"],
        1,
        "Computed Tomography uses computer processing to create cross-sectional images.",
    ),
    (
        "In PET imaging, what indicates cancer or high metabolic activity?",
        ["Dark areas", "Hot spots (bright areas)", "No signal", "Blue coloring"],
        1,
        "Cancer cells consume more glucose, causing radiotracer accumulation shown as hot spots.",
    ),
];

pub(crate) fn builtin_bank() -> Result<QuizBank, QuizBankError> {
    let questions = BUILTIN_QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, (prompt, options, correct, explanation))| {
            let options = options.iter().map(|o| (*o).to_owned()).collect();
            QuizQuestion::new(*prompt, options, *correct, *explanation)
                .map_err(|source| QuizBankError::Question { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    QuizBank::new(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_questions() {
        let bank = QuizBank::builtin();
        assert_eq!(bank.len(), 10);
        assert_eq!(bank.last_index(), 9);
    }

    #[test]
    fn builtin_answer_key_matches_reference() {
        assert_eq!(QuizBank::builtin().answer_key(), vec![2, 1, 2, 2, 2, 2, 2, 2, 1, 1]);
    }

    #[test]
    fn first_question_is_about_radiation() {
        let q = QuizBank::builtin().get(0).unwrap();
        assert_eq!(q.prompt(), "Which imaging modality uses NO ionizing radiation?");
        assert_eq!(q.options()[q.correct()], "MRI");
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert!(QuizBank::builtin().get(10).is_none());
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(QuizBank::new(Vec::new()).unwrap_err(), QuizBankError::Empty);
    }
}
