use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{
    Component, ModalityError, ModalityId, ModalityLabels, ModalityRecord, Rgb, ScanInfo, Step,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog is missing a record for {id}")]
    MissingModality { id: ModalityId },

    #[error("catalog has more than one record for {id}")]
    DuplicateModality { id: ModalityId },

    #[error(transparent)]
    Record(#[from] ModalityError),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The complete, immutable set of modality records.
///
/// Holds exactly one record per `ModalityId`, stored in selector order, so
/// `get` is an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ModalityRecord>,
}

impl Catalog {
    /// Builds a catalog from records in any order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a modality is missing or listed twice.
    pub fn new(records: Vec<ModalityRecord>) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<ModalityRecord>> = vec![None; ModalityId::COUNT];
        for record in records {
            let slot = &mut slots[record.id().index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateModality { id: record.id() });
            }
            *slot = Some(record);
        }

        let records = slots
            .into_iter()
            .zip(ModalityId::ALL)
            .map(|(slot, id)| slot.ok_or(CatalogError::MissingModality { id }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// The built-in catalog shipped with the application.
    ///
    /// # Panics
    ///
    /// Panics if the built-in records fail validation, which is a programming error
    /// covered by tests.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: LazyLock<Catalog> =
            LazyLock::new(|| builtin_catalog().expect("built-in catalog should be valid"));
        &BUILTIN
    }

    #[must_use]
    pub fn get(&self, id: ModalityId) -> &ModalityRecord {
        &self.records[id.index()]
    }

    /// Records in selector order.
    pub fn iter(&self) -> impl Iterator<Item = &ModalityRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//
// ─── BUILT-IN DATA ─────────────────────────────────────────────────────────────
//

fn labels(name: &str, full_name: &str, icon: &str, accent: u32, description: &str) -> ModalityLabels {
    ModalityLabels {
        name: name.to_owned(),
        full_name: full_name.to_owned(),
        icon: icon.to_owned(),
        accent: Rgb::new(accent),
        description: description.to_owned(),
    }
}

fn components(items: &[(&str, &str, u32)]) -> Vec<Component> {
    items
        .iter()
        .map(|&(name, description, color)| Component::new(name, description, Rgb::new(color)))
        .collect()
}

fn steps(items: &[(&str, &str)]) -> Vec<Step> {
    items
        .iter()
        .map(|&(title, description)| Step::new(title, description))
        .collect()
}

pub(crate) fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let mri = ModalityRecord::new(
        ModalityId::Mri,
        labels(
            "MRI Scanner",
            "Magnetic Resonance Imaging",
            "🧲",
            0x10b981,
            "Uses powerful magnets and radio waves to create detailed images of organs and tissues without radiation.",
        ),
        components(&[
            (
                "Main Magnet",
                "Creates a strong magnetic field (1.5T - 3T) that aligns hydrogen atoms in your body",
                0x3b82f6,
            ),
            (
                "Gradient Coils",
                "Vary the magnetic field to pinpoint exact locations for imaging",
                0x8b5cf6,
            ),
            (
                "RF Coil",
                "Sends radio frequency pulses and receives signals from the body",
                0xf59e0b,
            ),
            ("Patient Table", "Moves the patient into the scanner bore", 0x6b7280),
        ]),
        steps(&[
            ("Alignment", "Hydrogen atoms align with the magnetic field"),
            ("RF Pulse", "Radio waves knock atoms out of alignment"),
            ("Relaxation", "Atoms return to alignment, releasing energy"),
            ("Signal Detection", "RF coil detects the released energy"),
            ("Image Formation", "Computer processes signals into images"),
        ]),
        ScanInfo::new(
            "MRI Brain Scan",
            "Excellent soft tissue contrast. Shows brain structures, tumors, and white/gray matter differentiation.",
            "Brain, spine, joints, soft tissues",
        ),
    )?;

    let ct = ModalityRecord::new(
        ModalityId::Ct,
        labels(
            "CT Scanner",
            "Computed Tomography",
            "📡",
            0x3b82f6,
            "Uses rotating X-ray beams to create cross-sectional images of the body.",
        ),
        components(&[
            ("X-Ray Tube", "Rotates around the patient, emitting X-ray beams", 0xef4444),
            ("Detector Array", "Captures X-rays that pass through the body", 0x10b981),
            ("Gantry", "The rotating ring housing the tube and detectors", 0x6b7280),
            ("Patient Table", "Moves patient through the gantry", 0x78716c),
        ]),
        steps(&[
            ("Positioning", "Patient moves into the gantry"),
            ("Rotation", "X-ray tube rotates 360° around patient"),
            ("Attenuation", "Different tissues absorb X-rays differently"),
            ("Detection", "Detectors measure transmitted X-rays"),
            ("Reconstruction", "Computer builds cross-sectional slices"),
        ]),
        ScanInfo::new(
            "CT Chest Scan",
            "Shows detailed cross-sections. Excellent for bones, lungs, and detecting tumors or bleeding.",
            "Chest, abdomen, trauma, bones",
        ),
    )?;

    let xray = ModalityRecord::new(
        ModalityId::Xray,
        labels(
            "X-Ray",
            "Radiography",
            "☢️",
            0xef4444,
            "Projects X-ray beams through the body onto a detector to visualize bones and dense structures.",
        ),
        components(&[
            ("X-Ray Tube", "Generates X-ray photons via electron acceleration", 0xef4444),
            ("Collimator", "Shapes and focuses the X-ray beam", 0xf59e0b),
            ("Detector/Film", "Captures the X-ray image", 0x10b981),
            ("Patient Table", "Positions patient between tube and detector", 0x6b7280),
        ]),
        steps(&[
            ("Generation", "Electrons hit tungsten target, producing X-rays"),
            ("Filtration", "Low-energy rays filtered out for safety"),
            ("Exposure", "X-rays pass through the body"),
            ("Absorption", "Dense tissues (bone) block more X-rays"),
            ("Image Capture", "Detector records the shadow image"),
        ]),
        ScanInfo::new(
            "Chest X-Ray",
            "2D projection image. Bones appear white, air appears black. Quick and low radiation dose.",
            "Fractures, pneumonia, heart size",
        ),
    )?;

    let ultrasound = ModalityRecord::new(
        ModalityId::Ultrasound,
        labels(
            "Ultrasound",
            "Sonography",
            "🔊",
            0x8b5cf6,
            "Uses high-frequency sound waves to create real-time images of soft tissues and blood flow.",
        ),
        components(&[
            ("Transducer", "Emits and receives sound waves (2-18 MHz)", 0x8b5cf6),
            (
                "Piezoelectric Crystals",
                "Convert electrical signals to sound and vice versa",
                0x06b6d4,
            ),
            (
                "Acoustic Gel",
                "Eliminates air gap for better sound transmission",
                0x10b981,
            ),
            ("Display Monitor", "Shows real-time ultrasound images", 0x6b7280),
        ]),
        steps(&[
            ("Pulse Emission", "Transducer sends sound wave pulses"),
            ("Propagation", "Waves travel through tissues"),
            ("Reflection", "Waves bounce back at tissue boundaries"),
            ("Echo Detection", "Transducer receives returning echoes"),
            ("Image Display", "Echoes converted to real-time image"),
        ]),
        ScanInfo::new(
            "Fetal Ultrasound",
            "Real-time imaging with no radiation. Shows movement and blood flow. Safe for pregnancy.",
            "Pregnancy, heart, abdomen, vessels",
        ),
    )?;

    let pet = ModalityRecord::new(
        ModalityId::Pet,
        labels(
            "PET Scanner",
            "Positron Emission Tomography",
            "⚛️",
            0xf59e0b,
            "Detects gamma rays from radioactive tracers to show metabolic activity in tissues.",
        ),
        components(&[
            (
                "Detector Ring",
                "Surrounds patient to capture gamma rays from all angles",
                0xf59e0b,
            ),
            ("Scintillator Crystals", "Convert gamma rays to visible light", 0x10b981),
            ("Photomultipliers", "Amplify light signals for processing", 0x3b82f6),
            (
                "Radiotracer",
                "Injected substance (e.g., FDG) that emits positrons",
                0xef4444,
            ),
        ]),
        steps(&[
            ("Tracer Injection", "Radioactive glucose injected into patient"),
            ("Uptake", "Active cells absorb more tracer"),
            ("Decay", "Tracer emits positrons that annihilate with electrons"),
            ("Gamma Detection", "Two gamma rays detected simultaneously"),
            ("Metabolic Map", "Computer creates activity map"),
        ]),
        ScanInfo::new(
            "PET-CT Fusion",
            "Shows metabolic activity. Hot spots indicate high glucose uptake (cancer, infection, inflammation).",
            "Cancer staging, neurology, cardiology",
        ),
    )?;

    Catalog::new(vec![mri, ct, xray, ultrasound, pet])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ModalityId) -> ModalityRecord {
        Catalog::builtin().get(id).clone()
    }

    #[test]
    fn builtin_has_one_record_per_modality_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), ModalityId::COUNT);
        let ids: Vec<_> = catalog.iter().map(ModalityRecord::id).collect();
        assert_eq!(ids, ModalityId::ALL.to_vec());
    }

    #[test]
    fn every_builtin_record_has_four_components_and_five_steps() {
        for record in Catalog::builtin().iter() {
            assert_eq!(record.components().len(), 4, "{}", record.id());
            assert_eq!(record.steps().len(), 5, "{}", record.id());
        }
    }

    #[test]
    fn mri_record_matches_reference_data() {
        let mri = Catalog::builtin().get(ModalityId::Mri);
        assert_eq!(mri.name(), "MRI Scanner");
        assert_eq!(mri.accent().to_string(), "#10b981");
        assert_eq!(mri.components()[0].name, "Main Magnet");
        assert_eq!(mri.steps()[4].title, "Image Formation");
        assert_eq!(mri.scan_info().best_for, "Brain, spine, joints, soft tissues");
    }

    #[test]
    fn pet_radiotracer_is_last_component() {
        let pet = Catalog::builtin().get(ModalityId::Pet);
        assert_eq!(pet.components()[3].name, "Radiotracer");
        assert_eq!(pet.components()[3].color, Rgb::new(0xef4444));
    }

    #[test]
    fn new_rejects_duplicates() {
        let err = Catalog::new(vec![record(ModalityId::Mri), record(ModalityId::Mri)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateModality { id: ModalityId::Mri });
    }

    #[test]
    fn new_rejects_missing_modality() {
        let records = vec![
            record(ModalityId::Pet),
            record(ModalityId::Mri),
            record(ModalityId::Ct),
            record(ModalityId::Xray),
        ];
        let err = Catalog::new(records).unwrap_err();
        assert_eq!(err, CatalogError::MissingModality { id: ModalityId::Ultrasound });
    }

    #[test]
    fn new_sorts_records_into_selector_order() {
        let records = ModalityId::ALL.into_iter().rev().map(record).collect();
        let catalog = Catalog::new(records).unwrap();
        assert_eq!(catalog.get(ModalityId::Xray).name(), "X-Ray");
        assert_eq!(catalog.iter().next().map(ModalityRecord::id), Some(ModalityId::Mri));
    }
}
