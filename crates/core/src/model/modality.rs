use thiserror::Error;

use crate::model::color::Rgb;
use crate::model::ids::ModalityId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModalityError {
    #[error("{id}: display name cannot be empty")]
    EmptyName { id: ModalityId },

    #[error("{id}: at least one component is required")]
    NoComponents { id: ModalityId },

    #[error("{id}: at least one step is required")]
    NoSteps { id: ModalityId },

    #[error("{id}: scan info field `{field}` cannot be empty")]
    EmptyScanInfo { id: ModalityId, field: &'static str },
}

//
// ─── PARTS ─────────────────────────────────────────────────────────────────────
//

/// One physical part of the apparatus. Its position in the component list is
/// the identifier used by the highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub description: String,
    pub color: Rgb,
}

impl Component {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            color,
        }
    }
}

/// One stage of the "How It Works" walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub description: String,
}

impl Step {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Caption shown next to the illustrative scan output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInfo {
    pub title: String,
    pub description: String,
    pub best_for: String,
}

impl ScanInfo {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        best_for: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            best_for: best_for.into(),
        }
    }
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// Presentation data for one imaging technique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalityRecord {
    id: ModalityId,
    name: String,
    full_name: String,
    icon: String,
    accent: Rgb,
    description: String,
    components: Vec<Component>,
    steps: Vec<Step>,
    scan_info: ScanInfo,
}

/// Text fields of a `ModalityRecord`, grouped to keep the constructor readable.
#[derive(Debug, Clone)]
pub struct ModalityLabels {
    pub name: String,
    pub full_name: String,
    pub icon: String,
    pub accent: Rgb,
    pub description: String,
}

impl ModalityRecord {
    /// Creates a validated record.
    ///
    /// # Errors
    ///
    /// Returns `ModalityError` if the name is blank, the component or step list is
    /// empty, or any scan info field is blank.
    pub fn new(
        id: ModalityId,
        labels: ModalityLabels,
        components: Vec<Component>,
        steps: Vec<Step>,
        scan_info: ScanInfo,
    ) -> Result<Self, ModalityError> {
        if labels.name.trim().is_empty() {
            return Err(ModalityError::EmptyName { id });
        }
        if components.is_empty() {
            return Err(ModalityError::NoComponents { id });
        }
        if steps.is_empty() {
            return Err(ModalityError::NoSteps { id });
        }
        for (field, value) in [
            ("title", &scan_info.title),
            ("description", &scan_info.description),
            ("best_for", &scan_info.best_for),
        ] {
            if value.trim().is_empty() {
                return Err(ModalityError::EmptyScanInfo { id, field });
            }
        }

        Ok(Self {
            id,
            name: labels.name,
            full_name: labels.full_name,
            icon: labels.icon,
            accent: labels.accent,
            description: labels.description,
            components,
            steps,
            scan_info,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ModalityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn accent(&self) -> Rgb {
        self.accent
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    #[must_use]
    pub fn component(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    #[must_use]
    pub fn scan_info(&self) -> &ScanInfo {
        &self.scan_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> ModalityLabels {
        ModalityLabels {
            name: "MRI Scanner".into(),
            full_name: "Magnetic Resonance Imaging".into(),
            icon: "🧲".into(),
            accent: Rgb::new(0x10b981),
            description: "magnets".into(),
        }
    }

    fn scan_info() -> ScanInfo {
        ScanInfo::new("Brain", "Soft tissue", "Brain, spine")
    }

    #[test]
    fn rejects_empty_components() {
        let err = ModalityRecord::new(
            ModalityId::Mri,
            labels(),
            Vec::new(),
            vec![Step::new("Alignment", "atoms align")],
            scan_info(),
        )
        .unwrap_err();
        assert_eq!(err, ModalityError::NoComponents { id: ModalityId::Mri });
    }

    #[test]
    fn rejects_empty_steps() {
        let err = ModalityRecord::new(
            ModalityId::Mri,
            labels(),
            vec![Component::new("Magnet", "field", Rgb::new(0x3b82f6))],
            Vec::new(),
            scan_info(),
        )
        .unwrap_err();
        assert_eq!(err, ModalityError::NoSteps { id: ModalityId::Mri });
    }

    #[test]
    fn rejects_blank_scan_info() {
        let err = ModalityRecord::new(
            ModalityId::Ct,
            labels(),
            vec![Component::new("Gantry", "ring", Rgb::new(0x6b7280))],
            vec![Step::new("Rotation", "spin")],
            ScanInfo::new("CT", "  ", "Chest"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModalityError::EmptyScanInfo {
                id: ModalityId::Ct,
                field: "description"
            }
        );
    }

    #[test]
    fn component_lookup_is_bounds_checked() {
        let record = ModalityRecord::new(
            ModalityId::Mri,
            labels(),
            vec![Component::new("Magnet", "field", Rgb::new(0x3b82f6))],
            vec![Step::new("Alignment", "atoms align")],
            scan_info(),
        )
        .unwrap();
        assert_eq!(record.component(0).map(|c| c.name.as_str()), Some("Magnet"));
        assert!(record.component(1).is_none());
    }
}
