//! Illustrative 2D "scan output" images, described as ordered paint lists.

mod painters;

use rand::Rng;
use serde::Serialize;

use crate::model::{ModalityId, Rgb};

pub const SCAN_SIZE: u32 = 200;

/// A colour stop at `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Rgb },
    RadialGradient {
        cx: f32,
        cy: f32,
        r: f32,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    #[must_use]
    pub fn solid(color: u32) -> Self {
        Paint::Solid {
            color: Rgb::new(color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCmd {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
    Close,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.cmds.push(PathCmd::MoveTo { x, y });
        self
    }

    #[must_use]
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.cmds.push(PathCmd::LineTo { x, y });
        self
    }

    #[must_use]
    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.cmds.push(PathCmd::QuadTo { cx, cy, x, y });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }
}

/// One drawing operation, applied in order on top of the previous ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        paint: Paint,
    },
    FillEllipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        /// Radians, clockwise in screen space.
        rotation: f32,
        paint: Paint,
    },
    StrokeEllipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        color: Rgb,
        width: f32,
    },
    FillPath {
        path: Path,
        paint: Paint,
    },
    StrokePath {
        path: Path,
        color: Rgb,
        width: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanImage {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<PaintOp>,
}

/// Paints the scan output for `modality`. `rng` only feeds decorative noise.
pub fn paint_scan<R: Rng + ?Sized>(modality: ModalityId, rng: &mut R) -> ScanImage {
    let mut canvas = painters::Canvas::new(SCAN_SIZE, SCAN_SIZE);
    canvas.clear();
    match modality {
        ModalityId::Mri => painters::mri(&mut canvas),
        ModalityId::Ct => painters::ct(&mut canvas),
        ModalityId::Xray => painters::xray(&mut canvas),
        ModalityId::Ultrasound => painters::ultrasound(&mut canvas, rng),
        ModalityId::Pet => painters::pet(&mut canvas),
    }
    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn paint(modality: ModalityId, seed: u64) -> ScanImage {
        paint_scan(modality, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn every_scan_starts_with_black_background() {
        for modality in ModalityId::ALL {
            let image = paint(modality, 1);
            assert_eq!((image.width, image.height), (200, 200));
            assert_eq!(
                image.ops.first(),
                Some(&PaintOp::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 200.0,
                    height: 200.0,
                    paint: Paint::solid(0x000000),
                }),
                "{modality}"
            );
        }
    }

    #[test]
    fn deterministic_scans_ignore_seed() {
        for modality in [ModalityId::Mri, ModalityId::Ct, ModalityId::Xray, ModalityId::Pet] {
            assert_eq!(paint(modality, 1), paint(modality, 2));
        }
    }

    #[test]
    fn ultrasound_speckle_follows_seed() {
        assert_eq!(paint(ModalityId::Ultrasound, 7), paint(ModalityId::Ultrasound, 7));
        assert_ne!(paint(ModalityId::Ultrasound, 7), paint(ModalityId::Ultrasound, 8));
    }

    #[test]
    fn ultrasound_has_two_hundred_speckles_inside_margin() {
        let image = paint(ModalityId::Ultrasound, 3);
        let speckles: Vec<_> = image
            .ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::FillRect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } if (*width - 2.0).abs() < f32::EPSILON && (*height - 2.0).abs() < f32::EPSILON => {
                    Some((*x, *y))
                }
                _ => None,
            })
            .collect();
        assert_eq!(speckles.len(), 200);
        assert!(speckles
            .iter()
            .all(|&(x, y)| (30.0..170.0).contains(&x) && (30.0..170.0).contains(&y)));
    }

    #[test]
    fn xray_draws_six_rib_pairs() {
        let image = paint(ModalityId::Xray, 0);
        let ribs = image
            .ops
            .iter()
            .filter(|op| matches!(op, PaintOp::StrokePath { .. }))
            .count();
        assert_eq!(ribs, 12);
    }

    #[test]
    fn pet_hottest_spot_has_white_core() {
        let image = paint(ModalityId::Pet, 0);
        let white_core = image.ops.iter().any(|op| match op {
            PaintOp::FillEllipse {
                paint: Paint::RadialGradient { stops, .. },
                ..
            } => stops.first().map(|s| s.color) == Some(Rgb::WHITE),
            _ => false,
        });
        assert!(white_core);
    }
}
