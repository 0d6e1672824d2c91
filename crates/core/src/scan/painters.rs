use rand::Rng;

use super::{GradientStop, Paint, PaintOp, Path, ScanImage};
use crate::model::Rgb;

/// Accumulates paint operations for a fixed-size image.
pub(super) struct Canvas {
    w: f32,
    h: f32,
    ops: Vec<PaintOp>,
}

impl Canvas {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            w: width as f32,
            h: height as f32,
            ops: Vec::new(),
        }
    }

    /// Black full-frame fill; every image starts from this.
    pub fn clear(&mut self) {
        self.fill_rect(0.0, 0.0, self.w, self.h, 0x000000);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: u32) {
        self.ops.push(PaintOp::FillRect {
            x,
            y,
            width,
            height,
            paint: Paint::solid(color),
        });
    }

    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32, paint: Paint) {
        self.ops.push(PaintOp::FillEllipse {
            cx,
            cy,
            rx,
            ry,
            rotation,
            paint,
        });
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: u32) {
        self.ellipse(cx, cy, rx, ry, 0.0, Paint::solid(color));
    }

    fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: u32, width: f32) {
        self.ops.push(PaintOp::StrokeEllipse {
            cx,
            cy,
            rx,
            ry,
            color: Rgb::new(color),
            width,
        });
    }

    fn fill_path(&mut self, path: Path, color: u32) {
        self.ops.push(PaintOp::FillPath {
            path,
            paint: Paint::solid(color),
        });
    }

    fn stroke_path(&mut self, path: Path, color: u32, width: f32) {
        self.ops.push(PaintOp::StrokePath {
            path,
            color: Rgb::new(color),
            width,
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn finish(self) -> ScanImage {
        ScanImage {
            width: self.w as u32,
            height: self.h as u32,
            ops: self.ops,
        }
    }
}

/// Axial brain slice: skull, brain, white matter and the lateral ventricles.
pub(super) fn mri(c: &mut Canvas) {
    let (cx, cy) = (c.w / 2.0, c.h / 2.0);
    c.fill_ellipse(cx, cy, 80.0, 95.0, 0x1a1a1a);
    c.stroke_ellipse(cx, cy, 80.0, 95.0, 0xdddddd, 3.0);
    c.fill_ellipse(cx, cy, 70.0, 85.0, 0x666666);
    c.fill_ellipse(cx, cy - 10.0, 40.0, 50.0, 0x999999);
    c.ellipse(cx - 15.0, cy - 5.0, 8.0, 20.0, -0.3, Paint::solid(0x222222));
    c.ellipse(cx + 15.0, cy - 5.0, 8.0, 20.0, 0.3, Paint::solid(0x222222));
}

/// Axial chest slice.
pub(super) fn ct(c: &mut Canvas) {
    let (cx, cy) = (c.w / 2.0, c.h / 2.0);
    c.fill_ellipse(cx, cy, 90.0, 70.0, 0x111111);
    c.fill_rect(cx - 8.0, cy + 30.0, 16.0, 35.0, 0xeeeeee);
    for i in -3..=3 {
        let i = i as f32;
        c.ellipse(cx + i * 22.0, cy - 10.0, 5.0, 15.0, i * 0.15, Paint::solid(0xeeeeee));
    }
    c.fill_ellipse(cx - 35.0, cy - 5.0, 30.0, 40.0, 0x050505);
    c.fill_ellipse(cx + 35.0, cy - 5.0, 30.0, 40.0, 0x050505);
    c.fill_ellipse(cx - 5.0, cy + 5.0, 25.0, 30.0, 0x555555);
}

/// Frontal chest projection.
pub(super) fn xray(c: &mut Canvas) {
    let (w, h) = (c.w, c.h);
    let cx = w / 2.0;
    c.fill_rect(0.0, 0.0, w, h, 0x222222);

    // Lung fields, mirrored about the midline
    for side in [-1.0, 1.0] {
        let lung = Path::new()
            .move_to(cx + side * 70.0, h - 30.0)
            .quad_to(cx + side * 80.0, h / 2.0, cx + side * 40.0, 30.0)
            .line_to(cx + side * 10.0, 30.0)
            .quad_to(cx + side * 15.0, h / 2.0, cx + side * 20.0, h - 30.0)
            .close();
        c.fill_path(lung, 0x111111);
    }

    for i in 0..6 {
        let dy = i as f32 * 25.0;
        for side in [-1.0, 1.0] {
            let rib = Path::new()
                .move_to(cx + side * 10.0, 50.0 + dy)
                .quad_to(cx + side * 50.0, 55.0 + dy, cx + side * 75.0, 70.0 + dy);
            c.stroke_path(rib, 0xbbbbbb, 2.0);
        }
    }

    c.fill_ellipse(cx - 10.0, h / 2.0 + 20.0, 40.0, 50.0, 0x444444);
    c.fill_rect(cx - 8.0, 20.0, 16.0, h - 40.0, 0xcccccc);
}

/// Sector scan with two structures and speckle noise from `rng`.
pub(super) fn ultrasound<R: Rng + ?Sized>(c: &mut Canvas, rng: &mut R) {
    let (w, h) = (c.w, c.h);
    let (cx, cy) = (w / 2.0, h / 2.0);
    c.fill_rect(0.0, 0.0, w, h, 0x000000);

    let fan = Path::new()
        .move_to(cx, 10.0)
        .line_to(20.0, h - 20.0)
        .line_to(w - 20.0, h - 20.0)
        .close();
    c.fill_path(fan, 0x111111);

    c.ellipse(cx - 20.0, cy + 20.0, 35.0, 45.0, 0.5, Paint::solid(0x666666));
    c.fill_ellipse(cx + 25.0, cy - 20.0, 25.0, 25.0, 0x888888);

    for _ in 0..200 {
        let x = 30.0 + rng.random::<f32>() * (w - 60.0);
        let y = 30.0 + rng.random::<f32>() * (h - 60.0);
        c.fill_rect(x, y, 2.0, 2.0, 0x444444);
    }
}

/// Head outline with a dim uptake gradient and three metabolic hotspots.
pub(super) fn pet(c: &mut Canvas) {
    let (cx, cy) = (c.w / 2.0, c.h / 2.0);
    c.fill_ellipse(cx, cy, 85.0, 95.0, 0x000011);
    c.ellipse(
        cx,
        cy,
        80.0,
        90.0,
        0.0,
        Paint::RadialGradient {
            cx,
            cy,
            r: 90.0,
            stops: stops(&[(0.0, 0x111144), (1.0, 0x000033)]),
        },
    );

    hotspot(c, cx, cy - 50.0, 30.0, 0.8);
    hotspot(c, cx - 15.0, cy + 20.0, 20.0, 0.6);
    hotspot(c, cx + 35.0, cy + 10.0, 15.0, 0.9);
}

fn hotspot(c: &mut Canvas, x: f32, y: f32, r: f32, intensity: f32) {
    let stops = if intensity > 0.7 {
        stops(&[
            (0.0, 0xffffff),
            (0.3, 0xffff00),
            (0.6, 0xff8800),
            (1.0, 0x880000),
        ])
    } else {
        stops(&[(0.0, 0xffff00), (0.5, 0xff8800), (1.0, 0x440000)])
    };
    c.ellipse(
        x,
        y,
        r,
        r,
        0.0,
        Paint::RadialGradient {
            cx: x,
            cy: y,
            r,
            stops,
        },
    );
}

fn stops(items: &[(f32, u32)]) -> Vec<GradientStop> {
    items
        .iter()
        .map(|&(offset, color)| GradientStop {
            offset,
            color: Rgb::new(color),
        })
        .collect()
}
