use std::fmt::Write as _;

use imaging_core::model::ModalityRecord;
use imaging_core::scan::{Paint, PaintOp, Path, PathCmd, ScanImage};

/// Caption block shown beside the scan output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanCaptionVm {
    pub title: String,
    pub description: String,
    pub best_for: String,
}

#[must_use]
pub fn map_scan_caption(record: &ModalityRecord) -> ScanCaptionVm {
    let info = record.scan_info();
    ScanCaptionVm {
        title: info.title.clone(),
        description: info.description.clone(),
        best_for: format!("Best for: {}", info.best_for),
    }
}

/// Renders a paint list as a standalone SVG document, painting ops in order.
#[must_use]
pub fn scan_svg_markup(image: &ScanImage) -> String {
    let (width, height) = (image.width, image.height);
    let mut defs = String::new();
    let mut body = String::new();

    for (index, op) in image.ops.iter().enumerate() {
        match op {
            PaintOp::FillRect {
                x,
                y,
                width,
                height,
                paint,
            } => {
                let fill = paint_ref(&mut defs, index, paint);
                let _ = write!(
                    body,
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}"/>"#
                );
            }
            PaintOp::FillEllipse {
                cx,
                cy,
                rx,
                ry,
                rotation,
                paint,
            } => {
                let fill = paint_ref(&mut defs, index, paint);
                let _ = write!(
                    body,
                    r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" fill="{fill}""#
                );
                if *rotation != 0.0 {
                    let degrees = rotation.to_degrees();
                    let _ = write!(body, r#" transform="rotate({degrees:.2} {cx} {cy})""#);
                }
                body.push_str("/>");
            }
            PaintOp::StrokeEllipse {
                cx,
                cy,
                rx,
                ry,
                color,
                width,
            } => {
                let _ = write!(
                    body,
                    r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" fill="none" stroke="{color}" stroke-width="{width}"/>"#
                );
            }
            PaintOp::FillPath { path, paint } => {
                let fill = paint_ref(&mut defs, index, paint);
                let d = path_data(path);
                let _ = write!(body, r#"<path d="{d}" fill="{fill}"/>"#);
            }
            PaintOp::StrokePath { path, color, width } => {
                let d = path_data(path);
                let _ = write!(
                    body,
                    r#"<path d="{d}" fill="none" stroke="{color}" stroke-width="{width}"/>"#
                );
            }
        }
    }

    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    if !defs.is_empty() {
        let _ = write!(out, "<defs>{defs}</defs>");
    }
    out.push_str(&body);
    out.push_str("</svg>");
    out
}

/// Fill attribute for `paint`, registering a gradient definition if needed.
fn paint_ref(defs: &mut String, index: usize, paint: &Paint) -> String {
    match paint {
        Paint::Solid { color } => color.to_string(),
        Paint::RadialGradient { cx, cy, r, stops } => {
            let id = format!("scan-gradient-{index}");
            let _ = write!(
                defs,
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{cx}" cy="{cy}" r="{r}">"#
            );
            for stop in stops {
                let _ = write!(
                    defs,
                    r#"<stop offset="{}" stop-color="{}"/>"#,
                    stop.offset, stop.color
                );
            }
            defs.push_str("</radialGradient>");
            format!("url(#{id})")
        }
    }
}

fn path_data(path: &Path) -> String {
    path.cmds
        .iter()
        .map(|cmd| match cmd {
            PathCmd::MoveTo { x, y } => format!("M{x} {y}"),
            PathCmd::LineTo { x, y } => format!("L{x} {y}"),
            PathCmd::QuadTo { cx, cy, x, y } => format!("Q{cx} {cy} {x} {y}"),
            PathCmd::Close => "Z".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use imaging_core::Catalog;
    use imaging_core::model::ModalityId;
    use imaging_core::scan::paint_scan;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn svg(modality: ModalityId) -> String {
        scan_svg_markup(&paint_scan(modality, &mut StdRng::seed_from_u64(11)))
    }

    #[test]
    fn markup_is_a_200px_document_with_black_background() {
        let svg = svg(ModalityId::Mri);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200""#));
        assert!(svg.contains(r##"<rect x="0" y="0" width="200" height="200" fill="#000000"/>"##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn pet_defines_gradients() {
        let svg = svg(ModalityId::Pet);
        assert!(svg.contains("<defs><radialGradient"));
        assert!(svg.contains("url(#scan-gradient-"));
    }

    #[test]
    fn xray_ribs_are_stroked_paths() {
        let svg = svg(ModalityId::Xray);
        assert_eq!(svg.matches(r#"fill="none" stroke="#).count(), 12);
    }

    #[test]
    fn caption_prefixes_best_for() {
        let caption = map_scan_caption(Catalog::builtin().get(ModalityId::Ct));
        assert_eq!(caption.title, "CT Chest Scan");
        assert_eq!(caption.best_for, "Best for: Chest, abdomen, trauma, bones");
    }
}
