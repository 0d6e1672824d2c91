use serde::Serialize;

use crate::model::Rgb;

/// How a surface responds to scene lighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Lit surface with an emissive glow.
    Standard,
    /// Flat, unlit fill.
    Basic,
    /// Hairline stroke.
    Line,
}

/// Color and glow of a component in one highlight state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialTone {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
}

impl MaterialTone {
    #[must_use]
    pub const fn new(color: u32, emissive: u32, emissive_intensity: f32) -> Self {
        Self {
            color: Rgb::new(color),
            emissive: Rgb::new(emissive),
            emissive_intensity,
        }
    }
}

/// Normal and highlighted tones for one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSet {
    pub normal: MaterialTone,
    pub highlighted: MaterialTone,
}

impl ToneSet {
    #[must_use]
    pub const fn new(normal: MaterialTone, highlighted: MaterialTone) -> Self {
        Self {
            normal,
            highlighted,
        }
    }

    #[must_use]
    pub fn pick(&self, highlighted: bool) -> MaterialTone {
        if highlighted {
            self.highlighted
        } else {
            self.normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub shading: Shading,
    pub double_sided: bool,
}

impl Material {
    #[must_use]
    pub fn standard(tone: MaterialTone) -> Self {
        Self {
            color: tone.color,
            emissive: tone.emissive,
            emissive_intensity: tone.emissive_intensity,
            opacity: 1.0,
            shading: Shading::Standard,
            double_sided: false,
        }
    }

    /// Lit surface with no glow.
    #[must_use]
    pub fn plain(color: u32) -> Self {
        Self::standard(MaterialTone::new(color, 0x000000, 0.0))
    }

    #[must_use]
    pub fn basic(color: u32) -> Self {
        Self {
            shading: Shading::Basic,
            ..Self::plain(color)
        }
    }

    #[must_use]
    pub fn line(color: u32) -> Self {
        Self {
            shading: Shading::Line,
            ..Self::plain(color)
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// Flat color approximating how the surface reads on screen: the diffuse
    /// color dimmed by ambient light plus the emissive contribution.
    #[must_use]
    pub fn display_color(&self) -> Rgb {
        if self.shading != Shading::Standard {
            return self.color;
        }
        let base = self.color.to_unit();
        let glow = self.emissive.to_unit();
        let mix = |i: usize| base[i] * 0.75 + glow[i] * self.emissive_intensity;
        Rgb::from_unit([mix(0), mix(1), mix(2)])
    }
}
