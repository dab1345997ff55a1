use std::collections::HashMap;

use crate::orbit::BodyId;

/// How a body is drawn. Colour is sRGB in 0..=1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Surface {
    pub color: [f32; 3],
    pub emissive: bool,
    pub roughness: f32,
    pub metallic: f32,
}

impl Surface {
    pub fn matte(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: false,
            roughness: 0.7,     // Roughly the look of a phong material with low shininess
            metallic: 0.0,
        }
    }

    pub fn glowing(color: [f32; 3]) -> Self {
        Self {
            emissive: true,
            ..Self::matte(color)
        }
    }
}

const FALLBACK_GREY: [f32; 3] = [0.5, 0.5, 0.5];

/// Picks the surface of a body from its identity.
pub trait Appearance: Send + Sync {
    fn surface(&self, id: &BodyId) -> Surface;
}

/// Per-body colour table. Bodies missing from the table are grey.
pub struct PaletteAppearance {
    colors: HashMap<BodyId, [f32; 3]>,
}

impl PaletteAppearance {
    pub fn new(colors: HashMap<BodyId, [f32; 3]>) -> Self {
        Self { colors }
    }
}

impl Appearance for PaletteAppearance {
    fn surface(&self, id: &BodyId) -> Surface {
        Surface::matte(self.colors.get(id).copied().unwrap_or(FALLBACK_GREY))
    }
}

pub struct MonochromeAppearance(pub [f32; 3]);

impl Appearance for MonochromeAppearance {
    fn surface(&self, _id: &BodyId) -> Surface {
        Surface::matte(self.0)
    }
}

/// Parses `#RRGGBB` (leading `#` optional) into sRGB components.
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok().map(|c| c as f32 / 255.0);
    Some([channel(0)?, channel(2)?, channel(4)?])
}
