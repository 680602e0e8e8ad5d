use serde::Serialize;

use super::node::NodeId;

/// RGB color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
    pub const GRAY: Color = Color { r: 0.5, g: 0.5, b: 0.5 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0 };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0 };
    pub const YELLOW: Color = Color { r: 1.0, g: 1.0, b: 0.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse "#RRGGBB"
    pub fn from_hex(hex: &str) -> Result<Color, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("hex color '{}' must start with '#'", hex))?;
        if digits.len() != 6 {
            return Err(format!("hex color '{}' must have six digits", hex));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f32, String> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|e| format!("hex color '{}': {}", hex, e))
        };

        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Planar mirror reflection baked into a basic material.
/// `plane` is the reflection plane in (a, b, c, d) form.
#[derive(Debug, Clone, Serialize)]
pub struct MirrorReflection {
    pub ratio: f32,
    pub plane: [f32; 4],
    pub level: f32,
    pub adaptive_blur_kernel: f32,
    pub render_list: Vec<NodeId>,
}

/// Tagged material descriptor. The composition layer dispatches on the
/// variant; hosts map each variant onto their own material system.
#[derive(Debug, Clone, Serialize)]
pub enum MaterialDesc {
    /// Diffuse-lit material, optionally with a planar mirror reflection
    Basic {
        diffuse: Color,
        mirror: Option<MirrorReflection>,
    },
    /// Metallic-roughness material fed by a reflection probe
    Pbr {
        base_color: Color,
        metallic: f32,
        roughness: f32,
        /// Index into the scene's probe list
        environment_probe: Option<usize>,
    },
    /// Shell fur, used for the snow ground
    Fur {
        fur_length: f32,
        fur_angle: f32,
        fur_color: Color,
        fur_spacing: f32,
        fur_density: f32,
        fur_speed: f32,
        high_level: bool,
        /// Shell count for the fur effect
        quality: u32,
    },
    /// Procedural wood grain texture
    WoodGrain {
        amp_scale: f32,
        resolution: u32,
    },
}

impl MaterialDesc {
    pub fn basic(diffuse: Color) -> Self {
        MaterialDesc::Basic {
            diffuse,
            mirror: None,
        }
    }

    /// Variant name, for logs and host-side dispatch tables
    pub fn kind(&self) -> &'static str {
        match self {
            MaterialDesc::Basic { .. } => "basic",
            MaterialDesc::Pbr { .. } => "pbr",
            MaterialDesc::Fur { .. } => "fur",
            MaterialDesc::WoodGrain { .. } => "wood_grain",
        }
    }
}
