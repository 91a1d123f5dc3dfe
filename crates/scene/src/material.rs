//! Material variants for vignette meshes.

use glam::Vec3;

/// Normalize 8-bit color channels into the float color the scene stores.
pub fn rgb(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

/// Lit surface. Texture resolution is the hosting renderer's job; the graph
/// carries the base color and response factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardMaterial {
    pub color: Vec3,
    /// 0.0 = mirror-smooth, 1.0 = fully rough.
    pub roughness: f32,
    /// 0.0 = dielectric, 1.0 = pure metal.
    pub metallic: f32,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: Vec3::new(0.8, 0.8, 0.8),
            roughness: 0.5,
            metallic: 0.0,
        }
    }
}

/// Flat surface that ignores every light in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnlitMaterial {
    pub color: Vec3,
}

impl Default for UnlitMaterial {
    fn default() -> Self {
        Self { color: Vec3::ONE }
    }
}

/// The two shading variants a mesh can use. The day/night mode swaps the
/// helicopter parts between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Standard(StandardMaterial),
    Unlit(UnlitMaterial),
}

impl Material {
    /// Lit material with the given base color.
    pub fn standard(color: Vec3) -> Self {
        Self::Standard(StandardMaterial {
            color,
            ..Default::default()
        })
    }

    /// Plain white unlit material.
    pub fn unlit() -> Self {
        Self::Unlit(UnlitMaterial::default())
    }

    /// Whether this variant responds to scene lighting.
    pub fn is_lit(&self) -> bool {
        matches!(self, Self::Standard(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_normalizes_full_range() {
        assert_eq!(rgb(255, 255, 255), Vec3::ONE);
        assert_eq!(rgb(0, 0, 0), Vec3::ZERO);
    }

    #[test]
    fn only_standard_responds_to_light() {
        assert!(Material::standard(Vec3::ONE).is_lit());
        assert!(!Material::unlit().is_lit());
    }
}
