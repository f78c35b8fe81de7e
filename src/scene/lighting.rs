//! Fixed three-light rig for the avatar viewport.

use glam::Vec3;

/// Kind of light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Parallel rays from a direction (position is treated as direction).
    Directional,
    /// Uniform fill with no direction.
    Ambient,
}

/// A single light in the scene.
#[derive(Debug, Clone)]
pub struct Light {
    /// Light kind.
    pub kind: LightKind,
    /// RGB color, each channel in `[0, 1]`.
    pub color: Vec3,
    /// Intensity multiplier.
    pub intensity: f32,
    /// World position (directional lights shine toward the origin).
    pub position: Vec3,
}

/// The fixed rig: one directional key light, one ambient fill, one
/// directional fill from below. Placement is cosmetic, not load-bearing.
#[must_use]
pub fn default_rig() -> Vec<Light> {
    vec![
        Light {
            kind: LightKind::Directional,
            color: Vec3::ONE,
            intensity: 8.0,
            position: Vec3::new(0.0, 5.0, 5.0),
        },
        Light {
            kind: LightKind::Ambient,
            color: Vec3::ONE,
            intensity: 2.0,
            position: Vec3::ZERO,
        },
        Light {
            kind: LightKind::Directional,
            color: Vec3::ONE,
            intensity: 2.0,
            position: Vec3::new(-2.0, -2.0, 3.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_has_key_ambient_and_fill() {
        let rig = default_rig();
        assert_eq!(rig.len(), 3);
        assert_eq!(
            rig.iter()
                .filter(|l| l.kind == LightKind::Directional)
                .count(),
            2
        );
        assert_eq!(
            rig.iter().filter(|l| l.kind == LightKind::Ambient).count(),
            1
        );
    }
}
