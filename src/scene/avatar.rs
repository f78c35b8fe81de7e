//! The loaded avatar: a flat, name-indexed joint table plus mesh metadata.
//!
//! Joints are addressed by rig name (e.g. `mixamorigRightHandIndex1`).
//! Each joint carries live position/rotation/scale channels alongside the
//! rest-pose values captured at load time, so the whole rig can be
//! restored to neutral on stop or reload.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::asset::AvatarAsset;

/// A single animatable node in the avatar's skeletal hierarchy.
#[derive(Debug, Clone)]
pub struct Joint {
    /// Rig name, unique within the avatar.
    pub name: String,
    /// Live translation channel.
    pub position: Vec3,
    /// Live rotation channel (Euler angles, radians).
    pub rotation: Vec3,
    /// Live scale channel.
    pub scale: Vec3,
    rest_position: Vec3,
    rest_rotation: Vec3,
    rest_scale: Vec3,
}

impl Joint {
    /// Joint with the given rest channels; live channels start at rest.
    #[must_use]
    pub fn new(
        name: String,
        position: Vec3,
        rotation: Vec3,
        scale: Vec3,
    ) -> Self {
        Self {
            name,
            position,
            rotation,
            scale,
            rest_position: position,
            rest_rotation: rotation,
            rest_scale: scale,
        }
    }

    /// Restore all live channels to their rest-pose values.
    pub fn reset(&mut self) {
        self.position = self.rest_position;
        self.rotation = self.rest_rotation;
        self.scale = self.rest_scale;
    }

    /// Rest-pose translation.
    #[must_use]
    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    /// Rest-pose rotation.
    #[must_use]
    pub fn rest_rotation(&self) -> Vec3 {
        self.rest_rotation
    }
}

/// Render metadata for one mesh node of the avatar model.
#[derive(Debug, Clone)]
pub struct MeshNode {
    /// Mesh node name.
    pub name: String,
    /// Whether this mesh is a skinned (deforming) mesh.
    pub skinned: bool,
    /// Whether the renderer may frustum-cull this mesh.
    pub frustum_culled: bool,
    /// Whether this mesh casts shadows.
    pub cast_shadow: bool,
    /// Whether this mesh receives shadows.
    pub receive_shadow: bool,
}

/// A loaded humanoid avatar.
pub struct Avatar {
    name: String,
    joints: Vec<Joint>,
    index: FxHashMap<String, usize>,
    meshes: Vec<MeshNode>,
}

impl Avatar {
    /// Build an avatar from a parsed rig asset.
    #[must_use]
    pub fn from_asset(asset: &AvatarAsset) -> Self {
        let mut joints = Vec::with_capacity(asset.joints.len());
        let mut index = FxHashMap::default();
        for spec in &asset.joints {
            if index.contains_key(&spec.name) {
                log::warn!("duplicate joint {:?} in rig, skipping", spec.name);
                continue;
            }
            let _ = index.insert(spec.name.clone(), joints.len());
            joints.push(Joint::new(
                spec.name.clone(),
                Vec3::from_array(spec.position),
                Vec3::from_array(spec.rotation),
                Vec3::from_array(spec.scale),
            ));
        }
        let meshes = asset
            .meshes
            .iter()
            .map(|m| MeshNode {
                name: m.name.clone(),
                skinned: m.skinned,
                frustum_culled: true,
                cast_shadow: false,
                receive_shadow: false,
            })
            .collect();
        Self {
            name: asset.name.clone(),
            joints,
            index,
            meshes,
        }
    }

    /// Avatar model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of joints in the rig.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Look up a joint by rig name.
    #[must_use]
    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.index.get(name).and_then(|&i| self.joints.get(i))
    }

    /// Mutable joint lookup by rig name.
    pub fn joint_mut(&mut self, name: &str) -> Option<&mut Joint> {
        let idx = *self.index.get(name)?;
        self.joints.get_mut(idx)
    }

    /// Mesh metadata for all mesh nodes.
    #[must_use]
    pub fn meshes(&self) -> &[MeshNode] {
        &self.meshes
    }

    /// Restore every joint to the rest pose.
    pub fn reset_pose(&mut self) {
        for joint in &mut self.joints {
            joint.reset();
        }
    }

    /// Normalize mesh flags for display: frustum culling off on skinned
    /// meshes (partially posed limbs must never vanish from clipping),
    /// shadow casting/receiving on everywhere.
    pub fn prepare_for_display(&mut self) {
        for mesh in &mut self.meshes {
            if mesh.skinned {
                mesh.frustum_culled = false;
            }
            mesh.cast_shadow = true;
            mesh.receive_shadow = true;
        }
    }
}

impl std::fmt::Debug for Avatar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Avatar")
            .field("name", &self.name)
            .field("joints", &self.joints.len())
            .field("meshes", &self.meshes.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{JointSpec, MeshSpec};

    fn sample_asset() -> AvatarAsset {
        AvatarAsset {
            name: "test-rig".into(),
            joints: vec![
                JointSpec {
                    name: "mixamorigRightArm".into(),
                    position: [0.0, 1.4, 0.0],
                    rotation: [0.0, 0.0, -1.2],
                    scale: [1.0, 1.0, 1.0],
                },
                JointSpec {
                    name: "mixamorigRightForeArm".into(),
                    position: [0.0, 1.1, 0.0],
                    rotation: [0.0, 0.0, 0.0],
                    scale: [1.0, 1.0, 1.0],
                },
            ],
            meshes: vec![
                MeshSpec {
                    name: "Beta_Surface".into(),
                    skinned: true,
                },
                MeshSpec {
                    name: "Beta_Joints".into(),
                    skinned: false,
                },
            ],
        }
    }

    #[test]
    fn joint_lookup_by_name() {
        let avatar = Avatar::from_asset(&sample_asset());
        assert_eq!(avatar.joint_count(), 2);
        assert!(avatar.joint("mixamorigRightArm").is_some());
        assert!(avatar.joint("mixamorigLeftArm").is_none());
    }

    #[test]
    fn reset_pose_restores_rest_values() {
        let mut avatar = Avatar::from_asset(&sample_asset());
        {
            let arm = avatar.joint_mut("mixamorigRightArm").unwrap();
            arm.rotation.z = 2.0;
            arm.position.x = 5.0;
        }
        avatar.reset_pose();
        let arm = avatar.joint("mixamorigRightArm").unwrap();
        assert_eq!(arm.rotation.z, -1.2);
        assert_eq!(arm.position.x, 0.0);
    }

    #[test]
    fn prepare_for_display_normalizes_mesh_flags() {
        let mut avatar = Avatar::from_asset(&sample_asset());
        avatar.prepare_for_display();
        let skinned = &avatar.meshes()[0];
        assert!(!skinned.frustum_culled);
        assert!(skinned.cast_shadow && skinned.receive_shadow);
        // Non-skinned meshes keep culling but still get shadow flags.
        let rigid = &avatar.meshes()[1];
        assert!(rigid.frustum_culled);
        assert!(rigid.cast_shadow);
    }
}
