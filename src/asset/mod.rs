//! Avatar rig assets and the asynchronous loader.
//!
//! A rig asset describes the avatar's joint hierarchy (names plus
//! rest-pose channels) and its mesh nodes. The reference encoding is a
//! small JSON document; hosts with their own model pipeline implement
//! [`AssetSource`] instead.

pub mod loader;

use std::path::Path;

pub use loader::{AssetLoader, LoadEvent, LoadOutcome};
use serde::Deserialize;

use crate::error::HandsignError;

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Rest-pose description of one joint.
#[derive(Debug, Clone, Deserialize)]
pub struct JointSpec {
    /// Rig name, unique within the asset.
    pub name: String,
    /// Rest translation.
    #[serde(default)]
    pub position: [f32; 3],
    /// Rest rotation (Euler angles, radians).
    #[serde(default)]
    pub rotation: [f32; 3],
    /// Rest scale.
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
}

/// Description of one mesh node.
#[derive(Debug, Clone, Deserialize)]
pub struct MeshSpec {
    /// Mesh node name.
    pub name: String,
    /// Whether the mesh deforms with the skeleton.
    #[serde(default)]
    pub skinned: bool,
}

/// A parsed avatar rig.
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarAsset {
    /// Model name.
    pub name: String,
    /// All joints with their rest pose.
    pub joints: Vec<JointSpec>,
    /// All mesh nodes.
    #[serde(default)]
    pub meshes: Vec<MeshSpec>,
}

impl AvatarAsset {
    /// Parse a rig from its JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns [`HandsignError::AssetLoad`] when the document is not a
    /// valid rig description.
    pub fn from_json_str(json: &str) -> Result<Self, HandsignError> {
        serde_json::from_str(json)
            .map_err(|e| HandsignError::AssetLoad(e.to_string()))
    }
}

/// Supplies parsed rig assets to the engine, one in-flight request per
/// lifecycle instance. Implementations run on the loader thread.
pub trait AssetSource: Send {
    /// Load and parse the rig at `path`, reporting coarse progress in
    /// `[0, 1]` through `progress`.
    ///
    /// # Errors
    ///
    /// Returns [`HandsignError::AssetLoad`] or [`HandsignError::Io`] when
    /// the rig cannot be produced.
    fn load(
        &self,
        path: &Path,
        progress: &mut dyn FnMut(f32),
    ) -> Result<AvatarAsset, HandsignError>;
}

/// Reads JSON rig files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileAssetSource;

impl AssetSource for FileAssetSource {
    fn load(
        &self,
        path: &Path,
        progress: &mut dyn FnMut(f32),
    ) -> Result<AvatarAsset, HandsignError> {
        progress(0.0);
        let content =
            std::fs::read_to_string(path).map_err(HandsignError::Io)?;
        progress(0.5);
        let asset = AvatarAsset::from_json_str(&content)?;
        progress(1.0);
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_rig() {
        let json = r#"{
            "name": "ybot",
            "joints": [
                { "name": "mixamorigRightArm", "rotation": [0.0, 0.0, -1.2] }
            ],
            "meshes": [ { "name": "Beta_Surface", "skinned": true } ]
        }"#;
        let asset = AvatarAsset::from_json_str(json).unwrap();
        assert_eq!(asset.name, "ybot");
        assert_eq!(asset.joints.len(), 1);
        assert_eq!(asset.joints[0].scale, [1.0, 1.0, 1.0]);
        assert!(asset.meshes[0].skinned);
    }

    #[test]
    fn malformed_rig_is_an_asset_error() {
        let err = AvatarAsset::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, HandsignError::AssetLoad(_)));
    }
}
