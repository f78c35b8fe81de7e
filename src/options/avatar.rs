use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Selectable avatar models.
///
/// Each avatar maps to a fixed rig asset path. Switching the avatar tears
/// down the current scene and triggers an asynchronous reload.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AvatarId {
    /// The default male-presenting Mixamo rig.
    #[default]
    Ybot,
    /// The alternate female-presenting Mixamo rig.
    Xbot,
}

impl AvatarId {
    /// Fixed asset path for this avatar's rig description.
    #[must_use]
    pub fn asset_path(self) -> &'static str {
        match self {
            Self::Ybot => "assets/models/ybot.json",
            Self::Xbot => "assets/models/xbot.json",
        }
    }

    /// Human-readable label for UI display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ybot => "YBot",
            Self::Xbot => "XBot",
        }
    }
}
