use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{RegularState, NOT_AVAILABLE};

/// Body of `GET /state`. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResponse {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub scene: Option<String>,
}

impl StateResponse {
    /// The reported scene, with an empty string treated as absent.
    pub fn scene(&self) -> Option<&str> {
        non_empty(self.scene.as_deref())
    }
}

impl From<&StateResponse> for RegularState {
    fn from(value: &StateResponse) -> Self {
        let or_placeholder =
            |field: &Option<String>| non_empty(field.as_deref()).unwrap_or(NOT_AVAILABLE).to_string();
        Self {
            mode: or_placeholder(&value.mode),
            mood: or_placeholder(&value.mood),
            scene: or_placeholder(&value.scene),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderEffect {
    #[default]
    None,
    PulseMagenta,
    FlickerBloodOrange,
    /// Effects this client has no class for (`pulseDim`, `pulseMagenta_frenzy`, ...).
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PopupEffect {
    #[default]
    None,
    Glitch,
    #[serde(other)]
    Other,
}

/// Body of `GET /lumen_visual_state`. A missing field leaves that aspect of the
/// presentation untouched. An explicit `null` effect or overlay is present and
/// means "off"; a `null` color is the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_effect: Option<BorderEffect>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub popup_effect: Option<PopupEffect>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub scanline_overlay: Option<bool>,
}

impl VisualState {
    pub fn highlight_color(&self) -> Option<&str> {
        non_empty(self.highlight_color.as_deref())
    }

    pub fn border_color(&self) -> Option<&str> {
        non_empty(self.border_color.as_deref())
    }
}

/// Acknowledgement body of `POST /mode/{m}` and `POST /scene/{s}`. Only its
/// well-formedness matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandAck(pub serde_json::Value);

fn null_as_default<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
