use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Element ids the widget binds to. Hosts may override any subset when
/// constructing the widget; missing fields fall back to the page defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub svg_area: String,
    pub screen_area: String,
    pub uv_area: String,
    pub light_name: String,
    pub light_uv_size: String,
    pub preview_group: String,
    pub legend_text: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            svg_area: SVG_AREA_ID.to_string(),
            screen_area: SCREEN_AREA_ID.to_string(),
            uv_area: UV_AREA_ID.to_string(),
            light_name: LIGHT_NAME_ID.to_string(),
            light_uv_size: LIGHT_UV_SIZE_ID.to_string(),
            preview_group: PREVIEW_GROUP_ID.to_string(),
            legend_text: LEGEND_TEXT_ID.to_string(),
        }
    }
}
