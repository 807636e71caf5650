/// Page element identifiers and preview styling.
///
/// The handle circles use the corner identifiers themselves (`tl`, `tr`,
/// `bl`, `br`); everything else is looked up through these ids.
// Root SVG that receives pointer moves
pub const SVG_AREA_ID: &str = "svgArea";
// Rect whose bounding box defines the screen surface
pub const SCREEN_AREA_ID: &str = "screenArea";
// Edited region overlay
pub const UV_AREA_ID: &str = "uvArea";
pub const LIGHT_NAME_ID: &str = "svgLightName";
pub const LIGHT_UV_SIZE_ID: &str = "svgLightUVSize";
pub const PREVIEW_GROUP_ID: &str = "previewRectangles";
pub const LEGEND_TEXT_ID: &str = "legendText";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Preview outlines of the other regions
pub const PREVIEW_STROKE: &str = "rgba(255, 255, 255, 0.2)";
pub const PREVIEW_STROKE_WIDTH: &str = "1px";
pub const PREVIEW_LABEL_FILL: &str = "rgba(255, 255, 255, 0.2)";

// Document-wide events that end a drag. Touch drags taken over by the
// browser (panning) fire `pointercancel` instead of `pointerup`.
pub const DRAG_END_EVENTS: [&str; 2] = ["pointerup", "pointercancel"];
