//! Static outlines of the other synced regions, drawn behind the edited one.

use crate::constants::PREVIEW_INLINE_CAPACITY;
use crate::coords::{to_pixel, ScreenDimensions};
use crate::shape::RectGeometry;
use crate::uv::LightRegion;
use fnv::FnvHashMap;
use glam::DVec2;
use smallvec::SmallVec;

/// Region id -> region, as published by the host.
pub type RegionRegistry = FnvHashMap<String, LightRegion>;

pub type PreviewList = SmallVec<[PreviewRect; PREVIEW_INLINE_CAPACITY]>;

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewRect {
    pub id: String,
    pub name: String,
    pub geometry: RectGeometry,
    pub label_anchor: DVec2,
}

/// Lay out every region except `except_id`, sorted by id so redraws are stable.
pub fn preview_layout(
    registry: &RegionRegistry,
    except_id: Option<&str>,
    screen: ScreenDimensions,
) -> PreviewList {
    let mut previews: PreviewList = registry
        .iter()
        .filter(|(id, _)| Some(id.as_str()) != except_id)
        .map(|(id, region)| {
            let uvs = region.uvs.normalized();
            let geometry = RectGeometry::from_corners(
                to_pixel(uvs.corner_a, screen),
                to_pixel(uvs.corner_b, screen),
            );
            PreviewRect {
                id: id.clone(),
                name: region.name.clone(),
                geometry,
                label_anchor: geometry.center(),
            }
        })
        .collect();
    previews.sort_by(|a, b| a.id.cmp(&b.id));
    previews
}
