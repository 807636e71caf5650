// Recording render surface shared by the editor tests.

#![allow(dead_code)]

use glam::DVec2;
use region_core::*;

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub screen: ScreenDimensions,
    pub transform: SurfaceTransform,
    pub handles: [Option<DVec2>; 4],
    pub overlay: Option<RectGeometry>,
    pub visible: bool,
    pub name: String,
    pub readout: String,
    pub legend: String,
    pub previews: Vec<PreviewRect>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            screen: ScreenDimensions::new(width, height),
            ..Self::default()
        }
    }

    pub fn handle(&self, kind: HandleType) -> Option<DVec2> {
        self.handles[kind.index()]
    }
}

impl RenderSurface for RecordingSurface {
    fn screen_dimensions(&self) -> ScreenDimensions {
        self.screen
    }

    fn surface_transform(&self) -> SurfaceTransform {
        self.transform
    }

    fn place_handle(&mut self, kind: HandleType, position: DVec2) {
        self.handles[kind.index()] = Some(position);
    }

    fn set_overlay_geometry(&mut self, geometry: RectGeometry) {
        self.overlay = Some(geometry);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_region_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn set_size_readout(&mut self, text: &str) {
        self.readout = text.to_string();
    }

    fn set_legend(&mut self, text: &str) {
        self.legend = text.to_string();
    }

    fn draw_previews(&mut self, previews: &[PreviewRect]) {
        self.previews = previews.to_vec();
    }
}

pub type TestEditor = RegionEditor<RecordingSurface, Vec<UvUpdate>>;

pub fn editor(width: f64, height: f64) -> TestEditor {
    RegionEditor::new(RecordingSurface::new(width, height), Vec::new())
}

pub fn uv_rect(ax: f64, ay: f64, bx: f64, by: f64) -> UvRect {
    UvRect::new(NormalizedPoint::new(ax, ay), NormalizedPoint::new(bx, by))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
