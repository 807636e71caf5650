use crate::coords::{ScreenDimensions, SurfaceTransform};
use crate::handle::HandleType;
use crate::preview::PreviewRect;
use crate::shape::RectGeometry;
use glam::DVec2;

/// The rendering substrate the editor draws into. The web front-end backs
/// this with SVG elements; tests back it with a recorder.
pub trait RenderSurface {
    /// Live pixel extent of the screen area.
    fn screen_dimensions(&self) -> ScreenDimensions;
    /// Client -> surface-local mapping, including any scaling of the surface.
    fn surface_transform(&self) -> SurfaceTransform;
    fn place_handle(&mut self, kind: HandleType, position: DVec2);
    fn set_overlay_geometry(&mut self, geometry: RectGeometry);
    /// Overlay and all four handles together.
    fn set_visible(&mut self, visible: bool);
    fn set_region_name(&mut self, name: &str);
    fn set_size_readout(&mut self, text: &str);
    fn set_legend(&mut self, text: &str);
    fn draw_previews(&mut self, previews: &[PreviewRect]);
}
