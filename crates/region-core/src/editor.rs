//! The widget core: one edited region, four handles, one drag session.

use crate::drag::{DragController, DragState};
use crate::error::RegionError;
use crate::handle::{Handle, HandleSet, HandleType};
use crate::legend::Legend;
use crate::notify::NotificationSink;
use crate::preview::{preview_layout, RegionRegistry};
use crate::shape::{RectGeometry, ShapeSynchronizer, SizeReadout};
use crate::surface::RenderSurface;
use crate::uv::{LightRegion, UvRect};
use glam::DVec2;

pub struct RegionEditor<S, N> {
    surface: S,
    sink: N,
    handles: HandleSet,
    drag: DragController,
    overlay: RectGeometry,
    readout: Option<SizeReadout>,
    region: Option<LightRegion>,
    legend: Legend,
    visible: bool,
}

impl<S: RenderSurface, N: NotificationSink> RegionEditor<S, N> {
    pub fn new(surface: S, sink: N) -> Self {
        Self {
            surface,
            sink,
            handles: HandleSet::new(),
            drag: DragController::new(),
            overlay: RectGeometry::default(),
            readout: None,
            region: None,
            legend: Legend::None,
            visible: false,
        }
    }

    /// Replace the edited region, mirror its rectangle and show the handles.
    pub fn load_region(&mut self, region: LightRegion) {
        log::info!("[region] loaded {:?}", region.name);
        self.sync_shape(&region.uvs);
        self.set_visibility(true);
        self.surface.set_region_name(&region.name);
        self.region = Some(region);
    }

    /// Re-sync from a rectangle pushed back by the host. Never notifies.
    pub fn apply_uvs(&mut self, uvs: UvRect) {
        if let Some(region) = self.region.as_mut() {
            region.uvs = uvs;
        }
        self.sync_shape(&uvs);
    }

    fn sync_shape(&mut self, uvs: &UvRect) {
        if uvs.is_inverted() {
            log::debug!("[region] normalizing inverted rectangle {:?}", uvs);
        }
        let screen = self.surface.screen_dimensions();
        let synced = ShapeSynchronizer::apply(uvs, screen, &mut self.handles);
        for handle in self.handles.iter() {
            self.surface.place_handle(handle.kind(), handle.position());
        }
        self.surface.set_overlay_geometry(synced.overlay);
        self.surface.set_size_readout(&synced.readout.to_string());
        self.overlay = synced.overlay;
        self.readout = Some(synced.readout);
    }

    /// All-or-nothing: overlay and the four handles. Positions are untouched.
    pub fn set_visibility(&mut self, show: bool) {
        self.visible = show;
        self.surface.set_visible(show);
    }

    pub fn set_legend(&mut self, legend: impl Into<Legend>) {
        self.legend = legend.into();
        self.surface.set_legend(self.legend.text());
    }

    pub fn show_preview(&mut self, registry: &RegionRegistry, except_id: Option<&str>) {
        let screen = self.surface.screen_dimensions();
        let previews = preview_layout(registry, except_id, screen);
        self.surface.draw_previews(&previews);
    }

    // ---------------- Pointer input ----------------

    pub fn press_handle(&mut self, kind: HandleType) {
        self.handles.get(kind).begin_drag(&mut self.drag);
    }

    pub fn press_handle_id(&mut self, id: &str) -> Result<(), RegionError> {
        let kind = HandleType::from_id(id)?;
        self.press_handle(kind);
        Ok(())
    }

    /// Pointer moved over the surface (client coordinates). Idle ignores it;
    /// while dragging the active handle follows and the host is notified.
    /// Returns the applied handle position.
    pub fn pointer_move(&mut self, client: DVec2) -> Option<DVec2> {
        let surface = &self.surface;
        let (kind, local) = self
            .drag
            .route_move(client, || surface.surface_transform())?;
        let screen = self.surface.screen_dimensions();
        let sink: &mut dyn NotificationSink = &mut self.sink;
        let position = self.handles.get_mut(kind).set_position(local, screen, Some(sink));
        self.surface.place_handle(kind, position);
        Some(position)
    }

    /// Pointer released anywhere in the document.
    pub fn pointer_release(&mut self) -> Option<HandleType> {
        let released = self.drag.release()?;
        self.handles.get(released).end_drag();
        Some(released)
    }

    // ---------------- Accessors ----------------

    pub fn handle(&self, kind: HandleType) -> &Handle {
        self.handles.get(kind)
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn overlay(&self) -> RectGeometry {
        self.overlay
    }

    pub fn readout(&self) -> Option<SizeReadout> {
        self.readout
    }

    pub fn region(&self) -> Option<&LightRegion> {
        self.region.as_ref()
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }
}
