//! SVG-backed render surface.

use crate::config::ElementIds;
use crate::constants::*;
use crate::dom;
use glam::DVec2;
use region_core::{
    HandleType, PreviewRect, RectGeometry, RenderSurface, ScreenDimensions, SurfaceTransform,
};
use web_sys as web;

pub struct DomSurface {
    document: web::Document,
    svg_area: web::Element,
    screen_area: web::Element,
    uv_area: web::Element,
    handles: Vec<web::Element>,
    light_name: web::Element,
    light_uv_size: web::Element,
    preview_group: web::Element,
    legend_text: web::Element,
}

impl DomSurface {
    /// Resolve every element up front so a broken page fails at construction.
    pub fn new(document: &web::Document, ids: &ElementIds) -> anyhow::Result<Self> {
        let handles = HandleType::ALL
            .iter()
            .map(|kind| dom::element_by_id(document, kind.id()))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            document: document.clone(),
            svg_area: dom::element_by_id(document, &ids.svg_area)?,
            screen_area: dom::element_by_id(document, &ids.screen_area)?,
            uv_area: dom::element_by_id(document, &ids.uv_area)?,
            handles,
            light_name: dom::element_by_id(document, &ids.light_name)?,
            light_uv_size: dom::element_by_id(document, &ids.light_uv_size)?,
            preview_group: dom::element_by_id(document, &ids.preview_group)?,
            legend_text: dom::element_by_id(document, &ids.legend_text)?,
        })
    }

    pub fn svg_area(&self) -> &web::Element {
        &self.svg_area
    }

    pub fn handle_element(&self, kind: HandleType) -> &web::Element {
        &self.handles[kind.index()]
    }

    fn draw_preview(&self, preview: &PreviewRect) -> anyhow::Result<()> {
        let rect = dom::create_svg(&self.document, "rect")?;
        let g = preview.geometry;
        dom::set_attr(&rect, "x", g.origin.x);
        dom::set_attr(&rect, "y", g.origin.y);
        dom::set_attr(&rect, "width", g.size.x);
        dom::set_attr(&rect, "height", g.size.y);
        _ = rect.set_attribute(
            "style",
            &format!("stroke: {PREVIEW_STROKE}; stroke-width: {PREVIEW_STROKE_WIDTH}"),
        );

        let label = dom::create_svg(&self.document, "text")?;
        label.set_text_content(Some(preview.name.as_str()));
        _ = label.set_attribute("fill", PREVIEW_LABEL_FILL);
        _ = label.set_attribute("text-anchor", "middle");
        dom::set_attr(&label, "x", preview.label_anchor.x);
        dom::set_attr(&label, "y", preview.label_anchor.y);

        self.preview_group
            .append_child(&rect)
            .and_then(|_| self.preview_group.append_child(&label))
            .map_err(|e| anyhow::anyhow!("append preview {}: {:?}", preview.id, e))?;
        Ok(())
    }
}

impl RenderSurface for DomSurface {
    fn screen_dimensions(&self) -> ScreenDimensions {
        dom::bounding_dimensions(&self.screen_area)
    }

    fn surface_transform(&self) -> SurfaceTransform {
        dom::screen_transform(&self.screen_area).unwrap_or_else(|| {
            log::warn!("[surface] no screen CTM, assuming identity");
            SurfaceTransform::IDENTITY
        })
    }

    fn place_handle(&mut self, kind: HandleType, position: DVec2) {
        let el = &self.handles[kind.index()];
        dom::set_attr(el, "cx", position.x);
        dom::set_attr(el, "cy", position.y);
    }

    fn set_overlay_geometry(&mut self, geometry: RectGeometry) {
        dom::set_attr(&self.uv_area, "x", geometry.origin.x);
        dom::set_attr(&self.uv_area, "y", geometry.origin.y);
        dom::set_attr(&self.uv_area, "width", geometry.size.x);
        dom::set_attr(&self.uv_area, "height", geometry.size.y);
    }

    fn set_visible(&mut self, visible: bool) {
        dom::set_display(&self.uv_area, visible);
        for el in &self.handles {
            dom::set_display(el, visible);
        }
    }

    fn set_region_name(&mut self, name: &str) {
        self.light_name.set_text_content(Some(name));
    }

    fn set_size_readout(&mut self, text: &str) {
        self.light_uv_size.set_text_content(Some(text));
    }

    fn set_legend(&mut self, text: &str) {
        self.legend_text.set_text_content(Some(text));
    }

    fn draw_previews(&mut self, previews: &[PreviewRect]) {
        self.preview_group.set_inner_html("");
        for preview in previews {
            if let Err(e) = self.draw_preview(preview) {
                log::error!("[preview] {:?}", e);
            }
        }
    }
}
