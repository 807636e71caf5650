use anyhow::anyhow;
use region_core::{ScreenDimensions, SurfaceTransform};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))
}

#[inline]
pub fn set_attr(el: &web::Element, name: &str, value: f64) {
    _ = el.set_attribute(name, &value.to_string());
}

#[inline]
pub fn set_display(el: &web::Element, show: bool) {
    let display = if show { "block" } else { "none" };
    match el.dyn_ref::<web::SvgElement>() {
        Some(svg) => {
            _ = svg.style().set_property("display", display);
        }
        // fallback for non-SVG nodes
        None => {
            _ = el.set_attribute("style", &format!("display:{display}"));
        }
    }
}

#[inline]
pub fn bounding_dimensions(el: &web::Element) -> ScreenDimensions {
    let rect = el.get_bounding_client_rect();
    ScreenDimensions::new(rect.width(), rect.height())
}

/// Client -> local mapping from the element's screen CTM (`a`, `d`, `e`, `f`).
pub fn screen_transform(el: &web::Element) -> Option<SurfaceTransform> {
    let ctm = el.dyn_ref::<web::SvgGraphicsElement>()?.get_screen_ctm()?;
    Some(SurfaceTransform::new(
        ctm.a() as f64,
        ctm.d() as f64,
        ctm.e() as f64,
        ctm.f() as f64,
    ))
}

pub fn create_svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(crate::constants::SVG_NS), tag)
        .map_err(|e| anyhow!("create <{tag}>: {:?}", e))
}
