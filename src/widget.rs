use crate::config::ElementIds;
use crate::dom;
use crate::events::{self, InputWiring, SharedEditor};
use crate::host::{from_js, to_js_error, HostNotifier};
use crate::surface::DomSurface;
use anyhow::anyhow;
use region_core::{LightRegion, RegionEditor, RegionRegistry, UvRect};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Host handle on the screen widget.
///
/// ```js
/// const widget = new ScreenWidget((uv) => webApp.notifyUV(uv));
/// widget.loadRegion({ name: "Desk lamp", uvs: { uvA: {x: 0, y: 0}, uvB: {x: 0.5, y: 0.5} } });
/// ```
#[wasm_bindgen]
pub struct ScreenWidget {
    editor: SharedEditor,
}

#[wasm_bindgen]
impl ScreenWidget {
    /// `element_ids` is optional; see `ElementIds` for the recognised keys.
    #[wasm_bindgen(constructor)]
    pub fn new(notify_uv: js_sys::Function, element_ids: JsValue) -> Result<ScreenWidget, JsValue> {
        Self::build(notify_uv, &element_ids).map_err(to_js_error)
    }

    /// Load a region for editing, replacing the current one, and show the handles.
    #[wasm_bindgen(js_name = loadRegion)]
    pub fn load_region(&self, region: JsValue) -> Result<(), JsValue> {
        let region: LightRegion = parse_host(&region, "region")?;
        self.editor.borrow_mut().load_region(region);
        Ok(())
    }

    /// Re-sync from the rectangle the host settled on after a corner update.
    #[wasm_bindgen(js_name = applyUvs)]
    pub fn apply_uvs(&self, uvs: JsValue) -> Result<(), JsValue> {
        let uvs: UvRect = parse_host(&uvs, "uvs")?;
        self.editor.borrow_mut().apply_uvs(uvs);
        Ok(())
    }

    #[wasm_bindgen(js_name = setVisibility)]
    pub fn set_visibility(&self, show: bool) {
        self.editor.borrow_mut().set_visibility(show);
    }

    #[wasm_bindgen(js_name = setLegend)]
    pub fn set_legend(&self, message: String) {
        self.editor.borrow_mut().set_legend(message);
    }

    /// Redraw the other regions (id -> region) as static outlines.
    #[wasm_bindgen(js_name = showPreview)]
    pub fn show_preview(&self, regions: JsValue, except_id: Option<String>) -> Result<(), JsValue> {
        if regions.is_null() || regions.is_undefined() {
            return Ok(());
        }
        let registry: RegionRegistry = parse_host(&regions, "regions")?;
        self.editor
            .borrow_mut()
            .show_preview(&registry, except_id.as_deref());
        Ok(())
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.editor.borrow().drag_state() != region_core::DragState::Idle
    }
}

fn parse_host<T: DeserializeOwned>(value: &JsValue, what: &str) -> Result<T, JsValue> {
    from_js(value).map_err(|e| {
        log::warn!("[host] rejected {}: {:#}", what, e);
        to_js_error(e)
    })
}

impl ScreenWidget {
    fn build(notify_uv: js_sys::Function, element_ids: &JsValue) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let ids: ElementIds = if element_ids.is_null() || element_ids.is_undefined() {
            ElementIds::default()
        } else {
            from_js(element_ids).map_err(|e| {
                log::warn!("[host] rejected element ids: {:#}", e);
                e
            })?
        };

        let surface = DomSurface::new(&document, &ids)?;
        let editor: SharedEditor = Rc::new(RefCell::new(RegionEditor::new(surface, Vec::new())));
        editor.borrow_mut().set_visibility(false);

        events::wire_input_handlers(InputWiring {
            document,
            editor: editor.clone(),
            host: HostNotifier::new(notify_uv),
        });
        log::info!("[widget] ready ({})", ids.screen_area);

        Ok(Self { editor })
    }
}
