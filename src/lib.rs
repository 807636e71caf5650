#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod host;
mod payload;
mod surface;
mod widget;

pub use widget::ScreenWidget;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("screen-widget starting");
    Ok(())
}
