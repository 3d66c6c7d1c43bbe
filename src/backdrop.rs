use crate::core::config::{BackdropConfig, ScrollRevealLibConfig};
use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

pub const PARTICLES_CONTAINER_ID: &str = "particles-js";

// Serialize through JSON so field renames match the libraries' option names.
fn to_js<T: Serialize>(value: &T) -> anyhow::Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn global_function(owner: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(owner, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

/// Start `particlesJS` when the page loaded it. Returns whether it ran.
pub fn init_particles() -> anyhow::Result<bool> {
    let global = js_sys::global();
    let Some(particles) = global_function(&global, "particlesJS") else {
        log::debug!("[backdrop] particlesJS not present");
        return Ok(false);
    };
    let config = to_js(&BackdropConfig::default())?;
    particles
        .call2(&JsValue::NULL, &JsValue::from_str(PARTICLES_CONTAINER_ID), &config)
        .map_err(|e| anyhow::anyhow!("particlesJS: {:?}", e))?;
    Ok(true)
}

/// Call `AOS.init` when the page loaded AOS. Returns whether it ran.
pub fn init_scroll_reveal_lib() -> anyhow::Result<bool> {
    let global = js_sys::global();
    let Some(aos) = Reflect::get(&global, &JsValue::from_str("AOS"))
        .ok()
        .filter(|v| v.is_object())
    else {
        log::debug!("[backdrop] AOS not present");
        return Ok(false);
    };
    let Some(init) = global_function(&aos, "init") else {
        return Ok(false);
    };
    let config = to_js(&ScrollRevealLibConfig::default())?;
    init.call1(&aos, &config)
        .map_err(|e| anyhow::anyhow!("AOS.init: {:?}", e))?;
    Ok(true)
}
