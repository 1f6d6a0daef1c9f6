//! Handles to the page's JS camera and asset loader.

use anyhow::anyhow;
use glam::Vec3;
use scrollcam_core::{Bounds, RenderTarget};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Render camera plus scene owned by the page's 3D library.
    pub type StageCamera;

    #[wasm_bindgen(method, js_name = setPosition)]
    fn js_set_position(this: &StageCamera, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method, js_name = lookAt)]
    fn js_look_at(this: &StageCamera, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method, js_name = setModelYaw)]
    fn js_set_model_yaw(this: &StageCamera, yaw: f32);

    #[wasm_bindgen(method, js_name = render)]
    fn js_render(this: &StageCamera);

    /// Release GPU resources; the camera is not used afterwards.
    #[wasm_bindgen(method, js_name = dispose)]
    pub fn js_dispose(this: &StageCamera);

    /// Model loader. `load(onProgress)` resolves to
    /// `{ center: [x, y, z], radius, baseYaw? }` or rejects.
    pub type AssetSource;

    #[wasm_bindgen(method, js_name = load)]
    pub fn js_load(this: &AssetSource, on_progress: &js_sys::Function) -> js_sys::Promise;
}

impl RenderTarget for StageCamera {
    fn set_position(&mut self, position: Vec3) {
        self.js_set_position(position.x, position.y, position.z);
    }

    fn look_at(&mut self, target: Vec3) {
        self.js_look_at(target.x, target.y, target.z);
    }

    fn set_model_yaw(&mut self, yaw: f32) {
        self.js_set_model_yaw(yaw);
    }

    fn draw(&mut self) {
        self.js_render();
    }
}

fn get(obj: &JsValue, key: &str) -> anyhow::Result<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).map_err(|e| anyhow!("{:?}", e))
}

fn number(value: &JsValue, what: &str) -> anyhow::Result<f32> {
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .map(|v| v as f32)
        .ok_or_else(|| anyhow!("{what} is not a finite number"))
}

/// Read the bounding sphere and base yaw from a resolved load promise.
pub fn parse_model_info(value: &JsValue) -> anyhow::Result<(Bounds, f32)> {
    let center = get(value, "center")?;
    if !js_sys::Array::is_array(&center) {
        return Err(anyhow!("center is not an array"));
    }
    let center = js_sys::Array::from(&center);
    if center.length() < 3 {
        return Err(anyhow!("center has {} components", center.length()));
    }
    let center = Vec3::new(
        number(&center.get(0), "center.x")?,
        number(&center.get(1), "center.y")?,
        number(&center.get(2), "center.z")?,
    );
    let radius = number(&get(value, "radius")?, "radius")?;
    let base_yaw = get(value, "baseYaw")?;
    let base_yaw = if base_yaw.is_undefined() || base_yaw.is_null() {
        0.0
    } else {
        number(&base_yaw, "baseYaw")?
    };
    Ok((Bounds { center, radius }, base_yaw))
}

/// Best-effort message from a rejected promise.
pub fn describe_error(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}
