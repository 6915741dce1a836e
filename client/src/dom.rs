use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    HtmlSpanElement, PointerEvent, Window,
};

use scribble_engine::{Config, Mode, Point, StyleState};

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// A range input and the span echoing its value.
pub struct Slider {
    pub input: HtmlInputElement,
    pub value: HtmlSpanElement,
}

impl Slider {
    pub fn lookup(document: &Document, input_id: &str, value_id: &str) -> Result<Self, JsValue> {
        Ok(Self {
            input: get_element(document, input_id)?,
            value: get_element(document, value_id)?,
        })
    }

    pub fn configure(&self, (min, max): (f64, f64), step: Option<f64>, current: f64) {
        self.input.set_min(&min.to_string());
        self.input.set_max(&max.to_string());
        if let Some(step) = step {
            self.input.set_step(&step.to_string());
        }
        self.input.set_value(&current.to_string());
        self.update_label();
    }

    pub fn update_label(&self) {
        self.value.set_text_content(Some(&self.input.value()));
    }
}

pub struct EraserControls {
    pub button: HtmlButtonElement,
    pub size_control: HtmlElement,
    pub size: Slider,
}

impl EraserControls {
    /// Button text, pressed state and size-slider visibility follow the style.
    pub fn sync(&self, style: &StyleState) {
        self.button.set_text_content(Some(style.eraser_label()));
        let pressed = if style.eraser_enabled { "true" } else { "false" };
        if let Err(err) = self.button.set_attribute("aria-pressed", pressed) {
            log::warn!("aria-pressed not set: {err:?}");
        }
        self.size_control.set_hidden(!style.eraser_enabled);
    }
}

pub fn cursor_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Paint => "crosshair",
        Mode::Erase => "cell",
    }
}

pub fn set_canvas_mode(canvas: &HtmlCanvasElement, mode: Mode) {
    if let Err(err) = canvas.style().set_property("cursor", cursor_for(mode)) {
        log::warn!("cursor not set: {err:?}");
    }
}

/// Read the optional JSON config embedded as `data-config` on the canvas.
/// A bad config is logged and replaced by defaults.
pub fn load_config(canvas: &HtmlCanvasElement) -> Config {
    let Some(text) = canvas.get_attribute("data-config") else {
        return Config::default();
    };
    match Config::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Ignoring data-config: {err}");
            Config::default()
        }
    }
}

/// Fix the canvas bitmap size once, in device pixels, from the content box.
/// The board is never resized afterwards: resizing a canvas wipes it.
pub fn size_canvas(window: &Window, canvas: &HtmlCanvasElement, config: &Config) {
    let (width, height) = config.surface_size(
        u32::try_from(canvas.client_width()).unwrap_or(0),
        u32::try_from(canvas.client_height()).unwrap_or(0),
    );
    let style = canvas.style();
    if config.width != 0 {
        if let Err(err) = style.set_property("width", &format!("{width}px")) {
            log::warn!("canvas width not set: {err:?}");
        }
    }
    if config.height != 0 {
        if let Err(err) = style.set_property("height", &format!("{height}px")) {
            log::warn!("canvas height not set: {err:?}");
        }
    }
    let dpr = window.device_pixel_ratio();
    canvas.set_width((f64::from(width) * dpr) as u32);
    canvas.set_height((f64::from(height) * dpr) as u32);
    log::info!("Board {width}x{height} at dpr {dpr}");
}

/// Viewport position of the drawable area: the bounding rect is the border
/// box, so the border widths are added back.
pub fn content_origin(
    rect_left: f64,
    rect_top: f64,
    border_left: i32,
    border_top: i32,
) -> (f64, f64) {
    (
        rect_left + f64::from(border_left),
        rect_top + f64::from(border_top),
    )
}

pub fn local_point(client_x: f64, client_y: f64, left: f64, top: f64) -> Point {
    Point::new(client_x - left, client_y - top)
}

/// Pointer position relative to the canvas' drawable top-left, in CSS pixels.
pub fn event_to_point(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let (left, top) = content_origin(
        rect.left(),
        rect.top(),
        canvas.client_left(),
        canvas.client_top(),
    );
    local_point(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        left,
        top,
    )
}
