use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, HtmlInputElement, PointerEvent};

use scribble_engine::config::debug_enabled;
use scribble_engine::style::{parse_numeric, ERASER_SIZE_RANGE, OPACITY_RANGE, STROKE_WIDTH_RANGE};
use scribble_engine::{Color, DrawingEngine, Effect, StyleAction};

use crate::canvas::CanvasSurface;
use crate::dom::{
    event_to_point, get_element, load_config, set_canvas_mode, size_canvas, EraserControls,
    Slider,
};

type Engine = Rc<RefCell<DrawingEngine<CanvasSurface>>>;

const OPACITY_STEP: f64 = 0.01;

fn init_logging(debug: bool) {
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already set: {err}").into());
    }
}

fn log_effect(effect: &Effect) {
    match effect {
        Effect::None => {}
        Effect::Segment { .. } | Effect::Cleared(_) => log::trace!("{effect:?}"),
        Effect::Began(_) | Effect::Ended(_) => log::debug!("{effect:?}"),
    }
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let search = window.location().search().unwrap_or_default();
    init_logging(debug_enabled(&search));

    if document.ready_state() != "loading" {
        return start_app();
    }

    let started = Rc::new(Cell::new(false));
    let onready = Closure::<dyn FnMut(Event)>::new(move |_| {
        if started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        onready.as_ref().unchecked_ref(),
    )?;
    onready.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, "board")?;
    let color_input: HtmlInputElement = get_element(&document, "color")?;
    let width = Rc::new(Slider::lookup(&document, "width", "widthValue")?);
    let opacity = Rc::new(Slider::lookup(&document, "opacity", "opacityValue")?);
    let eraser = Rc::new(EraserControls {
        button: get_element(&document, "eraser")?,
        size_control: get_element(&document, "eraserSizeControl")?,
        size: Slider::lookup(&document, "eraserSize", "eraserSizeValue")?,
    });

    let config = load_config(&canvas);
    size_canvas(&window, &canvas, &config);
    // The surface exists, and its brush is bound, before any listener below
    // can deliver an event.
    let surface = CanvasSurface::new(&canvas, window.device_pixel_ratio())?;
    let engine: Engine = Rc::new(RefCell::new(DrawingEngine::new(surface, config.style)));

    {
        let engine = engine.borrow();
        let style = engine.style();
        match style.color.to_hex() {
            Some(hex) => color_input.set_value(&hex),
            None => log::warn!("Color {} has no picker equivalent", style.color),
        }
        width.configure(STROKE_WIDTH_RANGE, None, style.stroke_width);
        opacity.configure(OPACITY_RANGE, Some(OPACITY_STEP), style.opacity);
        eraser.size.configure(ERASER_SIZE_RANGE, None, style.eraser_size);
        eraser.sync(style);
        set_canvas_mode(&canvas, engine.next_mode());
    }

    bind_controls(&engine, &canvas, &color_input, &width, &opacity, &eraser)?;
    bind_pointer(&engine, &canvas)?;

    log::info!("Scribble ready");
    Ok(())
}

fn bind_controls(
    engine: &Engine,
    canvas: &HtmlCanvasElement,
    color_input: &HtmlInputElement,
    width: &Rc<Slider>,
    opacity: &Rc<Slider>,
    eraser: &Rc<EraserControls>,
) -> Result<(), JsValue> {
    {
        let engine = engine.clone();
        let color_input_cb = color_input.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            let color = Color::new(color_input_cb.value());
            engine.borrow_mut().configure(StyleAction::SetColor(color));
        });
        color_input.add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    bind_slider(engine, width, StyleAction::SetStrokeWidth)?;
    bind_slider(engine, opacity, StyleAction::SetOpacity)?;

    {
        let engine = engine.clone();
        let eraser_cb = eraser.clone();
        let canvas = canvas.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let mut engine = engine.borrow_mut();
            engine.configure(StyleAction::ToggleEraser);
            eraser_cb.sync(engine.style());
            set_canvas_mode(&canvas, engine.next_mode());
        });
        eraser
            .button
            .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let engine = engine.clone();
        let eraser_cb = eraser.clone();
        let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
            eraser_cb.size.update_label();
            let Some(size) = parse_numeric(&eraser_cb.size.input.value()) else {
                return;
            };
            engine.borrow_mut().configure(StyleAction::SetEraserSize(size));
        });
        eraser
            .size
            .input
            .add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
        oninput.forget();
    }

    Ok(())
}

fn bind_slider(
    engine: &Engine,
    slider: &Rc<Slider>,
    action: fn(f64) -> StyleAction,
) -> Result<(), JsValue> {
    let engine = engine.clone();
    let slider_cb = slider.clone();
    let oninput = Closure::<dyn FnMut(Event)>::new(move |_| {
        slider_cb.update_label();
        let raw = slider_cb.input.value();
        let Some(value) = parse_numeric(&raw) else {
            log::warn!("Ignoring non-numeric slider value {raw:?}");
            return;
        };
        engine.borrow_mut().configure(action(value));
    });
    slider
        .input
        .add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())?;
    oninput.forget();
    Ok(())
}

fn bind_pointer(engine: &Engine, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let active_pointer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    {
        let engine = engine.clone();
        let down_canvas = canvas.clone();
        let active_pointer = active_pointer.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 || !event.is_primary() || active_pointer.get().is_some() {
                return;
            }
            event.prevent_default();
            let point = event_to_point(&down_canvas, &event);
            let effect = engine.borrow_mut().pointer_down(point);
            if effect == Effect::None {
                return;
            }
            log_effect(&effect);
            active_pointer.set(Some(event.pointer_id()));
            if let Err(err) = down_canvas.set_pointer_capture(event.pointer_id()) {
                log::warn!("Pointer capture failed: {err:?}");
            }
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let engine = engine.clone();
        let move_canvas = canvas.clone();
        let active_pointer = active_pointer.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if active_pointer.get() != Some(event.pointer_id()) {
                return;
            }
            let point = event_to_point(&move_canvas, &event);
            let effect = engine.borrow_mut().pointer_move(point);
            log_effect(&effect);
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let engine = engine.clone();
        let active_pointer = active_pointer.clone();
        let onup = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if active_pointer.get() != Some(event.pointer_id()) {
                return;
            }
            active_pointer.set(None);
            let effect = engine.borrow_mut().pointer_up();
            log_effect(&effect);
        });
        canvas.add_event_listener_with_callback("pointerup", onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    // Capture keeps pointerup coming even outside the canvas; a cancelled or
    // lost pointer ends the gesture instead of leaving it latched.
    for event_name in ["pointercancel", "lostpointercapture"] {
        let engine = engine.clone();
        let active_pointer = active_pointer.clone();
        let oncancel = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if active_pointer.get() != Some(event.pointer_id()) {
                return;
            }
            active_pointer.set(None);
            let effect = engine.borrow_mut().pointer_cancel();
            log_effect(&effect);
        });
        canvas.add_event_listener_with_callback(event_name, oncancel.as_ref().unchecked_ref())?;
        oncancel.forget();
    }

    Ok(())
}
