//! WebAssembly entry point and DOM wiring.

use crate::canvas::CanvasSurface;
use crate::ui::{
    ACTIVE_CLASS, ActiveControl, CANVAS_ID, CONFIG_ATTR, ERASER_ID, ERASER_MODE_CLASS, Palette,
    SWATCH_COLOR_ATTR, SWATCH_SELECTOR,
};
use inkpad_core::{DrawingPad, InkColor, MouseKind, PadConfig, RawInput, Tool, TouchKind};
use kurbo::Point;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent, TouchEvent,
};

type SharedPad = Rc<RefCell<DrawingPad<CanvasSurface>>>;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Load the config from the canvas, falling back to defaults sized to the
/// canvas element.
fn load_config(canvas: &HtmlCanvasElement) -> Result<PadConfig, JsValue> {
    match canvas.get_attribute(CONFIG_ATTR) {
        Some(json) => {
            let config = PadConfig::from_json(&json).map_err(js_error)?;
            canvas.set_width(config.width);
            canvas.set_height(config.height);
            Ok(config)
        }
        None => Ok(PadConfig {
            width: canvas.width(),
            height: canvas.height(),
            ..PadConfig::default()
        }),
    }
}

/// Collect palette swatches and their colors. Swatches with unparseable
/// colors are skipped.
fn find_swatches(document: &Document) -> Result<Vec<(Element, InkColor)>, JsValue> {
    let nodes = document.query_selector_all(SWATCH_SELECTOR)?;
    let mut swatches = Vec::new();
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(value) = element.get_attribute(SWATCH_COLOR_ATTR) else {
            continue;
        };
        match InkColor::parse(&value) {
            Ok(color) => swatches.push((element, color)),
            Err(err) => log::warn!("Ignoring swatch: {err}"),
        }
    }
    Ok(swatches)
}

fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        log::warn!("Failed to toggle class {class}: {err:?}");
    }
}

/// Reflect the selected tool in the palette, eraser button and cursor.
fn highlight(
    tool: &Tool,
    palette: &Palette,
    swatches: &[Element],
    eraser: Option<&Element>,
    canvas: &Element,
) {
    let active = palette.active_control(tool);
    for (index, swatch) in swatches.iter().enumerate() {
        set_class(swatch, ACTIVE_CLASS, active == ActiveControl::Swatch(index));
    }
    if let Some(eraser) = eraser {
        set_class(eraser, ACTIVE_CLASS, active == ActiveControl::Eraser);
    }
    set_class(canvas, ERASER_MODE_CLASS, tool.is_eraser());
}

fn canvas_origin(canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

fn touch_points(event: &TouchEvent) -> Vec<Point> {
    let list = event.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

fn listen_mouse(canvas: &HtmlCanvasElement, pad: &SharedPad) -> Result<(), JsValue> {
    let events = [
        ("mousedown", MouseKind::Down),
        ("mousemove", MouseKind::Move),
        ("mouseup", MouseKind::Up),
        ("mouseout", MouseKind::Leave),
    ];
    for (name, kind) in events {
        let pad = pad.clone();
        let target = canvas.clone();
        let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let raw = RawInput::mouse(
                kind,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            let normalized = pad.borrow_mut().handle_input(&raw, canvas_origin(&target));
            if normalized.prevent_default {
                event.prevent_default();
            }
        });
        canvas.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}

fn listen_touch(canvas: &HtmlCanvasElement, pad: &SharedPad) -> Result<(), JsValue> {
    let events = [
        ("touchstart", TouchKind::Start),
        ("touchmove", TouchKind::Move),
        ("touchend", TouchKind::End),
        ("touchcancel", TouchKind::Cancel),
    ];
    for (name, kind) in events {
        let pad = pad.clone();
        let target = canvas.clone();
        let handler = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let raw = RawInput::Touch {
                kind,
                touches: touch_points(&event),
            };
            let normalized = pad.borrow_mut().handle_input(&raw, canvas_origin(&target));
            if normalized.prevent_default {
                event.prevent_default();
            }
        });
        canvas.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}

fn listen_click(element: &Element, mut on_click: impl FnMut() + 'static) -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut()>::new(move || on_click());
    element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Initialize and run the drawing pad.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(js_error)?;

    log::info!("Starting Inkpad (WASM)");

    let window = web_sys::window().ok_or_else(|| js_error("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("Missing document"))?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| js_error(format!("Missing #{CANVAS_ID}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_error(format!("#{CANVAS_ID} is not a canvas")))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| js_error("Missing 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| js_error("Unexpected context type"))?;

    let config = load_config(&canvas)?;
    let swatches = find_swatches(&document)?;
    let palette = if swatches.is_empty() {
        Palette::from_config(&config).map_err(js_error)?
    } else {
        Palette::new(swatches.iter().map(|(_, color)| *color).collect())
    };
    let swatch_elements: Vec<Element> = swatches.into_iter().map(|(el, _)| el).collect();
    let eraser = document.get_element_by_id(ERASER_ID);

    let surface = CanvasSurface::new(canvas.clone(), ctx);
    let mut pad = DrawingPad::new(surface, &config).map_err(js_error)?;
    {
        let palette = palette.clone();
        let swatches = swatch_elements.clone();
        let eraser = eraser.clone();
        let canvas: Element = canvas.clone().into();
        highlight(&pad.tool(), &palette, &swatches, eraser.as_ref(), &canvas);
        pad.on_tool_change(move |tool| {
            highlight(tool, &palette, &swatches, eraser.as_ref(), &canvas);
        });
    }
    let pad: SharedPad = Rc::new(RefCell::new(pad));

    listen_mouse(&canvas, &pad)?;
    listen_touch(&canvas, &pad)?;

    for (index, swatch) in swatch_elements.iter().enumerate() {
        let Some(color) = palette.color(index) else {
            continue;
        };
        let pad = pad.clone();
        listen_click(swatch, move || pad.borrow_mut().select_color(color))?;
    }
    if let Some(eraser) = &eraser {
        let pad = pad.clone();
        listen_click(eraser, move || pad.borrow_mut().select_eraser())?;
    }

    log::info!(
        "Inkpad ready: {}x{} canvas, {} swatches",
        config.width,
        config.height,
        palette.swatches().len()
    );
    Ok(())
}
