use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, PointerEvent, Window};

use crate::core::EngineError;
use crate::domain::config::SurfaceConfig;
use crate::metrics::Point;
use crate::surface::{PointerButton, SurfaceCore};

use super::canvas_renderer::CanvasRenderer;
use super::dom;
use super::popup::ColorPopup;

/// Everything a DOM listener needs, shared as `Rc<RefCell<_>>`
struct App {
    window: Window,
    surface: SurfaceCore,
    renderer: CanvasRenderer,
    popup: ColorPopup,
}

impl App {
    fn resize(&mut self) -> Result<(), EngineError> {
        self.surface.resize(dom::viewport(&self.window));
        self.renderer.apply_size(self.surface.metrics())
    }

    /// Page position of the canvas, read before every pointer event
    fn sync_canvas_offset(&mut self) {
        let rect = self.renderer.canvas().get_bounding_client_rect();
        self.surface.set_canvas_offset(rect.left(), rect.top());
    }

    /// Mirror the interaction state into the DOM after an event
    fn flush(&mut self) {
        if let Err(err) = self.popup.sync(self.surface.menu()) {
            console_warn!("Popup update failed: {}", err);
        }

        if self.surface.take_needs_redraw() {
            let frame = self.renderer.draw(&self.surface.draw_list());
            self.surface.record_render(frame.cells_drawn, frame.elapsed_ms);
        }
    }
}

type SharedApp = Rc<RefCell<App>>;

// web-sys reports `clientX`/`clientY` as whole CSS pixels; sub-pixel positions are truncated
fn client_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

/// Register `handler` for `event` on `target`; the closure lives for the page
fn listen(
    target: &EventTarget,
    event: &str,
    app: &SharedApp,
    mut handler: impl FnMut(&mut App, Event) + 'static,
) -> Result<(), EngineError> {
    let app = Rc::clone(app);
    let closure = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
        // Re-entrant dispatch (an event fired from inside a handler) is dropped
        let Ok(mut app) = app.try_borrow_mut() else {
            return;
        };
        handler(&mut app, e);
        app.flush();
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| EngineError::Dom(format!("cannot listen for {event}")))?;
    closure.forget();
    Ok(())
}

/// Pointer listener on the canvas: refresh the offset, then forward the client point
fn listen_pointer(
    canvas: &HtmlCanvasElement,
    event: &str,
    app: &SharedApp,
    mut forward: impl FnMut(&mut SurfaceCore, Point, PointerButton) + 'static,
) -> Result<(), EngineError> {
    listen(canvas, event, app, move |app, e| {
        let Some(e) = e.dyn_ref::<PointerEvent>() else {
            return;
        };
        app.sync_canvas_offset();
        forward(&mut app.surface, client_point(e), PointerButton::from_code(e.button()));
    })
}

/// Mount a full-window drawing surface.
///
/// The canvas and color popup are appended to the element with id
/// `parent_id`, or to `<body>`. `config_json` is an optional surface config
/// (same format as `PixelSurface.withConfigJson`).
#[wasm_bindgen]
pub fn mount(parent_id: Option<String>, config_json: Option<String>) -> Result<(), JsValue> {
    mount_surface(parent_id.as_deref(), config_json.as_deref()).map_err(|err| {
        console_warn!("Mount failed: {}", err);
        JsValue::from(err)
    })
}

fn mount_surface(parent_id: Option<&str>, config_json: Option<&str>) -> Result<(), EngineError> {
    #[cfg(feature = "console_error_panic_hook")]
    crate::set_panic_hook();

    let config = match config_json {
        Some(json) => SurfaceConfig::from_json(json)?,
        None => SurfaceConfig::default(),
    };

    let window = dom::window()?;
    let document = dom::document(&window)?;
    let parent = dom::parent_element(&document, parent_id)?;

    let canvas: HtmlCanvasElement = dom::create_element(&document, "canvas")?;
    canvas
        .set_attribute("data-pixelgrid", "")
        .map_err(|_| EngineError::Dom("cannot tag canvas".to_string()))?;
    // Pinned to the viewport so the parent's margins and flow never shift or scroll it
    for (property, value) in [
        ("display", "block"),
        ("position", "fixed"),
        ("left", "0"),
        ("top", "0"),
        ("touch-action", "none"),
    ] {
        dom::set_style(&canvas, property, value)?;
    }
    parent
        .append_child(&canvas)
        .map_err(|_| EngineError::Dom("cannot attach canvas".to_string()))?;

    let popup = ColorPopup::build(&document, &config.palette)?;
    parent
        .append_child(popup.root())
        .map_err(|_| EngineError::Dom("cannot attach color popup".to_string()))?;
    let popup_root = popup.root().clone();
    let swatches = popup.swatches().to_vec();

    let grid_size = config.grid_size;
    let app: SharedApp = Rc::new(RefCell::new(App {
        window: window.clone(),
        surface: SurfaceCore::new(config),
        renderer: CanvasRenderer::new(canvas.clone())?,
        popup,
    }));

    {
        let mut app = app.borrow_mut();
        app.resize()?;
        app.flush();
    }

    listen(&window, "resize", &app, |app, _| {
        if let Err(err) = app.resize() {
            console_warn!("Resize failed: {}", err);
        }
    })?;
    // Releases outside the canvas end the drag without a click
    listen(&window, "pointerup", &app, |app, _| app.surface.release_pointer())?;

    listen_pointer(&canvas, "pointerdown", &app, |surface, point, button| {
        surface.pointer_down(point, button);
    })?;
    listen_pointer(&canvas, "pointermove", &app, |surface, point, _| {
        surface.pointer_move(point);
    })?;
    listen_pointer(&canvas, "pointerup", &app, |surface, point, _| {
        surface.pointer_up(point);
    })?;

    listen(&canvas, "contextmenu", &app, |app, e| {
        e.prevent_default();
        let Some(e) = e.dyn_ref::<MouseEvent>() else {
            return;
        };
        app.sync_canvas_offset();
        app.surface.open_context_menu(client_point(e));
    })?;

    for (index, swatch) in swatches.iter().enumerate() {
        listen(swatch, "click", &app, move |app, _| {
            app.surface.choose_palette(index);
        })?;
    }
    listen(&popup_root, "mouseleave", &app, |app, _| app.surface.dismiss_menu())?;

    console_log!("Pixelgrid surface mounted ({}x{} cells)", grid_size, grid_size);
    Ok(())
}
