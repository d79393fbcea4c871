use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::core::EngineError;
use crate::metrics::Viewport;

pub(super) fn window() -> Result<Window, EngineError> {
    web_sys::window().ok_or_else(|| EngineError::Dom("missing window".to_string()))
}

pub(super) fn document(window: &Window) -> Result<Document, EngineError> {
    window
        .document()
        .ok_or_else(|| EngineError::Dom("missing document".to_string()))
}

pub(super) fn create_element<T: JsCast>(document: &Document, tag: &str) -> Result<T, EngineError> {
    document
        .create_element(tag)
        .map_err(|_| EngineError::Dom(format!("cannot create <{tag}>")))?
        .dyn_into::<T>()
        .map_err(|_| EngineError::Dom(format!("<{tag}> has an unexpected type")))
}

/// Element with `id`, or `<body>` when no id is given
pub(super) fn parent_element(document: &Document, id: Option<&str>) -> Result<HtmlElement, EngineError> {
    match id {
        Some(id) => document
            .get_element_by_id(id)
            .ok_or_else(|| EngineError::Dom(format!("missing element #{id}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| EngineError::Dom(format!("#{id} is not an HTML element"))),
        None => document
            .body()
            .ok_or_else(|| EngineError::Dom("missing <body>".to_string())),
    }
}

pub(super) fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), EngineError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|_| EngineError::Dom(format!("cannot set style {property}")))
}

/// `innerWidth`, `innerHeight` and `devicePixelRatio` of the window
pub(super) fn viewport(window: &Window) -> Viewport {
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(
        read(window.inner_width()),
        read(window.inner_height()),
        window.device_pixel_ratio(),
    )
}
