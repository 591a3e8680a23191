//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Lookups return
//! `Option` so callers can bail out when an anchor element is absent;
//! writes return [`DomError`] when the platform rejects them.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, MediaQueryList, Storage, Window};

use crate::core::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Element Lookup
// =============================================================================

/// Find an element by id.
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Find the first element matching a CSS selector.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Find the first descendant of `parent` matching a CSS selector.
pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// Collect every element matching a CSS selector, in document order.
///
/// The result is a snapshot; elements added later are not included.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

/// Collect every descendant of `parent` matching a CSS selector.
pub fn query_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Find an element by id and cast it to a concrete element type.
pub fn by_id_as<T: JsCast>(id: &str) -> Option<T> {
    by_id(id)?.dyn_into::<T>().ok()
}

/// Find an element by selector and cast it to `HtmlElement`.
pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

// =============================================================================
// Viewport
// =============================================================================

/// Current vertical scroll offset in pixels.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Viewport width in pixels.
pub fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Viewport height in pixels.
pub fn inner_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Evaluate a media query.
pub fn match_media(query: &str) -> Option<MediaQueryList> {
    window()?.match_media(query).ok()?
}

// =============================================================================
// Writes
// =============================================================================

/// Set an inline style property on an element.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), DomError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|_| DomError::StyleWriteFailed(property.to_string()))
}

/// Set an attribute on an element.
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), DomError> {
    element
        .set_attribute(name, value)
        .map_err(|_| DomError::AttributeWriteFailed(name.to_string()))
}

/// Add or remove a class depending on `on`.
pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|_| DomError::AttributeWriteFailed(format!("class {}", class)))
}

// =============================================================================
// Event Listeners
// =============================================================================

/// Register a listener that lives for the rest of the page.
///
/// The closure is intentionally leaked using `forget()`: listeners are
/// never removed and page unload is the only teardown.
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), DomError>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|_| DomError::ListenerFailed(event.to_string()))?;

    // Keep the closure alive for the lifetime of the page
    closure.forget();
    Ok(())
}

/// Register a window-level listener.
pub fn listen_window<E>(event: &str, handler: impl FnMut(E) + 'static) -> Result<(), DomError>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let window = window().ok_or(DomError::NoWindow)?;
    listen(&window, event, handler)
}

/// Register a document-level listener.
pub fn listen_document<E>(event: &str, handler: impl FnMut(E) + 'static) -> Result<(), DomError>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let document = document().ok_or(DomError::NoDocument)?;
    listen(&document, event, handler)
}
