// =============================================================================
// USDZ Web - Drop Zones
// =============================================================================
// Table of Contents:
// 1. Zone Listeners
// 2. Document Guard
// 3. Inline Messages
// =============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, FileList, HtmlElement};

use crate::error::DomError;
use crate::utils::set_displayed;

/// CSS marker while files hover over a zone.
pub const ENTERED_CLASS: &str = "entered";

/// CSS marker on a zone message showing a rejection.
pub const ERROR_CLASS: &str = "drop-error";

// -----------------------------------------------------------------------------
// 1. Zone Listeners
// -----------------------------------------------------------------------------

/// Wire drag feedback and the drop handler for one zone.
///
/// The `entered` class is purely cosmetic; `on_drop` receives the native file
/// list of the event, untouched.
pub fn bind_zone<F>(zone: &HtmlElement, on_drop: F) -> Result<(), DomError>
where
    F: Fn(&FileList) + 'static,
{
    for event in ["dragenter", "dragover"] {
        let target = zone.clone();
        listen(zone, event, move |e: DragEvent| {
            e.prevent_default();
            let _ = target.class_list().add_1(ENTERED_CLASS);
        })?;
    }

    let target = zone.clone();
    listen(zone, "dragleave", move |e: DragEvent| {
        e.prevent_default();
        let _ = target.class_list().remove_1(ENTERED_CLASS);
    })?;

    let target = zone.clone();
    listen(zone, "drop", move |e: DragEvent| {
        e.prevent_default();
        let _ = target.class_list().remove_1(ENTERED_CLASS);
        match e.data_transfer().and_then(|dt| dt.files()) {
            Some(files) => on_drop(&files),
            None => log::debug!("drop without files ignored"),
        }
    })
}

fn listen<F>(zone: &HtmlElement, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(DragEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(DragEvent)>::new(handler);
    zone.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // zones live as long as the page
    closure.forget();
    Ok(())
}

// -----------------------------------------------------------------------------
// 2. Document Guard
// -----------------------------------------------------------------------------

/// Stop a file dropped next to a zone from navigating the page away.
pub fn guard_document(document: &Document) -> Result<(), DomError> {
    for event in ["dragover", "drop"] {
        let closure = Closure::<dyn FnMut(DragEvent)>::new(|e: DragEvent| e.prevent_default());
        document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// 3. Inline Messages
// -----------------------------------------------------------------------------

/// Replace the zone message with a rejection.
pub fn show_rejection(message: &HtmlElement, text: &str) -> Result<(), DomError> {
    message.set_text_content(Some(text));
    message.class_list().add_1(ERROR_CLASS)?;
    message.style().set_property("color", "red")?;
    set_displayed(message, true, "block")
}

/// Clear a previous rejection and hide the message.
pub fn clear_rejection(message: &HtmlElement) -> Result<(), DomError> {
    message.class_list().remove_1(ERROR_CLASS)?;
    message.style().remove_property("color")?;
    set_displayed(message, false, "")
}

/// Clear a previous rejection and show `summary` in bold instead.
pub fn show_summary(message: &HtmlElement, summary: &str) -> Result<(), DomError> {
    message.class_list().remove_1(ERROR_CLASS)?;
    message.style().remove_property("color")?;
    message.style().set_property("font-weight", "bold")?;
    message.set_text_content(Some(summary));
    set_displayed(message, true, "block")
}
