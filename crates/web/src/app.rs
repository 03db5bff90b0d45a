// =============================================================================
// USDZ Web - Startup
// =============================================================================
// Waits for the server-rendered page, then brings the material form up. A
// broken or missing configuration only disables the form builder; the rest of
// the page keeps working.
// =============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::error::{DomError, StartupError};
use crate::form::MaterialForm;
use crate::utils::{document, window};

/// Initialize as soon as the document has been parsed.
pub fn start() {
    let document = document();
    if document.ready_state() != "loading" {
        init(&document);
        return;
    }

    let on_ready = Closure::once_into_js(move |_event: Event| init(&document));
    if let Err(e) = window().add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        let e = DomError::from(e);
        log::error!("{e}. Texture map creation not available!");
    }
}

fn init(document: &Document) {
    match try_init(document) {
        Ok(()) => log::info!("Texture map drag and drop ready."),
        Err(e) => log::error!("{e}. Texture map creation not available!"),
    }
}

fn try_init(document: &Document) -> Result<(), StartupError> {
    let form = MaterialForm::from_document(document)?;
    form.bind()?;
    Ok(())
}
