// =============================================================================
// USDZ Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. File Utilities
// =============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FileList, HtmlElement, Window};

use crate::error::DomError;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Window {
    web_sys::window().expect("No window object available")
}

/// Get the current document.
pub fn document() -> Document {
    window().document().expect("No document available")
}

/// Look up an element by id, failing with its id.
pub fn element_by_id(document: &Document, id: &str) -> Result<Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Look up an element by id and cast it.
pub fn typed_by_id<T: JsCast>(document: &Document, id: &str, kind: &'static str) -> Result<T, DomError> {
    element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType(id.to_string(), kind))
}

/// First element with `class` below `root`.
///
/// `getElementsByClassName` also works on detached clones, where
/// `document.querySelector` cannot see them.
pub fn first_by_class(root: &Element, class: &str) -> Option<Element> {
    root.get_elements_by_class_name(class).item(0)
}

/// Show or hide an element through its inline `display` style.
pub fn set_displayed(element: &HtmlElement, displayed: bool, shown_as: &str) -> Result<(), DomError> {
    let value = if displayed { shown_as } else { "none" };
    element.style().set_property("display", value)?;
    Ok(())
}

/// Toggle the `disabled` attribute on any control.
pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), DomError> {
    if disabled {
        element.set_attribute("disabled", "disabled")?;
    } else {
        element.remove_attribute("disabled")?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// 2. File Utilities
// -----------------------------------------------------------------------------

/// Names of the files in a native file list, in list order.
pub fn file_names(files: &FileList) -> Vec<String> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect()
}
