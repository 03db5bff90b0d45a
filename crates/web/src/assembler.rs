// =============================================================================
// USDZ Web - Submission Assembler
// =============================================================================
// A dropped FileList cannot be merged into an existing file input, so each
// accepted batch is bound to a fresh hidden `<input type="file">` appended to
// the submission form. The native list is referenced, never copied.
// =============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, FileList, HtmlFormElement, HtmlInputElement};

use usdz_material_form::HiddenFileField;

use crate::error::DomError;
use crate::utils::set_displayed;

/// Attribute carrying the drop counter on hidden store fields and groups.
pub const DROP_ID_ATTR: &str = "data-drop-id";

/// Create the hidden field for `store`, bind `files` to it and attach it to `form`.
pub fn register_batch(
    document: &Document,
    form: &HtmlFormElement,
    store: &HiddenFileField,
    files: &FileList,
) -> Result<HtmlInputElement, DomError> {
    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| DomError::WrongType(store.name.clone(), "input"))?;

    input.set_type("file");
    input.set_name(&store.name);
    input.set_multiple(true);
    input.set_attribute(DROP_ID_ATTR, &store.drop.to_string())?;
    set_displayed(&input, false, "")?;
    input.set_files(Some(files));

    form.append_child(&input)?;
    log::debug!("bound {} file(s) to hidden field `{}`", files.length(), store.name);
    Ok(input)
}
