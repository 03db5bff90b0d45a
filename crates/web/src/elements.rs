// =============================================================================
// USDZ Web - Element Registry
// =============================================================================
// Every page element the form builder touches, resolved once at startup and
// handed to the components. Nothing else looks elements up by id.
// =============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use usdz_material_form::{FormConfig, Role};

use crate::error::DomError;
use crate::utils::{element_by_id, first_by_class, typed_by_id};

#[derive(Clone)]
pub struct ElementRegistry {
    pub document: Document,
    /// The single form that gets submitted
    pub form: HtmlFormElement,
    /// Hidden field group template, cloned once per texture map
    pub template: Element,
    /// Where instantiated field groups are appended
    pub container: Element,
    pub map_zone: HtmlElement,
    pub map_message: HtmlElement,
    pub map_spacer: Option<HtmlElement>,
    pub scene_zone: HtmlElement,
    pub scene_message: HtmlElement,
    pub scene_spacer: Option<HtmlElement>,
    pub scene_input: HtmlInputElement,
    pub constant_color_trigger: Option<Element>,
}

impl ElementRegistry {
    /// Resolve every element named by `config`. Spacers and the constant color
    /// trigger are optional; everything else must exist.
    ///
    /// The template is checked here as well, so cloning it at drop time cannot
    /// fail half way through a batch.
    pub fn resolve(document: &Document, config: &FormConfig) -> Result<Self, DomError> {
        let ids = &config.elements;
        let optional_html = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        };

        let constant_color_trigger = match &config.constant_color_trigger_id {
            Some(id) => Some(element_by_id(document, id)?),
            None => None,
        };

        let template = element_by_id(document, &ids.template)?;
        check_template(&template, config)?;

        Ok(Self {
            document: document.clone(),
            form: typed_by_id(document, &ids.form, "form")?,
            template,
            container: element_by_id(document, &ids.container)?,
            map_zone: typed_by_id(document, &ids.map_dropzone, "HTML element")?,
            map_message: typed_by_id(document, &ids.map_message, "HTML element")?,
            map_spacer: optional_html(&ids.map_spacer),
            scene_zone: typed_by_id(document, &ids.scene_dropzone, "HTML element")?,
            scene_message: typed_by_id(document, &ids.scene_message, "HTML element")?,
            scene_spacer: optional_html(&ids.scene_spacer),
            scene_input: scene_input(document, &config.scene_file_input)?,
            constant_color_trigger,
        })
    }
}

fn scene_input(document: &Document, name: &str) -> Result<HtmlInputElement, DomError> {
    document
        .get_elements_by_name(name)
        .get(0)
        .ok_or_else(|| DomError::MissingField(name.to_string()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| DomError::WrongType(name.to_string(), "input"))
}

/// Required roles must be present, and typed roles must sit on the right kind
/// of control.
fn check_template(template: &Element, config: &FormConfig) -> Result<(), DomError> {
    for role in Role::REQUIRED {
        if let Some(class) = config.class_names.get(role) {
            if first_by_class(template, class).is_none() {
                return Err(DomError::MissingControl(class.to_string()));
            }
        }
    }

    for (role, class) in config.class_names.iter() {
        let Some(control) = first_by_class(template, class) else {
            continue;
        };
        let expected = match role {
            Role::MapType if !control.is_instance_of::<HtmlSelectElement>() => "select",
            Role::MaterialColor if !control.is_instance_of::<HtmlInputElement>() => "input",
            _ => continue,
        };
        return Err(DomError::WrongType(class.to_string(), expected));
    }
    Ok(())
}
