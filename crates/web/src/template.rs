// =============================================================================
// USDZ Web - Field Group Template Instantiator
// =============================================================================
// Table of Contents:
// 1. Instantiated Controls
// 2. Template Cloning
// 3. Map Type Change Listener
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement};

use usdz_material_form::{FieldGroup, FieldId, FormSession, Role, Source};

use crate::assembler::DROP_ID_ATTR;
use crate::elements::ElementRegistry;
use crate::error::DomError;
use crate::utils::{first_by_class, set_disabled, set_displayed};

// -----------------------------------------------------------------------------
// 1. Instantiated Controls
// -----------------------------------------------------------------------------

/// Handles to the controls of one cloned field group.
#[derive(Clone)]
pub struct GroupControls {
    pub id: FieldId,
    pub root: HtmlElement,
    pub map_type: Option<HtmlSelectElement>,
    pub description: Option<Element>,
    pub channel: Option<Element>,
    pub color: Option<HtmlInputElement>,
    pub picker_trigger: Option<Element>,
}

impl GroupControls {
    /// Mirror description text and channel enablement into the page.
    pub fn show_map_state(&self, description: &str, channel_enabled: bool) -> Result<(), DomError> {
        if let Some(desc) = &self.description {
            desc.set_text_content(Some(description));
        }
        if let Some(channel) = &self.channel {
            set_disabled(channel, !channel_enabled)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 2. Template Cloning
// -----------------------------------------------------------------------------

/// Clone the hidden template for `group`, rename its controls, fill in the
/// initial values and append it to the container.
pub fn instantiate(
    elements: &ElementRegistry,
    session: &FormSession,
    group: &FieldGroup,
) -> Result<GroupControls, DomError> {
    let config = session.config();
    let root = elements
        .template
        .clone_node_with_deep(true)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongType(config.elements.template.clone(), "HTML element"))?;

    root.set_id(&group.element_id());
    set_displayed(&root, true, "block")?;

    let mut controls = GroupControls {
        id: group.id,
        root: root.clone(),
        map_type: None,
        description: None,
        channel: None,
        color: None,
        picker_trigger: first_by_class(&root, &config.elements.picker_trigger_class),
    };

    for (role, class) in config.class_names.iter() {
        let (Some(element), Some(name)) = (first_by_class(&root, class), group.control_name(role)) else {
            continue;
        };
        element.set_attribute("name", name)?;

        match role {
            Role::File => set_control_value(&element, group.source.file_name())?,
            Role::FileLabel => element.set_text_content(Some(&group.label)),
            Role::MapType => {
                let select = element
                    .dyn_into::<HtmlSelectElement>()
                    .map_err(|_| DomError::WrongType(name.to_string(), "select"))?;
                select.set_value(&group.map_type);
                if select.value() != group.map_type {
                    log::warn!("template has no `{}` option for {}", group.map_type, name);
                }
                controls.map_type = Some(select);
            }
            Role::MapTypeDescription => controls.description = Some(element),
            Role::Channel => controls.channel = Some(element),
            Role::MaterialColor => {
                let color = group.color.map(|c| c.to_string()).unwrap_or_default();
                set_control_value(&element, &color)?;
                controls.color = element.dyn_into::<HtmlInputElement>().ok();
            }
        }
    }

    controls.show_map_state(&group.description, group.channel_enabled)?;

    if let (Source::Dropped { store, .. }, Some(store_ref)) = (&group.source, group.store_ref()) {
        root.set_attribute(DROP_ID_ATTR, &store.to_string())?;
        let link = elements
            .document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| DomError::WrongType(group.store_ref_name(), "input"))?;
        link.set_type("hidden");
        link.set_name(&group.store_ref_name());
        link.set_value(&store_ref);
        root.append_child(&link)?;
    }

    elements.container.append_child(&root)?;
    Ok(controls)
}

fn set_control_value(element: &Element, value: &str) -> Result<(), DomError> {
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.set_value(value),
        None => element.set_attribute("value", value)?,
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// 3. Map Type Change Listener
// -----------------------------------------------------------------------------

/// Re-apply description and channel state on every map type change, for the
/// lifetime of the fragment.
pub fn watch_map_type(controls: &GroupControls, session: Rc<RefCell<FormSession>>) -> Result<(), DomError> {
    let Some(select) = controls.map_type.clone() else {
        return Ok(());
    };
    let target = controls.clone();
    let listen_on = select.clone();

    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let value = select.value();
        let state = session
            .borrow_mut()
            .select_map_type(target.id, &value)
            .map(|group| (group.description.clone(), group.channel_enabled));

        match state {
            Ok((description, channel_enabled)) => {
                if let Err(e) = target.show_map_state(&description, channel_enabled) {
                    log::error!("failed to update field group {}: {e}", target.id);
                }
            }
            Err(e) => log::error!("map type change on field group {}: {e}", target.id),
        }
    });

    listen_on.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    // the fragment is never removed, so neither is its listener
    on_change.forget();
    Ok(())
}
