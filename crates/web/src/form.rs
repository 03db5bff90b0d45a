// =============================================================================
// USDZ Web - Material Form Controller
// =============================================================================
// Table of Contents:
// 1. Construction
// 2. Event Binding
// 3. Texture Map Drops
// 4. Scene File Drops
// 5. Constant Color Entries
// =============================================================================

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, FileList};

use usdz_material_form::{attach, FieldId, FormConfig, FormSession, PickerHandle, CONFIG_ELEMENT_ID};

use crate::assembler;
use crate::dropzone::{self, bind_zone, guard_document};
use crate::elements::ElementRegistry;
use crate::error::{DomError, StartupError};
use crate::picker::{InputColorField, PickrWidget};
use crate::template::{self, GroupControls};
use crate::upload;
use crate::utils::{element_by_id, file_names, set_displayed};

/// Browser side of one material submission form.
pub struct MaterialForm {
    session: Rc<RefCell<FormSession>>,
    elements: ElementRegistry,
    pickers: RefCell<Vec<PickerHandle<PickrWidget>>>,
}

// -----------------------------------------------------------------------------
// 1. Construction
// -----------------------------------------------------------------------------

impl MaterialForm {
    pub fn new(config: FormConfig, elements: ElementRegistry) -> Rc<Self> {
        Rc::new(Self {
            session: Rc::new(RefCell::new(FormSession::new(config))),
            elements,
            pickers: RefCell::new(Vec::new()),
        })
    }

    /// Read the embedded configuration and resolve every page element.
    pub fn from_document(document: &Document) -> Result<Rc<Self>, StartupError> {
        let text = element_by_id(document, CONFIG_ELEMENT_ID)?
            .text_content()
            .unwrap_or_default();
        let config = FormConfig::from_json(&text)?;
        let elements = ElementRegistry::resolve(document, &config)?;
        Ok(Self::new(config, elements))
    }

    pub fn session(&self) -> Ref<'_, FormSession> {
        self.session.borrow()
    }

    pub fn elements(&self) -> &ElementRegistry {
        &self.elements
    }
}

// -----------------------------------------------------------------------------
// 2. Event Binding
// -----------------------------------------------------------------------------

impl MaterialForm {
    /// Attach every listener. Handlers hold the form for the page lifetime.
    pub fn bind(self: &Rc<Self>) -> Result<(), DomError> {
        guard_document(&self.elements.document)?;

        let form = Rc::clone(self);
        bind_zone(&self.elements.map_zone, move |files| {
            if let Err(e) = form.handle_texture_drop(files) {
                log::error!("texture map drop failed: {e}");
            }
        })?;

        let form = Rc::clone(self);
        bind_zone(&self.elements.scene_zone, move |files| {
            if let Err(e) = form.handle_scene_drop(files) {
                log::error!("scene file drop failed: {e}");
            }
        })?;

        if let Some(trigger) = &self.elements.constant_color_trigger {
            let form = Rc::clone(self);
            let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                if let Err(e) = form.add_constant_color() {
                    log::error!("adding constant color entry failed: {e}");
                }
            });
            trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 3. Texture Map Drops
// -----------------------------------------------------------------------------

impl MaterialForm {
    /// Validate a texture batch, bind it to a hidden field and add one field
    /// group per file. Returns the ids of the new groups (empty if rejected).
    pub fn handle_texture_drop(&self, files: &FileList) -> Result<Vec<FieldId>, DomError> {
        let names = file_names(files);
        let outcome = self.session.borrow_mut().drop_textures(&names[..]);

        let batch = match outcome {
            Ok(Some(batch)) => batch,
            Ok(None) => return Ok(Vec::new()),
            Err(rejection) => {
                dropzone::show_rejection(&self.elements.map_message, &rejection.message)?;
                return Ok(Vec::new());
            }
        };

        dropzone::clear_rejection(&self.elements.map_message)?;
        if let Some(spacer) = &self.elements.map_spacer {
            set_displayed(spacer, false, "")?;
        }

        assembler::register_batch(&self.elements.document, &self.elements.form, &batch.store, files)?;
        if self.session.borrow().config().async_upload {
            upload::spawn_upload(files.clone());
        }

        let mut ids = Vec::with_capacity(batch.groups.len());
        for group in &batch.groups {
            let controls = template::instantiate(&self.elements, &self.session.borrow(), group)?;
            // every appended fragment is watched before the next clone
            template::watch_map_type(&controls, Rc::clone(&self.session))?;
            ids.push(controls.id);
        }
        Ok(ids)
    }
}

// -----------------------------------------------------------------------------
// 4. Scene File Drops
// -----------------------------------------------------------------------------

impl MaterialForm {
    /// Validate a scene batch and assign it straight to the scene file input.
    /// Returns whether the batch was taken.
    pub fn handle_scene_drop(&self, files: &FileList) -> Result<bool, DomError> {
        let names = file_names(files);
        let outcome = self.session.borrow_mut().drop_scene(&names[..]);

        match outcome {
            Ok(Some(summary)) => {
                if let Some(spacer) = &self.elements.scene_spacer {
                    set_displayed(spacer, false, "")?;
                }
                self.elements.scene_input.set_files(Some(files));
                dropzone::show_summary(&self.elements.scene_message, &summary)?;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(rejection) => {
                dropzone::show_rejection(&self.elements.scene_message, &rejection.message)?;
                Ok(false)
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 5. Constant Color Entries
// -----------------------------------------------------------------------------

impl MaterialForm {
    /// Add a field group with no file whose color comes from a picker.
    pub fn add_constant_color(&self) -> Result<FieldId, DomError> {
        let group = self.session.borrow_mut().add_constant_color().clone();
        let controls = template::instantiate(&self.elements, &self.session.borrow(), &group)?;
        template::watch_map_type(&controls, Rc::clone(&self.session))?;
        self.attach_picker(&controls);
        Ok(group.id)
    }

    fn attach_picker(&self, controls: &GroupControls) {
        let (Some(input), Some(trigger)) = (&controls.color, &controls.picker_trigger) else {
            log::warn!("field group {} has no color control or picker button", controls.id);
            return;
        };

        let initial = input.value().parse().ok();
        match PickrWidget::create(trigger, initial) {
            Ok(widget) => {
                let field = InputColorField {
                    input: input.clone(),
                    session: Rc::clone(&self.session),
                    id: controls.id,
                };
                self.pickers.borrow_mut().push(attach(widget, field));
            }
            // the color input still accepts typed values
            Err(e) => log::warn!("color picker unavailable for field group {}: {e}", controls.id),
        }
    }
}
