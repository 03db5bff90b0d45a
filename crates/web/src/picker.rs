// =============================================================================
// USDZ Web - Pickr Color Widget
// =============================================================================
// Binds the page's `Pickr` global (@simonwep/pickr) to the color picker
// adapter. This is the only code that knows what Pickr looks like.
// =============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use usdz_material_form::picker::{CancelCallback, ColorCallback};
use usdz_material_form::{ColorField, ColorWidget, FieldId, FormSession, Rgba, DEFAULT_PICKER_COLOR};

use crate::error::DomError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Pickr)]
    pub type Pickr;

    #[wasm_bindgen(static_method_of = Pickr, js_name = create, catch)]
    fn create(options: &js_sys::Object) -> Result<Pickr, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Pickr, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn hide(this: &Pickr);

    /// `silent` keeps Pickr from firing `save` for the new color
    #[wasm_bindgen(method, js_name = setColor)]
    fn set_color(this: &Pickr, color: &str, silent: bool) -> bool;

    /// Color object handed to Pickr event callbacks
    pub type HsvaColor;

    #[wasm_bindgen(method, js_name = toRGBA)]
    fn to_rgba(this: &HsvaColor) -> js_sys::Array;
}

/// Pickr instance plus the closures it calls back into.
pub struct PickrWidget {
    pickr: Pickr,
    initial: Option<Rgba>,
    /// Whether the widget currently shows a committed color
    has_color: Rc<Cell<bool>>,
    closures: RefCell<Vec<Closure<dyn FnMut(JsValue, JsValue)>>>,
}

impl PickrWidget {
    /// Create a picker opened by `trigger`, starting from `initial` if given.
    pub fn create(trigger: &Element, initial: Option<Rgba>) -> Result<Self, DomError> {
        let default = initial.unwrap_or(DEFAULT_PICKER_COLOR).to_string();

        let interaction = js_sys::Object::new();
        for key in ["input", "save", "cancel", "clear"] {
            set(&interaction, key, &JsValue::TRUE)?;
        }
        let components = js_sys::Object::new();
        for key in ["preview", "opacity", "hue"] {
            set(&components, key, &JsValue::TRUE)?;
        }
        set(&components, "interaction", &interaction)?;

        let options = js_sys::Object::new();
        set(&options, "el", trigger)?;
        set(&options, "useAsButton", &JsValue::TRUE)?;
        set(&options, "theme", &JsValue::from_str("classic"))?;
        set(&options, "default", &JsValue::from_str(&default))?;
        set(&options, "defaultRepresentation", &JsValue::from_str("RGBA"))?;
        set(&options, "components", &components)?;

        let pickr = Pickr::create(&options)?;
        Ok(Self {
            pickr,
            initial,
            has_color: Rc::new(Cell::new(initial.is_some())),
            closures: RefCell::new(Vec::new()),
        })
    }

    fn listen(&self, event: &str, callback: impl FnMut(JsValue, JsValue) + 'static) {
        let closure = Closure::<dyn FnMut(JsValue, JsValue)>::new(callback);
        self.pickr.on(event, closure.as_ref().unchecked_ref());
        self.closures.borrow_mut().push(closure);
    }
}

impl ColorWidget for PickrWidget {
    fn on_init(&self, mut callback: ColorCallback) {
        let initial = self.initial;
        self.listen("init", move |_instance, _| callback(initial));
    }

    fn on_show(&self, mut callback: ColorCallback) {
        let has_color = Rc::clone(&self.has_color);
        self.listen("show", move |color, _instance| {
            let color = if has_color.get() { to_rgba(&color) } else { None };
            callback(color);
        });
    }

    fn on_save(&self, mut callback: ColorCallback) {
        let has_color = Rc::clone(&self.has_color);
        self.listen("save", move |color, _instance| {
            let color = to_rgba(&color);
            has_color.set(color.is_some());
            callback(color);
        });
    }

    fn on_cancel(&self, mut callback: CancelCallback) {
        self.listen("cancel", move |_instance, _| callback());
    }

    fn set_color(&self, color: Rgba) {
        if !self.pickr.set_color(&color.to_string(), true) {
            log::warn!("color picker refused `{color}`");
        }
    }

    fn hide(&self) {
        self.pickr.hide();
    }
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), DomError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)?;
    Ok(())
}

/// `null` means Pickr was cleared.
fn to_rgba(color: &JsValue) -> Option<Rgba> {
    if color.is_null() || color.is_undefined() {
        return None;
    }
    let channels: Vec<f64> = color
        .unchecked_ref::<HsvaColor>()
        .to_rgba()
        .iter()
        .filter_map(|v| v.as_f64())
        .collect();
    match channels[..] {
        [r, g, b, a] => Some(Rgba::from_channels(r, g, b, a)),
        _ => None,
    }
}

/// A group's color `<input>`, kept in step with the session.
pub struct InputColorField {
    pub input: HtmlInputElement,
    pub session: Rc<RefCell<FormSession>>,
    pub id: FieldId,
}

impl ColorField for InputColorField {
    fn value(&self) -> String {
        self.input.value()
    }

    fn set_value(&self, value: &str) {
        self.input.set_value(value);
        let color = if value.is_empty() { None } else { value.parse::<Rgba>().ok() };
        if let Err(e) = self.session.borrow_mut().set_color(self.id, color) {
            log::error!("color for field group {}: {e}", self.id);
        }
    }
}
