//! Color picker adapter.
//!
//! Keeps a text form field in sync with a visual color widget. The widget is
//! reached only through [`ColorWidget`], so this module never needs to know
//! which picker library the page loaded.

use std::cell::Cell;
use std::rc::Rc;

use crate::color::{Rgba, DEFAULT_PICKER_COLOR};

pub type ColorCallback = Box<dyn FnMut(Option<Rgba>)>;
pub type CancelCallback = Box<dyn FnMut()>;

/// Capabilities the adapter needs from a picker widget.
pub trait ColorWidget {
    /// Fired once the widget is ready, with the color it starts from (if any)
    fn on_init(&self, callback: ColorCallback);
    /// Fired when the picker pops up, with the color it currently shows
    fn on_show(&self, callback: ColorCallback);
    /// Fired when the user commits a color; `None` means the color was cleared
    fn on_save(&self, callback: ColorCallback);
    fn on_cancel(&self, callback: CancelCallback);
    /// Show `color` in the widget without committing it
    fn set_color(&self, color: Rgba);
    fn hide(&self);
}

/// The text control that receives the committed color.
pub trait ColorField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Returned by [`attach`]; keeps the widget reachable for the caller.
pub struct PickerHandle<W> {
    widget: Rc<W>,
    seeded: Rc<Cell<bool>>,
}

impl<W> PickerHandle<W> {
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Whether the default color was pushed into the widget on first open.
    pub fn was_seeded(&self) -> bool {
        self.seeded.get()
    }
}

/// Wire `widget` to `field`.
///
/// - init: an existing widget color is mirrored into the field
/// - show: an empty field gets [`DEFAULT_PICKER_COLOR`] in the widget, once,
///   without committing it (a save fired while seeding is ignored)
/// - save: the committed color (or an empty string) lands in the field, widget hides
/// - cancel: widget hides, field keeps whatever it had
pub fn attach<W, F>(widget: W, field: F) -> PickerHandle<W>
where
    W: ColorWidget + 'static,
    F: ColorField + 'static,
{
    let widget = Rc::new(widget);
    let field = Rc::new(field);
    let seeded = Rc::new(Cell::new(false));
    let seeding = Rc::new(Cell::new(false));

    {
        let field = Rc::clone(&field);
        widget.on_init(Box::new(move |color| {
            if let Some(color) = color {
                field.set_value(&color.to_string());
            }
        }));
    }

    {
        let field = Rc::clone(&field);
        let seeded = Rc::clone(&seeded);
        let seeding = Rc::clone(&seeding);
        // the widget owns its callbacks, so hold it weakly to avoid a cycle
        let weak = Rc::downgrade(&widget);
        widget.on_show(Box::new(move |color| {
            if color.is_some() || !field.value().is_empty() || seeded.get() {
                return;
            }
            if let Some(widget) = weak.upgrade() {
                seeding.set(true);
                widget.set_color(DEFAULT_PICKER_COLOR);
                seeding.set(false);
                seeded.set(true);
            }
        }));
    }

    {
        let field = Rc::clone(&field);
        let weak = Rc::downgrade(&widget);
        widget.on_save(Box::new(move |color| {
            if seeding.get() {
                log::debug!("color picker save during seeding ignored");
                return;
            }
            let text = color.map(|c| c.to_string()).unwrap_or_default();
            field.set_value(&text);
            log::debug!("color picker saved `{text}`");
            if let Some(widget) = weak.upgrade() {
                widget.hide();
            }
        }));
    }

    {
        let weak = Rc::downgrade(&widget);
        widget.on_cancel(Box::new(move || {
            if let Some(widget) = weak.upgrade() {
                widget.hide();
            }
        }));
    }

    PickerHandle { widget, seeded }
}
