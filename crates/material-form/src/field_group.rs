//! Field groups: one visible cluster of form controls per texture map entry.

use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::color::Rgba;
use crate::config::{ClassNames, Role};
use crate::error::SessionError;
use crate::infer::infer_type;
use crate::registry::{DropId, STORE_FIELD_PREFIX};
use crate::utils::{shorten, DEFAULT_LABEL_LEN};

/// DOM id prefix of an instantiated group.
pub const GROUP_ID_PREFIX: &str = "texture_map_";

/// Name prefix of the control linking a group to its hidden file field.
pub const STORE_REF_PREFIX: &str = "texture_store_ref_";

/// Field counter value. Starts at 1 and is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a group stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// A file from a drop batch; its bytes travel in the batch's hidden field
    Dropped { file_name: String, store: DropId },
    /// A manually added constant color entry with no backing file
    ConstantColor { placeholder: String },
}

impl Source {
    pub fn file_name(&self) -> &str {
        match self {
            Source::Dropped { file_name, .. } => file_name,
            Source::ConstantColor { placeholder } => placeholder,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldGroup {
    pub id: FieldId,
    pub source: Source,
    /// Shortened display form of the file name
    pub label: String,
    pub map_type: String,
    pub description: String,
    pub channel_enabled: bool,
    pub color: Option<Rgba>,
    names: BTreeMap<Role, String>,
}

impl FieldGroup {
    /// Build the model for a new group from the template's class names.
    ///
    /// Every configured role gets the control name `<class>_<id>`. The map type
    /// is seeded from the file name and the description and channel state follow
    /// from the catalog.
    pub fn instantiate(catalog: &Catalog, class_names: &ClassNames, source: Source, id: FieldId) -> Self {
        let map_type = infer_type(source.file_name()).as_str().to_string();
        let names = class_names
            .iter()
            .map(|(role, class)| (role, format!("{class}_{id}")))
            .collect();

        FieldGroup {
            id,
            label: shorten(source.file_name(), DEFAULT_LABEL_LEN),
            description: catalog.describe(&map_type).to_string(),
            channel_enabled: catalog.channel_available(&map_type),
            map_type,
            color: None,
            source,
            names,
        }
    }

    pub fn element_id(&self) -> String {
        format!("{GROUP_ID_PREFIX}{}", self.id)
    }

    /// Submitted name of the control playing `role`, if the template has one.
    pub fn control_name(&self, role: Role) -> Option<&str> {
        self.names.get(&role).map(String::as_str)
    }

    pub fn control_names(&self) -> impl Iterator<Item = (Role, &str)> {
        self.names.iter().map(|(role, name)| (*role, name.as_str()))
    }

    /// Name of the correlation control added next to the renamed ones.
    pub fn store_ref_name(&self) -> String {
        format!("{STORE_REF_PREFIX}{}", self.id)
    }

    /// Name of the hidden field carrying this group's file, if it has one.
    pub fn store_ref(&self) -> Option<String> {
        match &self.source {
            Source::Dropped { store, .. } => Some(format!("{STORE_FIELD_PREFIX}{store}")),
            Source::ConstantColor { .. } => None,
        }
    }

    /// Switch to another map type, refreshing description and channel state.
    pub fn apply_map_type(&mut self, catalog: &Catalog, type_id: &str) -> Result<(), SessionError> {
        let entry = catalog
            .get(type_id)
            .ok_or_else(|| SessionError::UnknownMapType(type_id.to_string()))?;
        self.map_type = entry.id.clone();
        self.description = entry.description.clone();
        self.channel_enabled = entry.channel_available;
        Ok(())
    }
}
