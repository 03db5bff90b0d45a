//! Initialization contract rendered into the page by the conversion server.
//!
//! The page embeds one JSON document (see [`CONFIG_ELEMENT_ID`]). It is read
//! into [`RawConfig`], where every constant is optional, and then validated once
//! into a [`FormConfig`]. Nothing downstream re-checks for missing constants.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::extension::AllowList;
use crate::infer::MapType;

/// DOM id of the `<script type="application/json">` carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "material-form-config";

/// Logical control roles inside a texture map field group template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    FileLabel,
    File,
    MapType,
    MapTypeDescription,
    Channel,
    MaterialColor,
}

impl Role {
    /// Every role, in the order controls are renamed.
    pub const ALL: [Role; 6] = [
        Role::FileLabel,
        Role::File,
        Role::MapType,
        Role::Channel,
        Role::MaterialColor,
        Role::MapTypeDescription,
    ];

    /// Roles the builder cannot do without.
    pub const REQUIRED: [Role; 2] = [Role::File, Role::MapType];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::FileLabel => "file label",
            Role::File => "file name",
            Role::MapType => "map type",
            Role::MapTypeDescription => "map type description",
            Role::Channel => "channel",
            Role::MaterialColor => "material color",
        };
        f.write_str(name)
    }
}

/// Role -> DOM class name used by the field group template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassNames(HashMap<Role, String>);

impl ClassNames {
    pub fn new(map: HashMap<Role, String>) -> Self {
        Self(map)
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        self.0.get(&role).map(String::as_str)
    }

    /// Configured roles in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|class| (role, class)))
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "reused_form".into(),
            template: "texture-form-template".into(),
            container: "texture-map-container".into(),
            map_dropzone: "dropzone".into(),
            map_message: "drop_text".into(),
            map_spacer: "texture-map-spacer".into(),
            scene_dropzone: "scene-file-dropzone".into(),
            scene_message: "scene_file_drop_text".into(),
            scene_spacer: "scene-file-spacer".into(),
            picker_trigger_class: "texture_color_button".into(),
        }
    }
}

/// DOM ids of the page elements the builder attaches to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub form: String,
    pub template: String,
    pub container: String,
    pub map_dropzone: String,
    pub map_message: String,
    /// Placeholder hidden once the first texture batch lands (optional element)
    pub map_spacer: String,
    pub scene_dropzone: String,
    pub scene_message: String,
    pub scene_spacer: String,
    /// Class of the button inside a template that opens the color picker
    pub picker_trigger_class: String,
}

/// The page's constants exactly as rendered; anything may be absent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub map_extensions: Option<Vec<String>>,
    pub scene_extensions: Option<Vec<String>>,
    pub texture_map_types: Option<Vec<String>>,
    pub texture_map_desc: Option<Vec<String>>,
    pub texture_map_channel: Option<Vec<bool>>,
    pub class_names: Option<HashMap<Role, String>>,
    pub scene_file_input: Option<String>,
    pub constant_color_trigger_id: Option<String>,
    pub elements: ElementIds,
    pub async_upload: bool,
}

/// Validated configuration. Immutable for the page lifetime.
#[derive(Clone, Debug)]
pub struct FormConfig {
    pub map_extensions: AllowList,
    pub scene_extensions: AllowList,
    pub catalog: Catalog,
    pub class_names: ClassNames,
    pub scene_file_input: String,
    pub constant_color_trigger_id: Option<String>,
    pub elements: ElementIds,
    pub async_upload: bool,
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::Missing(name))
}

fn allow_list(value: Option<Vec<String>>, name: &'static str) -> Result<AllowList, ConfigError> {
    let list = AllowList::new(require(value, name)?);
    if list.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(list)
}

impl RawConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(self) -> Result<FormConfig, ConfigError> {
        let map_extensions = allow_list(self.map_extensions, "map_extensions")?;
        let scene_extensions = allow_list(self.scene_extensions, "scene_extensions")?;

        let catalog = Catalog::from_parallel(
            require(self.texture_map_types, "texture_map_types")?,
            require(self.texture_map_desc, "texture_map_desc")?,
            require(self.texture_map_channel, "texture_map_channel")?,
        )?;
        if catalog.is_empty() {
            return Err(ConfigError::Empty("texture_map_types"));
        }
        catalog.ensure_covers(&MapType::ALL)?;

        let class_names = ClassNames::new(require(self.class_names, "class_names")?);
        if let Some(role) = Role::REQUIRED.into_iter().find(|r| class_names.get(*r).is_none()) {
            return Err(ConfigError::MissingRole(role));
        }

        let scene_file_input = require(self.scene_file_input, "scene_file_input")?;
        if scene_file_input.trim().is_empty() {
            return Err(ConfigError::Empty("scene_file_input"));
        }

        Ok(FormConfig {
            map_extensions,
            scene_extensions,
            catalog,
            class_names,
            scene_file_input,
            constant_color_trigger_id: self.constant_color_trigger_id.filter(|id| !id.is_empty()),
            elements: self.elements,
            async_upload: self.async_upload,
        })
    }
}

impl FormConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        RawConfig::from_json(text)?.validate()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const PAGE_CONFIG: &str = r#"{
        "map_extensions": ["png", "jpg", "jpeg", "tga"],
        "scene_extensions": ["obj", "gltf", "glb", "fbx", "abc", "usd", "usda", "usdc", "usdz"],
        "texture_map_types": ["diffuseColor", "normal", "emissiveColor", "metallic", "roughness",
                              "occlusion", "opacity", "clearcoat", "clearcoatRoughness"],
        "texture_map_desc": ["Diffuse", "Normal", "Emissive", "Metallic", "Roughness",
                             "Occlusion", "Opacity", "Clearcoat", "Clearcoat roughness"],
        "texture_map_channel": [false, false, false, true, true, true, true, true, true],
        "class_names": {
            "file_label": "texture_file_label",
            "file": "texture_file",
            "map_type": "texture_type",
            "map_type_description": "texture_description",
            "channel": "texture_channel",
            "material_color": "texture_material"
        },
        "scene_file_input": "scene_file",
        "constant_color_trigger_id": "add-constant-color"
    }"#;

    pub(crate) fn page_config() -> FormConfig {
        FormConfig::from_json(PAGE_CONFIG).unwrap()
    }

    #[test]
    fn test_page_config_validates() {
        let config = page_config();
        assert_eq!(config.map_extensions.to_string(), "png,jpg,jpeg,tga");
        assert_eq!(config.catalog.len(), 9);
        assert_eq!(config.class_names.get(Role::Channel), Some("texture_channel"));
        assert_eq!(config.scene_file_input, "scene_file");
        assert_eq!(config.constant_color_trigger_id.as_deref(), Some("add-constant-color"));
        assert_eq!(config.elements, ElementIds::default());
        assert!(!config.async_upload);
    }

    #[test]
    fn test_missing_constant() {
        let mut raw = RawConfig::from_json(PAGE_CONFIG).unwrap();
        raw.texture_map_desc = None;
        assert!(matches!(raw.validate(), Err(ConfigError::Missing("texture_map_desc"))));

        let err = FormConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, ConfigError::Missing("map_extensions")));
        assert_eq!(err.to_string(), "missing configuration constant `map_extensions`");
    }

    #[test]
    fn test_empty_allow_list() {
        let mut raw = RawConfig::from_json(PAGE_CONFIG).unwrap();
        raw.scene_extensions = Some(vec![" ".into()]);
        assert!(matches!(raw.validate(), Err(ConfigError::Empty("scene_extensions"))));
    }

    #[test]
    fn test_required_roles() {
        let mut raw = RawConfig::from_json(PAGE_CONFIG).unwrap();
        raw.class_names.as_mut().unwrap().remove(&Role::MapType);
        assert!(matches!(raw.validate(), Err(ConfigError::MissingRole(Role::MapType))));
    }

    #[test]
    fn test_optional_roles_may_be_absent() {
        let mut raw = RawConfig::from_json(PAGE_CONFIG).unwrap();
        raw.class_names.as_mut().unwrap().remove(&Role::MaterialColor);
        let config = raw.validate().unwrap();
        assert!(config.class_names.iter().all(|(role, _)| role != Role::MaterialColor));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(FormConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_element_ids_override() {
        let text = PAGE_CONFIG.replacen('{', r#"{"elements": {"form": "job_form"},"#, 1);
        let config = FormConfig::from_json(&text).unwrap();
        assert_eq!(config.elements.form, "job_form");
        assert_eq!(config.elements.template, "texture-form-template");
    }
}
