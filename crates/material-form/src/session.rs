//! Form session: the state behind one material submission form.
//!
//! Owns the drop and field counters, the submission registry and every field
//! group created so far. The browser layer calls into it synchronously from
//! event handlers and mirrors the returned models into the document.

use crate::color::Rgba;
use crate::config::FormConfig;
use crate::error::{Rejection, Result, SessionError};
use crate::extension::AllowList;
use crate::field_group::{FieldGroup, FieldId, Source};
use crate::registry::{HiddenFileField, SubmissionRegistry};
use crate::utils::join_names;

/// The two independent drop targets on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    TextureMaps,
    SceneFile,
}

impl Zone {
    pub fn rejection_prefix(self) -> &'static str {
        match self {
            Zone::TextureMaps => "Allowed files: ",
            Zone::SceneFile => "Allowed scene files: ",
        }
    }
}

/// Result of an accepted texture drop.
#[derive(Clone, Debug, PartialEq)]
pub struct AcceptedBatch {
    pub store: HiddenFileField,
    /// One group per file, in drop order
    pub groups: Vec<FieldGroup>,
}

#[derive(Debug)]
pub struct FormSession {
    config: FormConfig,
    registry: SubmissionRegistry,
    groups: Vec<FieldGroup>,
    field_counter: u32,
    constant_counter: u32,
    scene_files: Vec<String>,
}

impl FormSession {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            registry: SubmissionRegistry::new(),
            groups: Vec::new(),
            field_counter: 0,
            constant_counter: 0,
            scene_files: Vec::new(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn registry(&self) -> &SubmissionRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &[FieldGroup] {
        &self.groups
    }

    pub fn group(&self, id: FieldId) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn field_counter(&self) -> u32 {
        self.field_counter
    }

    pub fn scene_files(&self) -> &[String] {
        &self.scene_files
    }

    /// Handle a texture map drop.
    ///
    /// The whole batch is refused if any file fails the allow-list, and nothing
    /// is registered in that case. An empty batch is ignored (`Ok(None)`).
    pub fn drop_textures<S: AsRef<str>>(&mut self, file_names: &[S]) -> std::result::Result<Option<AcceptedBatch>, Rejection> {
        check_batch(&self.config.map_extensions, Zone::TextureMaps, file_names)?;
        if file_names.is_empty() {
            return Ok(None);
        }

        let store = self
            .registry
            .register_batch(file_names.iter().map(|n| n.as_ref().to_string()))
            .clone();

        let groups = file_names
            .iter()
            .map(|name| {
                let source = Source::Dropped {
                    file_name: name.as_ref().to_string(),
                    store: store.drop,
                };
                self.push_group(source).clone()
            })
            .collect();

        log::info!("texture batch {} accepted with {} file(s)", store.drop, store.file_names.len());
        Ok(Some(AcceptedBatch { store, groups }))
    }

    /// Handle a scene file drop, returning the summary line for the zone.
    pub fn drop_scene<S: AsRef<str>>(&mut self, file_names: &[S]) -> std::result::Result<Option<String>, Rejection> {
        check_batch(&self.config.scene_extensions, Zone::SceneFile, file_names)?;
        if file_names.is_empty() {
            return Ok(None);
        }
        self.scene_files = file_names.iter().map(|n| n.as_ref().to_string()).collect();
        Ok(Some(join_names(&self.scene_files)))
    }

    /// Add a group with no backing file, for a constant material color.
    pub fn add_constant_color(&mut self) -> &FieldGroup {
        self.constant_counter += 1;
        let placeholder = format!("Empty Map {}", self.constant_counter);
        self.push_group(Source::ConstantColor { placeholder })
    }

    /// React to a map type `<select>` change.
    pub fn select_map_type(&mut self, id: FieldId, type_id: &str) -> Result<&FieldGroup> {
        let catalog = &self.config.catalog;
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(SessionError::UnknownField(id.0))?;
        group.apply_map_type(catalog, type_id)?;
        Ok(group)
    }

    /// Record the color committed through a group's picker.
    pub fn set_color(&mut self, id: FieldId, color: Option<Rgba>) -> Result<&FieldGroup> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(SessionError::UnknownField(id.0))?;
        group.color = color;
        Ok(group)
    }

    fn push_group(&mut self, source: Source) -> &FieldGroup {
        self.field_counter += 1;
        let group = FieldGroup::instantiate(
            &self.config.catalog,
            &self.config.class_names,
            source,
            FieldId(self.field_counter),
        );
        self.groups.push(group);
        &self.groups[self.groups.len() - 1]
    }
}

fn check_batch<S: AsRef<str>>(allowed: &AllowList, zone: Zone, file_names: &[S]) -> std::result::Result<(), Rejection> {
    if allowed.batch_allowed(file_names) {
        return Ok(());
    }
    let offending: Vec<String> = file_names
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| !allowed.is_allowed(name))
        .map(str::to_string)
        .collect();
    log::warn!("{zone:?} drop rejected, offending file(s): {offending:?}");
    Err(Rejection::new(zone, allowed, offending))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::page_config;
    use crate::config::Role;

    fn session_with_maps(exts: &[&str]) -> FormSession {
        let mut config = page_config();
        config.map_extensions = AllowList::new(exts);
        FormSession::new(config)
    }

    #[test]
    fn test_single_drop_end_to_end() {
        let mut session = session_with_maps(&["png", "jpg"]);
        let batch = session.drop_textures(&["metal_roughness.png"]).unwrap().unwrap();

        assert_eq!(batch.store.name, "texture_map_store_1");
        assert_eq!(batch.groups.len(), 1);
        let group = &batch.groups[0];
        assert_eq!(group.map_type, "roughness");
        assert_eq!(group.store_ref().as_deref(), Some("texture_map_store_1"));
        assert_eq!(session.registry().fields().len(), 1);
        assert_eq!(session.groups().len(), 1);
    }

    #[test]
    fn test_rejected_batch_creates_nothing() {
        let mut session = session_with_maps(&["png"]);
        let rejection = session.drop_textures(&["tex.png", "tex.exe"]).unwrap_err();

        assert_eq!(rejection.message, "Allowed files: png");

        let mut two = session_with_maps(&["png", "jpg"]);
        let rejection = two.drop_textures(&["tex.exe"]).unwrap_err();
        assert_eq!(rejection.message, "Allowed files: png,jpg");
        assert_eq!(rejection.to_string(), "Allowed files: png");
        assert_eq!(rejection.zone, Zone::TextureMaps);
        assert_eq!(rejection.offending, ["tex.exe"]);
        assert!(session.registry().fields().is_empty());
        assert!(session.groups().is_empty());
        assert_eq!(session.field_counter(), 0);
        assert_eq!(session.registry().drop_counter(), 0);
    }

    #[test]
    fn test_empty_drop_is_ignored() {
        let mut session = session_with_maps(&["png"]);
        assert_eq!(session.drop_textures::<&str>(&[]), Ok(None));
        assert_eq!(session.registry().drop_counter(), 0);
    }

    #[test]
    fn test_counters_are_monotonic_across_batches() {
        let mut session = session_with_maps(&["png"]);
        session.drop_textures(&["a.png", "b.png"]).unwrap();
        let _ = session.drop_textures(&["c.exe"]);
        session.add_constant_color();
        let batch = session.drop_textures(&["d.png"]).unwrap().unwrap();

        assert_eq!(batch.store.name, "texture_map_store_2");
        assert_eq!(batch.groups[0].id, FieldId(4));
        assert_eq!(session.field_counter(), 4);

        let mut seen = std::collections::HashSet::new();
        for group in session.groups() {
            for (_, name) in group.control_names() {
                assert!(seen.insert(name.to_string()), "duplicate control name {name}");
                assert!(name.ends_with(&format!("_{}", group.id)));
            }
        }
    }

    #[test]
    fn test_constant_color_group() {
        let mut session = session_with_maps(&["png"]);
        let group = session.add_constant_color().clone();

        assert_eq!(group.source, Source::ConstantColor { placeholder: "Empty Map 1".into() });
        assert_eq!(group.label, "Empty Map 1");
        assert_eq!(group.store_ref(), None);
        assert_eq!(group.color, None);
        assert_eq!(group.control_name(Role::MaterialColor), Some("texture_material_1"));
        assert!(session.registry().fields().is_empty());

        assert_eq!(session.add_constant_color().label, "Empty Map 2");

        let red = Rgba::new(255, 0, 0, 1.0);
        assert_eq!(session.set_color(group.id, Some(red)).unwrap().color, Some(red));
    }

    #[test]
    fn test_map_type_toggles_channel_for_every_type() {
        let mut session = session_with_maps(&["png"]);
        let id = session.drop_textures(&["wood.png"]).unwrap().unwrap().groups[0].id;
        let entries: Vec<_> = session.config().catalog.iter().cloned().collect();

        for entry in entries {
            let group = session.select_map_type(id, &entry.id).unwrap();
            assert_eq!(group.channel_enabled, entry.channel_available);
            assert_eq!(group.description, entry.description);
        }
    }

    #[test]
    fn test_select_errors() {
        let mut session = session_with_maps(&["png"]);
        assert_eq!(
            session.select_map_type(FieldId(99), "normal").unwrap_err(),
            SessionError::UnknownField(99)
        );
        session.add_constant_color();
        assert_eq!(
            session.select_map_type(FieldId(1), "gloss").unwrap_err(),
            SessionError::UnknownMapType("gloss".into())
        );
    }

    #[test]
    fn test_scene_drop() {
        let mut session = session_with_maps(&["png"]);
        let rejection = session.drop_scene(&["car.usdz", "car.png"]).unwrap_err();
        assert_eq!(rejection.message, "Allowed scene files: obj,gltf,glb,fbx,abc,usd,usda,usdc,usdz");
        assert!(session.scene_files().is_empty());

        let summary = session.drop_scene(&["car.obj", "car.fbx"]).unwrap();
        assert_eq!(summary.as_deref(), Some("car.obj + car.fbx"));
        assert_eq!(session.scene_files(), ["car.obj", "car.fbx"]);
        assert!(session.groups().is_empty());
    }
}
