//! Texture map type catalog: identifier -> description and channel availability.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::infer::MapType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureType {
    pub id: String,
    pub description: String,
    /// Whether a single color channel (r, g, b or a) may be picked for this map
    pub channel_available: bool,
}

/// Read-only lookup built once from the page's parallel lists.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<TextureType>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Zip identifiers, descriptions and channel flags into a catalog.
    pub fn from_parallel(
        types: Vec<String>,
        descriptions: Vec<String>,
        channels: Vec<bool>,
    ) -> Result<Self, ConfigError> {
        if types.len() != descriptions.len() || types.len() != channels.len() {
            return Err(ConfigError::CatalogLength {
                types: types.len(),
                descriptions: descriptions.len(),
                channels: channels.len(),
            });
        }

        let mut catalog = Catalog::default();
        for ((id, description), channel_available) in types.into_iter().zip(descriptions).zip(channels) {
            if catalog.index.contains_key(&id) {
                return Err(ConfigError::DuplicateMapType(id));
            }
            catalog.index.insert(id.clone(), catalog.entries.len());
            catalog.entries.push(TextureType {
                id,
                description,
                channel_available,
            });
        }
        Ok(catalog)
    }

    /// Fails unless every type the inferencer can produce has an entry.
    pub fn ensure_covers(&self, types: &[MapType]) -> Result<(), ConfigError> {
        match types.iter().find(|t| !self.index.contains_key(t.as_str())) {
            Some(missing) => Err(ConfigError::UncoveredMapType(missing.as_str().to_string())),
            None => Ok(()),
        }
    }

    pub fn get(&self, id: &str) -> Option<&TextureType> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Description text for `id`.
    ///
    /// # Panics
    /// If `id` is not in the catalog. Callers holding an identifier from
    /// outside the crate should go through [`Catalog::get`].
    pub fn describe(&self, id: &str) -> &str {
        &self.entry(id).description
    }

    /// Channel availability for `id`.
    ///
    /// # Panics
    /// If `id` is not in the catalog.
    pub fn channel_available(&self, id: &str) -> bool {
        self.entry(id).channel_available
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextureType> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: &str) -> &TextureType {
        match self.get(id) {
            Some(entry) => entry,
            None => panic!("texture map type `{id}` is not in the catalog"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The catalog the conversion server renders into the page.
    pub(crate) fn usdz_catalog() -> Catalog {
        let rows: [(&str, &str, bool); 9] = [
            ("diffuseColor", "Use <file> as texture for diffuseColor.", false),
            ("normal", "Use <file> as texture for normal.", false),
            ("emissiveColor", "Use <file> as texture for emissiveColor.", false),
            ("metallic", "Use <file> as texture for metallic.", true),
            ("roughness", "Use <file> as texture for roughness.", true),
            ("occlusion", "Use <file> as texture for occlusion.", true),
            ("opacity", "Use <file> as texture for opacity.", true),
            ("clearcoat", "Use <file> as texture for clearcoat.", true),
            ("clearcoatRoughness", "Use <file> as texture for clearcoat roughness.", true),
        ];
        Catalog::from_parallel(
            rows.iter().map(|r| r.0.to_string()).collect(),
            rows.iter().map(|r| r.1.to_string()).collect(),
            rows.iter().map(|r| r.2).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = usdz_catalog();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.describe("normal"), "Use <file> as texture for normal.");
        assert!(!catalog.channel_available("normal"));
        assert!(catalog.channel_available("roughness"));
        assert!(catalog.get("gloss").is_none());
    }

    #[test]
    fn test_covers_every_inferable_type() {
        assert!(usdz_catalog().ensure_covers(&MapType::ALL).is_ok());

        let partial = Catalog::from_parallel(
            vec!["diffuseColor".into()],
            vec!["Diffuse".into()],
            vec![false],
        )
        .unwrap();
        assert!(matches!(
            partial.ensure_covers(&MapType::ALL),
            Err(ConfigError::UncoveredMapType(id)) if id == "normal"
        ));
    }

    #[test]
    fn test_rejects_mismatched_lists() {
        let result = Catalog::from_parallel(
            vec!["normal".into(), "metallic".into()],
            vec!["Normal".into()],
            vec![false, true],
        );
        assert!(matches!(
            result,
            Err(ConfigError::CatalogLength { types: 2, descriptions: 1, channels: 2 })
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = Catalog::from_parallel(
            vec!["normal".into(), "normal".into()],
            vec!["a".into(), "b".into()],
            vec![false, false],
        );
        assert!(matches!(result, Err(ConfigError::DuplicateMapType(id)) if id == "normal"));
    }

    #[test]
    #[should_panic(expected = "not in the catalog")]
    fn test_unknown_lookup_panics() {
        usdz_catalog().describe("gloss");
    }
}
