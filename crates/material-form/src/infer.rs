//! Filename based guess of a texture's map type.
//!
//! Rules are checked in a fixed order and the first hit wins. The order is
//! significant wherever one keyword contains another:
//!
//! 1. clearcoat roughness
//! 2. clearcoat
//! 3. roughness
//! 4. normal
//! 5. occlusion
//! 6. opacity
//! 7. emissive
//! 8. metallic / specular
//! 9. diffuse color (also the fallback)
//!
//! Roughness sits above metallic, so `metal_roughness.png` is a roughness map.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::RegexSet;

/// Semantic role of a texture image, as understood by the converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapType {
    DiffuseColor,
    Normal,
    EmissiveColor,
    Metallic,
    Roughness,
    Occlusion,
    Opacity,
    Clearcoat,
    ClearcoatRoughness,
}

impl MapType {
    pub const ALL: [MapType; 9] = [
        MapType::DiffuseColor,
        MapType::Normal,
        MapType::EmissiveColor,
        MapType::Metallic,
        MapType::Roughness,
        MapType::Occlusion,
        MapType::Opacity,
        MapType::Clearcoat,
        MapType::ClearcoatRoughness,
    ];

    /// Identifier used in the catalog and in submitted form values.
    pub fn as_str(self) -> &'static str {
        match self {
            MapType::DiffuseColor => "diffuseColor",
            MapType::Normal => "normal",
            MapType::EmissiveColor => "emissiveColor",
            MapType::Metallic => "metallic",
            MapType::Roughness => "roughness",
            MapType::Occlusion => "occlusion",
            MapType::Opacity => "opacity",
            MapType::Clearcoat => "clearcoat",
            MapType::ClearcoatRoughness => "clearcoatRoughness",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

const RULES: [(MapType, &str); 9] = [
    (MapType::ClearcoatRoughness, r"clear[ _\-.]?coat[ _\-.]?rough"),
    (MapType::Clearcoat, r"clear[ _\-.]?coat"),
    (MapType::Roughness, r"rough"),
    (MapType::Normal, r"normal|nrm"),
    (MapType::Occlusion, r"occlusion|(?:^|[ _\-.])ao(?:[ _\-.]|$)"),
    (MapType::Opacity, r"opacity|alpha|transparen|cutout"),
    (MapType::EmissiveColor, r"emissi|emit|glow"),
    (MapType::Metallic, r"metal|spec"),
    (MapType::DiffuseColor, r"diffuse|albedo|base[ _\-.]?colou?r"),
];

static RULE_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(RULES.iter().map(|(_, pattern)| format!("(?i){pattern}")))
        .expect("map type patterns are valid")
});

/// Best-guess map type for `filename`. Never fails; unknown names are diffuse.
pub fn infer_type(filename: &str) -> MapType {
    RULE_SET
        .matches(filename)
        .iter()
        .next()
        .map(|index| RULES[index].0)
        .unwrap_or(MapType::DiffuseColor)
}
