//! # USDZ Material Form
//!
//! Model of the drag-and-drop texture map form used to assemble a material
//! submission for the USDZ converter. Nothing here touches the DOM; the
//! browser crate mirrors these models into the page.
//!
//! ## Modules
//!
//! - `config`: initialization contract rendered by the server, validated once
//! - `extension`: extension allow-lists for dropped files
//! - `catalog`: texture map types with descriptions and channel availability
//! - `infer`: map type guess from a file name
//! - `field_group`: one texture map entry and its control names
//! - `registry`: hidden file fields, one per accepted drop batch
//! - `session`: counters and handlers behind one form
//! - `color` / `picker`: RGBA text values and the color picker adapter
//! - `utils`: file name display helpers

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod extension;
pub mod field_group;
pub mod infer;
pub mod picker;
pub mod registry;
pub mod session;
pub mod utils;

pub use catalog::{Catalog, TextureType};
pub use color::{Rgba, DEFAULT_PICKER_COLOR};
pub use config::{ClassNames, ElementIds, FormConfig, RawConfig, Role, CONFIG_ELEMENT_ID};
pub use error::{ColorParseError, ConfigError, Rejection, SessionError};
pub use extension::{extension_of, AllowList};
pub use field_group::{FieldGroup, FieldId, Source};
pub use infer::{infer_type, MapType};
pub use picker::{attach, ColorField, ColorWidget, PickerHandle};
pub use registry::{DropId, HiddenFileField, SubmissionRegistry};
pub use session::{AcceptedBatch, FormSession, Zone};
pub use utils::shorten;
