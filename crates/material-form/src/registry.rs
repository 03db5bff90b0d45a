//! Submission registry: one hidden file-bearing field per accepted drop batch.
//!
//! A file input's list cannot be extended after the fact, so every batch gets
//! its own field named `texture_map_store_<drop>`. The multipart parser on the
//! server recovers which files arrived together from that suffix.

use std::fmt;

pub const STORE_FIELD_PREFIX: &str = "texture_map_store_";

/// Drop counter value. Starts at 1 and is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropId(pub u32);

impl fmt::Display for DropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenFileField {
    pub drop: DropId,
    pub name: String,
    /// Names of the files bound to this field, in drop order
    pub file_names: Vec<String>,
}

#[derive(Debug, Default)]
pub struct SubmissionRegistry {
    fields: Vec<HiddenFileField>,
    drop_counter: u32,
}

impl SubmissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch and hand out its uniquely named field.
    pub fn register_batch<I, S>(&mut self, file_names: I) -> &HiddenFileField
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drop_counter += 1;
        let drop = DropId(self.drop_counter);
        self.fields.push(HiddenFileField {
            drop,
            name: format!("{STORE_FIELD_PREFIX}{drop}"),
            file_names: file_names.into_iter().map(Into::into).collect(),
        });
        &self.fields[self.fields.len() - 1]
    }

    pub fn get(&self, drop: DropId) -> Option<&HiddenFileField> {
        self.fields.iter().find(|f| f.drop == drop)
    }

    pub fn fields(&self) -> &[HiddenFileField] {
        &self.fields
    }

    pub fn drop_counter(&self) -> u32 {
        self.drop_counter
    }
}
