// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::Bool;

// Use built-in library
use std::collections::{btree_map, BTreeMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableAttributesProperties {
    #[serde(rename = "type")]
    pub attrib_type: String,
    #[serde(rename = "maxlength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(rename = "format", default, skip_serializing_if = "Option::is_none")]
    pub attrib_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "allowedInUGC")]
    pub allowed_in_ugc: Bool,
}

/// Attribute names mapped to their editable properties. An attribute missing
/// from the map is not editable for the requested stream type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditableAttributesResponse(pub BTreeMap<String, EditableAttributesProperties>);

impl EditableAttributesResponse {
    pub fn get(&self, name: &str) -> Option<&EditableAttributesProperties> {
        self.0.get(name)
    }

    pub fn is_editable(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, EditableAttributesProperties> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a EditableAttributesResponse {
    type Item = (&'a String, &'a EditableAttributesProperties);
    type IntoIter = btree_map::Iter<'a, String, EditableAttributesProperties>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
