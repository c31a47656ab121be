use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A tagged data item from the SD property section (`> <TAG>` plus value lines).
///
/// Serializes as a single-key object, `{"TAG": ["line 1", "line 2"]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub tag: String,
    pub values: Vec<String>,
}

impl Property {
    pub fn new(tag: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            tag: tag.into(),
            values,
        }
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.tag, &self.values)?;
        map.end()
    }
}
