use super::value::{Map, Value};

/// A nested, string-keyed mapping evaluated by a [`RuleSet`](super::RuleSet).
///
/// Values are addressed by dot-separated paths like `"user.profile.age"`.
/// Lists are opaque leaves; a path never descends into them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    root: Map,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value at a dot-separated path. Creates intermediate nested maps as needed.
    #[must_use]
    pub fn set(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.insert(path, value.into());
        self
    }

    /// Insert a value at a dot-separated path (mutable reference version).
    ///
    /// A non-map value sitting on an intermediate segment is replaced by a map.
    pub fn insert(&mut self, path: &str, value: Value) {
        let segments: Vec<&str> = path.split('.').collect();
        Self::insert_recursive(&mut self.root, &segments, value);
    }

    /// Resolve a dot-separated path.
    ///
    /// Every segment but the last must land on a nested map. The final value
    /// is returned as-is, maps and lists included. Missing keys, non-map
    /// intermediates and explicit nulls all resolve to `None`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let last = segments.next_back()?;
        let mut node = &self.root;
        for segment in segments {
            node = node.get(segment)?.as_map()?;
        }
        node.get(last).filter(|v| !v.is_null())
    }

    /// The top-level mapping.
    #[must_use]
    pub fn as_map(&self) -> &Map {
        &self.root
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    fn insert_recursive(map: &mut Map, segments: &[&str], value: Value) {
        match segments {
            [] => {}
            [last] => {
                map.insert((*last).to_owned(), value);
            }
            [first, rest @ ..] => {
                let entry = map
                    .entry((*first).to_owned())
                    .or_insert_with(|| Value::Map(Map::new()));
                if !matches!(entry, Value::Map(_)) {
                    *entry = Value::Map(Map::new());
                }
                if let Value::Map(nested) = entry {
                    Self::insert_recursive(nested, rest, value);
                }
            }
        }
    }
}

impl From<Map> for Document {
    fn from(root: Map) -> Self {
        Self { root }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            root: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(feature = "json")]
impl Document {
    /// Parse a JSON object into a document.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::Json`](crate::RulerError::Json) if the input is
    /// not valid JSON or its top level is not an object.
    pub fn from_json(input: &str) -> Result<Self, crate::RulerError> {
        Ok(serde_json::from_str(input)?)
    }
}
