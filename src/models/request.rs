use crate::models::Settings;
use camino::Utf8PathBuf;
use indexmap::IndexMap;

/// A file read from disk, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Path exactly as given on the command line.
    pub path: Utf8PathBuf,
    pub raw_content: Vec<u8>,
}

/// Mapping from input path to escaped content.
///
/// Every key belongs to a file that passed the textual check. Insertion order is
/// kept until [`ContentMap::sort`] is called; the generator always renders a
/// sorted map so that repeated runs produce identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMap {
    entries: IndexMap<String, String>,
}

impl ContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous content for the same path.
    pub fn insert(&mut self, path: impl Into<String>, escaped: impl Into<String>) {
        self.entries.insert(path.into(), escaped.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort entries by key.
    pub fn sort(&mut self) {
        self.entries.sort_keys();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything the generator needs, passed explicitly instead of living in globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub settings: Settings,
    pub contents: ContentMap,
}

impl GenerationRequest {
    /// Build a request whose content map is sorted by key.
    pub fn new(settings: Settings, mut contents: ContentMap) -> Self {
        contents.sort();
        Self { settings, contents }
    }
}
