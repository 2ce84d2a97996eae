use super::builtin::BUILTIN_RESOURCES;
use super::{AssetCategory, CatalogError, ResourceKind};
use alloc::collections::btree_map::{BTreeMap, Entry};
use alloc::string::String;

/// A catalog entry: one embedded resource and the asset it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Identifier of the resource inside the executable, e.g. `2_3000_0.bmp`.
    pub resource_key: String,
    /// File name (without extension) of the extracted asset.
    pub logical_name: String,
    pub category: AssetCategory,
    pub kind: ResourceKind,
}

impl CatalogEntry {
    /// Creates an entry, deriving kind and category from `resource_key`.
    pub fn new(
        resource_key: impl Into<String>,
        logical_name: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let resource_key = resource_key.into();
        let Some(kind) = ResourceKind::from_resource_key(&resource_key) else {
            return Err(CatalogError::UnknownResourceKind(resource_key));
        };

        Ok(Self {
            resource_key,
            logical_name: logical_name.into(),
            category: kind.default_category(),
            kind,
        })
    }

    /// Returns `true` if `file_name` is the extracted file for this resource.
    ///
    /// Resource extractors name their output `<executable name>_<resource key>`, so the file name
    /// must be the key itself or end with `_` followed by the key.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        match file_name.strip_suffix(self.resource_key.as_str()) {
            Some(prefix) => prefix.is_empty() || prefix.ends_with('_'),
            None => false,
        }
    }
}

/// Set of catalog entries with unique resource keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of the resources in the game executable.
    pub fn builtin() -> Self {
        let entries = BUILTIN_RESOURCES
            .iter()
            .map(|&(resource_key, logical_name, kind)| {
                let entry = CatalogEntry {
                    resource_key: resource_key.into(),
                    logical_name: logical_name.into(),
                    category: kind.default_category(),
                    kind,
                };
                (entry.resource_key.clone(), entry)
            })
            .collect();

        Self { entries }
    }

    /// Adds a resource, deriving its kind and category from the key.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownResourceKind`] if the key has no known type prefix.
    /// - [`CatalogError::DuplicateKey`] if the key is already present.
    pub fn insert(
        &mut self,
        resource_key: impl Into<String>,
        logical_name: impl Into<String>,
    ) -> Result<&CatalogEntry, CatalogError> {
        self.insert_entry(CatalogEntry::new(resource_key, logical_name)?)
    }

    /// Adds a fully specified entry.
    ///
    /// # Errors
    ///
    /// [`CatalogError::DuplicateKey`] if the key is already present.
    pub fn insert_entry(&mut self, entry: CatalogEntry) -> Result<&CatalogEntry, CatalogError> {
        match self.entries.entry(entry.resource_key.clone()) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateKey(entry.resource_key)),
            Entry::Vacant(slot) => Ok(&*slot.insert(entry)),
        }
    }

    /// Looks up an entry by resource key.
    #[inline]
    pub fn get(&self, resource_key: &str) -> Option<&CatalogEntry> {
        self.entries.get(resource_key)
    }

    /// Finds the entry whose extracted file is named `file_name`.
    pub fn find_by_file_name(&self, file_name: &str) -> Option<&CatalogEntry> {
        self.entries
            .values()
            .find(|entry| entry.matches_file_name(file_name))
    }

    /// Iterates over the entries, ordered by resource key.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResourceCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = alloc::collections::btree_map::Values<'a, String, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
