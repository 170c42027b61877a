//! Shape catalog
//!
//! Named parameter presets used as quick-select defaults. The built-in set
//! lives in [`Catalog::builtin`]; additional presets can be loaded from a
//! RON file and merged on top.

use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ShapeError;
use crate::geometry::{generate_solid, SolidGeometry};
use crate::params::ShapeParams;

/// A set of named presets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub presets: BTreeMap<String, ShapeParams>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The presets shipped with the application
    pub fn builtin() -> Self {
        let presets = [
            ("triangularPrism1", ShapeParams::triangular_prism(5.0, 3.0, 4.0)),
            ("triangularPrism2", ShapeParams::triangular_prism(8.0, 6.0, 8.0)),
            ("rectangularPrism1", ShapeParams::rectangular_prism(4.0, 6.0, 3.0)),
            ("rectangularPrism2", ShapeParams::rectangular_prism(8.0, 2.0, 5.0)),
            ("cube", ShapeParams::cube(3.0)),
            ("cylinder", ShapeParams::cylinder(2.0, 4.0)),
            ("cone", ShapeParams::cone(2.0, 5.0)),
            ("sphere", ShapeParams::sphere(3.0)),
            ("tesseract", ShapeParams::tesseract(3.0)),
        ];
        Self {
            presets: presets
                .into_iter()
                .map(|(name, params)| (name.to_string(), params))
                .collect(),
        }
    }

    /// Look up a preset by name
    pub fn get_preset(&self, name: &str) -> Result<ShapeParams, CatalogError> {
        self.presets
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Preset names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Add or replace a preset after validating it
    pub fn insert(&mut self, name: impl Into<String>, params: ShapeParams) -> Result<(), CatalogError> {
        let name = name.into();
        params
            .validate()
            .map_err(|source| CatalogError::Invalid { name: name.clone(), source })?;
        self.presets.insert(name, params);
        Ok(())
    }

    /// Remove a preset, returning its parameters
    pub fn remove(&mut self, name: &str) -> Option<ShapeParams> {
        self.presets.remove(name)
    }

    /// Copy every preset of `other` into this catalog, replacing same-named ones
    pub fn merge(&mut self, other: Catalog) {
        self.presets.extend(other.presets);
    }

    /// Look up a preset and build its mesh
    pub fn generate(&self, name: &str) -> Result<SolidGeometry, CatalogError> {
        let params = self.get_preset(name)?;
        Ok(generate_solid(&params))
    }

    /// Load presets from a RON file
    ///
    /// Every preset is validated; the first invalid one fails the load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let catalog: Catalog = ron::from_str(&contents)?;
        for (name, params) in &catalog.presets {
            params
                .validate()
                .map_err(|source| CatalogError::Invalid { name: name.clone(), source })?;
        }
        log::debug!("Loaded {} presets", catalog.len());
        Ok(catalog)
    }

    /// Save presets to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CatalogError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(false)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Error from catalog lookup or preset file handling
#[derive(Debug)]
pub enum CatalogError {
    /// No preset with this name
    NotFound(String),
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
    /// A preset whose parameters break the shape invariants
    Invalid { name: String, source: ShapeError },
}

impl From<io::Error> for CatalogError {
    fn from(e: io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<ron::error::SpannedError> for CatalogError {
    fn from(e: ron::error::SpannedError) -> Self {
        CatalogError::Parse(e)
    }
}

impl From<ron::Error> for CatalogError {
    fn from(e: ron::Error) -> Self {
        CatalogError::Serialize(e)
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NotFound(name) => write!(f, "Preset not found: '{}'", name),
            CatalogError::Io(e) => write!(f, "IO error: {}", e),
            CatalogError::Parse(e) => write!(f, "Parse error: {}", e),
            CatalogError::Serialize(e) => write!(f, "Serialization error: {}", e),
            CatalogError::Invalid { name, source } => {
                write!(f, "Invalid preset '{}': {}", name, source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
            CatalogError::Serialize(e) => Some(e),
            CatalogError::Invalid { source, .. } => Some(source),
            CatalogError::NotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ShapeKind;

    #[test]
    fn test_builtin_presets_are_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        for name in catalog.names() {
            assert!(catalog.get_preset(name).unwrap().validate().is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_builtin_covers_every_kind() {
        let catalog = Catalog::builtin();
        for kind in ShapeKind::ALL {
            assert!(
                catalog.presets.values().any(|p| p.kind() == kind),
                "no preset for {}",
                kind
            );
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get_preset("triangularPrism1").unwrap(),
            ShapeParams::triangular_prism(5.0, 3.0, 4.0)
        );
        match catalog.get_preset("dodecahedron") {
            Err(CatalogError::NotFound(name)) => assert_eq!(name, "dodecahedron"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_rejects_invalid() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert("huge", ShapeParams::cube(50.0)).is_err());
        assert!(catalog.is_empty());
        catalog.insert("small", ShapeParams::cube(1.0)).unwrap();
        assert_eq!(catalog.remove("small"), Some(ShapeParams::cube(1.0)));
    }

    #[test]
    fn test_merge_overrides() {
        let mut catalog = Catalog::builtin();
        let mut extra = Catalog::new();
        extra.insert("cube", ShapeParams::cube(7.0)).unwrap();
        extra.insert("bigCone", ShapeParams::cone(4.0, 12.0)).unwrap();
        catalog.merge(extra);
        assert_eq!(catalog.get_preset("cube").unwrap(), ShapeParams::cube(7.0));
        assert!(catalog.get_preset("bigCone").is_ok());
    }

    #[test]
    fn test_generate_dispatches_by_kind() {
        let catalog = Catalog::builtin();
        let g = catalog.generate("tesseract").unwrap();
        assert_eq!(g.kind, ShapeKind::Tesseract);
        assert!(catalog.generate("missing").is_err());
    }

    #[test]
    fn test_ron_round_trip() {
        let catalog = Catalog::builtin();
        let s = ron::to_string(&catalog).unwrap();
        let back: Catalog = ron::from_str(&s).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_load_nonexistent_file() {
        match Catalog::load("/nonexistent/presets.ron") {
            Err(CatalogError::Io(_)) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
