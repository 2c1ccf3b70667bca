use super::CrystalSymmetry;
use crate::StrError;
use std::collections::HashMap;

/// Holds crystal symmetry groups by name
///
/// The registry is an explicit object: build it once and pass it by reference to whatever needs
/// to look up a symmetry group (e.g., slip-group generation).
#[derive(Clone, Debug, Default)]
pub struct SymmetryRegistry {
    groups: HashMap<String, CrystalSymmetry>,
}

impl SymmetryRegistry {
    /// Allocates an empty registry
    pub fn new() -> Self {
        SymmetryRegistry { groups: HashMap::new() }
    }

    /// Allocates a registry with the identity, monoclinic, orthorhombic, hexagonal, and cubic groups
    pub fn with_standard_groups() -> Self {
        let mut registry = SymmetryRegistry::new();
        registry.register(CrystalSymmetry::identity());
        registry.register(CrystalSymmetry::monoclinic());
        registry.register(CrystalSymmetry::orthorhombic());
        registry.register(CrystalSymmetry::hexagonal());
        registry.register(CrystalSymmetry::cubic());
        registry
    }

    /// Registers a group under its name; an existing group with the same name is replaced
    pub fn register(&mut self, group: CrystalSymmetry) {
        let name = group.name().to_string();
        log::debug!("registering symmetry group {} with {} elements", name, group.nsymm());
        if self.groups.insert(name, group).is_some() {
            log::debug!("a previously registered symmetry group has been replaced");
        }
    }

    /// Returns the group with the given name
    pub fn get(&self, name: &str) -> Result<&CrystalSymmetry, StrError> {
        self.groups.get(name).ok_or("symmetry group is not registered")
    }

    /// Returns the sorted names of the registered groups
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.groups.keys().cloned().collect();
        names.sort();
        names
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
