//! Surface materials, reduced to what intersection tests read.

use serde::{Deserialize, Serialize};

use crate::Face;

/// Which face orientations a material exposes to rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Only faces whose normal points against the ray.
    #[default]
    Front,
    /// Only faces whose normal points along the ray.
    Back,
    /// Both orientations.
    Double,
}

/// A surface material.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Material {
    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Visible side(s).
    #[serde(default)]
    pub side: Side,
}

impl Material {
    /// A material with the given side.
    pub fn new(side: Side) -> Self {
        Self { name: None, side }
    }

    /// Attach a name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Either one material for the whole mesh or a table indexed per face.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialSlot {
    /// Every face uses this material.
    Single(Material),
    /// Faces pick an entry by their `material_index`.
    Multi(Vec<Material>),
}

impl MaterialSlot {
    /// Material governing `face`, if any.
    ///
    /// A multi-material slot returns `None` for faces without a
    /// `material_index` or whose index is past the end of the table.
    pub fn resolve(&self, face: &Face) -> Option<&Material> {
        match self {
            MaterialSlot::Single(material) => Some(material),
            MaterialSlot::Multi(materials) => face.material_index.and_then(|i| materials.get(i)),
        }
    }
}

impl From<Material> for MaterialSlot {
    fn from(material: Material) -> Self {
        MaterialSlot::Single(material)
    }
}

impl Default for MaterialSlot {
    fn default() -> Self {
        MaterialSlot::Single(Material::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_material_applies_to_every_face() {
        let slot = MaterialSlot::from(Material::new(Side::Double));
        let face = Face::triangle(0, 1, 2).with_material(7);
        assert_eq!(slot.resolve(&face).map(|m| m.side), Some(Side::Double));
    }

    #[test]
    fn test_multi_material_lookup() {
        let slot = MaterialSlot::Multi(vec![Material::new(Side::Front), Material::new(Side::Back)]);
        let back = Face::triangle(0, 1, 2).with_material(1);
        let missing = Face::triangle(0, 1, 2).with_material(2);
        let unindexed = Face::triangle(0, 1, 2);

        assert_eq!(slot.resolve(&back).map(|m| m.side), Some(Side::Back));
        assert!(slot.resolve(&missing).is_none());
        assert!(slot.resolve(&unindexed).is_none());
    }

    #[test]
    fn test_side_serde_names() {
        let side: Side = serde_json::from_str("\"double\"").unwrap();
        assert_eq!(side, Side::Double);
        assert_eq!(serde_json::to_string(&Side::Back).unwrap(), "\"back\"");
    }
}
