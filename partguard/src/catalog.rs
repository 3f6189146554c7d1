//! Product catalog: built-in seed data and user-supplied JSON catalogs.
//!
//! A JSON catalog is an array of parts, e.g.
//!
//! ```json
//! [
//!   { "id": 1, "category": "CPU", "name": "Ryzen 5 5600X", "price": 199.99,
//!     "stock": 10, "socket": "AM4", "tdp": 65 }
//! ]
//! ```

use crate::core::PartGuardError;
use crate::model::{Category, Part};
use std::collections::HashSet;
use std::path::Path;

/// Built-in catalog. Ids are unique and attributes are set per category.
pub fn seed_products() -> Vec<Part> {
    vec![
        Part::new(101, Category::Cpu, "AMD Ryzen 5 5600X", 199.99, 10)
            .with_socket("AM4")
            .with_tdp(65),
        Part::new(102, Category::Cpu, "AMD Ryzen 7 7800X3D", 449.00, 4)
            .with_socket("AM5")
            .with_tdp(120),
        Part::new(103, Category::Cpu, "Intel Core i5-13600K", 319.99, 7)
            .with_socket("LGA1700")
            .with_tdp(125),
        Part::new(201, Category::Motherboard, "MSI B550-A PRO", 139.99, 6)
            .with_socket("AM4")
            .with_ram_type("DDR4"),
        Part::new(202, Category::Motherboard, "ASUS TUF B650-PLUS", 199.99, 3)
            .with_socket("AM5")
            .with_ram_type("DDR5"),
        Part::new(203, Category::Motherboard, "Gigabyte Z790 UD", 229.99, 2)
            .with_socket("LGA1700")
            .with_ram_type("DDR5"),
        Part::new(301, Category::Ram, "Corsair Vengeance LPX 16GB DDR4-3200", 49.99, 25)
            .with_ram_type("DDR4"),
        Part::new(302, Category::Ram, "G.Skill Flare X5 32GB DDR5-6000", 109.99, 12)
            .with_ram_type("DDR5"),
        Part::new(401, Category::Gpu, "NVIDIA GeForce RTX 4060", 299.99, 8)
            .with_tdp(115)
            .with_length_mm(240),
        Part::new(402, Category::Gpu, "AMD Radeon RX 7900 XT", 749.99, 2)
            .with_tdp(315)
            .with_length_mm(287),
        Part::new(501, Category::Psu, "Corsair CX450M 450W", 54.99, 9).with_psu_wattage(450),
        Part::new(502, Category::Psu, "Seasonic Focus GX-750", 119.99, 5).with_psu_wattage(750),
        Part::new(601, Category::Case, "Cooler Master Q300L", 49.99, 11).with_form_factor("mATX"),
        Part::new(602, Category::Case, "Fractal Design Meshify C", 99.99, 4)
            .with_form_factor("ATX"),
        Part::new(701, Category::Storage, "Samsung 980 1TB NVMe", 79.99, 20),
    ]
}

/// Ordered product list with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Vec<Part>,
}

impl Catalog {
    pub fn new(parts: Vec<Part>) -> Result<Self, PartGuardError> {
        let mut seen = HashSet::new();
        for part in &parts {
            if !seen.insert(part.id()) {
                return Err(PartGuardError::DuplicateId(part.id()));
            }
        }
        Ok(Self { parts })
    }

    pub fn seeded() -> Self {
        Self {
            parts: seed_products(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, PartGuardError> {
        let parts: Vec<Part> = serde_json::from_str(json)?;
        Self::new(parts)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, PartGuardError> {
        let content = std::fs::read_to_string(path)?;
        match Self::from_json_str(&content) {
            Ok(catalog) => {
                tracing::info!("Loaded {} parts from {:?}", catalog.len(), path);
                Ok(catalog)
            }
            Err(e) => {
                tracing::warn!("Rejected catalog {:?}: {}", path, e);
                Err(e)
            }
        }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Look up by 1-based menu number.
    pub fn get(&self, number: usize) -> Option<&Part> {
        number.checked_sub(1).and_then(|i| self.parts.get(i))
    }

    pub fn find_by_id(&self, id: u32) -> Result<&Part, PartGuardError> {
        self.parts
            .iter()
            .find(|p| p.id() == id)
            .ok_or(PartGuardError::UnknownPart(id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
