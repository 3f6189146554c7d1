//! Part model: a catalog or cart item with sparse, category-specific attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of part categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "CPU")]
    Cpu,
    Motherboard,
    #[serde(rename = "RAM")]
    Ram,
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "PSU")]
    Psu,
    Case,
    Storage,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Motherboard => "Motherboard",
            Category::Ram => "RAM",
            Category::Gpu => "GPU",
            Category::Psu => "PSU",
            Category::Case => "Case",
            Category::Storage => "Storage",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hardware part.
///
/// Optional attributes are only populated for categories where they mean
/// something; `None` is "unknown", which is distinct from zero. Nothing is
/// validated on construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    id: u32,
    category: Category,
    name: String,
    price: f64,
    stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    socket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ram_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tdp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length_mm: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    psu_wattage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    form_factor: Option<String>,
}

impl Part {
    pub fn new(id: u32, category: Category, name: impl Into<String>, price: f64, stock: i32) -> Self {
        Self {
            id,
            category,
            name: name.into(),
            price,
            stock,
            socket: None,
            ram_type: None,
            tdp: None,
            length_mm: None,
            psu_wattage: None,
            form_factor: None,
        }
    }

    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    pub fn with_ram_type(mut self, ram_type: impl Into<String>) -> Self {
        self.ram_type = Some(ram_type.into());
        self
    }

    /// Thermal design power in watts.
    pub fn with_tdp(mut self, watts: i32) -> Self {
        self.tdp = Some(watts);
        self
    }

    pub fn with_length_mm(mut self, mm: i32) -> Self {
        self.length_mm = Some(mm);
        self
    }

    pub fn with_psu_wattage(mut self, watts: i32) -> Self {
        self.psu_wattage = Some(watts);
        self
    }

    pub fn with_form_factor(mut self, form_factor: impl Into<String>) -> Self {
        self.form_factor = Some(form_factor.into());
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn socket(&self) -> Option<&str> {
        self.socket.as_deref()
    }

    pub fn ram_type(&self) -> Option<&str> {
        self.ram_type.as_deref()
    }

    pub fn tdp(&self) -> Option<i32> {
        self.tdp
    }

    pub fn length_mm(&self) -> Option<i32> {
        self.length_mm
    }

    pub fn psu_wattage(&self) -> Option<i32> {
        self.psu_wattage
    }

    pub fn form_factor(&self) -> Option<&str> {
        self.form_factor.as_deref()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id:{}) [{}] ${:.2}",
            self.name, self.id, self.category, self.price
        )?;
        if let Some(ref socket) = self.socket {
            write!(f, " socket:{}", socket)?;
        }
        if let Some(ref ram_type) = self.ram_type {
            write!(f, " ram:{}", ram_type)?;
        }
        if let Some(tdp) = self.tdp {
            write!(f, " tdp:{}W", tdp)?;
        }
        if let Some(length) = self.length_mm {
            write!(f, " length:{}mm", length)?;
        }
        if let Some(wattage) = self.psu_wattage {
            write!(f, " psu:{}W", wattage)?;
        }
        if let Some(ref form_factor) = self.form_factor {
            write!(f, " form:{}", form_factor)?;
        }
        Ok(())
    }
}
