//! Default material table, suggestion merging and density lookup.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use vessel_ir::MaterialSuggestion;

/// The six parts every blueprint carries, in BOM order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKey {
    /// Lower vessel body shell.
    BodyShell,
    /// Curved upper head / funnel section.
    CurvedHead,
    /// Centre insert / filter collar.
    InsertFilter,
    /// External handle.
    Handle,
    /// Sealing ring between head and body.
    Gasket,
    /// Bottom cap / base ring.
    BaseCap,
}

impl PartKey {
    /// Every part in BOM order.
    pub const ALL: [PartKey; 6] = [
        PartKey::BodyShell,
        PartKey::CurvedHead,
        PartKey::InsertFilter,
        PartKey::Handle,
        PartKey::Gasket,
        PartKey::BaseCap,
    ];

    /// Key as it appears in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartKey::BodyShell => "body_shell",
            PartKey::CurvedHead => "curved_head",
            PartKey::InsertFilter => "insert_filter",
            PartKey::Handle => "handle",
            PartKey::Gasket => "gasket",
            PartKey::BaseCap => "base_cap",
        }
    }

    /// Human-readable part name.
    pub fn part_name(&self) -> &'static str {
        self.default_entry().part_name
    }

    /// Material used when a blueprint has no usable entry for the part.
    pub fn fallback_material(&self) -> &'static str {
        match self {
            PartKey::BodyShell | PartKey::CurvedHead => "Stainless Steel 304 (0.9 mm)",
            PartKey::InsertFilter => "Stainless Steel 304 + 80 mesh screen",
            PartKey::Handle => "Glass-filled Nylon 66",
            PartKey::Gasket => "Food-grade Silicone",
            PartKey::BaseCap => "Stainless Steel 304 (1.0 mm)",
        }
    }

    fn default_entry(&self) -> &'static MaterialDefault {
        let idx = match self {
            PartKey::BodyShell => 0,
            PartKey::CurvedHead => 1,
            PartKey::Handle => 2,
            PartKey::InsertFilter => 3,
            PartKey::Gasket => 4,
            PartKey::BaseCap => 5,
        };
        &DEFAULT_MATERIALS[idx]
    }
}

impl fmt::Display for PartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartKey::ALL.into_iter().find(|k| k.as_str() == s).ok_or(())
    }
}

/// One row of the built-in material table.
#[derive(Debug, Clone, Copy)]
pub struct MaterialDefault {
    /// Part the row applies to.
    pub part_key: PartKey,
    /// Human-readable part name.
    pub part_name: &'static str,
    /// Recommended (and default selected) material.
    pub recommended: &'static str,
    /// Ranked alternatives.
    pub alternatives: &'static [&'static str],
    /// Confidence in the recommendation.
    pub confidence: f64,
    /// Short note.
    pub notes: &'static str,
}

impl MaterialDefault {
    /// Owned suggestion with `selected` set to the recommendation.
    pub fn to_suggestion(&self) -> MaterialSuggestion {
        MaterialSuggestion {
            part_key: self.part_key.as_str().to_string(),
            part_name: self.part_name.to_string(),
            recommended: self.recommended.to_string(),
            alternatives: self.alternatives.iter().map(|s| s.to_string()).collect(),
            selected: Some(self.recommended.to_string()),
            confidence: self.confidence,
            notes: self.notes.to_string(),
        }
    }
}

/// Built-in recommendations, in document order. Read-only; callers get
/// owned copies through [`default_materials`].
pub static DEFAULT_MATERIALS: [MaterialDefault; 6] = [
    MaterialDefault {
        part_key: PartKey::BodyShell,
        part_name: "Lower vessel body shell",
        recommended: "Stainless Steel 304 (0.9 mm)",
        alternatives: &["Stainless Steel 316L (0.9 mm)", "Stainless Steel 430 (1.0 mm)"],
        confidence: 0.86,
        notes: "Deep draw + spin formed shell.",
    },
    MaterialDefault {
        part_key: PartKey::CurvedHead,
        part_name: "Curved upper head / funnel section",
        recommended: "Stainless Steel 304 (0.9 mm)",
        alternatives: &["Stainless Steel 316L (0.9 mm)", "Stainless Steel 430 (1.0 mm)"],
        confidence: 0.83,
        notes: "Curved lip and neck transition.",
    },
    MaterialDefault {
        part_key: PartKey::Handle,
        part_name: "External handle",
        recommended: "Glass-filled Nylon 66, heat-resistant",
        alternatives: &["Bakelite / Phenolic resin", "Stainless handle + silicone sleeve"],
        confidence: 0.72,
        notes: "Thermal isolation and grip safety.",
    },
    MaterialDefault {
        part_key: PartKey::InsertFilter,
        part_name: "Center insert / filter collar",
        recommended: "Stainless Steel 304 + 80 mesh screen",
        alternatives: &["Stainless Steel 316L + 100 mesh screen", "Perforated stainless disc"],
        confidence: 0.79,
        notes: "Leaf control during pour.",
    },
    MaterialDefault {
        part_key: PartKey::Gasket,
        part_name: "Sealing ring / gasket",
        recommended: "Food-grade Silicone (Shore A 50-60)",
        alternatives: &["EPDM food-grade", "Fluorosilicone (premium)"],
        confidence: 0.69,
        notes: "Upper/lower section seal.",
    },
    MaterialDefault {
        part_key: PartKey::BaseCap,
        part_name: "Bottom cap / base ring",
        recommended: "Stainless Steel 304 (1.0 mm)",
        alternatives: &["Stainless Steel 430 (1.0 mm)", "Stainless Steel 316L (1.0 mm)"],
        confidence: 0.75,
        notes: "Base reinforcement.",
    },
];

/// Fresh copy of the default table.
pub fn default_materials() -> Vec<MaterialSuggestion> {
    DEFAULT_MATERIALS.iter().map(MaterialDefault::to_suggestion).collect()
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Overlay one incoming suggestion on its default row.
fn overlay(base: &MaterialDefault, item: &MaterialSuggestion) -> MaterialSuggestion {
    let mut merged = base.to_suggestion();
    if let Some(rec) = non_empty(&item.recommended) {
        merged.recommended = rec.to_string();
    }
    if !item.alternatives.is_empty() {
        merged.alternatives = item.alternatives.clone();
    }
    merged.selected = item
        .selected
        .as_deref()
        .and_then(non_empty)
        .or_else(|| non_empty(&item.recommended))
        .map(str::to_string)
        .or(merged.selected);
    merged.confidence = item.confidence;
    if let Some(notes) = non_empty(&item.notes) {
        merged.notes = notes.to_string();
    }
    merged
}

/// Merge client suggestions against the default table.
///
/// Known keys are overlaid on their default row: non-empty `recommended`,
/// `alternatives` and `notes` win, `selected` is the incoming selection or
/// incoming recommendation, and confidence is always the incoming value.
/// Unknown keys pass through unchanged. Default rows missing from `incoming`
/// are appended in table order. An empty list yields the defaults.
pub fn merge_materials(incoming: &[MaterialSuggestion]) -> Vec<MaterialSuggestion> {
    if incoming.is_empty() {
        return default_materials();
    }

    let mut merged = Vec::with_capacity(incoming.len().max(DEFAULT_MATERIALS.len()));
    for item in incoming {
        match item.part_key.parse::<PartKey>() {
            Ok(key) => merged.push(overlay(key.default_entry(), item)),
            Err(()) => {
                debug!(part_key = %item.part_key, "passing through unknown material key");
                merged.push(item.clone());
            }
        }
    }

    for row in &DEFAULT_MATERIALS {
        let key = row.part_key.as_str();
        if !incoming.iter().any(|m| m.part_key == key) {
            merged.push(row.to_suggestion());
        }
    }

    merged
}

/// Density class of a material, in g/cm³, chosen by keyword.
///
/// Unrecognized names fall back to 1.10.
pub fn density_g_cm3(material_name: &str) -> f64 {
    let text = material_name.to_lowercase();
    let has = |needle: &str| text.contains(needle);

    if has("316") || has("304") || has("430") || has("stainless") {
        7.9
    } else if has("nylon") {
        1.35
    } else if has("bakelite") || has("phenolic") {
        1.30
    } else if has("silicone") {
        1.15
    } else if has("epdm") {
        0.95
    } else {
        1.10
    }
}
