//! Item classification from upstream descriptive strings
//!
//! Pure functions, no I/O. The wear exterior is parsed out of the market
//! hash name and the rarity tier out of the raw `type` string, both via
//! ordered substring scans over fixed tables.

use serde::{Deserialize, Serialize};

/// Wear condition of an item, parsed from its market hash name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exterior {
    #[serde(rename = "Factory New")]
    FactoryNew,
    #[serde(rename = "Minimal Wear")]
    MinimalWear,
    #[serde(rename = "Field-Tested")]
    FieldTested,
    #[serde(rename = "Well-Worn")]
    WellWorn,
    #[serde(rename = "Battle-Scarred")]
    BattleScarred,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
}

impl Exterior {
    /// Display label, as stored and rendered
    pub fn as_str(&self) -> &'static str {
        match self {
            Exterior::FactoryNew => "Factory New",
            Exterior::MinimalWear => "Minimal Wear",
            Exterior::FieldTested => "Field-Tested",
            Exterior::WellWorn => "Well-Worn",
            Exterior::BattleScarred => "Battle-Scarred",
            Exterior::NotApplicable => "Not Applicable",
        }
    }

    /// The five wear labels that can appear in a market hash name
    pub fn wearable() -> &'static [Exterior] {
        &[
            Exterior::FactoryNew,
            Exterior::MinimalWear,
            Exterior::FieldTested,
            Exterior::WellWorn,
            Exterior::BattleScarred,
        ]
    }
}

/// Rarity tier of an item, parsed from its upstream `type` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "Consumer Grade")]
    ConsumerGrade,
    #[serde(rename = "Industrial Grade")]
    IndustrialGrade,
    #[serde(rename = "Mil-Spec")]
    MilSpec,
    #[serde(rename = "Restricted")]
    Restricted,
    #[serde(rename = "Classified")]
    Classified,
    #[serde(rename = "Covert")]
    Covert,
    #[serde(rename = "★")]
    Special,
}

impl Rarity {
    /// Display label, as stored and rendered
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::ConsumerGrade => "Consumer Grade",
            Rarity::IndustrialGrade => "Industrial Grade",
            Rarity::MilSpec => "Mil-Spec",
            Rarity::Restricted => "Restricted",
            Rarity::Classified => "Classified",
            Rarity::Covert => "Covert",
            Rarity::Special => "★",
        }
    }
}

/// Known `type` substrings mapped to rarity tiers, scanned in order
const RARITY_MAP: [(&str, Rarity); 6] = [
    ("Consumer Grade", Rarity::ConsumerGrade),
    ("Industrial Grade", Rarity::IndustrialGrade),
    ("Mil-Spec Grade", Rarity::MilSpec),
    ("Restricted", Rarity::Restricted),
    ("Classified", Rarity::Classified),
    ("Covert", Rarity::Covert),
];

/// Marker glyph carried by knives and gloves, which have no grade substring
const SPECIAL_GLYPH: char = '★';

/// Extract the wear condition from a market hash name
///
/// Scans for each known label as a parenthesized substring, e.g.
/// `"AK-47 | Redline (Field-Tested)"`. The labels are mutually exclusive,
/// so scan order does not affect the result. Items without a wear
/// component (cases, stickers, agents) yield [`Exterior::NotApplicable`].
pub fn extract_exterior(market_hash_name: &str) -> Exterior {
    for exterior in Exterior::wearable() {
        if market_hash_name.contains(&format!("({})", exterior.as_str())) {
            return *exterior;
        }
    }
    Exterior::NotApplicable
}

/// Extract the rarity tier from an upstream `type` string
///
/// Returns the first match in the mapping table. Unknown categories fall
/// back to [`Rarity::Special`] when the string carries the ★ glyph, else
/// to the lowest tier — so an unrecognized category reads as
/// [`Rarity::ConsumerGrade`].
pub fn extract_rarity(type_string: &str) -> Rarity {
    for (needle, rarity) in RARITY_MAP {
        if type_string.contains(needle) {
            return rarity;
        }
    }
    if type_string.contains(SPECIAL_GLYPH) {
        Rarity::Special
    } else {
        Rarity::ConsumerGrade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_exterior_finds_each_wear_label() {
        let cases = [
            ("Glock-18 | Fade (Factory New)", Exterior::FactoryNew),
            ("AWP | Lightning Strike (Minimal Wear)", Exterior::MinimalWear),
            ("AK-47 | Redline (Field-Tested)", Exterior::FieldTested),
            ("P250 | Sand Dune (Well-Worn)", Exterior::WellWorn),
            ("M4A4 | Urban DDPAT (Battle-Scarred)", Exterior::BattleScarred),
        ];

        for (name, expected) in cases {
            assert_eq!(extract_exterior(name), expected, "{}", name);
        }
    }

    #[test]
    fn extract_exterior_defaults_to_not_applicable() {
        assert_eq!(extract_exterior("Chroma 2 Case"), Exterior::NotApplicable);
        assert_eq!(
            extract_exterior("Sticker | Crown (Foil)"),
            Exterior::NotApplicable
        );
        assert_eq!(extract_exterior(""), Exterior::NotApplicable);
    }

    #[test]
    fn extract_exterior_requires_parentheses() {
        // The label must appear parenthesized, not as loose text
        assert_eq!(
            extract_exterior("Factory New Collection Case"),
            Exterior::NotApplicable
        );
    }

    #[test]
    fn extract_rarity_maps_known_substrings() {
        let cases = [
            ("Consumer Grade Pistol", Rarity::ConsumerGrade),
            ("Industrial Grade SMG", Rarity::IndustrialGrade),
            ("Mil-Spec Grade Rifle", Rarity::MilSpec),
            ("Restricted Sniper Rifle", Rarity::Restricted),
            ("Classified Rifle", Rarity::Classified),
            ("Covert Pistol", Rarity::Covert),
        ];

        for (type_string, expected) in cases {
            assert_eq!(extract_rarity(type_string), expected, "{}", type_string);
        }
    }

    #[test]
    fn extract_rarity_star_glyph_means_special() {
        // Gloves carry the glyph but no known grade substring
        assert_eq!(extract_rarity("★ Extraordinary Gloves"), Rarity::Special);
    }

    #[test]
    fn extract_rarity_known_substring_wins_over_glyph() {
        // Knives are both starred and graded; the mapping table wins
        assert_eq!(extract_rarity("★ Covert Knife"), Rarity::Covert);
    }

    #[test]
    fn extract_rarity_defaults_to_consumer_grade() {
        assert_eq!(extract_rarity("Base Grade Container"), Rarity::ConsumerGrade);
        assert_eq!(extract_rarity(""), Rarity::ConsumerGrade);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&Exterior::FieldTested).unwrap();
        assert_eq!(json, "\"Field-Tested\"");
        let back: Exterior = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Exterior::FieldTested);

        let json = serde_json::to_string(&Rarity::Special).unwrap();
        assert_eq!(json, "\"★\"");
        let back: Rarity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rarity::Special);
    }
}
