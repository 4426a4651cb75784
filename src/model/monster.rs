//! # Monster Records
//!
//! The value objects produced by the synthesis engine: the [`Monster`]
//! record and its stats, encounter, treasure, and lair sub-blocks.
//!
//! Records are assembled whole in a single generation call and never
//! mutated afterwards; ownership transfers to the caller. Persistence and
//! sharing live outside this crate.

use crate::model::{ChallengeRating, Environment, MonsterType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Combat statistics block.
///
/// Numeric fields are internally consistent with the declared challenge
/// rating band: hit points are rolled from the stated hit-dice expression,
/// never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    /// Armor class (descending scale; lower is better).
    pub ac: i32,
    /// Hit-dice expression, e.g. `"3"`, `"1-1"`, `"6+2"`.
    pub hd: String,
    /// Hit points rolled from `hd`. Always at least 1.
    pub hp: u32,
    /// Movement rate, rendered as `"120' (40')"`.
    pub movement: String,
    /// Attack routine descriptor, e.g. `"1 attack"`.
    pub attacks: String,
    /// Damage expression, e.g. `"2d4"`.
    pub damage: String,
    /// Saving-throw category, e.g. `"Fighter 2"`.
    pub save: String,
    /// Morale score in [2, 12].
    pub morale: u8,
    /// Experience-point award.
    pub xp: u32,
}

/// Encounter frequency block, derived from type, CR, abilities, and
/// environment. Not independently settable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterInfo {
    /// Dice expression for the number met in or near the lair.
    pub number_appearing: String,
    /// Dice expression for the number met in the wild.
    pub wild_encounter: String,
    /// Probability (0-100, clamped to [5, 95]) that the creature is
    /// encountered in its lair.
    pub lair_chance: u8,
}

/// Currency denominations, poorest to richest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Cp,
    Sp,
    Ep,
    Gp,
    Pp,
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Coin::Cp => "cp",
            Coin::Sp => "sp",
            Coin::Ep => "ep",
            Coin::Gp => "gp",
            Coin::Pp => "pp",
        };
        f.write_str(s)
    }
}

/// Treasure block covering both carried and hoarded wealth.
///
/// When the treasure toggle is off both code fields are `"None"` and every
/// collection is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasureInfo {
    /// Individual treasure-code string (display form, may embed dice
    /// notation) or `"None"`.
    pub individual: String,
    /// Resolved hoard code letter or `"None"`.
    pub lair: String,
    /// Coin amounts keyed by denomination; a key is present only when that
    /// currency actually rolled.
    pub coins: BTreeMap<Coin, u32>,
    /// Gem entries rendered as `"<name> (<value> gp)"`.
    pub gems: Vec<String>,
    /// Magic item entries rendered as `"Magic <kind>"`.
    pub magic_items: Vec<String>,
}

impl TreasureInfo {
    /// The empty treasure block used when treasure generation is disabled.
    pub fn none() -> Self {
        Self {
            individual: "None".to_string(),
            lair: "None".to_string(),
            coins: BTreeMap::new(),
            gems: Vec::new(),
            magic_items: Vec::new(),
        }
    }
}

/// Lair size band. Monotonic in challenge rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LairSize {
    /// No fixed lair (lair generation disabled).
    None,
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

impl LairSize {
    /// Prose rendering of the size band, used in lair descriptions.
    pub fn prose(&self) -> &'static str {
        match self {
            LairSize::None => "No fixed lair",
            LairSize::Tiny => "Small cave or burrow (10-20 feet)",
            LairSize::Small => "Modest lair or den (20-40 feet)",
            LairSize::Medium => "Standard lair complex (40-80 feet)",
            LairSize::Large => "Extensive lair network (80-150 feet)",
            LairSize::Huge => "Vast underground complex (150+ feet)",
        }
    }
}

/// Lair description block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LairInfo {
    /// Composed prose description.
    pub description: String,
    /// Terrain the lair sits in; matches the creature's environment.
    pub terrain: Environment,
    pub size: LairSize,
    /// Non-empty unless lair generation is disabled. Deduplicated.
    pub defenses: Vec<String>,
    /// Possibly empty. Deduplicated.
    pub features: Vec<String>,
}

impl LairInfo {
    /// The fixed "no lair" block used when lair generation is disabled.
    pub fn no_lair(terrain: Environment) -> Self {
        Self {
            description: "No fixed lair".to_string(),
            terrain,
            size: LairSize::None,
            defenses: Vec::new(),
            features: Vec::new(),
        }
    }
}

/// A complete generated creature record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub monster_type: MonsterType,
    pub challenge_rating: ChallengeRating,
    pub environment: Environment,
    pub stats: MonsterStats,
    pub description: String,
    /// Ordered, duplicate-free list of special abilities.
    pub special_abilities: Vec<String>,
    pub encounters: EncounterInfo,
    pub treasure: TreasureInfo,
    pub lair: LairInfo,
    pub created_at: DateTime<Utc>,
    pub is_template: bool,
    /// Provenance marker; always `"generated"` for records from this crate.
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treasure_none_is_empty() {
        let t = TreasureInfo::none();
        assert_eq!(t.individual, "None");
        assert_eq!(t.lair, "None");
        assert!(t.coins.is_empty());
        assert!(t.gems.is_empty());
        assert!(t.magic_items.is_empty());
    }

    #[test]
    fn test_no_lair_block() {
        let lair = LairInfo::no_lair(Environment::Swamp);
        assert_eq!(lair.description, "No fixed lair");
        assert_eq!(lair.size, LairSize::None);
        assert_eq!(lair.terrain, Environment::Swamp);
        assert!(lair.defenses.is_empty());
        assert!(lair.features.is_empty());
    }

    #[test]
    fn test_lair_size_monotonic_ordering() {
        assert!(LairSize::Tiny < LairSize::Small);
        assert!(LairSize::Medium < LairSize::Huge);
    }

    #[test]
    fn test_coin_map_wire_keys() {
        let mut coins = BTreeMap::new();
        coins.insert(Coin::Gp, 40u32);
        coins.insert(Coin::Cp, 12u32);
        let json = serde_json::to_value(&coins).unwrap();
        assert_eq!(json["gp"], 40);
        assert_eq!(json["cp"], 12);
    }
}
