//! # Generation Requests
//!
//! The typed input to the synthesis engine: filter enumerations, algorithm
//! and complexity selectors, and the request/filters structs themselves.
//!
//! Filter fields use `Option<T>` where `None` means the caller asked for
//! "any" value; on the wire this round-trips as the literal string `"any"`.
//! Request-shape validation (coercing raw payloads into these types) is a
//! collaborator concern — by the time a request reaches this crate it is
//! already well-typed.

use crate::BestiaryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered challenge-rating band driving stat, treasure, and lair scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChallengeRating {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6+")]
    SixPlus,
}

impl ChallengeRating {
    /// All bands, in ascending order of difficulty.
    pub const ALL: [ChallengeRating; 7] = [
        ChallengeRating::Zero,
        ChallengeRating::One,
        ChallengeRating::Two,
        ChallengeRating::Three,
        ChallengeRating::Four,
        ChallengeRating::Five,
        ChallengeRating::SixPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeRating::Zero => "0",
            ChallengeRating::One => "1",
            ChallengeRating::Two => "2",
            ChallengeRating::Three => "3",
            ChallengeRating::Four => "4",
            ChallengeRating::Five => "5",
            ChallengeRating::SixPlus => "6+",
        }
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeRating {
    type Err = BestiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(ChallengeRating::Zero),
            "1" => Ok(ChallengeRating::One),
            "2" => Ok(ChallengeRating::Two),
            "3" => Ok(ChallengeRating::Three),
            "4" => Ok(ChallengeRating::Four),
            "5" => Ok(ChallengeRating::Five),
            "6+" => Ok(ChallengeRating::SixPlus),
            other => Err(BestiaryError::InvalidValue(format!(
                "unknown challenge rating '{other}'"
            ))),
        }
    }
}

/// Fixed creature-type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterType {
    Beast,
    Undead,
    Humanoid,
    Dragon,
    Fey,
    Fiend,
    Construct,
    Elemental,
    Giant,
    Aberration,
}

impl MonsterType {
    pub const ALL: [MonsterType; 10] = [
        MonsterType::Beast,
        MonsterType::Undead,
        MonsterType::Humanoid,
        MonsterType::Dragon,
        MonsterType::Fey,
        MonsterType::Fiend,
        MonsterType::Construct,
        MonsterType::Elemental,
        MonsterType::Giant,
        MonsterType::Aberration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MonsterType::Beast => "beast",
            MonsterType::Undead => "undead",
            MonsterType::Humanoid => "humanoid",
            MonsterType::Dragon => "dragon",
            MonsterType::Fey => "fey",
            MonsterType::Fiend => "fiend",
            MonsterType::Construct => "construct",
            MonsterType::Elemental => "elemental",
            MonsterType::Giant => "giant",
            MonsterType::Aberration => "aberration",
        }
    }
}

impl fmt::Display for MonsterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonsterType {
    type Err = BestiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonsterType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| BestiaryError::InvalidValue(format!("unknown creature type '{s}'")))
    }
}

/// Fixed terrain classification for habitats and lairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dungeon,
    Forest,
    Swamp,
    Mountain,
    Desert,
    Arctic,
    Coastal,
    Urban,
    Underground,
    Planar,
}

impl Environment {
    pub const ALL: [Environment; 10] = [
        Environment::Dungeon,
        Environment::Forest,
        Environment::Swamp,
        Environment::Mountain,
        Environment::Desert,
        Environment::Arctic,
        Environment::Coastal,
        Environment::Urban,
        Environment::Underground,
        Environment::Planar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dungeon => "dungeon",
            Environment::Forest => "forest",
            Environment::Swamp => "swamp",
            Environment::Mountain => "mountain",
            Environment::Desert => "desert",
            Environment::Arctic => "arctic",
            Environment::Coastal => "coastal",
            Environment::Urban => "urban",
            Environment::Underground => "underground",
            Environment::Planar => "planar",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = BestiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::ALL
            .iter()
            .find(|e| e.as_str() == s)
            .copied()
            .ok_or_else(|| BestiaryError::InvalidValue(format!("unknown environment '{s}'")))
    }
}

/// Synthesis algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Reuse a matching seed template, with complexity-driven perturbation.
    TemplateBased,
    /// Derive every field independently from the weighted tables.
    Random,
    /// Template-based 70% of the time, otherwise fully random.
    Balanced,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Algorithm::TemplateBased => "template-based",
            Algorithm::Random => "random",
            Algorithm::Balanced => "balanced",
        };
        f.write_str(s)
    }
}

impl FromStr for Algorithm {
    type Err = BestiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "template-based" => Ok(Algorithm::TemplateBased),
            "random" => Ok(Algorithm::Random),
            "balanced" => Ok(Algorithm::Balanced),
            other => Err(BestiaryError::InvalidValue(format!(
                "unknown algorithm '{other}'"
            ))),
        }
    }
}

/// How elaborate the generated creature should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        };
        f.write_str(s)
    }
}

impl FromStr for Complexity {
    type Err = BestiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Complexity::Simple),
            "moderate" => Ok(Complexity::Moderate),
            "complex" => Ok(Complexity::Complex),
            other => Err(BestiaryError::InvalidValue(format!(
                "unknown complexity '{other}'"
            ))),
        }
    }
}

/// Filters narrowing what kind of creatures a request produces.
///
/// `None` in any filter field means "any"; the engine resolves it to a
/// uniformly random member of the enumeration per synthesized monster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFilters {
    #[serde(with = "any_filter", default)]
    pub challenge_rating: Option<ChallengeRating>,
    #[serde(rename = "type", with = "any_filter", default)]
    pub monster_type: Option<MonsterType>,
    #[serde(with = "any_filter", default)]
    pub environment: Option<Environment>,
    /// Number of monsters to synthesize. Must be positive.
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}

impl Default for GenerationFilters {
    fn default() -> Self {
        Self {
            challenge_rating: None,
            monster_type: None,
            environment: None,
            count: 1,
        }
    }
}

/// One complete generation request, immutable for the duration of a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub filters: GenerationFilters,
    pub algorithm: Algorithm,
    pub complexity: Complexity,
    pub include_treasure: bool,
    pub include_lair: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            filters: GenerationFilters::default(),
            algorithm: Algorithm::Balanced,
            complexity: Complexity::Moderate,
            include_treasure: true,
            include_lair: true,
        }
    }
}

/// Serde adapter mapping `None` to the wire literal `"any"`.
mod any_filter {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str("any"),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        if raw == serde_json::Value::String("any".to_string()) {
            return Ok(None);
        }
        T::deserialize(raw).map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_rating_round_trip() {
        for cr in ChallengeRating::ALL {
            let parsed: ChallengeRating = cr.as_str().parse().unwrap();
            assert_eq!(parsed, cr);
        }
        assert!("7".parse::<ChallengeRating>().is_err());
    }

    #[test]
    fn test_challenge_rating_ordering() {
        assert!(ChallengeRating::Zero < ChallengeRating::Three);
        assert!(ChallengeRating::Five < ChallengeRating::SixPlus);
    }

    #[test]
    fn test_enum_string_forms() {
        assert_eq!(Algorithm::TemplateBased.to_string(), "template-based");
        assert_eq!(MonsterType::Aberration.to_string(), "aberration");
        assert_eq!(Environment::Underground.to_string(), "underground");
        assert_eq!(
            "template-based".parse::<Algorithm>().unwrap(),
            Algorithm::TemplateBased
        );
    }

    #[test]
    fn test_any_filter_wire_format() {
        let filters = GenerationFilters {
            challenge_rating: Some(ChallengeRating::SixPlus),
            monster_type: None,
            environment: None,
            count: 2,
        };
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["challengeRating"], "6+");
        assert_eq!(json["type"], "any");
        assert_eq!(json["environment"], "any");

        let back: GenerationFilters = serde_json::from_value(json).unwrap();
        assert_eq!(back.challenge_rating, Some(ChallengeRating::SixPlus));
        assert!(back.monster_type.is_none());
        assert_eq!(back.count, 2);
    }
}
