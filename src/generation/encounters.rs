//! # Encounter Generation
//!
//! Derives how many of a creature show up and how likely it is to be met
//! at home: social-grouping size, wild-encounter count, and lair-presence
//! probability.
//!
//! Selection starts from the creature type's social archetypes, is biased
//! by leadership/stealth/pack abilities through a weighted draw, then the
//! baseline dice expressions are scaled by the challenge-rating band and
//! the lair chance adjusted by terrain.

use crate::generation::{scale_dice_expression, weighted_choice};
use crate::model::{ChallengeRating, EncounterInfo, Environment, MonsterType};
use crate::policy;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Named group-size archetypes determining encounter-count dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialStructure {
    Solitary,
    Pair,
    Family,
    Pack,
    SmallGroup,
    Band,
    Tribe,
    Horde,
}

/// Baseline encounter numbers for a social structure.
struct StructureProfile {
    number_appearing: &'static str,
    wild_encounter: &'static str,
    lair_chance: u8,
}

fn structure_profile(structure: SocialStructure) -> StructureProfile {
    use SocialStructure::*;
    match structure {
        Solitary => StructureProfile {
            number_appearing: "1",
            wild_encounter: "1",
            lair_chance: 10,
        },
        Pair => StructureProfile {
            number_appearing: "1d2",
            wild_encounter: "1d2",
            lair_chance: 15,
        },
        Family => StructureProfile {
            number_appearing: "1d4+1",
            wild_encounter: "1d3",
            lair_chance: 25,
        },
        Pack => StructureProfile {
            number_appearing: "2d4",
            wild_encounter: "1d4",
            lair_chance: 30,
        },
        SmallGroup => StructureProfile {
            number_appearing: "2d6",
            wild_encounter: "1d6",
            lair_chance: 25,
        },
        Band => StructureProfile {
            number_appearing: "3d6",
            wild_encounter: "2d4",
            lair_chance: 40,
        },
        Tribe => StructureProfile {
            number_appearing: "4d10",
            wild_encounter: "2d6",
            lair_chance: 50,
        },
        Horde => StructureProfile {
            number_appearing: "10d10",
            wild_encounter: "3d6",
            lair_chance: 60,
        },
    }
}

/// Social archetypes per creature type. Types with several archetypes
/// (e.g. primitive vs warrior humanoids) list one slice per archetype; one
/// is chosen uniformly before the structure draw.
fn type_archetypes(monster_type: MonsterType) -> &'static [&'static [SocialStructure]] {
    use SocialStructure::*;
    match monster_type {
        MonsterType::Beast => &[
            &[Solitary, Pair, Family],
            &[Pack, SmallGroup],
            &[Band, Tribe],
        ],
        MonsterType::Undead => &[
            &[Solitary, SmallGroup, Band],
            &[Solitary, Pair, Family],
        ],
        MonsterType::Humanoid => &[
            &[Family, Pack, Band, Tribe],
            &[Pair, Family, SmallGroup],
            &[Band, Tribe, Horde],
        ],
        MonsterType::Dragon => &[&[Solitary, Pair]],
        MonsterType::Giant => &[&[Solitary, Pair, Family]],
        MonsterType::Fey => &[&[Solitary, Pair, SmallGroup]],
        MonsterType::Fiend => &[&[Solitary, Pair, Family]],
        MonsterType::Construct => &[&[Solitary, SmallGroup]],
        MonsterType::Elemental => &[&[Solitary, Pair]],
        MonsterType::Aberration => &[&[Solitary, Pair, SmallGroup]],
    }
}

/// Ability-driven preference over social structures.
enum GroupBias {
    /// Leadership or charm: bigger groups.
    Leader,
    /// Invisibility or phasing: loners.
    Stealthy,
    /// Pack tactics: pack-type groups.
    PackHunter,
    Neutral,
}

fn group_bias(special_abilities: &[String]) -> GroupBias {
    let has = |name: &str| special_abilities.iter().any(|a| a == name);
    if has("Leadership") || has("Charm") {
        GroupBias::Leader
    } else if has("Invisible") || has("Phase") {
        GroupBias::Stealthy
    } else if has("Pack tactics") {
        GroupBias::PackHunter
    } else {
        GroupBias::Neutral
    }
}

fn bias_weight(bias: &GroupBias, structure: SocialStructure) -> u32 {
    use SocialStructure::*;
    match bias {
        GroupBias::Leader => match structure {
            Band => 3,
            Tribe => 2,
            _ => 1,
        },
        GroupBias::Stealthy => match structure {
            Solitary => 3,
            Pair => 2,
            _ => 1,
        },
        GroupBias::PackHunter => match structure {
            Pack => 3,
            SmallGroup => 2,
            _ => 1,
        },
        GroupBias::Neutral => 1,
    }
}

/// Challenge-rating scaling: a dice multiplier (>1 for weak creatures,
/// <1 for strong ones) and a flat lair-chance bonus.
fn cr_modifiers(cr: ChallengeRating) -> (f64, i32) {
    match cr {
        ChallengeRating::Zero => (2.0, 5),
        ChallengeRating::One => (1.5, 10),
        ChallengeRating::Two => (1.2, 15),
        ChallengeRating::Three => (1.0, 20),
        ChallengeRating::Four => (0.8, 25),
        ChallengeRating::Five => (0.6, 30),
        ChallengeRating::SixPlus => (0.4, 35),
    }
}

/// Signed terrain adjustment to lair chance.
fn environment_lair_bonus(environment: Environment) -> i32 {
    match environment {
        Environment::Dungeon => 20,
        Environment::Forest => 10,
        Environment::Swamp => 15,
        Environment::Mountain => 25,
        Environment::Desert => 5,
        Environment::Arctic => 15,
        Environment::Coastal => 10,
        Environment::Urban => -10,
        Environment::Underground => 30,
        Environment::Planar => 0,
    }
}

/// Generator deriving encounter frequencies from creature characteristics.
pub struct EncounterGenerator;

impl EncounterGenerator {
    /// Derives the encounter block for a creature. Pure function of its
    /// arguments and the rng; no side effects.
    pub fn generate_encounter_info(
        monster_type: MonsterType,
        challenge_rating: ChallengeRating,
        special_abilities: &[String],
        environment: Environment,
        rng: &mut StdRng,
    ) -> EncounterInfo {
        let structure = Self::select_structure(monster_type, special_abilities, rng);
        let profile = structure_profile(structure);

        let (multiplier, cr_lair_bonus) = cr_modifiers(challenge_rating);
        let number_appearing = scale_dice_expression(profile.number_appearing, multiplier);
        let wild_encounter = scale_dice_expression(profile.wild_encounter, multiplier);

        let lair_chance = (profile.lair_chance as i32
            + cr_lair_bonus
            + environment_lair_bonus(environment))
        .clamp(policy::LAIR_CHANCE_MIN as i32, policy::LAIR_CHANCE_MAX as i32)
            as u8;

        EncounterInfo {
            number_appearing,
            wild_encounter,
            lair_chance,
        }
    }

    /// Chooses an archetype uniformly, then a structure from it via an
    /// ability-weighted draw.
    fn select_structure(
        monster_type: MonsterType,
        special_abilities: &[String],
        rng: &mut StdRng,
    ) -> SocialStructure {
        let archetypes = type_archetypes(monster_type);
        let options = archetypes
            .choose(rng)
            .copied()
            .unwrap_or(&[SocialStructure::Solitary]);

        let bias = group_bias(special_abilities);
        let weighted: Vec<(SocialStructure, u32)> = options
            .iter()
            .map(|&s| (s, bias_weight(&bias, s)))
            .collect();

        weighted_choice(&weighted, rng).unwrap_or(SocialStructure::Solitary)
    }
}
