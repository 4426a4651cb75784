//! # Lair Generation
//!
//! Derives a lair's size, terrain prose, notable features, and defenses
//! from creature type, environment, challenge rating, and special
//! abilities.
//!
//! Size follows the challenge-rating band monotonically. Terrain resolves
//! to a profile carrying a base sentence plus feature and defense word
//! pools; abilities and creature type contribute extra words, and the
//! creature's intelligence tier adds a final layer of defensive cunning.

use crate::generation::dedup_preserving_order;
use crate::model::{ChallengeRating, Environment, LairInfo, LairSize, MonsterType};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Terrain-specific prose and word pools.
struct TerrainProfile {
    base: &'static str,
    features: &'static [&'static str],
    defenses: &'static [&'static str],
}

fn terrain_profile(environment: Environment) -> &'static TerrainProfile {
    match environment {
        Environment::Dungeon => &TerrainProfile {
            base: "Ancient stone corridors and chambers carved deep underground",
            features: &[
                "Crumbling masonry", "Iron-bound doors", "Torch brackets", "Stone altars",
                "Carved reliefs",
            ],
            defenses: &[
                "Heavy doors", "Pit traps", "Pressure plates", "Maze-like layout",
                "Narrow passages",
            ],
        },
        Environment::Forest => &TerrainProfile {
            base: "Natural clearing surrounded by dense woodland and undergrowth",
            features: &[
                "Massive tree roots", "Moss-covered stones", "Natural springs", "Hollow logs",
                "Berry bushes",
            ],
            defenses: &[
                "Camouflaged entrance", "Thorny barriers", "Multiple escape routes",
                "Elevated position", "Dense canopy cover",
            ],
        },
        Environment::Swamp => &TerrainProfile {
            base: "Murky bog with stagnant pools and twisted vegetation",
            features: &[
                "Lily pads", "Rotting logs", "Hanging moss", "Poisonous plants",
                "Misty atmosphere",
            ],
            defenses: &[
                "Quicksand patches", "Misleading paths", "Toxic gas pockets",
                "Hidden underwater routes", "Insect swarms",
            ],
        },
        Environment::Mountain => &TerrainProfile {
            base: "Rocky cave system carved into the mountainside by wind and water",
            features: &[
                "Stalactites", "Underground streams", "Crystal formations", "Echoing chambers",
                "Natural bridges",
            ],
            defenses: &[
                "Narrow ledges", "Rockfall traps", "Steep climbs", "Hidden passages",
                "Avalanche triggers",
            ],
        },
        Environment::Desert => &TerrainProfile {
            base: "Sandy cave or oasis hidden among dunes and rock formations",
            features: &[
                "Sand drifts", "Palm trees", "Clear pools", "Sun-bleached bones",
                "Ancient ruins",
            ],
            defenses: &[
                "Sandstorm cover", "Mirage effects", "Hidden beneath sand", "Scorching heat",
                "Water scarcity",
            ],
        },
        Environment::Arctic => &TerrainProfile {
            base: "Ice cave or snow-covered den in the frozen wasteland",
            features: &[
                "Icicle formations", "Frozen pools", "Snow drifts", "Aurora light",
                "Fur-lined surfaces",
            ],
            defenses: &[
                "Blizzard concealment", "Slippery ice", "Extreme cold", "Snow barriers",
                "Frozen traps",
            ],
        },
        Environment::Coastal => &TerrainProfile {
            base: "Sea cave accessible during low tide with tidal pools and coral",
            features: &[
                "Barnacle-encrusted walls", "Tidal pools", "Seaweed curtains", "Smooth stones",
                "Salt crystals",
            ],
            defenses: &[
                "Tidal flooding", "Slippery rocks", "Strong currents", "Hidden underwater",
                "Storm surge protection",
            ],
        },
        Environment::Urban => &TerrainProfile {
            base: "Abandoned building or sewer system within the city limits",
            features: &[
                "Broken furniture", "Graffiti", "Makeshift barricades", "Stolen goods",
                "Improvised tools",
            ],
            defenses: &[
                "Multiple exits", "Alarm systems", "Guard posts", "Hidden compartments",
                "Crowd camouflage",
            ],
        },
        Environment::Underground => &TerrainProfile {
            base: "Deep cavern system far below the surface world",
            features: &[
                "Phosphorescent fungi", "Underground rivers", "Mineral veins", "Bat colonies",
                "Echo chambers",
            ],
            defenses: &[
                "Maze-like tunnels", "Deep pits", "Cave-ins", "Poisonous gases",
                "Complete darkness",
            ],
        },
        Environment::Planar => &TerrainProfile {
            base: "Otherworldly realm with reality-defying properties",
            features: &[
                "Floating platforms", "Glowing sigils", "Shifting geometries",
                "Elemental storms", "Temporal distortions",
            ],
            defenses: &[
                "Planar barriers", "Reality rifts", "Magical wards", "Dimensional locks",
                "Chaos effects",
            ],
        },
    }
}

/// Feature words a special ability leaves around the lair.
fn ability_features(ability: &str) -> &'static [&'static str] {
    match ability {
        "Web" => &["Sticky web strands", "Web-wrapped prey"],
        "Flight" => &["High perches", "Aerial approach routes"],
        "Burrow" => &["Underground tunnels", "Hidden entrances"],
        "Swim" => &["Flooded chambers", "Underwater passages"],
        "Invisible" => &["Misleading empty spaces", "Hidden alcoves"],
        "Regeneration" => &["Healing chambers", "Recovery areas"],
        "Poison" => &["Toxic pools", "Venomous plants"],
        "Fire immunity" => &["Lava flows", "Charred surfaces"],
        "Cold immunity" => &["Frozen chambers", "Ice formations"],
        _ => &[],
    }
}

/// Defense words a special ability contributes.
fn ability_defenses(ability: &str) -> &'static [&'static str] {
    match ability {
        "Web" => &["Web barriers", "Entangling traps"],
        "Poison" => &["Poisoned spikes", "Toxic gas vents"],
        "Magic resistance" => &["Anti-magic zones", "Spell-turning wards"],
        "Charm" => &["Charmed guardians", "Mental compulsions"],
        "Fear aura" => &["Intimidating displays", "Terror triggers"],
        "Invisible" => &["False walls", "Hidden passages"],
        "Teleport" => &["Escape portals", "Dimensional rifts"],
        _ => &[],
    }
}

/// Feature words a creature type leaves around the lair.
fn type_features(monster_type: MonsterType) -> &'static [&'static str] {
    match monster_type {
        MonsterType::Dragon => &["Treasure chamber", "Royal throne", "Scrying pool"],
        MonsterType::Undead => &["Burial chambers", "Bone decorations", "Unholy altars"],
        MonsterType::Beast => &["Feeding areas", "Territory markers", "Sleeping dens"],
        MonsterType::Giant => &["Oversized furniture", "Trophy displays", "Weapon racks"],
        MonsterType::Fey => &["Fairy rings", "Glamered illusions", "Nature shrines"],
        _ => &[],
    }
}

/// Rough intelligence tier, a fixed function of creature type.
#[derive(Debug, Clone, Copy)]
enum IntelligenceTier {
    Animal,
    Low,
    Average,
    High,
    Genius,
}

fn intelligence_tier(monster_type: MonsterType) -> IntelligenceTier {
    match monster_type {
        MonsterType::Beast => IntelligenceTier::Animal,
        MonsterType::Undead | MonsterType::Construct => IntelligenceTier::Low,
        MonsterType::Humanoid | MonsterType::Giant | MonsterType::Elemental => {
            IntelligenceTier::Average
        }
        MonsterType::Fey | MonsterType::Fiend | MonsterType::Aberration => IntelligenceTier::High,
        MonsterType::Dragon => IntelligenceTier::Genius,
    }
}

fn tier_defenses(tier: IntelligenceTier) -> &'static [&'static str] {
    match tier {
        IntelligenceTier::Animal => &[
            "Simple nests", "Scent markings", "Food caches", "Scratch marks",
        ],
        IntelligenceTier::Low => &[
            "Basic tools", "Simple traps", "Crude alarm systems", "Territorial markings",
        ],
        IntelligenceTier::Average => &[
            "Organized spaces", "Mechanical traps", "Lookout posts", "Stored supplies",
        ],
        IntelligenceTier::High => &[
            "Complex defenses", "Magical wards", "Strategic positioning", "Advanced traps",
        ],
        IntelligenceTier::Genius => &[
            "Masterful architecture", "Layered security", "Backup plans",
            "Psychological warfare",
        ],
    }
}

/// Lair size scales monotonically with the challenge-rating band.
fn lair_size(cr: ChallengeRating) -> LairSize {
    match cr {
        ChallengeRating::Zero => LairSize::Tiny,
        ChallengeRating::One | ChallengeRating::Two => LairSize::Small,
        ChallengeRating::Three | ChallengeRating::Four => LairSize::Medium,
        ChallengeRating::Five => LairSize::Large,
        ChallengeRating::SixPlus => LairSize::Huge,
    }
}

/// Generator deriving a complete lair description.
pub struct LairGenerator;

impl LairGenerator {
    /// Derives the lair block for a creature. Pure function of its
    /// arguments and the rng; no side effects.
    pub fn generate_lair(
        monster_type: MonsterType,
        environment: Environment,
        challenge_rating: ChallengeRating,
        special_abilities: &[String],
        rng: &mut StdRng,
    ) -> LairInfo {
        let size = lair_size(challenge_rating);
        let terrain = terrain_profile(environment);

        let features = Self::collect_features(monster_type, special_abilities, terrain, rng);
        let defenses = Self::collect_defenses(monster_type, special_abilities, terrain, rng);

        let mut description = format!("{}. {}.", terrain.base, size.prose());
        if !features.is_empty() {
            let highlights: Vec<&str> =
                features.iter().take(3).map(String::as_str).collect();
            description.push_str(&format!(
                " Notable features include {}.",
                highlights.join(", ")
            ));
        }

        LairInfo {
            description,
            terrain: environment,
            size,
            defenses,
            features,
        }
    }

    fn collect_features(
        monster_type: MonsterType,
        special_abilities: &[String],
        terrain: &TerrainProfile,
        rng: &mut StdRng,
    ) -> Vec<String> {
        let mut features: Vec<String> = terrain
            .features
            .choose_multiple(rng, 3)
            .map(|s| s.to_string())
            .collect();

        for ability in special_abilities {
            features.extend(ability_features(ability).iter().map(|s| s.to_string()));
        }
        features.extend(type_features(monster_type).iter().map(|s| s.to_string()));

        dedup_preserving_order(features)
    }

    fn collect_defenses(
        monster_type: MonsterType,
        special_abilities: &[String],
        terrain: &TerrainProfile,
        rng: &mut StdRng,
    ) -> Vec<String> {
        let mut defenses: Vec<String> = terrain
            .defenses
            .choose_multiple(rng, 2)
            .map(|s| s.to_string())
            .collect();

        for ability in special_abilities {
            defenses.extend(ability_defenses(ability).iter().map(|s| s.to_string()));
        }
        defenses.extend(
            tier_defenses(intelligence_tier(monster_type))
                .iter()
                .map(|s| s.to_string()),
        );

        dedup_preserving_order(defenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils::seed_rng;

    fn abilities(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_size_is_monotonic_in_cr() {
        let sizes: Vec<LairSize> = ChallengeRating::ALL.iter().map(|&cr| lair_size(cr)).collect();
        for pair in sizes.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(lair_size(ChallengeRating::Zero), LairSize::Tiny);
        assert_eq!(lair_size(ChallengeRating::SixPlus), LairSize::Huge);
    }

    #[test]
    fn test_defenses_are_never_empty() {
        let mut rng = seed_rng(Some(31));
        for monster_type in MonsterType::ALL {
            for environment in Environment::ALL {
                let lair = LairGenerator::generate_lair(
                    monster_type,
                    environment,
                    ChallengeRating::Three,
                    &[],
                    &mut rng,
                );
                assert!(!lair.defenses.is_empty());
            }
        }
    }

    #[test]
    fn test_abilities_contribute_lair_features() {
        let mut rng = seed_rng(Some(32));
        let lair = LairGenerator::generate_lair(
            MonsterType::Beast,
            Environment::Underground,
            ChallengeRating::Two,
            &abilities(&["Web"]),
            &mut rng,
        );
        assert!(lair.features.iter().any(|f| f == "Sticky web strands"));
        assert!(lair.defenses.iter().any(|d| d == "Web barriers"));
    }

    #[test]
    fn test_features_and_defenses_have_no_duplicates() {
        let mut rng = seed_rng(Some(33));
        // "Hidden passages" appears in both the mountain defense pool and
        // the Invisible ability defenses; dedup must collapse it.
        for _ in 0..50 {
            let lair = LairGenerator::generate_lair(
                MonsterType::Fey,
                Environment::Mountain,
                ChallengeRating::Four,
                &abilities(&["Invisible", "Teleport"]),
                &mut rng,
            );
            let mut seen = std::collections::HashSet::new();
            assert!(lair.features.iter().all(|f| seen.insert(f.clone())));
            seen.clear();
            assert!(lair.defenses.iter().all(|d| seen.insert(d.clone())));
        }
    }

    #[test]
    fn test_description_composition() {
        let mut rng = seed_rng(Some(34));
        let lair = LairGenerator::generate_lair(
            MonsterType::Dragon,
            Environment::Mountain,
            ChallengeRating::SixPlus,
            &[],
            &mut rng,
        );
        assert!(lair
            .description
            .starts_with("Rocky cave system carved into the mountainside"));
        assert!(lair.description.contains("Vast underground complex"));
        assert!(lair.description.contains("Notable features include"));
        assert_eq!(lair.terrain, Environment::Mountain);
    }
}
