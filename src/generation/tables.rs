//! # Synthesis Tables
//!
//! Process-wide read-only lookup data for the monster synthesis engine:
//! seed templates, challenge-rating stat bands, and the name, ability, and
//! descriptor pools. Initialized once as static data; there is no lifecycle
//! beyond process lifetime.
//!
//! The sub-generators (encounters, treasure, lair) keep their own tables
//! next to their logic.

use crate::model::{ChallengeRating, Environment, MonsterType};

/// A curated seed creature that template-based synthesis starts from.
#[derive(Debug, Clone, Copy)]
pub struct MonsterTemplate {
    pub name: &'static str,
    pub monster_type: MonsterType,
    pub challenge_rating: ChallengeRating,
    pub environment: Environment,
    pub ac: i32,
    pub hd: &'static str,
    pub hp: u32,
    pub movement: &'static str,
    pub attacks: &'static str,
    pub damage: &'static str,
    pub save: &'static str,
    pub morale: u8,
    pub xp: u32,
    pub description: &'static str,
    pub special_abilities: &'static [&'static str],
}

/// The seed template library.
pub const MONSTER_TEMPLATES: &[MonsterTemplate] = &[
    MonsterTemplate {
        name: "Goblin Warrior",
        monster_type: MonsterType::Humanoid,
        challenge_rating: ChallengeRating::One,
        environment: Environment::Dungeon,
        ac: 6,
        hd: "1-1",
        hp: 3,
        movement: "60' (20')",
        attacks: "1 weapon",
        damage: "1d6 or by weapon",
        save: "Normal Human",
        morale: 7,
        xp: 5,
        description: "Small, malicious humanoids with yellow eyes and cruel expressions. They favor ambush tactics and overwhelming numbers.",
        special_abilities: &["Infravision 60'", "Sunlight Penalty -1"],
    },
    MonsterTemplate {
        name: "Orc Berserker",
        monster_type: MonsterType::Humanoid,
        challenge_rating: ChallengeRating::One,
        environment: Environment::Dungeon,
        ac: 6,
        hd: "1",
        hp: 4,
        movement: "120' (40')",
        attacks: "1 weapon",
        damage: "1d8 or by weapon",
        save: "Fighter 1",
        morale: 8,
        xp: 10,
        description: "Brutish humanoids with pig-like features and a taste for violence. They live in tribes and raid civilized lands.",
        special_abilities: &["Infravision 60'", "Berserker Rage +2 to hit"],
    },
    MonsterTemplate {
        name: "Forest Sprite",
        monster_type: MonsterType::Fey,
        challenge_rating: ChallengeRating::Zero,
        environment: Environment::Forest,
        ac: 9,
        hd: "1-1",
        hp: 2,
        movement: "90' (30') / 180' (60') flying",
        attacks: "1 tiny weapon",
        damage: "1d4",
        save: "Elf 1",
        morale: 6,
        xp: 6,
        description: "Diminutive winged trickster that flits between sunbeams. More interested in pranks than bloodshed, but vengeful when its grove is harmed.",
        special_abilities: &["Invisible", "Charm"],
    },
    MonsterTemplate {
        name: "Skeleton Guard",
        monster_type: MonsterType::Undead,
        challenge_rating: ChallengeRating::One,
        environment: Environment::Dungeon,
        ac: 7,
        hd: "1",
        hp: 4,
        movement: "60' (20')",
        attacks: "1 weapon",
        damage: "1d6 or by weapon",
        save: "Fighter 1",
        morale: 12,
        xp: 10,
        description: "Animated bones bound to an ancient post, clutching a notched blade. It neither tires nor fears, holding its station long after its masters turned to dust.",
        special_abilities: &["Immune to sleep/charm"],
    },
    MonsterTemplate {
        name: "Giant Cave Spider",
        monster_type: MonsterType::Beast,
        challenge_rating: ChallengeRating::Two,
        environment: Environment::Underground,
        ac: 6,
        hd: "2",
        hp: 9,
        movement: "120' (40')",
        attacks: "1 bite",
        damage: "1d8 + poison",
        save: "Fighter 1",
        morale: 7,
        xp: 25,
        description: "A bloated, pale arachnid the size of a pony, strung across lightless galleries on ropes of silk. Prey is wrapped alive and hauled to the larder.",
        special_abilities: &["Web", "Poison", "Climb walls"],
    },
    MonsterTemplate {
        name: "Fire Mephit",
        monster_type: MonsterType::Elemental,
        challenge_rating: ChallengeRating::Three,
        environment: Environment::Planar,
        ac: 5,
        hd: "3",
        hp: 13,
        movement: "120' (40') / 240' (80') flying",
        attacks: "2 claws",
        damage: "1d4/1d4 + burn",
        save: "Fighter 3",
        morale: 8,
        xp: 50,
        description: "A cackling imp of living cinder that delights in scorching anything flammable. It serves greater elementals as a grudging, unreliable messenger.",
        special_abilities: &["Fire immunity", "Flight"],
    },
    MonsterTemplate {
        name: "Barrow Wraith",
        monster_type: MonsterType::Undead,
        challenge_rating: ChallengeRating::Four,
        environment: Environment::Mountain,
        ac: 3,
        hd: "4",
        hp: 18,
        movement: "120' (40')",
        attacks: "1 touch",
        damage: "1d6 + energy drain",
        save: "Fighter 4",
        morale: 12,
        xp: 125,
        description: "A cold shadow in the shape of a long-dead chieftain, drifting between the standing stones of its tomb. Its touch withers flesh and memory alike.",
        special_abilities: &["Energy drain", "Immune to sleep/charm", "Ethereal"],
    },
    MonsterTemplate {
        name: "Swamp Troll",
        monster_type: MonsterType::Giant,
        challenge_rating: ChallengeRating::Five,
        environment: Environment::Swamp,
        ac: 4,
        hd: "5",
        hp: 24,
        movement: "120' (40')",
        attacks: "2 claws/1 bite",
        damage: "1d6/1d6/1d10",
        save: "Fighter 3",
        morale: 10,
        xp: 150,
        description: "A rubbery, moss-grown horror that wades the mire on stilt-like legs. Wounds knit closed even as it fights, and only fire gives it pause.",
        special_abilities: &["Regeneration", "Keen scent"],
    },
    MonsterTemplate {
        name: "Ancient Dragon",
        monster_type: MonsterType::Dragon,
        challenge_rating: ChallengeRating::SixPlus,
        environment: Environment::Mountain,
        ac: 0,
        hd: "11",
        hp: 48,
        movement: "80' (30') / 240' (80') flying",
        attacks: "2 claws/1 bite or breath",
        damage: "1d8/1d8/3d8 or breath weapon",
        save: "Fighter 11",
        morale: 10,
        xp: 2300,
        description: "Massive, ancient wyrm with scales like armor and eyes like burning coals. Commands respect and fear across the realm.",
        special_abilities: &[
            "Breath weapon",
            "Magic resistance 50%",
            "Spellcasting",
            "Fear aura",
            "Treasure sense",
        ],
    },
];

/// Per-band baseline stats for fully random synthesis.
#[derive(Debug, Clone, Copy)]
pub struct CrStatBand {
    /// Inclusive armor-class range.
    pub ac_range: (i32, i32),
    pub hit_dice: &'static str,
    /// Attack-count descriptor before rendering, e.g. `"1-2"`.
    pub attacks: &'static str,
    pub save: &'static str,
    /// Inclusive morale range.
    pub morale_range: (u8, u8),
    pub damage: &'static str,
    /// Inclusive experience-value range.
    pub xp_range: (u32, u32),
}

/// Looks up the stat band for a challenge rating.
pub fn cr_stat_band(cr: ChallengeRating) -> &'static CrStatBand {
    match cr {
        ChallengeRating::Zero => &CrStatBand {
            ac_range: (8, 10),
            hit_dice: "1-1",
            attacks: "1",
            save: "Normal Human",
            morale_range: (5, 7),
            damage: "1d4",
            xp_range: (5, 5),
        },
        ChallengeRating::One => &CrStatBand {
            ac_range: (6, 8),
            hit_dice: "1",
            attacks: "1",
            save: "Fighter 1",
            morale_range: (6, 8),
            damage: "1d6",
            xp_range: (10, 25),
        },
        ChallengeRating::Two => &CrStatBand {
            ac_range: (5, 7),
            hit_dice: "2",
            attacks: "1",
            save: "Fighter 1",
            morale_range: (7, 9),
            damage: "1d8",
            xp_range: (20, 50),
        },
        ChallengeRating::Three => &CrStatBand {
            ac_range: (4, 6),
            hit_dice: "3",
            attacks: "1-2",
            save: "Fighter 2",
            morale_range: (8, 10),
            damage: "2d4",
            xp_range: (35, 75),
        },
        ChallengeRating::Four => &CrStatBand {
            ac_range: (3, 5),
            hit_dice: "4",
            attacks: "2",
            save: "Fighter 2",
            morale_range: (8, 11),
            damage: "1d10",
            xp_range: (50, 125),
        },
        ChallengeRating::Five => &CrStatBand {
            ac_range: (2, 4),
            hit_dice: "5",
            attacks: "2",
            save: "Fighter 3",
            morale_range: (9, 12),
            damage: "2d6",
            xp_range: (75, 175),
        },
        ChallengeRating::SixPlus => &CrStatBand {
            ac_range: (0, 3),
            hit_dice: "6+2",
            attacks: "2-3",
            save: "Fighter 4",
            morale_range: (10, 12),
            damage: "2d8",
            xp_range: (100, 300),
        },
    }
}

/// Extra ability slots granted by the challenge-rating band.
pub fn cr_ability_bonus(cr: ChallengeRating) -> usize {
    match cr {
        ChallengeRating::Zero | ChallengeRating::One => 0,
        ChallengeRating::Two | ChallengeRating::Three => 1,
        ChallengeRating::Four | ChallengeRating::Five => 2,
        ChallengeRating::SixPlus => 3,
    }
}

/// Base movement speeds; rendered as `"speed' (speed/3')"`.
pub const MOVEMENT_SPEEDS: &[u32] = &[60, 90, 120, 150];

/// The global special-ability pool.
pub const SPECIAL_ABILITIES: &[&str] = &[
    "Infravision 60'",
    "Infravision 90'",
    "Immune to sleep/charm",
    "Poison immunity",
    "Fire immunity",
    "Cold immunity",
    "Lightning immunity",
    "Magic resistance",
    "Spell turning",
    "Regeneration",
    "Flight",
    "Burrow",
    "Swim",
    "Climb walls",
    "Web",
    "Paralysis",
    "Charm",
    "Fear aura",
    "Death gaze",
    "Breath weapon",
    "Spellcasting",
    "Pack tactics",
    "Berserker rage",
    "Leadership",
    "Keen scent",
    "Tracking",
    "Invisible",
    "Phase",
    "Teleport",
    "Shapeshifting",
    "Energy drain",
    "Disease",
    "Curse",
    "Dimension door",
    "Mirror image",
    "Displacement",
    "Ethereal",
    "Astral projection",
];

/// Abilities a creature type gravitates toward, each picked up with 50%
/// probability before the remaining slots are filled from the global pool.
pub fn type_affinity_abilities(monster_type: MonsterType) -> &'static [&'static str] {
    match monster_type {
        MonsterType::Undead => &["Immune to sleep/charm", "Energy drain"],
        MonsterType::Dragon => &["Breath weapon", "Magic resistance", "Fear aura"],
        MonsterType::Fey => &["Invisible", "Charm", "Teleport"],
        MonsterType::Fiend => &["Magic resistance", "Fear aura", "Teleport"],
        MonsterType::Elemental => &["Fire immunity", "Cold immunity", "Lightning immunity"],
        MonsterType::Beast => &["Keen scent", "Pack tactics", "Tracking"],
        _ => &[],
    }
}

/// Modifier words usable as name prefixes.
pub const NAME_PREFIXES: &[&str] = &[
    "Ancient", "Dire", "Giant", "Lesser", "Greater", "Elder", "Young", "Feral", "Savage", "Wild",
    "Shadow", "Frost", "Fire", "Stone", "Iron", "Blood", "Death", "Bone", "Dark", "Pale",
    "Crimson", "Azure", "Golden", "Silver", "Obsidian", "Crystal", "Spectral", "Phantom", "Void",
    "Storm",
];

/// Root words usable as name suffixes.
pub const NAME_ROOTS: &[&str] = &[
    "Fang", "Claw", "Horn", "Wing", "Eye", "Maw", "Stalker", "Hunter", "Reaper", "Slayer",
    "Beast", "Fiend", "Wraith", "Shade", "Spirit", "Guardian", "Warden", "Sentinel", "Keeper",
    "Lord", "Terror", "Doom", "Rage", "Fury", "Dread", "Blight", "Scourge", "Plague", "Venom",
    "Toxin",
];

/// Adjectives interpolated into generated descriptions.
pub const DESCRIPTORS: &[&str] = &[
    "malevolent", "cunning", "brutal", "savage", "ancient", "mysterious", "terrifying",
    "relentless", "crafty", "vicious", "deadly", "fearsome", "monstrous", "otherworldly",
    "predatory", "aggressive", "sinister", "ominous", "menacing", "horrific", "nightmarish",
    "ghastly", "twisted", "aberrant",
];

/// Base-noun pool for naming a creature of the given type.
pub fn name_pool(monster_type: MonsterType) -> &'static [&'static str] {
    match monster_type {
        MonsterType::Beast => &[
            "Wolf", "Bear", "Spider", "Boar", "Eagle", "Serpent", "Lizard", "Rat", "Hawk",
            "Panther",
        ],
        MonsterType::Undead => &[
            "Skeleton", "Zombie", "Wraith", "Specter", "Ghoul", "Wight", "Shade", "Phantom",
            "Lich", "Revenant",
        ],
        MonsterType::Humanoid => &[
            "Goblin", "Orc", "Hobgoblin", "Kobold", "Gnoll", "Bugbear", "Troll", "Giant", "Ogre",
            "Minotaur",
        ],
        MonsterType::Dragon => &[
            "Drake", "Wyvern", "Dragon", "Wyrm", "Dragonling", "Serpent", "Basilisk", "Hydra",
        ],
        MonsterType::Fey => &[
            "Sprite", "Pixie", "Dryad", "Satyr", "Brownie", "Will-o'-wisp", "Nymph", "Treant",
        ],
        MonsterType::Fiend => &[
            "Demon", "Devil", "Imp", "Quasit", "Hellhound", "Incubus", "Succubus", "Balrog",
        ],
        MonsterType::Construct => &[
            "Golem", "Automaton", "Guardian", "Sentinel", "Statue", "Clockwork", "Homunculus",
        ],
        MonsterType::Elemental => &[
            "Elemental", "Mephit", "Salamander", "Sylph", "Gnome", "Djinn", "Efreet",
        ],
        MonsterType::Giant => &[
            "Giant", "Ogre", "Troll", "Ettin", "Cyclops", "Titan", "Colossus",
        ],
        MonsterType::Aberration => &[
            "Ooze", "Cube", "Horror", "Aberration", "Monstrosity", "Anomaly", "Beholder",
            "Mind Flayer",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_band_has_valid_ranges() {
        for cr in ChallengeRating::ALL {
            let band = cr_stat_band(cr);
            assert!(band.ac_range.0 <= band.ac_range.1);
            assert!(band.morale_range.0 <= band.morale_range.1);
            assert!(band.xp_range.0 <= band.xp_range.1);
            assert!((2..=12).contains(&band.morale_range.0));
            assert!((2..=12).contains(&band.morale_range.1));
        }
    }

    #[test]
    fn test_templates_stay_within_their_band_morale_domain() {
        for template in MONSTER_TEMPLATES {
            assert!((2..=12).contains(&template.morale), "{}", template.name);
            assert!(template.hp >= 1, "{}", template.name);
        }
    }

    #[test]
    fn test_affinity_abilities_are_in_global_pool() {
        for monster_type in MonsterType::ALL {
            for ability in type_affinity_abilities(monster_type) {
                assert!(
                    SPECIAL_ABILITIES.contains(ability),
                    "'{ability}' missing from global pool"
                );
            }
        }
    }

    #[test]
    fn test_every_type_has_a_name_pool() {
        for monster_type in MonsterType::ALL {
            assert!(!name_pool(monster_type).is_empty());
        }
    }
}
