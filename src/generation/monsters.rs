//! # Monster Synthesis Engine
//!
//! The per-request orchestrator. For each monster it either reuses a
//! matching seed template (with a complexity-driven perturbation overlay)
//! or synthesizes every field from the weighted tables, then runs the
//! common assembly step: stats block, encounter info, optional treasure,
//! optional lair.
//!
//! A batch call either returns exactly `count` fully populated records or
//! fails as a whole; no partial batch is ever produced. Generation is
//! cheap and idempotent to re-invoke, so there is no retry machinery.

use crate::generation::tables::{
    cr_ability_bonus, cr_stat_band, name_pool, type_affinity_abilities, MonsterTemplate,
    DESCRIPTORS, MONSTER_TEMPLATES, MOVEMENT_SPEEDS, NAME_PREFIXES, NAME_ROOTS,
    SPECIAL_ABILITIES,
};
use crate::generation::{roll_hit_dice, EncounterGenerator, LairGenerator, TreasureGenerator};
use crate::model::{
    Algorithm, ChallengeRating, Complexity, Environment, GenerationRequest, Monster, MonsterStats,
    MonsterType, TreasureInfo,
};
use crate::{policy, BestiaryError, BestiaryResult};
use chrono::Utc;
use log::{debug, info};
use rand::prelude::*;
use rand::rngs::StdRng;
use uuid::Uuid;

/// Mutable working copy of a monster's fields before assembly.
///
/// Both synthesis paths produce a draft; overlays perturb it; the common
/// assembly step freezes it into an immutable [`Monster`].
#[derive(Debug, Clone)]
struct MonsterDraft {
    name: String,
    monster_type: MonsterType,
    challenge_rating: ChallengeRating,
    environment: Environment,
    ac: i32,
    hd: String,
    hp: u32,
    movement: String,
    attacks: String,
    damage: String,
    save: String,
    morale: u8,
    xp: u32,
    description: String,
    special_abilities: Vec<String>,
}

impl From<&MonsterTemplate> for MonsterDraft {
    fn from(template: &MonsterTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            monster_type: template.monster_type,
            challenge_rating: template.challenge_rating,
            environment: template.environment,
            ac: template.ac,
            hd: template.hd.to_string(),
            hp: template.hp,
            movement: template.movement.to_string(),
            attacks: template.attacks.to_string(),
            damage: template.damage.to_string(),
            save: template.save.to_string(),
            morale: template.morale,
            xp: template.xp,
            description: template.description.to_string(),
            special_abilities: template
                .special_abilities
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// The synthesis engine. Stateless; all variation comes from the rng.
pub struct MonsterGenerator;

impl MonsterGenerator {
    /// Generates exactly `request.filters.count` monsters, eagerly.
    ///
    /// Any failure while synthesizing a single monster abandons the whole
    /// batch.
    pub fn generate(request: &GenerationRequest, rng: &mut StdRng) -> BestiaryResult<Vec<Monster>> {
        let count = request.filters.count;
        if count == 0 {
            return Err(BestiaryError::InvalidValue(
                "count must be positive".to_string(),
            ));
        }

        let mut monsters = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let monster = Self::synthesize_one(request, rng)?;
            debug!(
                "synthesized '{}' ({} CR {})",
                monster.name, monster.monster_type, monster.challenge_rating
            );
            monsters.push(monster);
        }

        info!(
            "generated batch of {} monster(s) via {} algorithm",
            monsters.len(),
            request.algorithm
        );
        Ok(monsters)
    }

    fn synthesize_one(request: &GenerationRequest, rng: &mut StdRng) -> BestiaryResult<Monster> {
        match request.algorithm {
            Algorithm::TemplateBased => Self::from_template(request, rng),
            Algorithm::Random => Self::fully_random(request, rng),
            Algorithm::Balanced => {
                if rng.gen_bool(policy::BALANCED_TEMPLATE_CHANCE) {
                    Self::from_template(request, rng)
                } else {
                    Self::fully_random(request, rng)
                }
            }
        }
    }

    /// Template reuse with bounded perturbation. Falls back to full-random
    /// synthesis when no seed template matches the filters; that is a
    /// normal recovery, never an error.
    fn from_template(request: &GenerationRequest, rng: &mut StdRng) -> BestiaryResult<Monster> {
        let filters = &request.filters;
        let suitable: Vec<&MonsterTemplate> = MONSTER_TEMPLATES
            .iter()
            .filter(|t| {
                filters
                    .challenge_rating
                    .map_or(true, |cr| t.challenge_rating == cr)
                    && filters.monster_type.map_or(true, |mt| t.monster_type == mt)
                    && filters.environment.map_or(true, |env| t.environment == env)
            })
            .collect();

        let Some(template) = suitable.choose(rng) else {
            debug!("no seed template matches filters, falling back to random synthesis");
            return Self::fully_random(request, rng);
        };

        let mut draft = MonsterDraft::from(*template);
        match request.complexity {
            Complexity::Simple => {}
            Complexity::Moderate => Self::apply_moderate_overlay(&mut draft, rng),
            Complexity::Complex => Self::apply_complex_overlay(&mut draft, rng),
        }

        Self::assemble(draft, request, rng)
    }

    /// Small stat drift and maybe one extra ability.
    fn apply_moderate_overlay(draft: &mut MonsterDraft, rng: &mut StdRng) {
        draft.hp = perturb_floor_one(draft.hp, rng.gen_range(-2..=2));
        draft.morale = perturb_morale(draft.morale, rng.gen_range(-1..=1));

        if rng.gen_bool(policy::MODERATE_EXTRA_ABILITY_CHANCE) {
            Self::add_unique_abilities(&mut draft.special_abilities, 1, rng);
        }
    }

    /// Larger drift across hp, armor class, and morale, 1-2 new abilities,
    /// and sometimes an honorific name prefix.
    fn apply_complex_overlay(draft: &mut MonsterDraft, rng: &mut StdRng) {
        draft.hp = perturb_floor_one(draft.hp, rng.gen_range(-3..=5));
        draft.ac = (draft.ac + rng.gen_range(-1..=1)).clamp(0, 10);
        draft.morale = perturb_morale(draft.morale, rng.gen_range(-2..=2));

        let extra = rng.gen_range(1..=2);
        Self::add_unique_abilities(&mut draft.special_abilities, extra, rng);

        if rng.gen_bool(policy::COMPLEX_NAME_PREFIX_CHANCE) {
            let prefix = NAME_PREFIXES.choose(rng).expect("prefix pool is non-empty");
            draft.name = format!("{prefix} {}", draft.name);
        }
    }

    /// Draws up to `count` abilities from the global pool, skipping any the
    /// draft already has.
    fn add_unique_abilities(abilities: &mut Vec<String>, count: usize, rng: &mut StdRng) {
        for _ in 0..count {
            let candidate = SPECIAL_ABILITIES
                .choose(rng)
                .expect("ability pool is non-empty");
            if !abilities.iter().any(|a| a == candidate) {
                abilities.push(candidate.to_string());
            }
        }
    }

    /// Derives every field from the weighted tables, with no seed creature.
    fn fully_random(request: &GenerationRequest, rng: &mut StdRng) -> BestiaryResult<Monster> {
        let filters = &request.filters;
        let challenge_rating = filters
            .challenge_rating
            .unwrap_or_else(|| *ChallengeRating::ALL.choose(rng).expect("non-empty"));
        let monster_type = filters
            .monster_type
            .unwrap_or_else(|| *MonsterType::ALL.choose(rng).expect("non-empty"));
        let environment = filters
            .environment
            .unwrap_or_else(|| *Environment::ALL.choose(rng).expect("non-empty"));

        let band = cr_stat_band(challenge_rating);
        let hd = band.hit_dice.to_string();
        let hp = roll_hit_dice(&hd, rng)?;
        let speed = *MOVEMENT_SPEEDS.choose(rng).expect("non-empty");

        let name = Self::random_name(monster_type, rng);
        let special_abilities =
            Self::random_abilities(challenge_rating, monster_type, request.complexity, rng);
        let description = Self::random_description(monster_type, environment, rng);

        let draft = MonsterDraft {
            name,
            monster_type,
            challenge_rating,
            environment,
            ac: rng.gen_range(band.ac_range.0..=band.ac_range.1),
            hd,
            hp,
            movement: format!("{speed}' ({}')", speed / 3),
            attacks: render_attacks(band.attacks),
            damage: band.damage.to_string(),
            save: band.save.to_string(),
            morale: rng.gen_range(band.morale_range.0..=band.morale_range.1),
            xp: rng.gen_range(band.xp_range.0..=band.xp_range.1),
            description,
            special_abilities,
        };

        Self::assemble(draft, request, rng)
    }

    /// `[prefix ] base[ suffix]`: 60% prefix, 40% suffix, base noun from
    /// the type's name pool.
    fn random_name(monster_type: MonsterType, rng: &mut StdRng) -> String {
        let base = name_pool(monster_type)
            .choose(rng)
            .expect("name pool is non-empty");

        let mut name = String::new();
        if rng.gen_bool(policy::NAME_PREFIX_CHANCE) {
            let prefix = NAME_PREFIXES.choose(rng).expect("non-empty");
            name.push_str(prefix);
            name.push(' ');
        }
        name.push_str(base);
        if rng.gen_bool(policy::NAME_SUFFIX_CHANCE) {
            let suffix = NAME_ROOTS.choose(rng).expect("non-empty");
            name.push(' ');
            name.push_str(suffix);
        }
        name
    }

    /// Target count from the complexity tier plus a CR-band bonus;
    /// type-affinity abilities each included with 50% probability before
    /// the remaining slots are filled from the unused global pool.
    fn random_abilities(
        challenge_rating: ChallengeRating,
        monster_type: MonsterType,
        complexity: Complexity,
        rng: &mut StdRng,
    ) -> Vec<String> {
        let base = match complexity {
            Complexity::Simple => 1,
            Complexity::Moderate => rng.gen_range(2..=3),
            Complexity::Complex => rng.gen_range(3..=5),
        };
        let target = base + cr_ability_bonus(challenge_rating);

        let mut abilities: Vec<String> = Vec::new();
        let mut available: Vec<&str> = SPECIAL_ABILITIES.to_vec();

        for &affinity in type_affinity_abilities(monster_type) {
            if abilities.len() < target && rng.gen_bool(policy::TYPE_ABILITY_CHANCE) {
                abilities.push(affinity.to_string());
                available.retain(|&a| a != affinity);
            }
        }

        while abilities.len() < target && !available.is_empty() {
            let index = rng.gen_range(0..available.len());
            abilities.push(available.swap_remove(index).to_string());
        }

        abilities
    }

    fn random_description(
        monster_type: MonsterType,
        environment: Environment,
        rng: &mut StdRng,
    ) -> String {
        let first = DESCRIPTORS.choose(rng).expect("non-empty");
        let second = DESCRIPTORS.choose(rng).expect("non-empty");

        match rng.gen_range(0..4) {
            0 => format!(
                "A {first} creature that haunts the {environment}. This {monster_type} is known \
                 for its {second} nature and unpredictable behavior in combat."
            ),
            1 => format!(
                "These {first} beings are commonly found lurking in {environment} regions. They \
                 are {second} predators that strike fear into seasoned adventurers."
            ),
            2 => format!(
                "A {second} {monster_type} that has claimed the {environment} as its domain. \
                 Ancient tales speak of its {first} appetite and supernatural cunning."
            ),
            _ => format!(
                "This {first} monstrosity terrorizes the {environment}, leaving behind only \
                 whispered legends. Its {second} reputation is earned through countless deadly \
                 encounters."
            ),
        }
    }

    /// Common assembly applied regardless of synthesis path.
    fn assemble(
        draft: MonsterDraft,
        request: &GenerationRequest,
        rng: &mut StdRng,
    ) -> BestiaryResult<Monster> {
        let stats = MonsterStats {
            ac: draft.ac,
            hd: draft.hd,
            hp: draft.hp,
            movement: draft.movement,
            attacks: draft.attacks,
            damage: draft.damage,
            save: draft.save,
            morale: draft.morale,
            xp: draft.xp,
        };

        let encounters = EncounterGenerator::generate_encounter_info(
            draft.monster_type,
            draft.challenge_rating,
            &draft.special_abilities,
            draft.environment,
            rng,
        );

        let treasure = if request.include_treasure {
            let carried =
                TreasureGenerator::generate_individual_treasure(draft.challenge_rating, rng);
            let hoard = TreasureGenerator::generate_lair_treasure(
                draft.challenge_rating,
                draft.monster_type,
                rng,
            );
            merge_treasure(carried, hoard)
        } else {
            TreasureInfo::none()
        };

        let lair = if request.include_lair {
            LairGenerator::generate_lair(
                draft.monster_type,
                draft.environment,
                draft.challenge_rating,
                &draft.special_abilities,
                rng,
            )
        } else {
            crate::model::LairInfo::no_lair(draft.environment)
        };

        Ok(Monster {
            id: Uuid::new_v4(),
            name: draft.name,
            monster_type: draft.monster_type,
            challenge_rating: draft.challenge_rating,
            environment: draft.environment,
            stats,
            description: draft.description,
            special_abilities: draft.special_abilities,
            encounters,
            treasure,
            lair,
            created_at: Utc::now(),
            is_template: false,
            source: "generated".to_string(),
        })
    }
}

/// Combines an individual roll with a hoard roll into one treasure block:
/// both code fields survive and coin amounts are summed per currency.
fn merge_treasure(carried: TreasureInfo, hoard: TreasureInfo) -> TreasureInfo {
    let mut coins = hoard.coins;
    for (coin, amount) in carried.coins {
        *coins.entry(coin).or_insert(0) += amount;
    }

    TreasureInfo {
        individual: carried.individual,
        lair: hoard.lair,
        coins,
        gems: hoard.gems,
        magic_items: hoard.magic_items,
    }
}

fn render_attacks(descriptor: &str) -> String {
    let plural = if descriptor.contains('2') { "s" } else { "" };
    format!("{descriptor} attack{plural}")
}

fn perturb_floor_one(value: u32, delta: i32) -> u32 {
    (value as i64 + delta as i64).max(1) as u32
}

fn perturb_morale(morale: u8, delta: i32) -> u8 {
    (morale as i32 + delta).clamp(2, 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils::seed_rng;
    use crate::model::GenerationFilters;

    fn request(filters: GenerationFilters, algorithm: Algorithm) -> GenerationRequest {
        GenerationRequest {
            filters,
            algorithm,
            complexity: Complexity::Moderate,
            include_treasure: true,
            include_lair: true,
        }
    }

    #[test]
    fn test_batch_length_matches_count() {
        let mut rng = seed_rng(Some(41));
        let req = request(
            GenerationFilters {
                count: 5,
                ..Default::default()
            },
            Algorithm::Balanced,
        );
        let batch = MonsterGenerator::generate(&req, &mut rng).unwrap();
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let mut rng = seed_rng(Some(42));
        let req = request(
            GenerationFilters {
                count: 0,
                ..Default::default()
            },
            Algorithm::Random,
        );
        assert!(MonsterGenerator::generate(&req, &mut rng).is_err());
    }

    #[test]
    fn test_filters_pass_through_to_records() {
        let mut rng = seed_rng(Some(43));
        let req = request(
            GenerationFilters {
                challenge_rating: Some(ChallengeRating::Three),
                monster_type: Some(MonsterType::Dragon),
                environment: Some(Environment::Desert),
                count: 4,
            },
            Algorithm::Random,
        );
        for monster in MonsterGenerator::generate(&req, &mut rng).unwrap() {
            assert_eq!(monster.challenge_rating, ChallengeRating::Three);
            assert_eq!(monster.monster_type, MonsterType::Dragon);
            assert_eq!(monster.environment, Environment::Desert);
        }
    }

    #[test]
    fn test_template_fallback_when_nothing_matches() {
        let mut rng = seed_rng(Some(44));
        // No seed template is an aberration at CR 0.
        let req = request(
            GenerationFilters {
                challenge_rating: Some(ChallengeRating::Zero),
                monster_type: Some(MonsterType::Aberration),
                environment: None,
                count: 1,
            },
            Algorithm::TemplateBased,
        );
        let batch = MonsterGenerator::generate(&req, &mut rng).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].monster_type, MonsterType::Aberration);
        assert!(batch[0].stats.hp >= 1);
    }

    #[test]
    fn test_template_path_keeps_template_identity() {
        let mut rng = seed_rng(Some(45));
        let req = GenerationRequest {
            filters: GenerationFilters {
                challenge_rating: Some(ChallengeRating::SixPlus),
                monster_type: Some(MonsterType::Dragon),
                environment: Some(Environment::Mountain),
                count: 1,
            },
            algorithm: Algorithm::TemplateBased,
            complexity: Complexity::Simple,
            include_treasure: true,
            include_lair: true,
        };
        let batch = MonsterGenerator::generate(&req, &mut rng).unwrap();
        // Simple complexity applies no overlay: the template comes through
        // verbatim apart from the assembled sub-blocks.
        assert_eq!(batch[0].name, "Ancient Dragon");
        assert_eq!(batch[0].stats.hp, 48);
        assert_eq!(batch[0].stats.morale, 10);
    }

    #[test]
    fn test_overlays_respect_domains() {
        let mut rng = seed_rng(Some(46));
        for complexity in [Complexity::Moderate, Complexity::Complex] {
            for _ in 0..100 {
                let req = GenerationRequest {
                    filters: GenerationFilters {
                        challenge_rating: Some(ChallengeRating::One),
                        monster_type: Some(MonsterType::Humanoid),
                        environment: Some(Environment::Dungeon),
                        count: 1,
                    },
                    algorithm: Algorithm::TemplateBased,
                    complexity,
                    include_treasure: false,
                    include_lair: false,
                };
                let monster = MonsterGenerator::generate(&req, &mut rng)
                    .unwrap()
                    .remove(0);
                assert!(monster.stats.hp >= 1);
                assert!((2..=12).contains(&monster.stats.morale));
                assert!((0..=10).contains(&monster.stats.ac));
            }
        }
    }

    #[test]
    fn test_disabled_treasure_and_lair_blocks() {
        let mut rng = seed_rng(Some(47));
        let req = GenerationRequest {
            filters: GenerationFilters {
                count: 3,
                ..Default::default()
            },
            algorithm: Algorithm::Random,
            complexity: Complexity::Simple,
            include_treasure: false,
            include_lair: false,
        };
        for monster in MonsterGenerator::generate(&req, &mut rng).unwrap() {
            assert_eq!(monster.treasure, TreasureInfo::none());
            assert_eq!(monster.lair.description, "No fixed lair");
            assert_eq!(monster.lair.size, crate::model::LairSize::None);
            assert!(monster.lair.defenses.is_empty());
            assert_eq!(monster.lair.terrain, monster.environment);
        }
    }

    #[test]
    fn test_merged_treasure_keeps_both_codes() {
        let mut rng = seed_rng(Some(48));
        let req = request(
            GenerationFilters {
                challenge_rating: Some(ChallengeRating::Five),
                count: 1,
                ..Default::default()
            },
            Algorithm::Random,
        );
        let monster = MonsterGenerator::generate(&req, &mut rng)
            .unwrap()
            .remove(0);
        assert_eq!(monster.treasure.individual, "Q (2d6 sp, 30% 1d6 gp)");
        assert_ne!(monster.treasure.lair, "None");
    }

    #[test]
    fn test_abilities_are_unique() {
        let mut rng = seed_rng(Some(49));
        let req = GenerationRequest {
            filters: GenerationFilters {
                challenge_rating: Some(ChallengeRating::SixPlus),
                count: 10,
                ..Default::default()
            },
            algorithm: Algorithm::Balanced,
            complexity: Complexity::Complex,
            include_treasure: true,
            include_lair: true,
        };
        for monster in MonsterGenerator::generate(&req, &mut rng).unwrap() {
            let mut seen = std::collections::HashSet::new();
            for ability in &monster.special_abilities {
                assert!(seen.insert(ability.clone()), "duplicate '{ability}'");
            }
        }
    }

    #[test]
    fn test_ability_counts_scale_with_complexity_and_cr() {
        let mut rng = seed_rng(Some(50));
        let abilities = MonsterGenerator::random_abilities(
            ChallengeRating::SixPlus,
            MonsterType::Dragon,
            Complexity::Complex,
            &mut rng,
        );
        // complex base is 3-5, CR 6+ adds 3.
        assert!((6..=8).contains(&abilities.len()));

        let abilities = MonsterGenerator::random_abilities(
            ChallengeRating::Zero,
            MonsterType::Construct,
            Complexity::Simple,
            &mut rng,
        );
        assert_eq!(abilities.len(), 1);
    }

    #[test]
    fn test_random_name_shape() {
        let mut rng = seed_rng(Some(51));
        for _ in 0..50 {
            let name = MonsterGenerator::random_name(MonsterType::Undead, &mut rng);
            assert!(!name.is_empty());
            let words = name.split(' ').count();
            assert!((1..=3).contains(&words), "unexpected name '{name}'");
        }
    }

    #[test]
    fn test_render_attacks_pluralization() {
        assert_eq!(render_attacks("1"), "1 attack");
        assert_eq!(render_attacks("1-2"), "1-2 attacks");
        assert_eq!(render_attacks("2-3"), "2-3 attacks");
    }
}
