//! # Generation Module
//!
//! Procedural synthesis systems for monsters, encounters, treasure, and
//! lairs.
//!
//! The [`MonsterGenerator`] is the sole composer: it dispatches between
//! template reuse and fully random synthesis, then calls the three leaf
//! generators ([`EncounterGenerator`], [`TreasureGenerator`],
//! [`LairGenerator`]) to populate the record's sub-blocks. The leaf
//! generators depend only on their declared inputs, never on each other or
//! on the engine.
//!
//! All generation functions are stateless pure computations over their
//! arguments and a caller-supplied [`StdRng`]; batch items share no mutable
//! state and may be computed on independent workers, each with its own rng.

pub mod encounters;
pub mod lair;
pub mod monsters;
pub mod tables;
pub mod treasure;

pub use encounters::EncounterGenerator;
pub use lair::LairGenerator;
pub use monsters::MonsterGenerator;
pub use treasure::TreasureGenerator;

use crate::{BestiaryError, BestiaryResult};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Utility functions shared by the generators.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a random number generator, seeded when reproducible output
    /// is wanted and entropy-based otherwise.
    pub fn seed_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Evaluates a hit-dice expression into a hit-point total.
///
/// Three forms are understood, all over d8s:
/// - `"1-1"`: one d8 minus one, floored at 1
/// - `"N+B"`: N d8s plus the flat bonus B
/// - `"N"`: N d8s
///
/// Anything else is a generation failure; hit points must come from the
/// declared expression, never from an independent roll.
pub fn roll_hit_dice(hd: &str, rng: &mut StdRng) -> BestiaryResult<u32> {
    if hd == "1-1" {
        let roll: i32 = rng.gen_range(1..=8);
        return Ok((roll - 1).max(1) as u32);
    }

    if let Some((dice, bonus)) = hd.split_once('+') {
        let dice: u32 = dice.trim().parse().map_err(|_| malformed_hd(hd))?;
        let bonus: u32 = bonus.trim().parse().map_err(|_| malformed_hd(hd))?;
        return Ok(roll_d8s(dice, rng) + bonus);
    }

    let dice: u32 = hd.trim().parse().map_err(|_| malformed_hd(hd))?;
    Ok(roll_d8s(dice, rng))
}

fn roll_d8s(count: u32, rng: &mut StdRng) -> u32 {
    (0..count).map(|_| rng.gen_range(1..=8u32)).sum()
}

fn malformed_hd(hd: &str) -> BestiaryError {
    BestiaryError::GenerationFailed(format!("malformed hit-dice expression '{hd}'"))
}

/// Scales an encounter dice expression (`"NdM"` or `"NdM+B"`) by a CR
/// multiplier.
///
/// A multiplier above 1 scales up the dice count and any flat bonus; one
/// below 1 scales down the dice count, never below a single die. The
/// single-value expression `"1"` (and anything without a `d`) is left
/// unscaled, as is a malformed expression — scaling is cosmetic, not
/// correctness-critical.
pub fn scale_dice_expression(expr: &str, multiplier: f64) -> String {
    if multiplier == 1.0 || !expr.contains('d') {
        return expr.to_string();
    }

    let Some((count, rest)) = expr.split_once('d') else {
        return expr.to_string();
    };
    let Ok(count) = count.parse::<u32>() else {
        return expr.to_string();
    };
    let (sides, bonus) = match rest.split_once('+') {
        Some((sides, bonus)) => match (sides.parse::<u32>(), bonus.parse::<u32>()) {
            (Ok(sides), Ok(bonus)) => (sides, Some(bonus)),
            _ => return expr.to_string(),
        },
        None => match rest.parse::<u32>() {
            Ok(sides) => (sides, None),
            Err(_) => return expr.to_string(),
        },
    };

    let scaled_count = ((count as f64 * multiplier) as u32).max(1);
    if multiplier > 1.0 {
        match bonus {
            Some(bonus) => {
                let scaled_bonus = ((bonus as f64 * multiplier) as u32).max(1);
                format!("{scaled_count}d{sides}+{scaled_bonus}")
            }
            None => format!("{scaled_count}d{sides}"),
        }
    } else {
        match bonus {
            Some(bonus) => format!("{scaled_count}d{sides}+{bonus}"),
            None => format!("{scaled_count}d{sides}"),
        }
    }
}

/// Picks one option from a weighted pool using a cumulative-weight draw.
///
/// Returns `None` only when the pool is empty or every weight is zero.
pub fn weighted_choice<T: Copy>(options: &[(T, u32)], rng: &mut StdRng) -> Option<T> {
    let dist = WeightedIndex::new(options.iter().map(|(_, weight)| *weight)).ok()?;
    Some(options[dist.sample(rng)].0)
}

/// Removes duplicate entries while keeping first-occurrence order.
pub(crate) fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
