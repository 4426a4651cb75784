//! # Bestiary CLI
//!
//! Generates a batch of monster records from command-line filters and
//! prints them as JSON.

use bestiary::generation::utils::seed_rng;
use bestiary::{
    BestiaryError, BestiaryResult, GenerationFilters, GenerationRequest, MonsterGenerator,
};
use clap::Parser;
use log::info;
use std::str::FromStr;

/// Command line arguments for the bestiary generator.
#[derive(Parser, Debug)]
#[command(name = "bestiary")]
#[command(about = "Procedural monster generator for old-school tabletop campaigns")]
#[command(version)]
struct Args {
    /// Number of monsters to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Challenge rating band (0, 1, 2, 3, 4, 5, 6+) or "any"
    #[arg(long, default_value = "any")]
    challenge_rating: String,

    /// Creature type (beast, undead, humanoid, ...) or "any"
    #[arg(long = "type", default_value = "any")]
    monster_type: String,

    /// Environment (dungeon, forest, swamp, ...) or "any"
    #[arg(long, default_value = "any")]
    environment: String,

    /// Synthesis algorithm (template-based, random, balanced)
    #[arg(long, default_value = "balanced")]
    algorithm: String,

    /// Complexity tier (simple, moderate, complex)
    #[arg(long, default_value = "moderate")]
    complexity: String,

    /// Skip treasure generation
    #[arg(long)]
    no_treasure: bool,

    /// Skip lair generation
    #[arg(long)]
    no_lair: bool,

    /// Random seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> BestiaryResult<()> {
    env_logger::init();
    let args = Args::parse();

    info!("bestiary v{}", bestiary::VERSION);

    let request = build_request(&args)?;
    let mut rng = seed_rng(args.seed);
    let monsters = MonsterGenerator::generate(&request, &mut rng)?;

    let json = if args.compact {
        serde_json::to_string(&monsters)?
    } else {
        serde_json::to_string_pretty(&monsters)?
    };
    println!("{json}");

    Ok(())
}

fn build_request(args: &Args) -> BestiaryResult<GenerationRequest> {
    Ok(GenerationRequest {
        filters: GenerationFilters {
            challenge_rating: parse_filter(&args.challenge_rating)?,
            monster_type: parse_filter(&args.monster_type)?,
            environment: parse_filter(&args.environment)?,
            count: args.count,
        },
        algorithm: args.algorithm.parse()?,
        complexity: args.complexity.parse()?,
        include_treasure: !args.no_treasure,
        include_lair: !args.no_lair,
    })
}

/// Parses a filter argument, mapping the literal "any" to no filter.
fn parse_filter<T>(raw: &str) -> BestiaryResult<Option<T>>
where
    T: FromStr<Err = BestiaryError>,
{
    if raw == "any" {
        return Ok(None);
    }
    raw.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary::{Algorithm, ChallengeRating, Complexity, Environment, MonsterType};

    #[test]
    fn test_parse_filter_any() {
        let parsed: Option<ChallengeRating> = parse_filter("any").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_parse_filter_value() {
        let parsed: Option<MonsterType> = parse_filter("dragon").unwrap();
        assert_eq!(parsed, Some(MonsterType::Dragon));
        let parsed: Option<Environment> = parse_filter("underground").unwrap();
        assert_eq!(parsed, Some(Environment::Underground));
    }

    #[test]
    fn test_build_request_defaults() {
        let args = Args::parse_from(["bestiary"]);
        let request = build_request(&args).unwrap();
        assert_eq!(request.filters.count, 1);
        assert!(request.filters.challenge_rating.is_none());
        assert_eq!(request.algorithm, Algorithm::Balanced);
        assert_eq!(request.complexity, Complexity::Moderate);
        assert!(request.include_treasure);
        assert!(request.include_lair);
    }

    #[test]
    fn test_build_request_rejects_unknown_values() {
        let args = Args::parse_from(["bestiary", "--type", "gazebo"]);
        assert!(build_request(&args).is_err());
    }
}
