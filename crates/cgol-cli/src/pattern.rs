//! Initial pattern construction.

use cgol_core::{Coord, Error, Result, WorldConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default starting pattern, the r-pentomino
pub const DEFAULT_PATTERN: &str = "1,0;0,1;1,1;1,2;2,2";

/// Parse a semicolon-separated list of `x,y` pairs.
///
/// Malformed input is rejected outright so the engine never sees it.
pub fn parse_coordinates(input: &str) -> Result<Vec<Coord>> {
    input.split(';').map(parse_pair).collect()
}

fn parse_pair(pair: &str) -> Result<Coord> {
    let mut fields = pair.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(x), Some(y), None) => Ok(Coord::new(parse_int(x)?, parse_int(y)?)),
        _ => Err(Error::MalformedPair(pair.to_string())),
    }
}

fn parse_int(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| Error::InvalidInteger(token.to_string()))
}

/// Generate a random pattern over the centered `size x size` square.
///
/// Each cell is rolled independently against the configured density; the
/// seeded RNG makes a run reproducible.
pub fn random_pattern(config: &WorldConfig, seed: u64) -> Vec<Coord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let half = config.size / 2;

    let mut pattern = Vec::new();
    for x in 0..config.size {
        for y in 0..config.size {
            if rng.gen::<f32>() < config.density {
                pattern.push(Coord::new(x - half, y - half));
            }
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_pattern() {
        let cells = parse_coordinates(DEFAULT_PATTERN).unwrap();
        assert_eq!(
            cells,
            vec![
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let cells = parse_coordinates("-3,4;0,-7").unwrap();
        assert_eq!(cells, vec![Coord::new(-3, 4), Coord::new(0, -7)]);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert!(matches!(
            parse_coordinates("1,2,3"),
            Err(Error::MalformedPair(pair)) if pair == "1,2,3"
        ));
        assert!(matches!(
            parse_coordinates("0,0;5"),
            Err(Error::MalformedPair(pair)) if pair == "5"
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer_token() {
        assert!(matches!(
            parse_coordinates("0,zero"),
            Err(Error::InvalidInteger(token)) if token == "zero"
        ));
    }

    #[test]
    fn test_random_pattern_is_reproducible() {
        let config = WorldConfig::default();
        assert_eq!(random_pattern(&config, 42), random_pattern(&config, 42));
    }

    #[test]
    fn test_random_pattern_stays_in_viewport() {
        let config = WorldConfig {
            size: 20,
            density: 0.5,
        };
        let pattern = random_pattern(&config, 7);

        assert!(!pattern.is_empty());
        for cell in pattern {
            assert!(cell.x >= -10 && cell.x < 10);
            assert!(cell.y >= -10 && cell.y < 10);
        }
    }

    #[test]
    fn test_zero_density_yields_empty_pattern() {
        let config = WorldConfig {
            size: 20,
            density: 0.0,
        };
        assert!(random_pattern(&config, 0).is_empty());
    }
}
