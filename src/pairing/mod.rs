use thiserror::Error;

use crate::database::models::{Pairing, PlayerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    #[error("Cannot pair an odd number of players: {count}")]
    OddPlayerCount { count: i32 },
}

/// Pairs consecutive entries of an ordered seed list: (0,1), (2,3), and so
/// on. The caller decides the order, standings rank or a first-round
/// shuffle. Odd-length input is refused rather than dropping the last seed.
pub fn pair_adjacent(seeds: &[(PlayerId, String)]) -> Result<Vec<Pairing>, PairingError> {
    if seeds.len() % 2 != 0 {
        return Err(PairingError::OddPlayerCount {
            count: seeds.len() as i32,
        });
    }

    let pairings = seeds
        .chunks_exact(2)
        .map(|pair| Pairing {
            id1: pair[0].0,
            name1: pair[0].1.clone(),
            id2: pair[1].0,
            name2: pair[1].1.clone(),
        })
        .collect();

    Ok(pairings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds(names: &[&str]) -> Vec<(PlayerId, String)> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (i as PlayerId + 1, name.to_string()))
            .collect()
    }

    #[test]
    fn pairs_consecutive_seeds() {
        let result = pair_adjacent(&seeds(&["Anna", "Bartek", "Celina", "Darek"])).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!((result[0].id1, result[0].id2), (1, 2));
        assert_eq!((result[1].id1, result[1].id2), (3, 4));
        assert_eq!(result[0].name1, "Anna");
        assert_eq!(result[1].name2, "Darek");
    }

    #[test]
    fn empty_seed_list_produces_no_pairings() {
        let result = pair_adjacent(&[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn odd_seed_count_is_refused() {
        let err = pair_adjacent(&seeds(&["Anna", "Bartek", "Celina"])).unwrap_err();
        assert_eq!(err, PairingError::OddPlayerCount { count: 3 });
    }
}
