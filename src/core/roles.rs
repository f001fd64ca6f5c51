use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{GameConfig, Player, Session};
use crate::error::{GameError, GameResult};

/// Player roles in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Impostor,
}

impl Role {
    /// Get the string representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Impostor => "impostor",
        }
    }
}

/// Randomly assign roles and pick the shared word
///
/// Every call draws a fresh, independent outcome from the thread RNG.
///
/// # Arguments
///
/// * `config` - Validated game configuration
/// * `words` - Pool to pick the secret word from
///
/// # Errors
///
/// Returns `InvalidConfig` if the configuration is invalid and
/// `EmptyWordPool` if `words` is empty
pub fn assign_roles(config: &GameConfig, words: &[String]) -> GameResult<Session> {
    assign_roles_with_rng(config, words, &mut thread_rng())
}

/// Same as [`assign_roles`] with an explicit random source
pub fn assign_roles_with_rng<R: Rng + ?Sized>(
    config: &GameConfig,
    words: &[String],
    rng: &mut R,
) -> GameResult<Session> {
    config.validate()?;

    let word = words
        .choose(rng)
        .ok_or_else(|| GameError::EmptyWordPool("The word list is empty".to_string()))?
        .clone();

    // Uniform Fisher-Yates shuffle of the seats; the first few become impostors
    let mut seats: Vec<usize> = (0..config.player_count).collect();
    seats.shuffle(rng);
    let impostors: HashSet<usize> = seats[..config.impostor_count].iter().copied().collect();

    let players: Vec<Player> = (0..config.player_count)
        .map(|id| {
            if impostors.contains(&id) {
                Player::impostor(id)
            } else {
                Player::citizen(id, word.clone())
            }
        })
        .collect();

    tracing::debug!(
        "Assigned roles for {} players: {} impostors, {} citizens",
        config.player_count,
        config.impostor_count,
        config.player_count - config.impostor_count
    );

    Ok(Session::new(word, players, config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SecretWord, WordSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn config(player_count: usize, impostor_count: usize) -> GameConfig {
        GameConfig {
            player_count,
            impostor_count,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_role_counts_for_all_valid_configs() {
        let pool = words(&["París", "Playa"]);

        for player_count in 3..=12 {
            for impostor_count in 1..=player_count / 2 {
                let session = assign_roles(&config(player_count, impostor_count), &pool).unwrap();

                assert_eq!(session.player_count(), player_count);
                assert_eq!(session.impostor_ids().len(), impostor_count);
                for (index, player) in session.players().iter().enumerate() {
                    assert_eq!(player.id, index);
                }
            }
        }
    }

    #[test]
    fn test_citizens_share_word() {
        let pool = words(&["París", "Playa", "Bosque"]);
        let session = assign_roles(&config(8, 3), &pool).unwrap();

        assert!(pool.contains(&session.word().to_string()));

        for player in session.players() {
            match player.role {
                Role::Citizen => {
                    assert_eq!(player.secret_word, SecretWord::Word(session.word().to_string()))
                }
                Role::Impostor => assert_eq!(player.secret_word, SecretWord::Impostor),
            }
        }
    }

    #[test]
    fn test_impostor_word_differs_even_for_sentinel_like_words() {
        let pool = words(&["IMPOSTOR"]);
        let session = assign_roles(&config(5, 2), &pool).unwrap();

        let citizen_word = SecretWord::Word(session.word().to_string());
        for player in session.players().iter().filter(|p| p.is_impostor()) {
            assert_ne!(player.secret_word, citizen_word);
        }
    }

    #[test]
    fn test_empty_word_pool() {
        let result = assign_roles(&config(4, 1), &[]);
        assert!(matches!(result, Err(GameError::EmptyWordPool(_))));
    }

    #[test]
    fn test_invalid_config_checked_first() {
        let result = assign_roles(&config(3, 2), &[]);
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_impostor_positions_are_uniform() {
        let pool = words(&["Pizza"]);
        let config = config(4, 1);
        let trials = 4000;
        let mut counts = [0usize; 4];

        for _ in 0..trials {
            let session = assign_roles(&config, &pool).unwrap();
            for id in session.impostor_ids() {
                counts[id] += 1;
            }
        }

        // Expected 1000 per seat, standard deviation about 27
        for (seat, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "seat {} was impostor {} times out of {}",
                seat,
                count,
                trials
            );
        }
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let pool = words(&["Pizza"]);
        let config = config(12, 1);

        let first = assign_roles(&config, &pool).unwrap().impostor_ids();
        let differs = (0..50).any(|_| assign_roles(&config, &pool).unwrap().impostor_ids() != first);
        assert!(differs);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let pool = words(&["León", "Delfín", "Búho"]);
        let config = GameConfig {
            word_source: WordSource::CustomList,
            ..config(6, 2)
        };

        let a = assign_roles_with_rng(&config, &pool, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = assign_roles_with_rng(&config, &pool, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(a.word(), b.word());
        assert_eq!(a.impostor_ids(), b.impostor_ids());
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Citizen.as_str(), "citizen");
        assert_eq!(Role::Impostor.as_str(), "impostor");
    }
}
