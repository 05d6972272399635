use crate::data::AnagramDictionary;
use crate::results::AnagramError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

/// The minimum number of one-letter-longer anagrams a starter word must have.
pub const MIN_NUM_ANAGRAMS: usize = 5;
/// The word length used for the first starter word.
pub const DEFAULT_WORD_LENGTH: usize = 3;
/// The word length at which the difficulty stops increasing.
pub const MAX_WORD_LENGTH: usize = 7;

/// Tunable parameters for a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// The word length used for the first starter word.
    pub starting_word_length: usize,
    /// The word length at which the difficulty stops increasing.
    pub max_word_length: usize,
    /// The minimum number of one-letter-longer anagrams a starter word must
    /// have for the round to be winnable.
    pub min_anagrams: usize,
}

impl Default for GameSettings {
    fn default() -> GameSettings {
        GameSettings {
            starting_word_length: DEFAULT_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
            min_anagrams: MIN_NUM_ANAGRAMS,
        }
    }
}

/// One game session over an [`AnagramDictionary`].
///
/// The game hands out starter words whose length tracks the current
/// difficulty: each successful [`Game::pick_good_starter_word`] call bumps the
/// word length by one until it reaches the maximum, and it never goes back
/// down. The difficulty counter is the only state that changes after
/// construction; all word lookups go through the shared immutable dictionary.
/// Hosts hold one `Game` per session.
pub struct Game<'a> {
    dictionary: &'a AnagramDictionary,
    settings: GameSettings,
    word_length: usize,
    rng: StdRng,
}

impl<'a> Game<'a> {
    /// Creates a game with [`GameSettings::default`] and a random seed.
    pub fn new(dictionary: &'a AnagramDictionary) -> Game<'a> {
        Game::with_settings(dictionary, GameSettings::default())
    }

    /// Creates a game with the given settings and a random seed.
    pub fn with_settings(dictionary: &'a AnagramDictionary, settings: GameSettings) -> Game<'a> {
        Game {
            dictionary,
            word_length: settings.starting_word_length,
            settings,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a game whose starter-word choices are reproducible from the
    /// given seed.
    pub fn seeded(dictionary: &'a AnagramDictionary, settings: GameSettings, seed: u64) -> Game<'a> {
        Game {
            dictionary,
            word_length: settings.starting_word_length,
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The dictionary this game plays over.
    pub fn dictionary(&self) -> &AnagramDictionary {
        self.dictionary
    }

    /// The word length the next starter word will have.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Picks a random starter word of the current difficulty length that has
    /// at least [`GameSettings::min_anagrams`] one-letter-longer anagrams.
    ///
    /// On success the difficulty length increases by one, unless it is already
    /// at [`GameSettings::max_word_length`]; the returned word always has the
    /// length that was current when the call was made. Candidates are sampled
    /// without replacement, so if no word of the current length qualifies this
    /// returns [`AnagramError::NoStarterWord`] rather than looping, and the
    /// difficulty is left unchanged.
    pub fn pick_good_starter_word(&mut self) -> Result<Arc<str>, AnagramError> {
        let mut candidates: Vec<&Arc<str>> =
            self.dictionary.words_of_length(self.word_length).iter().collect();
        candidates.shuffle(&mut self.rng);
        for word in candidates {
            let num_anagrams = self.dictionary.anagrams_with_one_more_letter(word).len();
            if num_anagrams >= self.settings.min_anagrams {
                if self.word_length < self.settings.max_word_length {
                    self.word_length += 1;
                }
                return Ok(Arc::clone(word));
            }
        }
        Err(AnagramError::NoStarterWord {
            word_length: self.word_length,
        })
    }
}
