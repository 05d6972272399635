use crate::results::AnagramError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// Returns the letters of `word` sorted into ascending code-point order.
///
/// Two words are anagrams of each other iff their sorted letters are equal, so
/// this is the key under which each anagram class is stored. The same function
/// is applied to dictionary entries at load time and to queried words at
/// lookup time.
pub fn sorted_letters(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// An indexed dictionary for anagram-based word games.
///
/// Words are read once from a newline-delimited source and indexed three ways:
/// a hash set for membership tests, anagram classes keyed by sorted letters,
/// and buckets keyed by word length. The dictionary is immutable once built,
/// so all lookups can be shared freely across threads.
///
/// Entries must be ASCII lowercase letters only. Surrounding whitespace is
/// trimmed, lines that are empty after the trim are skipped, and duplicate
/// entries are indexed once (the first occurrence wins). Any other content
/// fails construction with [`AnagramError::InvalidWord`].
#[derive(Debug, Clone)]
pub struct AnagramDictionary {
    all_words: Vec<Arc<str>>,
    word_set: HashSet<Arc<str>>,
    classes_by_key: HashMap<String, Vec<Arc<str>>>,
    words_by_length: HashMap<usize, Vec<Arc<str>>>,
}

impl AnagramDictionary {
    /// Constructs an `AnagramDictionary` by reading words from the given
    /// reader, one word per line.
    ///
    /// Fails with [`AnagramError::Io`] if the source cannot be fully read, or
    /// with [`AnagramError::InvalidWord`] if a line violates the
    /// lowercase-letters contract. Either way no dictionary is produced.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, AnagramError> {
        let mut dictionary = AnagramDictionary::empty();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            dictionary.index_word(line.trim())?;
        }
        Ok(dictionary)
    }

    /// Constructs an `AnagramDictionary` from the given words, applying the
    /// same trimming and validation as [`AnagramDictionary::from_reader`].
    pub fn from_iterator<I>(words: I) -> Result<Self, AnagramError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut dictionary = AnagramDictionary::empty();
        for word in words {
            dictionary.index_word(word.as_ref().trim())?;
        }
        Ok(dictionary)
    }

    fn empty() -> AnagramDictionary {
        AnagramDictionary {
            all_words: Vec::new(),
            word_set: HashSet::new(),
            classes_by_key: HashMap::new(),
            words_by_length: HashMap::new(),
        }
    }

    fn index_word(&mut self, word: &str) -> Result<(), AnagramError> {
        if word.is_empty() {
            return Ok(());
        }
        if !word.bytes().all(|letter| letter.is_ascii_lowercase()) {
            return Err(AnagramError::InvalidWord(word.to_string()));
        }
        if self.word_set.contains(word) {
            return Ok(());
        }
        let word: Arc<str> = Arc::from(word);
        self.all_words.push(Arc::clone(&word));
        self.words_by_length
            .entry(word.len())
            .or_default()
            .push(Arc::clone(&word));
        self.classes_by_key
            .entry(sorted_letters(&word))
            .or_default()
            .push(Arc::clone(&word));
        self.word_set.insert(word);
        Ok(())
    }

    /// Returns the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff the dictionary contains no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns `true` iff the given word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// Retrieves all dictionary words of the given length, in load order.
    pub fn words_of_length(&self, length: usize) -> &[Arc<str>] {
        self.words_by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Retrieves all dictionary words that are anagrams of the given word, in
    /// load order. The word itself is included if it is in the dictionary.
    ///
    /// The given word does not need to be in the dictionary; an unknown letter
    /// combination simply yields an empty slice.
    pub fn anagrams(&self, word: &str) -> &[Arc<str>] {
        self.classes_by_key
            .get(&sorted_letters(word))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Retrieves all dictionary words that can be formed by adding exactly one
    /// letter to the given word and rearranging.
    ///
    /// Results are ordered by ascending added letter, then by load order
    /// within each anagram class. Each added letter produces a distinct
    /// canonical key, so the result contains no duplicates. No filtering is
    /// applied against the given word; game-level validity is checked
    /// separately with [`AnagramDictionary::is_good_word`].
    pub fn anagrams_with_one_more_letter(&self, word: &str) -> Vec<Arc<str>> {
        let mut result = Vec::new();
        for letter in b'a'..=b'z' {
            let mut extended = String::with_capacity(word.len() + 1);
            extended.push_str(word);
            extended.push(char::from(letter));
            if let Some(class) = self.classes_by_key.get(&sorted_letters(&extended)) {
                result.extend(class.iter().map(Arc::clone));
            }
        }
        result
    }

    /// Returns `true` iff `candidate` is a dictionary word that does not
    /// contain `base` as a contiguous substring.
    ///
    /// The substring check rejects answers that merely tack letters onto the
    /// visible base word (base "cat", candidate "cats") while still allowing
    /// genuine rearrangements.
    pub fn is_good_word(&self, candidate: &str, base: &str) -> bool {
        self.word_set.contains(candidate) && !candidate.contains(base)
    }
}

impl Deref for AnagramDictionary {
    type Target = [Arc<str>];

    /// All dictionary words, in load order.
    fn deref(&self) -> &[Arc<str>] {
        &self.all_words
    }
}
