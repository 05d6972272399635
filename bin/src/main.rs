use clap::{Parser, Subcommand};
use rayon::prelude::*;
use rs_anagram_engine::*;
use std::fs::File;
use std::io;
use std::io::Write;
use std::sync::Arc;

/// Simple program to play the anagrams game from the command line: given a
/// starter word, find dictionary words made of the same letters plus one more.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of valid words, with one word on
    /// each line.
    #[clap(short = 'f', long)]
    words_file: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play rounds of the anagrams game interactively.
    Play,
    /// Print the anagrams and one-letter-extension anagrams of a word.
    Anagrams { word: String },
    /// Report how many words of each length qualify as starter words.
    Stats,
}

fn main() -> Result<(), AnagramError> {
    let args = Args::parse();

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let dictionary = AnagramDictionary::from_reader(words_reader)?;
    println!("Loaded {} words from {}.", dictionary.len(), args.words_file);

    match args.command {
        Command::Play => play(&dictionary)?,
        Command::Anagrams { word } => print_anagrams(&dictionary, &word),
        Command::Stats => print_stats(&dictionary),
    }

    Ok(())
}

fn play(dictionary: &AnagramDictionary) -> Result<(), AnagramError> {
    let mut game = Game::new(dictionary);
    println!(
        "For each starter word, enter dictionary words that use all of its letters\n\
         plus one more. Answers that contain the starter word spelled out are not\n\
         allowed. A blank line ends the round; Ctrl-D quits."
    );

    loop {
        let starter = match game.pick_good_starter_word() {
            Ok(word) => word,
            Err(error @ AnagramError::NoStarterWord { .. }) => {
                println!("\n{}. Game over.", error);
                return Ok(());
            }
            Err(error) => return Err(error),
        };
        let mut remaining: Vec<Arc<str>> = dictionary
            .anagrams_with_one_more_letter(&starter)
            .into_iter()
            .filter(|word| dictionary.is_good_word(word, &starter))
            .collect();
        println!("\nYour word is: {} ({} answers)", starter, remaining.len());

        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut buffer = String::new();
            if io::stdin().read_line(&mut buffer)? == 0 {
                println!();
                return Ok(());
            }
            let guess = buffer.trim();
            if guess.is_empty() {
                break;
            }

            if let Some(index) = remaining.iter().position(|word| word.as_ref() == guess) {
                remaining.remove(index);
                if remaining.is_empty() {
                    println!("Correct! That was all of them.");
                    break;
                }
                println!("Correct! {} to go.", remaining.len());
            } else if !dictionary.contains(guess) {
                println!("{} is not in the dictionary.", guess);
            } else if guess.contains(starter.as_ref()) {
                println!("{} just adds letters around {}.", guess, starter);
            } else {
                println!("{} doesn't use the right letters.", guess);
            }
        }

        if remaining.is_empty() {
            println!("Round complete.");
        } else {
            println!("The answers you missed:");
            for word in remaining.iter() {
                println!("\t{}", word);
            }
        }
    }
}

fn print_anagrams(dictionary: &AnagramDictionary, word: &str) {
    let anagrams = dictionary.anagrams(word);
    if anagrams.is_empty() {
        println!("No anagrams of {}.", word);
    } else {
        println!("Anagrams of {}:", word);
        for anagram in anagrams.iter() {
            println!("\t{}", anagram);
        }
    }

    let extended = dictionary.anagrams_with_one_more_letter(word);
    if extended.is_empty() {
        println!("No anagrams of {} plus one letter.", word);
    } else {
        println!("Anagrams of {} plus one letter:", word);
        for anagram in extended.iter() {
            println!("\t{}", anagram);
        }
    }
}

fn print_stats(dictionary: &AnagramDictionary) {
    println!("|Length|Words|Starter words|");
    println!("|------|-----|-------------|");
    let mut exhausted_lengths: Vec<usize> = Vec::new();
    for length in DEFAULT_WORD_LENGTH..=MAX_WORD_LENGTH {
        let bucket = dictionary.words_of_length(length);
        let num_qualifying = bucket
            .par_iter()
            .filter(|word| {
                dictionary.anagrams_with_one_more_letter(word).len() >= MIN_NUM_ANAGRAMS
            })
            .count();
        println!("|{}|{}|{}|", length, bucket.len(), num_qualifying);
        if num_qualifying == 0 {
            exhausted_lengths.push(length);
        }
    }
    for length in exhausted_lengths.iter() {
        println!(
            "Warning: no starter word at length {}; a game will stall there.",
            length
        );
    }
}
