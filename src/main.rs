use std::process::ExitCode;
use std::time::Instant;

use argparse::{ArgumentParser, Store, StoreTrue};

use sentence_anagrams::{Anagrammer, Sentence};

const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

struct Options {
    string: String,
    minwords: usize,
    maxwords: usize,
    minletters: usize,
    maxletters: usize,
    dictionary_path: String,
    verbose: bool,
}

fn parse_options() -> Options {
    let mut options = Options {
        string: String::new(),
        minwords: 0,
        maxwords: usize::MAX,
        minletters: 0,
        maxletters: usize::MAX,
        dictionary_path: DEFAULT_DICTIONARY.to_string(),
        verbose: false,
    };

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Find anagrams of the given string");
        ap.refer(&mut options.string)
            .required()
            .add_argument("string", Store, "String to generate anagrams of");
        ap.refer(&mut options.minwords)
            .add_option(&["-w", "--min-words"], Store, "The minimum number of words in the generated anagrams");
        ap.refer(&mut options.maxwords)
            .add_option(&["-W", "--max-words"], Store, "The maximum number of words in the generated anagrams");
        ap.refer(&mut options.minletters)
            .add_option(&["-l", "--min-letters"], Store, "The minimum number of letters per word in the generated anagrams");
        ap.refer(&mut options.maxletters)
            .add_option(&["-L", "--max-letters"], Store, "The maximum number of letters per word in the generated anagrams");
        ap.refer(&mut options.dictionary_path)
            .add_option(&["-f", "--dictionary"], Store, "The path of the word list");
        ap.refer(&mut options.verbose)
            .add_option(&["-v", "--verbose"], StoreTrue, "Log debugging information");
        ap.parse_args_or_exit();
    }

    options
}

fn print_set(set: &Sentence) {
    println!("{}", set.join(" "));
}

fn main() -> ExitCode {
    let options = parse_options();

    let debug_enabled = options.verbose || std::env::var("ANAGRAMS_DEBUG").is_ok();
    sentence_anagrams::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&options) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let t_load = Instant::now();
    let mut anagrammer = Anagrammer::from_dictionary_path(&options.dictionary_path)?;
    if (options.minletters, options.maxletters) != (0, usize::MAX) {
        anagrammer.restrict_letters(options.minletters, options.maxletters);
    }
    log::info!(
        "Loaded {} words from {} in {:.3}s",
        anagrammer.word_count(),
        options.dictionary_path,
        t_load.elapsed().as_secs_f64()
    );

    let sentence: Vec<&str> = options.string.split_whitespace().collect();

    let t_solve = Instant::now();
    let mut anagrams = anagrammer.find_anagrams(&sentence, options.minwords, options.maxwords)?;
    anagrams.sort();

    for set in &anagrams {
        print_set(set);
    }

    log::info!(
        "Found {} anagrams in {:.3}s",
        anagrams.len(),
        t_solve.elapsed().as_secs_f64()
    );
    Ok(())
}
