use clap::{Parser, ValueEnum};
use vigenere_analysis::{
    DEFAULT_MAX_KEY_LENGTH, DEFAULT_MIN_KEY_LENGTH, Language, decrypt, rank_keys, search_keys,
};

/// Command-line arguments for the Vigenère key-recovery program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Language the plaintext is assumed to be written in
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = LanguageArg::English,
        help = "Language the plaintext is assumed to be written in"
    )]
    language: LanguageArg,

    /// Smallest key length to try
    #[arg(
        long,
        default_value_t = DEFAULT_MIN_KEY_LENGTH,
        help = "Smallest key length to try"
    )]
    min_key_length: usize,

    /// Upper bound (exclusive) on key lengths to try
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_KEY_LENGTH,
        help = "Upper bound (exclusive) on key lengths to try"
    )]
    max_key_length: usize,

    /// Print the top N candidate keys with their distances
    #[arg(short, long, help = "Print the top N candidate keys with distances")]
    candidates: Option<usize>,
}

/// Languages with a built-in reference frequency table.
#[derive(Clone, Debug, ValueEnum)]
enum LanguageArg {
    English,
    Portuguese,
    German,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Portuguese => Language::Portuguese,
            LanguageArg::German => Language::German,
        }
    }
}

fn main() {
    let cli: Cli = Cli::parse();

    let input: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    let model = Language::from(cli.language.clone()).frequencies();

    // One candidate key per length, then re-ranked over the full text
    let candidates = search_keys(&input, model, cli.min_key_length, cli.max_key_length);
    let ranked = match rank_keys(&input, model, candidates) {
        Ok(ranked) => ranked,
        Err(err) => {
            eprintln!("No key found: {err}");
            std::process::exit(1);
        }
    };

    if let Some(count) = cli.candidates {
        for scored in ranked.iter().take(count) {
            println!("{:<20} {:.6}", scored.key, scored.distance);
        }
    }

    let best = &ranked[0];

    // Output key to stdout
    println!("{}", best.key);

    // Write decrypted text to file
    let decrypted: String = decrypt(&best.key, &input);
    std::fs::write(&cli.output, &decrypted)
        .expect("Failed to write output file");
}
