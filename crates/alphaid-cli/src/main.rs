//! alphaid CLI — `alphaid` command.
//!
//! Generates random identifiers from the command line, in secure or fast
//! mode, from a named or custom alphabet.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use alphaid::alphabet;
use alphaid::{checked_length, Generator, Mode};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// alphaid CLI — generate random identifiers from arbitrary alphabets.
#[derive(Parser, Debug)]
#[command(
    name = "alphaid",
    about = "alphaid CLI",
    version,
    long_about = "alphaid — random identifier generator\n\nDraws every symbol uniformly from the chosen alphabet, using the\noperating system CSPRNG by default or a fast PRNG with --unsecure."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one or more identifiers
    Generate {
        /// Number of symbols per identifier
        #[arg(short = 'n', long, default_value = "20", allow_negative_numbers = true)]
        length: i64,

        /// Custom alphabet (every character is one symbol)
        #[arg(short, long, conflicts_with = "set")]
        alphabet: Option<String>,

        /// Named alphabet
        #[arg(short, long, value_enum, default_value = "url-safe")]
        set: AlphabetSet,

        /// Use the fast, non-cryptographic source
        #[arg(long)]
        unsecure: bool,

        /// Number of identifiers to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Print a JSON document instead of one identifier per line
        #[arg(long)]
        json: bool,
    },

    /// List the named alphabets
    Sets,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum AlphabetSet {
    Lowercase,
    Uppercase,
    Letters,
    Digits,
    Hex,
    Oct,
    Punctuation,
    UrlSafe,
    Printable,
}

impl AlphabetSet {
    fn name(self) -> &'static str {
        match self {
            AlphabetSet::Lowercase => "lowercase",
            AlphabetSet::Uppercase => "uppercase",
            AlphabetSet::Letters => "letters",
            AlphabetSet::Digits => "digits",
            AlphabetSet::Hex => "hex",
            AlphabetSet::Oct => "oct",
            AlphabetSet::Punctuation => "punctuation",
            AlphabetSet::UrlSafe => "url-safe",
            AlphabetSet::Printable => "printable",
        }
    }
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    mode: &'a str,
    alphabet_size: usize,
    entropy_bits: f64,
    ids: Vec<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Commands::Generate {
            length,
            alphabet,
            set,
            unsecure,
            count,
            json,
        } => cmd_generate(
            length,
            alphabet.as_deref(),
            set,
            unsecure,
            count,
            json,
            verbose,
        ),
        Commands::Sets => cmd_sets(verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `alphaid generate [-n LEN] [-a ALPHABET | -s SET] [--unsecure] [-c COUNT] [--json]`
fn cmd_generate(
    length: i64,
    custom: Option<&str>,
    set: AlphabetSet,
    unsecure: bool,
    count: usize,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let length = checked_length(length)?;
    let mode = if unsecure { Mode::Fast } else { Mode::Secure };
    log::debug!("generating {count} id(s) of length {length} in {mode} mode");

    let builder = Generator::builder().mode(mode);
    let builder = match custom {
        Some(symbols) => builder.alphabet(symbols),
        None => builder.named(set.name()),
    };
    let generator = builder.build().context("invalid alphabet")?;

    let ids = generator
        .generate_many(count, length)
        .context("failed to generate identifiers")?;

    if verbose {
        eprintln!("Mode:     {}", generator.mode());
        eprintln!("Alphabet: {} symbols", generator.alphabet().len());
        eprintln!("Entropy:  {:.1} bits per id", generator.entropy_bits(length));
    }

    if json {
        let output = GenerateOutput {
            mode: generator.mode().as_str(),
            alphabet_size: generator.alphabet().len(),
            entropy_bits: generator.entropy_bits(length),
            ids,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for id in ids {
            println!("{id}");
        }
    }

    Ok(())
}

/// `alphaid sets`
fn cmd_sets(verbose: bool) -> Result<()> {
    for (name, symbols) in alphabet::NAMED {
        let size = symbols.chars().count();
        if verbose {
            println!("{name:<12} {size:>3}  {}", symbols.escape_debug());
        } else {
            println!("{name:<12} {size:>3}");
        }
    }
    Ok(())
}
