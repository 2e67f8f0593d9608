//! # Ident Command
//!
//! Prints canonical JavaScript identifiers, handy for checking what the
//! generator will name an action before running it.

use reduxa_core::naming::split_words;
use reduxa_core::{Canonicalizer, WordTables};

/// Arguments for the ident command.
#[derive(clap::Args, Debug, Clone)]
pub struct IdentArgs {
    /// Text to canonicalize, one identifier per argument.
    #[clap(required = true)]
    pub words: Vec<String>,

    /// Capitalize the first letter (PascalCase).
    #[clap(long)]
    pub upper: bool,

    /// Also print how each input was split into words.
    #[clap(long = "words")]
    pub words_only: bool,

    /// Extra initialisms kept in uppercase.
    #[clap(long = "initialism")]
    pub initialism: Vec<String>,
}

/// Returns one output line per input.
pub fn execute(args: &IdentArgs) -> Vec<String> {
    let tables = WordTables::javascript().with_initialisms(&args.initialism);
    let canonicalizer = Canonicalizer::new(&tables);

    args.words
        .iter()
        .map(|input| {
            let ident = canonicalizer.canonicalize(input, args.upper);
            if args.words_only {
                format!("{}\t{}", ident, split_words(input).join(" "))
            } else {
                ident
            }
        })
        .collect()
}
