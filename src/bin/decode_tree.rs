//! Reads `n`, a token of `n` letters, `n` weights and a bitstream from stdin,
//! prints the decoded text, then the longest repeat length of a sample string.
//!
//! Set `RUST_LOG=debug` to trace tree construction and the repeat search.

use std::io::{self, Read};

use log::info;
use prefix_codes::compression::CodeTree;
use prefix_codes::string::longest_repeating_substring_length;
use prefix_codes::{Error, Result};

const SAMPLE: &str = "abbaba";

#[derive(Debug, PartialEq, Eq)]
struct Request {
    letters: String,
    weights: Vec<i64>,
    bitstream: String,
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<&'a str> {
    tokens
        .next()
        .ok_or_else(|| Error::InvalidInput(format!("missing {}", what)))
}

fn parse_request(input: &str) -> Result<Request> {
    let mut tokens = input.split_whitespace();

    let count_token = next_token(&mut tokens, "symbol count")?;
    let count: usize = count_token
        .parse()
        .map_err(|_| Error::InvalidInput(format!("bad symbol count {:?}", count_token)))?;

    // An empty alphabet has no letters token.
    let letters = if count == 0 {
        String::new()
    } else {
        next_token(&mut tokens, "letters")?.to_string()
    };

    let mut weights = Vec::with_capacity(count);
    for i in 0..count {
        let token = next_token(&mut tokens, "weight")?;
        let weight: i64 = token
            .parse()
            .map_err(|_| Error::InvalidInput(format!("bad weight #{}: {:?}", i, token)))?;
        weights.push(weight);
    }

    let bitstream = tokens.next().unwrap_or_default().to_string();
    Ok(Request {
        letters,
        weights,
        bitstream,
    })
}

fn run(input: &str) -> Result<String> {
    let request = parse_request(input)?;
    let tree = CodeTree::from_letters(&request.letters, &request.weights)?;
    info!(
        "built code for {} symbols, weighted path length {}",
        tree.symbol_count(),
        tree.weighted_path_length()
    );
    tree.decode(&request.bitstream)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    println!("{}", run(&input)?);
    println!(
        "Longest repeating substring length: {}",
        longest_repeating_substring_length(SAMPLE)
    );
    Ok(())
}
