//! Interactive prefix search over a word list.
//!
//! Loads a newline delimited word list into a trie and then reads prefixes
//! from stdin, printing every word which starts with each one. The session
//! ends on end of input or Ctrl-C.
//!
//! ```text
//! cargo run --example finder -- --words /usr/share/dict/words
//! ```
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use prefind::error::TrieError;
use prefind::trie::TrieString;
use tracing::{info, warn, Level};

/// Find dictionary words by prefix
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Word list to load, one word per line
    #[clap(short, long, env = "PREFIND_WORDS", default_value = "words.txt")]
    words: PathBuf,

    /// Log at debug level
    #[clap(short, long)]
    verbose: bool,
}

fn build_trie(path: &Path) -> anyhow::Result<TrieString> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut trie = TrieString::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        trie.insert(line.trim().chars());
    }
    Ok(trie)
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    //logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    println!("Building word list, please wait...");
    let start = Instant::now();
    let trie = match build_trie(&args.words) {
        Ok(trie) => trie,
        Err(e) => {
            warn!("could not build word list: {:#}", e);
            TrieString::new()
        }
    };
    info!(
        words = trie.count(),
        elapsed = ?start.elapsed(),
        "word list loaded"
    );
    println!("Completed.");
    println!();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(async move {
        let session = tokio::task::spawn_blocking(move || {
            prompt_loop(&trie, io::stdin().lock(), io::stdout())
        });
        tokio::select! {
            res = session => res.context("prompt loop failed").and_then(|r| r),
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                Ok(())
            }
        }
    });
    // The prompt loop may still be blocked reading stdin
    runtime.shutdown_background();
    outcome?;

    println!();
    println!("Good bye.");
    Ok(())
}

// Answers prefixes read from `input` until end of input.
fn prompt_loop<R: BufRead, W: Write>(
    trie: &TrieString,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(output, "find> ")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("discarding input: {}", e);
                writeln!(output, "Try again: input is not valid UTF-8.")?;
                continue;
            }
        };
        let prefix = line.trim_end_matches(&['\r', '\n'][..]);

        let start = Instant::now();
        let results = trie.find_by_prefix(prefix.chars());
        let elapsed = start.elapsed();

        match results {
            Ok(words) => {
                for word in &words {
                    writeln!(output, "{}", String::from_iter(word))?;
                }
                writeln!(
                    output,
                    "Found {} words. Query time about {}s.",
                    words.len(),
                    elapsed.as_secs_f64()
                )?;
            }
            Err(TrieError::InvalidArgument(reason)) => {
                writeln!(output, "Try again: {}.", reason)?
            }
        }
    }
}
