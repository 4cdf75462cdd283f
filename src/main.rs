use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use induced_lcp::{calculate_lcp_with, sa, words, Options};

#[derive(Parser, Debug)]
#[clap(name = "induced_lcp", about = "LCP arrays by induced sorting.")]
struct Args {
    /// Dump the buckets after every sweep.
    #[clap(long)]
    trace: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute DIR/output<k>.txt from DIR/input<k>.txt for k = 1, 2, ...
    Run {
        #[clap(default_value = "tests")]
        directory: PathBuf,

        /// Compare every result with a brute-force computation.
        #[clap(long)]
        verify: bool,
    },
    /// Compare against brute force on random texts.
    Check {
        #[clap(short = 'n', long, default_value = "2000")]
        trials: usize,

        /// Text length, without the sentinel.
        #[clap(short = 'l', long, default_value = "500")]
        size: usize,

        #[clap(short = 'a', long, default_value = "abcdefghijklmnopqrstuvwxy")]
        alphabet: String,

        #[clap(short = 's', long)]
        seed: Option<u64>,

        /// Stop once more than this many texts failed.
        #[clap(long, default_value = "5")]
        max_failures: usize,
    },
}

fn join(lcp: &[usize]) -> String {
    lcp.iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(directory: &Path, verify: bool, options: &Options) -> Result<()> {
    let mut k = 1;
    loop {
        let input = directory.join(format!("input{}.txt", k));
        if !input.exists() {
            break;
        }
        let content = fs::read_to_string(&input)
            .with_context(|| format!("Failed to read the input file {}", input.display()))?;
        let text = content.split_whitespace().next().unwrap_or("").as_bytes();

        let start = Instant::now();
        let lcp = calculate_lcp_with(text, options)
            .with_context(|| format!("Failed to compute the lcp array of {}", input.display()))?;
        let duration = start.elapsed();
        log::info!(
            "{}: length {}, elapsed time = {} sec",
            input.display(),
            text.len(),
            duration.as_secs_f64()
        );

        if verify && lcp != sa::brute_force(text) {
            bail!("Wrong lcp array for {}", input.display());
        }

        let output = directory.join(format!("output{}.txt", k));
        fs::write(&output, join(&lcp))
            .with_context(|| format!("Failed to write the output file {}", output.display()))?;
        k += 1;
    }
    if k == 1 {
        log::warn!("no input1.txt in {}", directory.display());
    }
    Ok(())
}

fn check(
    trials: usize,
    size: usize,
    alphabet: &str,
    seed: Option<u64>,
    max_failures: usize,
    options: &Options,
) -> Result<()> {
    let alphabet = alphabet.as_bytes();
    if alphabet.is_empty() {
        bail!("The alphabet is empty");
    }
    if let Some(&c) = alphabet.iter().find(|&&c| c <= words::SENTINEL) {
        bail!("Letter {:?} is not greater than the sentinel", c as char);
    }
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed = {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut correct = 0;
    let mut failures = 0;
    for _ in 0..trials {
        let text = words::with_sentinel(&words::random_text(&mut rng, size, alphabet));
        let actual = calculate_lcp_with(&text, options)?;
        let expected = sa::brute_force(&text);
        if actual == expected {
            correct += 1;
        } else {
            failures += 1;
            println!("{}", String::from_utf8_lossy(&text));
            println!("actual:   {}", join(&actual));
            println!("expected: {}", join(&expected));
            if failures > max_failures {
                break;
            }
        }
    }
    println!("{}/{}", correct, trials);
    if failures > 0 {
        bail!("{} of the checked texts failed", failures);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.trace { "trace" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let options = Options { trace: args.trace };

    match args.command {
        Command::Run { directory, verify } => run(&directory, verify, &options),
        Command::Check {
            trials,
            size,
            alphabet,
            seed,
            max_failures,
        } => check(trials, size, &alphabet, seed, max_failures, &options),
    }
}
