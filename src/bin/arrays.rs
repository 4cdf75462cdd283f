// output arrays of a string

use std::io;
use std::io::prelude::*;

use anyhow::{bail, Result};
use structopt::StructOpt;

use induced_lcp::sa;

#[derive(Debug, StructOpt)]
#[structopt(name = "arrays", about = "output various arrays of a string")]
struct Opt {
    /// Append this character to every line
    #[structopt(long)]
    sentinel: Option<char>,
    #[structopt(long)]
    suffix_array: bool,
    #[structopt(long)]
    rank_array: bool,
    #[structopt(long)]
    lcp_array: bool,
    /// Compare the induced lcp array with Kasai's
    #[structopt(long)]
    check: bool,
}

fn print_array<T: std::fmt::Display>(label: &str, a: &[T]) {
    print!("{}", label);
    for i in a {
        print!("{:>4}", i);
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let sentinel = match opt.sentinel {
        Some(c) if !c.is_ascii() => bail!("sentinel {:?} is not a single byte", c),
        c => c.map(|c| c as u8),
    };
    for line in io::stdin().lock().lines() {
        let mut s = line?.into_bytes();
        s.extend(sentinel);

        let lcp = induced_lcp::calculate_lcp(&s)?;
        let sa = sa::suffix_array(&s);
        let rank = sa::rank_array(&sa);
        if opt.suffix_array {
            print_array("suffix array: ", &sa);
        }
        if opt.rank_array {
            print_array("rank   array: ", &rank);
        }
        if opt.lcp_array {
            print_array("lcp    array: ", &lcp);
        }
        if opt.check && lcp != sa::kasai(&s) {
            bail!("lcp array differs from Kasai's for {}", String::from_utf8_lossy(&s));
        }
    }
    Ok(())
}
