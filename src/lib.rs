//! LCP arrays by induced sorting.
//!
//! The text must end in a sentinel: a last byte strictly smaller than every
//! other byte. The suffixes are sorted into per-letter buckets twice. The
//! first pass names the S* suffixes, the second places every suffix in its
//! final order and derives the lcp of each with its predecessor along the
//! way.
//!
//! ```
//! let lcp = induced_lcp::calculate_lcp(b"banana$").unwrap();
//! assert_eq!(lcp, vec![0, 0, 1, 3, 0, 0, 2]);
//! ```

pub mod bucket;
pub mod error;
pub mod induce;
pub mod lcp;
pub mod names;
pub mod sa;
pub mod suffix_type;
pub mod words;

pub use error::{Defect, Error};

/// Switches of the computation.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// dump the buckets after every sweep at trace level
    pub trace: bool,
}

/// lcp array of `text` in suffix order: entry i is the lcp of the i-th
/// smallest suffix with the (i-1)-th, the first entry is 0.
pub fn calculate_lcp(text: &[u8]) -> Result<Vec<usize>, Error> {
    calculate_lcp_with(text, &Options::default())
}

pub fn calculate_lcp_with(text: &[u8], options: &Options) -> Result<Vec<usize>, Error> {
    check_sentinel(text)?;
    if text.len() == 1 {
        return Ok(vec![0]);
    }
    let types = suffix_type::classify(text);
    let first = induce::induced_sort(text, &types, options.trace)?;
    let names = names::build(text, &types, &first);
    let buckets = lcp::induce_lcp(text, &types, &names, options.trace)?;
    if options.trace {
        log::trace!("final:\n{}", buckets);
    }
    let lcp = buckets.into_lcp()?;
    log::debug!(
        "lcp of {} suffixes, {} S*, max {}",
        text.len(),
        names.len(),
        lcp.iter().max().copied().unwrap_or(0)
    );
    Ok(lcp)
}

fn check_sentinel(text: &[u8]) -> Result<(), Error> {
    let (&sentinel, rest) = text.split_last().ok_or(Error::EmptyInput)?;
    match rest.iter().position(|&c| c <= sentinel) {
        Some(position) => Err(Error::MissingSentinel { sentinel, position }),
        None => Ok(()),
    }
}

#[test]
fn test_invalid_input() {
    assert_eq!(calculate_lcp(b""), Err(Error::EmptyInput));
    assert_eq!(
        calculate_lcp(b"banana"),
        Err(Error::MissingSentinel {
            sentinel: b'a',
            position: 1
        })
    );
    assert_eq!(
        calculate_lcp(b"ab$$"),
        Err(Error::MissingSentinel {
            sentinel: b'$',
            position: 2
        })
    );
}

#[test]
fn test_single_sentinel() {
    assert_eq!(calculate_lcp(b"$"), Ok(vec![0]));
    assert_eq!(calculate_lcp(&[0]), Ok(vec![0]));
}

#[test]
fn test_known_arrays() {
    assert_eq!(calculate_lcp(b"banana$"), Ok(vec![0, 0, 1, 3, 0, 0, 2]));
    assert_eq!(calculate_lcp(b"aaaa$"), Ok(vec![0, 0, 1, 2, 3]));
    assert_eq!(calculate_lcp(b"a$"), Ok(vec![0, 0]));
    let s = b"aabaabaa$";
    assert_eq!(calculate_lcp(s), Ok(sa::brute_force(s)));
}

#[test]
fn test_word_families() {
    for i in 0..12 {
        for w in [
            words::fibonacci(i),
            words::thue_morse(i.min(9)),
            words::period_doubling(i),
        ] {
            let s = words::with_sentinel(&w);
            assert_eq!(calculate_lcp(&s), Ok(sa::kasai(&s)));
        }
    }
}

#[test]
fn test_exhaustive_small() {
    for w in (1..=9).flat_map(|len| words::all_words(b"ab", len)) {
        let s = words::with_sentinel(&w);
        assert_eq!(calculate_lcp(&s), Ok(sa::brute_force(&s)));
    }
    for w in (1..=7).flat_map(|len| words::all_words(b"abc", len)) {
        let s = words::with_sentinel(&w);
        assert_eq!(calculate_lcp(&s), Ok(sa::brute_force(&s)));
    }
}

#[test]
fn test_trace_does_not_change_result() {
    let s = b"mmiissiissiippii$";
    let traced = calculate_lcp_with(s, &Options { trace: true });
    assert_eq!(traced, calculate_lcp(s));
    assert_eq!(traced, Ok(sa::brute_force(s)));
}
