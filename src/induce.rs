// induced placement of suffixes into buckets (first pass, without lcp)
//
// The S* suffixes are seeded in text order, so only their characteristic
// substrings come out sorted; names.rs finishes the S* order.

use crate::bucket::{BucketElement, BucketSet};
use crate::error::Defect;
use crate::suffix_type::{self, SuffixType};

/// put every S* suffix at the back of its bucket, in text order
pub fn seed_s_star(s: &[u8], types: &[SuffixType], buckets: &mut BucketSet) -> Result<(), Defect> {
    for i in suffix_type::s_star_positions(types) {
        buckets.put_back(s[i], BucketElement::new(i, SuffixType::SStar))?;
    }
    Ok(())
}

/// scan buckets front to back in letter order and place the L predecessor
/// of every placed suffix at the front of its bucket
pub fn induce_l(s: &[u8], types: &[SuffixType], buckets: &mut BucketSet) -> Result<(), Defect> {
    for b in 0..buckets.len() {
        for j in 0..buckets.bucket(b).capacity() {
            if let Some(e) = buckets.element(b, j) {
                if e.pos > 0 && types[e.pos - 1] == SuffixType::L {
                    let i = e.pos - 1;
                    buckets.put_front(s[i], BucketElement::new(i, SuffixType::L))?;
                }
            }
        }
    }
    Ok(())
}

/// rewind the back cursors, then scan buckets back to front in reverse
/// letter order and place the S predecessor of every placed suffix at the
/// back of its bucket. S* seeds are overwritten in the process.
pub fn induce_s(s: &[u8], types: &[SuffixType], buckets: &mut BucketSet) -> Result<(), Defect> {
    buckets.reset_tails()?;
    for b in (0..buckets.len()).rev() {
        for j in (0..buckets.bucket(b).capacity()).rev() {
            if let Some(e) = buckets.element(b, j) {
                if e.pos > 0 && types[e.pos - 1].is_s() {
                    let i = e.pos - 1;
                    buckets.put_back(s[i], BucketElement::new(i, types[i]))?;
                }
            }
        }
    }
    Ok(())
}

/// the three sweeps in their fixed order
pub fn induced_sort(s: &[u8], types: &[SuffixType], trace: bool) -> Result<BucketSet, Defect> {
    let mut buckets = BucketSet::new(s);
    seed_s_star(s, types, &mut buckets)?;
    if trace {
        log::trace!("S* seeded:\n{}", buckets);
    }
    induce_l(s, types, &mut buckets)?;
    if trace {
        log::trace!("L induced:\n{}", buckets);
    }
    induce_s(s, types, &mut buckets)?;
    if trace {
        log::trace!("S induced:\n{}", buckets);
    }
    Ok(buckets)
}

#[cfg(test)]
fn sorted_by_induction(s: &[u8]) -> Vec<usize> {
    let types = suffix_type::classify(s);
    induced_sort(s, &types, false)
        .unwrap()
        .positions()
        .unwrap()
}

#[test]
fn test_seed_and_induce_l() {
    let s = b"banana$";
    let types = suffix_type::classify(s);
    let mut buckets = BucketSet::new(s);
    seed_s_star(s, &types, &mut buckets).unwrap();
    // text order through put_back: later S* land nearer the front
    assert_eq!(buckets.element(1, 2).map(|e| e.pos), Some(1));
    assert_eq!(buckets.element(1, 1).map(|e| e.pos), Some(3));
    assert_eq!(buckets.element(1, 0), None);
    induce_l(s, &types, &mut buckets).unwrap();
    assert_eq!(buckets.positions(), Some(vec![6, 5, 3, 1, 0, 4, 2]));
}

#[test]
fn test_induced_sort_banana() {
    assert_eq!(sorted_by_induction(b"banana$"), vec![6, 5, 3, 1, 0, 4, 2]);
}

#[test]
fn test_induced_sort_fills_every_slot() {
    for w in (1..=9).flat_map(|len| crate::words::all_words(b"ab", len)) {
        let s = crate::words::with_sentinel(&w);
        let sa = sorted_by_induction(&s);
        let mut seen = sa.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..s.len()).collect::<Vec<_>>());
        // grouped by first letter
        assert!(sa.windows(2).all(|p| s[p[0]] <= s[p[1]]));
    }
}

#[test]
fn test_s_star_sorted_by_substring() {
    for w in (1..=7).flat_map(|len| crate::words::all_words(b"abc", len)) {
        let s = crate::words::with_sentinel(&w);
        let types = suffix_type::classify(&s);
        let stars: Vec<usize> = sorted_by_induction(&s)
            .into_iter()
            .filter(|&i| types[i] == SuffixType::SStar)
            .collect();
        let names: Vec<&[u8]> = stars
            .iter()
            .map(|&i| crate::names::characteristic_substring(&s, &types, i))
            .collect();
        for k in 1..stars.len() {
            // distinct substrings are already in suffix order
            if names[k - 1] != names[k] {
                assert!(s[stars[k - 1]..] < s[stars[k]..]);
                // equal substrings are never split
                assert!(!names[..k - 1].contains(&names[k]));
            }
        }
    }
}

#[test]
fn test_induce_s_keeps_s_star_types() {
    let s = b"aabaabaa$";
    let types = suffix_type::classify(s);
    let buckets = induced_sort(s, &types, false).unwrap();
    let stars: Vec<usize> = buckets
        .iter()
        .flat_map(|b| b.elements())
        .filter(|e| e.kind == SuffixType::SStar)
        .map(|e| e.pos)
        .collect();
    let mut sorted = stars.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![3, 8]);
    assert_eq!(stars[0], 8);
}
