// naming of S* suffixes and their final relative order
//
// Each S* suffix is named by its characteristic substring: from the suffix
// start up to and including the next S* position (or the end of the text).
// After the first induced sort, equal names sit next to each other and
// distinct names are already in suffix order. Runs of equal names
// (categories) are ordered by comparing the whole suffixes directly instead
// of recursing on a reduced text. This is quadratic in the worst case
// (many long equal names) but keeps the order easy to verify.

use std::ops::Range;

use crate::bucket::BucketSet;
use crate::sa::naive_lcp;
use crate::suffix_type::SuffixType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    pub pos: usize,
    /// one past the end of the characteristic substring
    pub end: usize,
    /// lcp with the preceding S* suffix, valid once ordered by `build`
    pub lcp: usize,
}

impl Name {
    pub fn new(s: &[u8], types: &[SuffixType], pos: usize) -> Self {
        Name {
            pos,
            end: pos + characteristic_substring(s, types, pos).len(),
            lcp: 0,
        }
    }

    pub fn substring<'a>(&self, s: &'a [u8]) -> &'a [u8] {
        &s[self.pos..self.end]
    }
}

/// the characteristic substring of the S* suffix at `pos`
pub fn characteristic_substring<'a>(s: &'a [u8], types: &[SuffixType], pos: usize) -> &'a [u8] {
    let end = (pos + 1..s.len())
        .find(|&j| types[j] == SuffixType::SStar)
        .map_or(s.len(), |j| j + 1);
    &s[pos..end]
}

/// S* suffixes in the order the induced sort left them in the buckets
pub fn collect(s: &[u8], types: &[SuffixType], buckets: &BucketSet) -> Vec<Name> {
    buckets
        .iter()
        .flat_map(|b| b.elements())
        .filter(|e| e.kind == SuffixType::SStar)
        .map(|e| Name::new(s, types, e.pos))
        .collect()
}

/// maximal runs of names with identical characteristic substrings
pub fn categories(s: &[u8], names: &[Name]) -> Vec<Range<usize>> {
    let mut res = Vec::new();
    let mut begin = 0;
    for i in 1..=names.len() {
        if i == names.len() || names[i].substring(s) != names[i - 1].substring(s) {
            res.push(begin..i);
            begin = i;
        }
    }
    res
}

/// order tied names by full suffix comparison, then compute the lcp of
/// every name with its predecessor
pub fn order(s: &[u8], mut names: Vec<Name>) -> Vec<Name> {
    let categories = categories(s, &names);
    for c in categories.iter().filter(|c| c.len() > 1) {
        names[c.clone()].sort_by(|a, b| s[a.pos..].cmp(&s[b.pos..]));
    }
    log::debug!(
        "{} S* suffixes in {} categories, largest {}",
        names.len(),
        categories.len(),
        categories.iter().map(|c| c.len()).max().unwrap_or(0)
    );

    let mut prev = None;
    for name in names.iter_mut() {
        name.lcp = prev.map_or(0, |p| naive_lcp(s, p, name.pos));
        prev = Some(name.pos);
    }
    names
}

/// names of all S* suffixes in final suffix order, with lcps
pub fn build(s: &[u8], types: &[SuffixType], buckets: &BucketSet) -> Vec<Name> {
    order(s, collect(s, types, buckets))
}

#[cfg(test)]
use crate::suffix_type::classify;

#[cfg(test)]
fn names_of(s: &[u8]) -> Vec<Name> {
    let types = classify(s);
    let buckets = crate::induce::induced_sort(s, &types, false).unwrap();
    build(s, &types, &buckets)
}

#[test]
fn test_characteristic_substring() {
    let s = b"banana$";
    let types = classify(s);
    assert_eq!(characteristic_substring(s, &types, 1), b"ana");
    assert_eq!(characteristic_substring(s, &types, 3), b"ana$");
    assert_eq!(characteristic_substring(s, &types, 6), b"$");
    assert_eq!(Name::new(s, &types, 3).substring(s), b"ana$");
}

#[test]
fn test_build_banana() {
    let names = names_of(b"banana$");
    let order: Vec<(usize, usize)> = names.iter().map(|n| (n.pos, n.lcp)).collect();
    // $, ana$, anana$
    assert_eq!(order, vec![(6, 0), (3, 0), (1, 3)]);
}

#[test]
fn test_categories() {
    let s = b"aabaabaabaabaa$";
    let types = classify(s);
    let names: Vec<Name> = [14, 9, 3, 6]
        .iter()
        .map(|&i| Name::new(s, &types, i))
        .collect();
    assert_eq!(names[1].substring(s), b"aabaa$");
    assert_eq!(names[2].substring(s), b"aaba");
    assert_eq!(names[3].substring(s), b"aaba");
    assert_eq!(categories(s, &names), vec![0..1, 1..2, 2..4]);
    assert!(categories(s, &[]).is_empty());
}

#[test]
fn test_tied_names_ordered_by_suffix() {
    let names = names_of(b"aabaabaabaabaa$");
    let got: Vec<(usize, usize)> = names.iter().map(|n| (n.pos, n.lcp)).collect();
    // $ < aabaa$ < aabaabaa$ < aabaabaabaa$
    assert_eq!(got, vec![(14, 0), (9, 0), (6, 5), (3, 8)]);
}

#[test]
fn test_order_matches_suffix_order() {
    for w in (1..=8).flat_map(|len| crate::words::all_words(b"ab", len)) {
        let s = crate::words::with_sentinel(&w);
        let types = classify(&s);
        let expected: Vec<usize> = crate::sa::naive_suffix_array(&s)
            .into_iter()
            .filter(|&i| types[i] == SuffixType::SStar)
            .collect();
        let names = names_of(&s);
        assert_eq!(names.iter().map(|n| n.pos).collect::<Vec<_>>(), expected);
        assert_eq!(names[0].lcp, 0);
        for p in names.windows(2) {
            assert_eq!(p[1].lcp, naive_lcp(&s, p[0].pos, p[1].pos));
        }
    }
}
