// induction of the lcp array (second pass)
//
// The sweeps of induce.rs are repeated with the S* suffixes seeded in their
// final order, so every bucket ends up in suffix order. Each slot carries the
// lcp with its left neighbor inside the bucket; the first slot of a bucket
// is 0 since it differs from the previous bucket in the first letter.
//
// Two suffixes placed one after another into the same bucket share their
// first letter, so their lcp is one more than the lcp of the suffixes that
// induced them. Those inducers were already scanned, and the lcp between
// them is the minimum over the slots strictly after the smaller one up to
// the larger one. Slots that are still empty are skipped: during the L sweep
// the only gaps are S suffixes between two S*, whose lcp the later S* already
// covers. The only values computed by direct comparison are the S* lcps and
// the seam between the L and S part of a bucket.

use crate::bucket::{BucketElement, BucketSet};
use crate::error::Defect;
use crate::names::Name;
use crate::sa::naive_lcp;
use crate::suffix_type::SuffixType;

/// lcp of the suffixes `a` and `b`, both already placed with all slots
/// between them committed
fn induced_lcp(s: &[u8], buckets: &BucketSet, a: usize, b: usize) -> Result<usize, Defect> {
    if s[a] != s[b] {
        return Ok(0);
    }
    let letter = s[a];
    let bucket = buckets.bucket_of(letter)?;
    let (i, j) = (buckets.find(letter, a)?, buckets.find(letter, b)?);
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    buckets
        .range_min(bucket, lo + 1, hi)
        .ok_or(Defect::EmptyRange { letter })
}

/// seed the S* suffixes, processed from the largest so that put_back leaves
/// them in order, each with the lcp computed while naming
pub fn insert_s_star(s: &[u8], names: &[Name], buckets: &mut BucketSet) -> Result<(), Defect> {
    for name in names.iter().rev() {
        let element = BucketElement::with_lcp(name.pos, SuffixType::SStar, name.lcp);
        buckets.put_back(s[name.pos], element)?;
    }
    Ok(())
}

/// the L part of bucket `b` is final: give its first S* the lcp with the
/// last L suffix (or 0 at the bucket start)
fn update_border_l(s: &[u8], buckets: &mut BucketSet, b: usize) -> Result<(), Defect> {
    let bucket = buckets.bucket(b);
    let back = bucket.back();
    if let Some(first) = bucket.get(back) {
        let lcp = bucket
            .last_front()
            .map_or(0, |last| naive_lcp(s, last.pos, first.pos));
        buckets.set_lcp(b, back, lcp)?;
    }
    Ok(())
}

/// the S part of bucket `b` has just been completed at `slot`: compare it
/// with the last L suffix (or 0 at the bucket start)
fn update_border_s(
    s: &[u8],
    buckets: &mut BucketSet,
    b: usize,
    slot: usize,
) -> Result<(), Defect> {
    let bucket = buckets.bucket(b);
    if let Some(first) = bucket.get(slot) {
        let lcp = match slot {
            0 => 0,
            _ => bucket
                .get(slot - 1)
                .map_or(0, |last| naive_lcp(s, last.pos, first.pos)),
        };
        buckets.set_lcp(b, slot, lcp)?;
    }
    Ok(())
}

/// induce the L suffixes front to back, with their lcps
pub fn insert_l(s: &[u8], types: &[SuffixType], buckets: &mut BucketSet) -> Result<(), Defect> {
    for b in 0..buckets.len() {
        for j in 0..buckets.bucket(b).capacity() {
            // nothing beyond the front cursor can still receive an L suffix
            if j == buckets.bucket(b).head() {
                update_border_l(s, buckets, b)?;
            }
            let p = match buckets.element(b, j) {
                Some(e) if e.pos > 0 && types[e.pos - 1] == SuffixType::L => e.pos,
                _ => continue,
            };
            let i = p - 1;
            let dst = buckets.bucket_of(s[i])?;
            let lcp = match buckets.bucket(dst).last_front() {
                None => 0,
                Some(prev) => 1 + induced_lcp(s, buckets, p, prev.pos + 1)?,
            };
            buckets.put_front(s[i], BucketElement::with_lcp(i, SuffixType::L, lcp))?;
        }
    }
    Ok(())
}

/// induce the S suffixes back to front, with their lcps. A new element's
/// own lcp is only known once its left neighbor arrives, so each insertion
/// completes the lcp of the previous one.
pub fn insert_s(s: &[u8], types: &[SuffixType], buckets: &mut BucketSet) -> Result<(), Defect> {
    buckets.reset_tails()?;
    for b in (0..buckets.len()).rev() {
        for j in (0..buckets.bucket(b).capacity()).rev() {
            let p = match buckets.element(b, j) {
                Some(e) if e.pos > 0 && types[e.pos - 1].is_s() => e.pos,
                _ => continue,
            };
            let i = p - 1;
            let dst = buckets.bucket_of(s[i])?;
            let prev = buckets.bucket(dst).first_back().map(|e| e.pos);
            let slot = buckets.put_back(s[i], BucketElement::new(i, types[i]))?;
            if let Some(prev) = prev {
                let lcp = 1 + induced_lcp(s, buckets, p, prev + 1)?;
                buckets.set_lcp(dst, slot + 1, lcp)?;
            }
            if slot == buckets.bucket(dst).head() {
                update_border_s(s, buckets, dst, slot)?;
            }
        }
    }
    Ok(())
}

/// the second pass: buckets in final suffix order with every lcp set
pub fn induce_lcp(
    s: &[u8],
    types: &[SuffixType],
    names: &[Name],
    trace: bool,
) -> Result<BucketSet, Defect> {
    let mut buckets = BucketSet::new(s);
    insert_s_star(s, names, &mut buckets)?;
    if trace {
        log::trace!("S* placed with lcp:\n{}", buckets);
    }
    insert_l(s, types, &mut buckets)?;
    if trace {
        log::trace!("L placed with lcp:\n{}", buckets);
    }
    insert_s(s, types, &mut buckets)?;
    if trace {
        log::trace!("S placed with lcp:\n{}", buckets);
    }
    Ok(buckets)
}

#[cfg(test)]
fn induce_for(s: &[u8]) -> BucketSet {
    let types = crate::suffix_type::classify(s);
    let first = crate::induce::induced_sort(s, &types, false).unwrap();
    let names = crate::names::build(s, &types, &first);
    induce_lcp(s, &types, &names, false).unwrap()
}

#[test]
fn test_induce_banana() {
    let buckets = induce_for(b"banana$");
    assert_eq!(buckets.positions(), Some(vec![6, 5, 3, 1, 0, 4, 2]));
    assert_eq!(buckets.into_lcp(), Ok(vec![0, 0, 1, 3, 0, 0, 2]));
}

#[test]
fn test_l_sweep_banana() {
    let s = b"banana$";
    let types = crate::suffix_type::classify(s);
    let first = crate::induce::induced_sort(s, &types, false).unwrap();
    let names = crate::names::build(s, &types, &first);
    let mut buckets = BucketSet::new(s);
    insert_s_star(s, &names, &mut buckets).unwrap();
    // ana$ borders the previous bucket, anana$ shares "ana" with it
    assert_eq!(buckets.element(1, 1).and_then(|e| e.lcp), Some(0));
    assert_eq!(buckets.element(1, 2).and_then(|e| e.lcp), Some(3));
    insert_l(s, &types, &mut buckets).unwrap();
    // seam: a$ | ana$
    assert_eq!(buckets.element(1, 1).and_then(|e| e.lcp), Some(1));
    // na$ after nothing, nana$ after na$
    assert_eq!(buckets.element(3, 0).and_then(|e| e.lcp), Some(0));
    assert_eq!(buckets.element(3, 1).and_then(|e| e.lcp), Some(2));
}

#[test]
fn test_final_order_is_suffix_array() {
    for w in (1..=8).flat_map(|len| crate::words::all_words(b"abc", len)) {
        let s = crate::words::with_sentinel(&w);
        let buckets = induce_for(&s);
        assert_eq!(buckets.positions(), Some(crate::sa::naive_suffix_array(&s)));
        assert_eq!(buckets.into_lcp(), Ok(crate::sa::brute_force(&s)));
    }
}

#[test]
fn test_s_seam_with_l_run() {
    // bucket b holds L suffixes (ba$, bba$) before the S suffixes (bbc.., bc..)
    let s = b"cbbcbcbba$";
    assert_eq!(induce_for(s).into_lcp(), Ok(crate::sa::brute_force(s)));
}

#[test]
fn test_induced_lcp_requires_placement() {
    let s = b"aab$";
    let buckets = BucketSet::new(s);
    assert_eq!(induced_lcp(s, &buckets, 0, 2), Ok(0));
    assert_eq!(
        induced_lcp(s, &buckets, 0, 1),
        Err(Defect::NotPlaced { position: 0 })
    );
}
