// per-letter buckets used for induced placement
//
// Every distinct letter of the text owns a fixed array of slots, one per
// occurrence. Slots are filled from the front (L suffixes) and from the back
// (S and S* suffixes) through two independent cursors. A position -> slot
// table locates placed suffixes; it never owns them.

use std::fmt;

use crate::error::Defect;
use crate::suffix_type::SuffixType;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BucketElement {
    pub pos: usize,
    pub kind: SuffixType,
    /// lcp with the left neighbor, `None` until derived
    pub lcp: Option<usize>,
}

impl BucketElement {
    pub fn new(pos: usize, kind: SuffixType) -> Self {
        BucketElement {
            pos,
            kind,
            lcp: None,
        }
    }

    pub fn with_lcp(pos: usize, kind: SuffixType, lcp: usize) -> Self {
        BucketElement {
            pos,
            kind,
            lcp: Some(lcp),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bucket {
    letter: u8,
    slots: Vec<Option<BucketElement>>,
    // next slot written by put_front
    head: usize,
    // first slot written by put_back; equals the capacity while nothing is back-filled
    back: usize,
}

impl Bucket {
    fn new(letter: u8, capacity: usize) -> Self {
        Bucket {
            letter,
            slots: vec![None; capacity],
            head: 0,
            back: capacity,
        }
    }

    pub fn letter(&self) -> u8 {
        self.letter
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// number of front-filled slots; the next put_front goes here
    pub fn head(&self) -> usize {
        self.head
    }

    /// lowest back-filled slot of the current pass, `capacity()` if none
    pub fn back(&self) -> usize {
        self.back
    }

    pub fn get(&self, slot: usize) -> Option<&BucketElement> {
        self.slots.get(slot).and_then(|e| e.as_ref())
    }

    /// the most recent front insertion
    pub fn last_front(&self) -> Option<&BucketElement> {
        match self.head {
            0 => None,
            h => self.get(h - 1),
        }
    }

    /// the most recent back insertion of the current pass
    pub fn first_back(&self) -> Option<&BucketElement> {
        self.get(self.back)
    }

    pub fn elements(&self) -> impl Iterator<Item = &BucketElement> + '_ {
        self.slots.iter().flatten()
    }

    fn full(&self) -> Defect {
        Defect::BucketFull {
            letter: self.letter,
            capacity: self.capacity(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BucketSet {
    buckets: Vec<Bucket>,
    // letter -> index into buckets
    index: [Option<usize>; 256],
    // suffix position -> slot inside the bucket of its first letter
    slot_of: Vec<Option<usize>>,
}

impl BucketSet {
    /// one bucket per distinct letter of s, in increasing letter order,
    /// sized by the letter's frequency
    pub fn new(s: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        for &c in s {
            counts[c as usize] += 1;
        }
        let mut buckets = Vec::new();
        let mut index = [None; 256];
        for (c, &n) in counts.iter().enumerate() {
            if n > 0 {
                index[c] = Some(buckets.len());
                buckets.push(Bucket::new(c as u8, n));
            }
        }
        BucketSet {
            buckets,
            index,
            slot_of: vec![None; s.len()],
        }
    }

    /// number of buckets, i.e. distinct letters
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn bucket(&self, b: usize) -> &Bucket {
        &self.buckets[b]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    pub fn bucket_of(&self, letter: u8) -> Result<usize, Defect> {
        self.index[letter as usize].ok_or(Defect::NoBucket { letter })
    }

    /// element at `slot` of bucket `b`, copied out so the caller may keep
    /// inserting while scanning
    pub fn element(&self, b: usize, slot: usize) -> Option<BucketElement> {
        self.buckets[b].get(slot).copied()
    }

    /// write at the front cursor and advance it, returns the slot
    pub fn put_front(&mut self, letter: u8, element: BucketElement) -> Result<usize, Defect> {
        let b = self.bucket_of(letter)?;
        let bucket = &self.buckets[b];
        if bucket.head >= bucket.back {
            return Err(bucket.full());
        }
        let slot = bucket.head;
        self.store(b, slot, element);
        self.buckets[b].head += 1;
        Ok(slot)
    }

    /// write at the back cursor and retreat it, returns the slot
    pub fn put_back(&mut self, letter: u8, element: BucketElement) -> Result<usize, Defect> {
        let b = self.bucket_of(letter)?;
        let bucket = &self.buckets[b];
        if bucket.back <= bucket.head {
            return Err(bucket.full());
        }
        let slot = bucket.back - 1;
        self.store(b, slot, element);
        self.buckets[b].back = slot;
        Ok(slot)
    }

    fn store(&mut self, b: usize, slot: usize, element: BucketElement) {
        if let Some(old) = self.buckets[b].slots[slot].replace(element) {
            if self.slot_of[old.pos] == Some(slot) {
                self.slot_of[old.pos] = None;
            }
        }
        self.slot_of[element.pos] = Some(slot);
    }

    /// rewind the back cursor of one bucket to its end, keeping the
    /// front-filled slots and the stored elements
    pub fn reset_tail(&mut self, letter: u8) -> Result<(), Defect> {
        let b = self.bucket_of(letter)?;
        let bucket = &mut self.buckets[b];
        bucket.back = bucket.capacity();
        Ok(())
    }

    /// reset_tail for every bucket, at the start of a back-filling pass
    pub fn reset_tails(&mut self) -> Result<(), Defect> {
        let letters: Vec<u8> = self.buckets.iter().map(|b| b.letter).collect();
        for letter in letters {
            self.reset_tail(letter)?;
        }
        Ok(())
    }

    /// slot of suffix `pos` inside the bucket of `letter`
    pub fn find(&self, letter: u8, pos: usize) -> Result<usize, Defect> {
        let b = self.bucket_of(letter)?;
        let slot = self
            .slot_of
            .get(pos)
            .copied()
            .flatten()
            .ok_or(Defect::NotPlaced { position: pos })?;
        match self.buckets[b].get(slot) {
            Some(e) if e.pos == pos => Ok(slot),
            _ => Err(Defect::NotPlaced { position: pos }),
        }
    }

    pub fn set_lcp(&mut self, b: usize, slot: usize, lcp: usize) -> Result<(), Defect> {
        let bucket = &mut self.buckets[b];
        let letter = bucket.letter;
        match bucket.slots.get_mut(slot).and_then(|e| e.as_mut()) {
            Some(e) => {
                e.lcp = Some(lcp);
                Ok(())
            }
            None => Err(Defect::EmptySlot { letter, slot }),
        }
    }

    /// minimum committed lcp over `lo..=hi` of bucket `b`; empty slots and
    /// slots without a value are skipped
    pub fn range_min(&self, b: usize, lo: usize, hi: usize) -> Option<usize> {
        self.buckets[b].slots[lo..=hi]
            .iter()
            .filter_map(|e| e.as_ref().and_then(|e| e.lcp))
            .min()
    }

    /// suffix positions of all slots in letter order; `None` if any slot is empty
    pub fn positions(&self) -> Option<Vec<usize>> {
        self.buckets
            .iter()
            .flat_map(|b| b.slots.iter())
            .map(|e| e.map(|e| e.pos))
            .collect()
    }

    /// concatenate the lcp values of all slots in letter order
    pub fn into_lcp(self) -> Result<Vec<usize>, Defect> {
        let mut res = Vec::with_capacity(self.slot_of.len());
        for bucket in self.buckets.iter() {
            for (slot, e) in bucket.slots.iter().enumerate() {
                match e.and_then(|e| e.lcp) {
                    Some(l) => res.push(l),
                    None => {
                        return Err(Defect::UnsetLcp {
                            letter: bucket.letter,
                            slot,
                        })
                    }
                }
            }
        }
        Ok(res)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "bucket: {}", self.letter as char)?;
        for e in self.slots.iter() {
            match e {
                None => writeln!(f, "  -")?,
                Some(e) => match e.lcp {
                    Some(l) => writeln!(f, "  {} {} {}", e.pos, e.kind, l)?,
                    None => writeln!(f, "  {} {} x", e.pos, e.kind)?,
                },
            }
        }
        Ok(())
    }
}

impl fmt::Display for BucketSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in self.buckets.iter() {
            bucket.fmt(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
use crate::suffix_type::SuffixType::{SStar, L, S};

#[test]
fn test_new_sizes_buckets() {
    let buckets = BucketSet::new(b"banana$");
    let sizes: Vec<(u8, usize)> = buckets
        .iter()
        .map(|b| (b.letter(), b.capacity()))
        .collect();
    assert_eq!(sizes, vec![(b'$', 1), (b'a', 3), (b'b', 1), (b'n', 2)]);
    assert_eq!(buckets.bucket_of(b'n'), Ok(3));
    assert_eq!(buckets.bucket_of(b'z'), Err(Defect::NoBucket { letter: b'z' }));
}

#[test]
fn test_front_and_back() {
    let mut buckets = BucketSet::new(b"banana$");
    assert_eq!(buckets.put_back(b'a', BucketElement::new(1, SStar)), Ok(2));
    assert_eq!(buckets.put_back(b'a', BucketElement::new(3, SStar)), Ok(1));
    assert_eq!(buckets.put_front(b'a', BucketElement::new(5, L)), Ok(0));
    let a = buckets.bucket(1);
    assert_eq!((a.head(), a.back()), (1, 1));
    assert_eq!(a.last_front().map(|e| e.pos), Some(5));
    assert_eq!(a.first_back().map(|e| e.pos), Some(3));
    assert_eq!(buckets.find(b'a', 1), Ok(2));
    assert_eq!(buckets.find(b'a', 5), Ok(0));
    assert_eq!(buckets.positions(), None);
}

#[test]
fn test_capacity_exhausted() {
    let mut buckets = BucketSet::new(b"ab$");
    assert_eq!(buckets.put_front(b'a', BucketElement::new(0, S)), Ok(0));
    let full = Defect::BucketFull {
        letter: b'a',
        capacity: 1,
    };
    assert_eq!(buckets.put_front(b'a', BucketElement::new(0, S)), Err(full.clone()));
    assert_eq!(buckets.put_back(b'a', BucketElement::new(0, S)), Err(full));
}

#[test]
fn test_reset_tail_overwrites_back_region() {
    let mut buckets = BucketSet::new(b"aab$");
    buckets.put_back(b'a', BucketElement::new(0, S)).unwrap();
    buckets.reset_tail(b'a').unwrap();
    assert_eq!(buckets.bucket(1).back(), 2);
    // slot 1 is rewritten, the old occupant is no longer found
    assert_eq!(buckets.put_back(b'a', BucketElement::new(1, S)), Ok(1));
    assert_eq!(buckets.find(b'a', 1), Ok(1));
    assert_eq!(buckets.find(b'a', 0), Err(Defect::NotPlaced { position: 0 }));
    assert_eq!(buckets.put_back(b'a', BucketElement::new(0, S)), Ok(0));
    assert_eq!(buckets.find(b'a', 0), Ok(0));
}

#[test]
fn test_find_unplaced() {
    let buckets = BucketSet::new(b"ab$");
    assert_eq!(buckets.find(b'b', 1), Err(Defect::NotPlaced { position: 1 }));
    assert_eq!(buckets.find(b'c', 1), Err(Defect::NoBucket { letter: b'c' }));
}

#[test]
fn test_range_min_and_lcp() {
    let mut buckets = BucketSet::new(b"aaaa$");
    buckets.put_back(b'$', BucketElement::with_lcp(4, SStar, 0)).unwrap();
    for (i, p) in [3, 2, 1, 0].iter().enumerate() {
        buckets
            .put_front(b'a', BucketElement::with_lcp(*p, L, i))
            .unwrap();
    }
    assert_eq!(buckets.range_min(1, 1, 3), Some(1));
    assert_eq!(buckets.range_min(1, 2, 2), Some(2));
    buckets.set_lcp(1, 0, 7).unwrap();
    assert_eq!(buckets.range_min(1, 0, 0), Some(7));
    buckets.set_lcp(1, 0, 0).unwrap();
    assert_eq!(buckets.positions(), Some(vec![4, 3, 2, 1, 0]));
    assert_eq!(buckets.into_lcp(), Ok(vec![0, 0, 1, 2, 3]));
}

#[test]
fn test_set_lcp_on_empty_slot() {
    let mut buckets = BucketSet::new(b"aab$");
    buckets.put_back(b'a', BucketElement::new(1, S)).unwrap();
    assert_eq!(buckets.set_lcp(1, 1, 2), Ok(()));
    assert_eq!(
        buckets.set_lcp(1, 0, 2),
        Err(Defect::EmptySlot {
            letter: b'a',
            slot: 0
        })
    );
    assert_eq!(buckets.element(1, 0), None);
}

#[test]
fn test_reset_tails_rewinds_every_bucket() {
    let mut buckets = BucketSet::new(b"abab$");
    buckets.put_back(b'a', BucketElement::new(2, S)).unwrap();
    buckets.put_back(b'b', BucketElement::new(3, L)).unwrap();
    buckets.put_back(b'$', BucketElement::new(4, SStar)).unwrap();
    buckets.reset_tails().unwrap();
    let backs: Vec<usize> = buckets.iter().map(|b| b.back()).collect();
    assert_eq!(backs, vec![1, 2, 2]);
    // the stored elements survive the rewind
    assert_eq!(buckets.find(b'a', 2), Ok(1));
}

#[test]
fn test_unset_lcp_is_a_defect() {
    let mut buckets = BucketSet::new(b"a$");
    buckets.put_back(b'$', BucketElement::with_lcp(1, SStar, 0)).unwrap();
    buckets.put_front(b'a', BucketElement::new(0, L)).unwrap();
    assert_eq!(
        buckets.into_lcp(),
        Err(Defect::UnsetLcp {
            letter: b'a',
            slot: 0
        })
    );
}

#[test]
fn test_display() {
    let mut buckets = BucketSet::new(b"a$");
    buckets.put_back(b'$', BucketElement::with_lcp(1, SStar, 0)).unwrap();
    assert_eq!(buckets.to_string(), "bucket: $\n  1 S* 0\nbucket: a\n  -\n");
}
