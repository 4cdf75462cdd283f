// classification of suffixes into L, S and S* types
use std::cmp::Ordering;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuffixType {
    /// larger than the next suffix
    L,
    /// smaller than the next suffix
    S,
    /// an S suffix whose predecessor is L; these seed the induction
    SStar,
}

impl SuffixType {
    pub fn is_s(self) -> bool {
        match self {
            SuffixType::L => false,
            SuffixType::S | SuffixType::SStar => true,
        }
    }
}

impl fmt::Display for SuffixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixType::L => write!(f, "L"),
            SuffixType::S => write!(f, "S"),
            SuffixType::SStar => write!(f, "S*"),
        }
    }
}

/// compute the type of every suffix of s, scanning right to left.
/// the last suffix is always S.
pub fn classify(s: &[u8]) -> Vec<SuffixType> {
    let mut types = vec![SuffixType::S; s.len()];
    for i in (0..s.len().saturating_sub(1)).rev() {
        types[i] = match s[i].cmp(&s[i + 1]) {
            Ordering::Less => SuffixType::S,
            Ordering::Greater => {
                if types[i + 1].is_s() {
                    types[i + 1] = SuffixType::SStar;
                }
                SuffixType::L
            }
            // i+1 cannot be S* yet, it only gets upgraded once i is known to be L
            Ordering::Equal => types[i + 1],
        };
    }
    types
}

/// positions of the S* suffixes in text order
pub fn s_star_positions(types: &[SuffixType]) -> impl Iterator<Item = usize> + '_ {
    types
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == SuffixType::SStar)
        .map(|(i, _)| i)
}

#[cfg(test)]
fn render(types: &[SuffixType]) -> String {
    types
        .iter()
        .map(|t| match t {
            SuffixType::L => 'L',
            SuffixType::S => 'S',
            SuffixType::SStar => '*',
        })
        .collect()
}

#[test]
fn test_classify_banana() {
    assert_eq!(render(&classify(b"banana$")), "L*L*LL*");
    assert_eq!(
        s_star_positions(&classify(b"banana$")).collect::<Vec<_>>(),
        vec![1, 3, 6]
    );
}

#[test]
fn test_classify_runs() {
    assert_eq!(render(&classify(b"aaaa$")), "LLLL*");
    assert_eq!(render(&classify(b"aabaabaa$")), "SSL*SLLL*");
    assert_eq!(render(&classify(b"mmiissiissiippii$")), "LL*SLL*SLL*SLLLL*");
}

#[test]
fn test_classify_single() {
    assert_eq!(classify(b"$"), vec![SuffixType::S]);
    assert!(classify(b"").is_empty());
}

#[test]
fn test_s_star_never_adjacent() {
    for w in (1..=7).flat_map(|len| crate::words::all_words(b"abc", len)) {
        let s = crate::words::with_sentinel(&w);
        let types = classify(&s);
        assert!(types[s.len() - 1].is_s());
        let stars: Vec<usize> = s_star_positions(&types).collect();
        for p in stars.windows(2) {
            assert!(p[1] - p[0] >= 2);
            assert!((p[0] + 1..p[1]).any(|i| types[i] == SuffixType::L));
        }
    }
}
