// reference routines for suffix and lcp arrays
//
// The direct comparisons here back the S* lcps and the seams of the
// induction; the rest serves as an oracle for it.

/// length of the common prefix of the suffixes starting at `a` and `b`
pub fn naive_lcp(s: &[u8], a: usize, b: usize) -> usize {
    s[a..].iter().zip(&s[b..]).take_while(|(x, y)| x == y).count()
}

/// suffix array by sorting all suffixes directly
pub fn naive_suffix_array(s: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..s.len()).collect();
    sa.sort_by(|&a, &b| s[a..].cmp(&s[b..]));
    sa
}

/// lcp array by comparing every pair of neighbors in the sorted order
pub fn brute_force(s: &[u8]) -> Vec<usize> {
    let sa = naive_suffix_array(s);
    let mut lcp = Vec::with_capacity(sa.len());
    for (i, &p) in sa.iter().enumerate() {
        lcp.push(match i {
            0 => 0,
            _ => naive_lcp(s, sa[i - 1], p),
        });
    }
    lcp
}

/// suffix array via libdivsufsort
pub fn suffix_array(s: &[u8]) -> Vec<i32> {
    let mut sa = vec![0; s.len()];
    cdivsufsort::sort_in_place(s, &mut sa);
    sa
}

/// compute rank array, given suffix array
pub fn rank_array(sa: &[i32]) -> Vec<i32> {
    let mut res = vec![0_i32; sa.len()];
    for (i, &p) in sa.iter().enumerate() {
        res[p as usize] = i as i32;
    }
    res
}

/// compute lcp array given suffix and rank arrays via Kasai's algorithm
pub fn lcp_array(s: &[u8], sa: &[i32], rank: &[i32]) -> Vec<i32> {
    let mut lcp = vec![0; s.len()];
    let mut k = 0;
    for i in 0..s.len() {
        let x = rank[i] as usize;
        if x > 0 {
            let y = sa[x - 1] as usize;
            k += naive_lcp(s, i + k, y + k);
            lcp[x] = k as i32;
        }
        k = k.saturating_sub(1);
    }
    lcp
}

/// lcp array through libdivsufsort and Kasai
pub fn kasai(s: &[u8]) -> Vec<usize> {
    let sa = suffix_array(s);
    let rank = rank_array(&sa);
    lcp_array(s, &sa, &rank)
        .into_iter()
        .map(|l| l as usize)
        .collect()
}

#[test]
fn test_naive_lcp() {
    let s = b"banana$";
    assert_eq!(naive_lcp(s, 1, 3), 3);
    assert_eq!(naive_lcp(s, 0, 1), 0);
    assert_eq!(naive_lcp(s, 6, 6), 1);
}

#[test]
fn test_brute_force_banana() {
    let s = b"banana$";
    assert_eq!(naive_suffix_array(s), vec![6, 5, 3, 1, 0, 4, 2]);
    assert_eq!(brute_force(s), vec![0, 0, 1, 3, 0, 0, 2]);
    assert!(brute_force(b"").is_empty());
}

#[test]
fn test_lcp_array() {
    let s = crate::words::thue_morse(3);
    let sa = suffix_array(&s);
    let rank = rank_array(&sa);
    let lcp = lcp_array(&s, &sa, &rank);
    assert_eq!(lcp, vec![0, 1, 2, 2, 0, 1, 2, 1]);
    assert_eq!(brute_force(&s), vec![0, 1, 2, 2, 0, 1, 2, 1]);
}

#[test]
fn test_kasai_agrees_with_brute_force() {
    for w in (1..=7).flat_map(|len| crate::words::all_words(b"abc", len)) {
        let s = crate::words::with_sentinel(&w);
        let sa: Vec<usize> = suffix_array(&s).into_iter().map(|p| p as usize).collect();
        assert_eq!(sa, naive_suffix_array(&s));
        assert_eq!(kasai(&s), brute_force(&s));
    }
}
