use quickcheck::quickcheck;
use rand::rngs::StdRng;
use rand::SeedableRng;

use induced_lcp::{calculate_lcp, sa, words};

fn to_text(bytes: &[u8]) -> Vec<u8> {
    let w: Vec<u8> = bytes.iter().map(|b| b'a' + b % 4).collect();
    words::with_sentinel(&w)
}

quickcheck! {
    fn prop_matches_brute_force(bytes: Vec<u8>) -> bool {
        let s = to_text(&bytes);
        calculate_lcp(&s) == Ok(sa::brute_force(&s))
    }

    fn prop_matches_kasai(bytes: Vec<u8>) -> bool {
        let s = to_text(&bytes);
        calculate_lcp(&s) == Ok(sa::kasai(&s))
    }

    fn prop_length_and_first(bytes: Vec<u8>) -> bool {
        let s = to_text(&bytes);
        match calculate_lcp(&s) {
            Ok(lcp) => lcp.len() == s.len() && lcp[0] == 0 && lcp.iter().all(|&l| l < s.len()),
            Err(_) => false,
        }
    }
}

#[test]
fn random_batch() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let w = words::random_text(&mut rng, 500, b"abcdefghijklmnopqrstuvwxy");
        let s = words::with_sentinel(&w);
        assert_eq!(calculate_lcp(&s), Ok(sa::kasai(&s)));
    }
}

#[test]
fn random_batch_small_alphabet() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in 0..300 {
        let w = words::random_text(&mut rng, len, b"ab");
        let s = words::with_sentinel(&w);
        assert_eq!(calculate_lcp(&s), Ok(sa::brute_force(&s)));
    }
}

#[test]
fn deterministic() {
    let s = words::with_sentinel(&words::fibonacci(12));
    assert_eq!(calculate_lcp(&s), calculate_lcp(&s));
}

#[test]
fn sentinel_may_be_any_minimum() {
    // the lcp array depends only on the order of the letters
    assert_eq!(calculate_lcp(b"BANANA!"), calculate_lcp(b"banana$"));
    assert_eq!(calculate_lcp(&[2, 1, 3, 1, 3, 1, 0]), calculate_lcp(b"banana$"));
    assert_eq!(calculate_lcp(b"NDXDXD!"), calculate_lcp(b"banana$"));
    // same shape, different letter order
    assert_eq!(calculate_lcp(&[2, 1, 2, 1, 2, 1, 0]), Ok(vec![0, 0, 1, 3, 0, 2, 4]));
}
