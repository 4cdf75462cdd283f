// word families and generators used to exercise the lcp induction
use rand::Rng;

/// sentinel used by the generators; smaller than every letter they produce
pub const SENTINEL: u8 = b'$';

/// append the sentinel
pub fn with_sentinel(w: &[u8]) -> Vec<u8> {
    let mut s = w.to_vec();
    s.push(SENTINEL);
    s
}

// Fibonacci words
// 0 : b
// 1 : a
// i : f(i-1) f(i-2)
pub fn fibonacci(i: usize) -> Vec<u8> {
    let (mut prev, mut cur) = (b"b".to_vec(), b"a".to_vec());
    if i == 0 {
        return prev;
    }
    for _ in 1..i {
        let next = [cur.as_slice(), prev.as_slice()].concat();
        prev = std::mem::replace(&mut cur, next);
    }
    cur
}

// ith Thue-Morse word
// 0: a, 1: ab, 2: abba
pub fn thue_morse(i: usize) -> Vec<u8> {
    let mut res = vec![b'a'];
    for _ in 0..i {
        let flipped: Vec<u8> = res
            .iter()
            .map(|&c| if c == b'a' { b'b' } else { b'a' })
            .collect();
        res.extend(flipped);
    }
    res
}

// ith period-doubling word
// 0: a, 1: ab, 2: abaa
pub fn period_doubling(i: usize) -> Vec<u8> {
    let mut res = vec![b'a'];
    if i == 0 {
        return res;
    }
    res.push(b'b');
    for _ in 1..i {
        let l = res.len();
        for j in l / 2..l {
            res.push(b'a');
            res.push(if res[j] == b'a' { b'b' } else { b'a' });
        }
    }
    res
}

/// uniformly random word of length `len`; `alphabet` must not be empty
pub fn random_text<R: Rng>(rng: &mut R, len: usize, alphabet: &[u8]) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn all_words_aux(w: &mut Vec<u8>, alphabet: &[u8], len: usize, out: &mut Vec<Vec<u8>>) {
    if w.len() == len {
        out.push(w.clone());
    } else {
        for &c in alphabet {
            w.push(c);
            all_words_aux(w, alphabet, len, out);
            w.pop();
        }
    }
}

/// all words over `alphabet` of exactly length `len`, in lexicographic
/// order of the alphabet as given
pub fn all_words(alphabet: &[u8], len: usize) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    all_words_aux(&mut Vec::new(), alphabet, len, &mut out);
    out
}

#[test]
fn test_fibonacci() {
    assert_eq!(fibonacci(0), b"b".to_vec());
    assert_eq!(fibonacci(1), b"a".to_vec());
    assert_eq!(fibonacci(2), b"ab".to_vec());
    assert_eq!(fibonacci(3), b"aba".to_vec());
    assert_eq!(fibonacci(4), b"abaab".to_vec());
    assert_eq!(
        fibonacci(10),
        b"abaababaabaababaababaabaababaabaababaababaabaababaababaabaababaabaababaababaabaababaabaab"
            .to_vec()
    );
}

#[test]
fn test_thue_morse() {
    assert_eq!(thue_morse(2), b"abba".to_vec());
    assert_eq!(thue_morse(5), b"abbabaabbaababbabaababbaabbabaab".to_vec());
}

#[test]
fn test_period_doubling() {
    assert_eq!(period_doubling(0), b"a".to_vec());
    assert_eq!(period_doubling(3), b"abaaabab".to_vec());
    assert_eq!(period_doubling(4), b"abaaabababaaabaa".to_vec());
}

#[test]
fn test_all_words() {
    let words = all_words(b"ab", 2);
    assert_eq!(words, vec![b"aa".to_vec(), b"ab".to_vec(), b"ba".to_vec(), b"bb".to_vec()]);
    assert_eq!(all_words(b"abc", 4).len(), 81);
    assert_eq!(all_words(b"ab", 0), vec![Vec::<u8>::new()]);
}

#[test]
fn test_random_text() {
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let w = random_text(&mut rng, 100, b"xyz");
    assert_eq!(w.len(), 100);
    assert!(w.iter().all(|c| b"xyz".contains(c)));
    assert_eq!(with_sentinel(b"ab"), b"ab$".to_vec());
}
