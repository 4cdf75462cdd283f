// error kinds of the lcp computation
use std::fmt;

/// Failure of [`crate::calculate_lcp`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The text has no characters at all.
    EmptyInput,
    /// The last byte is not strictly smaller than every other byte;
    /// `position` is the first offending byte.
    MissingSentinel { sentinel: u8, position: usize },
    /// An internal invariant broke. This is a bug, not bad input.
    Defect(Defect),
}

/// Internal invariant violations. Bucket capacities are derived from the
/// text itself, so none of these can be caused by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Defect {
    /// A cursor would have written into the opposite end's region.
    BucketFull { letter: u8, capacity: usize },
    /// No bucket exists for the letter.
    NoBucket { letter: u8 },
    /// Reverse lookup of a suffix that is not in its bucket.
    NotPlaced { position: usize },
    /// An lcp was written to a slot that holds no suffix.
    EmptySlot { letter: u8, slot: usize },
    /// A slot was left without an lcp value.
    UnsetLcp { letter: u8, slot: usize },
    /// A range-minimum query saw no committed value.
    EmptyRange { letter: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "input is empty"),
            Error::MissingSentinel { sentinel, position } => write!(
                f,
                "last byte {:?} is not a sentinel: it is not smaller than the byte at position {}",
                *sentinel as char, position
            ),
            Error::Defect(d) => write!(f, "internal defect: {}", d),
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::BucketFull { letter, capacity } => write!(
                f,
                "bucket {:?} is full (capacity {})",
                *letter as char, capacity
            ),
            Defect::NoBucket { letter } => {
                write!(f, "could not find bucket with letter {:?}", *letter as char)
            }
            Defect::NotPlaced { position } => {
                write!(f, "suffix {} has not been placed", position)
            }
            Defect::EmptySlot { letter, slot } => write!(
                f,
                "slot {} of bucket {:?} is empty",
                slot, *letter as char
            ),
            Defect::UnsetLcp { letter, slot } => write!(
                f,
                "slot {} of bucket {:?} has no lcp",
                slot, *letter as char
            ),
            Defect::EmptyRange { letter } => write!(
                f,
                "empty range minimum query in bucket {:?}",
                *letter as char
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Defect(d) => Some(d),
            _ => None,
        }
    }
}

impl std::error::Error for Defect {}

impl From<Defect> for Error {
    fn from(d: Defect) -> Self {
        Error::Defect(d)
    }
}

#[test]
fn test_display() {
    let e = Error::MissingSentinel {
        sentinel: b'$',
        position: 2,
    };
    assert_eq!(
        e.to_string(),
        "last byte '$' is not a sentinel: it is not smaller than the byte at position 2"
    );
    let e: Error = Defect::NoBucket { letter: b'q' }.into();
    assert_eq!(
        e.to_string(),
        "internal defect: could not find bucket with letter 'q'"
    );
}
