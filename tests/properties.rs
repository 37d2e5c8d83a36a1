//! Property tests for the algebraic laws the codepoint-indexed operations
//! must uphold on arbitrary well-formed UTF-8 input.

use quickcheck_macros::quickcheck;
use zstring::ZString;

fn byte_offset_of_char(s: &str, char_idx: usize) -> usize {
    s.chars().take(char_idx).map(char::len_utf8).sum()
}

/// Constructing from bytes and reading the content back is the identity.
#[quickcheck]
fn construction_roundtrip(s: String) -> bool {
    let z = ZString::from_utf8(s.clone().into_bytes()).unwrap();
    z.as_str() == s && z.size() == s.len() && z.len() == s.chars().count()
}

/// Inserting `c` at any valid position grows `len` by `c`'s codepoint count
/// and `size` by `c`'s byte length.
#[quickcheck]
fn insert_length_relation(s: String, c: String, at: usize) -> bool {
    let mut z = ZString::from(s.as_str());
    let (len, size) = (z.len(), z.size());
    let at = at % (len + 1);

    z.insert(at, &c).unwrap();
    z.len() == len + c.chars().count() && z.size() == size + c.len()
}

/// Removing the just-inserted range restores the original string.
#[quickcheck]
fn insert_remove_range_inverse(s: String, c: String, at: usize) -> bool {
    let mut z = ZString::from(s.as_str());
    let at = at % (z.len() + 1);

    z.insert(at, &c).unwrap();
    z.remove_range(at, at + c.chars().count()).unwrap();
    z == s.as_str()
}

/// Reversing twice is the identity, and one reversal matches a
/// codepoint-level reference reversal.
#[quickcheck]
fn reverse_involution(s: String) -> bool {
    let mut z = ZString::from(s.as_str());

    z.reverse();
    let reference: String = s.chars().rev().collect();
    if z != reference.as_str() {
        return false;
    }

    z.reverse();
    z == s.as_str()
}

/// Whatever position `find` reports, the needle actually starts there.
#[quickcheck]
fn find_locates_needle(prefix: String, needle: String) -> bool {
    let s = format!("{prefix}{needle}");
    let z = ZString::from(s.as_str());

    match z.find(&needle) {
        // `find` reports the first occurrence, which can precede the seam.
        Some(k) => {
            k <= prefix.chars().count() && s[byte_offset_of_char(&s, k)..].starts_with(&needle)
        }
        None => false,
    }
}

/// Splitting on a delimiter and rejoining with it reconstructs the input,
/// which pins down the empty-token policy for consecutive delimiters.
#[quickcheck]
fn split_rejoin(s: String) -> bool {
    let z = ZString::from(s.as_str());
    let mut tokens: Vec<&str> = Vec::new();
    let mut index = 0;
    while let Some(token) = z.split(",", index) {
        tokens.push(token);
        index += 1;
    }
    tokens.join(",") == s
}

/// `pop` removes exactly the last codepoint until the string is empty.
#[quickcheck]
fn pop_drains_in_reverse_order(s: String) -> bool {
    let mut z = ZString::from(s.as_str());
    let mut popped = Vec::new();
    while let Some(ch) = z.pop() {
        popped.push(ch);
    }
    popped.reverse();
    z.is_empty() && popped.into_iter().collect::<String>() == s
}

/// The owned token equals the borrowed one, with an independent buffer.
#[quickcheck]
fn split_owned_matches_split(s: String, index: usize) -> bool {
    let z = ZString::from(s.as_str());
    let index = index % 8;
    match (z.split(",", index), z.split_owned(",", index).unwrap()) {
        (Some(borrowed), Some(owned)) => owned == borrowed,
        (None, None) => true,
        _ => false,
    }
}
