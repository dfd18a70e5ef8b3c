//! Burrows-Wheeler transform over the suffix array.
//!
//! The rotations of `text$` are sorted with the sentinel `$` smaller than every byte; their last
//! column, with the `$` row removed, is the encoded text. The rotation pointer is the row where the
//! `$` was, which is also the row just after the rotation starting at position 0.
//!
//! # Example
//! ```
//! use sais::bwt;
//!
//! let encoded = bwt::transform(b"abracadabra").unwrap();
//! let decoded = bwt::decode(encoded.pointer, &encoded.data).unwrap();
//! assert_eq!(decoded, b"abracadabra");
//! ```
use crate::{max_len, suffix_array32, suffix_array64, Error, Index};

/// Encoded bytes together with the rotation pointer needed to invert them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bwt {
    pub data: Vec<u8>,
    pub pointer: usize,
}

/// Encodes `text` into `encoded` using its suffix array `sa`; returns the rotation pointer.
///
/// The pointer lies in `1..=text.len()`.
pub fn encode_into<I: Index>(text: &[u8], sa: &[I], encoded: &mut [u8]) -> Result<usize, Error> {
    let n = text.len();
    if n == 0 {
        return Err(Error::Empty);
    }

    for len in [sa.len(), encoded.len()] {
        if len != n {
            return Err(Error::LengthMismatch {
                expected: n,
                actual: len,
            });
        }
    }

    if sa.iter().any(|e| *e < I::zero() || e.to_u() >= n)
        || sa.iter().filter(|e| e.is_zero()).count() != 1
    {
        return Err(Error::NotASuffixArray);
    }

    encoded[0] = text[n - 1];

    let mut target = 1;
    let mut pointer = 0;
    for (idx, e) in sa.iter().enumerate() {
        if e.is_zero() {
            pointer = idx + 1;
        } else {
            encoded[target] = text[e.to_u() - 1];
            target += 1;
        }
    }

    Ok(pointer)
}

/// Encodes `text` using its suffix array `sa`.
pub fn encode<I: Index>(text: &[u8], sa: &[I]) -> Result<Bwt, Error> {
    let mut data = vec![0; text.len()];
    let pointer = encode_into(text, sa, &mut data)?;
    Ok(Bwt { data, pointer })
}

/// Builds the suffix array of `text` and encodes it.
pub fn transform(text: &[u8]) -> Result<Bwt, Error> {
    if text.is_empty() {
        return Err(Error::Empty);
    }

    if text.len() <= max_len::<i32>() {
        encode(text, &suffix_array32(text)?)
    } else {
        encode(text, &suffix_array64(text)?)
    }
}

/// Decodes `encoded` with rotation pointer `pointer` into `decoded` by LF-mapping.
///
/// On error `decoded` is left untouched.
pub fn decode_into(pointer: usize, encoded: &[u8], decoded: &mut [u8]) -> Result<(), Error> {
    let n = encoded.len();
    if n == 0 {
        return Err(Error::Empty);
    }

    if decoded.len() != n {
        return Err(Error::LengthMismatch {
            expected: n,
            actual: decoded.len(),
        });
    }

    if pointer == 0 || pointer > n {
        return Err(Error::PointerOutOfRange { pointer, len: n });
    }

    // map[i]: occurrences of encoded[i] before i
    let mut head = [0usize; 256];
    let map = encoded
        .iter()
        .map(|&c| {
            let rank = head[c as usize];
            head[c as usize] += 1;
            rank
        })
        .collect::<Vec<_>>();

    // row 0 is the rotation starting with the sentinel
    (0..head.len()).fold(1, |s, c| {
        let count = head[c];
        head[c] = s;
        s + count
    });

    let mut idx = 0;
    for out in decoded.iter_mut().rev() {
        // rows from the pointer on are shifted by the removed sentinel
        if idx >= pointer {
            idx -= 1;
        }
        let c = encoded[idx];
        *out = c;
        idx = map[idx] + head[c as usize];
    }

    Ok(())
}

/// Decodes `encoded` with rotation pointer `pointer`.
pub fn decode(pointer: usize, encoded: &[u8]) -> Result<Vec<u8>, Error> {
    let mut decoded = vec![0; encoded.len()];
    decode_into(pointer, encoded, &mut decoded)?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive;

    /// Last column of the sorted rotations of `text$`, sentinel row dropped.
    fn by_rotations(text: &[u8]) -> Bwt {
        let n = text.len();
        let mut rows = naive::suffix_array(text);
        rows.insert(0, n);

        let mut data = Vec::new();
        let mut pointer = 0;
        for (row, &start) in rows.iter().enumerate() {
            if start == 0 {
                pointer = row;
            } else {
                data.push(text[start - 1]);
            }
        }
        Bwt { data, pointer }
    }

    #[test]
    fn banana() {
        let sa = suffix_array32(b"banana").unwrap();
        let bwt = encode(b"banana", &sa).unwrap();
        assert_eq!(bwt.data, b"annbaa");
        assert_eq!(bwt.pointer, 4);
        assert_eq!(bwt, by_rotations(b"banana"));

        assert_eq!(decode(4, b"annbaa").unwrap(), b"banana");
    }

    #[test]
    fn baabaabac() {
        let bwt = transform(b"baabaabac").unwrap();
        assert_eq!(bwt, by_rotations(b"baabaabac"));
        assert_eq!(decode(bwt.pointer, &bwt.data).unwrap(), b"baabaabac");
    }

    #[test]
    fn single_byte() {
        let bwt = transform(b"x").unwrap();
        assert_eq!(bwt, Bwt { data: b"x".to_vec(), pointer: 1 });
        assert_eq!(decode(1, b"x").unwrap(), b"x");
    }

    #[test]
    fn encode_rejects() {
        let mut out = [7u8; 3];

        assert_eq!(encode_into::<i32>(b"", &[], &mut []), Err(Error::Empty));
        assert_eq!(
            encode_into(b"abc", &[0i32, 1], &mut out),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            encode_into(b"abc", &[0i32, 1, 2], &mut out[..2]),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            encode_into(b"abc", &[0i32, 0, 1], &mut out),
            Err(Error::NotASuffixArray)
        );
        assert_eq!(
            encode_into(b"abc", &[0i32, 3, 1], &mut out),
            Err(Error::NotASuffixArray)
        );
        assert_eq!(
            encode_into(b"abc", &[-1i32, 0, 1], &mut out),
            Err(Error::NotASuffixArray)
        );
        assert_eq!(out, [7, 7, 7]);
    }

    #[test]
    fn decode_rejects() {
        let mut out = [7u8; 6];

        assert_eq!(decode(1, b""), Err(Error::Empty));
        assert_eq!(
            decode_into(0, b"annbaa", &mut out),
            Err(Error::PointerOutOfRange { pointer: 0, len: 6 })
        );
        assert_eq!(
            decode_into(7, b"annbaa", &mut out),
            Err(Error::PointerOutOfRange { pointer: 7, len: 6 })
        );
        assert_eq!(
            decode_into(4, b"annbaa", &mut out[..5]),
            Err(Error::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(out, [7; 6]);
    }

    #[test]
    fn decode_accepts_every_pointer_in_range() {
        for pointer in 1..=5 {
            assert_eq!(decode(pointer, b"zzazq").unwrap().len(), 5);
        }
    }

    use proptest::collection::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip(s in vec(any::<u8>(), 1..2000)) {
            let bwt = transform(&s).unwrap();
            prop_assert_eq!(decode(bwt.pointer, &bwt.data).unwrap(), s);
        }

        #[test]
        fn round_trip_small_alphabet(s in vec(b'a'..b'd', 1..2000)) {
            let sa = suffix_array64(&s).unwrap();
            let bwt = encode(&s, &sa).unwrap();
            prop_assert_eq!(&bwt, &by_rotations(&s));
            prop_assert_eq!(decode(bwt.pointer, &bwt.data).unwrap(), s);
        }
    }
}
