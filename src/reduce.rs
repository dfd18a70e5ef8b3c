//! Naming of the sorted LMS substrings and the reduced problem built from the names.
//!
//! The reduction lives in `sa` itself. The sorted LMS positions fill `sa[..m]`, and the per-LMS
//! data (lengths, then names) lives at `sa[m + pos / 2]`. That slot is unique per LMS position
//! because no two LMS positions are adjacent, and `m + ceil(n / 2) <= n` holds because `2m <= n`.
use crate::induce::{is_tagged, untag};
use crate::lms::LmsScan;
use crate::{Index, Symbol};
use contracts::*;

/// Number of slots after `sa[m]` that may hold per-LMS data.
#[inline]
fn bound(n: usize) -> usize {
    (n + 1) / 2
}

/// Compacts the tagged LMS positions left by the substring sort into `sa[..lms_count]`.
pub(crate) fn gather_lms<I: Index>(sa: &mut [I], lms_count: usize) {
    let n = sa.len();

    let mut lms = 0;
    while lms < n && is_tagged(sa[lms]) {
        sa[lms] = untag(sa[lms]);
        lms += 1;
    }

    if lms < lms_count {
        for sdx in lms + 1..n {
            let e = sa[sdx];
            if is_tagged(e) {
                sa[lms] = untag(e);
                lms += 1;
                sa[sdx] = I::zero();
            }
        }
    }

    debug_assert_eq!(lms, lms_count);
}

/// Stores at `sa[m + pos / 2]` the distance from each LMS position to the next one, or to the end
/// of the text for the last one.
#[debug_requires(2 * lms_count <= s.len())]
pub(crate) fn put_lms_len<C: Symbol, I: Index>(s: &[C], sa: &mut [I], lms_count: usize) {
    let mut next = s.len();
    for lms in LmsScan::new(s) {
        sa[lms_count + (lms >> 1)] = I::of_u(next - lms);
        next = lms;
    }
}

/// Walks the LMS positions in substring order and replaces each stored length by a name.
///
/// Names start at 1 so that an empty slot stays distinguishable. Returns the number of names.
#[debug_requires(2 * lms_count <= s.len())]
#[debug_ensures(ret <= lms_count)]
pub(crate) fn name_lms<C: Symbol, I: Index>(s: &[C], sa: &mut [I], lms_count: usize) -> usize {
    let mut name = 0;

    let mut prv_pos = s.len();
    let mut prv_len = 0;

    for lms in 0..lms_count {
        let cur_pos = sa[lms].to_u();
        let slot = lms_count + (cur_pos >> 1);
        let cur_len = sa[slot].to_u();

        // every LMS substring has length two or more, so the first one always differs
        let same = cur_len == prv_len
            && s[cur_pos..cur_pos + cur_len] == s[prv_pos..prv_pos + prv_len];

        if !same {
            name += 1;
            prv_pos = cur_pos;
            prv_len = cur_len;
        }

        sa[slot] = I::of_u(name);
    }

    name
}

/// All names are distinct: the reduced suffix array follows from the names directly.
///
/// Writes `SA1` into `sa[..lms_count]`.
#[debug_requires(2 * lms_count <= sa.len())]
pub(crate) fn put_unique<I: Index>(sa: &mut [I], lms_count: usize) {
    let mut rank = 0;
    for sdx in 0..bound(sa.len()) {
        let name = sa[lms_count + sdx];
        if name > I::zero() {
            sa[name.to_u() - 1] = I::of_u(rank);
            rank += 1;
        }
    }

    debug_assert_eq!(rank, lms_count);
}

/// Packs the names in text order into `sa[lms_count..2 * lms_count]`, zero based.
///
/// This is the reduced string `S1`.
#[debug_requires(2 * lms_count <= sa.len())]
pub(crate) fn pack_names<I: Index>(sa: &mut [I], lms_count: usize) {
    let mut lms = 0;
    for sdx in 0..bound(sa.len()) {
        let name = sa[lms_count + sdx];
        if name > I::zero() {
            sa[lms_count + lms] = name - I::one();
            lms += 1;
        }
    }

    debug_assert_eq!(lms, lms_count);
}

/// Maps `SA1` in `sa[..lms_count]` back to text positions: `sa[i] = P1[SA1[i]]`, where `P1` lists
/// the LMS positions in text order.
#[debug_requires(2 * lms_count <= s.len())]
pub(crate) fn lift<C: Symbol, I: Index>(s: &[C], sa: &mut [I], lms_count: usize) {
    let mut lms = lms_count;
    for pos in LmsScan::new(s) {
        lms -= 1;
        sa[lms_count + lms] = I::of_u(pos);
    }

    for lms in 0..lms_count {
        sa[lms] = sa[lms_count + sa[lms].to_u()];
    }
}
