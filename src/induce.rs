//! Induced placement of suffixes into their buckets.
//!
//! A slot of the suffix array holds either `0` (empty), an index, or a tagged index. A tagged
//! index is its bitwise complement, so it is negative even for index `0`, and marks an entry the
//! current pass must not induce from. Every pass flips the tags it consumes, so entries change
//! meaning between passes without a separate type array.
//!
//! While sorting LMS substrings an entry holds the *predecessor* of the suffix it stands for; in
//! the final passes it holds the suffix itself.
use crate::bucket::{self, clear};
use crate::lms::LmsScan;
use crate::{Index, Symbol};
use contracts::*;

#[inline]
pub(crate) fn tag<I: Index>(v: I) -> I {
    !v
}

#[inline]
pub(crate) fn untag<I: Index>(v: I) -> I {
    !v
}

#[inline]
pub(crate) fn is_tagged<I: Index>(v: I) -> bool {
    v < I::zero()
}

/// Entry for a suffix placed during the L pass; tagged when its predecessor is S-type.
#[inline]
fn l_entry<C: Symbol, I: Index>(s: &[C], odx: usize, act: C) -> I {
    if odx > 0 && s[odx - 1] < act {
        tag(I::of_u(odx))
    } else {
        I::of_u(odx)
    }
}

/// Entry for a suffix placed during the S pass; tagged when it has no S-type predecessor.
#[inline]
fn s_entry<C: Symbol, I: Index>(s: &[C], odx: usize, act: C) -> I {
    if odx == 0 || s[odx - 1] > act {
        tag(I::of_u(odx))
    } else {
        I::of_u(odx)
    }
}

/// Puts the predecessor of each LMS position at the tail of the LMS symbol's bucket.
///
/// Returns the number of LMS positions.
#[debug_requires(s.len() >= 2)]
#[debug_ensures(2 * ret <= s.len())]
pub(crate) fn put_lms_char<C: Symbol, I: Index>(
    s: &[C],
    head: &[I],
    locs: &mut [I],
    sa: &mut [I],
) -> usize {
    clear(sa);

    bucket::load_tails(head, locs, s.len());

    let mut lms_count = 0;

    for lms in LmsScan::new(s) {
        let b = &mut locs[s[lms].to_u()];
        *b = *b - I::one();
        sa[b.to_u()] = I::of_u(lms - 1);
        lms_count += 1;
    }

    lms_count
}

/// Induces the L-type prefixes of the LMS substrings at bucket heads.
///
/// Afterwards only entries whose predecessor is S-type remain, untagged.
pub(crate) fn sort_l_substr<C: Symbol, I: Index>(
    s: &[C],
    head: &[I],
    locs: &mut [I],
    sa: &mut [I],
) {
    let n = s.len();

    bucket::load_heads(head, locs);

    // the sentinel induces suffix n-1, which is L-type
    let mut act = s[n - 1];
    let mut loc = locs[act.to_u()].to_u();
    let odx = n - 2;
    sa[loc] = if s[odx] < act {
        tag(I::of_u(odx))
    } else {
        I::of_u(odx)
    };
    loc += 1;

    for sdx in 0..n {
        let e = sa[sdx];
        if e > I::zero() {
            let p = e.to_u();
            let chk = s[p];
            if chk != act {
                locs[act.to_u()] = I::of_u(loc);
                act = chk;
                loc = locs[act.to_u()].to_u();
            }
            let q = p - 1;
            sa[loc] = if s[q] < act {
                tag(I::of_u(q))
            } else {
                I::of_u(q)
            };
            loc += 1;
            sa[sdx] = I::zero();
        } else if is_tagged(e) {
            sa[sdx] = untag(e);
        }
    }
}

/// Induces the S-type prefixes of the LMS substrings at bucket tails.
///
/// Afterwards only the LMS positions remain, tagged, ordered by their LMS substrings.
pub(crate) fn sort_s_substr<C: Symbol, I: Index>(
    s: &[C],
    head: &[I],
    locs: &mut [I],
    sa: &mut [I],
) {
    let n = s.len();

    bucket::load_tails(head, locs, n);

    let mut act = C::zero();
    let mut loc = locs[0].to_u();

    for sdx in (0..n).rev() {
        let e = sa[sdx];
        if e > I::zero() {
            let p = e.to_u();
            let chk = s[p];
            if chk != act {
                locs[act.to_u()] = I::of_u(loc);
                act = chk;
                loc = locs[act.to_u()].to_u();
            }
            let q = p - 1;
            loc -= 1;
            // p is LMS when its predecessor is L-type
            sa[loc] = if s[q] > act {
                tag(I::of_u(p))
            } else {
                I::of_u(q)
            };
            sa[sdx] = I::zero();
        }
    }
}

/// Moves the sorted LMS suffixes in `sa[..lms_count]` to the tails of their buckets.
///
/// Entries only move right, so the prefix is consumed before it is overwritten.
#[debug_requires(2 * lms_count <= sa.len())]
pub(crate) fn put_lms_suffix<C: Symbol, I: Index>(
    s: &[C],
    head: &[I],
    locs: &mut [I],
    sa: &mut [I],
    lms_count: usize,
) {
    bucket::load_tails(head, locs, s.len());

    let mut lms = lms_count;
    let mut sdx = s.len();

    while lms > 0 {
        let act = s[sa[lms - 1].to_u()];
        let end = locs[act.to_u()].to_u();
        while sdx > end {
            sdx -= 1;
            sa[sdx] = I::zero();
        }
        while lms > 0 && s[sa[lms - 1].to_u()] == act {
            lms -= 1;
            sdx -= 1;
            sa[sdx] = sa[lms];
        }
    }

    clear(&mut sa[..sdx]);
}

/// Induces all L-type suffixes from the LMS suffixes.
///
/// Leaves entries that still induce an S-type predecessor positive and every other entry tagged.
pub(crate) fn sort_l<C: Symbol, I: Index>(s: &[C], head: &[I], locs: &mut [I], sa: &mut [I]) {
    let n = s.len();

    bucket::load_heads(head, locs);

    let odx = n - 1;
    let mut act = s[odx];
    let mut loc = locs[act.to_u()].to_u();
    sa[loc] = l_entry(s, odx, act);
    loc += 1;

    for sdx in 0..n {
        let e = sa[sdx];
        sa[sdx] = !e;
        if e > I::zero() {
            let p = e.to_u() - 1;
            let chk = s[p];
            if chk != act {
                locs[act.to_u()] = I::of_u(loc);
                act = chk;
                loc = locs[act.to_u()].to_u();
            }
            sa[loc] = l_entry(s, p, act);
            loc += 1;
        }
    }
}

/// Induces all S-type suffixes and clears every tag, completing the suffix array.
pub(crate) fn sort_s<C: Symbol, I: Index>(s: &[C], head: &[I], locs: &mut [I], sa: &mut [I]) {
    let n = s.len();

    bucket::load_tails(head, locs, n);

    let mut act = C::zero();
    let mut loc = locs[0].to_u();

    for sdx in (0..n).rev() {
        let e = sa[sdx];
        if e > I::zero() {
            let p = e.to_u() - 1;
            let chk = s[p];
            if chk != act {
                locs[act.to_u()] = I::of_u(loc);
                act = chk;
                loc = locs[act.to_u()].to_u();
            }
            loc -= 1;
            sa[loc] = s_entry(s, p, act);
        } else {
            sa[sdx] = untag(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::fill_heads;

    #[test]
    fn tag_roundtrip_includes_zero() {
        for v in [0i32, 1, 7, i32::MAX] {
            assert!(is_tagged(tag(v)));
            assert_eq!(untag(tag(v)), v);
        }
        assert_eq!(tag(0i8), -1);
        assert!(!is_tagged(0i64));
    }

    #[test]
    fn step_by_step() {
        // 01234567890
        // abracadabra
        // SSLSLSLSSLL
        // LMS = 3, 5, 7
        let s = b"abracadabra";
        let n = s.len();

        let mut head = vec![0i32; 256];
        let mut locs = vec![0i32; 256];
        let mut sa = vec![0i32; n];

        fill_heads(s, &mut head);

        let lms_count = put_lms_char(s, &head, &mut locs, &mut sa);
        assert_eq!(lms_count, 3);
        // bucket a = 0..5, predecessors of 3, 5, 7 sorted by text position
        assert_eq!(sa, vec![0, 0, 2, 4, 6, 0, 0, 0, 0, 0, 0]);

        sort_l_substr(s, &head, &mut locs, &mut sa);
        sort_s_substr(s, &head, &mut locs, &mut sa);

        let mut lms = sa
            .iter()
            .filter(|e| is_tagged(**e))
            .map(|e| untag(*e))
            .collect::<Vec<_>>();
        assert_eq!(lms.len(), 3);
        // substrings "abra", "aca", "ada" are distinct
        assert_eq!(lms, vec![7, 3, 5]);

        lms.resize(n, 0);
        let mut sa = lms;
        put_lms_suffix(s, &head, &mut locs, &mut sa, lms_count);
        assert_eq!(sa, vec![0, 0, 7, 3, 5, 0, 0, 0, 0, 0, 0]);

        sort_l(s, &head, &mut locs, &mut sa);
        sort_s(s, &head, &mut locs, &mut sa);
        assert_eq!(sa, vec![10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
    }
}
