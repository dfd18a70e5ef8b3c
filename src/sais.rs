use log::debug;

use crate::bucket::fill_heads;
use crate::induce::{put_lms_char, put_lms_suffix, sort_l, sort_l_substr, sort_s, sort_s_substr};
use crate::reduce::{gather_lms, lift, name_lms, put_lms_len, put_unique};
use crate::width::recurse;
use crate::{max_len, Error, Index, Symbol};
use contracts::*;

/// Fills `sa` with the suffix array of `s` over the alphabet `0..alphabet_size`.
///
/// `head` and `locs` are bucket scratch of at least `alphabet_size` entries. The buffer `sa` is
/// reused for every intermediate result of this level and the levels below it.
#[debug_requires(s.len() == sa.len())]
#[debug_requires(head.len() >= alphabet_size && locs.len() >= alphabet_size)]
pub(crate) fn solve<C: Symbol, I: Index>(
    s: &[C],
    alphabet_size: usize,
    sa: &mut [I],
    head: &mut [I],
    locs: &mut [I],
    depth: usize,
) {
    let n = s.len();

    if n < 2 {
        if n == 1 {
            sa[0] = I::zero();
        }
        return;
    }

    // all names equal: suffixes of a unary string sort by decreasing position
    if alphabet_size < 2 {
        sa.iter_mut()
            .enumerate()
            .for_each(|(i, e)| *e = I::of_u(n - 1 - i));
        return;
    }

    let head = &mut head[..alphabet_size];
    let locs = &mut locs[..alphabet_size];

    fill_heads(s, head);

    // Stage 1: sort the LMS substrings
    let lms_count = put_lms_char(s, head, locs, sa);

    sort_l_substr(s, head, locs, sa);

    sort_s_substr(s, head, locs, sa);

    gather_lms(sa, lms_count);

    put_lms_len(s, sa, lms_count);

    let names = name_lms(s, sa, lms_count);

    debug!(
        "level {}: n = {}, alphabet = {}, lms = {}, names = {}",
        depth, n, alphabet_size, lms_count, names
    );

    // Stage 2: sort the LMS suffixes
    if names == lms_count {
        put_unique(sa, lms_count);
    } else {
        recurse(sa, lms_count, names, depth);
    }

    lift(s, sa, lms_count);

    // Stage 3: induce the suffix array from the sorted LMS suffixes
    put_lms_suffix(s, head, locs, sa, lms_count);

    sort_l(s, head, locs, sa);

    sort_s(s, head, locs, sa);
}

/// Reusable bucket scratch for building many suffix arrays over one alphabet.
///
/// # Example
/// ```
/// use sais::Workspace;
///
/// let mut ws = Workspace::<i32>::new(256);
///
/// for text in [&b"banana"[..], b"mississippi"] {
///     let mut sa = vec![0; text.len()];
///     ws.construct(text, &mut sa).unwrap();
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Workspace<I> {
    head: Vec<I>,
    locs: Vec<I>,
}

impl<I: Index> Workspace<I> {
    /// Scratch for texts over the alphabet `0..alphabet_size`.
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            head: vec![I::zero(); alphabet_size],
            locs: vec![I::zero(); alphabet_size],
        }
    }

    /// Number of symbols the scratch is sized for.
    pub fn alphabet_size(&self) -> usize {
        self.head.len()
    }

    /// Construct the suffix array of `text` into `sa`.
    ///
    /// See [`construct`](crate::construct) for the arguments; on error `sa` is left untouched.
    pub fn construct<C: Symbol>(&mut self, text: &[C], sa: &mut [I]) -> Result<(), Error> {
        let n = text.len();

        if sa.len() != n {
            return Err(Error::LengthMismatch {
                expected: n,
                actual: sa.len(),
            });
        }

        let max = max_len::<I>();
        if n > max {
            return Err(Error::TooLong { len: n, max });
        }

        if n < 2 {
            sa.iter_mut().for_each(|e| *e = I::zero());
            return Ok(());
        }

        let alphabet_size = self.alphabet_size();

        if alphabet_size < 2 {
            return Err(Error::AlphabetTooSmall);
        }

        if let Some((position, c)) = text
            .iter()
            .enumerate()
            .find(|(_, c)| c.to_u() >= alphabet_size)
        {
            return Err(Error::SymbolOutOfRange {
                position,
                symbol: c.to_u(),
            });
        }

        solve(text, alphabet_size, sa, &mut self.head, &mut self.locs, 0);

        Ok(())
    }
}
