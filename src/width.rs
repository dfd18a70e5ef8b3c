//! Integer widths of the reduced problem.
//!
//! The reduced string has symbols `0..names` and length `lms_count`. Each is stored in the narrowest
//! width that holds it: unsigned for the symbols, signed for the indices because the sign bit
//! tags entries. Since `names - 1 < lms_count`, the symbol width never exceeds the index width,
//! and the index width never exceeds the width of the level above.
use log::trace;
use std::mem::size_of;

use crate::arena::{Arena, Layout};
use crate::sais::solve;
use crate::{reduce, Index, Symbol};
use contracts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    /// Narrowest unsigned width holding `max`.
    pub(crate) fn for_symbols(max: usize) -> Self {
        let max = max as u64;
        if max <= u8::MAX as u64 {
            Width::W8
        } else if max <= u16::MAX as u64 {
            Width::W16
        } else if max <= u32::MAX as u64 {
            Width::W32
        } else {
            Width::W64
        }
    }

    /// Narrowest signed width holding `max`.
    pub(crate) fn for_indices(max: usize) -> Self {
        let max = max as u64;
        if max <= i8::MAX as u64 {
            Width::W8
        } else if max <= i16::MAX as u64 {
            Width::W16
        } else if max <= i32::MAX as u64 {
            Width::W32
        } else {
            Width::W64
        }
    }
}

/// Solves the reduced problem held in `sa` by recursion and leaves `SA1` in `sa[..lms_count]`.
///
/// Expects the names of the LMS substrings, one based, in their slots after `sa[lms_count]`.
#[debug_requires(0 < names && names < lms_count)]
#[debug_requires(2 * lms_count <= sa.len())]
pub(crate) fn recurse<I: Index>(sa: &mut [I], lms_count: usize, names: usize, depth: usize) {
    use Width::*;

    let symbols = Width::for_symbols(names - 1);
    let indices = Width::for_indices(lms_count);

    trace!(
        "level {}: reduced symbols {:?}, reduced indices {:?}",
        depth,
        symbols,
        indices
    );

    debug_assert!(symbols <= indices);

    match (symbols, indices) {
        (W8, W8) => solve_reduced::<I, u8, i8>(sa, lms_count, names, depth),
        (W8, W16) => solve_reduced::<I, u8, i16>(sa, lms_count, names, depth),
        (W8, W32) => solve_reduced::<I, u8, i32>(sa, lms_count, names, depth),
        (W8, W64) => solve_reduced::<I, u8, i64>(sa, lms_count, names, depth),
        (W16, W16) => solve_reduced::<I, u16, i16>(sa, lms_count, names, depth),
        (W16, W32) => solve_reduced::<I, u16, i32>(sa, lms_count, names, depth),
        (W16, W64) => solve_reduced::<I, u16, i64>(sa, lms_count, names, depth),
        (W32, W32) => solve_reduced::<I, u32, i32>(sa, lms_count, names, depth),
        (W32, W64) => solve_reduced::<I, u32, i64>(sa, lms_count, names, depth),
        _ => solve_reduced::<I, u64, i64>(sa, lms_count, names, depth),
    }
}

fn solve_reduced<I: Index, D: Symbol, J: Index>(
    sa: &mut [I],
    lms_count: usize,
    names: usize,
    depth: usize,
) {
    let n = sa.len();

    reduce::pack_names(sa, lms_count);

    let layout = Layout::plan::<I, D, J>(n, lms_count, names);

    trace!(
        "level {}: scratch for {} names {}",
        depth,
        names,
        match (layout.head, layout.locs) {
            (Some(_), Some(_)) => "in buffer",
            (Some(_), None) => "partly in buffer",
            _ => "allocated",
        }
    );

    let mut arena = Arena::new(sa);
    arena.narrow::<I, D>(lms_count * size_of::<I>(), layout.s1.offset, lms_count);

    {
        let carved = arena.carve::<D, J>(&layout);

        let mut own_head = Vec::new();
        let mut own_locs = Vec::new();
        let head = match carved.head {
            Some(head) => head,
            None => {
                own_head.resize(names, J::zero());
                &mut own_head[..]
            }
        };
        let locs = match carved.locs {
            Some(locs) => locs,
            None => {
                own_locs.resize(names, J::zero());
                &mut own_locs[..]
            }
        };

        solve(carved.s1, names, carved.sa1, head, locs, depth + 1);
    }

    arena.widen::<J, I>(lms_count);
}
