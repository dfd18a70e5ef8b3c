//! Byte-addressed views over the suffix array buffer of one level.
//!
//! The reduced problem of a level is solved inside that level's buffer, at widths that can be
//! narrower than the buffer's own index type. [`Layout`] places the reduced suffix array, the
//! reduced string and the recursive bucket scratch as disjoint byte regions, and [`Arena`] hands
//! them out as typed slices.
use bytemuck::Pod;
use std::mem::{align_of, size_of};

use crate::{Index, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl Region {
    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.offset + self.len
    }

    pub(crate) fn is_disjoint(&self, other: &Region) -> bool {
        self.end() <= other.offset || other.end() <= self.offset
    }
}

#[inline]
fn align_up(offset: usize, align: usize) -> usize {
    (offset + align - 1) / align * align
}

/// Placement of the reduced problem inside a buffer of `total` bytes.
///
/// `head` and `locs` are `None` when they do not fit; the recursive call then allocates them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) sa1: Region,
    pub(crate) s1: Region,
    pub(crate) head: Option<Region>,
    pub(crate) locs: Option<Region>,
    pub(crate) total: usize,
}

impl Layout {
    /// Lays out a reduced problem of `lms_count` symbols over `names` names in a buffer of `n`
    /// entries of `I`; `D` is the reduced symbol type and `J` the reduced index type.
    pub(crate) fn plan<I: Index, D: Symbol, J: Index>(
        n: usize,
        lms_count: usize,
        names: usize,
    ) -> Self {
        let total = n * size_of::<I>();

        let sa1 = Region {
            offset: 0,
            len: lms_count * size_of::<J>(),
        };
        let s1 = Region {
            offset: sa1.end(),
            len: lms_count * size_of::<D>(),
        };

        let work = names * size_of::<J>();
        let fits = |offset: usize| (offset + work <= total).then(|| Region { offset, len: work });

        let head = fits(align_up(s1.end(), align_of::<J>()));
        let locs = head.and_then(|h| fits(h.end()));

        Self {
            sa1,
            s1,
            head,
            locs,
            total,
        }
    }

    /// Every region lies inside the buffer and no two overlap.
    pub(crate) fn is_valid(&self) -> bool {
        let regions = [Some(self.sa1), Some(self.s1), self.head, self.locs];
        let regions = regions.iter().flatten().collect::<Vec<_>>();

        regions.iter().all(|r| r.end() <= self.total)
            && regions
                .iter()
                .enumerate()
                .all(|(i, a)| regions[i + 1..].iter().all(|b| a.is_disjoint(b)))
    }
}

/// Typed slices carved from an [`Arena`] according to a [`Layout`].
pub(crate) struct Carved<'b, D, J> {
    pub(crate) sa1: &'b mut [J],
    pub(crate) s1: &'b [D],
    pub(crate) head: Option<&'b mut [J]>,
    pub(crate) locs: Option<&'b mut [J]>,
}

pub(crate) struct Arena<'a> {
    bytes: &'a mut [u8],
}

impl<'a> Arena<'a> {
    pub(crate) fn new<I: Pod>(buf: &'a mut [I]) -> Self {
        Self {
            bytes: bytemuck::cast_slice_mut(buf),
        }
    }

    #[inline]
    fn read<T: Pod>(&self, at: usize) -> T {
        bytemuck::pod_read_unaligned(&self.bytes[at..at + size_of::<T>()])
    }

    #[inline]
    fn write<T: Pod>(&mut self, at: usize, v: T) {
        self.bytes[at..at + size_of::<T>()].copy_from_slice(bytemuck::bytes_of(&v));
    }

    /// Converts `count` entries of `I` starting at byte `from` into symbols of `D` starting at
    /// byte `to`.
    ///
    /// Runs front to back, so it is safe in place while `to <= from` and `D` is no wider than `I`.
    pub(crate) fn narrow<I: Index, D: Symbol>(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(to <= from && size_of::<D>() <= size_of::<I>());

        for k in 0..count {
            let v: I = self.read(from + k * size_of::<I>());
            self.write(to + k * size_of::<D>(), D::of_u(v.to_u()));
        }
    }

    /// Converts the first `count` entries of `J` into entries of `I`, in place.
    ///
    /// Runs back to front, so every entry is read before a wider write reaches it.
    pub(crate) fn widen<J: Index, I: Index>(&mut self, count: usize) {
        debug_assert!(size_of::<J>() <= size_of::<I>());

        for k in (0..count).rev() {
            let v: J = self.read(k * size_of::<J>());
            self.write(k * size_of::<I>(), I::of_u(v.to_u()));
        }
    }

    pub(crate) fn carve<D: Symbol, J: Index>(&mut self, layout: &Layout) -> Carved<'_, D, J> {
        debug_assert!(layout.is_valid());
        debug_assert_eq!(layout.total, self.bytes.len());

        let mut rest: &mut [u8] = &mut *self.bytes;
        let mut cursor = 0;

        let sa1 = take(&mut rest, &mut cursor, layout.sa1);
        let s1 = take(&mut rest, &mut cursor, layout.s1);
        let head = layout.head.map(|r| take(&mut rest, &mut cursor, r));
        let locs = layout.locs.map(|r| take(&mut rest, &mut cursor, r));

        Carved {
            sa1: bytemuck::cast_slice_mut(sa1),
            s1: bytemuck::cast_slice(s1),
            head: head.map(bytemuck::cast_slice_mut),
            locs: locs.map(bytemuck::cast_slice_mut),
        }
    }
}

/// Splits `region` off the front of `rest`, which starts at byte `cursor` of the arena.
fn take<'b>(rest: &mut &'b mut [u8], cursor: &mut usize, region: Region) -> &'b mut [u8] {
    let bytes = std::mem::take(rest);
    let (_, bytes) = bytes.split_at_mut(region.offset - *cursor);
    let (taken, bytes) = bytes.split_at_mut(region.len);
    *rest = bytes;
    *cursor = region.end();
    taken
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_places_scratch_after_reduced_string() {
        let layout = Layout::plan::<i32, u8, i16>(100, 40, 10);

        assert_eq!(layout.sa1, Region { offset: 0, len: 80 });
        assert_eq!(layout.s1, Region { offset: 80, len: 40 });
        assert_eq!(layout.head, Some(Region { offset: 120, len: 20 }));
        assert_eq!(layout.locs, Some(Region { offset: 140, len: 20 }));
        assert!(layout.is_valid());
    }

    #[test]
    fn plan_aligns_scratch() {
        // s1 ends at byte 3 * 4 + 3 = 15, the buffer at 24
        let layout = Layout::plan::<i32, u8, i32>(6, 3, 2);

        assert_eq!(layout.s1.end(), 15);
        assert_eq!(layout.head, Some(Region { offset: 16, len: 8 }));
        assert_eq!(layout.locs, None);
        assert!(layout.is_valid());
    }

    #[test]
    fn plan_without_room_for_scratch() {
        let layout = Layout::plan::<i8, u8, i8>(6, 3, 2);

        assert_eq!(layout.head, None);
        assert_eq!(layout.locs, None);
        assert!(layout.is_valid());
    }

    #[test]
    fn overlapping_regions_are_invalid() {
        let mut layout = Layout::plan::<i32, u8, i16>(100, 40, 10);
        layout.s1.offset = 70;
        assert!(!layout.is_valid());
    }

    #[test]
    fn narrow_then_widen_in_place() {
        // names in sa[4..8], narrowed behind a 16-bit SA1 of 4 entries
        let mut buf = vec![0i64; 8];
        buf[4..].copy_from_slice(&[3, 0, 2, 1]);

        let mut arena = Arena::new(&mut buf);
        arena.narrow::<i64, u8>(4 * 8, 4 * 2, 4);

        let layout = Layout::plan::<i64, u8, i16>(8, 4, 4);
        {
            let carved = arena.carve::<u8, i16>(&layout);
            assert_eq!(carved.s1, &[3, 0, 2, 1]);
            assert_eq!(carved.head.as_ref().map(|h| h.len()), Some(4));
            assert_eq!(carved.locs.as_ref().map(|l| l.len()), Some(4));
            carved.sa1.copy_from_slice(&[1, 3, 2, 0]);
        }
        arena.widen::<i16, i64>(4);

        assert_eq!(&buf[..4], &[1, 3, 2, 0]);
    }
}
