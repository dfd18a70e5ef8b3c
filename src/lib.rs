//! Suffix array construction in O(N+|Σ|) time by induced sorting (SA-IS), and the
//! Burrows-Wheeler transform built on top of it.
//!
//! The text is implicitly terminated by a unique sentinel that is smaller than every symbol; it is
//! never stored in the input nor in the suffix array. A suffix array of a text of length `n` is
//! therefore a permutation of `0..n`.
//!
//! The reduced problems solved during recursion are stored in the narrowest integer widths that
//! hold them, inside the caller's suffix array buffer.
//!
//! # Example
//! ```
//! let sa = sais::suffix_array32(b"banana").unwrap();
//! assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
//!
//! let bwt = sais::bwt::encode(b"banana", &sa).unwrap();
//! assert_eq!(bwt.data, b"annbaa");
//! assert_eq!(bwt.pointer, 4);
//!
//! let text = sais::bwt::decode(bwt.pointer, &bwt.data).unwrap();
//! assert_eq!(text, b"banana");
//! ```
mod arena;
mod bucket;
pub mod bwt;
mod error;
mod induce;
mod lms;
#[cfg(test)]
mod naive;
mod reduce;
mod sais;
mod width;

pub use error::Error;
pub use sais::Workspace;

mod private {
    use bytemuck::Pod;
    use num::{PrimInt, Signed, Unsigned};
    use std::fmt::Debug;

    pub trait Symbol: PrimInt + Unsigned + Pod + Debug {
        fn of_u(v: usize) -> Self;
        fn to_u(&self) -> usize;
    }

    pub trait Index: PrimInt + Signed + Pod + Debug {
        fn of_u(v: usize) -> Self;
        fn to_u(&self) -> usize;
    }

    macro_rules! impl_symbol {
        ($uint:ty) => {
            impl Symbol for $uint {
                #[inline]
                fn of_u(v: usize) -> Self {
                    v as $uint
                }
                #[inline]
                fn to_u(&self) -> usize {
                    *self as usize
                }
            }
        };
    }

    macro_rules! impl_index {
        ($int:ty) => {
            impl Index for $int {
                #[inline]
                fn of_u(v: usize) -> Self {
                    v as $int
                }
                #[inline]
                fn to_u(&self) -> usize {
                    *self as usize
                }
            }
        };
    }

    impl_symbol!(u8);
    impl_symbol!(u16);
    impl_symbol!(u32);
    impl_symbol!(u64);

    impl_index!(i8);
    impl_index!(i16);
    impl_index!(i32);
    impl_index!(i64);
}

/// A symbol of the text: primitive unsigned integer type.
///
/// This is a [sealed trait](https://rust-lang.github.io/api-guidelines/future-proofing.html).
pub trait Symbol: private::Symbol {}

/// An entry of the suffix array: primitive signed integer type.
///
/// The sign bit is used as a tag while sorting, so a text of length `n` needs an index type whose
/// maximum is at least `n`.
///
/// This is a [sealed trait](https://rust-lang.github.io/api-guidelines/future-proofing.html).
pub trait Index: private::Index {}

macro_rules! impl_sealed {
    ($tr:ident, $($ty:ty),*) => {
        $(impl $tr for $ty {})*
    };
}

impl_sealed!(Symbol, u8, u16, u32, u64);

impl_sealed!(Index, i8, i16, i32, i64);

/// Largest text length whose suffix array can be stored in `I`.
pub fn max_len<I: Index>() -> usize {
    I::max_value().to_usize().unwrap_or(usize::MAX)
}

/// Construct the suffix array of `text` over the alphabet `0..alphabet_size`.
///
/// Runs in O(N+|Σ|) time.
/// # Arguments
/// - `text`: Input string, without sentinel
/// - `alphabet_size`: Number of distinct symbol values; every symbol must be below it
/// - `sa`: Output suffix array, same length as `text`
///
/// On error `sa` is left untouched.
/// # Example
/// ```
/// let text = b"abracadabra";
///
/// let mut sa = vec![0i8; text.len()];
///
/// sais::construct(text, 256, &mut sa).unwrap();
///
/// assert_eq!(sa, vec![10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
/// ```
pub fn construct<C: Symbol, I: Index>(
    text: &[C],
    alphabet_size: usize,
    sa: &mut [I],
) -> Result<(), Error> {
    Workspace::new(alphabet_size).construct(text, sa)
}

/// Suffix array of a byte string with 32-bit indices.
///
/// Fails with [`Error::TooLong`] if `text` has `2^31` bytes or more.
pub fn suffix_array32(text: &[u8]) -> Result<Vec<i32>, Error> {
    byte_suffix_array(text)
}

/// Suffix array of a byte string with 64-bit indices.
pub fn suffix_array64(text: &[u8]) -> Result<Vec<i64>, Error> {
    byte_suffix_array(text)
}

fn byte_suffix_array<I: Index>(text: &[u8]) -> Result<Vec<I>, Error> {
    let max = max_len::<I>();
    if text.len() > max {
        return Err(Error::TooLong {
            len: text.len(),
            max,
        });
    }

    let mut sa = vec![I::zero(); text.len()];
    construct(text, 256, &mut sa)?;
    Ok(sa)
}
