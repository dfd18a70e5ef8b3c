use crate::{Index, Symbol};

#[inline]
pub(crate) fn clear<I: Index>(l: &mut [I]) {
    l.iter_mut().for_each(|e| *e = I::zero());
}

/// `head[c]` becomes the first slot of the bucket of symbol `c`.
pub(crate) fn fill_heads<C: Symbol, I: Index>(s: &[C], head: &mut [I]) {
    clear(head);

    s.iter().for_each(|c| head[c.to_u()] = head[c.to_u()] + I::one());

    (0..head.len()).fold(0, |s, i| {
        let count = head[i].to_u();
        head[i] = I::of_u(s);
        s + count
    });
}

/// Loads the bucket heads into the cursors.
#[inline]
pub(crate) fn load_heads<I: Index>(head: &[I], locs: &mut [I]) {
    locs.copy_from_slice(head);
}

/// Loads the bucket tails (one past the last slot) into the cursors.
#[inline]
pub(crate) fn load_tails<I: Index>(head: &[I], locs: &mut [I], n: usize) {
    let k = head.len();
    locs[..k - 1].copy_from_slice(&head[1..]);
    locs[k - 1] = I::of_u(n);
}
