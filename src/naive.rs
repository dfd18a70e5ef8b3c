/// Sorts the suffixes by direct comparison, O(n² log n).
pub(crate) fn suffix_array<C: Ord>(s: &[C]) -> Vec<usize> {
    let mut sa = (0..s.len()).collect::<Vec<_>>();
    sa.sort_by(|&a, &b| s[a..].cmp(&s[b..]));
    sa
}
