use crate::Symbol;

/// Scans `text` right to left and yields its LMS positions, largest first.
///
/// Types are never stored: the scan alternates between walking a descending run (L-type) and an
/// ascending run (S-type), and an LMS position is the start of an ascending run that follows a
/// descending one. Position `n-1` is L-type because the virtual sentinel follows it.
pub(crate) struct LmsScan<'a, C> {
    text: &'a [C],
    // positions 0..rest are not yet scanned
    rest: usize,
    prv: C,
}

impl<'a, C: Symbol> LmsScan<'a, C> {
    pub(crate) fn new(text: &'a [C]) -> Self {
        match text.last() {
            Some(&prv) => Self {
                text,
                rest: text.len() - 1,
                prv,
            },
            None => Self {
                text,
                rest: 0,
                prv: C::zero(),
            },
        }
    }
}

impl<'a, C: Symbol> Iterator for LmsScan<'a, C> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // position 0 cannot be LMS
        if self.rest <= 1 {
            self.rest = 0;
            return None;
        }

        while self.rest > 0 && self.text[self.rest - 1] >= self.prv {
            self.rest -= 1;
            self.prv = self.text[self.rest];
        }

        while self.rest > 0 && self.text[self.rest - 1] <= self.prv {
            self.rest -= 1;
            self.prv = self.text[self.rest];
        }

        if self.rest > 0 {
            // text[rest-1] is L-type, text[rest] starts the S-run
            Some(self.rest)
        } else {
            None
        }
    }
}

impl<'a, C: Symbol> std::iter::FusedIterator for LmsScan<'a, C> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lms_of(s: &[u8]) -> Vec<usize> {
        LmsScan::new(s).collect()
    }

    fn lms_by_types(s: &[u8]) -> Vec<usize> {
        let n = s.len();
        let mut is_s = vec![false; n];
        for i in (0..n.saturating_sub(1)).rev() {
            is_s[i] = s[i] < s[i + 1] || (s[i] == s[i + 1] && is_s[i + 1]);
        }
        (1..n).rev().filter(|&i| is_s[i] && !is_s[i - 1]).collect()
    }

    #[test]
    fn banana() {
        assert_eq!(lms_of(b"banana"), vec![3, 1]);
    }

    #[test]
    fn abracadabra() {
        assert_eq!(lms_of(b"abracadabra"), vec![7, 5, 3]);
    }

    #[test]
    fn baabaabac() {
        assert_eq!(lms_of(b"baabaabac"), vec![7, 4, 1]);
    }

    #[test]
    fn degenerate() {
        assert!(lms_of(b"").is_empty());
        assert!(lms_of(b"a").is_empty());
        assert!(lms_of(b"aaaa").is_empty());
        assert!(lms_of(b"abcd").is_empty());
        assert!(lms_of(b"dcba").is_empty());
        assert_eq!(lms_of(b"bab"), vec![1]);
    }

    #[test]
    fn fused() {
        let mut scan = LmsScan::new(&b"banana"[..]);
        assert_eq!(scan.by_ref().count(), 2);
        assert_eq!(scan.next(), None);
    }

    use proptest::collection::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn matches_explicit_types(s in vec(0u8..4, 0..200)) {
            let lms = lms_of(&s);
            prop_assert_eq!(&lms, &lms_by_types(&s));
            prop_assert!(2 * lms.len() <= s.len());
        }
    }
}
