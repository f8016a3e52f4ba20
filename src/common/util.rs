//! Auxiliary functions.

use crate::defs::{DoubleWord, SignedWord, Word, DOUBLE_WORD_BIT_SIZE, WORD_BIT_SIZE};

/// Number of significant bits of the magnitude `m`: the zero-based index of
/// the most significant set bit plus one, or 0 for an all-zero slice.
/// Leading all-zero words are skipped.
pub fn bit_len(m: &[Word]) -> usize {
    let mut n = m.len();

    for v in m.iter().rev() {
        if *v != 0 {
            return n * WORD_BIT_SIZE - v.leading_zeros() as usize;
        }
        n -= 1;
    }

    0
}

/// Number of zero bits below the least significant set bit of `m`,
/// or the total bit size of `m` for an all-zero slice.
pub fn count_trailing_zeroes(m: &[Word]) -> usize {
    let mut n = 0;

    for v in m.iter() {
        if *v != 0 {
            return n + v.trailing_zeros() as usize;
        }
        n += WORD_BIT_SIZE;
    }

    n
}

/// Returns `m >> n` truncated to a double word. Bits shifted past the
/// word slice are read as zero.
pub fn shift_right_dword(m: &[Word], n: usize) -> DoubleWord {
    let idx = n / WORD_BIT_SIZE;
    let shift = n % WORD_BIT_SIZE;

    let w = |i: usize| m.get(i).map_or(0, |v| *v as DoubleWord);

    let d = w(idx) | (w(idx + 1) << WORD_BIT_SIZE);

    if shift == 0 {
        d
    } else {
        (d >> shift) | (w(idx + 2) << (2 * WORD_BIT_SIZE - shift))
    }
}

/// Compares the `n` low bits of `m` to half of `2^n`, i.e. `m mod 2^n`
/// against `2^(n-1)`. Returns a positive value, zero, or a negative value
/// for greater, equal, and smaller respectively.
pub fn cmp_rem_half(m: &[Word], n: usize) -> SignedWord {
    debug_assert!(n > 0);

    let pos = n - 1;
    let idx = pos / WORD_BIT_SIZE;
    let shift = pos % WORD_BIT_SIZE;

    if m.get(idx).map_or(0, |v| *v >> shift & 1) == 0 {
        return -1;
    }

    if m[idx] & ((1 << shift) - 1) != 0 {
        return 1;
    }

    for v in &m[..idx] {
        if *v != 0 {
            return 1;
        }
    }

    0
}

/// `x >> n`, zero when `n` reaches the bit size of a double word.
#[inline]
pub fn shr_dword(x: DoubleWord, n: usize) -> DoubleWord {
    if n >= DOUBLE_WORD_BIT_SIZE {
        0
    } else {
        x >> n
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::WORD_MAX;
    use rand::random;

    // The word-array scan and the fixed-width intrinsic must agree
    // on every overlapping input.
    #[test]
    fn test_bit_len() {
        assert!(bit_len(&[]) == 0);
        assert!(bit_len(&[0]) == 0);
        assert!(bit_len(&[0, 0, 0]) == 0);
        assert!(bit_len(&[1]) == 1);
        assert!(bit_len(&[0b100]) == 3);
        assert!(bit_len(&[WORD_MAX]) == WORD_BIT_SIZE);
        assert!(bit_len(&[0, 1]) == WORD_BIT_SIZE + 1);
        assert!(bit_len(&[123, 0, 0]) == 7);

        for _ in 0..1000 {
            let w: Word = random();
            if w == 0 {
                continue;
            }

            let fixed = WORD_BIT_SIZE - w.leading_zeros() as usize;

            assert!(bit_len(&[w]) == fixed);
            assert!(bit_len(&[w, 0]) == fixed);
            assert!(bit_len(&[random(), w]) == fixed + WORD_BIT_SIZE);
            assert!(bit_len(&[random(), w, 0, 0]) == fixed + WORD_BIT_SIZE);
        }
    }

    #[test]
    fn test_count_trailing_zeroes() {
        assert!(count_trailing_zeroes(&[]) == 0);
        assert!(count_trailing_zeroes(&[0, 0]) == 2 * WORD_BIT_SIZE);
        assert!(count_trailing_zeroes(&[1]) == 0);
        assert!(count_trailing_zeroes(&[0b1000]) == 3);
        assert!(count_trailing_zeroes(&[0, 0b10]) == WORD_BIT_SIZE + 1);

        for _ in 0..1000 {
            let w: Word = random();
            if w == 0 {
                continue;
            }

            let fixed = w.trailing_zeros() as usize;

            assert!(count_trailing_zeroes(&[w]) == fixed);
            assert!(count_trailing_zeroes(&[0, w, random()]) == fixed + WORD_BIT_SIZE);
        }
    }

    #[test]
    fn test_shift_right_dword() {
        assert!(shift_right_dword(&[], 0) == 0);
        assert!(shift_right_dword(&[0b1100], 2) == 0b11);
        assert!(shift_right_dword(&[0, 1], WORD_BIT_SIZE) == 1);
        assert!(shift_right_dword(&[0, 1], 1) == 1 << (WORD_BIT_SIZE - 1));

        for _ in 0..1000 {
            let v: DoubleWord = random();
            let n = random::<usize>() % (2 * WORD_BIT_SIZE);
            let m = [v as Word, (v >> WORD_BIT_SIZE) as Word];

            assert!(shift_right_dword(&m, n) == v >> n);

            // a third word contributes the bits shifted in from the top
            let t: Word = random();
            let m = [v as Word, (v >> WORD_BIT_SIZE) as Word, t];
            let full = v >> n
                | if n == 0 {
                    0
                } else {
                    (t as DoubleWord) << (2 * WORD_BIT_SIZE - n)
                };

            assert!(shift_right_dword(&m, n) == full);
        }
    }

    #[test]
    fn test_cmp_rem_half() {
        assert!(cmp_rem_half(&[0b100], 3) == 0);
        assert!(cmp_rem_half(&[0b101], 3) == 1);
        assert!(cmp_rem_half(&[0b011], 3) == -1);
        assert!(cmp_rem_half(&[0b1100], 3) == 0);
        assert!(cmp_rem_half(&[0], 1) == -1);
        assert!(cmp_rem_half(&[1], 1) == 0);
        assert!(cmp_rem_half(&[0, 1], WORD_BIT_SIZE + 1) == 0);
        assert!(cmp_rem_half(&[1, 1], WORD_BIT_SIZE + 1) == 1);
        assert!(cmp_rem_half(&[1, 0], WORD_BIT_SIZE + 1) == -1);

        for _ in 0..1000 {
            let v: DoubleWord = random();
            let n = random::<usize>() % (2 * WORD_BIT_SIZE - 1) + 1;
            let m = [v as Word, (v >> WORD_BIT_SIZE) as Word];

            let rem = v & ((1 << n) - 1);
            let half: DoubleWord = 1 << (n - 1);

            let cmp = cmp_rem_half(&m, n);

            if rem < half {
                assert!(cmp < 0);
            } else if rem > half {
                assert!(cmp > 0);
            } else {
                assert!(cmp == 0);
            }
        }
    }
}
