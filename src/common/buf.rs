//! Buffer for holding magnitude words.

use smallvec::SmallVec;

use crate::defs::Error;
use crate::defs::Word;
use core::ops::Deref;
use core::ops::DerefMut;

const STATIC_ALLOCATION: usize = 4;

/// Buffer for holding magnitude words. Magnitudes of up to
/// `STATIC_ALLOCATION` words are stored without heap allocation.
#[derive(Debug, Hash)]
pub struct WordBuf {
    inner: SmallVec<[Word; STATIC_ALLOCATION]>,
}

impl WordBuf {
    /// Buffer holding a copy of the words `w`.
    pub fn from_words(w: &[Word]) -> Result<Self, Error> {
        let mut inner = SmallVec::new();
        inner.try_reserve_exact(w.len())?;
        inner.extend_from_slice(w);
        Ok(WordBuf { inner })
    }

    /// Buffer from words that fit into the static allocation.
    pub fn inline(w: &[Word]) -> Self {
        debug_assert!(w.len() <= STATIC_ALLOCATION);
        WordBuf { inner: SmallVec::from_slice(w) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        self.inner.deref()
    }
}

impl DerefMut for WordBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        self.inner.deref_mut()
    }
}
