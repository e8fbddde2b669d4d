//! Boustrophedon radix interleaving.
//!
//! Ids are grouped into blocks of `n` elements. Even blocks run forwards and
//! odd blocks run backwards, so the last element of a block sits next in
//! memory to the geometrically adjacent first element of the following block.

/// Maps `(block, element)` pairs to single ids and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interleaving {
    elements_per_block: usize,
}

impl Interleaving {
    /// # Panics
    ///
    /// Panics if `elements_per_block` is zero.
    #[must_use]
    pub fn new(elements_per_block: usize) -> Self {
        assert!(elements_per_block > 0, "Interleaving needs at least one element per block");
        Self { elements_per_block }
    }

    #[must_use]
    #[inline]
    pub fn elements_per_block(&self) -> usize {
        self.elements_per_block
    }

    #[must_use]
    #[inline]
    pub fn interleaved_id(&self, block_id: usize, element_id: usize) -> usize {
        let n = self.elements_per_block;
        block_id * n + self.orient(block_id, element_id)
    }

    #[must_use]
    #[inline]
    pub fn block_id(&self, interleaved_id: usize) -> usize {
        interleaved_id / self.elements_per_block
    }

    #[must_use]
    #[inline]
    pub fn element_id(&self, interleaved_id: usize) -> usize {
        let n = self.elements_per_block;
        self.orient(interleaved_id / n, interleaved_id % n)
    }

    /// Reverse element order within odd blocks. Self-inverse.
    #[inline]
    fn orient(&self, block_id: usize, element_id: usize) -> usize {
        if block_id % 2 == 1 {
            self.elements_per_block - 1 - element_id
        } else {
            element_id
        }
    }
}
