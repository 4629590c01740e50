use std::mem;

/// Swapper holds a live buffer and a scratch buffer of the same type. Stencil
/// passes read the live buffer, write every cell of the scratch buffer and
/// then swap, so the scratch allocation is reused from tick to tick.
pub struct Swapper<T> {
    live: T,
    scratch: T,
}

impl<T: Clone> Swapper<T> {
    /// Start with the scratch buffer as a copy of `live`.
    pub fn from_live(live: T) -> Self {
        let scratch = live.clone();
        Self { live, scratch }
    }
}

impl<T> Swapper<T> {
    pub fn swap(&mut self) {
        mem::swap(&mut self.live, &mut self.scratch)
    }

    pub fn live(&self) -> &T {
        &self.live
    }

    pub fn live_mut(&mut self) -> &mut T {
        &mut self.live
    }

    pub fn read_live_write_scratch(&mut self) -> (&T, &mut T) {
        (&self.live, &mut self.scratch)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn swap_promotes_the_scratch_buffer() {
        let mut swapper = Swapper::from_live(vec![1, 2, 3]);

        {
            let (live, scratch) = swapper.read_live_write_scratch();
            scratch
                .iter_mut()
                .zip(live.iter())
                .for_each(|(out, value)| *out = value * 10);
        }
        swapper.swap();

        assert_eq!(swapper.live(), &vec![10, 20, 30]);
    }
}
