/// Wrapping index over a fixed number of slides. Used by the featured
/// projects carousel and the testimonials rotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide, `None` when there are no slides.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    pub fn next(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Jumps to `index`; out of range requests are ignored.
    pub fn go_to(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self { index, ..self }
    }

    /// Counter shown next to the arrows, e.g. `01 / 05`.
    pub fn counter(&self) -> String {
        match self.current() {
            Some(i) => format!("{:02} / {:02}", i + 1, self.len),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let c = Carousel::new(5);
        assert_eq!(c.prev().current(), Some(4));
        assert_eq!(c.prev().next().current(), Some(0));
        let last = (0..4).fold(c, |c, _| c.next());
        assert_eq!(last.current(), Some(4));
        assert_eq!(last.next().current(), Some(0));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let c = Carousel::new(0);
        assert_eq!(c.next().current(), None);
        assert_eq!(c.prev().current(), None);
        assert_eq!(c.go_to(0).current(), None);
        assert_eq!(c.counter(), "");
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let c = Carousel::new(3).go_to(2);
        assert_eq!(c.current(), Some(2));
        assert_eq!(c.go_to(3).current(), Some(2));
    }

    #[test]
    fn counter_is_zero_padded() {
        assert_eq!(Carousel::new(5).next().counter(), "02 / 05");
    }
}
