/// Interval between automatic slide advances.
pub const AUTOPLAY_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Autoplay only makes sense with something to advance to.
    pub fn should_autoplay(&self) -> bool {
        self.len > 1
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }

    pub fn select(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_forward_and_back() {
        let c = Carousel::new(3);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.prev().next().index(), 0);
    }

    #[test]
    fn test_empty_stays_put() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
        assert_eq!(c.select(5).index(), 0);
        assert!(!c.should_autoplay());
    }

    #[test]
    fn test_select_clamps() {
        let c = Carousel::new(4);
        assert_eq!(c.select(2).index(), 2);
        assert_eq!(c.select(10).index(), 3);
    }

    #[test]
    fn test_single_image_no_autoplay() {
        let c = Carousel::new(1);
        assert!(!c.should_autoplay());
        assert_eq!(c.next().index(), 0);
        assert!(Carousel::new(2).should_autoplay());
    }
}
