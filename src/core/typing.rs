/// Character-by-character reveal of a fixed string.
///
/// The shown content always is a prefix of the source text; each step
/// appends exactly one `char`, so timer jitter can delay characters but never
/// skip or repeat them.
#[derive(Clone, Debug)]
pub struct TypingAnimation {
    chars: Vec<char>,
    index: usize,
    shown: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingStep {
    Typed(char),
    Finished,
}

impl TypingAnimation {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
            shown: String::with_capacity(text.len()),
        }
    }

    /// Currently visible text.
    #[inline]
    pub fn shown(&self) -> &str {
        &self.shown
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.index >= self.chars.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn step(&mut self) -> TypingStep {
        match self.chars.get(self.index) {
            Some(&c) => {
                self.shown.push(c);
                self.index += 1;
                TypingStep::Typed(c)
            }
            None => TypingStep::Finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_finished_immediately() {
        let mut t = TypingAnimation::new("");
        assert!(t.is_finished());
        assert_eq!(t.step(), TypingStep::Finished);
        assert_eq!(t.shown(), "");
    }

    #[test]
    fn multibyte_chars_advance_one_at_a_time() {
        let mut t = TypingAnimation::new("héllo✓");
        assert_eq!(t.len(), 6);
        t.step();
        t.step();
        assert_eq!(t.shown(), "hé");
    }
}
