use std::time::Duration;

const CURSOR_BLINK: Duration = Duration::from_millis(530);

/// Text that types itself out one character at a time, followed by a
/// blinking cursor once complete.
///
/// The first character appears one `speed` after `delay`; typing counts as
/// complete one `speed` after the last character.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedText {
    text: &'static str,
    delay: Duration,
    speed: Duration,
}

impl TypedText {
    pub fn new(text: &'static str, delay: Duration, speed: Duration) -> Self {
        TypedText { text, delay, speed }
    }

    /// Hero subtitle timing: 1.2 s delay, 50 ms per character.
    ///
    pub fn subtitle(text: &'static str) -> Self {
        TypedText::new(text, Duration::from_millis(1_200), Duration::from_millis(50))
    }

    fn typed_chars(&self, elapsed: Duration) -> usize {
        if elapsed < self.delay {
            return 0;
        }
        if self.speed.is_zero() {
            return usize::MAX;
        }
        let steps = (elapsed - self.delay).as_nanos() / self.speed.as_nanos();
        usize::try_from(steps).unwrap_or(usize::MAX)
    }

    /// Portion of the text visible after `elapsed`.
    ///
    pub fn visible(&self, elapsed: Duration) -> &'static str {
        let count = self.typed_chars(elapsed);
        match self.text.char_indices().nth(count) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.typed_chars(elapsed) > self.text.chars().count()
    }

    /// The cursor is solid while typing and blinks afterwards.
    ///
    pub fn cursor_visible(&self, elapsed: Duration) -> bool {
        if !self.is_complete(elapsed) {
            return true;
        }
        let len = self.text.chars().count() as u32 + 1;
        let completed_at = self.delay + self.speed * len;
        let since = elapsed.saturating_sub(completed_at);
        (since.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_visible_before_delay() {
        let text = TypedText::new("abc", ms(100), ms(10));
        assert_eq!(text.visible(ms(0)), "");
        assert_eq!(text.visible(ms(109)), "");
        assert!(text.cursor_visible(ms(50)));
    }

    #[test]
    fn characters_appear_one_per_step() {
        let text = TypedText::new("abc", ms(100), ms(10));
        assert_eq!(text.visible(ms(110)), "a");
        assert_eq!(text.visible(ms(125)), "ab");
        assert_eq!(text.visible(ms(130)), "abc");
        assert!(!text.is_complete(ms(130)));
        assert!(text.is_complete(ms(140)));
        assert_eq!(text.visible(ms(10_000)), "abc");
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let text = TypedText::subtitle("a • b");
        assert_eq!(text.visible(ms(1_300)), "a ");
        assert_eq!(text.visible(ms(1_350)), "a •");
    }

    #[test]
    fn cursor_blinks_after_completion() {
        let text = TypedText::new("ab", ms(0), ms(10));
        // Complete at 30 ms.
        assert!(text.cursor_visible(ms(30)));
        assert!(text.cursor_visible(ms(559)));
        assert!(!text.cursor_visible(ms(560)));
        assert!(text.cursor_visible(ms(1_090)));
    }

    #[test]
    fn zero_speed_shows_everything_after_delay() {
        let text = TypedText::new("abc", ms(10), ms(0));
        assert_eq!(text.visible(ms(5)), "");
        assert_eq!(text.visible(ms(10)), "abc");
    }
}
