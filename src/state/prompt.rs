use std::time::{Duration, Instant};

/// How long a sent message shows as sending before the field clears.
///
pub const SUBMIT_DURATION: Duration = Duration::from_millis(1_500);

/// Message field of the contact section. Sending is simulated: the text is
/// held for `SUBMIT_DURATION` and then cleared.
///
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    text: String,
    focused: bool,
    submitting_until: Option<Instant>,
}

impl PromptInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting_until.is_some()
    }

    /// True when there is something to send and nothing is in flight.
    ///
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.text.trim().is_empty()
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn push(&mut self, c: char) {
        if !self.is_submitting() && !c.is_control() {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_submitting() {
            self.text.pop();
        }
    }

    /// Start sending at `now`. Blank text and a send already in flight are
    /// ignored. Returns true if a send started.
    ///
    pub fn submit(&mut self, now: Instant) -> bool {
        if !self.can_submit() {
            return false;
        }
        log::info!("Sending contact message ({} chars)", self.text.chars().count());
        self.submitting_until = Some(now + SUBMIT_DURATION);
        true
    }

    /// Finish a send whose time is up.
    ///
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.submitting_until {
            if now >= until {
                log::debug!("Contact message sent");
                self.submitting_until = None;
                self.text.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> PromptInput {
        let mut prompt = PromptInput::default();
        text.chars().for_each(|c| prompt.push(c));
        prompt
    }

    #[test]
    fn test_blank_prompt_is_not_sent() {
        let t0 = Instant::now();
        let mut prompt = typed("   ");
        assert!(!prompt.can_submit());
        assert!(!prompt.submit(t0));
        assert!(!prompt.is_submitting());
        assert_eq!(prompt.text(), "   ");
    }

    #[test]
    fn test_sent_prompt_clears_after_submit_duration() {
        let t0 = Instant::now();
        let mut prompt = typed("hello");
        assert!(prompt.submit(t0));
        assert!(prompt.is_submitting());
        assert!(!prompt.submit(t0 + Duration::from_millis(10)));

        prompt.push('!');
        prompt.backspace();
        prompt.tick(t0 + Duration::from_millis(1_499));
        assert_eq!(prompt.text(), "hello");
        assert!(prompt.is_submitting());

        prompt.tick(t0 + SUBMIT_DURATION);
        assert_eq!(prompt.text(), "");
        assert!(!prompt.is_submitting());
    }

    #[test]
    fn test_editing() {
        let mut prompt = typed("héy");
        prompt.push('\n');
        prompt.backspace();
        assert_eq!(prompt.text(), "hé");
        prompt.focus();
        assert!(prompt.is_focused());
        prompt.blur();
        assert!(!prompt.is_focused());
    }
}
