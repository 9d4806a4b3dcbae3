use super::navigation::{ClickTarget, Clickable};
use super::prompt::PromptInput;
use crate::config::{Config, ConfigError, Keymap};
use crate::content::{self, Layout, Section, TypedText};
use crate::logger::LogBuffer;
use crate::navigation::{
    Engine, NavKey, NavigateOutcome, NavigationState, SectionIndex,
};
use crate::ui::{Stage, Theme};
use log::*;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Houses data representative of application state.
///
pub struct State {
    engine: Engine<Stage>,
    theme: Theme,
    keymap: Keymap,
    wheel_step: f64,
    log_buffer: LogBuffer,
    show_log: bool,
    clickables: Vec<Clickable>,
    selected_project: usize,
    subtitle: TypedText,
    prompt: PromptInput,
    mounted_at: Instant,
    now: Instant,
}

impl State {
    /// Mount the engine on the first section using the given configuration.
    ///
    pub fn new(config: &Config, log_buffer: LogBuffer, now: Instant) -> Result<State, ConfigError> {
        let theme = Theme::from_name(&config.theme_name)
            .ok_or_else(|| ConfigError::UnknownTheme(config.theme_name.clone()))?;
        config.navigation.validate()?;
        let engine_config = config.navigation.engine_config(content::SECTION_COUNT);
        let stage = Stage::new(engine_config.settle_delay);
        let engine = Engine::mount(&engine_config, stage);
        debug!(
            "Mounted {} sections (settle {:?}, quiet {:?}, threshold {})",
            engine_config.section_count,
            engine_config.settle_delay,
            engine_config.quiet_period,
            engine_config.wheel_threshold
        );
        Ok(State {
            engine,
            theme,
            keymap: config.keymap.clone(),
            wheel_step: config.navigation.wheel_step,
            log_buffer,
            show_log: false,
            clickables: vec![],
            selected_project: 0,
            subtitle: TypedText::subtitle(content::HERO_SUBTITLE),
            prompt: PromptInput::default(),
            mounted_at: now,
            now,
        })
    }

    /// Advance the clock and fire every due deadline.
    ///
    pub fn tick(&mut self, now: Instant) {
        self.now = self.now.max(now);
        self.engine.tick(self.now);
        self.prompt.tick(self.now);
        if !self.is_on(Layout::Contact) {
            self.prompt.blur();
        }
    }

    fn is_on(&self, layout: Layout) -> bool {
        self.current_section()
            .map(|section| section.layout == layout)
            .unwrap_or(false)
    }

    /// Instant of the latest tick.
    ///
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.mounted_at)
    }

    pub fn navigation_state(&self) -> NavigationState {
        self.engine.state()
    }

    pub fn section_count(&self) -> usize {
        self.engine.section_count()
    }

    /// Section the stage is showing.
    ///
    pub fn current_section(&self) -> Option<&'static Section> {
        content::section(self.engine.state().current_index)
    }

    pub fn readout(&self) -> String {
        self.engine.readout()
    }

    pub fn on_nav_key(&mut self, key: NavKey, now: Instant) -> Option<NavigateOutcome> {
        self.tick(now);
        self.engine.on_key(key, self.now)
    }

    /// Feed one scroll notch; positive notches advance.
    ///
    pub fn scroll(&mut self, notches: i8, now: Instant) {
        self.tick(now);
        let delta = f64::from(notches) * self.wheel_step;
        trace!("Wheel delta {}", delta);
        self.engine.on_wheel_delta(delta, self.now);
    }

    pub fn request_section(&mut self, index: SectionIndex, now: Instant) -> NavigateOutcome {
        self.tick(now);
        self.engine.request_navigate(index, self.now)
    }

    /// Resolve a click against the areas drawn in the last frame. Returns
    /// true if something was hit.
    ///
    pub fn click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let hit = self
            .clickables
            .iter()
            .rev()
            .find(|clickable| clickable.contains(column, row))
            .map(|clickable| clickable.target);
        match hit {
            Some(ClickTarget::Section(index)) => {
                debug!("Clicked section {}", index);
                self.request_section(index, now);
            }
            Some(ClickTarget::Project(index)) => {
                self.select_project(index);
            }
            Some(ClickTarget::ToggleTheme) => {
                self.toggle_theme();
            }
            Some(ClickTarget::Prompt) => {
                self.focus_prompt();
                return true;
            }
            Some(ClickTarget::SubmitPrompt) => {
                self.submit_prompt(now);
            }
            None => {
                self.prompt.blur();
                return false;
            }
        }
        self.prompt.blur();
        true
    }

    pub fn register_clickable(&mut self, area: Rect, target: ClickTarget) {
        if area.width > 0 && area.height > 0 {
            self.clickables.push(Clickable { area, target });
        }
    }

    pub fn clear_clickables(&mut self) {
        self.clickables.clear();
    }

    pub fn clickables(&self) -> &[Clickable] {
        &self.clickables
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!("Switched to {} theme", self.theme.name);
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn footer_text(&self) -> String {
        if self.is_prompt_focused() {
            return " Type a message | Enter: send | Backspace: erase | Esc: done ".to_string();
        }
        self.keymap.footer_text(self.section_count())
    }

    pub fn log_buffer(&self) -> &LogBuffer {
        &self.log_buffer
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    pub fn selected_project(&self) -> usize {
        self.selected_project
    }

    pub fn select_project(&mut self, index: usize) {
        if index < content::projects().len() {
            self.selected_project = index;
        }
    }

    /// Cycle the project selection while a master/detail section is shown.
    ///
    pub fn next_project(&mut self) -> bool {
        let on_projects = self.is_on(Layout::MasterDetail);
        let count = content::projects().len();
        if !on_projects || count == 0 {
            return false;
        }
        self.selected_project = (self.selected_project + 1) % count;
        true
    }

    pub fn subtitle(&self) -> &TypedText {
        &self.subtitle
    }

    pub fn prompt(&self) -> &PromptInput {
        &self.prompt
    }

    /// Focus the message field while the contact section is shown. Returns
    /// true if it took focus.
    ///
    pub fn focus_prompt(&mut self) -> bool {
        if !self.is_on(Layout::Contact) || self.engine.is_torn_down() {
            return false;
        }
        self.prompt.focus();
        true
    }

    pub fn blur_prompt(&mut self) {
        self.prompt.blur();
    }

    pub fn is_prompt_focused(&self) -> bool {
        self.prompt.is_focused() && self.is_on(Layout::Contact)
    }

    pub fn type_prompt(&mut self, c: char) {
        self.prompt.push(c);
    }

    pub fn erase_prompt(&mut self) {
        self.prompt.backspace();
    }

    /// Send the message field. Blank text is ignored.
    ///
    pub fn submit_prompt(&mut self, now: Instant) -> bool {
        self.tick(now);
        self.prompt.submit(self.now)
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        self.engine.presenter_mut()
    }

    /// Stop navigation; later input and ticks have no effect.
    ///
    pub fn teardown(&mut self) {
        debug!("Tearing down navigation");
        self.prompt.blur();
        self.engine.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Direction;
    use crate::state::SUBMIT_DURATION;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn state() -> (State, Instant) {
        let now = Instant::now();
        let state = State::new(&Config::new(), LogBuffer::new(10), now).unwrap();
        (state, now)
    }

    #[test]
    fn test_new_starts_at_first_section() {
        let (state, _) = state();
        assert_eq!(state.navigation_state(), NavigationState::default());
        assert_eq!(state.readout(), "01 / 07");
        assert_eq!(state.current_section().map(|s| s.name), Some("Home"));
        assert_eq!(state.theme().name, "dark");
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let mut config = Config::new();
        config.theme_name = "neon".to_string();
        let result = State::new(&config, LogBuffer::new(10), Instant::now());
        assert!(matches!(result, Err(ConfigError::UnknownTheme(_))));
    }

    #[test]
    fn test_scroll_notch_advances_after_quiet_period() {
        let (mut state, t0) = state();
        state.scroll(1, t0);
        assert_eq!(state.navigation_state().current_index, 0);
        state.tick(t0 + ms(50));
        let nav = state.navigation_state();
        assert_eq!(nav.current_index, 1);
        assert_eq!(nav.direction, Direction::Forward);
        assert!(nav.is_transitioning);
        state.tick(t0 + ms(400));
        assert!(!state.navigation_state().is_transitioning);
    }

    #[test]
    fn test_opposite_notches_cancel() {
        let (mut state, t0) = state();
        state.scroll(1, t0);
        state.scroll(-1, t0 + ms(10));
        state.tick(t0 + ms(100));
        assert_eq!(state.navigation_state().current_index, 0);
    }

    #[test]
    fn test_click_dispatches_targets() {
        let (mut state, t0) = state();
        state.register_clickable(Rect::new(0, 0, 4, 1), ClickTarget::Section(4));
        state.register_clickable(Rect::new(10, 0, 1, 1), ClickTarget::ToggleTheme);
        state.register_clickable(Rect::new(0, 5, 20, 1), ClickTarget::Project(2));
        state.register_clickable(Rect::new(0, 0, 0, 0), ClickTarget::Section(1));
        assert_eq!(state.clickables().len(), 3);

        assert!(state.click(2, 0, t0));
        assert_eq!(state.navigation_state().current_index, 4);
        assert!(state.click(10, 0, t0));
        assert_eq!(state.theme().name, "light");
        assert!(state.click(5, 5, t0));
        assert_eq!(state.selected_project(), 2);
        assert!(!state.click(30, 30, t0));

        state.clear_clickables();
        assert!(!state.click(2, 0, t0));
    }

    #[test]
    fn test_next_project_only_on_projects_section() {
        let (mut state, t0) = state();
        assert!(!state.next_project());
        state.request_section(1, t0);
        assert!(state.next_project());
        assert_eq!(state.selected_project(), 1);
        for _ in 0..3 {
            state.next_project();
        }
        assert_eq!(state.selected_project(), 0);
        state.select_project(99);
        assert_eq!(state.selected_project(), 0);
    }

    #[test]
    fn test_contact_prompt_sends_then_clears() {
        let (mut state, t0) = state();
        assert!(!state.focus_prompt());
        state.request_section(6, t0);
        assert!(state.focus_prompt());
        "  ".chars().for_each(|c| state.type_prompt(c));
        assert!(!state.submit_prompt(t0 + ms(10)));

        "hi!".chars().for_each(|c| state.type_prompt(c));
        state.erase_prompt();
        assert!(state.submit_prompt(t0 + ms(20)));
        assert!(state.prompt().is_submitting());
        assert_eq!(state.prompt().text(), "  hi");

        state.tick(t0 + ms(1_000));
        assert_eq!(state.prompt().text(), "  hi");
        state.tick(t0 + ms(20) + SUBMIT_DURATION);
        assert_eq!(state.prompt().text(), "");
        assert!(!state.prompt().is_submitting());
        assert!(state.is_prompt_focused());
    }

    #[test]
    fn test_prompt_clicks_and_leaving_contact() {
        let (mut state, t0) = state();
        state.request_section(6, t0);
        state.register_clickable(Rect::new(0, 10, 30, 3), ClickTarget::Prompt);
        state.register_clickable(Rect::new(32, 11, 8, 1), ClickTarget::SubmitPrompt);
        assert!(state.click(3, 11, t0));
        assert!(state.is_prompt_focused());
        assert!(state.footer_text().contains("Enter: send"));
        "yo".chars().for_each(|c| state.type_prompt(c));
        assert!(state.click(33, 11, t0 + ms(5)));
        assert!(state.prompt().is_submitting());
        assert!(!state.is_prompt_focused());

        state.focus_prompt();
        state.request_section(5, t0 + ms(500));
        assert!(!state.is_prompt_focused());
        assert!(!state.focus_prompt());
    }

    #[test]
    fn test_teardown_freezes_navigation() {
        let (mut state, t0) = state();
        state.request_section(2, t0);
        state.teardown();
        state.tick(t0 + ms(1_000));
        assert_eq!(
            state.request_section(3, t0 + ms(1_100)),
            NavigateOutcome::TornDown
        );
        assert_eq!(state.navigation_state().current_index, 2);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let (mut state, t0) = state();
        state.tick(t0 + ms(500));
        state.tick(t0 + ms(100));
        assert_eq!(state.elapsed(), ms(500));
    }
}
