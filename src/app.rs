use crate::constants::{
    CAPTION_PAUSE, CAPTION_RESUME, COUNTDOWN_PREFIX, MSG_TIME_UP, TITLE_SUFFIX_PAUSED,
    TITLE_SUFFIX_RUNNING, WINDOW_TITLE,
};
use crate::countdown::{Countdown, Phase, TickOutcome};
use crate::types::{InputField, Orientation};
use chrono::{DateTime, Local};

/// All mutable application state, owned by the event loop and read by the
/// view layer each frame.
pub struct AppState {
    pub countdown: Countdown,

    // Last wall-clock reading; retained unchanged between ticks
    pub clock_text: String,

    // Duration input buffers (digit-only, enforced by the key handler)
    pub hours_input: String,
    pub minutes_input: String,
    pub seconds_input: String,
    pub focus: InputField,

    // Inline error message overwriting the countdown readout after a
    // rejected Start; persists until the next successful Start or Reset
    pub notice: Option<String>,

    pub orientation: Orientation,
    pub fullscreen: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            countdown: Countdown::new(),
            clock_text: Local::now().format("%H:%M:%S").to_string(),
            hours_input: "0".to_string(),
            minutes_input: "0".to_string(),
            seconds_input: "0".to_string(),
            focus: InputField::Hours,
            notice: None,
            orientation: Orientation::Portrait,
            fullscreen: true,
            should_quit: false,
        }
    }

    /// Window title mirroring the engine state
    pub fn window_title(&self) -> String {
        match self.countdown.phase() {
            Phase::Running => format!("{} - {}", WINDOW_TITLE, TITLE_SUFFIX_RUNNING),
            Phase::Paused => format!("{} - {}", WINDOW_TITLE, TITLE_SUFFIX_PAUSED),
            Phase::Idle | Phase::Expired => WINDOW_TITLE.to_string(),
        }
    }

    /// Text of the countdown readout line
    pub fn countdown_text(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match self.countdown.phase() {
            Phase::Expired => MSG_TIME_UP.to_string(),
            _ => format!("{}: {}", COUNTDOWN_PREFIX, self.countdown.display()),
        }
    }

    pub fn start_enabled(&self) -> bool {
        matches!(self.countdown.phase(), Phase::Idle | Phase::Expired)
    }

    pub fn pause_enabled(&self) -> bool {
        matches!(self.countdown.phase(), Phase::Running | Phase::Paused)
    }

    pub fn pause_caption(&self) -> &'static str {
        match self.countdown.phase() {
            Phase::Paused => CAPTION_RESUME,
            _ => CAPTION_PAUSE,
        }
    }

    /// Start the countdown from the current input fields. Ignored while the
    /// start control is disabled; input errors become the inline notice.
    pub fn start(&mut self) {
        if !self.start_enabled() {
            return;
        }

        match self
            .countdown
            .start(&self.hours_input, &self.minutes_input, &self.seconds_input)
        {
            Ok(total) => {
                log::info!("Countdown started: {} seconds", total);
                self.notice = None;
            }
            Err(e) => {
                log::warn!("Start rejected: {}", e);
                self.notice = Some(e.to_string());
            }
        }
    }

    pub fn pause_or_resume(&mut self) {
        if !self.pause_enabled() {
            return;
        }
        self.countdown.pause_or_resume();
        log::info!(
            "Countdown {}",
            if self.countdown.is_running() {
                "resumed"
            } else {
                "paused"
            }
        );
    }

    pub fn reset(&mut self) {
        self.countdown.reset();
        self.notice = None;
        log::info!("Countdown reset");
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            log::info!("Orientation set to {:?}", orientation);
        }
        self.orientation = orientation;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        log::info!(
            "Fullscreen {}",
            if self.fullscreen { "enabled" } else { "disabled" }
        );
    }

    /// Once-per-second tick: refresh the live clock, advance the countdown,
    /// and fire the expiry alert when it reaches zero.
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.clock_text = now.format("%H:%M:%S").to_string();

        match self.countdown.tick() {
            TickOutcome::Counting => {}
            TickOutcome::Expired => {
                log::info!("Countdown expired");
                self.ring_alert();
            }
            TickOutcome::Idle => {}
        }
    }

    // Placeholder for an audible/haptic expiry alert
    fn ring_alert(&self) {
        log::debug!("Alert hook fired (no-op)");
    }

    pub fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Hours => &self.hours_input,
            InputField::Minutes => &self.minutes_input,
            InputField::Seconds => &self.seconds_input,
        }
    }

    fn input_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Hours => &mut self.hours_input,
            InputField::Minutes => &mut self.minutes_input,
            InputField::Seconds => &mut self.seconds_input,
        }
    }

    /// Append a digit to the focused input field. Non-digits and overlong
    /// input are dropped at this layer, mirroring a digit-only input filter.
    pub fn push_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let max = self.focus.max_digits();
        let buffer = self.input_mut(self.focus);
        if buffer.len() < max {
            buffer.push(c);
        }
    }

    pub fn pop_digit(&mut self) {
        self.input_mut(self.focus).pop();
    }

    pub fn clear_field(&mut self) {
        self.input_mut(self.focus).clear();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(h: &str, m: &str, s: &str) -> AppState {
        let mut app = AppState::new();
        app.hours_input = h.to_string();
        app.minutes_input = m.to_string();
        app.seconds_input = s.to_string();
        app.start();
        app
    }

    #[test]
    fn test_title_mirrors_engine_state() {
        let mut app = started("0", "0", "5");
        assert_eq!(app.window_title(), "全屏倒计时时钟 - 倒计时中");

        app.pause_or_resume();
        assert_eq!(app.window_title(), "全屏倒计时时钟 - 已暂停");

        app.reset();
        assert_eq!(app.window_title(), "全屏倒计时时钟");
    }

    #[test]
    fn test_countdown_text_formats_remaining() {
        let app = started("1", "1", "1");
        assert_eq!(app.countdown_text(), "倒计时: 01:01:01");

        let app = started("0", "0", "59");
        assert_eq!(app.countdown_text(), "倒计时: 00:00:59");
    }

    #[test]
    fn test_zero_duration_shows_valid_time_notice() {
        let app = started("0", "0", "0");
        assert_eq!(app.countdown_text(), "请输入有效时间");
        assert_eq!(app.countdown.remaining_seconds(), 0);
        assert!(!app.countdown.is_running());
    }

    #[test]
    fn test_non_numeric_shows_digits_notice() {
        let app = started("abc", "", "");
        assert_eq!(app.countdown_text(), "请输入数字");
        assert_eq!(app.countdown.remaining_seconds(), 0);
        assert!(!app.countdown.is_running());
    }

    #[test]
    fn test_notice_persists_until_reset() {
        let mut app = started("0", "0", "0");
        assert_eq!(app.countdown_text(), "请输入有效时间");

        app.tick(Local::now());
        assert_eq!(app.countdown_text(), "请输入有效时间");

        app.reset();
        assert_eq!(app.countdown_text(), "倒计时: 00:00:00");
    }

    #[test]
    fn test_successful_start_clears_notice() {
        let mut app = started("0", "0", "0");
        assert!(app.notice.is_some());

        app.seconds_input = "5".to_string();
        app.start();
        assert!(app.notice.is_none());
        assert_eq!(app.countdown_text(), "倒计时: 00:00:05");
    }

    #[test]
    fn test_start_ignored_while_running_or_paused() {
        let mut app = started("0", "0", "10");
        assert!(!app.start_enabled());

        app.tick(Local::now());
        app.start();
        assert_eq!(app.countdown.remaining_seconds(), 9);

        app.pause_or_resume();
        app.start();
        assert_eq!(app.countdown.remaining_seconds(), 9);
    }

    #[test]
    fn test_start_reenabled_after_expiry() {
        let mut app = started("0", "0", "1");
        app.tick(Local::now());
        assert_eq!(app.countdown_text(), "时间到!");
        assert!(app.start_enabled());
        assert!(!app.pause_enabled());

        app.start();
        assert!(app.countdown.is_running());
        assert_eq!(app.countdown.remaining_seconds(), 1);
    }

    #[test]
    fn test_pause_caption_follows_state() {
        let mut app = started("0", "0", "5");
        assert_eq!(app.pause_caption(), "暂停");

        app.pause_or_resume();
        assert_eq!(app.pause_caption(), "继续");

        app.reset();
        assert_eq!(app.pause_caption(), "暂停");
    }

    #[test]
    fn test_ticks_do_not_decrement_while_paused() {
        let mut app = started("0", "0", "10");
        app.pause_or_resume();

        app.tick(Local::now());
        app.tick(Local::now());
        assert_eq!(app.countdown.remaining_seconds(), 10);

        app.pause_or_resume();
        app.tick(Local::now());
        assert_eq!(app.countdown.remaining_seconds(), 9);
    }

    #[test]
    fn test_tick_updates_clock_text() {
        let mut app = AppState::new();
        let now = Local::now();
        app.tick(now);
        assert_eq!(app.clock_text, now.format("%H:%M:%S").to_string());
        assert_eq!(app.clock_text.len(), 8);
    }

    #[test]
    fn test_orientation_is_single_valued() {
        let mut app = AppState::new();
        assert_eq!(app.orientation, Orientation::Portrait);

        app.set_orientation(Orientation::Landscape);
        assert_eq!(app.orientation, Orientation::Landscape);

        app.set_orientation(Orientation::Portrait);
        assert_eq!(app.orientation, Orientation::Portrait);
    }

    #[test]
    fn test_fullscreen_toggle_flips() {
        let mut app = AppState::new();
        assert!(app.fullscreen);
        app.toggle_fullscreen();
        assert!(!app.fullscreen);
        app.toggle_fullscreen();
        assert!(app.fullscreen);
    }

    #[test]
    fn test_push_digit_filters_and_caps() {
        let mut app = AppState::new();
        app.clear_field();
        app.push_digit('1');
        app.push_digit('x');
        app.push_digit('2');
        app.push_digit('3');
        app.push_digit('4'); // over the 3-digit hours cap
        assert_eq!(app.hours_input, "123");

        app.focus_next();
        app.clear_field();
        app.push_digit('5');
        app.push_digit('9');
        app.push_digit('9'); // over the 2-digit minutes cap
        assert_eq!(app.minutes_input, "59");
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut app = AppState::new();
        assert_eq!(app.focus, InputField::Hours);
        app.focus_next();
        assert_eq!(app.focus, InputField::Minutes);
        app.focus_next();
        assert_eq!(app.focus, InputField::Seconds);
        app.focus_next();
        assert_eq!(app.focus, InputField::Hours);
        app.focus_previous();
        assert_eq!(app.focus, InputField::Seconds);
    }
}
