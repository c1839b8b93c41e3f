//! Countdown engine: pure timing state with no UI or clock dependencies

use thiserror::Error;

/// User-visible rejection of a Start request
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    #[error("请输入数字")]
    NotDigits,

    #[error("请输入有效时间")]
    ZeroDuration,
}

/// Logical state of the engine, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Expired,
}

/// What a single tick did, so the caller can hook the expiry side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running (or nothing left to count); state unchanged
    Idle,
    /// Decremented by one second, still above zero
    Counting,
    /// This tick reached exactly zero
    Expired,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_seconds: u64,
    is_running: bool,
    expired: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Countdown {
            remaining_seconds: 0,
            is_running: false,
            expired: false,
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn phase(&self) -> Phase {
        if self.remaining_seconds > 0 {
            if self.is_running {
                Phase::Running
            } else {
                Phase::Paused
            }
        } else if self.expired {
            Phase::Expired
        } else {
            Phase::Idle
        }
    }

    /// Start counting down from the duration described by three free-text
    /// fields. Blank fields count as zero. On any error the engine is left
    /// untouched so the user can correct the input and retry.
    ///
    /// Returns the total duration in seconds on success.
    pub fn start(&mut self, hours: &str, minutes: &str, seconds: &str) -> Result<u64, StartError> {
        let hours = parse_field(hours)?;
        let minutes = parse_field(minutes)?;
        let seconds = parse_field(seconds)?;

        let total = hours * 3600 + minutes * 60 + seconds;
        if total == 0 {
            return Err(StartError::ZeroDuration);
        }

        self.remaining_seconds = total;
        self.is_running = true;
        self.expired = false;
        Ok(total)
    }

    /// Advance by one second. Only decrements while running; the tick that
    /// reaches exactly zero stops the engine and reports `Expired`.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running || self.remaining_seconds == 0 {
            return TickOutcome::Idle;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.is_running = false;
            self.expired = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Counting
        }
    }

    /// Flip between running and paused without touching the remaining time.
    /// No-op unless there is something left to count.
    pub fn pause_or_resume(&mut self) {
        if self.remaining_seconds > 0 {
            self.is_running = !self.is_running;
        }
    }

    /// Back to the initial state. Idempotent.
    pub fn reset(&mut self) {
        self.remaining_seconds = 0;
        self.is_running = false;
        self.expired = false;
    }

    /// Remaining time as "HH:MM:SS"
    pub fn display(&self) -> String {
        format_hms(self.remaining_seconds)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(text: &str) -> Result<u64, StartError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| StartError::NotDigits)
}

/// Format a second count as zero-padded "HH:MM:SS"
pub fn format_hms(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_computes_total_seconds() {
        let mut cd = Countdown::new();
        let total = cd.start("1", "2", "3").unwrap();
        assert_eq!(total, 3723);
        assert_eq!(cd.remaining_seconds(), 3723);
        assert!(cd.is_running());
        assert_eq!(cd.phase(), Phase::Running);
    }

    #[test]
    fn test_start_blank_fields_default_to_zero() {
        let mut cd = Countdown::new();
        let total = cd.start("", "5", "  ").unwrap();
        assert_eq!(total, 300);
    }

    #[test]
    fn test_start_zero_duration_rejected() {
        let mut cd = Countdown::new();
        let result = cd.start("0", "0", "0");
        assert_eq!(result, Err(StartError::ZeroDuration));
        assert_eq!(cd.remaining_seconds(), 0);
        assert!(!cd.is_running());
        assert_eq!(cd.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_non_numeric_rejected() {
        let mut cd = Countdown::new();
        let result = cd.start("abc", "", "");
        assert_eq!(result, Err(StartError::NotDigits));
        assert_eq!(cd.remaining_seconds(), 0);
        assert!(!cd.is_running());
    }

    #[test]
    fn test_start_error_leaves_running_countdown_untouched() {
        let mut cd = Countdown::new();
        cd.start("0", "1", "0").unwrap();
        cd.tick();
        let before = cd.remaining_seconds();

        assert_eq!(cd.start("x", "y", "z"), Err(StartError::NotDigits));
        assert_eq!(cd.remaining_seconds(), before);
        assert!(cd.is_running());
    }

    #[test]
    fn test_tick_counts_down_to_exact_zero() {
        let mut cd = Countdown::new();
        cd.start("0", "0", "3").unwrap();

        assert_eq!(cd.tick(), TickOutcome::Counting);
        assert_eq!(cd.remaining_seconds(), 2);
        assert!(cd.is_running());

        assert_eq!(cd.tick(), TickOutcome::Counting);
        assert_eq!(cd.remaining_seconds(), 1);
        assert!(cd.is_running());

        assert_eq!(cd.tick(), TickOutcome::Expired);
        assert_eq!(cd.remaining_seconds(), 0);
        assert!(!cd.is_running());
        assert_eq!(cd.phase(), Phase::Expired);

        // Further ticks are inert
        assert_eq!(cd.tick(), TickOutcome::Idle);
        assert_eq!(cd.remaining_seconds(), 0);
    }

    #[test]
    fn test_tick_does_nothing_while_paused() {
        let mut cd = Countdown::new();
        cd.start("0", "0", "10").unwrap();
        cd.pause_or_resume();

        assert_eq!(cd.tick(), TickOutcome::Idle);
        assert_eq!(cd.remaining_seconds(), 10);
        assert_eq!(cd.phase(), Phase::Paused);
    }

    #[test]
    fn test_pause_resume_round_trip() {
        let mut cd = Countdown::new();
        cd.start("0", "0", "30").unwrap();

        cd.pause_or_resume();
        assert!(!cd.is_running());
        cd.pause_or_resume();
        assert!(cd.is_running());
        assert_eq!(cd.remaining_seconds(), 30);
    }

    #[test]
    fn test_pause_is_noop_when_idle_or_expired() {
        let mut cd = Countdown::new();
        cd.pause_or_resume();
        assert_eq!(cd.phase(), Phase::Idle);

        cd.start("0", "0", "1").unwrap();
        cd.tick();
        assert_eq!(cd.phase(), Phase::Expired);
        cd.pause_or_resume();
        assert_eq!(cd.phase(), Phase::Expired);
        assert!(!cd.is_running());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut cd = Countdown::new();
        cd.start("0", "1", "0").unwrap();
        cd.tick();

        cd.reset();
        assert_eq!(cd.remaining_seconds(), 0);
        assert!(!cd.is_running());
        assert_eq!(cd.phase(), Phase::Idle);

        cd.reset();
        assert_eq!(cd.remaining_seconds(), 0);
        assert!(!cd.is_running());
        assert_eq!(cd.phase(), Phase::Idle);
    }

    #[test]
    fn test_reset_clears_expired() {
        let mut cd = Countdown::new();
        cd.start("0", "0", "1").unwrap();
        cd.tick();
        assert_eq!(cd.phase(), Phase::Expired);

        cd.reset();
        assert_eq!(cd.phase(), Phase::Idle);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(86399), "23:59:59");
    }
}
