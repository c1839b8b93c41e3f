//! Application-wide constants

/// Minimum terminal width required to run the application
pub const MIN_TERMINAL_WIDTH: u16 = 60;

/// Minimum terminal height required to run the application
pub const MIN_TERMINAL_HEIGHT: u16 = 16;

/// Frame duration in milliseconds for the UI render loop (targeting 60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;

/// Cadence of the countdown/clock tick in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Maximum digits accepted by the hours input field
pub const MAX_HOURS_DIGITS: usize = 3;

/// Maximum digits accepted by the minutes and seconds input fields
pub const MAX_MIN_SEC_DIGITS: usize = 2;

/// Upper bound for the --hours CLI flag
pub const MAX_CLI_HOURS: u64 = 999;

/// Upper bound for the --minutes and --seconds CLI flags
pub const MAX_CLI_MIN_SEC: u64 = 59;

/// Base window title, shown without a suffix while idle
pub const WINDOW_TITLE: &str = "全屏倒计时时钟";

/// Window title suffix while the countdown is running
pub const TITLE_SUFFIX_RUNNING: &str = "倒计时中";

/// Window title suffix while the countdown is paused
pub const TITLE_SUFFIX_PAUSED: &str = "已暂停";

/// Prefix for the countdown readout line
pub const COUNTDOWN_PREFIX: &str = "倒计时";

/// Countdown label once the timer reaches zero
pub const MSG_TIME_UP: &str = "时间到!";

/// Caption for the start control
pub const CAPTION_START: &str = "开始倒计时";

/// Caption for the pause control while running (and after reset)
pub const CAPTION_PAUSE: &str = "暂停";

/// Caption for the pause control while paused
pub const CAPTION_RESUME: &str = "继续";

/// Caption for the reset control
pub const CAPTION_RESET: &str = "重置";

/// Caption for the portrait orientation toggle
pub const CAPTION_PORTRAIT: &str = "竖屏";

/// Caption for the landscape orientation toggle
pub const CAPTION_LANDSCAPE: &str = "横屏";

/// Caption for the fullscreen toggle
pub const CAPTION_FULLSCREEN: &str = "切换全屏";
