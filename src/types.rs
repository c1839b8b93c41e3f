use crate::constants::{
    CAPTION_LANDSCAPE, CAPTION_PORTRAIT, MAX_HOURS_DIGITS, MAX_MIN_SEC_DIGITS,
};

/// Screen orientation preference. The two toggles form one exclusive group,
/// so this is a single enum with one setter rather than two booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn caption(&self) -> &'static str {
        match self {
            Orientation::Portrait => CAPTION_PORTRAIT,
            Orientation::Landscape => CAPTION_LANDSCAPE,
        }
    }
}

/// Which duration input field currently receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Hours,
    Minutes,
    Seconds,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Hours => "时",
            InputField::Minutes => "分",
            InputField::Seconds => "秒",
        }
    }

    pub fn max_digits(&self) -> usize {
        match self {
            InputField::Hours => MAX_HOURS_DIGITS,
            InputField::Minutes | InputField::Seconds => MAX_MIN_SEC_DIGITS,
        }
    }

    pub fn next(&self) -> InputField {
        match self {
            InputField::Hours => InputField::Minutes,
            InputField::Minutes => InputField::Seconds,
            InputField::Seconds => InputField::Hours,
        }
    }

    pub fn previous(&self) -> InputField {
        match self {
            InputField::Hours => InputField::Seconds,
            InputField::Minutes => InputField::Hours,
            InputField::Seconds => InputField::Minutes,
        }
    }

    pub const ALL: [InputField; 3] = [InputField::Hours, InputField::Minutes, InputField::Seconds];
}
