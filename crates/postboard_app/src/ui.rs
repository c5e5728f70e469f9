//! Presentational primitives: a clickable button and a static content card,
//! rendered as plain text.

/// Size class for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

/// Shape class for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonShape {
    RoundedSm,
    RoundedMd,
    RoundedFull,
}

/// A clickable control. Rendering only; whether a click does anything is
/// the page controller's decision, so a disabled button is both rendered
/// as inert and ignored on input.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub size: ButtonSize,
    pub shape: ButtonShape,
    pub enabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, size: ButtonSize, shape: ButtonShape) -> Self {
        Self {
            label: label.into(),
            size,
            shape,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn render(&self) -> String {
        let pad = match self.size {
            ButtonSize::Small => "",
            ButtonSize::Medium => " ",
            ButtonSize::Large => "  ",
        };
        let label = format!("{pad}{}{pad}", self.label);
        let framed = match self.shape {
            ButtonShape::RoundedSm => format!("[{label}]"),
            ButtonShape::RoundedMd => format!("({label})"),
            ButtonShape::RoundedFull => format!("(({label}))"),
        };
        if self.enabled {
            framed
        } else {
            format!("-{framed}-")
        }
    }
}

/// A static content card with a title and a body.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn render(&self) -> String {
        let rule = "-".repeat(60);
        format!("+{rule}\n| {}\n|\n| {}\n+{rule}", self.title, self.body)
    }
}
