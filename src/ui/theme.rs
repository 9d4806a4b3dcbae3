use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// An RGB color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Blend towards `other`; `amount` 0.0 keeps `self`, 1.0 yields `other`.
    ///
    pub fn mix(&self, other: &ColorSpec, amount: f64) -> ColorSpec {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * amount).round() as u8;
        ColorSpec {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Deep navy background with a cyan accent.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: rgb(56, 189, 248),   // Cyan
            secondary: rgb(167, 139, 250), // Violet
            banner: rgb(56, 189, 248),
            text: rgb(226, 232, 240),
            text_secondary: rgb(148, 163, 184),
            text_muted: rgb(100, 116, 139),
            background: rgb(13, 18, 28),
            surface: rgb(22, 30, 46),
            border_active: rgb(56, 189, 248),
            border_normal: rgb(51, 65, 85),
            highlight_bg: rgb(30, 58, 82),
            highlight_fg: rgb(240, 249, 255),
        }
    }

    /// Warm paper background with a teal accent.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: rgb(13, 116, 144),   // Teal
            secondary: rgb(109, 40, 217),  // Violet
            banner: rgb(13, 116, 144),
            text: rgb(28, 25, 23),
            text_secondary: rgb(87, 83, 78),
            text_muted: rgb(140, 134, 126),
            background: rgb(250, 248, 243),
            surface: rgb(240, 236, 227),
            border_active: rgb(13, 116, 144),
            border_normal: rgb(214, 208, 196),
            highlight_bg: rgb(204, 232, 238),
            highlight_fg: rgb(12, 74, 92),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["dark".to_string(), "light".to_string()]
    }

    /// The other palette of the dark/light pair.
    ///
    pub fn toggled(&self) -> Self {
        if self.name == "light" {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name != "light"
    }
}
