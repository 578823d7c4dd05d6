#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMode {
    #[default]
    Grayscale,
    Hue,
}

impl ColourMode {
    pub const ALL: &'static [Self] = &[Self::Grayscale, Self::Hue];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Hue => "Hue",
        }
    }

    /// Flag understood by flat colourisers: `1` selects hue, anything else grayscale.
    #[must_use]
    pub const fn flag(self) -> u8 {
        match self {
            Self::Grayscale => 0,
            Self::Hue => 1,
        }
    }

    #[must_use]
    pub const fn from_flag(flag: u8) -> Self {
        if flag == 1 { Self::Hue } else { Self::Grayscale }
    }
}

impl std::fmt::Display for ColourMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
