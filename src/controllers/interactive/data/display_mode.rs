#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Guide,
    Fractal,
}

impl DisplayMode {
    /// The mode after the confirm key. `Fractal` is terminal.
    #[must_use]
    pub const fn confirmed(self) -> Self {
        Self::Fractal
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Guide => "Guide",
            Self::Fractal => "Fractal",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayMode;

    #[test]
    fn starts_on_guide() {
        assert_eq!(DisplayMode::default(), DisplayMode::Guide);
    }

    #[test]
    fn confirming_never_returns_to_guide() {
        assert_eq!(DisplayMode::Guide.confirmed(), DisplayMode::Fractal);
        assert_eq!(DisplayMode::Fractal.confirmed(), DisplayMode::Fractal);
    }
}
