//! Theme context injected into the root state.
//!
//! Holds the light and dark palettes plus which one is active. The renderer
//! reads it through [`ThemeContext::palette`]; the event handler flips it with
//! [`ThemeContext::toggle`]. There is no other way to reach the theme.

use crate::ui::theme::Theme;

/// Light or dark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Light palette with the pointer-tracked header tint.
    #[default]
    Light,
    /// Dark palette with a solid header.
    Dark,
}

impl ThemeVariant {
    /// The other variant.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name shown in the footer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Light/dark palette pair with the active variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    variant: ThemeVariant,
    light: Theme,
    dark: Theme,
}

impl ThemeContext {
    /// Creates a context starting at `variant`.
    #[must_use]
    pub const fn new(variant: ThemeVariant, light: Theme, dark: Theme) -> Self {
        Self {
            variant,
            light,
            dark,
        }
    }

    /// Active variant.
    #[must_use]
    pub const fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Palette of the active variant.
    #[must_use]
    pub const fn palette(&self) -> &Theme {
        match self.variant {
            ThemeVariant::Light => &self.light,
            ThemeVariant::Dark => &self.dark,
        }
    }

    /// Switches to the other variant.
    pub fn toggle(&mut self) {
        self.variant = self.variant.flipped();
        tracing::debug!(variant = self.variant.as_str(), palette = %self.palette().name, "theme toggled");
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeVariant::Light, Theme::default_light(), Theme::default_dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        for start in [ThemeVariant::Light, ThemeVariant::Dark] {
            let mut ctx = ThemeContext::new(start, Theme::default_light(), Theme::default_dark());
            let before = ctx.clone();
            ctx.toggle();
            assert_ne!(ctx.variant(), before.variant());
            ctx.toggle();
            assert_eq!(ctx, before);
        }
    }

    #[test]
    fn palette_follows_variant() {
        let mut ctx = ThemeContext::default();
        assert_eq!(ctx.palette().name, "catppuccin-latte");
        ctx.toggle();
        assert_eq!(ctx.palette().name, "catppuccin-mocha");
    }
}
