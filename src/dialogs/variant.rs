// SPDX-License-Identifier: MPL-2.0
//! Dialog tone.
//!
//! A variant only selects accent styling; it never changes how an alert or a
//! confirmation behaves.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Alternative,
    Dark,
    Light,
    Green,
    Red,
    Yellow,
    Purple,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Alternative,
        Variant::Dark,
        Variant::Light,
        Variant::Green,
        Variant::Red,
        Variant::Yellow,
        Variant::Purple,
    ];

    /// Returns the accent color used for borders and the primary button.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Variant::Alternative => palette::GRAY_400,
            Variant::Dark => palette::GRAY_700,
            Variant::Light => palette::GRAY_200,
            Variant::Green => palette::SUCCESS_500,
            Variant::Red => palette::ERROR_500,
            Variant::Yellow => palette::WARNING_500,
            Variant::Purple => palette::PURPLE_500,
        }
    }

    /// Text color that stays readable on top of [`Variant::accent`].
    #[must_use]
    pub fn on_accent(self) -> Color {
        match self {
            Variant::Light | Variant::Yellow => palette::GRAY_900,
            _ => palette::WHITE,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Alternative => "alternative",
            Variant::Dark => "dark",
            Variant::Light => "light",
            Variant::Green => "green",
            Variant::Red => "red",
            Variant::Yellow => "yellow",
            Variant::Purple => "purple",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_alternative() {
        assert_eq!(Variant::default(), Variant::Alternative);
    }

    #[test]
    fn semantic_accents_are_distinct() {
        let green = Variant::Green.accent();
        let red = Variant::Red.accent();
        let yellow = Variant::Yellow.accent();
        let purple = Variant::Purple.accent();

        assert_ne!(green, red);
        assert_ne!(green, yellow);
        assert_ne!(red, purple);
        assert_ne!(yellow, purple);
    }

    #[test]
    fn variants_deserialize_from_kebab_case() {
        #[derive(Deserialize)]
        struct Holder {
            variant: Variant,
        }

        let holder: Holder = toml::from_str("variant = \"purple\"").expect("valid variant");
        assert_eq!(holder.variant, Variant::Purple);
    }

    #[test]
    fn display_matches_serialized_name() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string(), variant.as_str());
        }
    }
}
