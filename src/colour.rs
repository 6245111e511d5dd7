//! Colours as they appear in configuration: `#rgb`, `#rrggbb`, or a CSS name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED: [(&str, Colour); 12] = [
    ("black", Colour::BLACK),
    ("white", Colour::WHITE),
    ("red", Colour::rgb(255, 0, 0)),
    ("green", Colour::rgb(0, 128, 0)),
    ("blue", Colour::BLUE),
    ("royalblue", Colour::ROYAL_BLUE),
    ("navy", Colour::rgb(0, 0, 128)),
    ("gray", Colour::rgb(128, 128, 128)),
    ("grey", Colour::rgb(128, 128, 128)),
    ("orange", Colour::rgb(255, 165, 0)),
    ("purple", Colour::rgb(128, 0, 128)),
    ("gold", Colour::rgb(255, 215, 0)),
];

impl Colour {
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    pub const BLUE: Colour = Colour::rgb(0, 0, 255);
    pub const ROYAL_BLUE: Colour = Colour::rgb(65, 105, 225);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Blend towards `background`; `amount` 1.0 keeps this colour, 0.0 gives the background
    pub fn mix(&self, background: Colour, amount: f64) -> Colour {
        let amount = amount.clamp(0.0, 1.0);
        let channel = |fg: u8, bg: u8| (bg as f64 + (fg as f64 - bg as f64) * amount).round() as u8;
        Colour::rgb(
            channel(self.r, background.r),
            channel(self.g, background.g),
            channel(self.b, background.b),
        )
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let digits = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| format!("`{s}` is not a hex colour"))?;
            return match digits[..] {
                [r, g, b] => Ok(Colour::rgb(r * 17, g * 17, b * 17)),
                [r1, r0, g1, g0, b1, b0] => Ok(Colour::rgb(
                    r1 * 16 + r0,
                    g1 * 16 + g0,
                    b1 * 16 + b0,
                )),
                _ => Err(format!("`{s}` should have 3 or 6 hex digits")),
            };
        }
        let name = s.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, colour)| *colour)
            .ok_or_else(|| format!("unknown colour `{s}`"))
    }
}

impl TryFrom<String> for Colour {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_hex() {
        assert_eq!("#444".parse::<Colour>(), Ok(Colour::rgb(0x44, 0x44, 0x44)));
    }

    #[test]
    fn parses_long_hex() {
        assert_eq!("#4169E1".parse::<Colour>(), Ok(Colour::ROYAL_BLUE));
    }

    #[test]
    fn parses_names_from_the_canvas_scripts() {
        assert_eq!("blue".parse::<Colour>(), Ok(Colour::BLUE));
        assert_eq!("RoyalBlue".parse::<Colour>(), Ok(Colour::ROYAL_BLUE));
    }

    #[test]
    fn rejects_garbage() {
        assert!("#12".parse::<Colour>().is_err());
        assert!("#zzzzzz".parse::<Colour>().is_err());
        assert!("chartreuse-ish".parse::<Colour>().is_err());
    }

    #[test]
    fn displays_as_long_hex() {
        assert_eq!(Colour::ROYAL_BLUE.to_string(), "#4169e1");
    }

    #[test]
    fn mix_goes_between_colours() {
        assert_eq!(Colour::WHITE.mix(Colour::BLACK, 1.0), Colour::WHITE);
        assert_eq!(Colour::WHITE.mix(Colour::BLACK, 0.0), Colour::BLACK);
        assert_eq!(Colour::WHITE.mix(Colour::BLACK, 0.5), Colour::rgb(128, 128, 128));
    }
}
