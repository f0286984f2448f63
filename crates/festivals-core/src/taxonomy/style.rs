use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A musical style a festival can be tagged with.
///
/// The vocabulary is closed: record tokens that don't name one of these
/// variants are rejected by the parser. Variants are declared in
/// alphabetical order of their canonical names, so the derived `Ord`
/// gives a stable listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Style {
    Blues,
    Electronic,
    Folk,
    Fusion,
    HipHop,
    Indie,
    Jazz,
    Metal,
    Pop,
    Punk,
    Reggae,
    Rock,
    Techno,
}

/// Extra spellings seen in the wild.
const STYLE_ALIASES: &[(Style, &str)] = &[(Style::HipHop, "hip-hop")];

impl Style {
    /// Every style, in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Blues,
        Self::Electronic,
        Self::Folk,
        Self::Fusion,
        Self::HipHop,
        Self::Indie,
        Self::Jazz,
        Self::Metal,
        Self::Pop,
        Self::Punk,
        Self::Reggae,
        Self::Rock,
        Self::Techno,
    ];

    /// The canonical upper-case name, as written in record files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blues => "BLUES",
            Self::Electronic => "ELECTRONIC",
            Self::Folk => "FOLK",
            Self::Fusion => "FUSION",
            Self::HipHop => "HIPHOP",
            Self::Indie => "INDIE",
            Self::Jazz => "JAZZ",
            Self::Metal => "METAL",
            Self::Pop => "POP",
            Self::Punk => "PUNK",
            Self::Reggae => "REGGAE",
            Self::Rock => "ROCK",
            Self::Techno => "TECHNO",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a token outside the style vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style '{0}'")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    /// Case-insensitive lookup by canonical name or alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(token))
            .or_else(|| {
                STYLE_ALIASES
                    .iter()
                    .find(|(_, alias)| alias.eq_ignore_ascii_case(token))
                    .map(|&(style, _)| style)
            })
            .ok_or_else(|| UnknownStyle(token.to_string()))
    }
}
