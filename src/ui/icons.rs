use std::collections::HashMap;

use crate::domain::weather::presentation::{IconKind, IconName};

/// Explicit icon registry handed to the renderer at startup. An entry the
/// atlas lacks leaves the icon cell blank rather than failing the draw.
#[derive(Debug, Clone)]
pub struct IconAtlas {
    glyphs: HashMap<IconName, &'static str>,
}

impl Default for IconAtlas {
    fn default() -> Self {
        Self::standard()
    }
}

impl IconAtlas {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    /// Built-in glyph set covering every icon name, day and night.
    #[must_use]
    pub fn standard() -> Self {
        let mut atlas = Self::empty();
        for kind in IconKind::ALL {
            for night in [false, true] {
                let name = IconName { kind, night };
                atlas.set(name, standard_glyph(kind, night));
            }
        }
        atlas
    }

    pub fn set(&mut self, name: IconName, glyph: &'static str) {
        self.glyphs.insert(name, glyph);
    }

    #[must_use]
    pub fn glyph(&self, name: IconName) -> Option<&'static str> {
        self.glyphs.get(&name).copied()
    }
}

fn standard_glyph(kind: IconKind, night: bool) -> &'static str {
    match (kind, night) {
        (IconKind::Clear, false) => "☀",
        (IconKind::Clear, true) => "☾",
        (IconKind::PartiallyCloudy, false) => "⛅",
        (IconKind::PartiallyCloudy, true) => "☁",
        (IconKind::MostlyCloudy, _) => "☁",
        (IconKind::Rain, _) => "☂",
        (IconKind::Drizzle, _) => "☔",
        (IconKind::Snow, _) => "❄",
        (IconKind::Thunderstorm, _) => "⚡",
        (IconKind::Haze, _) => "░",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_atlas_covers_every_name() {
        let atlas = IconAtlas::standard();
        for kind in IconKind::ALL {
            for night in [false, true] {
                assert!(
                    atlas.glyph(IconName { kind, night }).is_some(),
                    "missing glyph for {}",
                    IconName { kind, night }
                );
            }
        }
    }

    #[test]
    fn clear_sky_swaps_glyph_at_night() {
        let atlas = IconAtlas::standard();
        let day = atlas.glyph(IconName {
            kind: IconKind::Clear,
            night: false,
        });
        let night = atlas.glyph(IconName {
            kind: IconKind::Clear,
            night: true,
        });
        assert_ne!(day, night);
    }

    #[test]
    fn missing_entries_resolve_to_none() {
        let mut atlas = IconAtlas::empty();
        let name = IconName {
            kind: IconKind::Rain,
            night: false,
        };
        assert_eq!(atlas.glyph(name), None);

        atlas.set(name, "R");
        assert_eq!(atlas.glyph(name), Some("R"));
    }
}
