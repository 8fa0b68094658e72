//! The fixed nine-entry palette.

use super::{Color, Rgb};

/// One palette slot.
struct Entry {
    name: &'static str,
    glyph: char,
    rgb: Rgb,
}

impl Entry {
    const fn new(name: &'static str, glyph: char, rgb: Rgb) -> Self {
        Self { name, glyph, rgb }
    }
}

const ENTRIES: [Entry; 9] = [
    Entry::new("red", 'r', Rgb::new(255, 0, 0)),
    Entry::new("green", 'g', Rgb::new(0, 255, 0)),
    Entry::new("blue", 'b', Rgb::new(0, 0, 255)),
    Entry::new("yellow", 'y', Rgb::new(255, 255, 0)),
    Entry::new("orange", 'o', Rgb::new(255, 164, 0)),
    Entry::new("purple", 'p', Rgb::new(128, 0, 128)),
    Entry::new("brown", 'n', Rgb::new(165, 42, 42)),
    Entry::new("black", 'k', Rgb::new(0, 0, 0)),
    Entry::new("white", '.', Rgb::new(255, 255, 255)),
];

/// Index-to-RGB mapping used at export time.
///
/// The palette is static data; there is no way to add or change entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette;

impl Palette {
    /// Number of palette entries.
    pub const LEN: usize = ENTRIES.len();

    fn entry(color: Color) -> Option<&'static Entry> {
        usize::try_from(color.index())
            .ok()
            .and_then(|i| ENTRIES.get(i))
    }

    /// RGB value for a colour, or `None` if the index is outside the palette.
    pub fn rgb(color: Color) -> Option<Rgb> {
        Self::entry(color).map(|e| e.rgb)
    }

    /// Palette name for a colour.
    pub fn name(color: Color) -> Option<&'static str> {
        Self::entry(color).map(|e| e.name)
    }

    /// Single-character glyph used by text previews.
    pub fn glyph(color: Color) -> Option<char> {
        Self::entry(color).map(|e| e.glyph)
    }

    /// Find a colour by name, ignoring case.
    pub fn lookup(name: &str) -> Option<Color> {
        ENTRIES
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
            .map(|i| Color::new(i as i32))
    }

    /// Iterate over `(colour, name, rgb)` in index order.
    pub fn iter() -> impl Iterator<Item = (Color, &'static str, Rgb)> {
        ENTRIES
            .iter()
            .enumerate()
            .map(|(i, e)| (Color::new(i as i32), e.name, e.rgb))
    }
}
