use palette::named;

use crate::error::{RingError, RingResult};
use crate::framebuffer::Pixel;

pub const PRESETS: [(&str, Pixel); 12] = [
    ("red", named::RED),
    ("green", named::LIME),
    ("blue", named::BLUE),
    ("white", named::WHITE),
    ("yellow", named::YELLOW),
    ("cyan", named::CYAN),
    ("magenta", named::MAGENTA),
    ("orange", named::ORANGE),
    ("purple", named::PURPLE),
    ("pink", named::PINK),
    ("warm", Pixel::new(255, 147, 41)),
    ("cool", Pixel::new(64, 156, 255)),
];

/// Looks up a preset by name. Any other SVG color name is accepted too.
pub fn lookup(name: &str) -> RingResult<Pixel> {
    let name = name.to_lowercase();
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, color)| *color)
        .or_else(|| named::from_str(&name))
        .ok_or(RingError::UnknownPreset(name))
}

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets() {
        assert_eq!(lookup("green").unwrap(), Pixel::new(0, 255, 0));
        assert_eq!(lookup("Orange").unwrap(), Pixel::new(255, 165, 0));
        assert_eq!(lookup("purple").unwrap(), Pixel::new(128, 0, 128));
        assert_eq!(lookup("pink").unwrap(), Pixel::new(255, 192, 203));
        assert_eq!(lookup("warm").unwrap(), Pixel::new(255, 147, 41));
    }

    #[test]
    fn svg_color_names_fall_through() {
        assert_eq!(lookup("teal").unwrap(), Pixel::new(0, 128, 128));
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(
            lookup("sparkly"),
            Err(RingError::UnknownPreset(name)) if name == "sparkly"
        ));
        assert_eq!(preset_names().len(), 12);
    }
}
