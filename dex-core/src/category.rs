/// Categories the upstream catalog is known to use, in display order.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Color used for categories missing from the palette.
const DEFAULT_COLOR: &str = "#68A090";

/// Hex color associated with a category (case-insensitive).
pub fn category_color(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "normal" => "#A8A878",
        "fire" => "#F08030",
        "water" => "#6890F0",
        "electric" => "#F8D030",
        "grass" => "#78C850",
        "ice" => "#98D8D8",
        "fighting" => "#C03028",
        "poison" => "#A040A0",
        "ground" => "#E0C068",
        "flying" => "#A890F0",
        "psychic" => "#F85888",
        "bug" => "#A8B820",
        "rock" => "#B8A038",
        "ghost" => "#705898",
        "dragon" => "#7038F8",
        "dark" => "#705848",
        "steel" => "#B8B8D0",
        "fairy" => "#EE99AC",
        _ => DEFAULT_COLOR,
    }
}

/// The category color as an RGB triple, for terminal truecolor output.
pub fn category_rgb(category: &str) -> (u8, u8, u8) {
    parse_hex(category_color(category)).unwrap_or((0x68, 0xA0, 0x90))
}

/// Whether `category` is one of [`KNOWN_CATEGORIES`].
pub fn is_known_category(category: &str) -> bool {
    let lower = category.trim().to_lowercase();
    KNOWN_CATEGORIES.contains(&lower.as_str())
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_18_known_categories() {
        assert_eq!(KNOWN_CATEGORIES.len(), 18);
    }

    #[test]
    fn every_known_category_has_its_own_color() {
        for category in KNOWN_CATEGORIES {
            assert_ne!(
                category_color(category),
                DEFAULT_COLOR,
                "{category} fell through to the default color"
            );
        }
    }

    #[test]
    fn unknown_category_uses_default() {
        assert_eq!(category_color("shadow"), "#68A090");
        assert_eq!(category_rgb("shadow"), (0x68, 0xA0, 0x90));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(category_color("FIRE"), "#F08030");
        assert!(is_known_category(" Water "));
        assert!(!is_known_category("all"));
    }

    #[test]
    fn rgb_parses_palette_hex() {
        assert_eq!(category_rgb("fire"), (0xF0, 0x80, 0x30));
    }
}
