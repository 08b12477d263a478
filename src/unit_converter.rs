//! # Unit Converter
//!
//! This module normalizes the quantity and unit parts of free-text ingredient lines.
//!
//! ## Features
//!
//! - Replace unicode vulgar fractions (½, ¾, ...) with ASCII `a/b`
//! - Strip parenthetical notes ("(8 ounce)", "[optional]")
//! - Parse quantities: integers, decimals, fractions, mixed numbers and ranges
//! - Map long, abbreviated and plural unit spellings to a canonical short unit
//!
//! ## Usage
//!
//! ```rust
//! use forkify::unit_converter::{normalize_line, parse_unit, take_quantity, Unit};
//!
//! let line = normalize_line("1½ Cups flour (sifted)");
//! let tokens: Vec<&str> = line.split_whitespace().collect();
//!
//! let (count, consumed) = take_quantity(&tokens);
//! assert_eq!(count, Some(1.5));
//! assert_eq!(parse_unit(tokens[consumed]), Some(Unit::Cup));
//! ```

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical measurement units recognized in ingredient lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    // Volume units
    Tablespoon,
    Teaspoon,
    Cup,
    Milliliter,
    Liter,
    Pint,
    Quart,
    Gallon,

    // Weight units
    Ounce,
    Pound,
    Gram,
    Kilogram,
}

/// Unit spellings and the unit they stand for
static UNIT_MAPPINGS: LazyLock<HashMap<&'static str, Unit>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    map.insert("tbsp", Unit::Tablespoon);
    map.insert("tbsps", Unit::Tablespoon);
    map.insert("tbs", Unit::Tablespoon);
    map.insert("tbl", Unit::Tablespoon);
    map.insert("tablespoon", Unit::Tablespoon);
    map.insert("tablespoons", Unit::Tablespoon);
    map.insert("tsp", Unit::Teaspoon);
    map.insert("tsps", Unit::Teaspoon);
    map.insert("teaspoon", Unit::Teaspoon);
    map.insert("teaspoons", Unit::Teaspoon);
    map.insert("cup", Unit::Cup);
    map.insert("cups", Unit::Cup);
    map.insert("ml", Unit::Milliliter);
    map.insert("milliliter", Unit::Milliliter);
    map.insert("milliliters", Unit::Milliliter);
    map.insert("millilitre", Unit::Milliliter);
    map.insert("millilitres", Unit::Milliliter);
    map.insert("l", Unit::Liter);
    map.insert("liter", Unit::Liter);
    map.insert("liters", Unit::Liter);
    map.insert("litre", Unit::Liter);
    map.insert("litres", Unit::Liter);
    map.insert("pint", Unit::Pint);
    map.insert("pints", Unit::Pint);
    map.insert("pt", Unit::Pint);
    map.insert("quart", Unit::Quart);
    map.insert("quarts", Unit::Quart);
    map.insert("qt", Unit::Quart);
    map.insert("gallon", Unit::Gallon);
    map.insert("gallons", Unit::Gallon);
    map.insert("gal", Unit::Gallon);

    // Weight units
    map.insert("oz", Unit::Ounce);
    map.insert("ounce", Unit::Ounce);
    map.insert("ounces", Unit::Ounce);
    map.insert("lb", Unit::Pound);
    map.insert("lbs", Unit::Pound);
    map.insert("pound", Unit::Pound);
    map.insert("pounds", Unit::Pound);
    map.insert("g", Unit::Gram);
    map.insert("gram", Unit::Gram);
    map.insert("grams", Unit::Gram);
    map.insert("kg", Unit::Kilogram);
    map.insert("kilogram", Unit::Kilogram);
    map.insert("kilograms", Unit::Kilogram);

    map
});

/// Unicode vulgar fractions and their ASCII spelling
const FRACTION_GLYPHS: &[(char, &str)] = &[
    ('¼', "1/4"),
    ('½', "1/2"),
    ('¾', "3/4"),
    ('⅐', "1/7"),
    ('⅑', "1/9"),
    ('⅒', "1/10"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

lazy_static! {
    static ref PARENTHETICAL: Regex =
        Regex::new(r"\s*(?:\([^()]*\)|\[[^\[\]]*\])").expect("Parenthetical pattern should be valid");
    static ref DECIMAL: Regex =
        Regex::new(r"^(?:\d+(?:\.\d+)?|\.\d+)$").expect("Decimal pattern should be valid");
    static ref FRACTION: Regex =
        Regex::new(r"^(\d+)/(\d+)$").expect("Fraction pattern should be valid");
    static ref HYPHEN_MIXED: Regex =
        Regex::new(r"^(\d+)-(\d+)/(\d+)$").expect("Mixed number pattern should be valid");
    static ref RANGE: Regex = Regex::new(r"^(\d+(?:\.\d+)?)[-–](\d+(?:\.\d+)?)$")
        .expect("Range pattern should be valid");
}

impl Unit {
    /// The canonical short spelling stored in `Ingredient::unit`
    pub fn canonical(&self) -> &'static str {
        match self {
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::Cup => "cup",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Pint => "pint",
            Unit::Quart => "quart",
            Unit::Gallon => "gallon",
            Unit::Ounce => "oz",
            Unit::Pound => "pound",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
        }
    }
}

/// Look up a single token in the unit synonym table.
///
/// Matching is case-insensitive and ignores a trailing `.` or `,`
/// ("Tbsp." and "cups," both match).
pub fn parse_unit(token: &str) -> Option<Unit> {
    let cleaned = token.trim_end_matches(['.', ',']).to_lowercase();
    UNIT_MAPPINGS.get(cleaned.as_str()).copied()
}

/// Prepare a raw ingredient line for tokenizing.
///
/// Replaces vulgar fraction glyphs with `a/b` (a glyph glued to a digit becomes
/// a mixed number, so "1½" reads "1 1/2"), turns the fraction slash `⁄` into `/`,
/// removes parenthetical notes and collapses whitespace.
pub fn normalize_line(line: &str) -> String {
    let mut expanded = String::with_capacity(line.len() + 8);
    for c in line.chars() {
        if let Some((_, ascii)) = FRACTION_GLYPHS.iter().find(|(glyph, _)| *glyph == c) {
            expanded.push(' ');
            expanded.push_str(ascii);
            expanded.push(' ');
        } else if c == '⁄' {
            expanded.push('/');
        } else {
            expanded.push(c);
        }
    }

    let stripped = PARENTHETICAL.replace_all(&expanded, " ");
    let normalized = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    trace!("Normalized ingredient line {:?} -> {:?}", line, normalized);
    normalized
}

/// Remove bracketed notes from an ingredient name
pub fn strip_notes(text: &str) -> String {
    PARENTHETICAL.replace_all(text, " ").trim().to_string()
}

/// Parse a single quantity token.
///
/// Accepts "2", "1.5", ".5", "1/2", "1-1/2" (mixed) and "2-3" (range, counted
/// as its midpoint). Returns `None` for anything else, including zero denominators.
pub fn parse_quantity(token: &str) -> Option<f64> {
    let token = token.trim_end_matches(',');

    if DECIMAL.is_match(token) {
        return token.parse().ok();
    }

    if let Some(captures) = FRACTION.captures(token) {
        return fraction_value(&captures[1], &captures[2]);
    }

    if let Some(captures) = HYPHEN_MIXED.captures(token) {
        let whole: f64 = captures[1].parse().ok()?;
        return Some(whole + fraction_value(&captures[2], &captures[3])?);
    }

    if let Some(captures) = RANGE.captures(token) {
        let min: f64 = captures[1].parse().ok()?;
        let max: f64 = captures[2].parse().ok()?;
        return Some((min + max) / 2.0);
    }

    None
}

/// Consume the leading quantity of a tokenized line.
///
/// Returns the parsed count and how many tokens it spans: 2 for a mixed
/// number written across two tokens ("1 1/2"), 1 for a single quantity token,
/// 0 when the line does not start with a quantity.
pub fn take_quantity(tokens: &[&str]) -> (Option<f64>, usize) {
    let Some(first) = tokens.first() else {
        return (None, 0);
    };

    if let (Ok(whole), Some(second)) = (first.parse::<u32>(), tokens.get(1)) {
        if let Some(captures) = FRACTION.captures(second) {
            if let Some(fraction) = fraction_value(&captures[1], &captures[2]) {
                return (Some(whole as f64 + fraction), 2);
            }
        }
    }

    match parse_quantity(first) {
        Some(count) => (Some(count), 1),
        None => (None, 0),
    }
}

fn fraction_value(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: u32 = numerator.parse().ok()?;
    let denominator: u32 = denominator.parse().ok()?;
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!(parse_unit("cups"), Some(Unit::Cup));
        assert_eq!(parse_unit("cup"), Some(Unit::Cup));
        assert_eq!(parse_unit("Tablespoons"), Some(Unit::Tablespoon));
        assert_eq!(parse_unit("tbsp."), Some(Unit::Tablespoon));
        assert_eq!(parse_unit("lbs"), Some(Unit::Pound));
        assert_eq!(parse_unit("ounces,"), Some(Unit::Ounce));
        assert_eq!(parse_unit("pinch"), None);
        assert_eq!(parse_unit("flour"), None);
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(Unit::Tablespoon.canonical(), "tbsp");
        assert_eq!(Unit::Pound.canonical(), "pound");
        assert_eq!(Unit::Gram.canonical(), "g");
    }

    #[test]
    fn test_normalize_fraction_glyphs() {
        assert_eq!(normalize_line("½ cup sugar"), "1/2 cup sugar");
        assert_eq!(normalize_line("1½ cups milk"), "1 1/2 cups milk");
        assert_eq!(normalize_line("2¾cups water"), "2 3/4 cups water");
        assert_eq!(normalize_line("1⁄4 tsp salt"), "1/4 tsp salt");
    }

    #[test]
    fn test_normalize_strips_notes() {
        assert_eq!(
            normalize_line("1 (8 ounce) package cream cheese"),
            "1 package cream cheese"
        );
        assert_eq!(normalize_line("2 cups rice [cooked]"), "2 cups rice");
        assert_eq!(normalize_line("  salt   to taste "), "salt to taste");
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(parse_quantity("2"), Some(2.0));
        assert_eq!(parse_quantity("2.5"), Some(2.5));
        assert_eq!(parse_quantity(".5"), Some(0.5));
        assert_eq!(parse_quantity("1/2"), Some(0.5));
        assert_eq!(parse_quantity("1-1/2"), Some(1.5));
        assert_eq!(parse_quantity("2-3"), Some(2.5));
        assert_eq!(parse_quantity("1/0"), None);
        assert_eq!(parse_quantity("pinch"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn test_take_quantity() {
        assert_eq!(take_quantity(&["1", "1/2", "cups", "flour"]), (Some(1.5), 2));
        assert_eq!(take_quantity(&["3", "eggs"]), (Some(3.0), 1));
        assert_eq!(take_quantity(&["1/4", "tsp", "salt"]), (Some(0.25), 1));
        assert_eq!(take_quantity(&["pinch", "of", "salt"]), (None, 0));
        assert_eq!(take_quantity(&[]), (None, 0));
    }
}
