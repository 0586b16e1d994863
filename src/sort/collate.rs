//! Locale-aware string collation.
//!
//! Strings are compared level by level, the way Unicode collation orders
//! them for Latin-script locales:
//!
//! | Level | Compares | Example |
//! |-------|----------|---------|
//! | primary | base letters, case-folded, accents stripped | `adam` < `Zoe` |
//! | secondary | accents | `e` < `é` < `f` |
//! | tertiary | case | `a` < `A` |
//!
//! Both sides are canonically decomposed first, so precomposed and
//! decomposed spellings of the same text compare equal. Letters with no
//! decomposition, such as `ø`, `ł` or `ß`, collate as their base letters
//! (`o`, `l`, `ss`) and differ from them at the secondary level.

use std::cmp::Ordering;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Deepest level a [`Collator`] looks at before declaring two strings equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum Strength {
    /// Base letters only; accents and case are ignored.
    #[value(alias = "base")]
    Primary,
    /// Base letters and accents; case is ignored.
    #[value(alias = "accent")]
    Secondary,
    /// Base letters, accents and case.
    #[default]
    #[value(aliases = ["case", "variant"])]
    Tertiary,
}

impl FromStr for Strength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "base" => Ok(Strength::Primary),
            "secondary" | "accent" => Ok(Strength::Secondary),
            "tertiary" | "case" | "variant" => Ok(Strength::Tertiary),
            other => Err(format!(
                "invalid strength '{}': expected primary, secondary or tertiary",
                other
            )),
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strength::Primary => "primary",
            Strength::Secondary => "secondary",
            Strength::Tertiary => "tertiary",
        };
        f.write_str(name)
    }
}

/// Primary ordering groups: whitespace, then punctuation and symbols, then
/// digits, then letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

/// One collation element: a case-folded base character plus the combining
/// marks that followed it in NFD.
#[derive(Debug)]
struct Element {
    class: CharClass,
    base: char,
    marks: Vec<char>,
    upper: bool,
}

impl Element {
    fn primary(&self) -> (CharClass, char) {
        (self.class, self.base)
    }
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c)
            && let Some(last) = out.last_mut()
        {
            last.marks.push(c);
            continue;
        }
        let class = CharClass::of(c);
        let upper = c.is_uppercase();
        for lower in c.to_lowercase() {
            match fold(lower) {
                // The folded letter itself becomes a secondary weight.
                Some(bases) => out.extend(bases.chars().enumerate().map(|(i, base)| Element {
                    class,
                    base,
                    marks: if i == 0 { vec![lower] } else { Vec::new() },
                    upper,
                })),
                None => out.push(Element {
                    class,
                    base: lower,
                    marks: Vec::new(),
                    upper,
                }),
            }
        }
    }
    out
}

/// Primary letters for lowercase letters that have no canonical
/// decomposition but collate with a Latin base letter.
fn fold(c: char) -> Option<&'static str> {
    let bases = match c {
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ŧ' => "t",
        'ı' => "i",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        _ => return None,
    };
    Some(bases)
}

/// Multi-level string comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collator {
    strength: Strength,
}

impl Collator {
    pub fn new(strength: Strength) -> Self {
        Self { strength }
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Compares two strings up to the configured strength.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let ea = elements(a);
        let eb = elements(b);

        let primary = ea
            .iter()
            .map(Element::primary)
            .cmp(eb.iter().map(Element::primary));
        if primary != Ordering::Equal || self.strength == Strength::Primary {
            return primary;
        }

        let secondary = ea
            .iter()
            .map(|e| e.marks.as_slice())
            .cmp(eb.iter().map(|e| e.marks.as_slice()));
        if secondary != Ordering::Equal || self.strength == Strength::Secondary {
            return secondary;
        }

        // Lowercase first.
        ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper))
    }
}
