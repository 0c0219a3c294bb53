use clap::ValueEnum;
use rand::Rng;
use thiserror::Error;

use crate::element::Element;
use crate::ordering::Direction;

/// Random arrays stay within the range the display comfortably fits.
pub const MIN_RANDOM_LEN: usize = 4;
/// Hard cap for any array, random or custom.
pub const MAX_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Insertion,
    Bubble,
    Merge,
}

impl Algorithm {
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion",
            Algorithm::Bubble => "Bubble",
            Algorithm::Merge => "Merge",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Numbers,
    Letters,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("please enter at least one value")]
    Empty,
    #[error("maximum 12 values allowed")]
    TooManyValues,
    #[error("all values must be either numbers (1,2,3) or single letters (A,B,C)")]
    MixedValues,
    #[error("numbers must be between 1 and 99")]
    NumberOutOfRange,
    #[error("array size must be between 4 and 12, got {0}")]
    SizeOutOfRange(usize),
}

/// Everything one generation run needs, passed by value into the generators.
/// No ambient state: regenerating after a toggle flip builds a new config.
#[derive(Debug, Clone)]
pub struct SortConfig {
    pub values: Vec<Element>,
    pub direction: Direction,
    pub detailed: bool,
    pub algorithm: Algorithm,
    kind: ElementKind,
    custom: bool,
}

impl SortConfig {
    /// A config over a freshly drawn random array of `size` elements.
    pub fn random(
        algorithm: Algorithm,
        direction: Direction,
        detailed: bool,
        kind: ElementKind,
        size: usize,
    ) -> Result<Self, ConfigError> {
        if !(MIN_RANDOM_LEN..=MAX_LEN).contains(&size) {
            return Err(ConfigError::SizeOutOfRange(size));
        }
        Ok(SortConfig {
            values: random_values(kind, size),
            direction,
            detailed,
            algorithm,
            kind,
            custom: false,
        })
    }

    /// A config over a user-supplied comma-separated array, e.g. "3,1,2" or
    /// "c,a,b" (letters are uppercased).
    pub fn custom(
        algorithm: Algorithm,
        direction: Direction,
        detailed: bool,
        input: &str,
    ) -> Result<Self, ConfigError> {
        let (values, kind) = parse_values(input)?;
        Ok(SortConfig {
            values,
            direction,
            detailed,
            algorithm,
            kind,
            custom: true,
        })
    }

    /// A config over explicit values. Kept across resets like a custom array.
    pub fn with_values(
        algorithm: Algorithm,
        direction: Direction,
        detailed: bool,
        values: Vec<Element>,
    ) -> Self {
        let kind = match values.first() {
            Some(Element::Letter(_)) => ElementKind::Letters,
            _ => ElementKind::Numbers,
        };
        SortConfig {
            values,
            direction,
            detailed,
            algorithm,
            kind,
            custom: true,
        }
    }

    /// Draws a fresh array for the stepper's reset. Custom arrays stay.
    pub fn regenerate(&mut self) {
        if !self.custom {
            self.values = random_values(self.kind, self.values.len());
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn random_values(kind: ElementKind, len: usize) -> Vec<Element> {
    let mut rng = rand::thread_rng();
    match kind {
        ElementKind::Numbers => (0..len)
            .map(|_| Element::Number(rng.gen_range(1..=99)))
            .collect(),
        ElementKind::Letters => (0..len)
            .map(|_| Element::Letter((b'A' + rng.gen_range(0u8..26)) as char))
            .collect(),
    }
}

/// Validates and parses a custom array string. All values must be numbers or
/// all single letters; numbers must fall within `1..=99`.
pub fn parse_values(input: &str) -> Result<(Vec<Element>, ElementKind), ConfigError> {
    let raw: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect();
    if raw.is_empty() {
        return Err(ConfigError::Empty);
    }
    if raw.len() > MAX_LEN {
        return Err(ConfigError::TooManyValues);
    }

    let all_numbers = raw
        .iter()
        .all(|piece| piece.chars().all(|c| c.is_ascii_digit()));
    let all_letters = raw
        .iter()
        .all(|piece| piece.len() == 1 && piece.chars().all(|c| c.is_ascii_alphabetic()));

    if all_numbers {
        let mut values = Vec::with_capacity(raw.len());
        for piece in &raw {
            let number: u8 = piece.parse().map_err(|_| ConfigError::NumberOutOfRange)?;
            if !(1..=99).contains(&number) {
                return Err(ConfigError::NumberOutOfRange);
            }
            values.push(Element::Number(number));
        }
        Ok((values, ElementKind::Numbers))
    } else if all_letters {
        let values = raw
            .iter()
            .filter_map(|piece| piece.chars().next())
            .map(|letter| Element::Letter(letter.to_ascii_uppercase()))
            .collect();
        Ok((values, ElementKind::Letters))
    } else {
        Err(ConfigError::MixedValues)
    }
}
