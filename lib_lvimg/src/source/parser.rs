use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::{MAX_PIXEL_COUNT, OUT_OF_RANGE_PLACEHOLDER, PAYLOAD_END_MARKER, PAYLOAD_START_MARKER};
use crate::pixel::Dimensions;

static WIDTH_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.header\.w\s*=\s*(\d+)").unwrap());
static HEIGHT_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.header\.h\s*=\s*(\d+)").unwrap());
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)//.*$").unwrap());

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Image dimension `.header.{0}` not found")]
    MissingDimension(&'static str),
    #[error("Invalid value `{value}` for image dimension `.header.{field}`")]
    InvalidDimension { field: &'static str, value: String },
    #[error("Image of {width}x{height} exceeds the limit of {} pixels", MAX_PIXEL_COUNT)]
    DimensionsTooLarge { width: u32, height: u32 },
    #[error("No pixel data found for the 32-bit format (expected `{}`)", PAYLOAD_START_MARKER)]
    MissingPayload,
    #[error("Pixel data for the 32-bit format is not closed by `{}`", PAYLOAD_END_MARKER)]
    UnterminatedPayload,
}

/// Classification of a single payload token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Byte(u8),
    /// A well-formed number that does not fit in a byte.
    OutOfRange,
    NotNumeric,
}

/// Byte literals recovered from a payload region.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    pub values: Vec<u8>,
    /// Tokens that were not numbers, in the order they appeared.
    pub discarded: Vec<String>,
    /// Numbers above 255. Each one still occupies a byte slot in `values`.
    pub out_of_range: Vec<String>,
}

/// Everything the extractor needs from a C image source.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedSource {
    pub dimensions: Dimensions,
    pub bytes: Vec<u8>,
    pub discarded_tokens: Vec<String>,
    pub out_of_range_tokens: Vec<String>,
}

pub fn parse_source(text: &str) -> Result<ParsedSource, ParseError> {
    let dimensions = parse_dimensions(text)?;
    debug!("Declared dimensions: {}", dimensions);

    let payload = payload_region(text)?;
    debug!("Payload region: {} characters", payload.len());

    let tokens = tokenize(&strip_comments(payload));
    debug!(
        "Payload tokens: {} bytes, {} discarded, {} out of range",
        tokens.values.len(),
        tokens.discarded.len(),
        tokens.out_of_range.len()
    );

    Ok(ParsedSource {
        dimensions,
        bytes: tokens.values,
        discarded_tokens: tokens.discarded,
        out_of_range_tokens: tokens.out_of_range,
    })
}

/// Reads `.header.w` and `.header.h`.
///
/// Both must be positive and their product must not exceed [`MAX_PIXEL_COUNT`].
pub fn parse_dimensions(text: &str) -> Result<Dimensions, ParseError> {
    let width = parse_dimension(text, &WIDTH_FIELD, "w")?;
    let height = parse_dimension(text, &HEIGHT_FIELD, "h")?;

    let pixel_count = (width as usize).checked_mul(height as usize);
    if !matches!(pixel_count, Some(count) if count <= MAX_PIXEL_COUNT) {
        error!("Declared image {}x{} is too large", width, height);
        return Err(ParseError::DimensionsTooLarge { width, height });
    }

    Ok(Dimensions::new(width, height))
}

fn parse_dimension(text: &str, pattern: &Regex, field: &'static str) -> Result<u32, ParseError> {
    let value = pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            error!("Missing `.header.{}` in source", field);
            ParseError::MissingDimension(field)
        })?;

    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => {
            error!("Invalid `.header.{}` value: {}", field, value);
            Err(ParseError::InvalidDimension {
                field,
                value: value.to_string(),
            })
        }
    }
}

/// Returns the text between the 32-bit format marker and the next `#endif`.
pub fn payload_region(text: &str) -> Result<&str, ParseError> {
    let start = text.find(PAYLOAD_START_MARKER).ok_or_else(|| {
        error!("Marker `{}` not found", PAYLOAD_START_MARKER);
        ParseError::MissingPayload
    })? + PAYLOAD_START_MARKER.len();

    let rest = &text[start..];
    let end = rest.find(PAYLOAD_END_MARKER).ok_or_else(|| {
        error!("Marker `{}` not found after pixel data", PAYLOAD_END_MARKER);
        ParseError::UnterminatedPayload
    })?;

    Ok(&rest[..end])
}

/// Replaces `/* */` comments first, then `//` comments, with a space.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, " ");
    LINE_COMMENT.replace_all(&without_blocks, " ").into_owned()
}

/// Splits on commas and whitespace.
///
/// Non-numeric tokens are dropped. Numbers above 255 keep their slot as
/// [`OUT_OF_RANGE_PLACEHOLDER`] so later bytes stay aligned.
pub fn tokenize(text: &str) -> Tokens {
    let mut tokens = Tokens::default();

    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match parse_literal(token) {
            Literal::Byte(value) => tokens.values.push(value),
            Literal::OutOfRange => {
                tokens.values.push(OUT_OF_RANGE_PLACEHOLDER);
                tokens.out_of_range.push(token.to_string());
            }
            Literal::NotNumeric => tokens.discarded.push(token.to_string()),
        }
    }

    tokens
}

/// Classifies `0x`-prefixed hex or bare decimal.
pub fn parse_literal(token: &str) -> Literal {
    let (digits, radix) = match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (token, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Literal::NotNumeric;
    }
    match u8::from_str_radix(digits, radix) {
        Ok(value) => Literal::Byte(value),
        Err(_) => Literal::OutOfRange,
    }
}
