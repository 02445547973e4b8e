//! Field descriptors and their random value generators.

use crate::values::Value;
use content_gen::{ContentError, ContentGen};

/// Error type for field construction and value generation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FieldError {
    /// Integer range with `min > max`.
    #[error("inverted integer range: min {min} > max {max}")]
    InvertedRange { min: i64, max: i64 },

    /// Decimal with more fractional digits than total digits.
    #[error("decimal scale {scale} exceeds precision {precision}")]
    ScaleExceedsPrecision { precision: u32, scale: u32 },

    /// Content generation error (e.g. an enum with no options).
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Generation policy of a column — the closed set of supported shapes.
///
/// Each variant produces one random value conforming to its declared
/// constraints via [`FieldType::random_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Signed integer sampled uniformly from `[min, max]`.
    Integer { min: i64, max: i64 },
    /// Unsigned integer sampled uniformly from `[0, max]`.
    UnsignedInteger { max: u64 },
    /// Fixed-point number with `precision` total digits, `scale` of them
    /// fractional. Shared by decimal/float/real/double/numeric columns.
    Decimal { precision: u32, scale: u32 },
    Date,
    DateTime,
    /// Unix-epoch-like integer timestamp.
    Timestamp,
    /// Clock time formatted `H:M:S`.
    Time,
    Year,
    /// Phrase from the corpus, truncated to at most `max_len` characters.
    Text { max_len: usize },
    /// One option chosen uniformly.
    Enum { options: Vec<String> },
    /// Comma-joined, sorted, non-empty subset of the options.
    Set { options: Vec<String> },
}

impl FieldType {
    /// Signed integer type; fails when the range is inverted.
    pub fn integer(min: i64, max: i64) -> Result<Self, FieldError> {
        if min > max {
            return Err(FieldError::InvertedRange { min, max });
        }

        Ok(FieldType::Integer { min, max })
    }

    /// Decimal type; fails when `scale > precision`.
    pub fn decimal(precision: u32, scale: u32) -> Result<Self, FieldError> {
        if scale > precision {
            return Err(FieldError::ScaleExceedsPrecision { precision, scale });
        }

        Ok(FieldType::Decimal { precision, scale })
    }

    /// Produce one random value conforming to this type.
    pub fn random_value(&self, gen: &mut ContentGen) -> Result<Value, FieldError> {
        match self {
            FieldType::Integer { min, max } => Ok(Value::Int(gen.int(*min, *max))),
            FieldType::UnsignedInteger { max } => Ok(Value::UInt(gen.uint(0, *max))),
            FieldType::Decimal { precision, scale } => {
                let int_span = digit_span(precision - scale);
                let frac_span = digit_span(*scale);
                let int_part = gen.int(-int_span, int_span);
                let frac_part = gen.int(0, frac_span);

                // The fractional digits are deliberately unpadded: "3.7"
                // with scale 2 means 3.7, not 3.07.
                let literal = format!("{int_part}.{frac_part}");
                Ok(Value::Float(literal.parse().expect(
                    "integer and fraction parts always form a float literal",
                )))
            }
            FieldType::Date => Ok(Value::Date(gen.date(None, None))),
            FieldType::DateTime => Ok(Value::DateTime(gen.datetime(None, None))),
            FieldType::Timestamp => Ok(Value::Int(126_144_000 + gen.int(0, 315_360_000))),
            FieldType::Time => Ok(Value::Text(format!(
                "{}:{}:{}",
                gen.int(0, 23),
                gen.int(0, 59),
                gen.int(0, 59)
            ))),
            FieldType::Year => Ok(Value::Int(gen.int(1990, 2020))),
            FieldType::Text { max_len } => Ok(Value::Text(gen.text(*max_len))),
            FieldType::Enum { options } => Ok(Value::Text(gen.pick_one(options)?.clone())),
            FieldType::Set { options } => {
                let subset = gen.pick_subset(options)?;
                Ok(Value::Text(
                    subset.into_iter().collect::<Vec<_>>().join(","),
                ))
            }
        }
    }
}

/// Largest value expressible with `digits` decimal digits, saturating at
/// `i64::MAX` for widths beyond what fits.
fn digit_span(digits: u32) -> i64 {
    10i64
        .checked_pow(digits)
        .map(|p| p - 1)
        .unwrap_or(i64::MAX)
}

/// One typed attribute of a table.
///
/// Generation decorates the underlying [`FieldType`]: a nullable field has a
/// 1-in-5 chance of yielding `Null`, and a field with a declared default an
/// independent 1-in-5 chance of yielding that default, both checked before
/// delegating to the type's generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub nullable: bool,
    pub default: Option<Value>,
    pub kind: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldType) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            default: None,
            kind,
        }
    }

    pub fn random_value(&self, gen: &mut ContentGen) -> Result<Value, FieldError> {
        if self.nullable && gen.int(0, 4) == 1 {
            return Ok(Value::Null);
        }

        if let Some(default) = &self.default {
            if gen.int(0, 4) == 1 {
                return Ok(default.clone());
            }
        }

        self.kind.random_value(gen)
    }
}
