//! Parsing rule bodies as `gdalcacaview` reads them.
//!
//! Fields are split on `,` with surrounding whitespace stripped; empty fields
//! are kept. An empty stretch-mode field means `none`. Parameter and band
//! lists split on `|` and skip empty pieces. Fields past the seventh are
//! ignored.

use std::str::FromStr;

use crate::constants::{FIELD_SEPARATOR, LIST_SEPARATOR, NO_CLASSIFICATION_BAND};
use crate::errors::{ParseError, RuleField};
use crate::numeric::Numeric;
use crate::rule::{Comparison, DisplayMode, Stretch, StretchMode, StretchRule};

impl FromStr for StretchRule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut fields = s.split(FIELD_SEPARATOR).map(str::trim);
        let mut next = |field: RuleField| fields.next().ok_or(ParseError::MissingField(field));

        let comparison = lookup(
            next(RuleField::Comparison)?,
            RuleField::Comparison,
            Comparison::from_token,
        )?;

        let text = next(RuleField::Value)?;
        let value = Numeric::parse(text).ok_or_else(|| invalid_number(RuleField::Value, text))?;

        let classification_band =
            parse_classification_band(next(RuleField::ClassificationBand)?)?;

        let display_mode = lookup(
            next(RuleField::DisplayMode)?,
            RuleField::DisplayMode,
            DisplayMode::from_token,
        )?;

        let stretch_mode = match next(RuleField::StretchMode)? {
            "" => StretchMode::None,
            token => lookup(token, RuleField::StretchMode, StretchMode::from_token)?,
        };

        let parameters = split_list(next(RuleField::StretchParameters)?)
            .map(|piece| {
                Numeric::parse(piece)
                    .ok_or_else(|| invalid_number(RuleField::StretchParameters, piece))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let stretch_parameters = (!parameters.is_empty()).then_some(parameters);

        let bands = split_list(next(RuleField::Bands)?)
            .map(|piece| {
                piece
                    .parse::<u32>()
                    .map_err(|_| invalid_number(RuleField::Bands, piece))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            comparison,
            value,
            classification_band,
            stretch: Stretch {
                display_mode,
                stretch_mode,
                stretch_parameters,
                bands,
            },
        })
    }
}

fn lookup<T>(
    token: &str,
    field: RuleField,
    from_token: fn(&str) -> Option<T>,
) -> Result<T, ParseError> {
    from_token(token).ok_or_else(|| ParseError::UnknownToken {
        field,
        token: token.to_string(),
    })
}

fn parse_classification_band(text: &str) -> Result<Option<u32>, ParseError> {
    let band: i64 = text
        .parse()
        .map_err(|_| invalid_number(RuleField::ClassificationBand, text))?;
    if band == NO_CLASSIFICATION_BAND {
        return Ok(None);
    }
    u32::try_from(band)
        .map(Some)
        .map_err(|_| invalid_number(RuleField::ClassificationBand, text))
}

fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

fn invalid_number(field: RuleField, text: &str) -> ParseError {
    ParseError::InvalidNumber {
        field,
        text: text.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
