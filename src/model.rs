use std::{collections::HashMap, fmt::Display};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{constants, quoteapi::response::QuotePayload};

/// The five quoted fields of a trading day, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Open,
        Field::High,
        Field::Low,
        Field::Close,
        Field::Volume,
    ];

    /// Key of the field inside the payload's `data` object.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Open => "Open",
            Field::High => "High",
            Field::Low => "Low",
            Field::Close => "Close",
            Field::Volume => "Volume",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Reasons a decoded payload cannot be rendered as a quote.
#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("payload has no data")]
    MissingData,
    #[error("payload data is empty")]
    EmptyData,
    #[error("payload data is not an object")]
    DataNotObject,
    #[error("payload data has no Open field")]
    MissingOpen,
    #[error("field {0} is not an object")]
    FieldNotObject(Field),
    #[error("field Open has no date keys")]
    NoDateKey,
}

/// One table row: date key followed by the five OHLCV cells.
/// `None` cells are rendered blank.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    pub date: String,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl QuoteRow {
    pub fn cells(&self) -> [Option<f64>; 5] {
        [self.open, self.high, self.low, self.close, self.volume]
    }
}

/// A payload that passed shape validation.
#[derive(Debug)]
pub struct Quote {
    pub symbol: Option<String>,
    // Open is non-empty; other fields may be missing.
    fields: HashMap<Field, Map<String, Value>>,
}

impl TryFrom<QuotePayload> for Quote {
    type Error = ShapeError;

    fn try_from(payload: QuotePayload) -> Result<Self, Self::Error> {
        let mut data = match payload.data {
            None => return Err(ShapeError::MissingData),
            Some(Value::Object(data)) => data,
            Some(_) => return Err(ShapeError::DataNotObject),
        };
        if data.is_empty() {
            return Err(ShapeError::EmptyData);
        }

        let mut fields = HashMap::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            match data.remove(field.key()) {
                None | Some(Value::Null) => continue,
                Some(Value::Object(values)) => {
                    fields.insert(field, values);
                }
                Some(_) => return Err(ShapeError::FieldNotObject(field)),
            }
        }

        match fields.get(&Field::Open) {
            None => Err(ShapeError::MissingOpen),
            Some(open) if open.is_empty() => Err(ShapeError::NoDateKey),
            Some(_) => Ok(Quote {
                symbol: payload.symbol,
                fields,
            }),
        }
    }
}

impl Quote {
    /// The date used for display: the first key of `Open` in payload order.
    /// Not necessarily the latest date when the backend returns several.
    pub fn date_key(&self) -> &str {
        self.fields
            .get(&Field::Open)
            .and_then(|open| open.keys().next())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Value of `field` at `date`. Missing fields, missing dates and
    /// non-numeric values all come back as `None`.
    pub fn cell(&self, field: Field, date: &str) -> Option<f64> {
        let value = self.fields.get(&field)?.get(date)?;
        let number = value.as_f64();
        if number.is_none() && !value.is_null() {
            log::warn!("{} at {} is not a number: {}", field, date, value);
        }
        number
    }

    /// Builds the row shown in the table.
    pub fn row(&self) -> QuoteRow {
        let date = self.date_key().to_string();
        let row = QuoteRow {
            open: self.cell(Field::Open, &date),
            high: self.cell(Field::High, &date),
            low: self.cell(Field::Low, &date),
            close: self.cell(Field::Close, &date),
            volume: self.cell(Field::Volume, &date),
            date,
        };
        for (field, cell) in Field::ALL.iter().zip(row.cells()) {
            if cell.is_none() {
                log::warn!("{} has no value for {}, rendering blank", field, row.date);
            }
        }
        row
    }
}

/// Terminal state of one render run. Runs start `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Pending,
    Success,
    EmptyResult,
    Failed,
}

/// What gets written to the display surface: a label and at most one row.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayResult {
    pub label: String,
    pub row: Option<QuoteRow>,
}

impl DisplayResult {
    pub fn success(symbol: &str, row: QuoteRow) -> Self {
        Self {
            label: format!("{}{}", constants::SYMBOL_LABEL_PREFIX, symbol),
            row: Some(row),
        }
    }

    pub fn empty_result() -> Self {
        Self {
            label: constants::EMPTY_RESULT_MESSAGE.to_string(),
            row: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            label: constants::FETCH_FAILED_MESSAGE.to_string(),
            row: None,
        }
    }
}
