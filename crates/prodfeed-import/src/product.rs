//! Rule set for the supplier product CSV feed.

use chrono::Utc;
use prodfeed_model::{FieldValue, Price, ProductRecord};

use crate::mapping::{FieldMapping, MappingError};
use crate::record::Record;
use crate::report::Report;
use crate::ruleset::RuleSet;

/// Rule 1: rows cheaper than this and low on stock are not imported.
const LOW_PRICE_LIMIT: Price = Price::from_minor_units(5_00);
const LOW_STOCK_LIMIT: i64 = 10;

/// Rule 2: rows dearer than this are not imported.
const HIGH_PRICE_LIMIT: Price = Price::from_minor_units(1_000_00);

/// The feed marks discontinued products with this exact cell value.
const DISCONTINUED_MARKER: &str = "yes";

/// Strip currency symbols and thousands separators from a raw price cell,
/// keeping only ASCII digits, the decimal point, and sign characters.
pub fn sanitize_price(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
        .collect()
}

/// The product feed's mapping, translations, and ignore rules.
///
/// Columns are fixed: code, name, description, stock, price, discontinued,
/// with one header row before the data starts.
pub struct ProductFeedRules {
    mapping: FieldMapping,
}

impl ProductFeedRules {
    pub fn new() -> Result<Self, MappingError> {
        let mapping = FieldMapping::new([
            ProductRecord::CODE,
            ProductRecord::NAME,
            ProductRecord::DESCRIPTION,
            ProductRecord::STOCK_LEVEL,
            ProductRecord::PRICE_GBP,
            ProductRecord::DISCONTINUED,
        ])?;
        Ok(Self { mapping })
    }
}

impl RuleSet for ProductFeedRules {
    type Target = ProductRecord;

    fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    fn start_row(&self) -> usize {
        1
    }

    fn translate(&self, record: &mut Record, row_index: usize, report: &mut Report) {
        // Discontinued: the exact marker becomes the import timestamp,
        // anything else becomes null. Read before any replacement.
        let discontinued = match record.text(ProductRecord::DISCONTINUED) {
            Some(DISCONTINUED_MARKER) => {
                report.add_remark(format!(
                    "Row {row_index}: Discontinued datetime substituted for this row."
                ));
                FieldValue::Timestamp(Utc::now())
            }
            _ => FieldValue::Null,
        };
        record.insert(ProductRecord::DISCONTINUED, discontinued);

        // Stock: the empty cell and the literal "0" coerce to zero with a
        // remark; other values parse if they can. Unparseable text stays
        // text and is caught when the entity is built.
        let stock = match record.text(ProductRecord::STOCK_LEVEL) {
            None | Some("" | "0") => {
                report.add_remark(format!(
                    "Row {row_index}: Missing StockLevel coerced to int 0."
                ));
                Some(FieldValue::Int(0))
            }
            Some(raw) => raw.trim().parse::<i64>().ok().map(FieldValue::Int),
        };
        if let Some(value) = stock {
            record.insert(ProductRecord::STOCK_LEVEL, value);
        }

        // Price: sanitize, then parse as exact decimal. The sanitized text
        // is kept when parsing fails so diagnostics show what was seen.
        if let Some(raw) = record.text(ProductRecord::PRICE_GBP) {
            let sanitized = sanitize_price(raw);
            let value = match sanitized.parse::<Price>() {
                Ok(price) => FieldValue::Price(price),
                Err(_) => FieldValue::Text(sanitized),
            };
            record.insert(ProductRecord::PRICE_GBP, value);
        }

        // Every imported row records when it arrived.
        record.insert(ProductRecord::ADDED, FieldValue::Timestamp(Utc::now()));
    }

    fn should_ignore(&self, record: &Record, row_index: usize, report: &mut Report) -> bool {
        // Rules only see successfully translated prices. A row whose price
        // failed to parse falls through to entity validation instead.
        let Some(price) = record.price(ProductRecord::PRICE_GBP) else {
            return false;
        };

        if price < LOW_PRICE_LIMIT
            && record
                .int(ProductRecord::STOCK_LEVEL)
                .is_some_and(|stock| stock < LOW_STOCK_LIMIT)
        {
            report.add_error(format!(
                "Row {row_index}: Ignore Rule enforced - \"Less than £5 and less than 10 in stock\". Row not imported."
            ));
            return true;
        }

        if price > HIGH_PRICE_LIMIT {
            report.add_error(format!(
                "Row {row_index}: Ignore Rule enforced - \"Over £1000\". Row not imported."
            ));
            return true;
        }

        false
    }
}
