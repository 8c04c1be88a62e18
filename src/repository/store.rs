//! # Flat-file backing store
//!
//! The inventory is persisted as semicolon-delimited text:
//!
//! ```text
//! Code;Category;Name;Quantity;Price
//! A1;Tools;Widget;5;2.500
//! B2;Garden;"Hose; 20m";1;19.990
//! ```
//!
//! The first non-blank row is a header and is skipped on load. Each data row
//! has exactly five fields; rows with any other field count are skipped. Fields holding the
//! delimiter, a double quote or a line break are quoted, with inner quotes
//! doubled. Prices are always written with three decimals.
//!
//! The store never keeps a handle open: [`FlatFileStore::save`] rewrites the
//! whole file in one call.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use crate::model::Product;

pub const DELIMITER: char = ';';
pub const HEADER: [&str; 5] = ["Code", "Category", "Name", "Quantity", "Price"];
const QUOTE: char = '"';
const LINE_END: &str = "\r\n";

/// Products read back from the file, plus how many data rows were dropped as malformed.
#[derive(Debug, Default)]
pub struct StoreContents {
    pub products: Vec<Product>,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every well-formed row. Returns `Ok(None)` when the file does not exist.
    pub fn load(&self) -> Result<Option<StoreContents>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut contents = StoreContents::default();
        for row in parse_rows(&text).into_iter().skip(1) {
            match row.as_slice() {
                [code, category, name, quantity, price] => contents
                    .products
                    .push(Product::new(code, category, name, quantity, price)),
                _ => contents.skipped += 1,
            }
        }
        Ok(Some(contents))
    }

    /// Overwrites the file with a header plus one row per product, in the given order.
    pub fn save<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Result<(), StoreError> {
        let mut out = encode_row(&HEADER);
        for product in products {
            let quantity = product.quantity().to_string();
            let price = format!("{:.3}", product.price());
            out.push_str(&encode_row(&[
                product.code(),
                product.category(),
                product.name(),
                &quantity,
                &price,
            ]));
        }

        fs::write(&self.path, out).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn encode_row(fields: &[&str]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        if field.contains([DELIMITER, QUOTE, '\r', '\n']) {
            line.push(QUOTE);
            line.push_str(&field.replace(QUOTE, "\"\""));
            line.push(QUOTE);
        } else {
            line.push_str(field);
        }
    }
    line.push_str(LINE_END);
    line
}

/// Splits text into rows of fields, honouring quoted fields that span
/// delimiters or line breaks. Blank lines produce no row.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut row_started = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            QUOTE if field.is_empty() => {
                in_quotes = true;
                row_started = true;
            }
            DELIMITER => {
                row.push(std::mem::take(&mut field));
                row_started = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                if row_started {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                    row_started = false;
                }
            }
            _ => {
                field.push(c);
                row_started = true;
            }
        }
    }

    if row_started {
        row.push(field);
        rows.push(row);
    }
    rows
}
