//! Fixed-schema CSV record adapter.
//!
//! Maps the `id,string,int,float` record format onto the sorting engine:
//! records are loaded into a contiguous buffer, sorted by a chosen field
//! with a chosen algorithm, and written back out. The field choice is
//! captured in a per-call comparator closure built by [`Record::comparator`],
//! so nothing about the sort is ambient state.

use crate::core::{
    Algorithm, FixedStr, FixedStrError, SortError, compare_fixed_strings, compare_floats,
    compare_ints,
};
use log::info;
use std::cmp::Ordering;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Capacity in bytes of the inline string field, terminator included.
pub const STRING_FIELD_LEN: usize = 32;

/// One fixed-schema record: an identifier and three sortable fields.
///
/// The string field is stored inline, so a `Vec<Record>` is a flat
/// fixed-stride buffer and sorting it never touches heap data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Record identifier.
    pub id: i32,
    /// The string field.
    pub name: FixedStr<STRING_FIELD_LEN>,
    /// The integer field.
    pub value: i32,
    /// The floating-point field.
    pub score: f32,
}

/// Selects the record field to sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    /// The string field.
    Str,
    /// The integer field.
    Int,
    /// The floating-point field.
    Float,
}

impl SortField {
    /// The canonical upper-case name, matching what [`FromStr`] accepts.
    pub fn name(&self) -> &'static str {
        match self {
            SortField::Str => "STRING",
            SortField::Int => "INTEGER",
            SortField::Float => "FLOAT",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a field name or id cannot be recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field {0:?}, expected STRING, INTEGER, FLOAT or an id in 1..=3")]
pub struct ParseFieldError(String);

impl FromStr for SortField {
    type Err = ParseFieldError;

    /// Accepts the canonical names (case-insensitive, with or without a
    /// `FIELD_` prefix) and the numeric ids `1..=3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("FIELD_").unwrap_or(&upper);
        match name {
            "1" | "STRING" => Ok(SortField::Str),
            "2" | "INTEGER" => Ok(SortField::Int),
            "3" | "FLOAT" => Ok(SortField::Float),
            _ => Err(ParseFieldError(s.to_owned())),
        }
    }
}

/// Errors produced while loading, sorting or storing records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A line ended before all four fields were found.
    #[error("line {line}: missing {field} field")]
    MissingField { line: usize, field: &'static str },
    /// A numeric field failed to parse.
    #[error("line {line}: invalid {field} field {value:?}")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
    /// The string field does not fit the inline capacity.
    #[error("line {line}: bad string field {value:?}: {source}")]
    StringField {
        line: usize,
        value: String,
        source: FixedStrError,
    },
    /// The sort call contract was violated, e.g. an empty input file or a
    /// hybrid threshold of one.
    #[error(transparent)]
    Sort(#[from] SortError),
    /// Reading or writing the record stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Record {
    /// Builds the comparator ordering records by `field`.
    ///
    /// The field choice is captured by the returned closure, so concurrent
    /// or reentrant sorts with different fields cannot interfere.
    pub fn comparator(field: SortField) -> impl Fn(&Record, &Record) -> Ordering {
        move |a, b| match field {
            SortField::Str => compare_fixed_strings(&a.name, &b.name),
            SortField::Int => compare_ints(&a.value, &b.value),
            SortField::Float => compare_floats(&a.score, &b.score),
        }
    }

    /// Parses one CSV line (`id,string,int,float`) into a record.
    ///
    /// `line_no` is the 1-based input line, reported in errors. The format
    /// has no quoting or escaping; fields must not contain commas.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self, RecordError> {
        let mut fields = line.trim_end_matches(['\r', '\n']).split(',');
        let mut next = |field: &'static str| {
            fields.next().ok_or(RecordError::MissingField {
                line: line_no,
                field,
            })
        };

        let id_str = next("id")?;
        let name_str = next("string")?;
        let value_str = next("integer")?;
        let score_str = next("float")?;

        let invalid = |field: &'static str, value: &str| RecordError::InvalidField {
            line: line_no,
            field,
            value: value.to_owned(),
        };

        Ok(Record {
            id: id_str.parse().map_err(|_| invalid("id", id_str))?,
            name: FixedStr::new(name_str).map_err(|source| RecordError::StringField {
                line: line_no,
                value: name_str.to_owned(),
                source,
            })?,
            value: value_str.parse().map_err(|_| invalid("integer", value_str))?,
            score: score_str.parse().map_err(|_| invalid("float", score_str))?,
        })
    }
}

impl fmt::Display for Record {
    /// Formats the record in its CSV wire form. The float field keeps six
    /// fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{:.6}", self.id, self.name, self.value, self.score)
    }
}

/// Reads all records from `input`, one per line. Blank lines are skipped.
pub fn load_records<R: BufRead>(input: R) -> Result<Vec<Record>, RecordError> {
    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        records.push(Record::parse_line(&line, idx + 1)?);
    }
    Ok(records)
}

/// Writes `records` to `output`, one CSV line per record.
pub fn store_records<W: Write>(mut output: W, records: &[Record]) -> Result<(), RecordError> {
    for record in records {
        writeln!(output, "{record}")?;
    }
    output.flush()?;
    Ok(())
}

/// Loads records from `input`, sorts them by `field` using `algorithm`, and
/// writes the sorted records to `output`. Returns the number of records
/// processed.
///
/// # Examples
///
/// ```
/// use polysort::core::Algorithm;
/// use polysort::records::{SortField, sort_records};
///
/// let input = "2,bob,30,1.5\n1,alice,25,2.5\n";
/// let mut output = Vec::new();
/// sort_records(input.as_bytes(), &mut output, SortField::Int, Algorithm::Quick).unwrap();
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.starts_with("1,alice,25,2.500000"));
/// ```
pub fn sort_records<R: BufRead, W: Write>(
    input: R,
    output: W,
    field: SortField,
    algorithm: Algorithm,
) -> Result<usize, RecordError> {
    info!("loading records");
    let mut records = load_records(input)?;

    info!(
        "sorting {} records by {} with {}",
        records.len(),
        field,
        algorithm
    );
    algorithm.sort(&mut records, Record::comparator(field))?;

    info!("saving records");
    store_records(output, &records)?;

    Ok(records.len())
}
