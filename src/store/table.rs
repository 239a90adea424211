//! # Table
//!
//! An ordered sequence of records. Insert appends, delete shifts later
//! records down, updates keep the record in its slot.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::errors::TableError;
use super::record::Record;

/// One named table's rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from existing rows.
    ///
    /// Every row must carry a string `id`, unique within the table.
    pub fn from_records(records: Vec<Record>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            let id = record.id().ok_or(TableError::MissingId { position })?;
            if !seen.insert(id) {
                return Err(TableError::DuplicateId(id.to_string()));
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rows `[offset, offset + limit)`, clamped to the table end
    pub fn slice(&self, limit: usize, offset: usize) -> &[Record] {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(limit).min(self.records.len());
        &self.records[start..end]
    }

    /// Position of the first record with this id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == Some(id))
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Record {
        self.records.remove(index)
    }

    /// Next identifier: one past the largest integer id, or "1" when none parse.
    ///
    /// Ids that do not start with a non-negative integer are skipped. Gaps
    /// left by deletes are never reused. The arithmetic is done on decimal
    /// digits, so ids of any length keep increasing.
    pub fn next_id(&self) -> String {
        self.records
            .iter()
            .filter_map(|r| r.id().and_then(id_digits))
            .max_by(|a, b| compare_digits(a, b))
            .map_or_else(|| "1".to_string(), increment_digits)
    }
}

/// Digits of the non-negative integer leading an id, without leading zeros.
///
/// Same prefix rule as [`leading_integer`]. Negative values give `None`.
fn id_digits(id: &str) -> Option<&str> {
    let s = id.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let digits = rest[..len].trim_start_matches('0');
    match (digits.is_empty(), negative) {
        (true, _) => Some("0"),
        (false, true) => None,
        (false, false) => Some(digits),
    }
}

/// Numeric order of two digit strings without leading zeros
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Decimal `digits + 1`
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for byte in out.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }

    let mut id = String::with_capacity(out.len() + 1);
    if carry {
        id.push('1');
    }
    id.extend(out.into_iter().map(char::from));
    id
}

/// Parse the integer at the start of `s`.
///
/// Leading whitespace and a single sign are allowed; parsing stops at the
/// first non-digit. Returns `None` when no digit follows.
pub(crate) fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    // Overlong digit runs saturate instead of failing
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
