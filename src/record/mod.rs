//! Decoding of Java `toString` records
//!
//! Profiling runs print their measurements as Java collections, e.g.
//! `{257=[4155284], 727=[4386628]}` for a map, `[2, 17, 39]` for a list and
//! `<{1=[3]}, {1=[4]}>` for a pair of maps. This module reads those forms back with a
//! small recursive-descent parser that matches separators literally.
//!
//! A malformed record is always an error carrying the byte offset where
//! decoding stopped; an empty collection such as `{}` is a successful parse.

use thiserror::Error;

/// Entries of a `{key=[values]}` map, in record order.
pub type MeasurementMap = Vec<(i64, Vec<f64>)>;

/// Errors produced while decoding a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A literal separator or bracket was missing.
    #[error("expected {expected:?} at offset {offset}")]
    Expected {
        /// Literal that was required
        expected: &'static str,
        /// Byte offset into the record
        offset: usize,
    },

    /// No numeric prefix could be parsed.
    #[error("invalid number at offset {offset}")]
    InvalidNumber {
        /// Byte offset into the record
        offset: usize,
    },

    /// The record parsed but more text followed.
    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput {
        /// Byte offset of the first unconsumed character
        offset: usize,
    },
}

/// Read position within a record.
#[derive(Debug)]
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at(&self, lit: &str) -> bool {
        self.rest().starts_with(lit)
    }

    fn literal(&mut self, lit: &'static str) -> Result<(), RecordError> {
        if !self.at(lit) {
            return Err(RecordError::Expected {
                expected: lit,
                offset: self.pos,
            });
        }
        self.pos += lit.len();
        Ok(())
    }

    /// Longest prefix of the numeric run that parses as `T`.
    fn greedy<T: std::str::FromStr>(&mut self, charset: fn(char) -> bool) -> Result<T, RecordError> {
        let rest = self.rest();
        let run = rest.find(|c: char| !charset(c)).unwrap_or(rest.len());

        for end in (1..=run).rev() {
            if let Ok(value) = rest[..end].parse::<T>() {
                self.pos += end;
                return Ok(value);
            }
        }
        Err(RecordError::InvalidNumber { offset: self.pos })
    }

    fn integer(&mut self) -> Result<i64, RecordError> {
        self.greedy(|c| c.is_ascii_digit() || c == '-' || c == '+')
    }

    fn number(&mut self) -> Result<f64, RecordError> {
        self.greedy(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
    }

    /// `open [item (", " item)*] close`
    fn sequence<T>(
        &mut self,
        open: &'static str,
        close: &'static str,
        mut item: impl FnMut(&mut Self) -> Result<T, RecordError>,
    ) -> Result<Vec<T>, RecordError> {
        self.literal(open)?;
        let mut items = Vec::new();
        if !self.at(close) {
            items.push(item(self)?);
            while self.at(", ") {
                self.literal(", ")?;
                items.push(item(self)?);
            }
        }
        self.literal(close)?;
        Ok(items)
    }

    fn list<T>(
        &mut self,
        element: impl FnMut(&mut Self) -> Result<T, RecordError>,
    ) -> Result<Vec<T>, RecordError> {
        self.sequence("[", "]", element)
    }

    fn map<K, V>(
        &mut self,
        mut key: impl FnMut(&mut Self) -> Result<K, RecordError>,
        mut value: impl FnMut(&mut Self) -> Result<V, RecordError>,
    ) -> Result<Vec<(K, V)>, RecordError> {
        self.sequence("{", "}", |cursor| {
            let k = key(cursor)?;
            cursor.literal("=")?;
            let v = value(cursor)?;
            Ok((k, v))
        })
    }

    fn pair<A, B>(
        &mut self,
        first: impl FnOnce(&mut Self) -> Result<A, RecordError>,
        second: impl FnOnce(&mut Self) -> Result<B, RecordError>,
    ) -> Result<(A, B), RecordError> {
        self.literal("<")?;
        let a = first(self)?;
        self.literal(", ")?;
        let b = second(self)?;
        self.literal(">")?;
        Ok((a, b))
    }

    fn measurement_map(&mut self) -> Result<MeasurementMap, RecordError> {
        self.map(Self::integer, |cursor| cursor.list(Self::number))
    }

    fn finish<T>(self, value: T) -> Result<T, RecordError> {
        if self.pos == self.input.len() {
            Ok(value)
        } else {
            Err(RecordError::TrailingInput { offset: self.pos })
        }
    }
}

/// Decode a list of numbers such as `[0.1, 0.5, 0.4]`.
pub fn parse_number_list(input: &str) -> Result<Vec<f64>, RecordError> {
    let mut cursor = Cursor::new(input.trim_end());
    let values = cursor.list(Cursor::number)?;
    cursor.finish(values)
}

/// Decode a `{key=[value, ...], ...}` map.
pub fn parse_measurement_map(input: &str) -> Result<MeasurementMap, RecordError> {
    let mut cursor = Cursor::new(input.trim_end());
    let map = cursor.measurement_map()?;
    cursor.finish(map)
}

/// Decode a `<{...}, {...}>` pair of maps.
pub fn parse_map_pair(input: &str) -> Result<(MeasurementMap, MeasurementMap), RecordError> {
    let mut cursor = Cursor::new(input.trim_end());
    let pair = cursor.pair(Cursor::measurement_map, Cursor::measurement_map)?;
    cursor.finish(pair)
}

/// One weight per map key, in record order: the sum of that key's values.
pub fn weights_from_map(map: &[(i64, Vec<f64>)]) -> Vec<f64> {
    map.iter().map(|(_, values)| values.iter().sum::<f64>()).collect()
}
