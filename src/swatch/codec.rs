//! # Flat-file format
//!
//! ```text
//! id,hex
//! 1,"#ff0000"
//! 2,"say ""hi"""
//! ```
//!
//! The first row is a fixed header. Every other row holds one record: the id
//! bare, the hex value always quoted with inner quotes doubled. Quoted fields
//! may span lines.
//!
//! Decoding is lazy and never fails as a whole: each row comes out either as
//! a [`Record`] or as a [`SkippedRow`] describing why it was dropped. One bad
//! line never hides the rest of the file, not even one holding bytes that
//! are not UTF-8.

use crate::model::{Record, RecordId};
use thiserror::Error;

pub const HEADER: &str = "id,hex";
const HEADER_FIELDS: [&str; 2] = ["id", "hex"];
const FIELD_COUNT: usize = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("unexpected header `{0}`")]
    UnexpectedHeader(String),

    #[error("expected 2 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid id `{0}`")]
    InvalidId(String),

    #[error("unexpected characters after closing quote")]
    StrayQuote,

    #[error("unterminated quoted field")]
    UnterminatedQuote,

    #[error("duplicate id {0}")]
    DuplicateId(RecordId),

    #[error("row is not valid UTF-8")]
    InvalidUtf8,
}

/// A row that could not be turned into a record. `line` is 1-based and
/// points at the line where the row starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

pub type Decoded = std::result::Result<Record, SkippedRow>;

/// Encodes a single record as one data line, without the line terminator.
pub fn encode_record(record: &Record) -> String {
    format!("{},{}", record.id, quote(&record.hex))
}

/// Encodes the whole file: header plus one line per record, each terminated
/// by `\n`.
pub fn encode<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = String::from(HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Decodes file content lazily.
pub fn decode(text: &str) -> Rows<'_> {
    decode_bytes(text.as_bytes())
}

/// Decodes raw file bytes lazily. A row whose fields are not valid UTF-8 is
/// skipped with [`SkipReason::InvalidUtf8`]; the rows around it still load.
pub fn decode_bytes(bytes: &[u8]) -> Rows<'_> {
    Rows {
        bytes,
        pos: 0,
        line: 1,
        row_line: 0,
        header_seen: false,
    }
}

/// Iterator returned by [`decode`] and [`decode_bytes`].
pub struct Rows<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    row_line: usize,
    header_seen: bool,
}

impl Rows<'_> {
    /// Line where the most recently yielded row started.
    pub fn row_line(&self) -> usize {
        self.row_line
    }

    fn advance(&mut self, len: usize) {
        let end = self.pos + len;
        self.line += self.bytes[self.pos..end].iter().filter(|&&b| b == b'\n').count();
        self.pos = end;
    }
}

impl Iterator for Rows<'_> {
    type Item = Decoded;

    fn next(&mut self) -> Option<Decoded> {
        let bytes = self.bytes;
        loop {
            let rest = &bytes[self.pos..];
            if rest.is_empty() {
                return None;
            }

            let (content_end, next_line) = line_end(rest);
            if rest[..content_end].iter().all(u8::is_ascii_whitespace) {
                self.advance(next_line);
                continue;
            }

            let line = self.line;
            self.row_line = line;
            let (fields, consumed) = read_row(rest);
            let raw = &rest[..consumed];
            self.advance(consumed);

            if !self.header_seen {
                self.header_seen = true;
                match fields {
                    Ok(ref f) if is_header(f) => continue,
                    _ => {
                        let raw = String::from_utf8_lossy(raw).trim_end().to_string();
                        return Some(Err(SkippedRow {
                            line,
                            reason: SkipReason::UnexpectedHeader(raw),
                        }));
                    }
                }
            }

            let decoded = fields
                .and_then(to_record)
                .map_err(|reason| SkippedRow { line, reason });
            return Some(decoded);
        }
    }
}

fn is_header(fields: &[Vec<u8>]) -> bool {
    fields
        .iter()
        .map(Vec::as_slice)
        .eq(HEADER_FIELDS.map(str::as_bytes))
}

fn to_record(fields: Vec<Vec<u8>>) -> Result<Record, SkipReason> {
    let [id, hex]: [Vec<u8>; FIELD_COUNT] = fields
        .try_into()
        .map_err(|f: Vec<Vec<u8>>| SkipReason::FieldCount(f.len()))?;
    let id = String::from_utf8(id).map_err(|_| SkipReason::InvalidUtf8)?;
    let hex = String::from_utf8(hex).map_err(|_| SkipReason::InvalidUtf8)?;
    let id = id
        .parse::<RecordId>()
        .map_err(|_| SkipReason::InvalidId(id.clone()))?;
    Ok(Record { id, hex })
}

/// Returns the end of the first line's content (before `\r\n` or `\n`) and
/// the offset where the next line starts.
fn line_end(bytes: &[u8]) -> (usize, usize) {
    match bytes.iter().position(|&b| b == b'\n') {
        Some(i) => {
            let content = if bytes[..i].ends_with(b"\r") { i - 1 } else { i };
            (content, i + 1)
        }
        None => {
            let content = bytes.strip_suffix(b"\r").map_or(bytes.len(), <[u8]>::len);
            (content, bytes.len())
        }
    }
}

/// Reads one row from the start of `bytes`. Returns the raw fields (or why
/// the row is unusable) and how many bytes the row occupied, terminator
/// included.
fn read_row(bytes: &[u8]) -> (Result<Vec<Vec<u8>>, SkipReason>, usize) {
    let mut fields = Vec::new();
    let mut i = 0;

    loop {
        if bytes.get(i) == Some(&b'"') {
            let mut field = Vec::new();
            let mut segment = i + 1;
            let mut closed = None;
            while let Some(offset) = bytes[segment..].iter().position(|&b| b == b'"') {
                let q = segment + offset;
                field.extend_from_slice(&bytes[segment..q]);
                if bytes.get(q + 1) == Some(&b'"') {
                    field.push(b'"');
                    segment = q + 2;
                } else {
                    closed = Some(q + 1);
                    break;
                }
            }

            let Some(after) = closed else {
                return (Err(SkipReason::UnterminatedQuote), line_end(bytes).1);
            };
            fields.push(field);
            i = after;

            match bytes.get(i) {
                Some(b',') => i += 1,
                None => return (Ok(fields), i),
                Some(b'\n') => return (Ok(fields), i + 1),
                Some(b'\r') if bytes.get(i + 1) == Some(&b'\n') => return (Ok(fields), i + 2),
                Some(_) => {
                    // A quote that ran across lines and then closed on garbage is almost
                    // always an unclosed quote eating the next row. Resync on the row's
                    // own line so the following rows still load.
                    if bytes[..i].contains(&b'\n') {
                        return (Err(SkipReason::UnterminatedQuote), line_end(bytes).1);
                    }
                    return (Err(SkipReason::StrayQuote), i + line_end(&bytes[i..]).1);
                }
            }
        } else {
            let rest = &bytes[i..];
            let stop = rest
                .iter()
                .position(|&b| b == b',' || b == b'\n')
                .unwrap_or(rest.len());
            match bytes.get(i + stop) {
                Some(b',') => {
                    fields.push(rest[..stop].to_vec());
                    i += stop + 1;
                }
                Some(_) => {
                    let field = &rest[..stop];
                    fields.push(field.strip_suffix(b"\r").unwrap_or(field).to_vec());
                    return (Ok(fields), i + stop + 1);
                }
                None => {
                    fields.push(rest.strip_suffix(b"\r").unwrap_or(rest).to_vec());
                    return (Ok(fields), bytes.len());
                }
            }
        }
    }
}
