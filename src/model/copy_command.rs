//! Copy command types: one `cp` line of a generated copy script.

use jiff::civil::{Date, DateTime, Time};

/// Leading token of the lines a copy script is made of.
pub const COPY_DIRECTIVE: &str = "cp";

/// Errors parsing a single copy line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyCommandError {
    #[error("expected 4 tokens (directive, flag, source, destination), found {0}")]
    TokenCount(usize),

    #[error("file name '{0}' has no 14-character capture timestamp segment")]
    Timestamp(String),
}

/// A parsed copy line: `cp <flag> <source> <dest_dir>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCommand<'a> {
    pub directive: &'a str,
    pub verbosity: &'a str,
    pub source: &'a str,
    pub dest_dir: &'a str,
}

impl<'a> CopyCommand<'a> {
    /// Whether the line is a copy line at all.
    ///
    /// Prefix match only: anything starting with the directive qualifies.
    pub fn is_copy_line(line: &str) -> bool {
        line.starts_with(COPY_DIRECTIVE)
    }

    /// Splits a copy line into its four tokens.
    pub fn parse(line: &'a str) -> Result<Self, CopyCommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[..] {
            [directive, verbosity, source, dest_dir] => Ok(Self {
                directive,
                verbosity,
                source,
                dest_dir,
            }),
            _ => Err(CopyCommandError::TokenCount(tokens.len())),
        }
    }

    /// Final path segment of the source.
    pub fn source_file_name(&self) -> &'a str {
        self.source
            .rsplit_once('/')
            .map_or(self.source, |(_, name)| name)
    }
}

/// The capture time embedded at the end of a camera file name.
///
/// `SuliusCam_20190522143000.jpg` splits into the date `20190522`, the time
/// `143000` and the suffix `.jpg`. The pieces are taken by position and kept
/// verbatim; nothing checks that they form a real date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTimestamp {
    pub date: String,
    pub time: String,
    pub suffix: String,
}

impl CaptureTimestamp {
    /// Slices the last `_`-separated segment of a file name into
    /// `[0, 8)` date, `[8, 14)` time and `[14, ..)` suffix, counted in characters.
    ///
    /// Fails only when the segment is shorter than 14 characters.
    pub fn from_file_name(file_name: &str) -> Result<Self, CopyCommandError> {
        let segment = file_name
            .rsplit_once('_')
            .map_or(file_name, |(_, last)| last);

        let (Some(time_at), Some(suffix_at)) =
            (char_offset(segment, 8), char_offset(segment, 14))
        else {
            return Err(CopyCommandError::Timestamp(file_name.to_string()));
        };

        Ok(Self {
            date: segment[..time_at].to_string(),
            time: segment[time_at..suffix_at].to_string(),
            suffix: segment[suffix_at..].to_string(),
        })
    }

    /// Interprets the date and time as a calendar date-time, if they are one.
    pub fn civil(&self) -> Option<DateTime> {
        let number = |digits: &str| {
            if digits.bytes().all(|b| b.is_ascii_digit()) {
                digits.parse::<i16>().ok()
            } else {
                None
            }
        };
        let pair = |digits: &str, at: usize| {
            digits
                .get(at..at + 2)
                .and_then(number)
                .and_then(|n| i8::try_from(n).ok())
        };

        let date = Date::new(
            number(self.date.get(0..4)?)?,
            pair(&self.date, 4)?,
            pair(&self.date, 6)?,
        )
        .ok()?;
        let time = Time::new(
            pair(&self.time, 0)?,
            pair(&self.time, 2)?,
            pair(&self.time, 4)?,
            0,
        )
        .ok()?;
        Some(DateTime::from_parts(date, time))
    }

    /// Renders as `YYYYMMDD_HHMMSS000<suffix>`, the shoreside naming scheme.
    ///
    /// The camera records whole seconds; milliseconds are always `000`.
    pub fn render(&self) -> String {
        format!("{}_{}000{}", self.date, self.time, self.suffix)
    }
}

/// Byte offset of the `n`th character, or the end when `s` has exactly `n`.
fn char_offset(s: &str, n: usize) -> Option<usize> {
    s.char_indices()
        .map(|(at, _)| at)
        .chain(std::iter::once(s.len()))
        .nth(n)
}
