/*!
Error types used in the library.

Most recoverable conditions (syntax errors, undefined properties, schema
mismatches, "no pair possible") are never represented here --- per the error
handling design, those are logged warnings and forward progress, not
[Result] values. The types in this module cover only the handful of
operations that must hand a failure back to a caller: reading a
specification stream or an initial-suite file.
*/

use std::fmt;

/// Errors which may occur while reading a specification stream.
#[derive(Debug)]
pub enum SpecReadError {
    /// The underlying reader failed.
    Io(std::io::Error),
}

impl fmt::Display for SpecReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecReadError::Io(e) => write!(f, "failed to read specification: {e}"),
        }
    }
}

impl std::error::Error for SpecReadError {}

impl From<std::io::Error> for SpecReadError {
    fn from(e: std::io::Error) -> Self {
        SpecReadError::Io(e)
    }
}

/// Errors which may occur while reading an initial (prior) test suite.
///
/// A row whose length disagrees with the header is *not* one of these --- that's
/// a per-row warning (see [absorber](crate::absorber)), not a fatal condition.
#[derive(Debug)]
pub enum InitialSuiteError {
    /// The file could not be opened or read.
    Io(std::io::Error),

    /// The stream was not valid CSV.
    Csv(csv::Error),
}

impl fmt::Display for InitialSuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialSuiteError::Io(e) => write!(f, "failed to read initial suite: {e}"),
            InitialSuiteError::Csv(e) => write!(f, "malformed initial suite: {e}"),
        }
    }
}

impl std::error::Error for InitialSuiteError {}

impl From<std::io::Error> for InitialSuiteError {
    fn from(e: std::io::Error) -> Self {
        InitialSuiteError::Io(e)
    }
}

impl From<csv::Error> for InitialSuiteError {
    fn from(e: csv::Error) -> Self {
        InitialSuiteError::Csv(e)
    }
}
