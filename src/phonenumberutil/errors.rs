// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::num::ParseIntError;

use thiserror::Error;

use crate::regexp_cache::{InvalidRegexError, or_library_bug};

/// Failure inside the engine: either the error a caller gets to see, or a
/// metadata pattern that did not compile.
#[derive(Debug, PartialEq, Error)]
pub(crate) enum EngineError<E> {
    #[error("{0}")]
    Public(E),
    #[error("{0}")]
    Regex(#[from] InvalidRegexError),
}

pub(crate) type ParseResult<T> = Result<T, EngineError<ParseError>>;
pub(crate) type ExampleNumberResult<T> = Result<T, EngineError<GetExampleNumberError>>;

impl<E> EngineError<E> {
    /// Unwraps the caller-facing error. A regex failure cannot happen with
    /// the shipped metadata and panics.
    pub fn into_public(self) -> E {
        match self {
            EngineError::Public(err) => err,
            EngineError::Regex(err) => or_library_bug(Err(err)),
        }
    }
}

/// Why a string could not be turned into a [`crate::PhoneNumber`].
#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    /// No country calling code could be found, or it is not served by
    /// the metadata. Also returned for national input with no usable region.
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number: {0}")]
    NotANumber(#[from] NotANumberError),
    /// An international prefix was found but too few digits follow it.
    #[error("Too short after idd")]
    TooShortAfterIdd,
    #[error("Too short Nsn")]
    TooShortNsn,
    /// Also returned for inputs longer than 250 characters.
    #[error("Too long nsn")]
    TooLongNsn,
}

#[derive(Debug, PartialEq, Error)]
pub enum NotANumberError {
    #[error("Number not matched a valid number pattern")]
    NotMatchedValidNumberPattern,
    /// `;phone-context=` is neither a global number nor a domain name.
    #[error("Invalid phone context")]
    InvalidPhoneContext,
    #[error("{0}")]
    FailedToParseNumberAsInt(#[from] ParseIntError),
    #[error("{0}")]
    FailedToExtractNumber(#[from] ExtractNumberError),
}

#[derive(Debug, PartialEq, Error)]
pub enum ExtractNumberError {
    #[error("No valid start character found")]
    NoValidStartCharacter,
    #[error("Invalid number")]
    NotANumber,
}

#[derive(Debug, PartialEq, Error)]
pub enum GetExampleNumberError {
    #[error("Parse error: {0}")]
    FailedToParse(#[from] ParseError),
    /// The region has no example for the requested type.
    #[error("No example number")]
    NoExampleNumber,
    #[error("Could not get number")]
    CouldNotGetNumber,
    #[error("Invalid country code provided")]
    InvalidRegionCode,
}

/// Reasons a number fails the length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The calling code is not served by the metadata.
    #[error("The number has an invalid country calling code")]
    InvalidCountryCode,
    /// Shorter than every length the region allows.
    #[error("The number is shorter than all valid numbers for this region")]
    TooShort,
    /// Between the shortest and longest allowed lengths, but not one of them.
    /// Also the answer for a type the region has no numbers of.
    #[error("The number length does not match any valid length for this region")]
    InvalidLength,
    /// Longer than every length the region allows.
    #[error("The number is longer than all valid numbers for this region")]
    TooLong,
}

impl From<ExtractNumberError> for ParseError {
    fn from(value: ExtractNumberError) -> Self {
        NotANumberError::FailedToExtractNumber(value).into()
    }
}

impl From<ParseError> for EngineError<ParseError> {
    fn from(value: ParseError) -> Self {
        EngineError::Public(value)
    }
}

impl From<NotANumberError> for EngineError<ParseError> {
    fn from(value: NotANumberError) -> Self {
        EngineError::Public(value.into())
    }
}

impl From<ExtractNumberError> for EngineError<ParseError> {
    fn from(value: ExtractNumberError) -> Self {
        EngineError::Public(value.into())
    }
}

impl From<GetExampleNumberError> for EngineError<GetExampleNumberError> {
    fn from(value: GetExampleNumberError) -> Self {
        EngineError::Public(value)
    }
}

impl From<EngineError<ParseError>> for EngineError<GetExampleNumberError> {
    fn from(value: EngineError<ParseError>) -> Self {
        match value {
            EngineError::Public(err) => EngineError::Public(err.into()),
            EngineError::Regex(err) => EngineError::Regex(err),
        }
    }
}
