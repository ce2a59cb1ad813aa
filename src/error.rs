// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io;

/// Errors produced while encoding, mining or deriving rules.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("invalid {name} threshold {value}: {reason}")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        reason: String,
    },

    #[error("inconsistent state: {details}")]
    InconsistentState { details: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input<S: Into<String>>(reason: S) -> Error {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }
}

// Thresholds expressed as fractions of the transaction count.
pub fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 || value > 1.0 {
        return Err(Error::InvalidThreshold {
            name,
            value,
            reason: String::from("must be in range [0,1]"),
        });
    }
    Ok(())
}
