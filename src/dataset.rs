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

use crate::error::Result;
use crate::transaction_reader::TransactionReader;
use std::io::BufRead;
use std::path::Path;

/// An ordered sequence of transactions, each a list of item names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    transactions: Vec<Vec<String>>,
}

impl Dataset {
    pub fn from_transactions<T, S>(transactions: T) -> Dataset
    where
        T: IntoIterator,
        T::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dataset {
            transactions: transactions
                .into_iter()
                .map(|t| t.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Reads a dataset with one comma separated transaction per line,
    /// optionally skipping a header line.
    pub fn read<R: BufRead>(reader: R, has_header: bool) -> Result<Dataset> {
        let mut transactions = vec![];
        for transaction in TransactionReader::new(reader).skip(if has_header { 1 } else { 0 }) {
            transactions.push(transaction?);
        }
        Ok(Dataset { transactions })
    }

    pub fn read_file<P: AsRef<Path>>(path: P, has_header: bool) -> Result<Dataset> {
        let mut transactions = vec![];
        for transaction in TransactionReader::open(path)?.skip(if has_header { 1 } else { 0 }) {
            transactions.push(transaction?);
        }
        Ok(Dataset { transactions })
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[Vec<String>] {
        &self.transactions
    }
}
