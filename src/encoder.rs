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

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::item_list::ItemList;
use crate::matrix::EncodedMatrix;
use fnv::FnvHashSet;
use tracing::debug;

/// Encodes a dataset into a presence matrix with one column per distinct
/// item. Columns are in `ItemList` order.
pub fn encode(dataset: &Dataset) -> Result<(EncodedMatrix, ItemList)> {
    if dataset.is_empty() {
        return Err(Error::invalid_input("dataset has no transactions"));
    }

    let mut distinct: FnvHashSet<&str> = FnvHashSet::default();
    for transaction in dataset.transactions() {
        distinct.extend(transaction.iter().map(|s| s.as_str()));
    }
    let items = ItemList::from_names(distinct.into_iter().map(String::from));

    let mut matrix = EncodedMatrix::new(dataset.len(), items.len());
    for (tid, transaction) in dataset.transactions().iter().enumerate() {
        for name in transaction {
            match items.id_of(name) {
                Some(item) => matrix.insert(tid, item),
                None => {
                    return Err(Error::InconsistentState {
                        details: format!("item {:?} missing from item list", name),
                    })
                }
            }
        }
    }

    debug!(
        transactions = matrix.num_transactions(),
        items = items.len(),
        "encoded dataset"
    );

    Ok((matrix, items))
}
