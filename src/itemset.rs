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

use crate::item::Item;
use fnv::FnvHashMap;
use std::slice;

/// A set of items, sorted by id, with the number of transactions that
/// contain all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub count: usize,
    pub support: f64,
}

impl ItemSet {
    pub fn new(items: Vec<Item>, count: usize, num_transactions: usize) -> ItemSet {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        let support = if num_transactions == 0 {
            0.0
        } else {
            (count as f64) / (num_transactions as f64)
        };
        ItemSet {
            items,
            count,
            support,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The frequent itemsets of a dataset, in the order they were discovered:
/// by size, then lexicographically by item id.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequentItemsets {
    itemsets: Vec<ItemSet>,
    index: FnvHashMap<Vec<Item>, usize>,
    num_transactions: usize,
}

impl FrequentItemsets {
    pub fn new(num_transactions: usize) -> FrequentItemsets {
        FrequentItemsets {
            itemsets: vec![],
            index: FnvHashMap::default(),
            num_transactions,
        }
    }

    pub fn push(&mut self, itemset: ItemSet) {
        self.index.insert(itemset.items.clone(), self.itemsets.len());
        self.itemsets.push(itemset);
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn iter(&self) -> slice::Iter<ItemSet> {
        self.itemsets.iter()
    }

    pub fn as_slice(&self) -> &[ItemSet] {
        &self.itemsets
    }

    pub fn get(&self, items: &[Item]) -> Option<&ItemSet> {
        self.index.get(items).map(|&i| &self.itemsets[i])
    }

    pub fn contains(&self, items: &[Item]) -> bool {
        self.index.contains_key(items)
    }

    pub fn support(&self, items: &[Item]) -> Option<f64> {
        self.get(items).map(|itemset| itemset.support)
    }

    pub fn max_len(&self) -> usize {
        self.itemsets.iter().map(|i| i.len()).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a FrequentItemsets {
    type Item = &'a ItemSet;
    type IntoIter = slice::Iter<'a, ItemSet>;
    fn into_iter(self) -> slice::Iter<'a, ItemSet> {
        self.itemsets.iter()
    }
}
