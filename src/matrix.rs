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

const WORD_BITS: usize = 64;

/// Boolean presence matrix of transactions by items, stored column-wise:
/// each item has a bitset with bit `tid` set iff transaction `tid`
/// contains the item. Bits past the last transaction are always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedMatrix {
    num_transactions: usize,
    words_per_column: usize,
    columns: Vec<Vec<u64>>,
}

impl EncodedMatrix {
    pub(crate) fn new(num_transactions: usize, num_items: usize) -> EncodedMatrix {
        let words_per_column = (num_transactions + WORD_BITS - 1) / WORD_BITS;
        EncodedMatrix {
            num_transactions,
            words_per_column,
            columns: vec![vec![0; words_per_column]; num_items],
        }
    }

    pub(crate) fn insert(&mut self, tid: usize, item: Item) {
        assert!(tid < self.num_transactions);
        self.columns[item.as_index()][tid / WORD_BITS] |= 1 << (tid % WORD_BITS);
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn num_items(&self) -> usize {
        self.columns.len()
    }

    pub fn contains(&self, tid: usize, item: Item) -> bool {
        if tid >= self.num_transactions || item.as_index() >= self.columns.len() {
            return false;
        }
        self.columns[item.as_index()][tid / WORD_BITS] & (1 << (tid % WORD_BITS)) != 0
    }

    pub fn row(&self, tid: usize) -> Vec<bool> {
        (0..self.num_items())
            .map(|i| self.contains(tid, Item::with_id(i as u32)))
            .collect()
    }

    /// Number of transactions containing every item in `itemset`. The
    /// empty itemset is contained in every transaction; an item outside
    /// the matrix is contained in none.
    pub fn count(&self, itemset: &[Item]) -> usize {
        if itemset.is_empty() {
            return self.num_transactions;
        }
        if itemset.iter().any(|item| item.as_index() >= self.columns.len()) {
            return 0;
        }
        let columns: Vec<&[u64]> = itemset
            .iter()
            .map(|item| self.columns[item.as_index()].as_slice())
            .collect();
        (0..self.words_per_column)
            .map(|w| {
                columns
                    .iter()
                    .fold(!0u64, |acc, column| acc & column[w])
                    .count_ones() as usize
            })
            .sum()
    }

    pub fn support(&self, itemset: &[Item]) -> f64 {
        if self.num_transactions == 0 {
            return 0.0;
        }
        (self.count(itemset) as f64) / (self.num_transactions as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::EncodedMatrix;
    use crate::item::Item;

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&i| Item::with_id(i)).collect()
    }

    #[test]
    fn test_count() {
        // Columns: a=0 b=1 c=2 x=3 y=4 z=5
        let transactions: Vec<Vec<u32>> = vec![
            vec![0, 1, 2],
            vec![3, 5],
            vec![3, 5],
            vec![3, 4, 5],
            vec![3, 4, 5, 0],
            vec![],
        ];
        let mut matrix = EncodedMatrix::new(transactions.len(), 6);
        for (tid, transaction) in transactions.iter().enumerate() {
            for item in items(transaction) {
                matrix.insert(tid, item);
            }
        }

        assert_eq!(matrix.count(&items(&[0])), 2);
        assert_eq!(matrix.count(&items(&[1])), 1);
        assert_eq!(matrix.count(&items(&[3])), 4);
        assert_eq!(matrix.count(&items(&[3, 5])), 4);
        assert_eq!(matrix.count(&items(&[3, 4, 5])), 2);
        assert_eq!(matrix.count(&items(&[0, 3])), 1);
        assert_eq!(matrix.count(&items(&[1, 3])), 0);
        assert_eq!(matrix.count(&[]), 6);
        assert_eq!(matrix.support(&items(&[3, 4, 5])), 2.0 / 6.0);
        assert_eq!(matrix.row(5), vec![false; 6]);
        // Items past the last column are in no transaction.
        assert_eq!(matrix.count(&items(&[6])), 0);
        assert_eq!(matrix.count(&items(&[3, 40])), 0);
        assert_eq!(matrix.support(&items(&[40])), 0.0);
        assert!(!matrix.contains(0, Item::with_id(40)));
        assert_eq!(matrix.row(3), vec![false, false, false, true, true, true]);
    }

    #[test]
    fn test_count_spans_words() {
        let mut matrix = EncodedMatrix::new(200, 2);
        for tid in 0..200 {
            matrix.insert(tid, Item::with_id(0));
            if tid % 3 == 0 {
                matrix.insert(tid, Item::with_id(1));
            }
        }
        assert_eq!(matrix.count(&items(&[0])), 200);
        assert_eq!(matrix.count(&items(&[1])), 67);
        assert_eq!(matrix.count(&items(&[0, 1])), 67);
        assert!(matrix.contains(199, Item::with_id(0)));
        assert!(!matrix.contains(200, Item::with_id(0)));
        assert!(!matrix.contains(1, Item::with_id(1)));
    }
}
