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

use crate::error::{check_fraction, Error, Result};
use crate::item::Item;
use crate::item_list::ItemList;
use crate::itemset::{FrequentItemsets, ItemSet};
use crate::matrix::EncodedMatrix;
use crate::vec_sets::{subsets_without_one, union};
use rayon::prelude::*;
use tracing::debug;

/// With a minimum support of zero every itemset is frequent. Past this
/// many items the power set is refused unless a maximum length is given.
pub const DEGENERATE_ITEM_LIMIT: usize = 20;

pub fn mine(
    matrix: &EncodedMatrix,
    items: &ItemList,
    min_support: f64,
) -> Result<FrequentItemsets> {
    mine_with_max_len(matrix, items, min_support, None)
}

/// Level-wise Apriori search. Frequent itemsets of size k are found by
/// joining frequent (k-1)-itemsets that share their first k-2 items,
/// dropping any candidate with an infrequent (k-1)-subset, then counting
/// the survivors against the matrix.
pub fn mine_with_max_len(
    matrix: &EncodedMatrix,
    items: &ItemList,
    min_support: f64,
    max_len: Option<usize>,
) -> Result<FrequentItemsets> {
    check_fraction("support", min_support)?;
    if items.len() != matrix.num_items() {
        return Err(Error::invalid_input(format!(
            "item list has {} items but matrix has {} columns",
            items.len(),
            matrix.num_items()
        )));
    }
    if max_len == Some(0) {
        return Err(Error::invalid_input("maximum itemset length must be at least 1"));
    }
    if min_support == 0.0 && max_len.is_none() && items.len() > DEGENERATE_ITEM_LIMIT {
        return Err(Error::InvalidThreshold {
            name: "support",
            value: min_support,
            reason: format!(
                "every one of the 2^{} - 1 itemsets would be frequent; \
                 raise the threshold or set a maximum itemset length",
                items.len()
            ),
        });
    }

    let num_transactions = matrix.num_transactions();
    let max_len = max_len.unwrap_or(items.len()).min(items.len());
    let mut frequent = FrequentItemsets::new(num_transactions);

    let mut level: Vec<ItemSet> = (0..items.len())
        .into_par_iter()
        .map(|i| {
            let itemset = vec![Item::with_id(i as u32)];
            let count = matrix.count(&itemset);
            ItemSet::new(itemset, count, num_transactions)
        })
        .filter(|itemset| itemset.support >= min_support)
        .collect();
    debug!(k = 1, candidates = items.len(), frequent = level.len(), "mined level");

    let mut k = 1;
    while !level.is_empty() && k < max_len {
        let previous: Vec<Vec<Item>> = level.iter().map(|i| i.items.clone()).collect();
        for itemset in level {
            frequent.push(itemset);
        }
        k += 1;

        let candidates = generate_candidates(&previous, &frequent);
        let num_candidates = candidates.len();
        level = candidates
            .into_par_iter()
            .map(|candidate| {
                let count = matrix.count(&candidate);
                ItemSet::new(candidate, count, num_transactions)
            })
            .filter(|itemset| itemset.support >= min_support)
            .collect();
        debug!(k, candidates = num_candidates, frequent = level.len(), "mined level");
    }
    for itemset in level {
        frequent.push(itemset);
    }

    Ok(frequent)
}

// `previous` holds the frequent (k-1)-itemsets in lexicographic order, so
// itemsets sharing a (k-2)-prefix are adjacent and the candidates come out
// in lexicographic order too.
fn generate_candidates(previous: &[Vec<Item>], frequent: &FrequentItemsets) -> Vec<Vec<Item>> {
    let mut candidates: Vec<Vec<Item>> = vec![];
    for (i, a) in previous.iter().enumerate() {
        let prefix_len = a.len() - 1;
        for b in &previous[i + 1..] {
            if a[..prefix_len] != b[..prefix_len] {
                break;
            }
            let candidate = union(a, b);
            let all_subsets_frequent = subsets_without_one(&candidate)
                .iter()
                .all(|subset| frequent.contains(subset));
            if all_subsets_frequent {
                candidates.push(candidate);
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::encoder::encode;

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&i| Item::with_id(i)).collect()
    }

    fn table(frequent: &FrequentItemsets, item_list: &ItemList) -> Vec<(String, usize)> {
        frequent
            .iter()
            .map(|i| (item_list.item_vec_to_string(&i.items), i.count))
            .collect()
    }

    fn basket() -> Dataset {
        Dataset::from_transactions(vec![
            vec!["milk", "bread"],
            vec!["milk", "bread", "butter"],
            vec!["milk"],
            vec!["bread", "butter"],
        ])
    }

    #[test]
    fn test_generate_candidates_prunes() {
        let mut frequent = FrequentItemsets::new(10);
        let level2 = vec![
            items(&[1, 2]),
            items(&[1, 3]),
            items(&[1, 4]),
            items(&[2, 3]),
            items(&[2, 4]),
        ];
        for i in 1..5 {
            frequent.push(ItemSet::new(items(&[i]), 5, 10));
        }
        for itemset in &level2 {
            frequent.push(ItemSet::new(itemset.clone(), 5, 10));
        }
        // {1,3,4} and {2,3,4} need {3,4}, which isn't frequent.
        assert_eq!(
            generate_candidates(&level2, &frequent),
            vec![items(&[1, 2, 3]), items(&[1, 2, 4])]
        );
    }

    #[test]
    fn test_generate_candidates_from_singletons() {
        let mut frequent = FrequentItemsets::new(10);
        let level1 = vec![items(&[0]), items(&[2]), items(&[5])];
        for itemset in &level1 {
            frequent.push(ItemSet::new(itemset.clone(), 5, 10));
        }
        assert_eq!(
            generate_candidates(&level1, &frequent),
            vec![items(&[0, 2]), items(&[0, 5]), items(&[2, 5])]
        );
    }

    #[test]
    fn test_mine_basket() {
        let (matrix, item_list) = encode(&basket()).unwrap();
        let frequent = mine(&matrix, &item_list, 0.5).unwrap();
        assert_eq!(
            table(&frequent, &item_list),
            vec![
                ("bread".to_string(), 3),
                ("butter".to_string(), 2),
                ("milk".to_string(), 3),
                ("bread butter".to_string(), 2),
                ("bread milk".to_string(), 2),
            ]
        );
        let bread_milk = item_list.to_id_vec(&["milk", "bread"]).unwrap();
        assert_eq!(frequent.support(&bread_milk), Some(0.5));
        let milk = item_list.to_id_vec(&["milk"]).unwrap();
        assert_eq!(frequent.support(&milk), Some(0.75));
    }

    #[test]
    fn test_min_support_one() {
        let dataset = Dataset::from_transactions(vec![
            vec!["a", "b", "c"],
            vec!["a", "b"],
            vec!["a", "b", "d"],
        ]);
        let (matrix, item_list) = encode(&dataset).unwrap();
        let frequent = mine(&matrix, &item_list, 1.0).unwrap();
        assert_eq!(
            table(&frequent, &item_list),
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 3),
                ("a b".to_string(), 3),
            ]
        );

        let (matrix, item_list) = encode(&basket()).unwrap();
        assert!(mine(&matrix, &item_list, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_min_support_zero_is_power_set() {
        let dataset = Dataset::from_transactions(vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
        let (matrix, item_list) = encode(&dataset).unwrap();
        let frequent = mine(&matrix, &item_list, 0.0).unwrap();
        assert_eq!(frequent.len(), 15);
        assert_eq!(frequent.max_len(), 4);
        let all = item_list.to_id_vec(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(frequent.get(&all).map(|i| i.count), Some(0));
    }

    #[test]
    fn test_min_support_zero_needs_bound() {
        let transaction: Vec<String> = (0..25).map(|i| format!("item{}", i)).collect();
        let dataset = Dataset::from_transactions(vec![transaction]);
        let (matrix, item_list) = encode(&dataset).unwrap();
        match mine(&matrix, &item_list, 0.0) {
            Err(Error::InvalidThreshold { name, .. }) => assert_eq!(name, "support"),
            other => panic!("expected InvalidThreshold, got {:?}", other),
        }
        let frequent = mine_with_max_len(&matrix, &item_list, 0.0, Some(2)).unwrap();
        assert_eq!(frequent.len(), 25 + 25 * 24 / 2);
    }

    #[test]
    fn test_max_len() {
        let dataset = Dataset::from_transactions(vec![vec!["a", "b", "c"], vec!["a", "b", "c"]]);
        let (matrix, item_list) = encode(&dataset).unwrap();
        assert_eq!(mine(&matrix, &item_list, 0.5).unwrap().len(), 7);
        let frequent = mine_with_max_len(&matrix, &item_list, 0.5, Some(2)).unwrap();
        assert_eq!(frequent.len(), 6);
        assert_eq!(frequent.max_len(), 2);
        assert!(mine_with_max_len(&matrix, &item_list, 0.5, Some(0)).is_err());
    }

    #[test]
    fn test_invalid_threshold() {
        let (matrix, item_list) = encode(&basket()).unwrap();
        for &bad in &[1.5, -0.1, std::f64::NAN] {
            match mine(&matrix, &item_list, bad) {
                Err(Error::InvalidThreshold { .. }) => {}
                other => panic!("expected InvalidThreshold, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_mismatched_item_list() {
        let (matrix, _) = encode(&basket()).unwrap();
        let other = ItemList::from_names(vec!["x".to_string()]);
        match mine(&matrix, &other, 0.5) {
            Err(Error::InvalidInput { .. }) => {}
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
