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
use crate::itemset::{FrequentItemsets, ItemSet};
use crate::rule::Rule;
use crate::vec_sets::difference;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

pub fn derive_rules(frequent: &FrequentItemsets, min_confidence: f64) -> Result<Vec<Rule>> {
    derive_rules_with_min_lift(frequent, min_confidence, None)
}

/// Generates every rule `A => I \ A` for each frequent itemset `I` of two
/// or more items and each non-empty proper subset `A`, keeping those at or
/// above `min_confidence` (and `min_lift` if given).
///
/// Rules are ordered by source itemset in discovery order, then by
/// antecedent size, then lexicographically by antecedent.
pub fn derive_rules_with_min_lift(
    frequent: &FrequentItemsets,
    min_confidence: f64,
    min_lift: Option<f64>,
) -> Result<Vec<Rule>> {
    check_fraction("confidence", min_confidence)?;
    if let Some(lift) = min_lift {
        if lift.is_nan() || lift < 0.0 {
            return Err(Error::InvalidThreshold {
                name: "lift",
                value: lift,
                reason: String::from("must be non-negative"),
            });
        }
    }
    let min_lift = min_lift.unwrap_or(0.0);

    let per_itemset: Vec<Vec<Rule>> = frequent
        .as_slice()
        .par_iter()
        .filter(|itemset| itemset.len() > 1)
        .map(|itemset| rules_for_itemset(itemset, frequent, min_confidence, min_lift))
        .collect::<Result<Vec<Vec<Rule>>>>()?;
    let rules: Vec<Rule> = per_itemset.into_iter().flatten().collect();

    debug!(
        itemsets = frequent.len(),
        rules = rules.len(),
        "derived rules"
    );
    Ok(rules)
}

fn rules_for_itemset(
    itemset: &ItemSet,
    frequent: &FrequentItemsets,
    min_confidence: f64,
    min_lift: f64,
) -> Result<Vec<Rule>> {
    let mut rules: Vec<Rule> = vec![];
    for size in 1..itemset.len() {
        for antecedent in itemset.items.iter().cloned().combinations(size) {
            let consequent: Vec<Item> = difference(&itemset.items, &antecedent);
            if let Some(rule) = Rule::make(
                antecedent,
                consequent,
                itemset,
                frequent,
                min_confidence,
                min_lift,
            )? {
                rules.push(rule);
            }
        }
    }
    Ok(rules)
}
