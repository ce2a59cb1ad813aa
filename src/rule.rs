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

use crate::error::{Error, Result};
use crate::item::Item;
use crate::item_list::ItemList;
use crate::itemset::{FrequentItemsets, ItemSet};

/// An association rule `antecedent => consequent`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: f64,
}

impl Rule {
    // Creates a new Rule splitting `itemset` into (antecedent,consequent)
    // if the rule would be above the min_confidence and min_lift
    // thresholds. Both halves must be in the frequent table. An
    // antecedent no transaction contains has undefined confidence and
    // yields no rule.
    pub fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        itemset: &ItemSet,
        frequent: &FrequentItemsets,
        min_confidence: f64,
        min_lift: f64,
    ) -> Result<Option<Rule>> {
        if antecedent.is_empty() || consequent.is_empty() {
            return Ok(None);
        }

        let a = lookup(frequent, &antecedent, itemset)?;
        let c = lookup(frequent, &consequent, itemset)?;
        if a.count == 0 {
            return Ok(None);
        }

        // Use counts rather than supports so confidence is exactly 1
        // whenever every antecedent transaction has the consequent.
        let confidence = (itemset.count as f64) / (a.count as f64);
        if confidence < min_confidence {
            return Ok(None);
        }

        // A consequent no transaction contains forces a confidence of 0;
        // its lift is taken as 0 rather than 0/0.
        let lift = if c.count == 0 {
            0.0
        } else {
            confidence / c.support
        };
        if lift < min_lift {
            return Ok(None);
        }

        let leverage = itemset.support - a.support * c.support;
        let conviction = if confidence >= 1.0 {
            std::f64::INFINITY
        } else {
            (1.0 - c.support) / (1.0 - confidence)
        };

        Ok(Some(Rule {
            antecedent,
            consequent,
            antecedent_support: a.support,
            consequent_support: c.support,
            support: itemset.support,
            confidence,
            lift,
            leverage,
            conviction,
        }))
    }

    pub fn to_string(&self, items: &ItemList) -> String {
        [
            items.item_vec_to_string(&self.antecedent),
            " => ".to_owned(),
            items.item_vec_to_string(&self.consequent),
        ]
        .join("")
    }
}

fn lookup<'a>(
    frequent: &'a FrequentItemsets,
    subset: &[Item],
    itemset: &ItemSet,
) -> Result<&'a ItemSet> {
    match frequent.get(subset) {
        Some(found) => Ok(found),
        None => Err(Error::InconsistentState {
            details: format!(
                "subset {:?} of frequent itemset {:?} is missing from the frequent itemsets",
                subset, itemset.items
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;
    use crate::error::Error;
    use crate::item::Item;
    use crate::item_list::ItemList;
    use crate::itemset::{FrequentItemsets, ItemSet};

    fn items(ids: &[u32]) -> Vec<Item> {
        ids.iter().map(|&i| Item::with_id(i)).collect()
    }

    // bread=0 butter=1 milk=2 over four transactions.
    fn frequent() -> FrequentItemsets {
        let mut frequent = FrequentItemsets::new(4);
        frequent.push(ItemSet::new(items(&[0]), 3, 4));
        frequent.push(ItemSet::new(items(&[1]), 2, 4));
        frequent.push(ItemSet::new(items(&[2]), 3, 4));
        frequent.push(ItemSet::new(items(&[0, 1]), 2, 4));
        frequent.push(ItemSet::new(items(&[0, 2]), 2, 4));
        frequent
    }

    #[test]
    fn test_make() {
        let frequent = frequent();
        let bread_butter = frequent.get(&items(&[0, 1])).unwrap().clone();

        let rule = Rule::make(items(&[1]), items(&[0]), &bread_butter, &frequent, 0.7, 0.0)
            .unwrap()
            .unwrap();
        assert_eq!(rule.confidence, 1.0);
        assert_eq!(rule.support, 0.5);
        assert_eq!(rule.antecedent_support, 0.5);
        assert_eq!(rule.consequent_support, 0.75);
        assert!((rule.lift - 4.0 / 3.0).abs() < 1e-12);
        assert!((rule.leverage - (0.5 - 0.5 * 0.75)).abs() < 1e-12);
        assert!(rule.conviction.is_infinite());

        let names = ItemList::from_names(vec!["bread".to_string(), "butter".to_string()]);
        assert_eq!(rule.to_string(&names), "butter => bread");

        // bread => butter has confidence 2/3.
        assert_eq!(
            Rule::make(items(&[0]), items(&[1]), &bread_butter, &frequent, 0.7, 0.0).unwrap(),
            None
        );
        let rule = Rule::make(items(&[0]), items(&[1]), &bread_butter, &frequent, 0.6, 0.0)
            .unwrap()
            .unwrap();
        assert!((rule.confidence - 2.0 / 3.0).abs() < 1e-12);
        assert!((rule.conviction - (0.5 / (1.0 / 3.0))).abs() < 1e-12);
    }

    #[test]
    fn test_make_min_lift() {
        let frequent = frequent();
        let bread_milk = frequent.get(&items(&[0, 2])).unwrap().clone();
        // lift = (2/3) / 0.75 < 1
        assert_eq!(
            Rule::make(items(&[0]), items(&[2]), &bread_milk, &frequent, 0.0, 1.0).unwrap(),
            None
        );
        assert!(Rule::make(items(&[0]), items(&[2]), &bread_milk, &frequent, 0.0, 0.5)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_make_zero_count_itemset() {
        // a=0 b=1 c=2 over transactions {a}, {b}, {c}.
        let mut frequent = FrequentItemsets::new(3);
        for i in 0..3 {
            frequent.push(ItemSet::new(items(&[i]), 1, 3));
        }
        frequent.push(ItemSet::new(items(&[0, 1]), 0, 3));
        frequent.push(ItemSet::new(items(&[0, 2]), 0, 3));
        frequent.push(ItemSet::new(items(&[1, 2]), 0, 3));
        let abc = ItemSet::new(items(&[0, 1, 2]), 0, 3);
        frequent.push(abc.clone());

        let rule = Rule::make(items(&[0]), items(&[1, 2]), &abc, &frequent, 0.0, 0.0)
            .unwrap()
            .unwrap();
        assert_eq!(rule.confidence, 0.0);
        assert_eq!(rule.support, 0.0);
        assert_eq!(rule.consequent_support, 0.0);
        assert_eq!(rule.lift, 0.0);
        assert_eq!(rule.leverage, 0.0);
        assert_eq!(rule.conviction, 1.0);

        let rule = Rule::make(items(&[0, 1]), items(&[2]), &abc, &frequent, 0.0, 0.0).unwrap();
        assert_eq!(rule, None);

        assert_eq!(
            Rule::make(items(&[0]), items(&[1, 2]), &abc, &frequent, 0.01, 0.0).unwrap(),
            None
        );
    }

    #[test]
    fn test_make_zero_count_missing_subset() {
        let mut frequent = FrequentItemsets::new(2);
        frequent.push(ItemSet::new(items(&[0]), 1, 2));
        let itemset = ItemSet::new(items(&[0, 1]), 0, 2);
        frequent.push(itemset.clone());
        match Rule::make(items(&[0]), items(&[1]), &itemset, &frequent, 0.0, 0.0) {
            Err(Error::InconsistentState { .. }) => {}
            other => panic!("expected InconsistentState, got {:?}", other),
        }
    }

    #[test]
    fn test_make_missing_subset() {
        let mut frequent = FrequentItemsets::new(4);
        frequent.push(ItemSet::new(items(&[0]), 3, 4));
        let itemset = ItemSet::new(items(&[0, 1]), 2, 4);
        frequent.push(itemset.clone());
        match Rule::make(items(&[1]), items(&[0]), &itemset, &frequent, 0.0, 0.0) {
            Err(Error::InconsistentState { .. }) => {}
            other => panic!("expected InconsistentState, got {:?}", other),
        }
    }
}
