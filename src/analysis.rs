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

use crate::apriori::mine_with_max_len;
use crate::dataset::Dataset;
use crate::encoder::encode;
use crate::error::{check_fraction, Error, Result};
use crate::generate_rules::derive_rules_with_min_lift;
use crate::item_list::ItemList;
use crate::itemset::FrequentItemsets;
use crate::rule::Rule;
use tracing::debug;

/// Thresholds for one analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
    pub max_len: Option<usize>,
}

impl AnalysisConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> AnalysisConfig {
        AnalysisConfig {
            min_support,
            min_confidence,
            min_lift: None,
            max_len: None,
        }
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> AnalysisConfig {
        self.min_lift = Some(min_lift);
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> AnalysisConfig {
        self.max_len = Some(max_len);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_fraction("support", self.min_support)?;
        check_fraction("confidence", self.min_confidence)?;
        if let Some(min_lift) = self.min_lift {
            if min_lift.is_nan() || min_lift < 0.0 {
                return Err(Error::InvalidThreshold {
                    name: "lift",
                    value: min_lift,
                    reason: String::from("must be non-negative"),
                });
            }
        }
        if self.max_len == Some(0) {
            return Err(Error::invalid_input("maximum itemset length must be at least 1"));
        }
        Ok(())
    }
}

/// The two result tables of an analysis, plus the item names needed to
/// render them.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub items: ItemList,
    pub frequent: FrequentItemsets,
    pub rules: Vec<Rule>,
}

/// Runs encode, mine and rule derivation over `dataset`.
pub fn analyze(dataset: &Dataset, config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;
    let (matrix, items) = encode(dataset)?;
    let frequent = mine_with_max_len(&matrix, &items, config.min_support, config.max_len)?;
    let rules = derive_rules_with_min_lift(&frequent, config.min_confidence, config.min_lift)?;
    debug!(
        transactions = dataset.len(),
        itemsets = frequent.len(),
        rules = rules.len(),
        "analysis complete"
    );
    Ok(Analysis {
        items,
        frequent,
        rules,
    })
}
