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

//! Market basket analysis with Apriori.
//!
//! Transactions are encoded into a column-wise bitset matrix, frequent
//! itemsets are mined level by level, and association rules are derived
//! from the frequent itemsets:
//!
//! ```
//! use basket::{analyze, AnalysisConfig, Dataset};
//!
//! let dataset = Dataset::from_transactions(vec![
//!     vec!["milk", "bread"],
//!     vec!["milk", "bread", "butter"],
//!     vec!["milk"],
//!     vec!["bread", "butter"],
//! ]);
//! let analysis = analyze(&dataset, &AnalysisConfig::new(0.5, 0.7)).unwrap();
//! assert_eq!(analysis.frequent.len(), 5);
//! assert_eq!(analysis.rules[0].to_string(&analysis.items), "butter => bread");
//! ```

pub mod analysis;
pub mod apriori;
pub mod dataset;
pub mod encoder;
pub mod error;
pub mod generate_rules;
pub mod item;
pub mod item_list;
pub mod itemset;
pub mod matrix;
pub mod report;
pub mod rule;
pub mod transaction_reader;
mod vec_sets;

pub use analysis::{analyze, Analysis, AnalysisConfig};
pub use apriori::{mine, mine_with_max_len, DEGENERATE_ITEM_LIMIT};
pub use dataset::Dataset;
pub use encoder::encode;
pub use error::{Error, Result};
pub use generate_rules::{derive_rules, derive_rules_with_min_lift};
pub use item::Item;
pub use item_list::ItemList;
pub use itemset::{FrequentItemsets, ItemSet};
pub use matrix::EncodedMatrix;
pub use report::{write_itemsets, write_rules};
pub use rule::Rule;
pub use transaction_reader::TransactionReader;
