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

use fnv::FnvHashMap;
use crate::item::{sort_item_names, Item};

/// The ordered universe of distinct items in a dataset. Column `i` of the
/// encoded matrix holds the item named `names[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemList {
    names: Vec<String>,
    item_str_to_id: FnvHashMap<String, Item>,
}

impl ItemList {
    pub fn from_names<I>(names: I) -> ItemList
    where
        I: IntoIterator<Item = String>,
    {
        let mut names: Vec<String> = names.into_iter().collect();
        sort_item_names(&mut names);
        names.dedup();
        let item_str_to_id = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), Item::with_id(index as u32)))
            .collect();
        ItemList {
            names,
            item_str_to_id,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn id_of(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }

    pub fn str_of(&self, item: Item) -> &str {
        &self.names[item.as_index()]
    }

    /// Maps names to a sorted item vector, or None if any name is unknown.
    pub fn to_id_vec<S: AsRef<str>>(&self, items: &[S]) -> Option<Vec<Item>> {
        let mut ids = items
            .iter()
            .map(|s| self.id_of(s.as_ref()))
            .collect::<Option<Vec<Item>>>()?;
        ids.sort();
        ids.dedup();
        Some(ids)
    }

    pub fn item_vec_to_string(&self, items: &[Item]) -> String {
        items
            .iter()
            .map(|&item| self.str_of(item))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}
