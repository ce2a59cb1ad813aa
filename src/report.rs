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
use crate::item::Item;
use crate::item_list::ItemList;
use crate::itemset::FrequentItemsets;
use crate::rule::Rule;
use std::borrow::Cow;
use std::io::Write;

pub fn write_itemsets<W: Write>(
    output: &mut W,
    frequent: &FrequentItemsets,
    items: &ItemList,
) -> Result<()> {
    writeln!(output, "support,itemsets")?;
    for itemset in frequent {
        writeln!(
            output,
            "{},{}",
            itemset.support,
            cell(items, &itemset.items)
        )?;
    }
    Ok(())
}

pub fn write_rules<W: Write>(output: &mut W, rules: &[Rule], items: &ItemList) -> Result<()> {
    writeln!(
        output,
        "antecedents,consequents,antecedent support,consequent support,\
         support,confidence,lift,leverage,conviction"
    )?;
    for rule in rules {
        writeln!(
            output,
            "{},{},{},{},{},{},{},{},{}",
            cell(items, &rule.antecedent),
            cell(items, &rule.consequent),
            rule.antecedent_support,
            rule.consequent_support,
            rule.support,
            rule.confidence,
            rule.lift,
            rule.leverage,
            rule.conviction
        )?;
    }
    Ok(())
}

// Items joined by spaces, quoted if a name would break the CSV row.
fn cell(items: &ItemList, itemset: &[Item]) -> String {
    quote(&items.item_vec_to_string(itemset)).into_owned()
}

fn quote(s: &str) -> Cow<str> {
    if s.contains(|c: char| c == ',' || c == '"' || c == '\n') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}
