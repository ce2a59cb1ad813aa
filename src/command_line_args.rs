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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use basket::AnalysisConfig;

pub struct Arguments {
    pub input_file_path: String,
    pub has_header: bool,
    pub output_itemsets_path: Option<String>,
    pub output_rules_path: Option<String>,
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
    pub max_len: Option<usize>,
}

impl Arguments {
    pub fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            min_support: self.min_support,
            min_confidence: self.min_confidence,
            min_lift: self.min_lift,
            max_len: self.max_len,
        }
    }
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        has_header: false,
        output_itemsets_path: None,
        output_rules_path: None,
        min_support: 0.0,
        min_confidence: 0.0,
        min_lift: None,
        max_len: None,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Market basket analysis with Apriori.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset, one transaction per line, items separated by commas.",
            )
            .metavar("file_path")
            .required();

        parser.refer(&mut args.has_header).add_option(
            &["--header"],
            StoreTrue,
            "Skip the first line of the input dataset.",
        );

        parser
            .refer(&mut args.output_itemsets_path)
            .add_option(
                &["--output-itemsets"],
                StoreOption,
                "File path in which to store frequent itemsets. \
                 Format: support, itemset. Defaults to stdout.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output-rules"],
                StoreOption,
                "File path in which to store rules. Format: antecedent, consequent, \
                 antecedent support, consequent support, support, confidence, lift, \
                 leverage, conviction. Defaults to stdout.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in range [0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1].",
            )
            .metavar("threshold")
            .required();

        parser
            .refer(&mut args.min_lift)
            .add_option(
                &["--min-lift"],
                StoreOption,
                "Minimum rule lift threshold, in range [0,∞].",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.max_len)
            .add_option(
                &["--max-len"],
                StoreOption,
                "Maximum number of items in a frequent itemset.",
            )
            .metavar("length");

        if env::args().count() == 1 {
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    args
}
