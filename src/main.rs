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

mod command_line_args;

use basket::{derive_rules_with_min_lift, encode, mine_with_max_len, write_itemsets, write_rules};
use basket::{Dataset, Result};
use command_line_args::{parse_args_or_exit, Arguments};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Tables go to a file when a path is given, stdout otherwise.
fn open_output(path: &Option<String>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

fn mine_apriori(args: &Arguments) -> Result<()> {
    let config = args.config();
    config.validate()?;

    info!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();
    let timer = Instant::now();
    let dataset = Dataset::read_file(&args.input_file_path, args.has_header)?;
    let (matrix, items) = encode(&dataset)?;
    info!(
        "Encoded {} transactions over {} items in {:.3} seconds.",
        matrix.num_transactions(),
        items.len(),
        timer.elapsed().as_secs_f64()
    );

    let timer = Instant::now();
    let frequent = mine_with_max_len(&matrix, &items, config.min_support, config.max_len)?;
    info!(
        "Apriori generated {} frequent itemsets in {:.3} seconds.",
        frequent.len(),
        timer.elapsed().as_secs_f64()
    );

    let timer = Instant::now();
    let rules = derive_rules_with_min_lift(&frequent, config.min_confidence, config.min_lift)?;
    info!(
        "Generated {} rules in {:.3} seconds.",
        rules.len(),
        timer.elapsed().as_secs_f64()
    );

    {
        let mut output = open_output(&args.output_itemsets_path)?;
        write_itemsets(&mut output, &frequent, &items)?;
        if args.output_itemsets_path.is_none() && args.output_rules_path.is_none() {
            writeln!(output)?;
        }
        output.flush()?;
    }
    {
        let mut output = open_output(&args.output_rules_path)?;
        write_rules(&mut output, &rules, &items)?;
        output.flush()?;
    }

    info!("Total runtime: {:.3} seconds", start.elapsed().as_secs_f64());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
