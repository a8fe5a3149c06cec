//! Interactive spam classifier.
//!
//! Usage:
//!   cargo run --bin spamtree -- --train data/emails/train.csv --test data/emails/test.csv

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use spamtree::prelude::*;
use spamtree::constants::{
    DEFAULT_CONTENT_COLUMN,
    DEFAULT_LABEL_COLUMN,
    DEFAULT_SEED,
};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "spamtree")]
#[command(about = "Train, test and save a word-frequency decision tree")]
struct Args {
    /// CSV file used for training
    #[arg(long, default_value = "data/emails/train.csv")]
    train: PathBuf,

    /// CSV file used for measuring accuracy
    #[arg(long, default_value = "data/emails/test.csv")]
    test: PathBuf,

    /// Index of the column holding the label
    #[arg(long, default_value_t = DEFAULT_LABEL_COLUMN)]
    label_column: usize,

    /// Index of the column holding the message
    #[arg(long, default_value_t = DEFAULT_CONTENT_COLUMN)]
    content_column: usize,

    /// Seed of the shuffle applied to every CSV file
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Print accuracy reports as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn reader<'a>(&self, file: &'a Path) -> DatasetReader<&'a Path> {
        DatasetReader::default()
            .file(file)
            .has_header(true)
            .label_column(self.label_column)
            .content_column(self.content_column)
            .seed(self.seed)
    }
}

/// Line-based access to the console.
struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer is a number in `1..=n_options`.
    fn choice(&mut self, n_options: usize) -> Result<usize> {
        let mut answer = self.prompt("Enter your choice here: ")?;
        loop {
            match answer.parse::<usize>() {
                Ok(choice) if (1..=n_options).contains(&choice) => {
                    return Ok(choice);
                },
                _ => {
                    let message = "Please enter a valid option from above: ";
                    answer = self.prompt(message)?;
                },
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut console = Console { input: stdin.lock() };

    println!(
        "{}",
        "Welcome to the spam classifier! \
        To begin, enter your desired mode of operation:".bold()
    );
    println!();
    let tree = create_model(&args, &mut console)?;

    println!();
    println!("What would you like to do with your model?");
    loop {
        println!();
        println!("1) Test with an input file");
        println!("2) Get testing accuracy");
        println!("3) Save to a file");
        println!("4) Export to a dot file");
        println!("5) Quit");

        match console.choice(5)? {
            1 => {
                let file = console.prompt(
                    "Please enter the file you'd like to test: "
                )?;
                eval_model(&args, &tree, Path::new(&file))?;
            },
            2 => test_model(&args, &tree)?,
            3 => {
                let file = console.prompt(
                    "Please enter the file name you'd like to save to: "
                )?;
                let writer = BufWriter::new(
                    File::create(&file)
                        .with_context(|| format!("cannot create {file}"))?
                );
                tree.save(writer)?;
                println!("{} {file}", "Saved to".green());
            },
            4 => {
                let file = console.prompt(
                    "Please enter the dot file name: "
                )?;
                tree.to_dot_file(&file)?;
                println!("{} {file}", "Exported to".green());
            },
            _ => break,
        }
    }

    Ok(())
}

fn create_model<R: BufRead>(args: &Args, console: &mut Console<R>)
    -> Result<DecisionTree>
{
    println!("1) Train classification model");
    println!("2) Load model from file");

    let tree = if console.choice(2)? == 1 {
        let train = args.reader(&args.train)
            .read()
            .with_context(|| format!("cannot read {}", args.train.display()))?;
        DecisionTree::from_dataset(train)?
    } else {
        let file = console.prompt(
            "Please enter the path to the file you'd like to load: "
        )?;
        let reader = BufReader::new(
            File::open(&file).with_context(|| format!("cannot open {file}"))?
        );
        DecisionTree::load(reader)?
    };

    Ok(tree)
}

/// Prints the predicted label of every document in `file`.
fn eval_model(args: &Args, tree: &DecisionTree, file: &Path) -> Result<()> {
    let dataset = args.reader(file)
        .read()
        .with_context(|| format!("cannot read {}", file.display()))?;
    let results = tree.classify_all(dataset.data());
    println!("{} {results:?}", "Results:".bold());
    Ok(())
}

/// Prints the accuracy of `tree` on the test file.
fn test_model(args: &Args, tree: &DecisionTree) -> Result<()> {
    let dataset = args.reader(&args.test)
        .read()
        .with_context(|| format!("cannot read {}", args.test.display()))?;
    let accuracy = tree.accuracy(dataset.data(), dataset.labels())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&accuracy)?);
        return Ok(());
    }
    for (label, acc) in accuracy.iter() {
        let value = format!("{acc:.4}");
        let value = if acc >= 0.5 { value.green() } else { value.red() };
        println!("{label}: {value}");
    }
    Ok(())
}
