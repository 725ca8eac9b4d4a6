//! Build script to generate the embedded vocabulary
//!
//! Reads the tab-separated vocabulary file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_vocabulary(
        "data/vocabulary.tsv",
        &Path::new(&out_dir).join("vocabulary.rs"),
        "VOCABULARY",
        "Built-in vocabulary as (word, meaning) pairs",
    );

    println!("cargo:rerun-if-changed=data/vocabulary.tsv");
}

fn generate_vocabulary(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let pairs: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((word, meaning)) => (word.trim(), meaning.trim()),
            None => (line, ""),
        })
        .collect();
    let count = pairs.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated vocabulary").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, meaning) in pairs {
        writeln!(output, "    ({word:?}, {meaning:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
