//! Build script to generate embedded word lists
//!
//! Reads one word list file per difficulty level and generates Rust source
//! code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LEVELS: [(&str, &str, &str); 4] = [
    ("data/easy.txt", "EASY", "Easy level words (short, common)"),
    ("data/medium.txt", "MEDIUM", "Medium level words"),
    ("data/hard.txt", "HARD", "Hard level words (long or rare letters)"),
    ("data/unix.txt", "UNIX", "Unix level words (commands, jargon and obscure words)"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("levels.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for (input_path, const_name, doc_comment) in LEVELS {
        generate_word_list(&mut output, input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
