//! Parses a small sample module and prints every extracted chunk.
//!
//! Run with: `cargo run --example parse_demo`

use py_chunker::Chunker;

const SAMPLE: &str = "\
import os
import sys
import pandas as pd
from typing import List

class DataProcessor:
    \"\"\"Loads tabular data from disk.\"\"\"

    def __init__(self, path: str):
        self.path = path

    def load_data(self):
        if not os.path.exists(self.path):
            raise FileNotFoundError(self.path)
        return pd.read_csv(self.path)

def helper_function():
    print(sys.version)
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut chunker = Chunker::with_defaults()?;
    let result = chunker.parse(SAMPLE)?;

    println!("Found {} chunks.", result.chunks.len());
    println!("{}", "-".repeat(40));

    for chunk in &result.chunks {
        println!("{}", serde_json::to_string(&chunk.metadata)?);
        println!("{}", chunk.text);
        println!();
    }

    println!("File imports: {:?}", result.file_imports);
    Ok(())
}
