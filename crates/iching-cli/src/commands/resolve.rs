use iching_core::Lines;
use iching_reading::{Reading, ReadingConfig};

use super::Format;

pub fn run(lines: &str, config: &ReadingConfig, format: Format) -> Result<(), String> {
    let lines = Lines::parse(lines).map_err(|e| format!("invalid lines \"{lines}\": {e}"))?;
    let corpus = super::load_corpus(config)?;

    let reading = Reading::from_lines(lines, None);
    super::emit(&reading, corpus.as_ref(), format)
}
