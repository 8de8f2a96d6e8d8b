pub mod bits;
pub mod cast;
pub mod prompt;
pub mod resolve;
pub mod show;
pub mod table;

use clap::ValueEnum;
use colored::Colorize;

use iching_core::{Hexagram, LineValue};
use iching_reading::{Reading, ReadingConfig, TextCorpus};

/// How a reading is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Colored terminal output.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Markdown document.
    Markdown,
}

/// Load the configured corpus, reporting errors as strings.
fn load_corpus(config: &ReadingConfig) -> Result<Option<TextCorpus>, String> {
    config.load_corpus().map_err(|e| e.to_string())
}

/// Print a reading in the requested format.
fn emit(reading: &Reading, corpus: Option<&TextCorpus>, format: Format) -> Result<(), String> {
    match format {
        Format::Text => print_reading(reading, corpus),
        Format::Json => {
            let json = serde_json::to_string_pretty(reading)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        Format::Markdown => print!("{}", reading.export_markdown(corpus)),
    }
    Ok(())
}

fn line_glyph(line: LineValue) -> &'static str {
    if line.is_yang() {
        "━━━━━━━━━"
    } else {
        "━━━━ ━━━━"
    }
}

fn hexagram_label(hexagram: Hexagram) -> String {
    let info = hexagram.info();
    format!("{:>2}. {} {}", info.number, info.name, info.hanzi)
}

fn print_reading(reading: &Reading, corpus: Option<&TextCorpus>) {
    if let Some(question) = &reading.question {
        println!("  {} {question}", "Question:".bold());
        println!();
    }

    for (i, line) in reading.lines.iter().enumerate().rev() {
        let coins = reading
            .tosses
            .as_ref()
            .map(|t| {
                let faces: Vec<String> = t[i].coins.iter().map(|c| c.to_string()).collect();
                format!("({})", faces.join(" "))
            })
            .unwrap_or_default();
        let row = format!("{}  {}  {}", i + 1, line_glyph(line), line);
        if line.is_changing() {
            println!("  {}  {} {}", row.yellow(), coins.dimmed(), line.label().yellow());
        } else {
            println!("  {row}  {} {}", coins.dimmed(), line.label().dimmed());
        }
    }
    println!();

    for (role, hexagram) in reading.hexagrams() {
        let (lower, upper) = hexagram.trigrams();
        println!(
            "  {} {}  {}",
            format!("{role:<14}").bold(),
            hexagram_label(hexagram),
            format!("{} over {}", upper.symbol(), lower.symbol()).dimmed()
        );
    }

    let positions: Vec<String> = reading
        .changing_positions()
        .iter()
        .map(|p| p.to_string())
        .collect();
    if positions.is_empty() {
        println!("  {} none", "changing lines:".bold());
    } else {
        println!("  {} {}", "changing lines:".bold(), positions.join(", "));
    }

    println!();
    println!("  {}", reading.primary.info().summary);
    if reading.relation != reading.primary {
        println!(
            "  {} {}",
            "becoming:".dimmed(),
            reading.relation.info().summary
        );
    }

    let Some(text) = corpus.and_then(|c| c.get(reading.primary)) else {
        return;
    };
    println!();
    if !text.judgment.is_empty() {
        println!("  {}", "Judgment".bold().underline());
        println!("  {}", text.judgment);
    }
    if !text.image.is_empty() {
        println!("  {}", "Image".bold().underline());
        println!("  {}", text.image);
    }
    for position in reading.changing_positions() {
        if let Some(line) = text.lines.get(&position) {
            println!("  {} {line}", format!("Line {position}:").bold());
        }
    }
}
