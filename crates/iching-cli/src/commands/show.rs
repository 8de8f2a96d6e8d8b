use colored::Colorize;

use iching_core::Hexagram;
use iching_reading::ReadingConfig;

pub fn run(number: &str, config: &ReadingConfig) -> Result<(), String> {
    let hexagram: Hexagram = number
        .parse()
        .map_err(|e| format!("hexagram not found: \"{number}\" ({e})"))?;
    let corpus = super::load_corpus(config)?;

    let info = hexagram.info();
    println!(
        "  {} {}",
        format!("{}. {}", info.number, info.name).bold(),
        format!("{} ({})", info.hanzi, info.pinyin).dimmed()
    );
    println!("  {}", info.summary.italic());
    println!();
    let (lower, upper) = hexagram.trigrams();
    println!("  upper: {upper}");
    println!("  lower: {lower}");
    println!();

    let bits = hexagram.bits().as_array();
    for (i, bit) in bits.iter().enumerate().rev() {
        let glyph = if *bit == 1 { "━━━━━━━━━" } else { "━━━━ ━━━━" };
        println!("  {}  {glyph}", i + 1);
    }
    println!();

    println!(
        "  nuclear:       {}",
        super::hexagram_label(hexagram.nuclear())
    );
    println!(
        "  complementary: {}",
        super::hexagram_label(hexagram.complementary())
    );

    let Some(corpus) = corpus else {
        return Ok(());
    };
    println!();
    let Some(text) = corpus.get(hexagram) else {
        println!("  {}", "(no text available)".dimmed());
        return Ok(());
    };
    if !text.title.is_empty() {
        println!("  {}", text.title.bold());
    }
    if !text.judgment.is_empty() {
        println!("  {} {}", "Judgment:".bold(), text.judgment);
    }
    if !text.image.is_empty() {
        println!("  {} {}", "Image:".bold(), text.image);
    }
    for (position, line) in &text.lines {
        println!("  {} {line}", format!("Line {position}:").bold());
    }
    Ok(())
}
