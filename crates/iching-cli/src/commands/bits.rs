use colored::Colorize;

use iching_core::Bits;

pub fn run(input: &str) -> Result<(), String> {
    let bits = Bits::parse(input).map_err(|e| format!("invalid bits \"{input}\": {e}"))?;
    let hexagram = bits.hexagram();

    println!("  {}  {}", bits.to_string().bold(), hexagram.info());
    println!(
        "  lower: {}  upper: {}",
        bits.lower_trigram(),
        bits.upper_trigram()
    );

    let nuclear = bits.nuclear();
    let complementary = bits.complementary();
    println!(
        "  {} {nuclear}  {}",
        "nuclear:      ".dimmed(),
        super::hexagram_label(nuclear.hexagram())
    );
    println!(
        "  {} {complementary}  {}",
        "complementary:".dimmed(),
        super::hexagram_label(complementary.hexagram())
    );
    Ok(())
}
