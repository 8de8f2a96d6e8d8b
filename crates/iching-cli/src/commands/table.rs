use comfy_table::{ContentArrangement, Table};

use iching_core::{Hexagram, Trigram};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["lower \\ upper".to_string()];
    header.extend(
        Trigram::ALL
            .iter()
            .map(|t| format!("{} {}", t.symbol(), t.pinyin())),
    );
    table.set_header(header);

    for lower in Trigram::ALL {
        let mut row = vec![format!("{} {}", lower.symbol(), lower.pinyin())];
        row.extend(
            Trigram::ALL
                .iter()
                .map(|&upper| Hexagram::from_trigrams(lower, upper).to_string()),
        );
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
