//! Reading export as markdown or plain text.

use iching_core::{Hexagram, LineValue};

use crate::corpus::TextCorpus;
use crate::reading::Reading;

const YANG: &str = "━━━━━━━━━";
const YIN: &str = "━━━━ ━━━━";

fn glyph(line: LineValue) -> &'static str {
    if line.is_yang() { YANG } else { YIN }
}

/// The lines drawn top to bottom, one per row, changing lines marked with
/// the value they settle into.
fn draw_lines(reading: &Reading) -> Vec<String> {
    let settled = reading.relation_lines();
    reading
        .lines
        .iter()
        .enumerate()
        .rev()
        .map(|(i, line)| {
            let mark = if line.is_changing() {
                format!("  changing to {}", settled.values()[i])
            } else {
                String::new()
            };
            format!("{}  {}  {}{mark}", i + 1, glyph(line), line)
        })
        .collect()
}

/// Short readings of the primary and, when it differs, the relation.
fn summaries(reading: &Reading) -> Vec<(&'static str, &'static str)> {
    let mut out = vec![("primary", reading.primary.info().summary)];
    if reading.relation != reading.primary {
        out.push(("relation", reading.relation.info().summary));
    }
    out
}

fn describe(hexagram: Hexagram) -> String {
    let (lower, upper) = hexagram.trigrams();
    format!("{}, {upper} over {lower}", hexagram.info())
}

fn changing_label(reading: &Reading) -> String {
    if reading.has_changes() {
        let positions: Vec<String> = reading
            .changing_positions()
            .iter()
            .map(|p| p.to_string())
            .collect();
        positions.join(", ")
    } else {
        "none".to_string()
    }
}

impl Reading {
    /// Export the reading as markdown, with corpus texts when available.
    pub fn export_markdown(&self, corpus: Option<&TextCorpus>) -> String {
        let mut out = String::from("# I Ching Reading\n\n");
        if let Some(question) = &self.question {
            out.push_str(&format!("**Question**: {question}\n\n"));
        }
        out.push_str(&format!(
            "*Cast at {}*\n\n",
            self.cast_at.format("%Y-%m-%d %H:%M UTC")
        ));

        out.push_str("## Lines\n\n```text\n");
        for row in draw_lines(self) {
            out.push_str(&row);
            out.push('\n');
        }
        out.push_str("```\n\n");

        out.push_str("## Hexagrams\n\n");
        for (role, hexagram) in self.hexagrams() {
            out.push_str(&format!("- **{role}**: {}\n", describe(hexagram)));
        }
        out.push_str(&format!("\n**Changing lines**: {}\n", changing_label(self)));

        out.push_str("\n## Summary\n\n");
        for (role, summary) in summaries(self) {
            out.push_str(&format!("- **{role}**: {summary}\n"));
        }

        let Some(text) = corpus.and_then(|c| c.get(self.primary)) else {
            return out;
        };
        out.push_str(&format!("\n## {}\n\n", self.primary.info().name));
        if !text.judgment.is_empty() {
            out.push_str(&format!("**Judgment**: {}\n\n", text.judgment));
        }
        if !text.image.is_empty() {
            out.push_str(&format!("**Image**: {}\n\n", text.image));
        }
        for position in self.changing_positions() {
            if let Some(line) = text.lines.get(&position) {
                out.push_str(&format!("**Line {position}**: {line}\n\n"));
            }
        }
        out
    }

    /// Export the reading as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        if let Some(question) = &self.question {
            out.push_str(&format!("Question: {question}\n\n"));
        }
        for row in draw_lines(self) {
            out.push_str(&format!("  {row}\n"));
        }
        out.push('\n');
        for (role, hexagram) in self.hexagrams() {
            out.push_str(&format!("{role:<14} {}\n", describe(hexagram)));
        }
        out.push_str(&format!("changing lines: {}\n", changing_label(self)));
        out.push('\n');
        for (role, summary) in summaries(self) {
            out.push_str(&format!("{role:<14} {summary}\n"));
        }
        out
    }
}
