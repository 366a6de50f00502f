use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use cipherbreak::cipher::shift::ShiftGuess;
use cipherbreak::search::DecipherResult;

const PLAINTEXT_PREVIEW: usize = 60;

fn preview(text: &str) -> &str {
    if text.len() > PLAINTEXT_PREVIEW {
        &text[..PLAINTEXT_PREVIEW]
    } else {
        text
    }
}

/// Decipher report: one row per attempted key length, ascending.
pub fn print_decipher_report(results: &[DecipherResult]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Key Len").add_attribute(Attribute::Bold),
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Plaintext"),
    ]);

    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in results {
        table.add_row(vec![
            Cell::new(r.key_length),
            Cell::new(&r.key).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", r.score)),
            Cell::new(preview(&r.plaintext)),
        ]);
    }

    println!("\n{}", table);
}

/// Brute-force report for the single-shift cipher, best guess first.
pub fn print_shift_report(guesses: &[ShiftGuess]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Shift").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Plaintext"),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for g in guesses {
        table.add_row(vec![
            Cell::new(g.shift),
            Cell::new(format!("{:.2}", g.score)),
            Cell::new(preview(&g.plaintext)),
        ]);
    }

    println!("\n{}", table);
}
