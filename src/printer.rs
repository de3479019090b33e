use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::slot::Slot;

/// Spaces between two columns of a table.
const COLUMN_PADDING: usize = 4;

/// Writes rows as aligned columns. Every column except the last one is
/// padded to its widest cell plus `COLUMN_PADDING`.
pub fn write_table<W: Write>(out: &mut W, rows: &[Vec<String>]) -> io::Result<()> {
    let num_columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut widths = vec![0; num_columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.as_str().width());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if i + 1 < row.len() {
                let pad = widths[i] + COLUMN_PADDING - cell.as_str().width();
                line.extend(std::iter::repeat(' ').take(pad));
            }
        }
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

pub fn write_status<W: Write>(out: &mut W, slots: &[&Slot]) -> io::Result<()> {
    let mut rows = vec![vec![
        "Slot No.".to_owned(),
        "Registration No".to_owned(),
        "Colour".to_owned(),
    ]];

    for slot in slots {
        if let Some(vehicle) = slot.vehicle() {
            rows.push(vec![
                slot.slot_number().to_string(),
                vehicle.registration_number().to_owned(),
                vehicle.color().to_owned(),
            ]);
        }
    }

    write_table(out, &rows)
}

/// Writes `1, 2, 4`. Writes nothing for an empty slice.
pub fn write_numbers<W: Write>(out: &mut W, numbers: &[usize]) -> io::Result<()> {
    if numbers.is_empty() {
        return Ok(());
    }

    let strs: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    writeln!(out, "{}", strs.join(", "))
}

pub fn write_strings<W: Write>(out: &mut W, strs: &[&str]) -> io::Result<()> {
    if strs.is_empty() {
        return Ok(());
    }

    writeln!(out, "{}", strs.join(", "))
}
