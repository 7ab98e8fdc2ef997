use crate::error::Result;
use log::debug;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<()> {
    let path = path.as_ref();
    write_csv_to(std::fs::File::create(path)?, rows)?;
    debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn write_csv_to<T: Serialize, W: Write>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path.as_ref(), s)?;
    debug!("wrote {}", path.as_ref().display());
    Ok(())
}

pub fn render_table<T>(rows: &[T], max_rows: usize) -> Option<String>
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return None;
    }
    Some(Table::new(slice).with(Style::markdown()).to_string())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    match render_table(rows, max_rows) {
        Some(table_str) => {
            println!("{}", table_str);
            if rows.len() > max_rows {
                println!("({} more rows not shown)", rows.len() - max_rows);
            }
            println!();
        }
        None => println!("(no rows)\n"),
    }
}
