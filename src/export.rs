// src/export.rs
//
// Optional dump of the extracted items, separate from the history files.
// JSON mirrors the in-memory items; CSV is day,name,scraped_at with
// RFC 4180 quoting.

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OutputFormat;
use crate::model::MenuItem;

/// Write `items` to `<stem>.json` or `<stem>.csv`; returns the final path.
pub fn save_data(
    items: &[MenuItem],
    format: OutputFormat,
    stem: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = match format {
        OutputFormat::Json => stem.with_extension("json"),
        OutputFormat::Csv => stem.with_extension("csv"),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    match format {
        OutputFormat::Json => {
            fs::write(&path, serde_json::to_string_pretty(items)?)?;
        }
        OutputFormat::Csv => {
            let mut out = Vec::new();
            write_row(&mut out, &["day", "name", "scraped_at"])?;
            for item in items {
                write_row(
                    &mut out,
                    &[&item.day, &item.name, &item.scraped_at.to_rfc3339()],
                )?;
            }
            fs::write(&path, out)?;
        }
    }

    Ok(path)
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(mut w: W, row: &[&str]) -> std::io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn item(day: &str, name: &str) -> MenuItem {
        MenuItem { day: day.into(), name: name.into(), scraped_at: Local::now() }
    }

    fn tmp_stem(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("lunch_export_{name}"));
        let _ = fs::remove_dir_all(&p);
        fs::create_dir_all(&p).unwrap();
        p.push("menu_data");
        p
    }

    #[test]
    fn csv_quotes_commas() {
        let items = vec![item("MÅNDAG 24/11", "Pannbiff med lök, gräddsås och potatis")];
        let path = save_data(&items, OutputFormat::Csv, &tmp_stem("csv")).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("day,name,scraped_at\n"));
        assert!(text.contains("\"Pannbiff med lök, gräddsås och potatis\""));
    }

    #[test]
    fn json_round_trips_items() {
        let items = vec![item("TISDAG 25/11", "Stekt fisk med remouladsås")];
        let path = save_data(&items, OutputFormat::Json, &tmp_stem("json")).unwrap();
        let loaded: Vec<MenuItem> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, items);
    }
}
