use anyhow::{Context, Result};
use chrono::NaiveDate;
use festivals_core::io::{load_from_path, LoadPolicy};
use festivals_core::{Agenda, Month};
use std::collections::HashSet;

use crate::config::Config;

/// Load the records file named by the configuration.
pub fn load_agenda(config: &Config) -> Result<Agenda> {
    let policy = if config.strict {
        LoadPolicy::Abort
    } else {
        LoadPolicy::Skip
    };

    log::debug!("Using records file {}", config.data_path.display());
    let report = load_from_path(&config.data_path, policy).with_context(|| {
        format!(
            "Failed to load festivals from {}",
            config.data_path.display()
        )
    })?;

    if !report.skipped.is_empty() {
        eprintln!(
            "⚠ Skipped {} malformed line(s); rerun with --strict to stop at the first one",
            report.skipped.len()
        );
    }

    Ok(report.agenda)
}

pub fn show_agenda(agenda: &Agenda, today: NaiveDate, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(agenda).context("Failed to serialize agenda")?
        );
    } else {
        print!("{}", agenda.display(today));
    }
    Ok(())
}

pub fn count_months(agenda: &Agenda, months: &[Month]) {
    println!("Months and number of festivals\n");
    for line in count_lines(agenda, months) {
        println!("  {line}");
    }
}

fn count_lines(agenda: &Agenda, months: &[Month]) -> Vec<String> {
    months
        .iter()
        .map(|&month| match agenda.count_in_month(month) {
            Some(count) => format!("{month}: {count}"),
            None => format!("{month}: no festivals scheduled"),
        })
        .collect()
}

pub fn show_styles(agenda: &Agenda, json: bool) -> Result<()> {
    let by_style = agenda.group_by_style();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&by_style).context("Failed to serialize styles")?
        );
        return Ok(());
    }

    println!("Festival names grouped by style\n");
    for (style, names) in &by_style {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        println!("{} - [{}]", style, names.join(", "));
    }
    Ok(())
}

/// Cancel in memory and print what is left.
pub fn cancel_festivals(mut agenda: Agenda, venues: &[String], month: Month, today: NaiveDate) {
    let venue_set: HashSet<&str> = venues.iter().map(String::as_str).collect();
    println!("{:?} cancel their festivals in {}\n", venues, month);

    match agenda.cancel(&venue_set, month, today) {
        Some(removed) => println!("Cancelled {removed} festival/s"),
        None => println!("No festivals scheduled in {month}"),
    }

    println!("After cancelling ....");
    print!("{}", agenda.display(today));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_for(file: &NamedTempFile, strict: bool) -> Config {
        Config::default().with_overrides(Some(file.path().to_path_buf()), strict)
    }

    fn records(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_agenda_skips_by_default() {
        let file = records(&[
            "bbk live:bilbao:08-06-2022:4:rock",
            "broken line",
            "mad cool:madrid:06-07-2022:4:indie:pop",
        ]);

        let agenda = load_agenda(&config_for(&file, false)).unwrap();
        assert_eq!(agenda.len(), 2);
    }

    #[test]
    fn test_load_agenda_strict_fails() {
        let file = records(&["bbk live:bilbao:08-06-2022:4:rock", "broken line"]);

        let err = load_agenda(&config_for(&file, true)).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_count_lines() {
        let file = records(&["bbk live:bilbao:08-06-2022:4:rock"]);
        let agenda = load_agenda(&config_for(&file, false)).unwrap();

        let lines = count_lines(&agenda, &[Month::June, Month::December]);
        assert_eq!(
            lines,
            vec!["JUNE: 1", "DECEMBER: no festivals scheduled"]
        );
    }
}
