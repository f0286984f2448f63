//! The month-keyed festival index.
//!
//! An [`Agenda`] owns every festival it holds, grouped by the month each
//! one starts in. Only months with at least one festival have an entry,
//! months iterate in calendar order, and each month's festivals stay
//! sorted by name.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use festivals_core::{Agenda, Festival, Month, Style};
//!
//! let mut agenda = Agenda::new();
//! let start = NaiveDate::from_ymd_opt(2022, 2, 28).unwrap();
//! agenda.add(Festival::new("gazpatxo rock", "valencia", start, 1, [Style::Rock]).unwrap());
//!
//! assert_eq!(agenda.count_in_month(Month::February), Some(1));
//! assert_eq!(agenda.count_in_month(Month::December), None);
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{btree_map, BTreeMap, BTreeSet, HashSet};
use std::fmt;

use crate::model::Festival;
use crate::taxonomy::{Month, Style};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Agenda {
    months: BTreeMap<Month, Vec<Festival>>,
}

impl Agenda {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a festival under the month it starts in.
    ///
    /// It goes in front of the first festival whose name sorts after its
    /// own, so festivals sharing a name keep the order they were added in.
    /// Duplicates are kept.
    pub fn add(&mut self, festival: Festival) {
        let festivals = self.months.entry(festival.month()).or_default();
        let pos = festivals.partition_point(|f| f.name() <= festival.name());
        log::debug!(
            "Adding '{}' to {} at position {}",
            festival.name(),
            festival.month(),
            pos
        );
        festivals.insert(pos, festival);
    }

    /// Number of festivals scheduled in `month`, or `None` if the month has
    /// no entry. A present month always holds at least one festival.
    #[must_use]
    pub fn count_in_month(&self, month: Month) -> Option<usize> {
        self.months.get(&month).map(Vec::len)
    }

    /// Festival names grouped by style.
    ///
    /// Each style that appears in the agenda maps to the sorted set of names
    /// of the festivals tagged with it.
    #[must_use]
    pub fn group_by_style(&self) -> BTreeMap<Style, BTreeSet<String>> {
        let mut by_style: BTreeMap<Style, BTreeSet<String>> = BTreeMap::new();
        for festival in self.iter() {
            for &style in festival.styles() {
                by_style
                    .entry(style)
                    .or_default()
                    .insert(festival.name().to_string());
            }
        }
        by_style
    }

    /// Cancel the festivals held at any of `venues` during `month`.
    ///
    /// Only festivals ongoing on `today` are removed; ones that have
    /// concluded or not started yet stay. Venues match case-insensitively.
    /// Returns the number removed, or `None` if `month` has no entry. A month
    /// left empty is dropped from the agenda.
    pub fn cancel<S: AsRef<str>>(
        &mut self,
        venues: &HashSet<S>,
        month: Month,
        today: NaiveDate,
    ) -> Option<usize> {
        let venues: HashSet<String> = venues
            .iter()
            .map(|venue| venue.as_ref().trim().to_uppercase())
            .collect();

        let festivals = self.months.get_mut(&month)?;
        let before = festivals.len();
        festivals.retain(|f| {
            let cancelled = venues.contains(f.venue()) && f.is_ongoing(today);
            if cancelled {
                log::debug!("Cancelling '{}' at {}", f.name(), f.venue());
            }
            !cancelled
        });
        let removed = before - festivals.len();

        if festivals.is_empty() {
            self.months.remove(&month);
        }

        Some(removed)
    }

    /// Festivals scheduled in `month`, sorted by name.
    #[must_use]
    pub fn festivals_in(&self, month: Month) -> Option<&[Festival]> {
        self.months.get(&month).map(Vec::as_slice)
    }

    /// Months with at least one festival, in calendar order.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.months.keys().copied()
    }

    /// Every festival, month by month, in stored order.
    pub fn iter(&self) -> Iter<'_> {
        self.months.values().flatten()
    }

    /// Total number of festivals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Render the agenda as of `today`.
    #[must_use]
    pub const fn display(&self, today: NaiveDate) -> AgendaDisplay<'_> {
        AgendaDisplay {
            agenda: self,
            today,
        }
    }
}

impl Extend<Festival> for Agenda {
    fn extend<I: IntoIterator<Item = Festival>>(&mut self, iter: I) {
        for festival in iter {
            self.add(festival);
        }
    }
}

impl FromIterator<Festival> for Agenda {
    fn from_iter<I: IntoIterator<Item = Festival>>(iter: I) -> Self {
        let mut agenda = Self::new();
        agenda.extend(iter);
        agenda
    }
}

/// Iterator over every festival in an [`Agenda`].
pub type Iter<'a> = std::iter::Flatten<btree_map::Values<'a, Month, Vec<Festival>>>;

impl<'a> IntoIterator for &'a Agenda {
    type Item = &'a Festival;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Helper returned by [`Agenda::display`].
#[derive(Debug, Clone, Copy)]
pub struct AgendaDisplay<'a> {
    agenda: &'a Agenda,
    today: NaiveDate,
}

impl fmt::Display for AgendaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nFestivals")?;
        for (month, festivals) in &self.agenda.months {
            writeln!(f, "\n{}  ({} festival/s)", month, festivals.len())?;
            for festival in festivals {
                writeln!(f, "{}", festival.display(self.today))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn festival(name: &str, venue: &str, start: NaiveDate, duration: u32) -> Festival {
        Festival::new(name, venue, start, duration, [Style::Rock]).unwrap()
    }

    fn names(agenda: &Agenda, month: Month) -> Vec<&str> {
        agenda
            .festivals_in(month)
            .unwrap_or_default()
            .iter()
            .map(Festival::name)
            .collect()
    }

    #[test]
    fn test_new_agenda_is_empty() {
        let agenda = Agenda::new();
        assert!(agenda.is_empty());
        assert_eq!(agenda.len(), 0);
        assert_eq!(agenda.months().count(), 0);
    }

    #[test]
    fn test_add_keeps_month_sorted_by_name() {
        let mut agenda = Agenda::new();
        agenda.add(festival("gazpatxo rock", "valencia", date(2022, 2, 28), 1));
        agenda.add(festival("arenal sound", "burriana", date(2022, 2, 10), 1));
        agenda.add(festival("black sound fest", "badajoz", date(2022, 2, 5), 21));

        assert_eq!(
            names(&agenda, Month::February),
            vec!["Arenal Sound", "Black Sound Fest", "Gazpatxo Rock"]
        );
        assert_eq!(agenda.count_in_month(Month::February), Some(3));
    }

    #[test]
    fn test_add_equal_names_keep_insertion_order() {
        let mut agenda = Agenda::new();
        agenda.add(festival("fest", "first", date(2022, 5, 1), 1));
        agenda.add(festival("zz", "other", date(2022, 5, 2), 1));
        agenda.add(festival("fest", "second", date(2022, 5, 3), 1));

        let venues: Vec<&str> = agenda
            .festivals_in(Month::May)
            .unwrap()
            .iter()
            .map(Festival::venue)
            .collect();
        assert_eq!(venues, vec!["FIRST", "SECOND", "OTHER"]);
    }

    #[test]
    fn test_months_in_calendar_order() {
        let mut agenda = Agenda::new();
        agenda.add(festival("a", "x", date(2022, 10, 1), 1));
        agenda.add(festival("b", "x", date(2022, 1, 1), 1));
        agenda.add(festival("c", "x", date(2022, 6, 1), 1));

        let months: Vec<Month> = agenda.months().collect();
        assert_eq!(months, vec![Month::January, Month::June, Month::October]);
    }

    #[test]
    fn test_count_in_absent_month() {
        let mut agenda = Agenda::new();
        agenda.add(festival("a", "x", date(2022, 3, 1), 1));
        assert_eq!(agenda.count_in_month(Month::December), None);
    }

    #[test]
    fn test_group_by_style() {
        let mut agenda = Agenda::new();
        agenda.add(festival("z fest", "x", date(2022, 3, 1), 1));
        agenda.add(festival("a fest", "y", date(2022, 3, 2), 1));
        agenda.add(
            Festival::new("a fest", "z", date(2022, 7, 1), 1, [Style::Rock, Style::Pop]).unwrap(),
        );

        let grouped = agenda.group_by_style();
        let styles: Vec<Style> = grouped.keys().copied().collect();
        assert_eq!(styles, vec![Style::Pop, Style::Rock]);

        let rock: Vec<&str> = grouped[&Style::Rock].iter().map(String::as_str).collect();
        assert_eq!(rock, vec!["A Fest", "Z Fest"]);
        assert_eq!(grouped[&Style::Pop].len(), 1);
    }

    #[test]
    fn test_cancel_removes_only_ongoing() {
        let mut agenda = Agenda::new();
        agenda.add(festival("bbk live", "bilbao", date(2022, 6, 10), 3));
        agenda.add(festival("old fest", "bilbao", date(2022, 6, 1), 2));
        agenda.add(festival("later fest", "bilbao", date(2022, 6, 25), 2));
        agenda.add(festival("azkena", "vitoria", date(2022, 6, 11), 2));

        let venues = HashSet::from(["bilbao"]);
        let removed = agenda.cancel(&venues, Month::June, date(2022, 6, 11));

        assert_eq!(removed, Some(1));
        assert_eq!(
            names(&agenda, Month::June),
            vec!["Azkena", "Later Fest", "Old Fest"]
        );
    }

    #[test]
    fn test_cancel_prunes_empty_month() {
        let mut agenda = Agenda::new();
        agenda.add(festival("bbk live", "bilbao", date(2022, 6, 10), 3));

        let venues = HashSet::from(["BILBAO".to_string()]);
        assert_eq!(agenda.cancel(&venues, Month::June, date(2022, 6, 10)), Some(1));
        assert_eq!(agenda.count_in_month(Month::June), None);
        assert!(agenda.is_empty());
        assert_eq!(agenda.cancel(&venues, Month::June, date(2022, 6, 10)), None);
    }

    #[test]
    fn test_cancel_only_touches_given_month() {
        let mut agenda = Agenda::new();
        agenda.add(festival("june fest", "bilbao", date(2022, 6, 30), 3));

        // Still ongoing on 1 July, but listed under June.
        let venues = HashSet::from(["bilbao"]);
        assert_eq!(agenda.cancel(&venues, Month::July, date(2022, 7, 1)), None);
        assert_eq!(agenda.count_in_month(Month::June), Some(1));
    }

    #[test]
    fn test_from_iterator() {
        let agenda: Agenda = vec![
            festival("b", "x", date(2022, 4, 1), 1),
            festival("a", "x", date(2022, 4, 2), 1),
            festival("c", "x", date(2022, 9, 2), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(agenda.len(), 3);
        assert_eq!(names(&agenda, Month::April), vec!["A", "B"]);
        assert_eq!(agenda.iter().count(), 3);
    }

    #[test]
    fn test_json_shape() {
        let mut agenda = Agenda::new();
        agenda.add(festival("zz fest", "x", date(2022, 10, 1), 1));
        agenda.add(festival("bbk live", "bilbao", date(2022, 6, 10), 3));
        agenda.add(festival("azkena", "vitoria", date(2022, 6, 17), 2));
        agenda.add(
            Festival::new("primavera", "barcelona", date(2022, 2, 2), 3, [Style::Pop, Style::HipHop])
                .unwrap(),
        );

        let json = serde_json::to_string(&agenda).unwrap();
        let feb = json.find("\"FEBRUARY\"").unwrap();
        let jun = json.find("\"JUNE\"").unwrap();
        let oct = json.find("\"OCTOBER\"").unwrap();
        assert!(feb < jun && jun < oct);

        let value = serde_json::to_value(&agenda).unwrap();
        let june = value["JUNE"].as_array().unwrap();
        let names: Vec<&str> = june.iter().map(|f| f["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Azkena", "Bbk Live"]);
        assert_eq!(june[1]["venue"], "BILBAO");
        assert_eq!(june[1]["start"], "2022-06-10");
        assert_eq!(june[1]["end"], "2022-06-13");
        assert_eq!(june[1]["duration"], 3);
        assert_eq!(value["FEBRUARY"][0]["styles"], serde_json::json!(["HIPHOP", "POP"]));

        let styles = serde_json::to_string(&agenda.group_by_style()).unwrap();
        assert_eq!(
            styles,
            r#"{"HIPHOP":["Primavera"],"POP":["Primavera"],"ROCK":["Azkena","Bbk Live","Zz Fest"]}"#
        );
    }

    #[test]
    fn test_display() {
        let mut agenda = Agenda::new();
        agenda.add(festival("gazpatxo rock", "valencia", date(2022, 2, 28), 1));
        agenda.add(festival("primavera", "barcelona", date(2022, 6, 2), 3));

        let rendered = agenda.display(date(2022, 1, 1)).to_string();
        let feb = rendered.find("FEBRUARY  (1 festival/s)").unwrap();
        let jun = rendered.find("JUNE  (1 festival/s)").unwrap();
        assert!(feb < jun);
        assert!(rendered.starts_with("\nFestivals\n"));
        assert!(rendered.contains("Gazpatxo Rock"));
        assert!(rendered.contains("02 Jun. - 05 Jun. 2022 (152 days remaining)"));
    }
}
