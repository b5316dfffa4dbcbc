// src/table.rs
//
// The table container: raw scraped rows in, normalised + sorted rows out.
//
// - RawFilmRow: exactly what came off the page (year still text).
// - FilmRow: title + year coerced to `Option<i32>`; never holds unparsed text.
// - FilmographyTable: ordered FilmRows. Built once, sorted, then handed over.

use std::cmp::Ordering;
use std::fmt;

use crate::config::consts::MISSING_YEAR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFilmRow {
    pub title: String,
    pub year_text: String,
}

impl RawFilmRow {
    pub fn new(title: impl Into<String>, year_text: impl Into<String>) -> Self {
        Self { title: title.into(), year_text: year_text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilmRow {
    pub title: String,
    pub year: Option<i32>,
}

impl FilmRow {
    pub fn new(title: impl Into<String>, year: Option<i32>) -> Self {
        Self { title: title.into(), year }
    }
}

impl From<RawFilmRow> for FilmRow {
    fn from(raw: RawFilmRow) -> Self {
        let year = parse_year(&raw.year_text);
        FilmRow { title: raw.title, year }
    }
}

/// Numeric coercion for a year cell. Anything that isn't a number becomes
/// `None`; the row itself is kept.
///
/// Integral float text ("1994.0", "1.994e3") counts as numeric.
pub fn parse_year(text: &str) -> Option<i32> {
    let t = text.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(y) = t.parse::<i32>() {
        return Some(y);
    }
    let f = t.parse::<f64>().ok()?;
    let in_range = f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX);
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i32)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NullPlacement {
    First,
    #[default]
    Last,
}

/// Year comparison with explicit direction and placement of missing years.
pub fn compare_years(a: Option<i32>, b: Option<i32>, order: SortOrder, nulls: NullPlacement) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match order {
            SortOrder::Ascending => x.cmp(&y),
            SortOrder::Descending => y.cmp(&x),
        },
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match nulls {
            NullPlacement::First => Ordering::Less,
            NullPlacement::Last => Ordering::Greater,
        },
        (Some(_), None) => match nulls {
            NullPlacement::First => Ordering::Greater,
            NullPlacement::Last => Ordering::Less,
        },
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilmographyTable {
    rows: Vec<FilmRow>,
}

impl FilmographyTable {
    pub const HEADERS: [&'static str; 2] = ["Title", "Year"];

    /// Normalise every row, then order newest first with missing years last.
    pub fn from_raw(raw: Vec<RawFilmRow>) -> Self {
        let rows = raw.into_iter().map(FilmRow::from).collect();
        Self { rows }.sorted_by_year(SortOrder::Descending, NullPlacement::Last)
    }

    /// Rows in the given order, unsorted.
    pub fn from_rows(rows: Vec<FilmRow>) -> Self {
        Self { rows }
    }

    /// Stable: rows with equal years keep their relative order.
    pub fn sorted_by_year(mut self, order: SortOrder, nulls: NullPlacement) -> Self {
        self.rows.sort_by(|a, b| compare_years(a.year, b.year, order, nulls));
        self
    }

    pub fn rows(&self) -> &[FilmRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, FilmRow> { self.rows.iter() }

    /// String cells for export. Missing years are empty cells.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| vec![r.title.clone(), r.year.map(|y| y.to_string()).unwrap_or_default()])
            .collect()
    }
}

impl<'a> IntoIterator for &'a FilmographyTable {
    type Item = &'a FilmRow;
    type IntoIter = std::slice::Iter<'a, FilmRow>;
    fn into_iter(self) -> Self::IntoIter { self.rows.iter() }
}

impl fmt::Display for FilmographyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let years: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.year.map(|y| y.to_string()).unwrap_or_else(|| MISSING_YEAR.to_string()))
            .collect();

        let title_w = self
            .rows
            .iter()
            .map(|r| r.title.chars().count())
            .chain(std::iter::once(Self::HEADERS[0].len()))
            .max()
            .unwrap_or(0);
        let year_w = years
            .iter()
            .map(|y| y.chars().count())
            .chain(std::iter::once(Self::HEADERS[1].len()))
            .max()
            .unwrap_or(0);

        write!(f, "{:<title_w$}  {:>year_w$}", Self::HEADERS[0], Self::HEADERS[1])?;
        for (row, year) in self.rows.iter().zip(&years) {
            write!(f, "\n{:<title_w$}  {:>year_w$}", row.title, year)?;
        }
        Ok(())
    }
}
