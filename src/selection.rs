//! Province selection shared by both pages.

use crate::loader::LoadReport;
use crate::types::ProvinceMetrics;
use log::warn;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Province(String),
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            Ok(Selection::Province(s.to_string()))
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("All"),
            Selection::Province(name) => f.write_str(name),
        }
    }
}

/// Rows matching `selection`. `All` passes everything through.
pub fn filter_rows(rows: &[ProvinceMetrics], selection: &Selection) -> Vec<ProvinceMetrics> {
    match selection {
        Selection::All => rows.to_vec(),
        Selection::Province(name) => {
            let out: Vec<ProvinceMetrics> = rows
                .iter()
                .filter(|r| r.province == *name)
                .cloned()
                .collect();
            if out.is_empty() {
                warn!("no province named '{}' in the dataset", name);
            }
            out
        }
    }
}

/// A loaded and derived dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub rows: Vec<ProvinceMetrics>,
    pub report: LoadReport,
}

/// State owned by the front end and passed explicitly to every page.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub dataset: Option<Dataset>,
    pub selection: Selection,
}

impl AppContext {
    pub fn province_names(&self) -> Vec<&str> {
        self.dataset
            .as_ref()
            .map(|d| d.rows.iter().map(|r| r.province.as_str()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProvinceRecord;

    fn row(name: &str, population: f64) -> ProvinceMetrics {
        ProvinceRecord {
            province: name.to_string(),
            population,
            poor_population: 25.0,
            ptn: 1,
            pts: 2,
            ptn_students: 10,
            pts_students: 20,
            completion_sd: Some(1.0),
            completion_smp: None,
            completion_sma: None,
            budget: 1.0,
            education_realization: 1.0,
            delta_tpt: 0.0,
            delta_tpak: 0.0,
        }
        .derive()
    }

    #[test]
    fn parses_selection() {
        assert_eq!("All".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(
            " Bali ".parse::<Selection>().unwrap(),
            Selection::Province("Bali".to_string())
        );
    }

    #[test]
    fn filters_single_province_with_same_metrics() {
        let rows = vec![row("Aceh", 100.0), row("Bali", 50.0)];
        let all = filter_rows(&rows, &Selection::All);
        assert_eq!(all, rows);
        let one = filter_rows(&rows, &Selection::Province("Bali".to_string()));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0], rows[1]);
        assert!((one[0].poor_ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn unmatched_name_yields_nothing() {
        let rows = vec![row("Aceh", 100.0)];
        assert!(filter_rows(&rows, &Selection::Province("Atlantis".into())).is_empty());
    }
}
