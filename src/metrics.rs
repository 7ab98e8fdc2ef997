//! Per-province derived metrics.
//!
//! Every derived value is a pure function of a single row. Column lookup
//! happens once per table, so a missing column aborts the whole derivation
//! before any row is produced.

use crate::error::{DashboardError, Result};
use crate::loader::RawTable;
use crate::schema;
use crate::types::{ProvinceMetrics, ProvinceRecord};
use crate::util::{mean_finite, parse_count_safe, parse_f64_safe};
use csv::StringRecord;
use log::{debug, warn};

/// Resolved positions of the dataset's columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    province: usize,
    population: usize,
    poor_population: usize,
    ptn: usize,
    pts: usize,
    ptn_students: usize,
    pts_students: usize,
    completion_sd: usize,
    completion_smp: usize,
    completion_sma: usize,
    budget: usize,
    education_realization: usize,
    delta_tpt: Option<usize>,
    delta_tpak: Option<usize>,
}

impl ColumnIndex {
    fn resolve(table: &RawTable) -> Result<Self> {
        let required = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| DashboardError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            province: required(schema::PROVINCE)?,
            population: required(schema::POPULATION)?,
            poor_population: required(schema::POOR_POPULATION)?,
            ptn: required(schema::PTN)?,
            pts: required(schema::PTS)?,
            ptn_students: required(schema::PTN_STUDENTS)?,
            pts_students: required(schema::PTS_STUDENTS)?,
            completion_sd: required(schema::COMPLETION_SD)?,
            completion_smp: required(schema::COMPLETION_SMP)?,
            completion_sma: required(schema::COMPLETION_SMA)?,
            budget: required(schema::BUDGET)?,
            education_realization: required(schema::EDUCATION_REALIZATION)?,
            delta_tpt: table.column_index(schema::DELTA_TPT),
            delta_tpak: table.column_index(schema::DELTA_TPAK),
        })
    }
}

/// Typed access to the cells of one row, reporting the offending cell on
/// failure.
struct RowReader<'a> {
    record: &'a StringRecord,
    row: usize,
}

impl<'a> RowReader<'a> {
    fn cell(&self, idx: usize) -> Option<&'a str> {
        self.record.get(idx)
    }

    fn invalid(&self, column: &str, idx: usize) -> DashboardError {
        DashboardError::InvalidValue {
            row: self.row,
            column: column.to_string(),
            value: self.cell(idx).unwrap_or("").trim().to_string(),
        }
    }

    fn number(&self, column: &str, idx: usize) -> Result<f64> {
        parse_f64_safe(self.cell(idx)).ok_or_else(|| self.invalid(column, idx))
    }

    fn count(&self, column: &str, idx: usize) -> Result<u64> {
        parse_count_safe(self.cell(idx)).ok_or_else(|| self.invalid(column, idx))
    }

    /// Empty cells are absent; anything else must parse.
    fn optional_number(&self, column: &str, idx: usize) -> Result<Option<f64>> {
        match self.cell(idx).map(str::trim) {
            None | Some("") => Ok(None),
            Some(_) => self.number(column, idx).map(Some),
        }
    }
}

impl ProvinceRecord {
    fn from_row(cols: &ColumnIndex, record: &StringRecord, row: usize) -> Result<Self> {
        let r = RowReader { record, row };
        let delta = |idx: Option<usize>, column: &str| -> Result<f64> {
            match idx {
                Some(i) => Ok(r.optional_number(column, i)?.unwrap_or(0.0)),
                None => Ok(0.0),
            }
        };
        let rec = ProvinceRecord {
            province: r.cell(cols.province).unwrap_or("").trim().to_string(),
            population: r.number(schema::POPULATION, cols.population)?,
            poor_population: r.number(schema::POOR_POPULATION, cols.poor_population)?,
            ptn: r.count(schema::PTN, cols.ptn)?,
            pts: r.count(schema::PTS, cols.pts)?,
            ptn_students: r.count(schema::PTN_STUDENTS, cols.ptn_students)?,
            pts_students: r.count(schema::PTS_STUDENTS, cols.pts_students)?,
            completion_sd: r.optional_number(schema::COMPLETION_SD, cols.completion_sd)?,
            completion_smp: r.optional_number(schema::COMPLETION_SMP, cols.completion_smp)?,
            completion_sma: r.optional_number(schema::COMPLETION_SMA, cols.completion_sma)?,
            budget: r.number(schema::BUDGET, cols.budget)?,
            education_realization: r
                .number(schema::EDUCATION_REALIZATION, cols.education_realization)?,
            delta_tpt: delta(cols.delta_tpt, schema::DELTA_TPT)?,
            delta_tpak: delta(cols.delta_tpak, schema::DELTA_TPAK)?,
        };
        // Totals must be exact, so a pair whose sum leaves u64 is malformed.
        if rec.ptn.checked_add(rec.pts).is_none() {
            return Err(r.invalid(schema::PTS, cols.pts));
        }
        if rec.ptn_students.checked_add(rec.pts_students).is_none() {
            return Err(r.invalid(schema::PTS_STUDENTS, cols.pts_students));
        }
        Ok(rec)
    }

    /// Compute the derived columns for this row.
    ///
    /// A zero population makes `poor_ratio` and `students_per_1000` NaN;
    /// the row itself is kept.
    pub fn derive(&self) -> ProvinceMetrics {
        let total_institutions = self.ptn.saturating_add(self.pts);
        let total_students = self.ptn_students.saturating_add(self.pts_students);
        let (poor_ratio, students_per_1000) = if self.population == 0.0 {
            (f64::NAN, f64::NAN)
        } else {
            (
                self.poor_population / self.population,
                total_students as f64 / self.population,
            )
        };
        let avg_completion = mean_finite(
            [self.completion_sd, self.completion_smp, self.completion_sma]
                .into_iter()
                .flatten(),
        );

        ProvinceMetrics {
            province: self.province.clone(),
            population: self.population,
            poor_population: self.poor_population,
            ptn: self.ptn,
            pts: self.pts,
            ptn_students: self.ptn_students,
            pts_students: self.pts_students,
            completion_sd: self.completion_sd,
            completion_smp: self.completion_smp,
            completion_sma: self.completion_sma,
            budget: self.budget,
            education_realization: self.education_realization,
            delta_tpt: self.delta_tpt,
            delta_tpak: self.delta_tpak,
            total_institutions,
            total_students,
            poor_ratio,
            students_per_1000,
            avg_completion,
            population_millions: self.population / 1000.0,
            budget_trillions: self.budget / 1e9,
        }
    }
}

/// Parse every row of `table` and add the derived columns.
///
/// Row order and count are preserved. Fails without partial output on the
/// first missing column or unparsable required cell.
pub fn derive_metrics(table: &RawTable) -> Result<Vec<ProvinceMetrics>> {
    let cols = ColumnIndex::resolve(table)?;
    if cols.delta_tpt.is_none() || cols.delta_tpak.is_none() {
        debug!("delta columns absent, defaulting to 0");
    }

    let mut out = Vec::with_capacity(table.rows.len());
    for (i, record) in table.rows.iter().enumerate() {
        let metrics = ProvinceRecord::from_row(&cols, record, i + 1)?.derive();
        if metrics.population == 0.0 {
            warn!(
                "province '{}' has zero population; ratios set to NaN",
                metrics.province
            );
        }
        out.push(metrics);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_table_from_reader;

    const HEADER: &str = "Provinsi,Jumlah Penduduk ( Ribu Jiwa ),Jumlah Penduduk Miskin ( Ribu Jiwa ),Jumlah PTN,Jumlah PTS,Jumlah Mahasiswa PTN,Jumlah Mahasiswa PTS,SD / Sederajat,SMP / Sederajat,SMA / Sederajat,APBD ( Ribu Rupiah),Realisasi Anggaran Pendidikan ( % )";

    fn table(rows: &str) -> RawTable {
        let data = format!("{}\n{}", HEADER, rows);
        load_table_from_reader(data.as_bytes()).unwrap().0
    }

    fn record() -> ProvinceRecord {
        ProvinceRecord {
            province: "Bali".to_string(),
            population: 1000.0,
            poor_population: 100.0,
            ptn: 5,
            pts: 10,
            ptn_students: 2000,
            pts_students: 3000,
            completion_sd: Some(90.0),
            completion_smp: Some(80.0),
            completion_sma: Some(70.0),
            budget: 5e9,
            education_realization: 20.0,
            delta_tpt: 0.0,
            delta_tpak: 0.0,
        }
    }

    #[test]
    fn derives_reference_row() {
        let m = record().derive();
        assert_eq!(m.total_institutions, 15);
        assert_eq!(m.total_students, 5000);
        assert!((m.poor_ratio - 0.10).abs() < 1e-12);
        assert!((m.students_per_1000 - 5.0).abs() < 1e-12);
        assert!((m.population_millions - 1.0).abs() < 1e-12);
        assert!((m.avg_completion - 80.0).abs() < 1e-12);
        assert!((m.budget_trillions - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_population_yields_nan_ratios() {
        let mut r = record();
        r.population = 0.0;
        let m = r.derive();
        assert!(m.poor_ratio.is_nan());
        assert!(m.students_per_1000.is_nan());
        assert_eq!(m.total_institutions, 15);
        assert_eq!(m.population_millions, 0.0);
    }

    #[test]
    fn absent_completion_rates_are_excluded_from_mean() {
        let mut r = record();
        r.completion_smp = None;
        assert!((r.derive().avg_completion - 80.0).abs() < 1e-12);
        r.completion_sd = None;
        r.completion_sma = None;
        assert!(r.derive().avg_completion.is_nan());
    }

    #[test]
    fn derives_from_table_and_defaults_deltas() {
        let t = table("Bali,1000,100,5,10,2000,3000,90,80,70,5000000000,20\nAceh,500,50,3,4,100,200,95,,85,1,10\n");
        let rows = derive_metrics(&t).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].province, "Bali");
        assert_eq!(rows[1].province, "Aceh");
        assert_eq!(rows[1].completion_smp, None);
        assert!((rows[1].avg_completion - 90.0).abs() < 1e-12);
        assert_eq!(rows[0].delta_tpt, 0.0);
        assert_eq!(rows[0].delta_tpak, 0.0);
    }

    #[test]
    fn reads_delta_columns_when_present() {
        let data = format!(
            "{},Delta_TPT,Delta_TPAK\nBali,1000,100,5,10,2000,3000,90,80,70,1,20,-0.5,1.25\n",
            HEADER
        );
        let t = load_table_from_reader(data.as_bytes()).unwrap().0;
        let rows = derive_metrics(&t).unwrap();
        assert_eq!(rows[0].delta_tpt, -0.5);
        assert_eq!(rows[0].delta_tpak, 1.25);
    }

    #[test]
    fn missing_column_aborts() {
        let data = "Provinsi,Jumlah PTN\nBali,3\n";
        let t = load_table_from_reader(data.as_bytes()).unwrap().0;
        match derive_metrics(&t) {
            Err(DashboardError::MissingColumn(name)) => {
                assert_eq!(name, schema::POPULATION)
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn each_required_column_is_checked() {
        for missing in schema::REQUIRED_COLUMNS {
            let header: Vec<&str> = schema::REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != missing)
                .collect();
            let data = format!("{}\n", header.join(","));
            let t = load_table_from_reader(data.as_bytes()).unwrap().0;
            match derive_metrics(&t) {
                Err(DashboardError::MissingColumn(name)) => assert_eq!(name, missing),
                other => panic!("expected MissingColumn({}), got {:?}", missing, other),
            }
        }
    }

    #[test]
    fn unparsable_cell_reports_position() {
        let t = table("Bali,1000,100,five,10,2000,3000,90,80,70,1,20\n");
        match derive_metrics(&t) {
            Err(DashboardError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, schema::PTN);
                assert_eq!(value, "five");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn scientific_budget_is_accepted() {
        let t = table("Bali,1000,100,5,10,2000,3000,90,80,70,7.5E+12,20\n");
        let rows = derive_metrics(&t).unwrap();
        assert!((rows[0].budget_trillions - 7500.0).abs() < 1e-9);
    }

    #[test]
    fn count_overflow_is_an_invalid_value() {
        let t = table("Bali,1000,100,18446744073709551615,1,2000,3000,90,80,70,1,20\n");
        match derive_metrics(&t) {
            Err(DashboardError::InvalidValue { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, schema::PTS);
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }

        let t = table("Bali,1000,100,5,18446744073709551616,2000,3000,90,80,70,1,20\n");
        assert!(matches!(
            derive_metrics(&t),
            Err(DashboardError::InvalidValue { .. })
        ));
    }

    #[test]
    fn derive_saturates_instead_of_overflowing() {
        let mut r = record();
        r.ptn = u64::MAX;
        assert_eq!(r.derive().total_institutions, u64::MAX);
    }

    #[test]
    fn derivation_is_idempotent() {
        let t = table("Bali,1000,100,5,10,2000,3000,90,80,70,1,20\nPapua,0,10,1,1,10,10,50,40,30,1,5\n");
        let a = derive_metrics(&t).unwrap();
        let b = derive_metrics(&t).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.province, y.province);
            assert_eq!(x.total_institutions, y.total_institutions);
            assert_eq!(x.poor_ratio.to_bits(), y.poor_ratio.to_bits());
            assert_eq!(x.students_per_1000.to_bits(), y.students_per_1000.to_bits());
        }
    }
}
