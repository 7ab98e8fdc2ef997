use crate::regional::RegionalSummary;
use crate::selection::Selection;
use crate::types::{
    DeltaKpi, IslandBar, KpiCard, ProvinceMetrics, ProvinceTableRow, ScatterPoint, SummaryStats,
};
use crate::util::{format_int_id, format_number, format_percent, mean_finite};

/// The overview ("Home Dashboard") page, built from the selection-filtered
/// rows.
#[derive(Debug, Clone)]
pub struct OverviewPage {
    pub kpis: Vec<KpiCard>,
    pub deltas: Vec<DeltaKpi>,
    pub table: Vec<ProvinceTableRow>,
}

/// The analysis page. Every chart covers the whole dataset; the province
/// selection only affects the overview page.
#[derive(Debug, Clone)]
pub struct AnalysisPage {
    pub island_bars: Vec<IslandBar>,
    pub budget_vs_poverty: Vec<ScatterPoint>,
    pub education_vs_completion: Vec<ScatterPoint>,
}

pub fn generate_kpis(data: &[ProvinceMetrics]) -> Vec<KpiCard> {
    let population: f64 = data.iter().map(|r| r.population_millions).sum();
    let poor_ratio = mean_finite(data.iter().map(|r| r.poor_ratio));
    let budget: f64 = data.iter().map(|r| r.budget_trillions).sum();
    let institutions: u64 = data.iter().map(|r| r.total_institutions).sum();
    let students: u64 = data.iter().map(|r| r.total_students).sum();
    let per_1000 = mean_finite(data.iter().map(|r| r.students_per_1000));

    vec![
        KpiCard {
            title: "Jumlah Penduduk (Juta Jiwa)".to_string(),
            value: population,
            display: format_number(population, 2),
        },
        KpiCard {
            title: "Rasio Penduduk Miskin".to_string(),
            value: poor_ratio,
            display: format_percent(poor_ratio),
        },
        KpiCard {
            title: "Total APBN (Triliun)".to_string(),
            value: budget,
            display: format_number(budget, 2),
        },
        KpiCard {
            title: "Jumlah PT".to_string(),
            value: institutions as f64,
            display: institutions.to_string(),
        },
        KpiCard {
            title: "Jumlah Mahasiswa".to_string(),
            value: students as f64,
            display: format_int_id(students),
        },
        KpiCard {
            title: "Mahasiswa per 1000".to_string(),
            value: per_1000,
            display: format_number(per_1000, 2),
        },
    ]
}

/// Year-over-year deltas, shown only when exactly one province is selected.
pub fn generate_deltas(data: &[ProvinceMetrics], selection: &Selection) -> Vec<DeltaKpi> {
    let (Selection::Province(_), Some(r)) = (selection, data.first()) else {
        return Vec::new();
    };
    [("Delta TPT", r.delta_tpt), ("Delta TPAK", r.delta_tpak)]
        .into_iter()
        .map(|(title, value)| DeltaKpi {
            title: title.to_string(),
            value,
            arrow: if value >= 0.0 { "▲" } else { "▼" },
            display: format!("{:.2}", value),
        })
        .collect()
}

pub fn generate_table(data: &[ProvinceMetrics]) -> Vec<ProvinceTableRow> {
    data.iter()
        .map(|r| ProvinceTableRow {
            province: r.province.clone(),
            population_millions: format_number(r.population_millions, 2),
            poor_ratio: format_percent(r.poor_ratio),
            budget_trillions: format_number(r.budget_trillions, 2),
            education_realization: format_number(r.education_realization, 2),
            avg_completion: format_number(r.avg_completion, 2),
            total_institutions: r.total_institutions.to_string(),
            total_students: format_int_id(r.total_students),
            students_per_1000: format_number(r.students_per_1000, 2),
        })
        .collect()
}

pub fn generate_overview(data: &[ProvinceMetrics], selection: &Selection) -> OverviewPage {
    OverviewPage {
        kpis: generate_kpis(data),
        deltas: generate_deltas(data, selection),
        table: generate_table(data),
    }
}

/// Scatter points, dropping rows whose coordinates are not finite.
fn scatter<F>(data: &[ProvinceMetrics], f: F) -> Vec<ScatterPoint>
where
    F: Fn(&ProvinceMetrics) -> (f64, f64, f64),
{
    data.iter()
        .filter_map(|r| {
            let (x, y, size) = f(r);
            (x.is_finite() && y.is_finite()).then(|| ScatterPoint {
                province: r.province.clone(),
                x,
                y,
                size,
            })
        })
        .collect()
}

pub fn generate_analysis(data: &[ProvinceMetrics], regional: &RegionalSummary) -> AnalysisPage {
    AnalysisPage {
        island_bars: regional.to_bars(),
        budget_vs_poverty: scatter(data, |r| {
            (r.budget_trillions, r.poor_ratio, r.population_millions)
        }),
        education_vs_completion: scatter(data, |r| {
            (
                r.education_realization,
                r.avg_completion,
                r.total_students as f64,
            )
        }),
    }
}

pub fn generate_summary(data: &[ProvinceMetrics], regional: &RegionalSummary) -> SummaryStats {
    SummaryStats {
        total_provinces: data.len(),
        total_islands: regional.totals.len(),
        unknown_provinces: regional.unknown_provinces.clone(),
        total_population_millions: data.iter().map(|r| r.population_millions).sum(),
        total_institutions: data.iter().map(|r| r.total_institutions).sum(),
        total_students: data.iter().map(|r| r.total_students).sum(),
        total_budget_trillions: data.iter().map(|r| r.budget_trillions).sum(),
    }
}
