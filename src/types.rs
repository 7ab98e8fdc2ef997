use serde::Serialize;
use std::fmt;
use tabled::Tabled;

/// One province row with its raw fields parsed into typed values.
///
/// Populations are in thousands of people, `budget` is the regional
/// budget (APBD) in thousands of rupiah. Completion rates are percentages;
/// an empty cell is kept as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvinceRecord {
    pub province: String,
    pub population: f64,
    pub poor_population: f64,
    pub ptn: u64,
    pub pts: u64,
    pub ptn_students: u64,
    pub pts_students: u64,
    pub completion_sd: Option<f64>,
    pub completion_smp: Option<f64>,
    pub completion_sma: Option<f64>,
    pub budget: f64,
    pub education_realization: f64,
    pub delta_tpt: f64,
    pub delta_tpak: f64,
}

/// A province row augmented with its derived columns.
///
/// Serialized field names follow the dataset's own column names so the
/// CSV export lines up with the input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvinceMetrics {
    #[serde(rename = "Provinsi")]
    pub province: String,
    #[serde(rename = "Jumlah Penduduk ( Ribu Jiwa )")]
    pub population: f64,
    #[serde(rename = "Jumlah Penduduk Miskin ( Ribu Jiwa )")]
    pub poor_population: f64,
    #[serde(rename = "Jumlah PTN")]
    pub ptn: u64,
    #[serde(rename = "Jumlah PTS")]
    pub pts: u64,
    #[serde(rename = "Jumlah Mahasiswa PTN")]
    pub ptn_students: u64,
    #[serde(rename = "Jumlah Mahasiswa PTS")]
    pub pts_students: u64,
    #[serde(rename = "SD / Sederajat")]
    pub completion_sd: Option<f64>,
    #[serde(rename = "SMP / Sederajat")]
    pub completion_smp: Option<f64>,
    #[serde(rename = "SMA / Sederajat")]
    pub completion_sma: Option<f64>,
    #[serde(rename = "APBD ( Ribu Rupiah)")]
    pub budget: f64,
    #[serde(rename = "Realisasi Anggaran Pendidikan ( % )")]
    pub education_realization: f64,
    #[serde(rename = "Delta_TPT")]
    pub delta_tpt: f64,
    #[serde(rename = "Delta_TPAK")]
    pub delta_tpak: f64,
    #[serde(rename = "Total_PT")]
    pub total_institutions: u64,
    #[serde(rename = "Total_Mahasiswa")]
    pub total_students: u64,
    /// NaN when population is zero.
    #[serde(rename = "Rasio_Penduduk_Miskin")]
    pub poor_ratio: f64,
    /// NaN when population is zero.
    #[serde(rename = "Mahasiswa_per_1000")]
    pub students_per_1000: f64,
    /// NaN when every completion rate is absent.
    #[serde(rename = "Rata2_Tingkat_Penyelesaian")]
    pub avg_completion: f64,
    #[serde(rename = "Jumlah Penduduk (Juta Jiwa)")]
    pub population_millions: f64,
    #[serde(rename = "APBN (Triliun)")]
    pub budget_trillions: f64,
}

/// Geographic island group a province belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum IslandGroup {
    Sumatera,
    Jawa,
    #[serde(rename = "Bali & NTT NTB")]
    BaliNusaTenggara,
    Kalimantan,
    Sulawesi,
    Maluku,
    Papua,
    /// Province name not present in the island table.
    #[serde(rename = "unknown")]
    Unknown,
}

impl IslandGroup {
    pub fn label(self) -> &'static str {
        match self {
            IslandGroup::Sumatera => "Sumatera",
            IslandGroup::Jawa => "Jawa",
            IslandGroup::BaliNusaTenggara => "Bali & NTT NTB",
            IslandGroup::Kalimantan => "Kalimantan",
            IslandGroup::Sulawesi => "Sulawesi",
            IslandGroup::Maluku => "Maluku",
            IslandGroup::Papua => "Papua",
            IslandGroup::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IslandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A province row tagged with its island group.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedProvince {
    pub island: IslandGroup,
    pub metrics: ProvinceMetrics,
}

/// Flat export row of a `TaggedProvince`. The CSV writer cannot flatten
/// nested structs, so the columns are spelled out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedProvinceRow {
    #[serde(rename = "Provinsi")]
    pub province: String,
    #[serde(rename = "Pulau")]
    pub island: IslandGroup,
    #[serde(rename = "Jumlah PTN")]
    pub ptn: u64,
    #[serde(rename = "Jumlah PTS")]
    pub pts: u64,
    #[serde(rename = "Total_PT")]
    pub total_institutions: u64,
    #[serde(rename = "Total_Mahasiswa")]
    pub total_students: u64,
    #[serde(rename = "Rasio_Penduduk_Miskin")]
    pub poor_ratio: f64,
    #[serde(rename = "Mahasiswa_per_1000")]
    pub students_per_1000: f64,
    #[serde(rename = "Rata2_Tingkat_Penyelesaian")]
    pub avg_completion: f64,
    #[serde(rename = "Jumlah Penduduk (Juta Jiwa)")]
    pub population_millions: f64,
    #[serde(rename = "APBN (Triliun)")]
    pub budget_trillions: f64,
}

impl From<&TaggedProvince> for TaggedProvinceRow {
    fn from(t: &TaggedProvince) -> Self {
        let m = &t.metrics;
        TaggedProvinceRow {
            province: m.province.clone(),
            island: t.island,
            ptn: m.ptn,
            pts: m.pts,
            total_institutions: m.total_institutions,
            total_students: m.total_students,
            poor_ratio: m.poor_ratio,
            students_per_1000: m.students_per_1000,
            avg_completion: m.avg_completion,
            population_millions: m.population_millions,
            budget_trillions: m.budget_trillions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct IslandTotals {
    #[serde(rename = "Pulau")]
    #[tabled(rename = "Pulau")]
    pub island: IslandGroup,
    #[serde(rename = "Jumlah PTN")]
    #[tabled(rename = "Jumlah PTN")]
    pub ptn: u64,
    #[serde(rename = "Jumlah PTS")]
    #[tabled(rename = "Jumlah PTS")]
    pub pts: u64,
}

/// Long-form row of the grouped PTN/PTS bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct IslandBar {
    #[serde(rename = "Pulau")]
    #[tabled(rename = "Pulau")]
    pub island: IslandGroup,
    #[serde(rename = "Jenis_PT")]
    #[tabled(rename = "Jenis_PT")]
    pub kind: &'static str,
    #[serde(rename = "Jumlah")]
    #[tabled(rename = "Jumlah")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct KpiCard {
    #[serde(rename = "Title")]
    #[tabled(rename = "KPI")]
    pub title: String,
    #[serde(skip)]
    #[tabled(skip)]
    pub value: f64,
    #[serde(rename = "Value")]
    #[tabled(rename = "Value")]
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct DeltaKpi {
    #[tabled(rename = "Delta")]
    pub title: String,
    #[tabled(skip)]
    pub value: f64,
    #[tabled(rename = "")]
    pub arrow: &'static str,
    #[tabled(rename = "Value")]
    pub display: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ProvinceTableRow {
    #[tabled(rename = "Provinsi")]
    pub province: String,
    #[tabled(rename = "Jumlah Penduduk (Juta Jiwa)")]
    pub population_millions: String,
    #[tabled(rename = "Rasio_Penduduk_Miskin")]
    pub poor_ratio: String,
    #[tabled(rename = "APBN (Triliun)")]
    pub budget_trillions: String,
    #[tabled(rename = "Realisasi Anggaran Pendidikan ( % )")]
    pub education_realization: String,
    #[tabled(rename = "Rata2_Tingkat_Penyelesaian")]
    pub avg_completion: String,
    #[tabled(rename = "Total_PT")]
    pub total_institutions: String,
    #[tabled(rename = "Total_Mahasiswa")]
    pub total_students: String,
    #[tabled(rename = "Mahasiswa_per_1000")]
    pub students_per_1000: String,
}

/// One bubble of a scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    #[serde(rename = "Provinsi")]
    pub province: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub total_provinces: usize,
    pub total_islands: usize,
    pub unknown_provinces: Vec<String>,
    pub total_population_millions: f64,
    pub total_institutions: u64,
    pub total_students: u64,
    pub total_budget_trillions: f64,
}
