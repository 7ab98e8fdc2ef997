//! Column names of the provincial dataset. These must match the header row
//! of the source CSV exactly (after trimming).

pub const PROVINCE: &str = "Provinsi";
pub const POPULATION: &str = "Jumlah Penduduk ( Ribu Jiwa )";
pub const POOR_POPULATION: &str = "Jumlah Penduduk Miskin ( Ribu Jiwa )";
pub const PTN: &str = "Jumlah PTN";
pub const PTS: &str = "Jumlah PTS";
pub const PTN_STUDENTS: &str = "Jumlah Mahasiswa PTN";
pub const PTS_STUDENTS: &str = "Jumlah Mahasiswa PTS";
pub const COMPLETION_SD: &str = "SD / Sederajat";
pub const COMPLETION_SMP: &str = "SMP / Sederajat";
pub const COMPLETION_SMA: &str = "SMA / Sederajat";
pub const BUDGET: &str = "APBD ( Ribu Rupiah)";
pub const EDUCATION_REALIZATION: &str = "Realisasi Anggaran Pendidikan ( % )";

pub const DELTA_TPT: &str = "Delta_TPT";
pub const DELTA_TPAK: &str = "Delta_TPAK";

/// Every column the deriver needs, in the order they are resolved.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    PROVINCE,
    POPULATION,
    POOR_POPULATION,
    PTN,
    PTS,
    PTN_STUDENTS,
    PTS_STUDENTS,
    COMPLETION_SD,
    COMPLETION_SMP,
    COMPLETION_SMA,
    BUDGET,
    EDUCATION_REALIZATION,
];
