//! Static province -> island group table.

use crate::types::IslandGroup;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const PROVINCES: [(&str, IslandGroup); 38] = [
    ("Aceh", IslandGroup::Sumatera),
    ("Sumatera Utara", IslandGroup::Sumatera),
    ("Sumatera Barat", IslandGroup::Sumatera),
    ("Riau", IslandGroup::Sumatera),
    ("Jambi", IslandGroup::Sumatera),
    ("Sumatera Selatan", IslandGroup::Sumatera),
    ("Bengkulu", IslandGroup::Sumatera),
    ("Lampung", IslandGroup::Sumatera),
    ("Kepulauan Bangka Belitung", IslandGroup::Sumatera),
    ("Kepulauan Riau", IslandGroup::Sumatera),
    ("DKI Jakarta", IslandGroup::Jawa),
    ("Jawa Barat", IslandGroup::Jawa),
    ("Jawa Tengah", IslandGroup::Jawa),
    ("DI Yogyakarta", IslandGroup::Jawa),
    ("Jawa Timur", IslandGroup::Jawa),
    ("Banten", IslandGroup::Jawa),
    ("Bali", IslandGroup::BaliNusaTenggara),
    ("Nusa Tenggara Barat", IslandGroup::BaliNusaTenggara),
    ("Nusa Tenggara Timur", IslandGroup::BaliNusaTenggara),
    ("Kalimantan Barat", IslandGroup::Kalimantan),
    ("Kalimantan Tengah", IslandGroup::Kalimantan),
    ("Kalimantan Selatan", IslandGroup::Kalimantan),
    ("Kalimantan Timur", IslandGroup::Kalimantan),
    ("Kalimantan Utara", IslandGroup::Kalimantan),
    ("Sulawesi Utara", IslandGroup::Sulawesi),
    ("Sulawesi Tengah", IslandGroup::Sulawesi),
    ("Sulawesi Selatan", IslandGroup::Sulawesi),
    ("Sulawesi Tenggara", IslandGroup::Sulawesi),
    ("Gorontalo", IslandGroup::Sulawesi),
    ("Sulawesi Barat", IslandGroup::Sulawesi),
    ("Maluku", IslandGroup::Maluku),
    ("Maluku Utara", IslandGroup::Maluku),
    ("Papua", IslandGroup::Papua),
    ("Papua Barat", IslandGroup::Papua),
    ("Papua Selatan", IslandGroup::Papua),
    ("Papua Tengah", IslandGroup::Papua),
    ("Papua Pegunungan", IslandGroup::Papua),
    ("Papua Barat Daya", IslandGroup::Papua),
];

static ISLAND_MAP: Lazy<HashMap<&'static str, IslandGroup>> =
    Lazy::new(|| PROVINCES.iter().copied().collect());

/// Island group of a province, or `IslandGroup::Unknown` when the name is
/// not in the table. Names are compared after trimming.
pub fn island_of(province: &str) -> IslandGroup {
    ISLAND_MAP
        .get(province.trim())
        .copied()
        .unwrap_or(IslandGroup::Unknown)
}
