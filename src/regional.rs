//! Island-level aggregation of institution counts.

use crate::island::island_of;
use crate::types::{
    IslandBar, IslandGroup, IslandTotals, ProvinceMetrics, TaggedProvince, TaggedProvinceRow,
};
use log::warn;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct RegionalSummary {
    /// One entry per island group, in order of first appearance.
    pub totals: Vec<IslandTotals>,
    /// Input rows in their original order, tagged with their island group.
    pub tagged: Vec<TaggedProvince>,
    /// Province names that fell into `IslandGroup::Unknown`.
    pub unknown_provinces: Vec<String>,
}

impl RegionalSummary {
    /// Long form of `totals` for a grouped bar chart: one PTN and one PTS
    /// bar per island.
    pub fn to_bars(&self) -> Vec<IslandBar> {
        let mut bars = Vec::with_capacity(self.totals.len() * 2);
        for t in &self.totals {
            bars.push(IslandBar {
                island: t.island,
                kind: "Jumlah PTN",
                count: t.ptn,
            });
            bars.push(IslandBar {
                island: t.island,
                kind: "Jumlah PTS",
                count: t.pts,
            });
        }
        bars
    }

    /// Tagged rows in export form, one per input province.
    pub fn tagged_rows(&self) -> Vec<TaggedProvinceRow> {
        self.tagged.iter().map(TaggedProvinceRow::from).collect()
    }

    pub fn totals_for(&self, island: IslandGroup) -> Option<&IslandTotals> {
        self.totals.iter().find(|t| t.island == island)
    }
}

pub fn aggregate_by_island(rows: &[ProvinceMetrics]) -> RegionalSummary {
    let mut slot: HashMap<IslandGroup, usize> = HashMap::new();
    let mut totals: Vec<IslandTotals> = Vec::new();
    let mut tagged = Vec::with_capacity(rows.len());
    let mut unknown_provinces = Vec::new();

    for r in rows {
        let island = island_of(&r.province);
        if island == IslandGroup::Unknown {
            warn!("province '{}' has no island group", r.province);
            unknown_provinces.push(r.province.clone());
        }
        let idx = *slot.entry(island).or_insert_with(|| {
            totals.push(IslandTotals {
                island,
                ptn: 0,
                pts: 0,
            });
            totals.len() - 1
        });
        totals[idx].ptn = totals[idx].ptn.saturating_add(r.ptn);
        totals[idx].pts = totals[idx].pts.saturating_add(r.pts);
        tagged.push(TaggedProvince {
            island,
            metrics: r.clone(),
        });
    }

    RegionalSummary {
        totals,
        tagged,
        unknown_provinces,
    }
}
