use serde::Serialize;

use crate::planting::PlantingDomain;

/// Debug counters shown by the developer overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldCensus {
    pub watered: usize,
    pub dug: usize,
    pub sown: usize,
}

impl PlantingDomain {
    pub fn count_plots(&self) -> FieldCensus {
        let mut census = FieldCensus::default();
        for (_, plot) in self.plots() {
            if plot.water > 0 {
                census.watered += 1;
            }
            if plot.dug {
                census.dug += 1;
            }
            if plot.sown {
                census.sown += 1;
            }
        }
        census
    }
}
