//! In-memory data model that records every mutation it receives.

use crate::grid::DataModel;
use crate::types::{BinHit, CellMetadata, Region};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

type CellKey = (Region, usize, usize);

/// One `set_data` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWrite {
    pub region: Region,
    pub row: usize,
    pub column: usize,
    pub value: String,
}

/// One `set_hovered_bin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoveredBin {
    pub column: usize,
    pub bin: Option<usize>,
}

/// One `filter_bin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub bin: Option<BinHit>,
    pub exclusive: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryData {
    values: HashMap<CellKey, String>,
    metadata: HashMap<CellKey, CellMetadata>,
    tooltips: HashMap<CellKey, String>,
    writes: Vec<CellWrite>,
    hovered_bins: Vec<HoveredBin>,
    filters: Vec<FilterRequest>,
}

impl MemoryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(
        &mut self,
        region: Region,
        row: usize,
        column: usize,
        value: impl Into<String>,
    ) {
        self.values.insert((region, row, column), value.into());
    }

    pub fn set_tooltip(
        &mut self,
        region: Region,
        row: usize,
        column: usize,
        tooltip: impl Into<String>,
    ) {
        self.tooltips.insert((region, row, column), tooltip.into());
    }

    pub fn set_metadata(
        &mut self,
        region: Region,
        row: usize,
        column: usize,
        metadata: CellMetadata,
    ) {
        self.metadata.insert((region, row, column), metadata);
    }

    pub fn value(&self, region: Region, row: usize, column: usize) -> Option<&str> {
        self.values.get(&(region, row, column)).map(String::as_str)
    }

    pub fn writes(&self) -> &[CellWrite] {
        &self.writes
    }

    pub fn hovered_bins(&self) -> &[HoveredBin] {
        &self.hovered_bins
    }

    pub fn filters(&self) -> &[FilterRequest] {
        &self.filters
    }
}

impl DataModel for MemoryData {
    fn data(&self, region: Region, row: usize, column: usize) -> Option<String> {
        self.values.get(&(region, row, column)).cloned()
    }

    fn metadata(&self, region: Region, row: usize, column: usize) -> CellMetadata {
        self.metadata
            .get(&(region, row, column))
            .cloned()
            .unwrap_or_default()
    }

    fn tooltip(&self, region: Region, row: usize, column: usize) -> Option<String> {
        self.tooltips.get(&(region, row, column)).cloned()
    }

    fn set_data(&mut self, region: Region, row: usize, column: usize, value: &str) {
        self.values.insert((region, row, column), value.to_string());
        self.writes.push(CellWrite {
            region,
            row,
            column,
            value: value.to_string(),
        });
    }

    fn set_hovered_bin(&mut self, column: usize, bin: Option<usize>) {
        self.hovered_bins.push(HoveredBin { column, bin });
    }

    fn filter_bin(&mut self, bin: Option<BinHit>, exclusive: bool) {
        self.filters.push(FilterRequest { bin, exclusive });
    }
}
