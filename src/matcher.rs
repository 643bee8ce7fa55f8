// SPDX-License-Identifier: PMPL-1.0-or-later

//! Profile matcher: read-only projections of catalog records onto a farmer.
//!
//! Every function keeps catalog order and never ranks. Truncation keeps the
//! first matches. Nothing here can fail; no match is an empty `Vec`.

use crate::types::{
    CropRecommendation, FarmAlert, MarketPrice, NearbyMarket, PestEntry, Region, WeatherReport,
};

/// Records tagged with a region (or the all-regions wildcard).
pub trait Regional {
    fn region(&self) -> &Region;
}

/// Records that concern one or more crops.
pub trait CropScoped {
    /// Whether a farmer growing `crop` should see this record.
    fn concerns_crop(&self, crop: &str) -> bool;

    /// Crop names shown for this record; used by the name filter.
    fn crop_names(&self) -> Vec<&str>;
}

/// Crop selection on the market screen. `"all"` is the sentinel for
/// "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CropFilter {
    #[default]
    All,
    Crop(String),
}

impl CropFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            CropFilter::All
        } else {
            CropFilter::Crop(value.to_string())
        }
    }
}

/// Records whose region is `region` or the wildcard.
pub fn match_by_region<'a, T: Regional>(records: &'a [T], region: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| record.region().covers(region))
        .collect()
}

/// Records whose region is exactly `region`; the wildcard does not count.
pub fn match_exact_region<'a, T: Regional>(records: &'a [T], region: &str) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| record.region().is(region))
        .collect()
}

/// Records concerning any of `crops`, or tagged with exactly `region`,
/// truncated to the first `max_results`.
pub fn match_by_crop_or_region<'a, T, S>(
    records: &'a [T],
    crops: &[S],
    region: &str,
    max_results: usize,
) -> Vec<&'a T>
where
    T: Regional + CropScoped,
    S: AsRef<str>,
{
    records
        .iter()
        .filter(|record| {
            crops.iter().any(|crop| record.concerns_crop(crop.as_ref()))
                || record.region().is(region)
        })
        .take(max_results)
        .collect()
}

/// Records that concern any of `crops`, regardless of region.
pub fn match_by_crops<'a, T, S>(records: &'a [T], crops: &[S]) -> Vec<&'a T>
where
    T: CropScoped,
    S: AsRef<str>,
{
    records
        .iter()
        .filter(|record| crops.iter().any(|crop| record.concerns_crop(crop.as_ref())))
        .collect()
}

/// Case-insensitive substring filter on crop names. [`CropFilter::All`]
/// passes everything through unchanged.
pub fn filter_by_crop_name<'a, T, I>(records: I, filter: &CropFilter) -> Vec<&'a T>
where
    T: CropScoped + 'a,
    I: IntoIterator<Item = &'a T>,
{
    match filter {
        CropFilter::All => records.into_iter().collect(),
        CropFilter::Crop(wanted) => {
            let wanted = wanted.to_lowercase();
            records
                .into_iter()
                .filter(|record| {
                    record
                        .crop_names()
                        .iter()
                        .any(|name| name.to_lowercase().contains(&wanted))
                })
                .collect()
        }
    }
}

/// The record for `region`, or the first record when the region has none.
pub fn find_for_region_or_first<'a, T: Regional>(records: &'a [T], region: &str) -> Option<&'a T> {
    records
        .iter()
        .find(|record| record.region().is(region))
        .or_else(|| records.first())
}

impl Regional for CropRecommendation {
    fn region(&self) -> &Region {
        &self.region
    }
}

impl CropScoped for CropRecommendation {
    fn concerns_crop(&self, crop: &str) -> bool {
        self.crop.contains(crop)
    }

    fn crop_names(&self) -> Vec<&str> {
        vec![self.crop.as_str()]
    }
}

impl Regional for MarketPrice {
    fn region(&self) -> &Region {
        &self.region
    }
}

impl CropScoped for MarketPrice {
    fn concerns_crop(&self, crop: &str) -> bool {
        self.crop.contains(crop)
    }

    fn crop_names(&self) -> Vec<&str> {
        vec![self.crop.as_str()]
    }
}

impl CropScoped for PestEntry {
    fn concerns_crop(&self, crop: &str) -> bool {
        self.affected_crops.iter().any(|affected| affected == crop)
    }

    fn crop_names(&self) -> Vec<&str> {
        self.affected_crops.iter().map(String::as_str).collect()
    }
}

impl Regional for FarmAlert {
    fn region(&self) -> &Region {
        &self.region
    }
}

impl Regional for NearbyMarket {
    fn region(&self) -> &Region {
        &self.state
    }
}

impl Regional for WeatherReport {
    fn region(&self) -> &Region {
        &self.location
    }
}
