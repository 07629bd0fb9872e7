// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Sampler filter encoding.
//!
//! A Direct3D filter packs the three engine filters into one value.  Each engine filter
//! contributes a reduction (standard, comparison, minimum, maximum) and a kind (point, linear,
//! anisotropic).  All three must agree on the reduction, and anisotropic filtering applies to all
//! three filters at once.

use crate::imp::d3d::types::Filter;
use crate::sampler::FilterType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Point,
    Linear,
    Anisotropic,
}

/// Reduction bits (7..8) and kind of one engine filter.
const fn decompose(filter: FilterType) -> Option<(i32, Kind)> {
    Some(match filter {
        FilterType::Point => (0, Kind::Point),
        FilterType::Linear => (0, Kind::Linear),
        FilterType::Anisotropic => (0, Kind::Anisotropic),
        FilterType::ComparisonPoint => (1, Kind::Point),
        FilterType::ComparisonLinear => (1, Kind::Linear),
        FilterType::ComparisonAnisotropic => (1, Kind::Anisotropic),
        FilterType::MinimumPoint => (2, Kind::Point),
        FilterType::MinimumLinear => (2, Kind::Linear),
        FilterType::MinimumAnisotropic => (2, Kind::Anisotropic),
        FilterType::MaximumPoint => (3, Kind::Point),
        FilterType::MaximumLinear => (3, Kind::Linear),
        FilterType::MaximumAnisotropic => (3, Kind::Anisotropic),
        FilterType::Unknown => return None,
    })
}

const REDUCTION_SHIFT: i32 = 7;
const MIN_SHIFT: i32 = 4;
const MAG_SHIFT: i32 = 2;
const MIP_SHIFT: i32 = 0;

const fn linear_bit(kind: Kind, shift: i32) -> i32 {
    match kind {
        Kind::Linear => 1 << shift,
        _ => 0,
    }
}

/// Combines the min, mag and mip filters of a sampler into one Direct3D filter.
///
/// An anisotropic min filter selects anisotropic filtering; mag and mip must then be the same
/// anisotropic filter (checked in debug builds).  Any other mismatch in reduction or kind is
/// logged and returns `MIN_MAG_MIP_POINT`.
///
/// ```
/// # #[cfg(feature = "backend_d3d12")] {
/// use states_and_views::d3d12::{Filter, filter_type_to_d3d_filter};
/// use states_and_views::sampler::FilterType;
///
/// let filter = filter_type_to_d3d_filter(
///     FilterType::ComparisonLinear,
///     FilterType::ComparisonLinear,
///     FilterType::ComparisonLinear,
/// );
/// assert_eq!(filter, Filter::COMPARISON_MIN_MAG_MIP_LINEAR);
/// # }
/// ```
pub fn filter_type_to_d3d_filter(
    min_filter: FilterType,
    mag_filter: FilterType,
    mip_filter: FilterType,
) -> Filter {
    let (Some((min_reduction, min)), Some((mag_reduction, mag)), Some((mip_reduction, mip))) = (
        decompose(min_filter),
        decompose(mag_filter),
        decompose(mip_filter),
    ) else {
        return unsupported(min_filter, mag_filter, mip_filter);
    };

    if min == Kind::Anisotropic {
        debug_assert!(
            mag_filter == min_filter && mip_filter == min_filter,
            "For anisotropic filtering, all filters must be the same anisotropic filter"
        );
        return Filter(Filter::ANISOTROPIC.0 | min_reduction << REDUCTION_SHIFT);
    }
    if mag == Kind::Anisotropic
        || mip == Kind::Anisotropic
        || mag_reduction != min_reduction
        || mip_reduction != min_reduction
    {
        return unsupported(min_filter, mag_filter, mip_filter);
    }
    Filter(
        min_reduction << REDUCTION_SHIFT
            | linear_bit(min, MIN_SHIFT)
            | linear_bit(mag, MAG_SHIFT)
            | linear_bit(mip, MIP_SHIFT),
    )
}

fn unsupported(min_filter: FilterType, mag_filter: FilterType, mip_filter: FilterType) -> Filter {
    logwise::error_sync!(
        "Unsupported filter combination: min {min}, mag {mag}, mip {mip}",
        min = logwise::privacy::LogIt(&min_filter),
        mag = logwise::privacy::LogIt(&mag_filter),
        mip = logwise::privacy::LogIt(&mip_filter)
    );
    Filter::MIN_MAG_MIP_POINT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn every_valid_combination_is_distinct() {
        let classes = [
            [FilterType::Point, FilterType::Linear, FilterType::Anisotropic],
            [
                FilterType::ComparisonPoint,
                FilterType::ComparisonLinear,
                FilterType::ComparisonAnisotropic,
            ],
            [
                FilterType::MinimumPoint,
                FilterType::MinimumLinear,
                FilterType::MinimumAnisotropic,
            ],
            [
                FilterType::MaximumPoint,
                FilterType::MaximumLinear,
                FilterType::MaximumAnisotropic,
            ],
        ];
        let mut filters = HashSet::new();
        for [point, linear, anisotropic] in classes {
            for min in [point, linear] {
                for mag in [point, linear] {
                    for mip in [point, linear] {
                        filters.insert(filter_type_to_d3d_filter(min, mag, mip));
                    }
                }
            }
            filters.insert(filter_type_to_d3d_filter(anisotropic, anisotropic, anisotropic));
        }
        assert_eq!(filters.len(), 36);
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn named_values() {
        use FilterType::*;
        assert_eq!(filter_type_to_d3d_filter(Point, Point, Point), Filter::MIN_MAG_MIP_POINT);
        assert_eq!(filter_type_to_d3d_filter(Linear, Linear, Linear), Filter::MIN_MAG_MIP_LINEAR);
        assert_eq!(
            filter_type_to_d3d_filter(Point, Linear, Point),
            Filter::MIN_POINT_MAG_LINEAR_MIP_POINT
        );
        assert_eq!(
            filter_type_to_d3d_filter(Linear, Point, Linear),
            Filter::MIN_LINEAR_MAG_POINT_MIP_LINEAR
        );
        assert_eq!(
            filter_type_to_d3d_filter(Anisotropic, Anisotropic, Anisotropic),
            Filter::ANISOTROPIC
        );
        assert_eq!(
            filter_type_to_d3d_filter(
                ComparisonAnisotropic,
                ComparisonAnisotropic,
                ComparisonAnisotropic
            ),
            Filter::COMPARISON_ANISOTROPIC
        );
        assert_eq!(
            filter_type_to_d3d_filter(MinimumPoint, MinimumPoint, MinimumPoint),
            Filter::MINIMUM_MIN_MAG_MIP_POINT
        );
        assert_eq!(
            filter_type_to_d3d_filter(MaximumAnisotropic, MaximumAnisotropic, MaximumAnisotropic),
            Filter::MAXIMUM_ANISOTROPIC
        );
    }

    #[test]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn mismatched_classes_fall_back_to_point() {
        use FilterType::*;
        assert_eq!(
            filter_type_to_d3d_filter(ComparisonLinear, Linear, Linear),
            Filter::MIN_MAG_MIP_POINT
        );
        assert_eq!(
            filter_type_to_d3d_filter(Linear, Anisotropic, Linear),
            Filter::MIN_MAG_MIP_POINT
        );
        assert_eq!(
            filter_type_to_d3d_filter(Unknown, Linear, Linear),
            Filter::MIN_MAG_MIP_POINT
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "anisotropic")]
    fn anisotropic_mismatch_asserts() {
        filter_type_to_d3d_filter(
            FilterType::Anisotropic,
            FilterType::Linear,
            FilterType::Anisotropic,
        );
    }
}
