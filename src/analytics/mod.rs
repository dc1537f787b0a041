use crate::api::fetch_nearby;
use crate::config::OverpassConfig;
use crate::domain::{Coordinate, ServiceCategory, ServiceTally};

/// Hospital count below this fires the low-availability warning
const HOSPITAL_COVERAGE_THRESHOLD: usize = 3;

/// Count nearby features for every monitored service category.
///
/// One sequential fetch per category; a failed fetch tallies as zero, the
/// same as a genuine absence of features.
pub fn analyze_services(
    origin: Coordinate,
    radius_m: u32,
    overpass: &OverpassConfig,
) -> Vec<ServiceTally> {
    ServiceCategory::ALL
        .iter()
        .map(|&category| {
            let (key, value) = category.tag();
            let elements = fetch_nearby(origin, key, value, radius_m, overpass);
            ServiceTally {
                category,
                count: elements.len(),
            }
        })
        .collect()
}

/// Threshold-based observations derived from service tallies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    LowHospitalAvailability,
    AdequateHospitalCoverage,
    TouristOrientedArea,
}

/// Display tone for an insight line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Good,
    Note,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Insight::LowHospitalAvailability => "Low hospital availability in this area",
            Insight::AdequateHospitalCoverage => "Adequate hospital coverage",
            Insight::TouristOrientedArea => "Tourist-oriented area with more hotels",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Insight::LowHospitalAvailability => Severity::Warning,
            Insight::AdequateHospitalCoverage => Severity::Good,
            Insight::TouristOrientedArea => Severity::Note,
        }
    }
}

/// Derive insight messages from service tallies.
///
/// Rules fire independently and in a fixed order: the two hospital rules
/// are mutually exclusive, the hotel rule may fire alongside either.
pub fn derive_insights(tallies: &[ServiceTally]) -> Vec<Insight> {
    let hospitals = count_of(tallies, ServiceCategory::Hospitals);
    let hotels = count_of(tallies, ServiceCategory::Hotels);

    let mut insights = Vec::new();

    if hospitals < HOSPITAL_COVERAGE_THRESHOLD {
        insights.push(Insight::LowHospitalAvailability);
    } else {
        insights.push(Insight::AdequateHospitalCoverage);
    }

    if hotels > hospitals {
        insights.push(Insight::TouristOrientedArea);
    }

    insights
}

fn count_of(tallies: &[ServiceTally], category: ServiceCategory) -> usize {
    tallies
        .iter()
        .find(|t| t.category == category)
        .map(|t| t.count)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies(hospitals: usize, hotels: usize) -> Vec<ServiceTally> {
        vec![
            ServiceTally {
                category: ServiceCategory::Hospitals,
                count: hospitals,
            },
            ServiceTally {
                category: ServiceCategory::Hotels,
                count: hotels,
            },
            ServiceTally {
                category: ServiceCategory::Restaurants,
                count: 0,
            },
            ServiceTally {
                category: ServiceCategory::Fuel,
                count: 0,
            },
        ]
    }

    #[test]
    fn test_low_hospitals_and_more_hotels() {
        let insights = derive_insights(&tallies(2, 5));
        assert_eq!(
            insights,
            vec![
                Insight::LowHospitalAvailability,
                Insight::TouristOrientedArea
            ]
        );
    }

    #[test]
    fn test_adequate_hospitals_only() {
        let insights = derive_insights(&tallies(5, 2));
        assert_eq!(insights, vec![Insight::AdequateHospitalCoverage]);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(
            derive_insights(&tallies(3, 0))[0],
            Insight::AdequateHospitalCoverage
        );
        assert_eq!(
            derive_insights(&tallies(2, 0))[0],
            Insight::LowHospitalAvailability
        );
    }

    #[test]
    fn test_all_zero_counts() {
        // 0 > 0 is false, so only the hospital warning fires
        let insights = derive_insights(&tallies(0, 0));
        assert_eq!(insights, vec![Insight::LowHospitalAvailability]);
    }

    #[test]
    fn test_adequate_hospitals_with_more_hotels() {
        let insights = derive_insights(&tallies(3, 4));
        assert_eq!(
            insights,
            vec![
                Insight::AdequateHospitalCoverage,
                Insight::TouristOrientedArea
            ]
        );
    }

    #[test]
    fn test_missing_categories_count_as_zero() {
        let insights = derive_insights(&[]);
        assert_eq!(insights, vec![Insight::LowHospitalAvailability]);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            Insight::LowHospitalAvailability.severity(),
            Severity::Warning
        );
        assert_eq!(Insight::AdequateHospitalCoverage.severity(), Severity::Good);
        assert_eq!(Insight::TouristOrientedArea.severity(), Severity::Note);
    }
}
