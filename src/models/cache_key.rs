use super::date_window::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt;
use std::rc::Rc;

/// Fuel type selector. Opaque to this crate: only compared and forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuelType(Rc<str>);

impl FuelType {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(Rc::from(value.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FuelType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Address of one fetched price bundle.
///
/// Equality is structural: two keys built from the same calendar date and
/// fuel type are equal no matter how the date was represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    date: String,
    fuel_type: FuelType,
}

impl CacheKey {
    pub fn new(date: NaiveDate, fuel_type: &FuelType) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            fuel_type: fuel_type.clone(),
        }
    }

    /// Keys a timestamp by its calendar date in its own offset.
    pub fn from_datetime<Tz: TimeZone>(date: &DateTime<Tz>, fuel_type: &FuelType) -> Self {
        Self::new(date.date_naive(), fuel_type)
    }

    /// Date request parameter, `YYYY-MM-DD`.
    pub fn date_param(&self) -> &str {
        &self.date
    }

    pub fn fuel_type(&self) -> &FuelType {
        &self.fuel_type
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.date, self.fuel_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use std::collections::HashMap;

    #[test]
    fn test_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let key = CacheKey::new(date, &FuelType::new("E10"));

        assert_eq!(key.date_param(), "2024-03-05");
        assert_eq!(key.fuel_type().as_str(), "E10");
        assert_eq!(key.to_string(), "2024-03-05/E10");
    }

    #[test]
    fn test_key_ignores_time_zone_representation() {
        let fuel = FuelType::new("E10");
        let utc = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let cet = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 10, 9, 0, 0)
            .unwrap();

        assert_eq!(
            CacheKey::from_datetime(&utc, &fuel),
            CacheKey::from_datetime(&cet, &fuel)
        );
    }

    #[test]
    fn test_key_equality_is_structural() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let a = CacheKey::new(date, &FuelType::new("diesel"));
        let b = CacheKey::new(date, &FuelType::from("diesel"));

        let mut map = HashMap::new();
        map.insert(a, 1);
        assert_eq!(map.get(&b), Some(&1));

        assert_ne!(
            CacheKey::new(date, &FuelType::new("95")),
            CacheKey::new(date, &FuelType::new("98"))
        );
    }
}
