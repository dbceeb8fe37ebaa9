// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Record fixtures standing in for what an external producer would hand over.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub country: String,
    pub region: String,
}

impl Location {
    #[must_use]
    pub const fn new(country: String, region: String) -> Self {
        Self { country, region }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location[country={}, region={}]", self.country, self.region)
    }
}

/// One day of past weather. Ordered by day first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weather {
    pub day: u32,
    pub temp_c: i32,
    pub precip_mm: u32,
    pub description: String,
}

impl Weather {
    #[must_use]
    pub const fn new(day: u32, temp_c: i32, precip_mm: u32, description: String) -> Self {
        Self {
            day,
            temp_c,
            precip_mm,
            description,
        }
    }

    /// Parses a `day,temp_c,precip_mm,description` line.
    ///
    /// Returns `None` for malformed lines (headers, comments, blanks).
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.splitn(4, ',');
        let day = fields.next()?.trim().parse().ok()?;
        let temp_c = fields.next()?.trim().parse().ok()?;
        let precip_mm = fields.next()?.trim().parse().ok()?;
        let description = fields.next()?.trim().to_string();
        Some(Self::new(day, temp_c, precip_mm, description))
    }
}

impl Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weather[day={}, temp_c={}, precip_mm={}, description={}]",
            self.day, self.temp_c, self.precip_mm, self.description
        )
    }
}

pub fn location_lisbon() -> Location {
    Location::new("Portugal".to_string(), "Lisboa".to_string())
}

pub fn location_porto() -> Location {
    Location::new("Portugal".to_string(), "Porto".to_string())
}

pub fn location_madrid() -> Location {
    Location::new("Spain".to_string(), "Madrid".to_string())
}

pub fn weather(day: u32, temp_c: i32, precip_mm: u32, description: &str) -> Weather {
    Weather::new(day, temp_c, precip_mm, description.to_string())
}

/// A week of past weather as a raw text body, one header line then one record per line.
pub const WEEK_BODY: &str = "\
day,temp_c,precip_mm,description
1,14,0,Sunny
2,12,3,Light rain
3,9,11,Heavy rain
4,12,0,Sunny
5,17,0,Sunny
6,17,1,Patchy rain
7,11,6,Light rain
";

/// The records encoded in [`WEEK_BODY`], in order.
pub fn week() -> Vec<Weather> {
    vec![
        weather(1, 14, 0, "Sunny"),
        weather(2, 12, 3, "Light rain"),
        weather(3, 9, 11, "Heavy rain"),
        weather(4, 12, 0, "Sunny"),
        weather(5, 17, 0, "Sunny"),
        weather(6, 17, 1, "Patchy rain"),
        weather(7, 11, 6, "Light rain"),
    ]
}
