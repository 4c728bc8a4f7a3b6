//! Published breakpoint tables.
//!
//! Units: PM2.5, PM10, SO2 and NO2 in µg/m³, CO in mg/m³, O3 in ppm.
//! Every pollutant uses the same six AQI bands:
//! 0-50, 51-100, 101-150, 151-200, 201-300, 301-500.

use super::schema::BreakpointSegment;

const fn seg(conc_low: f64, conc_high: f64, aqi_low: u16, aqi_high: u16) -> BreakpointSegment {
    BreakpointSegment::new(conc_low, conc_high, aqi_low, aqi_high)
}

pub const PM25: [BreakpointSegment; 6] = [
    seg(0.0, 12.0, 0, 50),
    seg(12.1, 35.4, 51, 100),
    seg(35.5, 55.4, 101, 150),
    seg(55.5, 150.4, 151, 200),
    seg(150.5, 250.4, 201, 300),
    seg(250.5, 500.4, 301, 500),
];

pub const PM10: [BreakpointSegment; 6] = [
    seg(0.0, 54.0, 0, 50),
    seg(55.0, 154.0, 51, 100),
    seg(155.0, 254.0, 101, 150),
    seg(255.0, 354.0, 151, 200),
    seg(355.0, 424.0, 201, 300),
    seg(425.0, 604.0, 301, 500),
];

pub const CO: [BreakpointSegment; 6] = [
    seg(0.0, 4.4, 0, 50),
    seg(4.5, 9.4, 51, 100),
    seg(9.5, 12.4, 101, 150),
    seg(12.5, 15.4, 151, 200),
    seg(15.5, 30.4, 201, 300),
    seg(30.5, 50.4, 301, 500),
];

pub const SO2: [BreakpointSegment; 6] = [
    seg(0.0, 35.0, 0, 50),
    seg(36.0, 75.0, 51, 100),
    seg(76.0, 185.0, 101, 150),
    seg(186.0, 304.0, 151, 200),
    seg(305.0, 604.0, 201, 300),
    seg(605.0, 1004.0, 301, 500),
];

pub const NO2: [BreakpointSegment; 6] = [
    seg(0.0, 53.0, 0, 50),
    seg(54.0, 100.0, 51, 100),
    seg(101.0, 360.0, 101, 150),
    seg(361.0, 649.0, 151, 200),
    seg(650.0, 1249.0, 201, 300),
    seg(1250.0, 2049.0, 301, 500),
];

pub const O3: [BreakpointSegment; 6] = [
    seg(0.000, 0.054, 0, 50),
    seg(0.055, 0.070, 51, 100),
    seg(0.071, 0.085, 101, 150),
    seg(0.086, 0.105, 151, 200),
    seg(0.106, 0.200, 201, 300),
    seg(0.201, 0.604, 301, 500),
];
