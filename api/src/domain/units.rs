//! Temperature scale conversions
//!
//! Converted scales round up to the next whole degree. The one-decimal
//! rendering applied by the caller therefore always ends in `.0` for
//! Fahrenheit and Kelvin, while Celsius keeps its measured value.

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0 + 32.0).ceil()
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    (celsius + 273.15).ceil()
}
