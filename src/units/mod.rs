//! 압력/온도 단위 정의 및 변환.

pub mod pressure;
pub mod temperature;

pub use pressure::{convert_pressure, PressureUnit, UnknownPressureUnit};
pub use temperature::{from_kelvin, to_kelvin, TemperatureUnit};
