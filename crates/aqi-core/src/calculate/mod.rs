pub mod engine;
pub mod outcome;

pub use engine::{assess, evaluate, individual_aqi, individual_aqi_named, SATURATED_AQI};
pub use outcome::{AqiResult, Evaluation, PollutantResult};
