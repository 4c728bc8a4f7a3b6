pub mod breakpoints;
pub mod calc;
pub mod evaluate;
pub mod monitor;
