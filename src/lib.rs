#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]

pub mod generator;
pub mod grid;
pub mod report;
pub mod search;
pub mod totals;
