#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod benchmark;
mod catalog;
mod compatibility;
mod duration;
mod error;
mod exercise;
mod generator;
mod load;
mod pattern;
mod profile;
mod rate;
mod selector;
mod time_domain;
pub mod workload;
mod workout;

pub use benchmark::*;
pub use catalog::*;
pub use duration::*;
pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use load::*;
pub use pattern::*;
pub use profile::*;
pub use rate::*;
pub use selector::*;
pub use time_domain::*;
pub use workout::*;
