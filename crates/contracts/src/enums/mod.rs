pub mod unit_of_measure;

pub use unit_of_measure::UnitOfMeasure;
