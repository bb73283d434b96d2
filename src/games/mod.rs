//! Game implementations.

pub mod medici;
