pub mod catalogue;
pub mod random;
pub mod translate;
