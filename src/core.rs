pub mod catalog;
pub mod estimator;
pub mod selection;
pub mod session;
