//! 2D point geometry and simple shape predicates.

pub(crate) mod point;
pub(crate) mod shapes;
