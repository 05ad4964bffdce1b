pub mod drop;
pub mod loss;
pub mod merge;
pub mod sequence;
pub mod spawn;
