pub mod benchmarking;
pub mod reproducing;
