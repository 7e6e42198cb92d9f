pub mod domain;
pub mod payloads;
pub mod pipeline;
pub mod report;
pub mod traits;
pub mod verdict;
