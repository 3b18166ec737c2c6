//! 수집 파이프라인 모듈.

pub mod collect;
pub mod descriptor;
pub mod normalize;
pub mod persist;

pub use collect::run_collection;
pub use descriptor::{build_descriptor, validate_descriptor, ValidationOutcome};
pub use normalize::{normalize, unmatched_timestamps};
pub use persist::{persist_processed, persist_raw, run_stamp, RawArtifacts};
