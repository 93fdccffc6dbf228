//! Census results: what probing produced, per endpoint and per run.

pub mod probe_result;
pub mod result_set;
