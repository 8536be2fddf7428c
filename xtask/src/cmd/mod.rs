pub mod preflight;
pub mod self_check;
