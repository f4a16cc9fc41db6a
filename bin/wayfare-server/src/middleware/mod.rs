pub mod cors;
pub mod trace;
