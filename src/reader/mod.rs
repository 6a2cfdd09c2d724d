// src/reader/mod.rs
mod jt_file;

pub use jt_file::JtFile;
