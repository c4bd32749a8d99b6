//! Browser services

pub mod storage;
