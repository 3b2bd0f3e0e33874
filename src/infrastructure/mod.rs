pub mod quotes;
pub mod storage;
