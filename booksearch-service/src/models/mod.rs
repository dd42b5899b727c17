pub mod catalog;
pub mod requests;
pub mod responses;
pub mod storage;
