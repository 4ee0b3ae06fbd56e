pub mod dedup;
pub mod filter;
pub mod models;
pub mod presentation;
pub mod request;

#[cfg(test)]
mod dedup_test;
