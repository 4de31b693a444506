pub mod filter;
pub mod languages;
pub mod models;

#[cfg(test)]
mod filter_test;
