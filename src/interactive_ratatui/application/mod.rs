pub mod debouncer;
pub mod scroll_sentinel;
pub mod search_controller;
pub mod search_service;

#[cfg(test)]
mod search_service_test;
