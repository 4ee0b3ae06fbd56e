pub mod notification;
pub mod search_service;

#[cfg(test)]
pub(crate) mod fake_backend;

#[cfg(test)]
mod search_service_test;
