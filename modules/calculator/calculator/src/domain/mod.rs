pub mod error;
pub mod notifier;
pub mod service;

#[cfg(test)]
mod service_test;
