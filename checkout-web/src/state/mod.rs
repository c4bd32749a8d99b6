//! Reactive application state

pub mod checkout;
