//! Page modules

pub mod payment;
pub mod shipping;

pub use payment::PaymentPage;
pub use shipping::ShippingPage;
