//! Application constants

/// Page paths.
pub mod routes {
    pub const CART: &str = "/cart";
    pub const SHIPPING: &str = "/shipping";
    pub const PAYMENT: &str = "/payment";
    pub const CONFIRM: &str = "/confirm";
}

/// Anchors on the shipping page that edit links land on.
pub mod sections {
    pub const CONTACT: &str = "contact";
    pub const ADDRESS: &str = "address";
    pub const METHOD: &str = "method";
}
