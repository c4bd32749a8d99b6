//! UI Components

pub mod cart_lines;
pub mod edit_link;
pub mod price_summary;
pub mod sender_input;

pub use cart_lines::CartLines;
pub use edit_link::EditLink;
pub use price_summary::PriceSummary;
pub use sender_input::SenderInput;
