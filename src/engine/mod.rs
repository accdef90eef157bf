//! Pricing engine
//!
//! One engine for every metal, parameterised by the per-metal profile tables in
//! `config`: validation, the wastage sweep, selection, replay of saved quotes
//! and the session that ties them together.

pub mod config;
pub mod replay;
pub mod selection;
pub mod session;
pub mod sweep;
pub mod validator;

// Re-export core engine components
pub use config::{profile, MetalProfile};
pub use replay::total_for;
pub use selection::{profit_margin, Selection};
pub use session::QuoteSession;
pub use sweep::{compute, price_at};
pub use validator::validate;
