//! HTTP and WebSocket route handlers.
//!
//! Protected handlers run the same guard sequence top to bottom, each step
//! returning early through `?`: credential check, then policy check, then
//! lookup. Exactly one response leaves a handler per request.

pub mod index;
pub mod patients;
pub mod users;
pub mod ws;
