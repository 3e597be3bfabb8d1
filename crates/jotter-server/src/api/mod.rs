// REST API handlers
// Handlers parse the HTTP surface, delegate to the service layer, and render
// failures through the shared JSON error contract

pub mod health;
pub mod member;
pub mod note;
