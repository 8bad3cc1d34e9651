// Form/result controller and its HTTP handlers.
// The controller is the only caller of the analyzer.

pub mod controller;
pub mod handlers;
