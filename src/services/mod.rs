pub mod ai_response;
pub mod classifier;
pub mod fallback;
pub mod providers;
pub mod recommendations;
pub mod scorer;
pub mod validator;
