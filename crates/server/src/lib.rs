//! HTTP front end that runs one conversion per request with the predictor's
//! fixed defaults.

pub mod api;
pub mod state;
