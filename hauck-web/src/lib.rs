//! hauck-web - Web form and JSON API for the Hauck-Anderson calculator.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod error;
pub mod form;
pub mod middleware;
pub mod routes;
pub mod templates;

pub use error::WebError;
pub use form::{CalculatorForm, TestRequest};
pub use routes::{build_router, AppState};
pub use templates::{FormPage, Templates};
