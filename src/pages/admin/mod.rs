//! Admin area: login and the gated dashboard

pub mod dashboard;
pub mod login;
