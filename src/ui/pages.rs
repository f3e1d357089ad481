//! Pages module
//! Full-page views for the form application

pub mod form;
