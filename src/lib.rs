//! Payroll Engine for El Salvador
//!
//! This crate calculates a monthly payroll breakdown for an employee: gross
//! income, statutory deductions (AFP, ISSS and Renta), optional authorized
//! deductions, net salary, and the employer contributions reported alongside
//! them. Rates and the Renta bracket table are loaded from configuration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
