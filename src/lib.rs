//----------------------------------------
// Root lib
//----------------------------------------
//! Classical numerical-analysis routines for when pulling in a full
//! scientific computing stack is overkill: fixed-node quadrature
//! (Simpson's 1/3 rule, trapezoidal rule) and a fourth-order
//! Runge-Kutta initial-value ODE stepper.

/// This module contains error types
pub mod error;
mod ode;
mod quadrature;
mod util;

pub use ode::plot::LinePlot;
pub use ode::rk4::Ode;
pub use quadrature::integrator::Integrator;
