//----------------------------------------
// ode mod
//----------------------------------------
pub mod error;
pub mod plot;
pub mod rk4;
