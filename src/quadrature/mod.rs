//----------------------------------------
// quadrature mod
//----------------------------------------
pub mod error;
pub mod integrator;
