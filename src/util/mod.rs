//----------------------------------------
// util mod
//----------------------------------------
pub mod linspace;
