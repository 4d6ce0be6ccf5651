mod chain;
mod contour;
mod gait;
mod limbs;
mod lizard;
mod solver;
mod terrarium;

pub use chain::*;
pub use contour::*;
pub use gait::*;
pub use limbs::*;
pub use lizard::*;
pub use solver::*;
pub use terrarium::*;

#[cfg(test)]
mod chain_tests;



#[cfg(test)]
mod gait_tests;



#[cfg(test)]
mod terrarium_tests;
