//! Leaf detectors, laid out by scope: `any` is language independent, other
//! modules are languages whose submodules are countries (`any` again for
//! the language-generic detectors)

pub mod any;
pub mod es;
