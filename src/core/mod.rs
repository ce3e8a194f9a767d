pub mod app;
pub mod cards;
pub mod constants;
pub mod env;
pub mod hero;
pub mod math;
pub mod particles;
pub mod pointer;
pub mod prefs;
pub mod scheduler;

pub use app::*;
pub use cards::*;
pub use constants::*;
pub use env::*;
pub use hero::*;
pub use math::*;
pub use particles::*;
pub use pointer::*;
pub use prefs::*;
pub use scheduler::*;
