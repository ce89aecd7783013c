pub mod glider;
pub mod icon_gen;
