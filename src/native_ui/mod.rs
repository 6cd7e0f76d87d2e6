//! Native egui window for Countdown Clock

mod app;
mod refresh;
mod theme;

pub use app::run;
