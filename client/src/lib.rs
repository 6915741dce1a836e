mod app;
mod canvas;
mod dom;

pub use app::run;
