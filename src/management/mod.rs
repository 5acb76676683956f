mod styles;

pub use styles::StylesManager;
