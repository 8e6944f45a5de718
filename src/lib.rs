mod color;
pub use color::*;

mod ellipse;
pub use ellipse::*;

mod canvas;
pub use canvas::*;

mod error;
pub use error::*;

mod placeholder;
pub use placeholder::*;

mod render;
pub use render::*;

mod sink;
pub use sink::*;

mod generator;
pub use generator::*;
