// Terminal front-end: the two views and the command loop that stands in for button clicks.

pub mod render;
pub mod shell;
