pub mod cli;
pub mod clipboard;
pub mod lexer;
pub mod theme;
pub mod token;
pub mod view;
pub mod watch;

#[cfg(test)]
mod tests;
