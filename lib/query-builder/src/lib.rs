pub mod ast;
pub mod builder;
pub mod schema;

#[cfg(test)]
mod tests;
