pub mod ai;
pub mod catch;
pub mod stats;

#[cfg(test)]
mod tests;
