#[cfg(test)]
pub mod common;





#[cfg(test)]
mod test_battle_flow;
