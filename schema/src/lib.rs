// Catalog schema - the record shapes of the species, move, ball and AI tables.
// Shared by the battle core and anything that produces catalog data.

pub use battle_data::*;
pub use move_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod battle_data;
pub mod move_data;
pub mod pokemon_types;
pub mod species_data;
