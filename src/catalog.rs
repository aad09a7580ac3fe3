//! Read-only species, move, ball and AI preference tables.
//!
//! The tables are RON documents. A copy is embedded in the crate and parsed
//! once on first use; [`Catalog::load`] reads the same documents from a data
//! directory instead.

use crate::errors::{
    CatalogError, CatalogResult, MoveDataError, MoveDataResult, SpeciesDataError, SpeciesDataResult,
};
use schema::{
    Ball, BallData, BattleModification, Move, MoveData, PokemonSpecies, Preference, RuleSet,
    Species,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

pub const SPECIES_DOCUMENT: &str = "species.ron";
pub const MOVES_DOCUMENT: &str = "moves.ron";
pub const BALLS_DOCUMENT: &str = "balls.ron";
pub const MODIFICATIONS_DOCUMENT: &str = "battle_modifications.ron";

static BUILTIN: LazyLock<CatalogResult<Catalog>> = LazyLock::new(|| {
    Catalog::from_documents(CatalogDocuments {
        species: include_str!("../data/species.ron"),
        moves: include_str!("../data/moves.ron"),
        balls: include_str!("../data/balls.ron"),
        modifications: include_str!("../data/battle_modifications.ron"),
    })
});

/// Raw RON text of the four catalog tables.
#[derive(Debug, Clone, Copy)]
pub struct CatalogDocuments<'a> {
    pub species: &'a str,
    pub moves: &'a str,
    pub balls: &'a str,
    pub modifications: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: HashMap<Species, PokemonSpecies>,
    moves: HashMap<Move, MoveData>,
    balls: HashMap<Ball, BallData>,
    modifications: HashMap<RuleSet, Vec<Preference>>,
}

impl Catalog {
    /// The catalog embedded in the crate, parsed on first access.
    pub fn builtin() -> CatalogResult<&'static Catalog> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Load the catalog documents from `data_path`.
    pub fn load(data_path: &Path) -> CatalogResult<Catalog> {
        let species = read_document(data_path, SPECIES_DOCUMENT)?;
        let moves = read_document(data_path, MOVES_DOCUMENT)?;
        let balls = read_document(data_path, BALLS_DOCUMENT)?;
        let modifications = read_document(data_path, MODIFICATIONS_DOCUMENT)?;

        Self::from_documents(CatalogDocuments {
            species: &species,
            moves: &moves,
            balls: &balls,
            modifications: &modifications,
        })
    }

    pub fn from_documents(documents: CatalogDocuments<'_>) -> CatalogResult<Catalog> {
        let species: Vec<PokemonSpecies> = parse_document(SPECIES_DOCUMENT, documents.species)?;
        let moves: Vec<MoveData> = parse_document(MOVES_DOCUMENT, documents.moves)?;
        let balls: Vec<BallData> = parse_document(BALLS_DOCUMENT, documents.balls)?;
        let modifications: Vec<BattleModification> =
            parse_document(MODIFICATIONS_DOCUMENT, documents.modifications)?;

        let mut catalog = Catalog::default();
        for entry in species {
            catalog.insert_species(entry);
        }
        for entry in moves {
            catalog.insert_move(entry);
        }
        for entry in balls {
            catalog.balls.insert(entry.ball, entry);
        }
        for entry in modifications {
            catalog.modifications.insert(entry.rule_set, entry.preferences);
        }

        tracing::debug!(
            species = catalog.species.len(),
            moves = catalog.moves.len(),
            balls = catalog.balls.len(),
            rule_sets = catalog.modifications.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Add or replace a species entry. Natural learnsets are kept in level order.
    pub fn insert_species(&mut self, mut entry: PokemonSpecies) {
        entry.learnset.natural.sort_by_key(|learned| learned.level);
        self.species.insert(entry.species, entry);
    }

    /// Add or replace a move entry.
    pub fn insert_move(&mut self, entry: MoveData) {
        self.moves.insert(entry.move_, entry);
    }

    pub fn species(&self, species: Species) -> SpeciesDataResult<&PokemonSpecies> {
        self.species
            .get(&species)
            .ok_or(SpeciesDataError::SpeciesNotFound(species))
    }

    pub fn move_data(&self, move_: Move) -> MoveDataResult<&MoveData> {
        self.moves.get(&move_).ok_or(MoveDataError::MoveNotFound(move_))
    }

    /// Look a move up by its display name, e.g. `"VINE WHIP"`.
    pub fn move_by_name(&self, name: &str) -> MoveDataResult<&MoveData> {
        let move_ =
            Move::from_name(name).ok_or_else(|| MoveDataError::UnknownMoveName(name.to_string()))?;
        self.move_data(move_)
    }

    pub fn max_pp(&self, move_: Move) -> MoveDataResult<u8> {
        self.move_data(move_).map(|data| data.max_pp)
    }

    pub fn ball(&self, ball: Ball) -> CatalogResult<&BallData> {
        self.balls.get(&ball).ok_or(CatalogError::BallNotFound(ball))
    }

    /// Ordered preference list of a rule-set. Empty when the catalog has none.
    pub fn preferences(&self, rule_set: RuleSet) -> &[Preference] {
        self.modifications
            .get(&rule_set)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn read_document(data_path: &Path, document: &str) -> CatalogResult<String> {
    let path = data_path.join(document);
    fs::read_to_string(&path).map_err(|err| CatalogError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

fn parse_document<T: DeserializeOwned>(document: &str, source: &str) -> CatalogResult<T> {
    ron::from_str(source).map_err(|err| CatalogError::Parse {
        document: document.to_string(),
        reason: err.to_string(),
    })
}
