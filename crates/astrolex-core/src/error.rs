//! Error type for the fallible parts of astrolex-core.
//!
//! Query, search, cross-link and chart operations never fail; only term
//! index construction returns [`Result`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to build term index: {0}")]
    Index(#[from] fst::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
