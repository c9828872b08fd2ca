//! Pure matching rules for live product search.
//!
//! Nothing in this crate touches the catalog or the network. It answers three questions for the
//! ranking service: which term and limit a request really asks for ([`query`]), how well a title
//! matches that term ([`scoring`], backed by [`similarity`]), and what short description text a
//! result should carry ([`snippet`]).

pub mod query;
pub mod scoring;
pub mod similarity;
pub mod snippet;
