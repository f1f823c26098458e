pub mod normalizer;
pub mod params;

pub use normalizer::{
    normalise_filter, normalise_paginate, Paginate, DEFAULT_LIMIT, DEFAULT_SKIP,
    PAGINATION_PARAMS,
};
pub use params::parse_query_string;
