pub mod enrichment;

pub use enrichment::{
    BoxOfficeLookup, Enrichment, MovieEnricher, BOX_OFFICE_CURRENCY, BOX_OFFICE_SOURCE,
};
