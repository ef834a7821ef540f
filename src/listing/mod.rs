mod normalizer;
mod record;
pub mod text;

pub use normalizer::ListingNormalizer;
pub use record::JobRecord;

#[cfg(test)]
mod tests;
