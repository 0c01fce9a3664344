//! Training corpus model.
//!
//! The corpus holds the user-curated training data the classifier reads:
//! one [`Intent`] aggregate per recognizable category, each owning its
//! example phrases (curated, hard-negative and staging buckets) and
//! keyword signals. Phrases have no existence outside their owning
//! intent; deleting an intent drops all of its data.
//!
//! Mutation happens only through the explicit curation operations on
//! [`TrainingCorpus`]. Classification reads the corpus without locking;
//! a read concurrent with a curation edit may observe a slightly stale
//! corpus, which is accepted behavior.

mod intent;
mod model;

pub use intent::{Intent, Keyword, PhraseVariant, VariantKind};
pub use model::TrainingCorpus;
