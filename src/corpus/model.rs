//! Corpus container and curation operations.

use serde::{Deserialize, Serialize};

use super::intent::{Intent, Keyword, PhraseVariant, VariantKind};
use crate::error::{Result, SibylError};

/// The full set of intents under curation, in creation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCorpus {
    intents: Vec<Intent>,
}

impl TrainingCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intents, including disabled ones.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Whether the corpus has no intents.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// All intents in creation order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Enabled intents in creation order. This is the candidate set a
    /// classification call operates on.
    pub fn enabled_intents(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter().filter(|i| i.enabled)
    }

    /// Look up an intent by id.
    pub fn intent(&self, intent_id: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.id == intent_id)
    }

    fn intent_mut(&mut self, intent_id: &str) -> Result<&mut Intent> {
        self.intents
            .iter_mut()
            .find(|i| i.id == intent_id)
            .ok_or_else(|| SibylError::corpus(format!("unknown intent: {intent_id}")))
    }

    /// Create a new empty intent and return its id.
    pub fn create_intent<S: Into<String>>(&mut self, name: S) -> String {
        let intent = Intent::new(name);
        let id = intent.id.clone();
        self.intents.push(intent);
        id
    }

    /// Delete an intent and all of its variant/keyword data.
    pub fn delete_intent(&mut self, intent_id: &str) -> Result<Intent> {
        let pos = self
            .intents
            .iter()
            .position(|i| i.id == intent_id)
            .ok_or_else(|| SibylError::corpus(format!("unknown intent: {intent_id}")))?;
        Ok(self.intents.remove(pos))
    }

    /// Enable or disable an intent.
    pub fn set_enabled(&mut self, intent_id: &str, enabled: bool) -> Result<()> {
        self.intent_mut(intent_id)?.enabled = enabled;
        Ok(())
    }

    /// Set the per-intent threshold. Rejected outside [0, 1].
    pub fn set_threshold(&mut self, intent_id: &str, threshold: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SibylError::invalid_argument(format!(
                "threshold must be in [0, 1], got {threshold}"
            )));
        }
        self.intent_mut(intent_id)?.threshold = threshold;
        Ok(())
    }

    /// Add a phrase variant to one of an intent's buckets; returns the
    /// new variant's id.
    pub fn add_variant<S: Into<String>, L: Into<String>>(
        &mut self,
        intent_id: &str,
        kind: VariantKind,
        text: S,
        language: L,
    ) -> Result<String> {
        let variant = PhraseVariant::new(text, language);
        let id = variant.id.clone();
        self.intent_mut(intent_id)?.variants_mut(kind).push(variant);
        Ok(id)
    }

    /// Remove a phrase variant from one of an intent's buckets.
    pub fn remove_variant(
        &mut self,
        intent_id: &str,
        kind: VariantKind,
        variant_id: &str,
    ) -> Result<PhraseVariant> {
        let bucket = self.intent_mut(intent_id)?.variants_mut(kind);
        let pos = bucket
            .iter()
            .position(|v| v.id == variant_id)
            .ok_or_else(|| SibylError::corpus(format!("unknown variant: {variant_id}")))?;
        Ok(bucket.remove(pos))
    }

    /// Promote a staging variant to the curated bucket, making it
    /// visible to the lexical scorer. Keeps the variant's id.
    pub fn promote_variant(&mut self, intent_id: &str, variant_id: &str) -> Result<()> {
        let intent = self.intent_mut(intent_id)?;
        let pos = intent
            .staging
            .iter()
            .position(|v| v.id == variant_id)
            .ok_or_else(|| SibylError::corpus(format!("unknown staging variant: {variant_id}")))?;
        let variant = intent.staging.remove(pos);
        intent.curated.push(variant);
        Ok(())
    }

    /// Add a keyword signal to an intent.
    pub fn add_keyword<S: Into<String>>(
        &mut self,
        intent_id: &str,
        term: S,
        weight: f64,
    ) -> Result<()> {
        self.intent_mut(intent_id)?
            .keywords
            .push(Keyword::new(term, weight));
        Ok(())
    }

    /// Remove a keyword signal by term.
    pub fn remove_keyword(&mut self, intent_id: &str, term: &str) -> Result<()> {
        let keywords = &mut self.intent_mut(intent_id)?.keywords;
        let pos = keywords
            .iter()
            .position(|k| k.term == term)
            .ok_or_else(|| SibylError::corpus(format!("unknown keyword: {term}")))?;
        keywords.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_delete_intent() {
        let mut corpus = TrainingCorpus::new();
        let id = corpus.create_intent("Billing");
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.intent(&id).unwrap().name, "Billing");

        let removed = corpus.delete_intent(&id).unwrap();
        assert_eq!(removed.name, "Billing");
        assert!(corpus.is_empty());
        assert!(corpus.delete_intent(&id).is_err());
    }

    #[test]
    fn test_enabled_intents_filters_disabled() {
        let mut corpus = TrainingCorpus::new();
        let a = corpus.create_intent("A");
        let b = corpus.create_intent("B");
        corpus.set_enabled(&a, false).unwrap();

        let enabled: Vec<_> = corpus.enabled_intents().map(|i| i.id.clone()).collect();
        assert_eq!(enabled, vec![b]);
    }

    #[test]
    fn test_variant_lifecycle() {
        let mut corpus = TrainingCorpus::new();
        let intent_id = corpus.create_intent("Billing");

        let vid = corpus
            .add_variant(&intent_id, VariantKind::Staging, "send the invoice", "en")
            .unwrap();
        assert_eq!(corpus.intent(&intent_id).unwrap().staging.len(), 1);
        assert!(corpus.intent(&intent_id).unwrap().curated.is_empty());

        corpus.promote_variant(&intent_id, &vid).unwrap();
        let intent = corpus.intent(&intent_id).unwrap();
        assert!(intent.staging.is_empty());
        assert_eq!(intent.curated.len(), 1);
        assert_eq!(intent.curated[0].id, vid);

        corpus
            .remove_variant(&intent_id, VariantKind::Curated, &vid)
            .unwrap();
        assert!(corpus.intent(&intent_id).unwrap().curated.is_empty());
    }

    #[test]
    fn test_remove_variant_unknown_id() {
        let mut corpus = TrainingCorpus::new();
        let intent_id = corpus.create_intent("Billing");
        let result = corpus.remove_variant(&intent_id, VariantKind::Curated, "nope");
        assert!(result.is_err());
    }

    #[test]
    fn test_keyword_lifecycle() {
        let mut corpus = TrainingCorpus::new();
        let intent_id = corpus.create_intent("Billing");

        corpus.add_keyword(&intent_id, "fattura", 1.0).unwrap();
        assert_eq!(corpus.intent(&intent_id).unwrap().keywords.len(), 1);

        corpus.remove_keyword(&intent_id, "fattura").unwrap();
        assert!(corpus.intent(&intent_id).unwrap().keywords.is_empty());
        assert!(corpus.remove_keyword(&intent_id, "fattura").is_err());
    }

    #[test]
    fn test_threshold_bounds() {
        let mut corpus = TrainingCorpus::new();
        let intent_id = corpus.create_intent("Billing");

        corpus.set_threshold(&intent_id, 0.8).unwrap();
        assert_eq!(corpus.intent(&intent_id).unwrap().threshold, 0.8);
        assert!(corpus.set_threshold(&intent_id, 1.2).is_err());
        assert!(corpus.set_threshold(&intent_id, -0.1).is_err());
    }
}
