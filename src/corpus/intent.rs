//! Intent aggregate and its variant/keyword collections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::normalize;

/// One example phrase attached to an intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseVariant {
    /// Opaque unique identifier.
    pub id: String,
    /// Raw phrase text as entered or generated.
    pub text: String,
    /// BCP 47 language tag (e.g. "it", "en").
    pub language: String,
}

impl PhraseVariant {
    /// Create a new variant with a generated id.
    pub fn new<S: Into<String>, L: Into<String>>(text: S, language: L) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            language: language.into(),
        }
    }
}

/// Which bucket a phrase variant lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariantKind {
    /// Human-approved example that should match the intent.
    Curated,
    /// Phrase explicitly marked as NOT belonging to the intent.
    HardNegative,
    /// Generated-but-unreviewed candidate; not used for scoring until
    /// promoted to curated.
    Staging,
}

/// A weighted lexical signal term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    /// Signal term, matched as a substring of the normalized query.
    pub term: String,
    /// User-assigned weight. Stored for the editor; the lexical scorer
    /// currently applies a flat per-keyword bonus.
    pub weight: f64,
    /// Disabled keywords contribute no bonus.
    pub enabled: bool,
}

impl Keyword {
    /// Create a new enabled keyword.
    pub fn new<S: Into<String>>(term: S, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
            enabled: true,
        }
    }
}

/// A user-defined category of utterances the dialogue should recognize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name; also used as a lexical boost signal.
    pub name: String,
    /// Per-intent confidence threshold in [0, 1]. User-editable but not
    /// read by the fusion engine; reserved for per-intent tuning.
    pub threshold: f64,
    /// Disabled intents are excluded from classification candidate sets.
    pub enabled: bool,
    /// Matching example phrases, in curation order.
    pub curated: Vec<PhraseVariant>,
    /// Phrases that must NOT match this intent.
    pub hard_negatives: Vec<PhraseVariant>,
    /// Generated candidates awaiting review.
    pub staging: Vec<PhraseVariant>,
    /// Keyword signals contributing lexical bonus.
    pub keywords: Vec<Keyword>,
}

impl Intent {
    /// Default per-intent threshold assigned at creation.
    pub const DEFAULT_THRESHOLD: f64 = 0.5;

    /// Create a new empty intent with a generated id.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            threshold: Self::DEFAULT_THRESHOLD,
            enabled: true,
            curated: Vec::new(),
            hard_negatives: Vec::new(),
            staging: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Get a variant bucket by kind.
    pub fn variants(&self, kind: VariantKind) -> &[PhraseVariant] {
        match kind {
            VariantKind::Curated => &self.curated,
            VariantKind::HardNegative => &self.hard_negatives,
            VariantKind::Staging => &self.staging,
        }
    }

    /// Get a mutable variant bucket by kind.
    pub(crate) fn variants_mut(&mut self, kind: VariantKind) -> &mut Vec<PhraseVariant> {
        match kind {
            VariantKind::Curated => &mut self.curated,
            VariantKind::HardNegative => &mut self.hard_negatives,
            VariantKind::Staging => &mut self.staging,
        }
    }

    /// Report curated phrases whose normalized text also appears in the
    /// hard-negative bucket.
    ///
    /// The scorer does not enforce the no-collision invariant; dedup is
    /// the caller's responsibility. This helper lets the editor surface
    /// collisions to the user.
    pub fn conflicting_phrases(&self) -> Vec<&PhraseVariant> {
        let negatives: Vec<String> = self
            .hard_negatives
            .iter()
            .map(|v| normalize(&v.text))
            .collect();

        self.curated
            .iter()
            .filter(|v| negatives.contains(&normalize(&v.text)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_intent_is_empty() {
        let intent = Intent::new("Richiesta fattura");
        assert_eq!(intent.name, "Richiesta fattura");
        assert_eq!(intent.threshold, Intent::DEFAULT_THRESHOLD);
        assert!(intent.enabled);
        assert!(intent.curated.is_empty());
        assert!(intent.hard_negatives.is_empty());
        assert!(intent.staging.is_empty());
        assert!(intent.keywords.is_empty());
    }

    #[test]
    fn test_variant_ids_are_unique() {
        let a = PhraseVariant::new("vorrei la fattura", "it");
        let b = PhraseVariant::new("vorrei la fattura", "it");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_conflicting_phrases_normalized_match() {
        let mut intent = Intent::new("Billing");
        intent.curated.push(PhraseVariant::new("Send my invoice!", "en"));
        intent.curated.push(PhraseVariant::new("where is my order", "en"));
        intent
            .hard_negatives
            .push(PhraseVariant::new("send my invoice", "en"));

        let conflicts = intent.conflicting_phrases();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].text, "Send my invoice!");
    }

    #[test]
    fn test_serde_camel_case() {
        let intent = Intent::new("Billing");
        let json = serde_json::to_value(&intent).unwrap();
        assert!(json.get("hardNegatives").is_some());
        assert!(json.get("hard_negatives").is_none());
    }
}
