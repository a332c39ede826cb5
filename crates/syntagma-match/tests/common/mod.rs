//! Shared fixtures: hand-parsed phrases and documents, a deterministic
//! resource stub, and the fixture ontology.
#![allow(dead_code)]

use std::sync::Arc;

use syntagma_graph::{Document, DocumentBuilder, PosClass, TokenSpec};
use syntagma_match::{cosine_similarity, MatcherConfig, SemanticResources};
use syntagma_ontology::Ontology;

// Embedding fixtures: unit-ish vectors with known cosines against [1, 0].
pub const KING_VEC: [f32; 2] = [1.0, 0.0];
pub const QUEEN_VEC: [f32; 2] = [0.72, 0.693_975];
pub const MAN_VEC: [f32; 2] = [1.0, 0.0];
pub const PERSON_VEC: [f32; 2] = [0.552, 0.833_844];
pub const DOG_VEC: [f32; 2] = [1.0, 0.0];
pub const KITTEN_VEC: [f32; 2] = [0.72, 0.693_975];
pub const PUPPY_VEC: [f32; 2] = [0.9, 0.435_889];

/// Deterministic resources: cosine similarity plus a fixed entity-label
/// lexicon.
pub struct StubResources;

impl SemanticResources for StubResources {
    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    fn derived_stem(&self, _lemma: &str) -> Option<String> {
        None
    }

    fn entity_label_embedding(&self, label: &str) -> Option<Vec<f32>> {
        match label {
            "PERSON" => Some(PERSON_VEC.to_vec()),
            _ => None,
        }
    }
}

pub fn resources() -> Arc<dyn SemanticResources> {
    Arc::new(StubResources)
}

/// 0.82 threshold, coreference off — the word-matching configuration.
pub fn word_matching_config(root_embeddings: bool) -> MatcherConfig {
    let mut config = MatcherConfig::new("en_core_web_trf");
    config.overall_similarity_threshold = 0.82;
    config.embedding_based_matching_on_root_words = root_embeddings;
    config.perform_coreference_resolution = false;
    config
}

/// Animal fixture ontology; `symmetric` as requested.
pub fn animal_ontology(symmetric: bool) -> Ontology {
    let mut ont = Ontology::new(symmetric);
    ont.declare_hyponym("animal", "dog");
    ont.declare_hyponym("animal", "cat");
    ont.declare_hyponym("cat", "kitten");
    ont.declare_hyponym("dog", "puppy");
    ont.declare_individual("dog", "Fido");
    ont.declare_individual("cat", "Mimi Momo");
    ont.declare_synonym("cat", "cat creature");
    ont
}

// ============================================================================
// Phrases (hand parses, the way the pipeline would deliver them)
// ============================================================================

/// "A dog chases a cat"
pub fn phrase_dog_chases_cat() -> Document {
    let mut b = DocumentBuilder::new();
    let a1 = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let dog = b.push(TokenSpec::new("dog", "dog", PosClass::Noun));
    let chases = b.push(TokenSpec::new("chases", "chase", PosClass::Verb));
    let a2 = b.push(TokenSpec::new("a", "a", PosClass::Determiner));
    let cat = b.push(TokenSpec::new("cat", "cat", PosClass::Noun));
    b.dependency(chases, dog, "nsubj");
    b.dependency(chases, cat, "dobj");
    b.dependency(dog, a1, "det");
    b.dependency(cat, a2, "det");
    b.build().unwrap()
}

/// "An ENTITYPERSON chases a horse"
pub fn phrase_entityperson_chases_horse() -> Document {
    let mut b = DocumentBuilder::new();
    let an = b.push(TokenSpec::new("An", "an", PosClass::Determiner));
    let person = b.push(TokenSpec::new(
        "ENTITYPERSON",
        "ENTITYPERSON",
        PosClass::ProperNoun,
    ));
    let chases = b.push(TokenSpec::new("chases", "chase", PosClass::Verb));
    let a = b.push(TokenSpec::new("a", "a", PosClass::Determiner));
    let horse = b.push(TokenSpec::new("horse", "horse", PosClass::Noun));
    b.dependency(chases, person, "nsubj");
    b.dependency(chases, horse, "dobj");
    b.dependency(person, an, "det");
    b.dependency(horse, a, "det");
    b.build().unwrap()
}

/// "A king wakes up"
pub fn phrase_king_wakes_up() -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let king = b.push(TokenSpec::new("king", "king", PosClass::Noun).embedding(KING_VEC.to_vec()));
    let wakes = b.push(TokenSpec::new("wakes", "wake", PosClass::Verb));
    let up = b.push(TokenSpec::new("up", "up", PosClass::Particle));
    b.dependency(wakes, king, "nsubj");
    b.dependency(wakes, up, "prt");
    b.dependency(king, a, "det");
    b.build().unwrap()
}

/// "A narcissistic king"
pub fn phrase_narcissistic_king() -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let narcissistic = b.push(TokenSpec::new(
        "narcissistic",
        "narcissistic",
        PosClass::Adjective,
    ));
    let king = b.push(TokenSpec::new("king", "king", PosClass::Noun).embedding(KING_VEC.to_vec()));
    b.dependency(king, narcissistic, "amod");
    b.dependency(king, a, "det");
    b.build().unwrap()
}

/// "cat creature"
pub fn phrase_cat_creature() -> Document {
    let mut b = DocumentBuilder::new();
    let cat = b.push(TokenSpec::new("cat", "cat", PosClass::Noun));
    let creature = b.push(TokenSpec::new("creature", "creature", PosClass::Noun));
    b.dependency(creature, cat, "compound");
    b.build().unwrap()
}

/// "An ENTITYGPE"
pub fn phrase_entitygpe() -> Document {
    let mut b = DocumentBuilder::new();
    let an = b.push(TokenSpec::new("An", "an", PosClass::Determiner));
    let gpe = b.push(TokenSpec::new("ENTITYGPE", "ENTITYGPE", PosClass::ProperNoun));
    b.dependency(gpe, an, "det");
    b.build().unwrap()
}

/// "Somebody believes strongly"
pub fn phrase_somebody_believes_strongly() -> Document {
    let mut b = DocumentBuilder::new();
    let somebody = b.push(TokenSpec::new("Somebody", "somebody", PosClass::Pronoun));
    let believes = b.push(TokenSpec::new("believes", "believe", PosClass::Verb));
    let strongly =
        b.push(TokenSpec::new("strongly", "strongly", PosClass::Adverb).derived("strong"));
    b.dependency(believes, somebody, "nsubj");
    b.dependency(believes, strongly, "advmod");
    b.build().unwrap()
}

/// "A strong attraction"
pub fn phrase_strong_attraction() -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let strong = b.push(TokenSpec::new("strong", "strong", PosClass::Adjective));
    let attraction =
        b.push(TokenSpec::new("attraction", "attraction", PosClass::Noun).derived("attract"));
    b.dependency(attraction, strong, "amod");
    b.dependency(attraction, a, "det");
    b.build().unwrap()
}

/// "A <noun> goes to bed", with an optional embedding on the subject.
pub fn phrase_goes_to_bed(text: &str, lemma: &str, embedding: Option<Vec<f32>>) -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let mut subject_spec = TokenSpec::new(text, lemma, PosClass::Noun);
    if let Some(vector) = embedding {
        subject_spec = subject_spec.embedding(vector);
    }
    let subject = b.push(subject_spec);
    let goes = b.push(TokenSpec::new("goes", "go", PosClass::Verb));
    let to = b.push(TokenSpec::new("to", "to", PosClass::Adposition));
    let bed = b.push(TokenSpec::new("bed", "bed", PosClass::Noun));
    b.dependency(goes, subject, "nsubj");
    b.dependency(goes, to, "prep");
    b.dependency(to, bed, "pobj");
    b.dependency(subject, a, "det");
    b.build().unwrap()
}

/// "Mimi Momo goes to bed"
pub fn phrase_mimi_momo_goes_to_bed() -> Document {
    let mut b = DocumentBuilder::new();
    let mimi = b.push(TokenSpec::new("Mimi", "mimi", PosClass::ProperNoun));
    let momo = b.push(TokenSpec::new("Momo", "momo", PosClass::ProperNoun));
    let goes = b.push(TokenSpec::new("goes", "go", PosClass::Verb));
    let to = b.push(TokenSpec::new("to", "to", PosClass::Adposition));
    let bed = b.push(TokenSpec::new("bed", "bed", PosClass::Noun));
    b.dependency(goes, momo, "nsubj");
    b.dependency(momo, mimi, "compound");
    b.dependency(goes, to, "prep");
    b.dependency(to, bed, "pobj");
    b.build().unwrap()
}

/// "A man makes an announcement"
pub fn phrase_man_makes_announcement() -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let man = b.push(TokenSpec::new("man", "man", PosClass::Noun).embedding(MAN_VEC.to_vec()));
    let makes = b.push(TokenSpec::new("makes", "make", PosClass::Verb));
    let an = b.push(TokenSpec::new("an", "an", PosClass::Determiner));
    let announcement = b.push(TokenSpec::new(
        "announcement",
        "announcement",
        PosClass::Noun,
    ));
    b.dependency(makes, man, "nsubj");
    b.dependency(makes, announcement, "dobj");
    b.dependency(man, a, "det");
    b.dependency(announcement, an, "det");
    b.build().unwrap()
}

// ============================================================================
// Documents
// ============================================================================

/// "The dog chased the <object>"
pub fn doc_dog_chased(object_text: &str, object_lemma: &str) -> Document {
    let mut b = DocumentBuilder::new();
    let the1 = b.push(TokenSpec::new("The", "the", PosClass::Determiner));
    let dog = b.push(TokenSpec::new("dog", "dog", PosClass::Noun));
    let chased = b.push(TokenSpec::new("chased", "chase", PosClass::Verb));
    let the2 = b.push(TokenSpec::new("the", "the", PosClass::Determiner));
    let object = b.push(TokenSpec::new(object_text, object_lemma, PosClass::Noun));
    b.dependency(chased, dog, "nsubj");
    b.dependency(chased, object, "dobj");
    b.dependency(dog, the1, "det");
    b.dependency(object, the2, "det");
    b.build().unwrap()
}

/// "Richard Hudson chased the horse"
pub fn doc_richard_hudson_chased_horse() -> Document {
    let mut b = DocumentBuilder::new();
    let richard =
        b.push(TokenSpec::new("Richard", "richard", PosClass::ProperNoun).entity("PERSON"));
    let hudson = b.push(TokenSpec::new("Hudson", "hudson", PosClass::ProperNoun).entity("PERSON"));
    let chased = b.push(TokenSpec::new("chased", "chase", PosClass::Verb));
    let the = b.push(TokenSpec::new("the", "the", PosClass::Determiner));
    let horse = b.push(TokenSpec::new("horse", "horse", PosClass::Noun));
    b.dependency(chased, hudson, "nsubj");
    b.dependency(hudson, richard, "compound");
    b.dependency(chased, horse, "dobj");
    b.dependency(horse, the, "det");
    b.build().unwrap()
}

/// "The queen woke up"
pub fn doc_queen_woke_up() -> Document {
    let mut b = DocumentBuilder::new();
    let the = b.push(TokenSpec::new("The", "the", PosClass::Determiner));
    let queen =
        b.push(TokenSpec::new("queen", "queen", PosClass::Noun).embedding(QUEEN_VEC.to_vec()));
    let woke = b.push(TokenSpec::new("woke", "wake", PosClass::Verb));
    let up = b.push(TokenSpec::new("up", "up", PosClass::Particle));
    b.dependency(woke, queen, "nsubj");
    b.dependency(woke, up, "prt");
    b.dependency(queen, the, "det");
    b.build().unwrap()
}

/// "A narcissistic queen"
pub fn doc_narcissistic_queen() -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let narcissistic = b.push(TokenSpec::new(
        "narcissistic",
        "narcissistic",
        PosClass::Adjective,
    ));
    let queen =
        b.push(TokenSpec::new("queen", "queen", PosClass::Noun).embedding(QUEEN_VEC.to_vec()));
    b.dependency(queen, narcissistic, "amod");
    b.dependency(queen, a, "det");
    b.build().unwrap()
}

/// "The cat was chased by the dog"
pub fn doc_cat_was_chased_by_dog() -> Document {
    let mut b = DocumentBuilder::new();
    let the1 = b.push(TokenSpec::new("The", "the", PosClass::Determiner));
    let cat = b.push(TokenSpec::new("cat", "cat", PosClass::Noun));
    let was = b.push(TokenSpec::new("was", "be", PosClass::Auxiliary));
    let chased = b.push(TokenSpec::new("chased", "chase", PosClass::Verb));
    let by = b.push(TokenSpec::new("by", "by", PosClass::Adposition));
    let the2 = b.push(TokenSpec::new("the", "the", PosClass::Determiner));
    let dog = b.push(TokenSpec::new("dog", "dog", PosClass::Noun));
    b.dependency(chased, cat, "nsubjpass");
    b.dependency(chased, was, "auxpass");
    b.dependency(chased, by, "agent");
    b.dependency(by, dog, "pobj");
    b.dependency(dog, the2, "det");
    b.dependency(cat, the1, "det");
    b.build().unwrap()
}

/// "A strong belief"
pub fn doc_strong_belief() -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("A", "a", PosClass::Determiner));
    let strong = b.push(TokenSpec::new("strong", "strong", PosClass::Adjective));
    let belief = b.push(TokenSpec::new("belief", "belief", PosClass::Noun).derived("believe"));
    b.dependency(belief, strong, "amod");
    b.dependency(belief, a, "det");
    b.build().unwrap()
}

/// "Someone is strongly attracted"
pub fn doc_someone_strongly_attracted() -> Document {
    let mut b = DocumentBuilder::new();
    let someone = b.push(TokenSpec::new("Someone", "someone", PosClass::Pronoun));
    let is = b.push(TokenSpec::new("is", "be", PosClass::Auxiliary));
    let strongly =
        b.push(TokenSpec::new("strongly", "strongly", PosClass::Adverb).derived("strong"));
    let attracted =
        b.push(TokenSpec::new("attracted", "attract", PosClass::Verb).derived("attract"));
    b.dependency(attracted, someone, "nsubjpass");
    b.dependency(attracted, is, "auxpass");
    b.dependency(attracted, strongly, "advmod");
    b.build().unwrap()
}

/// "Richard Hudson made an announcement"
pub fn doc_richard_hudson_made_announcement() -> Document {
    let mut b = DocumentBuilder::new();
    let richard =
        b.push(TokenSpec::new("Richard", "richard", PosClass::ProperNoun).entity("PERSON"));
    let hudson = b.push(TokenSpec::new("Hudson", "hudson", PosClass::ProperNoun).entity("PERSON"));
    let made = b.push(TokenSpec::new("made", "make", PosClass::Verb));
    let an = b.push(TokenSpec::new("an", "an", PosClass::Determiner));
    let announcement = b.push(TokenSpec::new(
        "announcement",
        "announcement",
        PosClass::Noun,
    ));
    b.dependency(made, hudson, "nsubj");
    b.dependency(hudson, richard, "compound");
    b.dependency(made, announcement, "dobj");
    b.dependency(announcement, an, "det");
    b.build().unwrap()
}

/// "an <noun> goes to bed", optional embedding on the subject.
pub fn doc_goes_to_bed(text: &str, lemma: &str, embedding: Option<Vec<f32>>) -> Document {
    phrase_goes_to_bed(text, lemma, embedding)
}

/// "a cat creature goes to bed"
pub fn doc_cat_creature_goes_to_bed() -> Document {
    let mut b = DocumentBuilder::new();
    let a = b.push(TokenSpec::new("a", "a", PosClass::Determiner));
    let cat = b.push(TokenSpec::new("cat", "cat", PosClass::Noun));
    let creature = b.push(TokenSpec::new("creature", "creature", PosClass::Noun));
    let goes = b.push(TokenSpec::new("goes", "go", PosClass::Verb));
    let to = b.push(TokenSpec::new("to", "to", PosClass::Adposition));
    let bed = b.push(TokenSpec::new("bed", "bed", PosClass::Noun));
    b.dependency(goes, creature, "nsubj");
    b.dependency(creature, cat, "compound");
    b.dependency(creature, a, "det");
    b.dependency(goes, to, "prep");
    b.dependency(to, bed, "pobj");
    b.build().unwrap()
}

/// "Mimi Momo goes to bed" (as a document)
pub fn doc_mimi_momo_goes_to_bed() -> Document {
    phrase_mimi_momo_goes_to_bed()
}

/// "Fido chased Mimi Momo"
pub fn doc_fido_chased_mimi_momo() -> Document {
    let mut b = DocumentBuilder::new();
    let fido = b.push(TokenSpec::new("Fido", "fido", PosClass::ProperNoun));
    let chased = b.push(TokenSpec::new("chased", "chase", PosClass::Verb));
    let mimi = b.push(TokenSpec::new("Mimi", "mimi", PosClass::ProperNoun));
    let momo = b.push(TokenSpec::new("Momo", "momo", PosClass::ProperNoun));
    b.dependency(chased, fido, "nsubj");
    b.dependency(chased, momo, "dobj");
    b.dependency(momo, mimi, "compound");
    b.build().unwrap()
}

/// "Mallorca is a large municipality."
pub fn doc_mallorca() -> Document {
    let mut b = DocumentBuilder::new();
    let mallorca =
        b.push(TokenSpec::new("Mallorca", "mallorca", PosClass::ProperNoun).entity("GPE"));
    let is = b.push(TokenSpec::new("is", "be", PosClass::Auxiliary));
    let a = b.push(TokenSpec::new("a", "a", PosClass::Determiner));
    let large = b.push(TokenSpec::new("large", "large", PosClass::Adjective));
    let municipality = b.push(TokenSpec::new(
        "municipality",
        "municipality",
        PosClass::Noun,
    ));
    b.dependency(is, mallorca, "nsubj");
    b.dependency(is, municipality, "attr");
    b.dependency(municipality, a, "det");
    b.dependency(municipality, large, "amod");
    b.build().unwrap()
}

/// "New York is a large municipality."
pub fn doc_new_york() -> Document {
    let mut b = DocumentBuilder::new();
    let new = b.push(TokenSpec::new("New", "new", PosClass::ProperNoun).entity("GPE"));
    let york = b.push(TokenSpec::new("York", "york", PosClass::ProperNoun).entity("GPE"));
    let is = b.push(TokenSpec::new("is", "be", PosClass::Auxiliary));
    let a = b.push(TokenSpec::new("a", "a", PosClass::Determiner));
    let large = b.push(TokenSpec::new("large", "large", PosClass::Adjective));
    let municipality = b.push(TokenSpec::new(
        "municipality",
        "municipality",
        PosClass::Noun,
    ));
    b.dependency(is, york, "nsubj");
    b.dependency(york, new, "compound");
    b.dependency(is, municipality, "attr");
    b.dependency(municipality, a, "det");
    b.dependency(municipality, large, "amod");
    b.build().unwrap()
}

/// "Last week a dog chased a cat"
pub fn doc_last_week_dog_chased_cat() -> Document {
    let mut b = DocumentBuilder::new();
    let last = b.push(TokenSpec::new("Last", "last", PosClass::Adjective));
    let week = b.push(TokenSpec::new("week", "week", PosClass::Noun));
    let a1 = b.push(TokenSpec::new("a", "a", PosClass::Determiner));
    let dog = b.push(TokenSpec::new("dog", "dog", PosClass::Noun));
    let chased = b.push(TokenSpec::new("chased", "chase", PosClass::Verb));
    let a2 = b.push(TokenSpec::new("a", "a", PosClass::Determiner));
    let cat = b.push(TokenSpec::new("cat", "cat", PosClass::Noun));
    b.dependency(chased, week, "npadvmod");
    b.dependency(week, last, "amod");
    b.dependency(chased, dog, "nsubj");
    b.dependency(dog, a1, "det");
    b.dependency(chased, cat, "dobj");
    b.dependency(cat, a2, "det");
    b.build().unwrap()
}
