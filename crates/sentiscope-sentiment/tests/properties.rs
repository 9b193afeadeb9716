//! Invariants that must hold for every input, checked over a mixed corpus.

use std::sync::Arc;
use std::thread;

use sentiscope_sentiment::{
    analyze, EnhancedSentimentResult, Lexicon, NegationStage, Scorer, SentimentType,
};

const CORPUS: &[&str] = &[
    "",
    "   ",
    "\n\t",
    "This is good",
    "This is bad",
    "This is fine",
    "good bad",
    "GREAT terrible",
    "good good bad",
    "I don't like this, it's not good at all.",
    "What a wonderful, amazing, breathtaking day!",
    "Worst. Service. Ever. Terrible, awful, horrible.",
    "Café naïve Привет 東京 😊 🎉",
    "!!! ??? ...",
    "no problem",
    "well-known snake_case top10",
    "The quick brown fox jumps over the lazy dog",
];

fn scorers() -> Vec<Scorer> {
    let sample = Arc::new(Lexicon::from_entries(
        "sample",
        [("good", 3), ("bad", -3), ("great", 3), ("terrible", -5)],
    ));
    vec![
        Scorer::default(),
        Scorer::default().with_negation(NegationStage::default()),
        Scorer::new(Arc::clone(&sample)),
        Scorer::new(sample).with_negation(NegationStage::default().with_window(3)),
    ]
}

fn check_invariants(text: &str, r: &EnhancedSentimentResult, lexicon: &Lexicon) {
    let expected_kind = match r.score.signum() {
        1 => SentimentType::Positive,
        -1 => SentimentType::Negative,
        _ => SentimentType::Neutral,
    };
    assert_eq!(r.kind, expected_kind, "sign invariant for {text:?}");
    assert_eq!(r.emoji, r.kind.emoji(), "emoji for {text:?}");

    assert_eq!(
        r.words.len(),
        r.positive.len() + r.negative.len(),
        "partition invariant for {text:?}"
    );
    for word in &r.words {
        assert!(lexicon.contains(word), "{word:?} is not in the lexicon");
        assert!(r.tokens.contains(word), "{word:?} is not a token");
    }

    assert!(
        r.calculation.len() <= r.words.len(),
        "calculation larger than words for {text:?}"
    );
    for (word, weight) in &r.calculation {
        assert_ne!(*weight, 0, "zero weight recorded for {word:?}");
        if *weight > 0 {
            assert!(r.positive.contains(word), "{word:?} missing from positive");
        } else {
            assert!(r.negative.contains(word), "{word:?} missing from negative");
        }
    }

    if r.tokens.is_empty() {
        assert_eq!(r.comparative, 0.0, "comparative for {text:?}");
        assert_eq!(r.score, 0);
    } else {
        let expected = f64::from(r.score) / r.tokens.len() as f64;
        assert!(
            (r.comparative - expected).abs() < 1e-12,
            "comparative for {text:?}: {} != {expected}",
            r.comparative
        );
    }
}

#[test]
fn invariants_hold_across_corpus() {
    for scorer in scorers() {
        for text in CORPUS {
            let r = scorer.analyze(text);
            check_invariants(text, &r, scorer.lexicon());
        }
    }
}

#[test]
fn analyze_is_pure() {
    for scorer in scorers() {
        for text in CORPUS {
            assert_eq!(scorer.analyze(text), scorer.analyze(text), "for {text:?}");
        }
    }
}

#[test]
fn blank_inputs_yield_canonical_zero_result() {
    for text in ["", "   ", "\n\t "] {
        let r = analyze(text);
        assert_eq!(r.score, 0);
        assert_eq!(r.comparative, 0.0);
        assert!(r.tokens.is_empty());
        assert!(r.words.is_empty());
        assert!(r.positive.is_empty());
        assert!(r.negative.is_empty());
        assert!(r.calculation.is_empty());
        assert_eq!(r.kind, SentimentType::Neutral);
    }
}

#[test]
fn scorer_is_shareable_across_threads() {
    let scorer = Arc::new(Scorer::default());
    let expected: Vec<_> = CORPUS.iter().map(|t| scorer.analyze(t)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            thread::spawn(move || CORPUS.iter().map(|t| scorer.analyze(t)).collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn result_serializes_to_flat_json() {
    let r = analyze("good good bad");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["type"], "positive");
    assert_eq!(json["score"], 3);
    assert_eq!(json["words"], serde_json::json!(["good", "good", "bad"]));
    let back: EnhancedSentimentResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}
