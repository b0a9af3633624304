use brave_haven::sentiment::{
    self, DEFAULT_THRESHOLD, LexiconSentiment, SentimentLabel, SentimentScores, SentimentSource,
};

fn compound(text: &str) -> f64 {
    LexiconSentiment::new().polarity_scores(text).compound
}

#[test]
fn empty_text_scores_zero() {
    assert_eq!(
        LexiconSentiment::new().polarity_scores(""),
        SentimentScores::default()
    );
}

#[test]
fn labels_follow_threshold() {
    assert_eq!(sentiment::label(0.05, DEFAULT_THRESHOLD), SentimentLabel::Positive);
    assert_eq!(sentiment::label(-0.05, DEFAULT_THRESHOLD), SentimentLabel::Negative);
    assert_eq!(sentiment::label(0.049, DEFAULT_THRESHOLD), SentimentLabel::Neutral);
    assert_eq!(sentiment::label(0.0, DEFAULT_THRESHOLD), SentimentLabel::Neutral);
}

#[test]
fn polarity_of_plain_statements() {
    assert!(compound("I love this") > DEFAULT_THRESHOLD);
    assert!(compound("This is terrible") < -DEFAULT_THRESHOLD);
    assert_eq!(compound("The table is wooden"), 0.0);
}

#[test]
fn negation_flips_polarity() {
    assert!(compound("I do not love this") < 0.0);
}

#[test]
fn boosters_and_bangs_intensify() {
    let plain = compound("it is good");
    assert!(compound("it is very good") > plain);
    assert!(compound("it is good!!!") > plain);
}

#[test]
fn shouted_word_weighs_more() {
    assert!(compound("this is BAD news") < compound("this is bad news"));
}

#[test]
fn shares_sum_to_one() {
    for text in [
        "I hate this stupid thing! It's absolutely terrible!",
        "The weather is nice today.",
        "good but bad",
        "nothing here at all",
    ] {
        let s = LexiconSentiment::new().polarity_scores(text);
        assert!((s.neg + s.neu + s.pos - 1.0).abs() < 0.002, "{}: {:?}", text, s);
        assert!((-1.0..=1.0).contains(&s.compound));
    }
}
