//! Tone categories and their keyword lexicons.
//!
//! Every category owns a fixed, ordered list of keywords and phrases. Order
//! matters: matched keywords are reported in lexicon order, and
//! [`ToneCategory::ALL`] is the tie-break order for the dominant tone.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneCategory {
    Aggressive,
    Confident,
    Tentative,
    Analytical,
    Emotional,
    Formal,
    Casual,
    Urgent,
    Questioning,
    Supportive,
}

impl ToneCategory {
    pub const COUNT: usize = 10;

    /// Declaration order.
    pub const ALL: [ToneCategory; ToneCategory::COUNT] = [
        ToneCategory::Aggressive,
        ToneCategory::Confident,
        ToneCategory::Tentative,
        ToneCategory::Analytical,
        ToneCategory::Emotional,
        ToneCategory::Formal,
        ToneCategory::Casual,
        ToneCategory::Urgent,
        ToneCategory::Questioning,
        ToneCategory::Supportive,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToneCategory::Aggressive => "aggressive",
            ToneCategory::Confident => "confident",
            ToneCategory::Tentative => "tentative",
            ToneCategory::Analytical => "analytical",
            ToneCategory::Emotional => "emotional",
            ToneCategory::Formal => "formal",
            ToneCategory::Casual => "casual",
            ToneCategory::Urgent => "urgent",
            ToneCategory::Questioning => "questioning",
            ToneCategory::Supportive => "supportive",
        }
    }

    pub fn lexicon(self) -> &'static [&'static str] {
        match self {
            ToneCategory::Aggressive => AGGRESSIVE,
            ToneCategory::Confident => CONFIDENT,
            ToneCategory::Tentative => TENTATIVE,
            ToneCategory::Analytical => ANALYTICAL,
            ToneCategory::Emotional => EMOTIONAL,
            ToneCategory::Formal => FORMAL,
            ToneCategory::Casual => CASUAL,
            ToneCategory::Urgent => URGENT,
            ToneCategory::Questioning => QUESTIONING,
            ToneCategory::Supportive => SUPPORTIVE,
        }
    }
}

impl fmt::Display for ToneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "aggressive" -> "Aggressive"
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_start = true;
    for ch in word.chars() {
        if ch.is_alphabetic() {
            if at_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_start = false;
        } else {
            out.push(ch);
            at_start = true;
        }
    }
    out
}

const AGGRESSIVE: &[&str] = &[
    "hate", "angry", "furious", "rage", "mad", "pissed", "annoyed", "irritated",
    "stupid", "idiot", "moron", "dumb", "pathetic", "worthless", "useless",
    "damn", "hell", "shit", "fuck", "asshole", "bitch", "bastard",
    "kill", "destroy", "crush", "attack", "fight", "war", "violence",
    "disgusting", "awful", "terrible", "horrible", "nasty", "gross",
    "outraged", "livid", "enraged", "bitter", "hostile", "aggressive",
    "revenge", "hatred", "despise", "loathe", "detest", "abhor",
    "toxic", "poisonous", "vicious", "cruel", "brutal", "savage",
    "ridiculous", "absurd", "nonsense", "garbage", "trash", "crap",
];

const CONFIDENT: &[&str] = &[
    "confident", "sure", "certain", "definitely", "absolutely", "clearly",
    "obviously", "undoubtedly", "without doubt", "guaranteed", "proven",
    "strong", "powerful", "capable", "skilled", "expert", "professional",
    "determined", "decisive", "bold", "assertive", "fearless", "brave",
    "accomplished", "successful", "victorious", "triumphant", "dominant",
    "superior", "excellent", "outstanding", "exceptional", "remarkable",
    "unquestionably", "indisputable", "irrefutable", "conclusive", "final",
    "master", "champion", "winner", "leader", "authority", "specialist",
    "competent", "qualified", "experienced", "seasoned", "veteran", "ace",
    "flawless", "perfect", "impeccable", "stellar", "top-notch", "first-rate",
];

// "presumably" is listed twice and counts twice.
const TENTATIVE: &[&str] = &[
    "maybe", "perhaps", "possibly", "might", "could", "would", "should",
    "probably", "likely", "seems", "appears", "suggests", "indicates",
    "I think", "I believe", "I guess", "I suppose", "not sure", "uncertain",
    "doubtful", "hesitant", "unsure", "questionable", "debatable", "ambiguous",
    "potentially", "conceivably", "presumably", "allegedly", "supposedly", "reportedly",
    "tentatively", "provisionally", "hypothetically", "theoretically", "presumably",
    "roughly", "approximately", "around", "about", "nearly", "almost",
    "kind of", "sort of", "somewhat", "rather", "fairly", "quite",
    "I wonder", "it's possible", "hard to say", "difficult to tell", "unclear",
    "vague", "fuzzy", "blurry", "indefinite", "undecided", "on the fence",
];

const ANALYTICAL: &[&str] = &[
    "analyze", "examine", "study", "research", "investigate", "evaluate",
    "assess", "consider", "compare", "contrast", "therefore", "however",
    "furthermore", "moreover", "consequently", "thus", "hence", "because",
    "systematic", "methodical", "logical", "rational", "objective", "empirical",
    "statistical", "quantitative", "qualitative", "experimental", "theoretical",
    "hypothesis", "conclusion", "evidence", "data", "findings", "results",
    "correlation", "causation", "pattern", "trend", "analysis", "synthesis",
    "deduction", "induction", "inference", "reasoning", "calculation", "measurement",
    "observation", "classification", "categorization", "interpretation", "validation",
    "verification", "substantiate", "demonstrate", "prove", "establish", "confirm",
];

const EMOTIONAL: &[&str] = &[
    "love", "adore", "cherish", "treasure", "wonderful", "amazing",
    "fantastic", "incredible", "beautiful", "gorgeous", "stunning",
    "excited", "thrilled", "delighted", "overjoyed", "ecstatic",
    "passionate", "heartfelt", "touching", "moving", "inspiring", "uplifting",
    "joyful", "blissful", "euphoric", "elated", "cheerful", "happy",
    "grateful", "thankful", "appreciative", "blessed", "fortunate", "lucky",
    "magnificent", "spectacular", "breathtaking", "extraordinary", "phenomenal",
    "marvelous", "fabulous", "splendid", "glorious", "divine", "heavenly",
    "adorable", "charming", "delightful", "enchanting", "captivating", "mesmerizing",
    "warm", "cozy", "comfortable", "peaceful", "serene", "tranquil",
];

const FORMAL: &[&str] = &[
    "professional", "corporate", "official", "formal", "business", "executive",
    "pursuant", "heretofore", "aforementioned", "subsequent", "prior", "respective",
    "implementation", "optimization", "facilitation", "coordination", "administration",
    "regulation", "compliance", "protocol", "procedure", "policy", "guideline",
    "strategic", "tactical", "operational", "systematic", "comprehensive", "extensive",
    "substantial", "significant", "considerable", "notable", "prominent", "distinguished",
    "esteemed", "respected", "renowned", "established", "recognized", "certified",
    "authorized", "approved", "endorsed", "validated", "accredited", "licensed",
    "diplomatic", "courteous", "respectful", "appropriate", "suitable", "adequate",
    "satisfactory", "acceptable", "standard", "conventional", "traditional", "customary",
];

const CASUAL: &[&str] = &[
    "yeah", "yep", "nope", "cool", "awesome", "sweet", "nice", "dude",
    "buddy", "pal", "mate", "bro", "guy", "folks", "guys", "kidding",
    "joking", "funny", "hilarious", "crazy", "wild", "insane", "nuts",
    "totally", "absolutely", "definitely", "seriously", "literally", "basically",
    "actually", "really", "pretty", "super", "ultra", "mega", "hyper",
    "chill", "relax", "hang out", "hang around", "mess around", "fool around",
    "stuff", "things", "whatever", "anyways", "anyhow", "somehow", "somewhere",
    "gonna", "wanna", "gotta", "kinda", "sorta", "dunno", "lemme",
    "c'mon", "come on", "no way", "way to go", "right on", "far out",
];

const URGENT: &[&str] = &[
    "urgent", "emergency", "immediate", "critical", "crucial", "vital",
    "essential", "important", "priority", "deadline", "rush", "hurry",
    "quickly", "rapidly", "instantly", "immediately", "promptly", "swiftly",
    "action", "act", "do", "execute", "implement", "perform", "achieve",
    "accomplish", "complete", "finish", "solve", "fix", "resolve", "address",
    "handle", "manage", "deal with", "take care of", "attend to", "focus on",
    "concentrate", "emphasize", "stress", "highlight", "underline", "prioritize",
    "expedite", "accelerate", "speed up", "fast-track", "push forward", "advance",
    "now", "today", "asap", "right away", "at once", "without delay",
];

const QUESTIONING: &[&str] = &[
    "what", "when", "where", "why", "how", "who", "which", "whose",
    "question", "ask", "inquire", "wonder", "curious", "investigate",
    "explore", "discover", "find out", "learn", "understand", "clarify",
    "explain", "elaborate", "specify", "detail", "describe", "define",
    "puzzle", "mystery", "riddle", "enigma", "confusion", "bewilderment",
    "doubt", "skeptical", "suspicious", "questionable", "dubious", "uncertain",
    "query", "interrogate", "probe", "examine", "inspect", "scrutinize",
    "challenge", "contest", "dispute", "debate", "argue", "discuss",
    "confirm", "verify", "validate", "check", "test", "trial", "experiment",
];

const SUPPORTIVE: &[&str] = &[
    "support", "encourage", "motivate", "inspire", "boost", "uplift",
    "help", "assist", "aid", "guide", "mentor", "coach", "teach",
    "believe", "trust", "faith", "hope", "optimism", "positive", "bright",
    "promising", "potential", "capable", "talented", "gifted", "skilled",
    "congratulations", "well done", "good job", "excellent work", "bravo",
    "proud", "admire", "respect", "appreciate", "value", "honor", "praise",
    "comfort", "console", "reassure", "calm", "soothe", "peaceful", "gentle",
    "kind", "caring", "compassionate", "understanding", "empathetic", "sympathetic",
    "together", "unity", "cooperation", "collaboration", "teamwork", "partnership",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_declaration_order() {
        for (i, cat) in ToneCategory::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("aggressive"), "Aggressive");
        assert_eq!(title_case("red flag"), "Red Flag");
    }
}
