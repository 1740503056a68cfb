//! Static style-guide word lists and their compiled match patterns.
//!
//! The overused-phrase table is the merge of the Plain English Campaign
//! "A to Z of alternative words" with the stock phrase list shipped by
//! the Marked 2 proofing app. Order matters: phrases are scanned in
//! table order, so longer variants that appear earlier win the wrap.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

/// Phrases flagged as wordy or overused.
pub static OVERUSED_PHRASES: &[&str] = &[
    "an absence of", "absence of", "abundance", "accede to", "accelerate",
    "accentuate", "accommodation", "accompanying", "accomplish",
    "according to our records", "accordingly", "acknowledge",
    "acquaint yourself with", "acquiesce", "acquire", "additional",
    "adjacent", "adjustment", "admissible", "advantageous", "advise", "affix",
    "afford an opportunity", "afforded", "aforesaid", "aggregate", "aligned",
    "alleviate", "allocate", "along the lines of", "alternative",
    "alternatively", "ameliorate", "amendment", "anticipate", "apparent",
    "applicant", "application use", "appreciable", "apprise", "appropriate",
    "appropriate to", "approximately", "as a consequence of",
    "as of the date of", "as regards", "ascertain", "assemble", "assistance",
    "at an early date", "at its discretion", "at the moment",
    "at the present time", "attempt try", "attend", "attributable to",
    "authorise", "authority", "axiomatic", "beneficial", "bestow", "breach",
    "by means of", "cease", "circumvent", "clarification", "combine",
    "combined", "commence", "communicate", "competent", "compile", "complete",
    "completion", "comply with", "component", "comprises", "compulsory",
    "conceal", "concerning", "conclusion", "concur", "condition",
    "consequently", "considerable", "constitutes", "construe", "consult",
    "consumption", "contemplate", "contrary to", "correct", "correspond",
    "costs the sum of", "counter", "courteous", "cumulative", "currently",
    "customary", "deem to be", "defer", "deficiency", "delete", "demonstrate",
    "denote", "depict", "designate", "desire", "despatch", "dispatch",
    "despite the fact that", "determine", "detrimental", "difficulties",
    "diminish", "disburse", "discharge", "disclose", "disconnect",
    "discontinue", "discrete", "discuss", "disseminate", "documentation",
    "domiciled in", "dominant", "due to the fact that", "duration",
    "during which time", "dwelling", "eligible", "elucidate", "emphasise",
    "empower", "enable", "enclosed", "enclosed", "encounter", "endeavour",
    "enquire", "enquiry", "ensure", "entitlement", "envisage", "equivalent",
    "erroneous", "establish", "evaluate", "evince", "ex officio",
    "exceptionally", "excessive", "exclude", "excluding", "exclusively",
    "exempt from", "expedite", "expeditiously", "expenditure", "expire",
    "extant", "extremity", "facilitate", "factor", "failure to", "finalise",
    "following", "for the duration of ", "for the purpose of",
    "for the reason that", "formulate", "forthwith", "forward", "frequently",
    "furnish give", "further to", "furthermore", "give consideration to",
    "grant", "hereby", "herein", "hereinafter", "hereof", "hereto",
    "heretofore", "hereunder", "herewith", "hitherto", "hold in abeyance",
    "hope and trust", "illustrate", "immediately", "implement", "imply",
    "in a number of cases", "in accordance with", "in addition to",
    "in advance", "in case of", "in conjunction with", "in connection with",
    "in consequence", "in excess of", "in lieu of", "in order that",
    "in receipt of", "in relation to", "in respect of", "in the absence of",
    "in the course of", "in the event of/that",
    "in the majority of instances", "in the near future",
    "in the neighbourhood of", "in view of the fact that", "inappropriate",
    "inception", "incorporating", "incur", "indicate", "inform", "initially",
    "initiate", "insert", "instances", "intend to", "intimate",
    "irrespective of", "is of the opinion", "issue", "it is known that",
    "locality", "locate", "mandatory", "manner", "manufacture", "marginal",
    "material", "materialise", "may in the future", "merchandise", "mislay",
    "modification", "moreover", "nevertheless", "notify", "notwithstanding",
    "numerous", "obligatory", "obtain", "occasioned by", "on behalf of",
    "on numerous occasions", "on request", "on the grounds that because",
    "on the occasion that", "operate", "optimum", "option", "ordinarily",
    "otherwise", "outstanding", "owing to", "participate", "particulars",
    "per annum", "perform", "permissible", "permit", "personnel", "persons",
    "peruse", "place", "possess", "possessions", "practically", "predominant",
    "prescribe", "preserve", "previous", "principal", "prior to", "proceed",
    "procure", "profusion of", "prohibit", "projected", "prolonged",
    "promptly", "promulgate", "proportion", "provide", "provided that",
    "provisions", "proximity", "purchase", "pursuant to", "reduce",
    "reduction", "referred to as", "refers to", "regard to", "regarding",
    "regulation", "reimburse", "reiterate", "relating to about", "remain",
    "remainder", "remittance", "remuneration", "render", "report",
    "represents", "request", "require", "requirements", "reside", "residence",
    "restriction", "retain", "review", "revised", "scrutinise", "select",
    "settle", "similarly", "solely", "specified", "state", "statutory",
    "subject to", "submit", "subsequent to", "subsequent upon",
    "subsequently", "substantial", "substantially", "sufficient",
    "supplement", "supplementary", "supply", "terminate",
    "that being the case if so", "the question as to whether", "thereafter",
    "thereby", "therein", "thereof", "thereto", "thus", "to date",
    "to the extent that", "transfer", "transmit", "unavailability",
    "undernoted", "undersigned", "undertake", "uniform", "unilateral",
    "unoccupied", "until such time until", "utilisation", "utilise",
    "virtually", "visualise", "we have pleasure in", "whatsoever",
    "whensoever", "whereas", "whether or not", "with a view to",
    "with effect from", "with reference to", "with regard to",
    "with respect to", "with the minimum of delay",
    "your attention is drawn to", "zone", "a total of", "absolutely",
    "abundantly", "actually", "all things being equal", "as a matter of fact",
    "as far as I am concerned", "at the end of the day",
    "at this moment in time", "basically", "current",
    "during the period from", "each and every one", "existing", "extremely",
    "I am of the opinion that", "I would like to say",
    "I would like to take this opportunity to", "in due course", "in the end",
    "in the final analysis", "in this connection", "in total",
    "it should be understood", "last but not least", "obviously", "of course",
    "other things being equal", "pretty much", "quite", "really",
    "really quite", "regarding the", "the fact of the matter is",
    "the month of", "the months of", "to all intents and purposes",
    "to one's own mind", "very", "a large number of", "a number of",
    "accompany", "accorded", "accrue", "adjacent to", "adversely impact",
    "aforementioned", "aircraft", "all of", "already existing", "application",
    "as a means of", "as of yet", "as to", "as yet", "assemble assistance",
    "at this time", "attain", "attempt", "authority to", "authorize",
    "because of the fact that", "belated", "benefit from", "by virtue of",
    "calculate", "close proximity", "comprise", "consolidate", "constitute",
    "deduct", "depart", "due to the fact of", "each and every", "economical",
    "eliminate", "employ", "endeavor", "enumerate", "equitable", "evidenced",
    "expend", "expiration", "fabricate", "factual evidence", "feasible",
    "finalize", "first and foremost", "for the duration of", "forfeit",
    "furnish", "generate", "henceforth", "honest truth", "however",
    "if and when", "impacted", "in a timely manner", "in addition",
    "in all likelihood", "in an effort to", "in between",
    "in light of the fact that", "in many cases", "in order to",
    "in regard to", "in some instances", "in terms of", "in the event of",
    "in the event that", "in the process of", "incumbent upon", "incurred",
    "indication", "is applicable to", "is authorized to",
    "is in accordance with", "is responsible for", "it is essential",
    "jeopardise", "liaise with", "magnitude", "maximum", "methodology",
    "minimize", "minimum", "modify", "monitor", "multiple", "necessitate",
    "negligible", "not certain", "not many", "not often", "not unless",
    "not unlike", "null and void", "objective", "obligate", "on receipt of",
    "on the contrary", "on the grounds that", "on the other hand",
    "one particular", "overall", "owing to the fact that", "partially",
    "pass away", "percentage of", "pertaining to", "please find enclosed",
    "point in time", "portion", "preclude", "previously", "prioritize",
    "proficiency", "progress something", "put simply", "qualify for",
    "readily apparent", "reconsider", "refer back", "refer to", "relating to",
    "relocate", "represent", "requirement", "satisfy", "shall",
    "should you wish", "similar to", "solicit", "span across", "strategize",
    "subsequent", "successfully complete", "take pleasure in", "tenant",
    "that being the case", "therefore", "time period", "took advantage of",
    "transpire", "ultimately", "until such time", "until such time as",
    "utilization", "utilize", "validate", "variation", "various different",
    "ways and means", "whilst", "with the exception of", "witnessed",
    "you are requested", "your attention is drawn",
];

/// Copula forms flagged as weak prose.
pub static BE_VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "being", "been", "you're",
    "they're",
];

/// Common short words never counted as repeats. The be-verbs are
/// excluded from repetition counting too; they have their own pass.
static EXCLUDE_BASE: &[&str] = &[
    "the", "a", "or", "my", "and", "to", "we", "I", "for", "i", "what", "of",
    "that", "it", "you", "your", "have", "which",
];

/// Lowercased exclusion set for repeated-word detection.
pub static EXCLUDED_WORDS: Lazy<FxHashSet<String>> = Lazy::new(|| {
    EXCLUDE_BASE
        .iter()
        .chain(BE_VERBS.iter())
        .map(|w| w.to_lowercase())
        .collect()
});

/// One compiled matcher per overused phrase, case-insensitive, bounded
/// by non-word characters (end of line counts as a right boundary).
pub static OVERUSED_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    OVERUSED_PHRASES
        .iter()
        .map(|p| {
            Regex::new(&format!(r"(?i)[^\w]{}(?:[^\w]|$)", regex::escape(p)))
                .unwrap()
        })
        .collect()
});
