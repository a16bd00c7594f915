// Prompt fragments for decision analysis.
// The composer concatenates these with the request inputs; nothing here is a
// placeholder template, so input text is never re-interpreted.

/// Role-setting opening line.
pub const ROLE_INSTRUCTION: &str = "Du är en juridisk expert som analyserar beslut om barn \
    enligt det ramverk som tillhandahölls.";

pub const FRAMEWORK_HEADING: &str = "RAMVERK FÖR PRÖVNING:";
pub const SOURCES_HEADING: &str = "JURIDISKA KÄLLOR (från databas):";
pub const DECISION_HEADING: &str = "BESLUTET SOM SKA ANALYSERAS:";

pub const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// The six evaluation criteria, in the order the model must answer them.
pub const CRITERIA: [&str; 6] = [
    "RÄTTSSÄKERHET OCH OBJEKTIVITET",
    "LAGLIGHET (RÄTTSLIG GRUND)",
    "PROPORTIONALITET OCH BEHOVSPRÖVNING",
    "BARNETS BÄSTA",
    "BARNETS DELAKTIGHET OCH RÄTT ATT KOMMA TILL TALS",
    "UTREDNING, DOKUMENTATION OCH MOTIVERING",
];

pub const ANALYSIS_INSTRUCTION: &str = "INSTRUKTION:\n\
    Analysera beslutet enligt ramverkets 6 kriterier. PRESENTERA SVARET MED TYDLIGA RUBRIKER \
    OCH KORT TEXT - INTE LÅNGA STYCKEN.\n\nFormat:";

pub const ANALYSIS_TITLE: &str = "ANALYS AV BESLUTET";

/// Per-criterion answer block. Preceded by the numbered criterion heading.
pub const CRITERION_FIELDS: &str = "Status: [JA / NEJ / DELVIS]\n\
    Finns: [Kort bullet-punkt vad som finns]\n\
    Saknas: [Kort bullet-punkt vad som saknas]\n\
    Lagrum: [Relevant lag/referens]";

pub const SUMMARY_SECTION: &str = r#"## SAMMANFATTNING

Övergripande bedömning: [En mening]

Huvudsakliga brister:
• [Brist 1]
• [Brist 2]
• [Brist 3 om applicerbar]

Konventionskonflikter:
[Artikel + praxis, t.ex. "EKMR art. 8 - Se Kutzner v. Germany"]"#;

pub const RECOMMENDATION_SECTION: &str = "## REKOMMENDATION\n\n\
    [Konkret åtgärd 1]\n\
    [Konkret åtgärd 2]\n\
    [Konkret åtgärd 3]";
