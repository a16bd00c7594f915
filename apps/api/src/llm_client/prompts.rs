// Cross-cutting prompt fragments shared by every generation request.

/// Closing style rules. Decision makers read the answer for a quick overview.
pub const CONCISE_STYLE_RULES: &str = "VIKTIGT:\n\
    - Var kortfattad och tydlig\n\
    - Använd bullet-punkter istället för långa texter\n\
    - Status ska vara framträdande (JA/NEJ/DELVIS)\n\
    - Bara det väsentligaste, inget onödigt\n\
    - För beslutsfattare som behöver snabb överblick";
