//! PIES description-code reference data.
//!
//! Purpose texts, character budgets, and per-type authoring instructions
//! for the 17 Auto Care PIES description codes, plus the PIES language
//! code table. Every lookup is total over arbitrary input: unrecognized
//! description codes degrade to a generic purpose and a 255-character
//! budget instead of failing.

use std::str::FromStr;

use crate::models::description::DescriptionCode;

/// Character budget applied to description codes outside the known set.
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Purpose text applied to description codes outside the known set.
pub const GENERIC_PURPOSE: &str = "product description";

/// Fraction of the budget held back when instructing the backend, leaving
/// headroom for its imprecise length control.
pub const LENGTH_SAFETY_MARGIN: f64 = 0.2;

/// Semantic purpose of a description code, used verbatim in prompts and
/// catalog listings.
pub fn purpose(code: &str) -> &'static str {
    match DescriptionCode::from_str(code) {
        Ok(code) => purpose_for(code),
        Err(_) => GENERIC_PURPOSE,
    }
}

/// Maximum character count permitted for a description code.
pub fn max_length(code: &str) -> usize {
    match DescriptionCode::from_str(code) {
        Ok(code) => max_length_for(code),
        Err(_) => DEFAULT_MAX_LENGTH,
    }
}

/// The length target actually given to the backend:
/// `max_length - max_length * 0.2`.
pub fn adjusted_max_length(code: &str) -> f64 {
    let limit = max_length(code) as f64;
    limit - limit * LENGTH_SAFETY_MARGIN
}

/// Authoring instruction block for a description code. `{limit}` is
/// substituted with the adjusted budget by the prompt builder. Unknown
/// codes carry no block.
pub fn instructions(code: &str) -> Option<&'static str> {
    DescriptionCode::from_str(code).ok().map(instructions_for)
}

/// English name of a PIES language code. Unknown codes default to English.
pub fn language_name(language_code: &str) -> &'static str {
    match language_code {
        "ENGL" => "English",
        "SPAN" => "Spanish",
        "FREN" => "French",
        "GERM" => "German",
        _ => "English",
    }
}

fn purpose_for(code: DescriptionCode) -> &'static str {
    use DescriptionCode::*;
    match code {
        ShortDesc => "A brief label used when only a few characters can be displayed, providing a quick identification of the product. Use this once per part number.",
        FitSummary => "A basic summary showing general fitment details like compatible years, makes, and models (e.g., 2010-2015 Chevy Silverado). Do not include detailed fitment data here; that should be shared through ACES. For more than one fitment, repeat this code.",
        UserWarning => "Safety alerts or caution messages meant for the product user. These can be bullet points or simple statements. Each warning should be shared individually, with the option to assign a display order if needed. Also aligns with 'Caution' qualifier types in ACES Qdb.",
        FullDesc => "A complete description outlining what the product is. Only one description should be provided per part number using this code.",
        ExtendedDesc => "A detailed, extended product description giving a broader overview of the item. Use this code only once per part number.",
        FeatureBenefit => "Feature and benefit highlights explaining why the product stands out. Includes functional details or value-added characteristics. Each point should be sent separately and can be ordered using a sequence value. Supports the main marketing description.",
        ImportantInfo => "Important notes for both consumers and technicians about the product. These may be shared as single statements or grouped lists. Each entry should be provided individually. These align with 'Informational' qualifier types in ACES Qdb.",
        InstallGuide => "Helpful guidance or tips for installing the product. Do not use this for full installation instructions. Each suggestion should be sent separately, with optional display sequence. Tied to 'Installation' qualifier types in ACES Qdb.",
        InvoiceDesc => "A description used specifically for invoices to describe the product being sold. This code should only appear once per part number.",
        SearchTerms => "Keywords that help improve online search visibility for the product, including slang or common alternative terms. Provide one keyword per entry, repeating the code if needed for multiple words.",
        LabelText => "A short label description meant for packaging or shelf/bin identification. Use only once per part number.",
        MarketingCopy => "A marketing paragraph designed to promote the product on web pages. It highlights key features, benefits, and unique selling points, supported by additional FEATURE_BENEFIT statements. Use this once per part number.",
        CondensedDesc => "A shortened product description intended for use where space is limited. Use only one entry per part number.",
        AltNames => "Alternate names or search-friendly terms for the product. Share one term at a time by repeating this code as needed.",
        TitleDesc => "An SEO-focused description combining the product name with key attributes for better online search results. Provide one entry per part number using this code.",
        TechTipIntro => "An introductory paragraph for the technical tips section of a product page. Sets the stage for supporting TECH_TIP_DETAIL statements. Use only once per part number.",
        TechTipDetail => "Individual technical tips offering advice or best practices for working with the product. Share each tip separately, with optional sequencing. Supports the main TECH_TIP_INTRO description.",
    }
}

fn max_length_for(code: DescriptionCode) -> usize {
    use DescriptionCode::*;
    match code {
        ShortDesc => 12,
        FitSummary => 240,
        UserWarning => 500,
        FullDesc => 80,
        ExtendedDesc => 240,
        FeatureBenefit => 240,
        ImportantInfo => 500,
        InstallGuide => 500,
        InvoiceDesc => 40,
        SearchTerms => 80,
        LabelText => 80,
        MarketingCopy => 2000,
        CondensedDesc => 20,
        AltNames => 80,
        TitleDesc => 200,
        TechTipIntro => 2000,
        TechTipDetail => 240,
    }
}

fn instructions_for(code: DescriptionCode) -> &'static str {
    use DescriptionCode::*;
    match code {
        ShortDesc => "\
For this SHORT DESCRIPTION:
1. Create a brief label for quick product identification
2. Be extremely concise (under {limit} characters)
3. Focus only on the most essential information
4. Use abbreviated terms common in the automotive industry when necessary
5. Do not include any fitment information",
        FitSummary => "\
For this FITMENT SUMMARY:
1. Provide a basic summary of compatible years, makes, and models
2. Keep it concise and focused on primary applications
3. Example: \"2018-2022 Mitsubishi Outlander Sport (Liter: 2.0, 2.4 & Cylinder: 4 & Block: L); 2017-2019 Mitsubishi RVR (Liter: 2.0, 2.4 & Cylinder: 4 & Block: L)\"
4. Do not include any other product detail
5. Be extremely concise (under {limit} characters)",
        UserWarning => "\
For this USER WARNING:
1. Create clear safety alerts or caution messages
2. Use direct, unambiguous language about potential hazards
3. Format as bullet points or simple statements
4. Focus on critical safety information the user must know
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        FullDesc => "\
For this FULL DESCRIPTION:
1. Provide a complete description of what the product is
2. Include comprehensive details about features, materials, and purpose
3. Use professional, technical language appropriate for the industry
4. Create a thorough but concise explanation of the part
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        ExtendedDesc => "\
For this EXTENDED DESCRIPTION:
1. Create a detailed, extended overview of the product
2. Include comprehensive information about features, benefits, and applications
3. Use professional terminology with thorough explanations
4. Provide more depth than the standard description
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        FeatureBenefit => "\
For this FEATURE/BENEFIT:
1. Highlight a specific feature and its direct benefit to the customer
2. Use clear cause-and-effect language (e.g., \"Precision-engineered for longer service life\")
3. Focus on what differentiates this part from competitors
4. Emphasize value to the customer
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        ImportantInfo => "\
For this IMPORTANT INFORMATION:
1. Provide critical notes for consumers and technicians
2. Focus on non-safety information that's still essential to know
3. Use clear, direct language
4. Include information that affects usage, performance, or installation
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        InstallGuide => "\
For this INSTALLATION GUIDE:
1. Provide helpful guidance or tips for installing the product
2. Include practical advice to avoid common installation problems
3. Mention any special tools or precautions needed
4. Keep instructions concise and focused on key points
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        InvoiceDesc => "\
For this INVOICE DESCRIPTION:
1. Create a clear, concise description for invoices
2. Include essential identifying information about the part
3. Use standard industry terminology
4. Focus on what's needed for accurate billing and inventory
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        SearchTerms => "\
For this SEARCH TERMS:
1. Provide keywords that improve online search visibility
2. Include industry slang or common alternative terms
3. Focus on terms customers might use when searching
4. Keep each term relevant and specific to the product
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        LabelText => "\
For this LABEL TEXT:
1. Create a short description for packaging or shelf/bin identification
2. Be extremely concise while maintaining clarity
3. Include only the most essential identifying information
4. Use standard industry terminology
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        MarketingCopy => "\
For this MARKETING COPY:
1. Create compelling, persuasive content for web pages
2. Highlight key features, benefits, and unique selling points
3. Use engaging language that appeals to customers
4. Focus on what makes this part a good purchase decision
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        CondensedDesc => "\
For this CONDENSED DESCRIPTION:
1. Create a shortened product description for space-limited contexts
2. Include only the most important features and specifications
3. Use concise, efficient language
4. Maintain clarity while being extremely brief
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        AltNames => "\
For this ALTERNATE NAMES:
1. Provide alternate names or search-friendly terms for the product
2. Include common industry variations in terminology
3. Focus on terms customers might use when searching
4. Keep each term accurate and relevant
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        TitleDesc => "\
For this TITLE DESCRIPTION:
1. Create an SEO-focused description combining product name with key attributes
2. Format for optimal online search results
3. Include the most important specifications or features
4. Keep it concise but comprehensive for search purposes
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        TechTipIntro => "\
For this TECHNICAL TIP INTRODUCTION:
1. Create an introductory paragraph for technical tips
2. Set the context for why these tips are important
3. Use professional, knowledgeable language
4. Prepare the reader for the detailed tips that will follow
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
        TechTipDetail => "\
For this TECHNICAL TIP DETAIL:
1. Provide a specific technical tip for working with the product
2. Offer practical advice or best practices
3. Use clear, instructional language
4. Focus on helping technicians or DIY customers succeed with the part
5. Be extremely concise (under {limit} characters)
6. Do not include any fitment information",
    }
}
