use crate::core::FlattenedLanguageMap;

/// Build the instruction sent to the language model.
pub fn build_prompt(seed: &FlattenedLanguageMap, target_languages: &[String]) -> String {
    let languages = target_languages
        .iter()
        .map(|language| format!("\"{}\"", language))
        .collect::<Vec<_>>()
        .join(", ");

    // IndexMap serializes as a plain JSON object; this cannot fail for string keys.
    let input = serde_json::to_string_pretty(seed).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are a translation assistant for software localization. \
Your task is to translate the values of the provided JSON object.\n\
The top-level keys of the input object are language codes.\n\
Under each language there is exactly one more level: dotted translation keys mapped to their text. \
Keep every dotted key exactly as it is and do not nest objects.\n\
If a key exists in any language, it must be present in every language of the output.\n\
Translate the input into the following languages: {languages}.\n\
\n\
Input JSON:\n\
{input}\n\
\n\
Return the output as a single JSON object. Do not include any additional text or formatting."
    )
}
