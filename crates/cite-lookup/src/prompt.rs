use cite_types::{Language, UNKNOWN_FIELD};

/// Instruction sent to the model for one lookup
pub fn build_prompt(identifier: &str, language: Language) -> String {
    format!(
        "Search for the book details using ISBN: {identifier}.\n\
         Provide the following information in {lang}:\n\
         1. Author(s)\n\
         2. Book Title\n\
         3. Publisher\n\
         4. Publishing Location (City)\n\
         5. Publishing Year\n\
         \n\
         Return the result EXACTLY as a JSON object with these keys:\n\
         \"author\", \"title\", \"publisher\", \"location\", \"year\".\n\
         Do not include markdown formatting like ```json.\n\
         If a field is unknown, use \"{UNKNOWN_FIELD}\".",
        lang = language.prompt_name(),
    )
}
