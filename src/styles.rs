use std::collections::HashMap;

pub const DEFAULT_STYLE: &str = "fun";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePreset {
    pub prefix: String,
    pub suffix: String,
}

impl StylePreset {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

/// Immutable set of style presets, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct StyleTable {
    presets: HashMap<String, StylePreset>,
    fallback: String,
}

impl Default for StyleTable {
    fn default() -> Self {
        let mut presets = HashMap::new();
        presets.insert(
            "fun".to_string(),
            StylePreset::new(
                "vibrant, playful, colorful, whimsical, cheerful,",
                ", trending on artstation, highly detailed, sharp focus",
            ),
        );
        presets.insert(
            "artistic".to_string(),
            StylePreset::new(
                "artistic masterpiece, elegant composition, professional photography,",
                ", award winning, dramatic lighting, 8k uhd, studio quality",
            ),
        );
        presets.insert(
            "realistic".to_string(),
            StylePreset::new(
                "photorealistic, hyperrealistic, ultra detailed, cinematic,",
                ", professional photography, natural lighting, high resolution, dslr",
            ),
        );

        Self {
            presets,
            fallback: DEFAULT_STYLE.to_string(),
        }
    }
}

impl StyleTable {
    /// Builds a table from explicit presets. `fallback` must name one of them.
    pub fn new(presets: HashMap<String, StylePreset>, fallback: impl Into<String>) -> Option<Self> {
        let fallback = fallback.into();
        if !presets.contains_key(&fallback) {
            return None;
        }
        Some(Self { presets, fallback })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.presets.contains_key(key)
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn fallback_key(&self) -> &str {
        &self.fallback
    }

    /// Returns the key actually applied for `style`, falling back for unknown keys.
    pub fn resolve_key<'a>(&'a self, style: Option<&'a str>) -> &'a str {
        match style {
            Some(key) if self.contains(key) => key,
            _ => self.fallback.as_str(),
        }
    }

    pub fn resolve(&self, style: Option<&str>) -> &StylePreset {
        let key = self.resolve_key(style);
        &self.presets[key]
    }

    pub fn enhance(&self, prompt: &str, style: Option<&str>) -> String {
        let preset = self.resolve(style);
        format!("{} {} {}", preset.prefix, prompt.trim(), preset.suffix)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_styles_wrap_prompt() {
        let table = StyleTable::default();
        for key in table.keys() {
            let preset = table.resolve(Some(key)).clone();
            let enhanced = table.enhance("a red fox in the snow", Some(key));
            assert!(enhanced.starts_with(&preset.prefix), "{}", key);
            assert!(enhanced.ends_with(&preset.suffix), "{}", key);
            assert!(enhanced.contains("a red fox in the snow"));
        }
    }

    #[test]
    fn test_exact_fun_output() {
        let table = StyleTable::default();
        assert_eq!(
            table.enhance("  cat  ", Some("fun")),
            "vibrant, playful, colorful, whimsical, cheerful, cat , trending on artstation, highly detailed, sharp focus"
        );
    }

    #[test]
    fn test_unknown_or_missing_style_falls_back_to_fun() {
        let table = StyleTable::default();
        let fun = table.enhance("castle", Some("fun"));
        assert_eq!(table.enhance("castle", Some("noir")), fun);
        assert_eq!(table.enhance("castle", None), fun);
        assert_eq!(table.resolve_key(Some("")), "fun");
    }

    #[test]
    fn test_empty_fragments_are_trimmed() {
        let mut presets = HashMap::new();
        presets.insert("plain".to_string(), StylePreset::new("", ""));
        let table = StyleTable::new(presets, "plain").unwrap();
        assert_eq!(table.enhance(" moon ", None), "moon");
    }

    #[test]
    fn test_fallback_must_exist() {
        assert!(StyleTable::new(HashMap::new(), "fun").is_none());
    }

    #[test]
    fn test_keys_sorted() {
        assert_eq!(
            StyleTable::default().keys(),
            vec!["artistic", "fun", "realistic"]
        );
    }
}
