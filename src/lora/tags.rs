// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;

/// Process-wide tag pattern, compiled once.
///
/// Group 1 is the LoRA name, group 2 the optional strength list. Names may
/// not contain `:`, `<` or `>`; matching is case-insensitive.
pub static LORA_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<lora:([^:<>]+)(?::(-?[^:<>]*))?>").expect("LoRA tag pattern is valid")
});

/// One parsed inline tag.
#[derive(Debug, Clone, PartialEq)]
pub struct LoraTag {
    /// Trimmed LoRA name as written in the prompt.
    pub name: String,
    pub strength_model: f32,
    pub strength_clip: f32,
}

/// Extract every tag from `text` without touching it.
pub fn parse_tags(text: &str) -> Vec<LoraTag> {
    LORA_TAG
        .captures_iter(text)
        .map(|caps| {
            let name = caps
                .get(1)
                .map(|g| g.as_str().trim().to_string())
                .unwrap_or_default();
            let (strength_model, strength_clip) =
                parse_strengths(caps.get(2).map(|g| g.as_str()));
            LoraTag {
                name,
                strength_model,
                strength_clip,
            }
        })
        .collect()
}

/// Strength list semantics: empty means (1, 1); one number sets both; two
/// numbers set (model, clip). Unparsable entries fall back to their default,
/// the clip default being whatever the model strength came out as.
pub(crate) fn parse_strengths(raw: Option<&str>) -> (f32, f32) {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => return (1.0, 1.0),
    };

    let parts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [] => (1.0, 1.0),
        [single] => {
            let strength = to_f32(single, 1.0);
            (strength, strength)
        }
        [model, clip, ..] => {
            let strength_model = to_f32(model, 1.0);
            let strength_clip = to_f32(clip, strength_model);
            (strength_model, strength_clip)
        }
    }
}

fn to_f32(raw: &str, default: f32) -> f32 {
    raw.trim().parse().unwrap_or(default)
}

/// Candidate filenames for resolving a tag name against the asset database,
/// in the order they should be tried: the raw name, the raw name with each
/// extension, then the same for the basename after `\`-to-`/` normalization.
pub fn candidate_names(name: &str, extensions: &[String]) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut push = |candidate: String| {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    };

    push(name.to_string());
    for ext in extensions {
        push(format!("{}{}", name, ext));
    }

    let normalized = name.replace('\\', "/");
    let base = normalized.rsplit('/').next().unwrap_or(&normalized);
    push(base.to_string());
    for ext in extensions {
        push(format!("{}{}", base, ext));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safetensors() -> Vec<String> {
        vec![".safetensors".to_string()]
    }

    #[test]
    fn bare_tag_defaults_both_strengths() {
        let tags = parse_tags("a castle <lora:detail> at dusk");
        assert_eq!(
            tags,
            vec![LoraTag {
                name: "detail".to_string(),
                strength_model: 1.0,
                strength_clip: 1.0,
            }]
        );
    }

    #[test]
    fn single_strength_sets_both() {
        let tags = parse_tags("<lora:detail:0.6>");
        assert_eq!(tags[0].strength_model, 0.6);
        assert_eq!(tags[0].strength_clip, 0.6);
    }

    #[test]
    fn strength_pair_splits_model_and_clip() {
        let tags = parse_tags("<lora:detail:0.6,0.3>");
        assert_eq!(tags[0].strength_model, 0.6);
        assert_eq!(tags[0].strength_clip, 0.3);
    }

    #[test]
    fn extra_strength_entries_are_ignored() {
        let tags = parse_tags("<lora:detail:0.6,0.3,0.9>");
        assert_eq!(tags[0].strength_model, 0.6);
        assert_eq!(tags[0].strength_clip, 0.3);
    }

    #[test]
    fn unparsable_model_strength_falls_back_to_one() {
        let tags = parse_tags("<lora:detail:abc>");
        assert_eq!(tags[0].strength_model, 1.0);
        assert_eq!(tags[0].strength_clip, 1.0);
    }

    #[test]
    fn unparsable_clip_strength_falls_back_to_model_strength() {
        let tags = parse_tags("<lora:detail:0.4,abc>");
        assert_eq!(tags[0].strength_model, 0.4);
        assert_eq!(tags[0].strength_clip, 0.4);
    }

    #[test]
    fn negative_strengths_parse() {
        let tags = parse_tags("<lora:detail:-0.5>");
        assert_eq!(tags[0].strength_model, -0.5);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tags = parse_tags("<LORA:Detail:0.8>");
        assert_eq!(tags[0].name, "Detail");
        assert_eq!(tags[0].strength_model, 0.8);
    }

    #[test]
    fn multiple_tags_parse_in_order() {
        let tags = parse_tags("<lora:a> text <lora:b:0.2>");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "a");
        assert_eq!(tags[1].name, "b");
    }

    #[test]
    fn plain_text_has_no_tags() {
        assert!(parse_tags("a castle at dusk, dramatic lighting").is_empty());
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn candidates_try_raw_name_before_basename() {
        let candidates = candidate_names("styles/detail", &safetensors());
        assert_eq!(
            candidates,
            vec![
                "styles/detail",
                "styles/detail.safetensors",
                "detail",
                "detail.safetensors",
            ]
        );
    }

    #[test]
    fn candidates_normalize_backslash_paths() {
        let candidates = candidate_names(r"styles\detail", &safetensors());
        assert!(candidates.contains(&"detail".to_string()));
        assert!(candidates.contains(&"detail.safetensors".to_string()));
    }

    #[test]
    fn candidates_dedupe_when_name_is_already_bare() {
        let candidates = candidate_names("detail", &safetensors());
        assert_eq!(candidates, vec!["detail", "detail.safetensors"]);
    }
}
